//! Ad unit records
//!
//! A record is what gets bookmarked in the saved ads list. Records are
//! keyed by `id`; two records with the same id are the same ad unit even if
//! the other fields differ.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Query parameter names used to build a record from a deep link
pub mod keys {
    pub const ID: &str = "adUnitId";
    pub const NAME: &str = "name";
    pub const KEYWORDS: &str = "keywords";
    pub const USER_DATA_KEYWORDS: &str = "userDataKeywords";
    pub const CUSTOM_DATA: &str = "custom_data";
    pub const OVERRIDE_CLASS: &str = "override_class";
}

/// A saved ad unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdUnitRecord {
    /// Ad unit ID as issued by the ad server
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Comma-delimited non-personal targeting keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Comma-delimited user data keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data_keywords: Option<String>,
    /// Custom data passed along with rewarded requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    /// Screen used to render this ad unit
    pub view_controller_class_name: String,
}

impl AdUnitRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        view_controller_class_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            keywords: None,
            user_data_keywords: None,
            custom_data: None,
            view_controller_class_name: view_controller_class_name.into(),
        }
    }

    /// Build a record from a parameter map.
    ///
    /// Returns `None` unless both `adUnitId` and `name` are present. The
    /// rendering class is `override_class` when given, otherwise
    /// `default_class`.
    pub fn from_info(info: &HashMap<String, String>, default_class: &str) -> Option<Self> {
        let id = info.get(keys::ID)?;
        let name = info.get(keys::NAME)?;

        Some(Self {
            id: id.clone(),
            name: name.clone(),
            keywords: info.get(keys::KEYWORDS).cloned(),
            user_data_keywords: info.get(keys::USER_DATA_KEYWORDS).cloned(),
            custom_data: info.get(keys::CUSTOM_DATA).cloned(),
            view_controller_class_name: info
                .get(keys::OVERRIDE_CLASS)
                .cloned()
                .unwrap_or_else(|| default_class.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_info_requires_id_and_name() {
        assert!(AdUnitRecord::from_info(&info(&[("name", "Banner")]), "X").is_none());
        assert!(AdUnitRecord::from_info(&info(&[("adUnitId", "abc")]), "X").is_none());
    }

    #[test]
    fn test_from_info_default_class() {
        let record = AdUnitRecord::from_info(
            &info(&[
                ("adUnitId", "abc"),
                ("name", "Banner"),
                ("keywords", "a,b"),
                ("custom_data", "cd"),
            ]),
            "BannerAdViewController",
        )
        .unwrap();

        assert_eq!(record.id, "abc");
        assert_eq!(record.keywords.as_deref(), Some("a,b"));
        assert_eq!(record.user_data_keywords, None);
        assert_eq!(record.custom_data.as_deref(), Some("cd"));
        assert_eq!(record.view_controller_class_name, "BannerAdViewController");
    }

    #[test]
    fn test_from_info_override_class() {
        let record = AdUnitRecord::from_info(
            &info(&[
                ("adUnitId", "abc"),
                ("name", "Banner"),
                ("override_class", "CustomController"),
            ]),
            "BannerAdViewController",
        )
        .unwrap();
        assert_eq!(record.view_controller_class_name, "CustomController");
    }

    #[test]
    fn test_json_field_names() {
        let mut record = AdUnitRecord::new("abc", "Banner", "BannerAdViewController");
        record.user_data_keywords = Some("u".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["userDataKeywords"], "u");
        assert_eq!(json["viewControllerClassName"], "BannerAdViewController");
        assert!(json.get("keywords").is_none());
    }

    #[test]
    fn test_json_accepts_null_optionals() {
        let json = r#"{"id":"a","name":"n","keywords":null,"viewControllerClassName":"V"}"#;
        let record: AdUnitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.keywords, None);
        assert_eq!(record.custom_data, None);
    }
}
