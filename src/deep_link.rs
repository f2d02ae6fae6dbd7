//! `mopub://load?...` deep links
//!
//! A link names an ad unit and its format, e.g.
//! `mopub://load?adUnitId=abc&name=Banner&format=Banner&keywords=a,b`.
//! Parsing produces the record to open; saving it is up to the caller.

use std::collections::HashMap;

use thiserror::Error;

use crate::ad_format::AdFormat;
use crate::ad_unit::{AdUnitRecord, keys};

pub const SCHEME: &str = "mopub";
pub const HOST: &str = "load";
pub const FORMAT_KEY: &str = "format";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    #[error("expected a mopub:// link")]
    WrongScheme,
    #[error("expected host `load`")]
    WrongHost,
    #[error("missing `adUnitId` parameter")]
    MissingAdUnitId,
    #[error("missing `format` parameter")]
    MissingFormat,
    #[error("unknown ad format `{0}`")]
    UnknownFormat(String),
    #[error("missing `name` parameter")]
    MissingName,
}

/// A parsed deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub format: AdFormat,
    pub record: AdUnitRecord,
}

/// Parse a deep link into its format and record
pub fn parse_deep_link(url: &str) -> Result<DeepLink, DeepLinkError> {
    let (scheme, rest) = url.split_once("://").ok_or(DeepLinkError::WrongScheme)?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(DeepLinkError::WrongScheme);
    }

    // Fragment is never part of the query
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (authority, query) = rest.split_once('?').unwrap_or((rest, ""));
    let host = authority.trim_end_matches('/');
    if host != HOST {
        return Err(DeepLinkError::WrongHost);
    }

    let pairs = query_pairs(query);
    if !pairs.iter().any(|(name, _)| name == keys::ID) {
        return Err(DeepLinkError::MissingAdUnitId);
    }
    // The first `format` decides, even if repeated
    let raw_format = pairs
        .iter()
        .find(|(name, _)| name == FORMAT_KEY)
        .map(|(_, value)| value.as_str())
        .ok_or(DeepLinkError::MissingFormat)?;
    let format = AdFormat::from_str(raw_format)
        .ok_or_else(|| DeepLinkError::UnknownFormat(raw_format.to_string()))?;

    // Later duplicates win for the record fields
    let params: HashMap<String, String> = pairs.into_iter().collect();

    let record = AdUnitRecord::from_info(&params, format.rendering_view_controller())
        .ok_or(DeepLinkError::MissingName)?;

    log::debug!("Parsed deep link for {} ({})", record.id, format.as_str());
    Ok(DeepLink { format, record })
}

/// Decoded name/value pairs in query order
fn query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(name), percent_decode(value))
        })
        .collect()
}

/// Decode `%XX` escapes. `+` stays literal; malformed escapes are kept as is.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                output.push((hex_value(bytes[i + 1]) << 4) | hex_value(bytes[i + 2]));
                i += 3;
            }
            b => {
                output.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&output).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
