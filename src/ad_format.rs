//! Ad formats and the screens that render them

use serde::{Deserialize, Serialize};

/// Ad formats that can be opened from a deep link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdFormat {
    /// 320x50 banner
    Banner,
    /// Full screen interstitial
    Interstitial,
    /// 728x90 leaderboard banner
    Leaderboard,
    /// 300x250 medium rectangle banner
    MRect,
    Native,
    /// Native ads placed in a collection view
    NativeCollectionPlacer,
    /// Native ads placed in a table view
    NativeTablePlacer,
    /// Rewarded interstitial
    Rewarded,
}

impl AdFormat {
    pub const ALL: [AdFormat; 8] = [
        AdFormat::Banner,
        AdFormat::Interstitial,
        AdFormat::Leaderboard,
        AdFormat::MRect,
        AdFormat::Native,
        AdFormat::NativeCollectionPlacer,
        AdFormat::NativeTablePlacer,
        AdFormat::Rewarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdFormat::Banner => "Banner",
            AdFormat::Interstitial => "Interstitial",
            AdFormat::Leaderboard => "Leaderboard",
            AdFormat::MRect => "MRect",
            AdFormat::Native => "Native",
            AdFormat::NativeCollectionPlacer => "NativeCollectionPlacer",
            AdFormat::NativeTablePlacer => "NativeTablePlacer",
            AdFormat::Rewarded => "Rewarded",
        }
    }

    /// Parse the raw format name (case-sensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Name of the screen able to render this format
    pub fn rendering_view_controller(&self) -> &'static str {
        match self {
            AdFormat::Banner => "BannerAdViewController",
            AdFormat::Interstitial => "InterstitialAdViewController",
            AdFormat::Leaderboard => "LeaderboardAdViewController",
            AdFormat::MRect => "MediumRectangleAdViewController",
            AdFormat::Native => "NativeAdViewController",
            AdFormat::NativeCollectionPlacer => "NativeAdCollectionViewController",
            AdFormat::NativeTablePlacer => "NativeAdTableViewController",
            AdFormat::Rewarded => "RewardedAdViewController",
        }
    }
}
