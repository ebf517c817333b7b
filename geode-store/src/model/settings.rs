use serde::{Deserialize, Serialize};

/// Persisted feature toggles. Field renames keep the original
/// `settings.json` keys so existing files load unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub automod: bool,
    #[serde(rename = "chatRewards", default = "default_true")]
    pub chat_rewards: bool,
    #[serde(rename = "dailyDiscount", default = "default_true")]
    pub daily_discount: bool,
    #[serde(rename = "welcomeDM", default = "default_true")]
    pub welcome_dm: bool,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            automod: true,
            chat_rewards: true,
            daily_discount: true,
            welcome_dm: true,
            currency: default_currency(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "Geo".to_owned()
}
