use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reason recorded when a moderator supplies none.
pub const DEFAULT_REASON: &str = "No reason provided";

/// A single issued warning, exactly as persisted in `warnings.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarningRecord {
    pub amount: u32,
    pub reason: String,
    #[serde(rename = "by")]
    pub issued_by: String,
    #[serde(rename = "date")]
    pub issued_at: DateTime<Utc>,
}

/// Full ledger document: user id string -> warnings in issue order.
///
/// A user absent from the map has zero warnings. Removing a user's last
/// record removes the key entirely, so no empty sequences linger.
pub type WarningLedger = BTreeMap<String, Vec<WarningRecord>>;

/// Action selected by the escalation table after a warning is recorded.
///
/// The store only computes which action applies; the command layer is
/// responsible for executing it against Discord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunishmentAction {
    Timeout { seconds: u64 },
    Ban,
}
