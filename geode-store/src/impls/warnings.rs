use chrono::{DateTime, Duration, Utc};

use crate::error::StoreError;
use crate::model::warnings::{DEFAULT_REASON, PunishmentAction, WarningRecord};
use crate::store::Store;

/// How long a warning keeps counting toward a user's active total.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

fn active_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(ACTIVE_WINDOW_DAYS)
}

/// Warnings for `user_id` issued strictly within the last 30 days, oldest
/// first (storage order).
///
/// Expiry is a view filter: older records stay on disk untouched so the
/// audit trail survives.
pub fn active_warnings(store: &Store, user_id: u64, now: DateTime<Utc>) -> Vec<WarningRecord> {
    let cutoff = active_cutoff(now);
    store.read_warnings(|ledger| {
        ledger
            .get(&user_id.to_string())
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.issued_at > cutoff)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    })
}

/// Record a warning for `user_id` and persist the ledger.
///
/// `amount` must be positive; a blank reason falls back to
/// [`DEFAULT_REASON`]. Returns the created record.
pub fn add_warning(
    store: &Store,
    user_id: u64,
    amount: u32,
    reason: &str,
    issued_by: &str,
    now: DateTime<Utc>,
) -> Result<WarningRecord, StoreError> {
    if amount == 0 {
        return Err(StoreError::InvalidAmount);
    }

    let reason = reason.trim();
    let record = WarningRecord {
        amount,
        reason: if reason.is_empty() {
            DEFAULT_REASON.to_owned()
        } else {
            reason.to_owned()
        },
        issued_by: issued_by.to_owned(),
        issued_at: now,
    };

    store.update_warnings(|ledger| {
        ledger
            .entry(user_id.to_string())
            .or_default()
            .push(record.clone());
        Ok(())
    })?;

    Ok(record)
}

/// Remove one warning by its zero-based position in the *active* view.
///
/// Display layers show 1-based positions over [`active_warnings`]; the
/// caller subtracts one and this translates the active position back to
/// the raw storage index before removing. Fails with
/// [`StoreError::NotFound`] when the user has no entry or the position is
/// out of range, leaving the ledger unchanged. Dropping the last record
/// removes the user's key entirely.
pub fn remove_warning(
    store: &Store,
    user_id: u64,
    active_index: usize,
    now: DateTime<Utc>,
) -> Result<WarningRecord, StoreError> {
    let cutoff = active_cutoff(now);
    store.update_warnings(|ledger| {
        let key = user_id.to_string();
        let records = ledger.get_mut(&key).ok_or(StoreError::NotFound)?;

        let storage_index = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.issued_at > cutoff)
            .map(|(index, _)| index)
            .nth(active_index)
            .ok_or(StoreError::NotFound)?;

        let removed = records.remove(storage_index);
        if records.is_empty() {
            ledger.remove(&key);
        }
        Ok(removed)
    })
}

/// Remove every warning for `user_id`, expired ones included. Returns the
/// number of records removed.
pub fn clear_warnings(store: &Store, user_id: u64) -> Result<usize, StoreError> {
    store.update_warnings(|ledger| {
        Ok(ledger
            .remove(&user_id.to_string())
            .map_or(0, |records| records.len()))
    })
}

/// Sum of active warning amounts for `user_id`, zero when none.
pub fn total_active_severity(store: &Store, user_id: u64, now: DateTime<Utc>) -> u64 {
    active_warnings(store, user_id, now)
        .iter()
        .map(|record| u64::from(record.amount))
        .sum()
}

/// Map a user's new active total to a punishment, if any.
///
/// Evaluated exactly once at the total reached after a warning is
/// recorded. A single large warning that jumps past intermediate totals
/// lands only on the row matching the new total; skipped tiers never fire
/// retroactively.
pub fn escalate(total_active_severity: u64) -> Option<PunishmentAction> {
    match total_active_severity {
        3 => Some(PunishmentAction::Timeout { seconds: 4 * 3_600 }),
        4 => Some(PunishmentAction::Timeout { seconds: 24 * 3_600 }),
        5 => Some(PunishmentAction::Timeout {
            seconds: 3 * 86_400,
        }),
        6 => Some(PunishmentAction::Timeout {
            seconds: 7 * 86_400,
        }),
        total if total >= 7 => Some(PunishmentAction::Ban),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use tempfile::TempDir;

    use super::{
        active_warnings, add_warning, clear_warnings, escalate, remove_warning,
        total_active_severity,
    };
    use crate::error::StoreError;
    use crate::model::warnings::{DEFAULT_REASON, PunishmentAction};
    use crate::store::Store;

    const USER: u64 = 111_222_333;

    fn open_store() -> (Store, TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::open(dir.path()).expect("open store");
        (store, dir)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).single().expect("valid timestamp")
    }

    #[test]
    fn unknown_user_has_no_warnings_and_zero_total() {
        let (store, _dir) = open_store();

        assert!(active_warnings(&store, USER, now()).is_empty());
        assert_eq!(total_active_severity(&store, USER, now()), 0);
    }

    #[test]
    fn thirty_day_expiry_boundary() {
        let (store, _dir) = open_store();
        let now = now();

        let expired_at = now - Duration::days(30) - Duration::seconds(1);
        let active_at = now - Duration::days(30) + Duration::seconds(1);
        add_warning(&store, USER, 1, "old", "mod1", expired_at).expect("add old warning");
        add_warning(&store, USER, 2, "recent", "mod1", active_at).expect("add recent warning");

        let active = active_warnings(&store, USER, now);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].reason, "recent");
        assert_eq!(total_active_severity(&store, USER, now), 2);
    }

    #[test]
    fn add_then_query_and_escalate() {
        let (store, _dir) = open_store();
        let now = now();

        let record = add_warning(&store, USER, 3, "spam", "mod1", now).expect("add warning");
        assert_eq!(record.amount, 3);

        let active = active_warnings(&store, USER, now);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].amount, 3);
        assert_eq!(active[0].reason, "spam");
        assert_eq!(active[0].issued_by, "mod1");

        assert_eq!(
            escalate(3),
            Some(PunishmentAction::Timeout { seconds: 14_400 })
        );
    }

    #[test]
    fn rejects_zero_amount() {
        let (store, _dir) = open_store();

        let result = add_warning(&store, USER, 0, "spam", "mod1", now());
        assert!(matches!(result, Err(StoreError::InvalidAmount)));
        assert!(active_warnings(&store, USER, now()).is_empty());
    }

    #[test]
    fn blank_reason_gets_placeholder() {
        let (store, _dir) = open_store();

        let record = add_warning(&store, USER, 1, "   ", "mod1", now()).expect("add warning");
        assert_eq!(record.reason, DEFAULT_REASON);
    }

    #[test]
    fn escalation_table_rows() {
        assert_eq!(escalate(0), None);
        assert_eq!(escalate(1), None);
        assert_eq!(escalate(2), None);
        assert_eq!(
            escalate(3),
            Some(PunishmentAction::Timeout { seconds: 14_400 })
        );
        assert_eq!(
            escalate(4),
            Some(PunishmentAction::Timeout { seconds: 86_400 })
        );
        assert_eq!(
            escalate(5),
            Some(PunishmentAction::Timeout { seconds: 259_200 })
        );
        assert_eq!(
            escalate(6),
            Some(PunishmentAction::Timeout { seconds: 604_800 })
        );
        assert_eq!(escalate(7), Some(PunishmentAction::Ban));
        assert_eq!(escalate(42), Some(PunishmentAction::Ban));
    }

    #[test]
    fn escalation_fires_once_at_the_new_total() {
        let (store, _dir) = open_store();
        let now = now();

        add_warning(&store, USER, 1, "first", "mod1", now).expect("add warning");
        assert_eq!(escalate(total_active_severity(&store, USER, now)), None);

        add_warning(&store, USER, 2, "second", "mod1", now).expect("add warning");
        assert_eq!(
            escalate(total_active_severity(&store, USER, now)),
            Some(PunishmentAction::Timeout { seconds: 14_400 })
        );

        // Jumping from 3 straight to 8 skips tiers 4-6 and lands on the ban
        // row only.
        add_warning(&store, USER, 5, "third", "mod1", now).expect("add warning");
        assert_eq!(
            escalate(total_active_severity(&store, USER, now)),
            Some(PunishmentAction::Ban)
        );
    }

    #[test]
    fn removing_last_record_drops_the_user_key() {
        let (store, dir) = open_store();
        let now = now();

        add_warning(&store, USER, 2, "spam", "mod1", now).expect("add warning");
        let removed = remove_warning(&store, USER, 0, now).expect("remove warning");
        assert_eq!(removed.reason, "spam");

        assert!(active_warnings(&store, USER, now).is_empty());

        let raw = std::fs::read_to_string(dir.path().join("warnings.json"))
            .expect("read warnings file");
        let doc: serde_json::Value = serde_json::from_str(&raw).expect("parse warnings file");
        let map = doc.as_object().expect("ledger is an object");
        assert!(!map.contains_key(&USER.to_string()));
    }

    #[test]
    fn remove_out_of_range_is_not_found_and_leaves_ledger_unchanged() {
        let (store, _dir) = open_store();
        let now = now();

        add_warning(&store, USER, 1, "one", "mod1", now).expect("add warning");
        add_warning(&store, USER, 1, "two", "mod1", now).expect("add warning");

        let result = remove_warning(&store, USER, 5, now);
        assert!(matches!(result, Err(StoreError::NotFound)));
        assert_eq!(active_warnings(&store, USER, now).len(), 2);

        let result = remove_warning(&store, 999, 0, now);
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[test]
    fn removal_index_is_over_the_active_view() {
        let (store, _dir) = open_store();
        let now = now();

        // Storage holds an expired record first; active position 0 must map
        // to the second stored record.
        add_warning(&store, USER, 1, "expired", "mod1", now - Duration::days(40))
            .expect("add warning");
        add_warning(&store, USER, 2, "active", "mod1", now).expect("add warning");

        let removed = remove_warning(&store, USER, 0, now).expect("remove warning");
        assert_eq!(removed.reason, "active");

        // The expired record is still physically present.
        assert!(active_warnings(&store, USER, now).is_empty());
        let kept = store.read_warnings(|ledger| ledger.get(&USER.to_string()).cloned());
        assert_eq!(kept.map(|records| records.len()), Some(1));
    }

    #[test]
    fn clear_removes_all_records_for_a_user() {
        let (store, _dir) = open_store();
        let now = now();

        add_warning(&store, USER, 1, "one", "mod1", now - Duration::days(40))
            .expect("add warning");
        add_warning(&store, USER, 1, "two", "mod1", now).expect("add warning");

        assert_eq!(clear_warnings(&store, USER).expect("clear warnings"), 2);
        assert_eq!(clear_warnings(&store, USER).expect("clear warnings"), 0);
        assert!(store.read_warnings(|ledger| !ledger.contains_key(&USER.to_string())));
    }

    #[test]
    fn ledger_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let now = now();

        let users = [(1_u64, 3_u32), (2, 5), (3, 1)];
        {
            let store = Store::open(dir.path()).expect("open store");
            for (user, amount) in users {
                add_warning(&store, user, amount, "spam", "mod1", now).expect("add warning");
            }
        }

        let reopened = Store::open(dir.path()).expect("reopen store");
        for (user, amount) in users {
            let active = active_warnings(&reopened, user, now);
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].amount, amount);
            assert_eq!(active[0].issued_at, now);
            assert_eq!(
                total_active_severity(&reopened, user, now),
                u64::from(amount)
            );
        }
    }
}
