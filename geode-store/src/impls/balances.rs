use crate::error::StoreError;
use crate::store::Store;

/// Current balance for `user_id`, zero when the user has never earned.
pub fn balance(store: &Store, user_id: u64) -> i64 {
    store.read_balances(|book| book.get(&user_id.to_string()).copied().unwrap_or(0))
}

/// Adjust a balance by `delta` and persist. Returns the new balance.
pub fn add_balance(store: &Store, user_id: u64, delta: i64) -> Result<i64, StoreError> {
    store.update_balances(|book| {
        let entry = book.entry(user_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(delta);
        Ok(*entry)
    })
}

/// Deduct `cost` if the user can afford it. Returns the remaining balance,
/// or [`StoreError::InsufficientFunds`] without touching the book.
pub fn try_spend(store: &Store, user_id: u64, cost: i64) -> Result<i64, StoreError> {
    store.update_balances(|book| {
        let key = user_id.to_string();
        let balance = book.get(&key).copied().unwrap_or(0);
        if balance < cost {
            return Err(StoreError::InsufficientFunds { balance, cost });
        }

        let remaining = balance - cost;
        book.insert(key, remaining);
        Ok(remaining)
    })
}

#[cfg(test)]
mod tests {
    use super::{add_balance, balance, try_spend};
    use crate::error::StoreError;
    use crate::store::Store;

    const USER: u64 = 42;

    #[test]
    fn unknown_user_has_zero_balance() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::open(dir.path()).expect("open store");

        assert_eq!(balance(&store, USER), 0);
    }

    #[test]
    fn balances_accumulate_and_survive_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let store = Store::open(dir.path()).expect("open store");
            assert_eq!(add_balance(&store, USER, 2).expect("credit"), 2);
            assert_eq!(add_balance(&store, USER, 3).expect("credit"), 5);
        }

        let reopened = Store::open(dir.path()).expect("reopen store");
        assert_eq!(balance(&reopened, USER), 5);
    }

    #[test]
    fn spending_more_than_the_balance_fails_cleanly() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::open(dir.path()).expect("open store");

        add_balance(&store, USER, 100).expect("credit");
        let result = try_spend(&store, USER, 250);
        assert!(matches!(
            result,
            Err(StoreError::InsufficientFunds {
                balance: 100,
                cost: 250
            })
        ));
        assert_eq!(balance(&store, USER), 100);

        assert_eq!(try_spend(&store, USER, 60).expect("spend"), 40);
        assert_eq!(balance(&store, USER), 40);
    }
}
