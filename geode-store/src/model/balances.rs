use std::collections::BTreeMap;

/// Balance document: user id string -> currency total.
pub type BalanceBook = BTreeMap<String, i64>;
