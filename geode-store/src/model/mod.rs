pub mod balances;
pub mod settings;
pub mod warnings;
