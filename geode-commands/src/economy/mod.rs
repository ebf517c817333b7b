pub mod balance;
pub mod buy;
pub mod catalog;
pub mod shop;
