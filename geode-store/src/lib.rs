pub mod error;
pub mod impls;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use store::Store;
