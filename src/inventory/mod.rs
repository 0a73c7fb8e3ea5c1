pub mod error;
pub mod result;
pub mod validate;
pub mod operations;

pub use error::InventoryError;
pub use result::OperationResult;
pub use operations::{add_product, list_products, open_catalog, remove_product};
