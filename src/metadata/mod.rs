mod product;
mod catalog;

pub use product::Product;
pub use catalog::{Catalog, MAX_PRODUCTS};
