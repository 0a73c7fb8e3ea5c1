use crate::metadata::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Added(Product),
    Listing(Vec<Product>),
    Removed(Product),
    RemovalCancelled,
}
