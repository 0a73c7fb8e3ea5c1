use std::io;
use thiserror::Error;
use crate::metadata::MAX_PRODUCTS;

/// Rejections raised by catalog operations. None of them mutate the catalog.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Limit of {} products reached. Cannot add more.", MAX_PRODUCTS)]
    LimitReached,
    #[error("The name cannot be empty.")]
    EmptyName,
    #[error("Invalid price '{0}'. Enter a number (e.g. 10.50).")]
    InvalidPrice(String),
    #[error("The price cannot be negative.")]
    NegativePrice,
    #[error("Invalid quantity '{0}'. Enter a whole number (e.g. 100).")]
    InvalidQuantity(String),
    #[error("The quantity cannot be negative.")]
    NegativeQuantity,
    #[error("No products registered to remove.")]
    EmptyCatalog,
    #[error("Product named '{0}' not found.")]
    NotFound(String),
    #[error("{0}")]
    Input(#[from] io::Error),
}

impl InventoryError {
    /// Validation failures, as opposed to I/O trouble while prompting.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, InventoryError::Input(_))
    }
}
