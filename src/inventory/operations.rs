use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use crate::cli::Console;
use crate::metadata::{Catalog, Product};
use crate::storage::Store;
use super::error::InventoryError;
use super::result::OperationResult;
use super::validate;

/// Loads the catalog, falling back to an empty one when the data file
/// cannot be read or parsed.
pub fn open_catalog<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> io::Result<Catalog> {
    match store.load() {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            warn!(error = %e, "could not load catalog, starting empty");
            console.say(format!("Warning: could not read the data file ({}). Starting with an empty list.", e))?;
            Ok(Catalog::new())
        }
    }
}

/// Writes the catalog out. A failed save is reported but leaves the
/// in-memory catalog as it is.
fn persist<R: BufRead, W: Write>(
    catalog: &Catalog,
    store: &Store,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if let Err(e) = store.save(catalog) {
        warn!(error = %e, "could not save catalog");
        console.say(format!("Warning: failed to save data to file ({}).", e))?;
    }
    Ok(())
}

pub fn add_product<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    store: &Store,
    console: &mut Console<R, W>,
) -> Result<OperationResult, InventoryError> {
    if catalog.is_full() {
        return Err(InventoryError::LimitReached);
    }

    console.say("\n--- Add New Product ---")?;
    let name = validate::product_name(console.prompt("Product name: ")?)?;
    let price = validate::price(&console.prompt("Unit price (R$): ")?)?;
    let quantity = validate::quantity(&console.prompt("Stock quantity: ")?)?;

    let product = Product::new(name, price, quantity);
    catalog.push(product.clone());
    persist(catalog, store, console)?;

    info!(name = %product.name, total = catalog.len(), "product added");
    Ok(OperationResult::Added(product))
}

pub fn list_products(catalog: &Catalog) -> OperationResult {
    OperationResult::Listing(catalog.products().to_vec())
}

pub fn remove_product<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    store: &Store,
    console: &mut Console<R, W>,
) -> Result<OperationResult, InventoryError> {
    console.say("\n--- Remove Product ---")?;
    if catalog.is_empty() {
        return Err(InventoryError::EmptyCatalog);
    }

    let name = console.prompt("Enter the exact name of the product to remove: ")?;
    let index = catalog
        .position_by_name(&name)
        .ok_or_else(|| InventoryError::NotFound(name.clone()))?;

    if let Some(found) = catalog.get(index) {
        console.say(format!("Product found: {} (Price: {})", found.name, found.price_label()))?;
    }
    let answer = console.prompt("Are you sure you want to remove this product? (s/n): ")?;
    if !validate::is_confirmation(&answer) {
        return Ok(OperationResult::RemovalCancelled);
    }

    let removed = catalog
        .remove(index)
        .ok_or_else(|| InventoryError::NotFound(name.clone()))?;
    persist(catalog, store, console)?;

    info!(name = %removed.name, total = catalog.len(), "product removed");
    Ok(OperationResult::Removed(removed))
}
