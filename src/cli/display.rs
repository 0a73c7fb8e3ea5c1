use std::io::{self, BufRead, Write};
use crate::inventory::{InventoryError, OperationResult};
use crate::metadata::{Product, MAX_PRODUCTS};
use super::console::Console;

const DIVIDER_WIDTH: usize = 40;

pub fn display_result<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: &OperationResult,
) -> io::Result<()> {
    match result {
        OperationResult::Added(product) => {
            console.say(format!("Product '{}' added successfully!", product.name))
        }
        OperationResult::Listing(products) => display_listing(console, products),
        OperationResult::Removed(product) => {
            console.say(format!("Product '{}' removed successfully.", product.name))
        }
        OperationResult::RemovalCancelled => console.say("Removal cancelled."),
    }
}

pub fn display_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: &InventoryError,
) -> io::Result<()> {
    if error.is_rejection() {
        console.say(format!("Error: {}", error))
    } else {
        console.say(format!("\nAn unexpected error occurred: {}", error))
    }
}

fn display_listing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    products: &[Product],
) -> io::Result<()> {
    console.say("\n--- Registered Products ---")?;
    if products.is_empty() {
        return console.say("No products registered.");
    }

    let divider = "-".repeat(DIVIDER_WIDTH);
    console.say(format!("Total products: {} / {}", products.len(), MAX_PRODUCTS))?;
    console.say(&divider)?;
    for (i, product) in products.iter().enumerate() {
        console.say(format!("Product {}:", i + 1))?;
        console.say(format!("  Name:     {}", product.name))?;
        console.say(format!("  Price:    {}", product.price_label()))?;
        console.say(format!("  Quantity: {} un.", product.quantity))?;
        console.say(&divider)?;
    }
    Ok(())
}
