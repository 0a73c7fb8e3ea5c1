pub mod cli;
pub mod config;
pub mod inventory;
pub mod metadata;
pub mod storage;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(data_file: &std::path::Path, script: &str) -> (Catalog, String) {
        let store = Store::new(data_file);
        let console = cli::Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = Cli::new(store, console).unwrap();
        session.run().unwrap();

        let catalog = session.catalog().clone();
        let output = String::from_utf8(session.into_console().into_output()).unwrap();
        (catalog, output)
    }

    #[test]
    fn test_add_list_remove_session() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join(storage::DATA_FILE_NAME);

        let script = "1\nPen\n1.50\n100\n2\n3\npen\ns\n2\n4\n";
        let (catalog, output) = run_session(&data_file, script);

        assert!(catalog.is_empty());
        assert!(output.contains("Product 'Pen' added successfully!"));
        assert!(output.contains("Total products: 1 / 50"));
        assert!(output.contains("  Name:     Pen\n  Price:    R$ 1.50\n  Quantity: 100 un."));
        assert!(output.contains("Product found: Pen (Price: R$ 1.50)"));
        assert!(output.contains("Product 'Pen' removed successfully."));

        let last_listing = output.rsplit("--- Registered Products ---").next().unwrap();
        assert!(last_listing.contains("No products registered."));

        let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&data_file).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!([]));
    }

    #[test]
    fn test_catalog_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join(storage::DATA_FILE_NAME);

        let (first, _) = run_session(&data_file, "1\nCaneta azul\n2.5\n10\n1\nCaderno\n15\n3\n4\n");
        assert_eq!(first.len(), 2);

        let (second, output) = run_session(&data_file, "2\n4\n");
        assert_eq!(second, first);
        assert_eq!(
            second.products(),
            &[Product::new("Caneta azul", 2.5, 10), Product::new("Caderno", 15.0, 3)]
        );
        assert!(output.contains("Product 2:"));
    }

    #[test]
    fn test_corrupt_data_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join(storage::DATA_FILE_NAME);
        fs::write(&data_file, "{broken").unwrap();

        let (catalog, output) = run_session(&data_file, "2\n4\n");

        assert!(catalog.is_empty());
        assert!(output.starts_with("Warning: could not read the data file"));
        assert!(output.contains("No products registered."));
    }
}

pub use cli::Cli;
pub use inventory::{InventoryError, OperationResult};
pub use metadata::{Catalog, Product, MAX_PRODUCTS};
pub use storage::{Store, StoreError};
