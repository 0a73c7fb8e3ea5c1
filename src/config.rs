use std::path::PathBuf;
use clap::Parser;
use crate::storage::Store;

/// Console stock manager for a small product list.
#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about)]
pub struct Args {
    /// Product data file. Defaults to produtos.json next to the executable.
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl Args {
    pub fn store(&self) -> Store {
        match &self.data_file {
            Some(path) => Store::new(path.clone()),
            None => Store::beside_executable(),
        }
    }
}
