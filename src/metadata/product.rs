use serde::{Deserialize, Serialize};

/// A single inventory record.
///
/// Field names on disk follow the layout of existing `produtos.json` files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Price as shown to the operator, e.g. `R$ 1.50`.
    pub fn price_label(&self) -> String {
        format!("R$ {:.2}", self.price)
    }
}
