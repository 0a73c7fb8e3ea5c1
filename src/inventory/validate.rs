use super::error::InventoryError;

/// Only the empty string is rejected; surrounding spaces are part of the name.
pub fn product_name(raw: String) -> Result<String, InventoryError> {
    if raw.is_empty() {
        return Err(InventoryError::EmptyName);
    }
    Ok(raw)
}

pub fn price(raw: &str) -> Result<f64, InventoryError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InventoryError::InvalidPrice(raw.to_string()))?;

    if !value.is_finite() {
        return Err(InventoryError::InvalidPrice(raw.to_string()));
    }
    if value < 0.0 {
        return Err(InventoryError::NegativePrice);
    }
    // normalizes -0.0
    Ok(value + 0.0)
}

pub fn quantity(raw: &str) -> Result<u64, InventoryError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InventoryError::InvalidQuantity(raw.to_string()))?;

    u64::try_from(value).map_err(|_| InventoryError::NegativeQuantity)
}

/// `s` (sim) in either case confirms; anything else declines.
pub fn is_confirmation(answer: &str) -> bool {
    answer.to_lowercase() == "s"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert!(matches!(product_name(String::new()), Err(InventoryError::EmptyName)));
        assert_eq!(product_name(" Pen ".to_string()).unwrap(), " Pen ");
    }

    #[test]
    fn test_price() {
        assert_eq!(price("1.50").unwrap(), 1.5);
        assert_eq!(price(" 10 ").unwrap(), 10.0);
        assert_eq!(price("1e2").unwrap(), 100.0);
        assert_eq!(price("0").unwrap(), 0.0);
        assert!(price("-0").unwrap().is_sign_positive());

        assert!(matches!(price("-1"), Err(InventoryError::NegativePrice)));
        assert!(matches!(price("abc"), Err(InventoryError::InvalidPrice(_))));
        assert!(matches!(price(""), Err(InventoryError::InvalidPrice(_))));
        assert!(matches!(price("1,50"), Err(InventoryError::InvalidPrice(_))));
        assert!(matches!(price("NaN"), Err(InventoryError::InvalidPrice(_))));
        assert!(matches!(price("inf"), Err(InventoryError::InvalidPrice(_))));
    }

    #[test]
    fn test_quantity() {
        assert_eq!(quantity("100").unwrap(), 100);
        assert_eq!(quantity(" +7 ").unwrap(), 7);
        assert_eq!(quantity("-0").unwrap(), 0);

        assert!(matches!(quantity("-3"), Err(InventoryError::NegativeQuantity)));
        assert!(matches!(quantity("abc"), Err(InventoryError::InvalidQuantity(_))));
        assert!(matches!(quantity("1.5"), Err(InventoryError::InvalidQuantity(_))));
        assert!(matches!(quantity(""), Err(InventoryError::InvalidQuantity(_))));
    }

    #[test]
    fn test_confirmation() {
        assert!(is_confirmation("s"));
        assert!(is_confirmation("S"));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation(""));
        assert!(!is_confirmation("sim"));
        assert!(!is_confirmation("y"));
    }
}
