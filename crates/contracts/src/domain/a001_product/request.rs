use serde::{Deserialize, Serialize};

use super::aggregate::NewProduct;

/// Body of `POST /api/products`.
///
/// Every field is optional on the wire so that a missing field becomes a
/// validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProductDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    #[serde(rename = "lowStockThreshold")]
    pub low_stock_threshold: Option<i64>,
}

impl NewProductDto {
    /// Checks required fields and ranges, producing the validated product fields.
    /// `image` is the stored upload path, if the request carried one.
    pub fn validate(self, image: Option<String>) -> Result<NewProduct, String> {
        let name = non_blank(self.name);
        let category = non_blank(self.category);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if category.is_none() {
            missing.push("category");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.stock.is_none() {
            missing.push("stock");
        }
        let (Some(name), Some(category), Some(price), Some(stock)) =
            (name, category, self.price, self.stock)
        else {
            return Err(format!("Missing required fields: {}", missing.join(", ")));
        };

        if !price.is_finite() || price < 0.0 {
            return Err(format!("price must be a non-negative number, got {}", price));
        }
        let stock = non_negative("stock", stock)?;
        let low_stock_threshold = self
            .low_stock_threshold
            .map(|t| non_negative("lowStockThreshold", t))
            .transpose()?;

        Ok(NewProduct {
            name,
            category,
            description: self.description.unwrap_or_default(),
            price,
            stock,
            image,
            sku: non_blank(self.sku),
            low_stock_threshold,
        })
    }
}

/// Body of `PUT /api/products/:id/stock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStockDto {
    pub stock: i64,
}

impl UpdateStockDto {
    pub fn validate(&self) -> Result<u32, String> {
        non_negative("stock", self.stock)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn non_negative(field: &str, value: i64) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| {
        if value < 0 {
            format!("{} must not be negative, got {}", field, value)
        } else {
            format!("{} is too large, got {}", field, value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewProductDto {
        NewProductDto {
            name: Some("Yoga Mat".to_string()),
            category: Some("Sports & Outdoors".to_string()),
            description: None,
            price: Some(39.99),
            stock: Some(40),
            sku: None,
            low_stock_threshold: None,
        }
    }

    #[test]
    fn test_validate_complete_dto() {
        let fields = complete().validate(None).unwrap();
        assert_eq!(fields.name, "Yoga Mat");
        assert_eq!(fields.description, "");
        assert_eq!(fields.stock, 40);
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let dto = NewProductDto {
            name: Some("   ".to_string()),
            stock: None,
            ..complete()
        };
        let err = dto.validate(None).unwrap_err();
        assert_eq!(err, "Missing required fields: name, stock");
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let dto = NewProductDto {
            stock: Some(-1),
            ..complete()
        };
        assert!(dto.validate(None).unwrap_err().contains("stock must not be negative"));

        let dto = NewProductDto {
            price: Some(-0.5),
            ..complete()
        };
        assert!(dto.validate(None).is_err());

        let dto = NewProductDto {
            price: Some(f64::NAN),
            ..complete()
        };
        assert!(dto.validate(None).is_err());
    }

    #[test]
    fn test_zero_stock_is_accepted() {
        let dto = NewProductDto {
            stock: Some(0),
            ..complete()
        };
        assert_eq!(dto.validate(None).unwrap().stock, 0);
    }

    #[test]
    fn test_update_stock_validation() {
        assert_eq!(UpdateStockDto { stock: 0 }.validate(), Ok(0));
        assert_eq!(UpdateStockDto { stock: 12 }.validate(), Ok(12));
        assert!(UpdateStockDto { stock: -3 }.validate().is_err());
        assert!(UpdateStockDto { stock: i64::MAX }.validate().is_err());
    }
}
