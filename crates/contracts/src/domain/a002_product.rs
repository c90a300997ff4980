use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

/// Catalogue item. `price` is an integer amount of rupiah (the smallest
/// unit of the local currency, no decimals on the wire).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    pub price: i64,
    pub stock: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub sku: String,
    pub name: String,
    /// Kept as a string while editing; parsed on submit.
    pub category_id: String,
    pub price: String,
    pub stock: String,
}

impl From<&Product> for ProductDraft {
    fn from(record: &Product) -> Self {
        Self {
            id: Some(record.id),
            sku: record.sku.clone(),
            name: record.name.clone(),
            category_id: record.category_id.to_string(),
            price: record.price.to_string(),
            stock: record.stock.to_string(),
        }
    }
}

impl ProductDraft {
    /// Wire form of the draft, with numeric fields parsed.
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            category_id: self.category_id.parse().unwrap_or(0),
            price: self.price.trim().parse().unwrap_or(0),
            stock: self.stock.trim().parse().unwrap_or(0),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    pub category_id: i64,
    pub price: i64,
    pub stock: i64,
}

impl Validate for ProductDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.sku, "SKU")?;
        require(&self.name, "Nama produk")?;
        require(&self.category_id, "Kategori")?;
        require(&self.price, "Harga")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_sku_name_category_price() {
        let mut draft = ProductDraft::default();
        assert_eq!(draft.validate(), Err("SKU wajib diisi".to_string()));
        draft.sku = "SKU-1".to_string();
        assert_eq!(draft.validate(), Err("Nama produk wajib diisi".to_string()));
        draft.name = "Kaos Polos".to_string();
        draft.category_id = "3".to_string();
        draft.price = "45000".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn payload_parses_numeric_fields() {
        let draft = ProductDraft {
            id: None,
            sku: "SKU-1".to_string(),
            name: "Kaos".to_string(),
            category_id: "3".to_string(),
            price: "45000".to_string(),
            stock: "12".to_string(),
        };
        let payload = draft.payload();
        assert_eq!(payload.category_id, 3);
        assert_eq!(payload.price, 45_000);
        assert_eq!(payload.stock, 12);
    }
}
