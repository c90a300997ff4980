use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

/// Customer with an open-receivables view: `total_due` is the outstanding
/// integer-rupiah balance, `due_date` a `YYYY-MM-DD` string.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub total_due: i64,
    #[serde(default)]
    pub due_date: String,
    pub status: ReceivableStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    Paid,
    Unpaid,
}

impl ReceivableStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReceivableStatus::Paid => "Lunas",
            ReceivableStatus::Unpaid => "Belum Lunas",
        }
    }

    /// Value used in the `status` query filter.
    pub fn as_query(self) -> &'static str {
        match self {
            ReceivableStatus::Paid => "paid",
            ReceivableStatus::Unpaid => "unpaid",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
}

impl From<&Customer> for CustomerDraft {
    fn from(record: &Customer) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            phone: record.phone.clone(),
        }
    }
}

impl Validate for CustomerDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Nama pelanggan")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_snake_case() {
        let json = serde_json::to_string(&ReceivableStatus::Unpaid).unwrap();
        assert_eq!(json, r#""unpaid""#);
        let back: ReceivableStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReceivableStatus::Unpaid);
    }
}
