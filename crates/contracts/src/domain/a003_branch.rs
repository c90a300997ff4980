use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl From<&Branch> for BranchDraft {
    fn from(record: &Branch) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            address: record.address.clone(),
            phone: record.phone.clone(),
        }
    }
}

impl Validate for BranchDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Nama cabang")?;
        require(&self.address, "Alamat")
    }
}
