use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Distributor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributorDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub address: String,
}

impl From<&Distributor> for DistributorDraft {
    fn from(record: &Distributor) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            contact_person: record.contact_person.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
        }
    }
}

impl Validate for DistributorDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Nama distributor")?;
        require(&self.phone, "Telepon")
    }
}
