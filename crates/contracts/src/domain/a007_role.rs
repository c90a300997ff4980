use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl From<&Role> for RoleDraft {
    fn from(record: &Role) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}

impl Validate for RoleDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Nama peran")
    }
}
