use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Editable subset of [`Category`]. `id` is `None` for a new record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryDraft {
    fn from(record: &Category) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}

impl Validate for CategoryDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Nama kategori")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let draft = CategoryDraft::default();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn edit_draft_keeps_identity() {
        let record = Category {
            id: 7,
            name: "Sepatu".to_string(),
            description: String::new(),
        };
        let draft = CategoryDraft::from(&record);
        assert_eq!(draft.id, Some(7));
        assert!(draft.validate().is_ok());
    }
}
