use crate::validate::{require, Validate};
use serde::{Deserialize, Serialize};

/// Back-office account. `username` is the natural key: updates and deletes
/// are addressed by it, and it cannot be changed once created.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub branch_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    /// `Some(username)` when editing an existing account.
    #[serde(skip_serializing)]
    pub existing: Option<String>,
    pub username: String,
    pub full_name: String,
    pub role: String,
    /// Blank means "no branch assignment".
    pub branch_id: String,
    /// Only sent on create; blank on edit keeps the current password.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl From<&User> for UserDraft {
    fn from(record: &User) -> Self {
        Self {
            existing: Some(record.username.clone()),
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            role: record.role.clone(),
            branch_id: record
                .branch_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            password: String::new(),
        }
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> Result<(), String> {
        require(&self.username, "Username")?;
        require(&self.full_name, "Nama lengkap")?;
        require(&self.role, "Peran")?;
        // Password is only required for brand-new accounts.
        if self.existing.is_none() {
            require(&self.password, "Password")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_requires_password() {
        let mut draft = UserDraft {
            username: "budi".to_string(),
            full_name: "Budi".to_string(),
            role: "kasir".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err("Password wajib diisi".to_string()));
        draft.existing = Some("budi".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_password_is_not_serialized_on_edit() {
        let draft = UserDraft {
            existing: Some("budi".to_string()),
            username: "budi".to_string(),
            full_name: "Budi".to_string(),
            role: "kasir".to_string(),
            branch_id: "2".to_string(),
            password: String::new(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("existing"));
    }
}
