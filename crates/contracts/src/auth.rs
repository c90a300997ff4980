use serde::{Deserialize, Serialize};

/// The two role spellings that unlock the administrative menu tree.
const ADMIN_ROLES: [&str; 2] = ["admin", "administrator"];

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload: an opaque session token plus the profile the
/// shell needs (display name and role for menu selection).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

/// Session persisted for the lifetime of the browser tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub token: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

impl SessionUser {
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            username: response.username,
            full_name: response.full_name,
            role: response.role,
        }
    }

    /// Role comparison is case-insensitive and accepts both admin spellings.
    pub fn is_admin(&self) -> bool {
        let role = self.role.trim().to_lowercase();
        ADMIN_ROLES.contains(&role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> SessionUser {
        SessionUser {
            token: "t".to_string(),
            username: "budi".to_string(),
            full_name: "Budi Santoso".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_spellings_are_case_insensitive() {
        assert!(user_with_role("admin").is_admin());
        assert!(user_with_role("Admin").is_admin());
        assert!(user_with_role("ADMINISTRATOR").is_admin());
        assert!(user_with_role(" administrator ").is_admin());
    }

    #[test]
    fn other_roles_are_not_admin() {
        assert!(!user_with_role("kasir").is_admin());
        assert!(!user_with_role("supervisor").is_admin());
        assert!(!user_with_role("").is_admin());
    }
}
