use serde::{Deserialize, Serialize};

/// Response shape of `/api/currentUser`. The backend owns authentication;
/// this side only derives the acting capability from the granted roles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub authority: String,
}

/// What the acting user is allowed to do. Passed explicitly into tables and
/// pages; components never read ambient user state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Capability {
    pub can_manage: bool,
}

impl CurrentUser {
    pub fn has_role(&self, authority: &str) -> bool {
        self.roles.iter().any(|role| role.authority == authority)
    }

    pub fn capability(&self) -> Capability {
        Capability {
            can_manage: self.has_role("ROLE_ADMIN"),
        }
    }
}
