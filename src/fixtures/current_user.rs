use crate::models::current_user::{CurrentUser, Role, UserInfo};

fn role(authority: &str) -> Role {
    Role {
        authority: authority.into(),
    }
}

pub fn user_only() -> CurrentUser {
    CurrentUser {
        logged_in: true,
        user: Some(UserInfo {
            email: "cgaucho@ucsb.edu".into(),
            full_name: Some("Chris Gaucho".into()),
        }),
        roles: vec![role("ROLE_USER"), role("ROLE_MEMBER")],
    }
}

pub fn admin_user() -> CurrentUser {
    CurrentUser {
        logged_in: true,
        user: Some(UserInfo {
            email: "phtcon@ucsb.edu".into(),
            full_name: Some("Phill Conrad".into()),
        }),
        roles: vec![role("ROLE_USER"), role("ROLE_MEMBER"), role("ROLE_ADMIN")],
    }
}

pub fn not_logged_in() -> CurrentUser {
    CurrentUser {
        logged_in: false,
        user: None,
        roles: vec![],
    }
}
