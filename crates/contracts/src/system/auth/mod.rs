use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: SessionUser,
}

/// Logged-in identity, persisted by the browser under `erp_user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // sys_users.id
    pub username: String,
    pub name: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

impl TokenClaims {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_shape() {
        let json = r#"{"access_token":"t","user":{"username":"admin","name":"Admin User","role":"Administrator"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.name, "Admin User");
        assert_eq!(resp.access_token, "t");
    }
}
