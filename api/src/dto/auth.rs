use libris_core::domain::value_objects::{LoginUser, RegisterUser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        RegisterUser::new(
            request.name,
            request.email,
            request.password,
            request.password_confirmation,
        )
    }
}

/// Credentials for login; read from a JSON body, a form body or the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Combine query and body input; fields present in the body win
    pub fn merged_with(self, body: LoginRequest) -> Self {
        Self {
            email: body.email.or(self.email),
            password: body.password.or(self.password),
        }
    }
}

impl From<LoginRequest> for LoginUser {
    fn from(request: LoginRequest) -> Self {
        LoginUser::new(request.email, request.password)
    }
}
