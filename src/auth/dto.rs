use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo::User;

/// Request body for POST /SignUp. The password travels as `pass`, matching
/// the client contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub pass: String,
}

/// Request body for POST /SignIn.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub pass: String,
}

/// Response returned after a successful sign-in.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client. No password field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            email: u.email,
            city: u.city,
            state: u.state,
            zip: u.zip,
        }
    }
}
