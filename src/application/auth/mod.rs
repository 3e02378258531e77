mod auth_service;
mod errors;

pub use auth_service::AuthService;
pub use errors::{AuthError, Result};
