//! Value objects exchanged with the API layer.

pub mod auth_response;

pub use auth_response::{LoginRequest, LoginResponse, TOKEN_TYPE_BEARER};
