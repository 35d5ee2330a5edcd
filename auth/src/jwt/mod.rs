//! Compact JWS (HS256) encoding and decoding of forum access tokens.

pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
