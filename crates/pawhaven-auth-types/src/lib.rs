//! Session-token types shared between the API service and clients:
//! JWT claims, access-token validation, and the bearer-header extractor.

pub mod bearer;
pub mod token;
