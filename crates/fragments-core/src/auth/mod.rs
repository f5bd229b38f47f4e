//! Authentication types.
//!
//! Every fragments operation requires a [`Session`]; there is no way to
//! express an unauthenticated call.

mod session;
mod tokens;

pub use session::{
    AUTHORIZATION, AuthorizationHeaders, CONTENT_TYPE, DEFAULT_CONTENT_TYPE, Session,
};
pub use tokens::{AccessToken, IdToken};
