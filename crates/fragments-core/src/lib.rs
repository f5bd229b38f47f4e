//! fragments-core - Core types and traits for the fragments client.
//!
//! All fragment operations flow through a [`FragmentApi`] implementation and
//! are authorized by an explicit [`Session`], which a [`SessionProvider`]
//! resolves once at startup.

pub mod auth;
pub mod config;
pub mod error;
pub mod fragment;
pub mod traits;
pub mod types;

pub use auth::{AccessToken, AuthorizationHeaders, IdToken, Session};
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use fragment::{ApiResponse, CreatedFragment, FragmentContent, FragmentMetadata};
pub use traits::{FragmentApi, SessionProvider};
pub use types::{ApiUrl, ContentKind, FragmentId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
