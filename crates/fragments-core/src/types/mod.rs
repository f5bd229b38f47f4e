//! Core fragments types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod api_url;
mod content_kind;
mod fragment_id;

pub use api_url::ApiUrl;
pub use content_kind::ContentKind;
pub use fragment_id::FragmentId;
