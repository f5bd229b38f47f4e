//! Core traits for fragment access and session resolution.

mod fragments;
mod provider;

pub use fragments::FragmentApi;
pub use provider::SessionProvider;
