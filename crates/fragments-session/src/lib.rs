//! fragments-session - On-disk session store for the fragments client.
//!
//! The hosted sign-in flow hands back an identity token and an access
//! token. This crate keeps them between runs and exposes them through
//! [`SessionProvider`](fragments_core::SessionProvider).

mod provider;
mod store;

pub use provider::FileSessionProvider;
pub use store::{FileSessionStore, SESSION_FILE_NAME};
