//! fragments-http - HTTP-backed fragments API client.

mod client;
mod endpoints;
mod fragments;

pub use fragments::HttpFragmentClient;
