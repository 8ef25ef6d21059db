//! Client side of the Codespawn project backend.
//!
//! Provides the `Backend` trait, `HttpBackend` which speaks to the real
//! service over reqwest, and `FormController` which runs an operation against
//! a backend and folds the result into a `FormState`.

mod backend;
mod controller;
mod http;

pub use backend::*;
pub use controller::*;
pub use http::HttpBackend;
