//! # API crate — typed client for the profile backend
//!
//! Everything the frontends know about the backend lives here: the wire
//! models, the base-URL configuration, the error shape, and the HTTP client.
//! The backend owns all real logic (persistence, slug uniqueness, password
//! checks, click accounting); this crate only *requests* those capabilities
//! and reports what the backend decided.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | JSON shapes: [`Profile`], [`Link`], [`Theme`], request bodies |
//! | [`config`] | [`ApiConfig`] — base URL resolved once at startup, redirect URLs |
//! | [`error`] | [`ApiError`] and the `{"detail": ...}` error-body contract |
//! | [`client`] | [`ApiClient`] — one async method per backend operation |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{CreateProfile, Link, LinkPayload, Profile, Theme, UpdateProfile};
