//! Shared views mounted by the platform crates' routes.

mod all_profiles;
mod profile_editor;
mod public_profile;

pub use all_profiles::AllProfilesView;
pub use profile_editor::ProfileEditorView;
pub use public_profile::PublicProfileView;

/// Full-page navigation. Used where the app must leave the SPA (the
/// click-accounting redirect) or jump to a typed-in slug.
pub(crate) fn navigate_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(%url, "navigation requested outside the browser");
    }
}
