//! This crate contains all shared UI for the workspace: the link-list and
//! profile-form state logic, the page-level theme, and the views the
//! platform crates mount on their routes.

pub mod link_list;
pub use link_list::{LinkDraft, LinkListEditor, MoveDirection};

pub mod profile_form;
pub use profile_form::{FormMode, ProfileForm};

mod api_context;
pub use api_context::{use_api, ApiProvider};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeSignal, ThemeToggle};

pub mod views;
pub use views::{AllProfilesView, ProfileEditorView, PublicProfileView};
