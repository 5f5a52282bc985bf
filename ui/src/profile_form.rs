//! # Profile form state
//!
//! Holds the scalar profile fields plus the link drafts for one editor
//! session, in either create mode (slug editable, nothing fetched) or edit
//! mode (slug fixed, fields pre-populated from a fetch). Validation and
//! request-body construction live here so the view only moves strings
//! between inputs and this struct.
//!
//! Blank-vs-null: `bio`, `avatar_url`, and `password` are plain `String`s
//! while editing, but a blank value becomes `None` in the payload so the
//! backend sees `null` ("not set" on create, "no change" on update), never
//! `""`.

use api::{CreateProfile, Profile, Theme, UpdateProfile};

use crate::link_list::LinkListEditor;

/// Whether this form creates a new profile or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// In-memory state of the profile editor form.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileForm {
    pub mode: FormMode,
    pub slug: String,
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
    pub theme: Theme,
    /// Write-only. Always starts blank, even in edit mode: the backend
    /// never returns it.
    pub password: String,
    pub links: LinkListEditor,
}

impl ProfileForm {
    /// Fresh create-mode form with every field at its default.
    pub fn new_create() -> Self {
        Self {
            mode: FormMode::Create,
            slug: String::new(),
            name: String::new(),
            bio: String::new(),
            avatar_url: String::new(),
            theme: Theme::default(),
            password: String::new(),
            links: LinkListEditor::new(),
        }
    }

    /// Edit-mode form for `slug`, awaiting [`populate`](Self::populate).
    /// Until the fetch lands the other fields stay at their defaults.
    pub fn new_edit(slug: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Edit,
            slug: slug.into(),
            ..Self::new_create()
        }
    }

    /// Fill the form from a fetched profile and switch to edit mode. The
    /// password field is left blank and the drafts are rebuilt from the
    /// profile's links in display order.
    pub fn populate(&mut self, profile: &Profile) {
        self.mode = FormMode::Edit;
        self.slug = profile.slug.clone();
        self.name = profile.name.clone();
        self.bio = profile.bio.clone().unwrap_or_default();
        self.avatar_url = profile.avatar_url.clone().unwrap_or_default();
        self.theme = profile.theme;
        self.password = String::new();
        self.links = LinkListEditor::from_links(&profile.sorted_links());
    }

    /// Local validation, run before any request: slug and name must both be
    /// non-empty. Returns the message to display on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.slug.is_empty() || self.name.is_empty() {
            return Err("Slug and name are required".to_string());
        }
        Ok(())
    }

    /// Body for `POST /api/profiles`.
    pub fn create_payload(&self) -> CreateProfile {
        CreateProfile {
            slug: self.slug.clone(),
            name: self.name.clone(),
            bio: blank_to_none(&self.bio),
            avatar_url: blank_to_none(&self.avatar_url),
            theme: self.theme,
            password: blank_to_none(&self.password),
            links: self.links.to_submittable(),
        }
    }

    /// Body for `PUT /api/profiles/{slug}`.
    pub fn update_payload(&self) -> UpdateProfile {
        UpdateProfile {
            name: self.name.clone(),
            bio: blank_to_none(&self.bio),
            avatar_url: blank_to_none(&self.avatar_url),
            theme: self.theme,
            password: blank_to_none(&self.password),
            links: self.links.to_submittable(),
        }
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
