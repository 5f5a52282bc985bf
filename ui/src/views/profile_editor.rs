//! Create/edit form for a profile and its ordered links.
//!
//! Two independent state axes, each its own set of signals: loading the
//! profile (edit mode only) and submitting the form. A loaded form can be
//! submitting; a load failure leaves the fields at their defaults.

use api::Theme;
use dioxus::prelude::*;

use crate::link_list::MoveDirection;
use crate::profile_form::{FormMode, ProfileForm};
use crate::theme::ThemeToggle;
use crate::use_api;

use super::navigate_to;

/// Profile editor. `slug: None` mounts in create mode, `Some` fetches the
/// profile and mounts in edit mode.
#[component]
pub fn ProfileEditorView(slug: Option<String>) -> Element {
    let api = use_api();

    let initial_slug = slug.clone();
    let mut form = use_signal(move || match initial_slug.clone() {
        Some(s) => ProfileForm::new_edit(s),
        None => ProfileForm::new_create(),
    });

    // Load axis (edit mode only).
    let mut loading = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);

    // Submit axis.
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut created_slug = use_signal(|| Option::<String>::None);

    // Slug search box shown in create mode.
    let mut search_slug = use_signal(String::new);

    let load_api = api.clone();
    let load_slug = slug.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        let slug = load_slug.clone();
        async move {
            let Some(slug) = slug else { return };
            loading.set(true);
            match api.get_profile(&slug).await {
                Ok(profile) => {
                    form.write().populate(&profile);
                    load_error.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, %slug, "failed to load profile");
                    load_error.set(Some(e.user_message("Failed to load profile")));
                }
            }
            loading.set(false);
        }
    });

    let submit_api = api.clone();
    let handle_submit = move |_| {
        let api = submit_api.clone();
        spawn(async move {
            submit_error.set(None);
            success.set(false);

            // Local validation never reaches the network.
            if let Err(msg) = form.read().validate() {
                submit_error.set(Some(msg));
                return;
            }

            submitting.set(true);
            let (mode, slug_now) = {
                let f = form.read();
                (f.mode, f.slug.clone())
            };
            let result = match mode {
                FormMode::Edit => {
                    let body = form.read().update_payload();
                    api.update_profile(&slug_now, &body).await
                }
                FormMode::Create => {
                    let body = form.read().create_payload();
                    api.create_profile(&body).await
                }
            };
            match result {
                Ok(_) => {
                    success.set(true);
                    if mode == FormMode::Create {
                        created_slug.set(Some(slug_now));
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to save profile");
                    submit_error.set(Some(e.user_message("Failed to save profile")));
                }
            }
            submitting.set(false);
        });
    };

    // Copy closure: captures only the signal, so both the button and the
    // Enter key can share it.
    let view_profile = move || {
        let target = search_slug();
        if !target.is_empty() {
            navigate_to(&format!("/u/{target}"));
        }
    };

    let current = form();
    let is_edit = current.mode == FormMode::Edit;
    let link_count = current.links.len();
    let slug_preview = if current.slug.is_empty() {
        "your-username".to_string()
    } else {
        current.slug.clone()
    };

    rsx! {
        div {
            class: "editor-page",
            style: "min-height: 100vh; padding: 3rem 1rem;",
            ThemeToggle {}

            div {
                style: "max-width: 48rem; margin: 0 auto;",

                div {
                    style: "margin-bottom: 1.5rem;",
                    a { href: "/profiles", class: "nav-link", "View All Profiles" }
                }

                if !is_edit {
                    div {
                        class: "card",
                        style: "margin-bottom: 1.5rem;",
                        h2 { class: "section-title", "View Existing Profile" }
                        div {
                            style: "display: flex; gap: 0.5rem;",
                            input {
                                r#type: "text",
                                class: "field",
                                style: "flex: 1;",
                                placeholder: "Enter profile slug",
                                value: search_slug(),
                                oninput: move |evt: FormEvent| search_slug.set(evt.value()),
                                onkeydown: move |evt: KeyboardEvent| {
                                    if evt.key() == Key::Enter {
                                        view_profile();
                                    }
                                },
                            }
                            button {
                                class: "btn btn-secondary",
                                disabled: search_slug().is_empty(),
                                onclick: move |_| view_profile(),
                                "View"
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    h1 {
                        class: "page-title",
                        if is_edit { "Edit Profile" } else { "Create Profile" }
                    }

                    if let Some(msg) = load_error() {
                        div { class: "banner banner-error", "{msg}" }
                    }
                    if let Some(msg) = submit_error() {
                        div { class: "banner banner-error", "{msg}" }
                    }
                    if success() {
                        div {
                            class: "banner banner-success",
                            p { style: "font-weight: 600; margin: 0 0 0.5rem 0;", "Profile saved successfully!" }
                            if let Some(new_slug) = created_slug() {
                                div {
                                    style: "display: flex; gap: 0.5rem;",
                                    a { href: "/u/{new_slug}", class: "btn btn-success", "View Your Profile" }
                                    a { href: "/edit/{new_slug}", class: "btn btn-primary", "Edit Profile" }
                                }
                            }
                        }
                    }

                    div {
                        class: "field-group",
                        label { class: "field-label", "Slug (URL) *" }
                        input {
                            r#type: "text",
                            class: "field",
                            placeholder: "your-username",
                            value: current.slug.clone(),
                            disabled: is_edit,
                            oninput: move |evt: FormEvent| form.write().slug = evt.value(),
                        }
                        p { class: "field-hint", "Your profile will be at: /u/{slug_preview}" }
                    }

                    div {
                        class: "field-group",
                        label { class: "field-label", "Name *" }
                        input {
                            r#type: "text",
                            class: "field",
                            placeholder: "Your Name",
                            value: current.name.clone(),
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }

                    div {
                        class: "field-group",
                        label { class: "field-label", "Bio" }
                        textarea {
                            class: "field",
                            rows: 3,
                            placeholder: "Tell people about yourself...",
                            value: current.bio.clone(),
                            oninput: move |evt: FormEvent| form.write().bio = evt.value(),
                        }
                    }

                    div {
                        class: "field-group",
                        label { class: "field-label", "Avatar URL" }
                        input {
                            r#type: "url",
                            class: "field",
                            placeholder: "https://example.com/avatar.jpg",
                            value: current.avatar_url.clone(),
                            oninput: move |evt: FormEvent| form.write().avatar_url = evt.value(),
                        }
                    }

                    div {
                        class: "field-group",
                        label { class: "field-label", "Theme" }
                        select {
                            class: "field",
                            value: current.theme.as_str(),
                            onchange: move |evt: FormEvent| {
                                form.write().theme = if evt.value() == "dark" {
                                    Theme::Dark
                                } else {
                                    Theme::Light
                                };
                            },
                            option { value: "light", "Light" }
                            option { value: "dark", "Dark" }
                        }
                    }

                    div {
                        class: "field-group",
                        label { class: "field-label", "Password (optional)" }
                        input {
                            r#type: "password",
                            class: "field",
                            placeholder: if is_edit { "Leave blank to keep current" } else { "Leave blank for no password" },
                            value: current.password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    div {
                        class: "links-section",
                        style: "border-top: 1px solid #e5e7eb; padding-top: 1.5rem; margin-top: 1.5rem;",
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                            h2 { class: "section-title", style: "margin: 0;", "Links" }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| form.write().links.add(),
                                "Add Link"
                            }
                        }

                        for (index, entry) in current.links.entries().iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "link-row",
                                style: "padding: 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; margin-bottom: 1rem;",
                                div {
                                    style: "display: flex; gap: 0.5rem; margin-bottom: 0.5rem;",
                                    button {
                                        class: "btn-icon",
                                        title: "Move up",
                                        disabled: index == 0,
                                        onclick: move |_| form.write().links.move_link(index, MoveDirection::Up),
                                        "\u{2191}"
                                    }
                                    button {
                                        class: "btn-icon",
                                        title: "Move down",
                                        disabled: index + 1 == link_count,
                                        onclick: move |_| form.write().links.move_link(index, MoveDirection::Down),
                                        "\u{2193}"
                                    }
                                    button {
                                        class: "btn-icon btn-danger",
                                        style: "margin-left: auto;",
                                        onclick: move |_| form.write().links.remove(index),
                                        "Remove"
                                    }
                                }
                                input {
                                    r#type: "text",
                                    class: "field",
                                    style: "margin-bottom: 0.5rem;",
                                    placeholder: "Link Title",
                                    value: entry.title.clone(),
                                    oninput: move |evt: FormEvent| form.write().links.set_title(index, evt.value()),
                                }
                                input {
                                    r#type: "url",
                                    class: "field",
                                    placeholder: "https://example.com",
                                    value: entry.url.clone(),
                                    oninput: move |evt: FormEvent| form.write().links.set_url(index, evt.value()),
                                }
                            }
                        }

                        if current.links.is_empty() {
                            p {
                                class: "empty-note",
                                style: "text-align: center; padding: 2rem 0;",
                                "No links yet. Click \"Add Link\" to get started."
                            }
                        }
                    }

                    div {
                        style: "display: flex; gap: 1rem; margin-top: 1.5rem;",
                        button {
                            class: "btn btn-primary",
                            style: "flex: 1; padding: 0.75rem 1.5rem;",
                            disabled: submitting() || loading(),
                            onclick: handle_submit,
                            if submitting() {
                                "Saving..."
                            } else if is_edit {
                                "Update Profile"
                            } else {
                                "Create Profile"
                            }
                        }
                        if is_edit {
                            a {
                                href: "/u/{current.slug}",
                                class: "btn btn-secondary",
                                style: "padding: 0.75rem 1.5rem;",
                                "View Profile"
                            }
                        }
                    }
                }
            }
        }

        style { {EDITOR_CSS} }
    }
}

const EDITOR_CSS: &str = r#"
.card {
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
    padding: 2rem;
}
.dark .card { background: #1f2937; color: #f9fafb; }
.page-title { font-size: 1.875rem; font-weight: 700; margin: 0 0 1.5rem 0; }
.section-title { font-size: 1.25rem; font-weight: 600; }
.field-group { margin-bottom: 1.5rem; }
.field-label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.field {
    width: 100%;
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font: inherit;
    box-sizing: border-box;
}
.dark .field { background: #374151; color: #f9fafb; border-color: #4b5563; }
.field:disabled { opacity: 0.5; }
.field-hint { font-size: 0.875rem; color: #6b7280; margin: 0.25rem 0 0 0; }
.btn {
    display: inline-block;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.5rem;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
    text-align: center;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: #2563eb; color: #ffffff; }
.btn-secondary { background: #4b5563; color: #ffffff; }
.btn-success { background: #16a34a; color: #ffffff; }
.btn-icon { background: none; border: none; cursor: pointer; font: inherit; color: #4b5563; }
.btn-icon:disabled { opacity: 0.3; cursor: not-allowed; }
.btn-danger { color: #dc2626; }
.banner { padding: 1rem; border-radius: 0.375rem; margin-bottom: 1rem; }
.banner-error { background: #fee2e2; border: 1px solid #f87171; color: #b91c1c; }
.banner-success { background: #dcfce7; border: 1px solid #4ade80; color: #15803d; }
.nav-link { color: #2563eb; text-decoration: none; }
.empty-note { color: #6b7280; }
"#;
