//! Directory of every profile, in whatever order the backend returns.

use api::Profile;
use dioxus::prelude::*;

use crate::theme::ThemeToggle;
use crate::use_api;

#[component]
pub fn AllProfilesView() -> Element {
    let api = use_api();

    let mut profiles = use_signal(Vec::<Profile>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.list_profiles().await {
                Ok(list) => profiles.set(list),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load profile directory");
                    error.set(Some(e.user_message("Failed to load profiles")));
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            style: "min-height: 100vh; padding: 3rem 1rem;",
            ThemeToggle {}

            div {
                style: "max-width: 56rem; margin: 0 auto;",

                if loading() {
                    div {
                        style: "display: flex; justify-content: center;",
                        div { style: "color: #6b7280;", "Loading profiles..." }
                    }
                } else if let Some(msg) = error() {
                    div {
                        style: "display: flex; justify-content: center;",
                        div {
                            style: "text-align: center;",
                            h2 { style: "font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem;", "Error" }
                            p { style: "color: #6b7280;", "{msg}" }
                        }
                    }
                } else {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem;",
                        h1 { style: "font-size: 1.875rem; font-weight: 700; margin: 0;", "All Profiles" }
                        a { href: "/", class: "directory-create", "Create Profile" }
                    }

                    if profiles().is_empty() {
                        div {
                            style: "text-align: center; padding: 3rem 0;",
                            p { style: "color: #6b7280; margin-bottom: 1rem;", "No profiles found yet." }
                            a { href: "/", class: "directory-create", "Create Your First Profile" }
                        }
                    } else {
                        div {
                            class: "directory-grid",
                            for profile in profiles() {
                                a {
                                    key: "{profile.id}",
                                    href: "/u/{profile.slug}",
                                    class: "directory-card",
                                    div {
                                        style: "display: flex; flex-direction: column; align-items: center; text-align: center;",
                                        if let Some(avatar) = profile.avatar_url.as_ref() {
                                            img {
                                                src: "{avatar}",
                                                alt: "{profile.name}",
                                                class: "directory-avatar",
                                            }
                                        } else {
                                            div {
                                                class: "directory-avatar directory-avatar-fallback",
                                                span { "{initial(&profile.name)}" }
                                            }
                                        }
                                        h2 { style: "font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem 0;", "{profile.name}" }
                                        p { style: "font-size: 0.875rem; color: #2563eb; margin: 0 0 0.5rem 0;", "@{profile.slug}" }
                                        if let Some(bio) = profile.bio.as_ref() {
                                            p { class: "directory-bio", "{bio}" }
                                        }
                                        div {
                                            style: "margin-top: 1rem; font-size: 0.75rem; color: #9ca3af;",
                                            {link_count_label(profile.links.len())}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        style { {DIRECTORY_CSS} }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

fn link_count_label(count: usize) -> String {
    if count == 1 {
        "1 link".to_string()
    } else {
        format!("{count} links")
    }
}

const DIRECTORY_CSS: &str = r#"
.directory-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 1.5rem;
}
.directory-card {
    display: block;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
    padding: 1.5rem;
    text-decoration: none;
    color: inherit;
    transition: box-shadow 0.15s;
}
.directory-card:hover { box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12); }
.dark .directory-card { background: #1f2937; color: #f9fafb; }
.directory-avatar {
    width: 5rem;
    height: 5rem;
    border-radius: 9999px;
    object-fit: cover;
    border: 4px solid #e5e7eb;
    margin-bottom: 1rem;
}
.directory-avatar-fallback {
    display: flex;
    align-items: center;
    justify-content: center;
    background: #d1d5db;
    font-size: 1.5rem;
    font-weight: 700;
    color: #4b5563;
    border: none;
}
.directory-bio {
    font-size: 0.875rem;
    color: #6b7280;
    margin: 0;
    overflow: hidden;
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
}
.directory-create {
    display: inline-block;
    padding: 0.5rem 1rem;
    background: #2563eb;
    color: #ffffff;
    border-radius: 0.5rem;
    text-decoration: none;
    font-weight: 500;
}
"#;
