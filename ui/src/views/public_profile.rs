//! Public link-in-bio page for a single profile.
//!
//! Clicking a link never goes to the target URL directly: it navigates (full
//! page load) to the backend's `/r/{slug}/{position}` redirect resource so
//! the click is counted first. `position` is the stable addressing key for
//! that call, not the link `id`.

use api::{Profile, Theme};
use dioxus::prelude::*;

use crate::theme::ThemeToggle;
use crate::use_api;

use super::navigate_to;

#[component]
pub fn PublicProfileView(slug: String) -> Element {
    let api = use_api();

    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let load_slug = slug.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        let slug = load_slug.clone();
        async move {
            match api.get_profile(&slug).await {
                Ok(p) => profile.set(Some(p)),
                Err(e) => {
                    tracing::error!(error = %e, %slug, "failed to load public profile");
                    error.set(Some(e.user_message("Profile not found")));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; min-height: 100vh;",
                div { style: "color: #6b7280;", "Loading..." }
            }
        };
    }

    if let Some(msg) = error() {
        return rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; min-height: 100vh;",
                div {
                    style: "text-align: center;",
                    h2 { style: "font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem;", "Profile Not Found" }
                    p { style: "color: #6b7280;", "{msg}" }
                }
            }
        };
    }

    let Some(current) = profile() else {
        return rsx! {};
    };

    // Display order, and the addressing key for the redirect call.
    let links = current.sorted_links();
    let page_class = match current.theme {
        Theme::Light => "profile-page profile-light",
        Theme::Dark => "profile-page profile-dark",
    };
    let redirect_slug = slug.clone();

    rsx! {
        div {
            class: page_class,
            style: "min-height: 100vh; padding: 3rem 1rem;",
            ThemeToggle {}

            div {
                style: "max-width: 42rem; margin: 0 auto;",

                div {
                    style: "text-align: center; margin-bottom: 2rem;",
                    if let Some(avatar) = current.avatar_url.as_ref() {
                        img {
                            src: "{avatar}",
                            alt: "{current.name}",
                            style: "width: 6rem; height: 6rem; border-radius: 9999px; object-fit: cover; border: 4px solid #e5e7eb; margin-bottom: 1rem;",
                        }
                    }
                    h1 { style: "font-size: 1.875rem; font-weight: 700; margin: 0 0 0.5rem 0;", "{current.name}" }
                    if let Some(bio) = current.bio.as_ref() {
                        p { style: "color: #6b7280; max-width: 28rem; margin: 0 auto;", "{bio}" }
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 1rem;",
                    for link in links.iter() {
                        button {
                            key: "{link.id}",
                            class: "profile-link",
                            onclick: {
                                let url = api.redirect_url(&redirect_slug, link.position);
                                move |_| navigate_to(&url)
                            },
                            span { class: "profile-link-title", "{link.title}" }
                            if link.click_count > 0 {
                                span { class: "profile-link-count", "{link.click_count} clicks" }
                            }
                        }
                    }
                }

                if links.is_empty() {
                    div {
                        style: "text-align: center; color: #6b7280; margin-top: 2rem;",
                        "No links yet"
                    }
                }
            }
        }

        style { {PROFILE_CSS} }
    }
}

const PROFILE_CSS: &str = r#"
.profile-dark { background: #111827; color: #f9fafb; }
.profile-link {
    width: 100%;
    padding: 1rem 1.5rem;
    background: #ffffff;
    border: 2px solid #d1d5db;
    border-radius: 0.5rem;
    cursor: pointer;
    font: inherit;
    text-align: center;
    transition: border-color 0.15s, box-shadow 0.15s;
}
.profile-link:hover { border-color: #9ca3af; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1); }
.profile-dark .profile-link { background: #1f2937; border-color: #4b5563; color: #f9fafb; }
.profile-link-title { display: block; font-size: 1.125rem; font-weight: 500; }
.profile-link-count { display: block; font-size: 0.875rem; color: #6b7280; margin-top: 0.25rem; }
"#;
