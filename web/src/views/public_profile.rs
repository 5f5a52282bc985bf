use dioxus::prelude::*;
use ui::PublicProfileView;

/// Public link-in-bio page at `/u/{slug}`.
#[component]
pub fn PublicProfile(slug: String) -> Element {
    rsx! {
        PublicProfileView { slug }
    }
}
