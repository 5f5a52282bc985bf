use dioxus::prelude::*;
use ui::AllProfilesView;

/// Profile directory at `/profiles`.
#[component]
pub fn Profiles() -> Element {
    rsx! {
        AllProfilesView {}
    }
}
