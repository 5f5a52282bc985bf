use dioxus::prelude::*;

use api::ApiConfig;
use ui::{apply_theme, load_theme_from_storage, ApiProvider};
use views::{Edit, Home, Profiles, PublicProfile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/profiles")]
    Profiles {},
    #[route("/edit/:slug")]
    Edit { slug: String },
    #[route("/u/:slug")]
    PublicProfile { slug: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Visitor's page theme, restored from localStorage once at startup.
    let theme = use_signal(load_theme_from_storage);
    use_context_provider(|| theme);
    use_effect(move || apply_theme(&theme()));

    // The backend base URL is resolved once here and injected into the view
    // layer; views reach the network only through this client.
    rsx! {
        ApiProvider {
            config: ApiConfig::from_env(),
            Router::<Route> {}
        }
    }
}
