use client::UsersClient;
use dioxus::prelude::*;

mod components;
mod form_state;

use components::UserFormContainer;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    client::config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One HTTP client for the whole tree; the form reads it from context.
    use_context_provider(UsersClient::from_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "app",
            UserFormContainer {}
        }
    }
}
