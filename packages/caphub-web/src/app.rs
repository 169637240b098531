//! Root application component

use dioxus::prelude::*;

use crate::components::{MessageBanner, RegistrationModal};
use crate::pages::Directory;
use crate::state::DirectoryProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Shared state context wraps the entire app
        DirectoryProvider {
            MessageBanner {}
            Directory {}
            RegistrationModal {}
        }
    }
}
