//! Auto-hiding message banner component

use dioxus::prelude::*;

use crate::state::use_banner;

/// Banner surfacing mutation outcomes. Hidden until a message arrives and
/// again once the message's display window elapses.
#[component]
pub fn MessageBanner() -> Element {
    let banner = use_banner();

    rsx! {
        if let Some(message) = banner.current() {
            div {
                class: "fixed top-4 left-1/2 -translate-x-1/2 z-50 border rounded-lg px-6 py-3 shadow-md text-sm font-medium {message.kind.css_class()}",
                role: "status",
                "{message.text}"
            }
        }
    }
}
