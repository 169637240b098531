//! Loading components

use dioxus::prelude::*;

/// Skeleton placeholder shown while the first directory fetch is pending
#[component]
pub fn CapabilityCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 animate-pulse",
            div {
                class: "flex items-center justify-between mb-3",
                div { class: "h-6 w-32 bg-gray-200 rounded" }
                div { class: "h-6 w-20 bg-gray-200 rounded-full" }
            }
            div {
                class: "space-y-2 mb-4",
                div { class: "h-4 w-full bg-gray-200 rounded" }
                div { class: "h-4 w-5/6 bg-gray-200 rounded" }
            }
            div {
                class: "space-y-2 mb-4",
                div { class: "h-4 w-3/4 bg-gray-200 rounded" }
                div { class: "h-4 w-2/3 bg-gray-200 rounded" }
            }
            div { class: "h-14 bg-gray-100 rounded-lg mb-4" }
            div { class: "h-10 bg-gray-200 rounded-lg" }
        }
    }
}
