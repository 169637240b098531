//! Directory page: the capability listing
//!
//! Renders straight from the store snapshot, so every resync re-renders the
//! whole grid. Directories are small and sync is off any hot path, so the
//! simplicity wins over incremental updates.

use dioxus::prelude::*;

use crate::components::{CapabilityCard, CapabilityCardSkeleton};
use crate::state::{use_directory_store, use_directory_sync, SyncPhase};

/// Directory page - displays all capabilities with their consultant rosters
#[component]
pub fn Directory() -> Element {
    let store = use_directory_store();
    let sync = use_directory_sync();

    // Initial fetch, once on mount. Mutations trigger their own resyncs.
    use_future(move || async move {
        sync.run().await;
    });

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-4xl font-bold text-gray-900 mb-3",
                            "Capability Hub"
                        }
                        p {
                            class: "text-lg text-gray-600",
                            "Browse our consulting capabilities and register your expertise against the practices where you can contribute."
                        }
                    }
                }
            }

            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                match sync.phase() {
                    SyncPhase::Loading => rsx! {
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for i in 0..6 {
                                CapabilityCardSkeleton { key: "{i}" }
                            }
                        }
                    },
                    SyncPhase::Failed => rsx! {
                        div {
                            class: "text-center py-16",
                            p {
                                class: "text-red-600 text-lg",
                                "Failed to load capabilities. Please try again later."
                            }
                        }
                    },
                    SyncPhase::Ready => rsx! {
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for (name, record) in store.entries() {
                                CapabilityCard {
                                    key: "{name}",
                                    name: name.clone(),
                                    record,
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
