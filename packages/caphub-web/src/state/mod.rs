//! Shared application state
//!
//! The directory snapshot, the modal state machine, and the message banner
//! are each owned by a context struct created once by [`DirectoryProvider`]
//! and handed to components through Dioxus context. Single-writer discipline
//! holds because every mutation runs on the event loop through these structs.

use dioxus::prelude::*;
use tracing::error;

use crate::api::{browser_client, ClientError};
use crate::types::{CapabilityDirectory, CapabilityRecord};

/// How long a banner message stays visible.
const BANNER_AUTO_HIDE_MS: u32 = 5000;

// ============================================================================
// Directory store
// ============================================================================

/// Owner of the last-fetched directory snapshot. Read-only to everything
/// except [`DirectorySync`].
#[derive(Clone, Copy)]
pub struct DirectoryStore {
    snapshot: Signal<Option<CapabilityDirectory>>,
}

impl DirectoryStore {
    /// Replace the snapshot wholesale. Never merged or patched.
    pub fn replace(mut self, directory: CapabilityDirectory) {
        self.snapshot.set(Some(directory));
    }

    pub fn get(&self, name: &str) -> Option<CapabilityRecord> {
        self.snapshot
            .read()
            .as_ref()
            .and_then(|directory| directory.get(name).cloned())
    }

    /// Snapshot entries in server response order, cloned for rendering.
    pub fn entries(&self) -> Vec<(String, CapabilityRecord)> {
        self.snapshot
            .read()
            .as_ref()
            .map(|directory| {
                directory
                    .iter()
                    .map(|(name, record)| (name.clone(), record.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ============================================================================
// Directory sync
// ============================================================================

/// What the listing should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SyncPhase {
    /// First fetch still pending.
    #[default]
    Loading,
    /// Snapshot available; render the cards.
    Ready,
    /// Last fetch failed; render the static error placeholder. The previous
    /// snapshot is kept untouched in the store.
    Failed,
}

/// Fetches the directory and keeps the rendered view in step with it.
#[derive(Clone, Copy)]
pub struct DirectorySync {
    store: DirectoryStore,
    phase: Signal<SyncPhase>,
}

impl DirectorySync {
    pub fn phase(&self) -> SyncPhase {
        *self.phase.read()
    }

    /// Fetch the directory and replace the store snapshot. Failures leave
    /// the snapshot alone and flip the listing to its error placeholder.
    pub async fn run(mut self) {
        match browser_client().fetch_directory().await {
            Ok(directory) => {
                self.store.replace(directory);
                self.phase.set(SyncPhase::Ready);
            }
            Err(e) => {
                error!("failed to fetch capabilities: {}", e);
                self.phase.set(SyncPhase::Failed);
            }
        }
    }

    /// Fire-and-forget resync, used after every successful mutation.
    pub fn sync(self) {
        spawn(async move {
            self.run().await;
        });
    }
}

// ============================================================================
// Message banner
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Info => "bg-blue-50 border-blue-200 text-blue-700",
            MessageKind::Success => "bg-green-50 border-green-200 text-green-700",
            MessageKind::Error => "bg-red-50 border-red-200 text-red-700",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub text: String,
    pub kind: MessageKind,
}

/// Auto-hiding message banner. Every message gets its own full display
/// window: a new message supersedes the previous one's pending hide, so a
/// stale timer never hides a newer message early.
#[derive(Clone, Copy)]
pub struct BannerState {
    current: Signal<Option<Banner>>,
    serial: Signal<u64>,
}

impl BannerState {
    pub fn current(&self) -> Option<Banner> {
        self.current.read().clone()
    }

    pub fn show(mut self, text: impl Into<String>, kind: MessageKind) {
        let token = self.serial.peek().wrapping_add(1);
        self.serial.set(token);
        self.current.set(Some(Banner {
            text: text.into(),
            kind,
        }));

        #[cfg(feature = "web")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(BANNER_AUTO_HIDE_MS).await;
            if timer_may_hide(token, *self.serial.peek()) {
                self.current.set(None);
            }
        });
    }
}

/// A hide timer fires only for the message it was armed for; a timer whose
/// message has been superseded must leave the newer message alone.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn timer_may_hide(token: u64, current: u64) -> bool {
    token == current
}

// ============================================================================
// Registration workflow
// ============================================================================

/// Modal lifecycle for the signup form. One instance, owned by the workflow.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        capability: String,
    },
}

impl ModalState {
    pub fn open_for(name: impl Into<String>) -> Self {
        ModalState::Open {
            capability: name.into(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            ModalState::Open { capability } => Some(capability),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Drives the open/fill/submit/close lifecycle of the signup form and the
/// remove-consultant confirmation flow.
#[derive(Clone, Copy)]
pub struct RegistrationWorkflow {
    modal: Signal<ModalState>,
    /// One mutation may be outstanding at a time; the submit and remove
    /// controls are disabled while this is set.
    pending: Signal<bool>,
    store: DirectoryStore,
    sync: DirectorySync,
    banner: BannerState,
}

impl RegistrationWorkflow {
    pub fn selected(&self) -> Option<String> {
        self.modal.read().selected().map(str::to_string)
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }

    /// Practice area of the currently selected capability, for the modal's
    /// preview block.
    pub fn selected_practice_area(&self) -> Option<String> {
        let name = self.selected()?;
        self.store.get(&name).map(|record| record.practice_area)
    }

    pub fn open_for(mut self, name: impl Into<String>) {
        self.modal.set(ModalState::open_for(name));
    }

    /// Single close path shared by the close button, cancel button, backdrop
    /// click, and Escape. The form lives in the modal component and resets
    /// when the dialog unmounts.
    pub fn close(mut self) {
        self.modal.set(ModalState::Closed);
    }

    /// Submit the signup form for the selected capability. Exactly one
    /// request per submission; no retry.
    pub fn submit(mut self, email: String) {
        let Some(capability) = self.selected() else {
            return;
        };
        if *self.pending.peek() {
            return;
        }
        self.pending.set(true);

        spawn(async move {
            match browser_client().register(&capability, &email).await {
                Ok(message) => {
                    self.banner.show(message, MessageKind::Success);
                    self.modal.set(ModalState::Closed);
                    self.sync.sync();
                }
                Err(ClientError::Rejected(detail)) => {
                    // Stay open so the user can correct and retry.
                    self.banner.show(detail, MessageKind::Error);
                }
                Err(e) => {
                    error!("failed to register {} for {}: {}", email, capability, e);
                    self.banner
                        .show("Failed to register. Please try again.", MessageKind::Error);
                }
            }
            self.pending.set(false);
        });
    }

    /// Remove a consultant from a capability, after an explicit confirmation
    /// naming both. Declining the prompt issues no request.
    pub fn remove(mut self, capability: String, email: String) {
        if *self.pending.peek() {
            return;
        }
        if !confirm_removal(&email, &capability) {
            return;
        }
        self.pending.set(true);

        spawn(async move {
            match browser_client().unregister(&capability, &email).await {
                Ok(message) => {
                    self.banner.show(message, MessageKind::Success);
                    self.sync.sync();
                }
                Err(ClientError::Rejected(detail)) => {
                    self.banner.show(detail, MessageKind::Error);
                }
                Err(e) => {
                    error!("failed to unregister {} from {}: {}", email, capability, e);
                    self.banner.show(
                        "Failed to unregister. Please try again.",
                        MessageKind::Error,
                    );
                }
            }
            self.pending.set(false);
        });
    }
}

#[cfg(feature = "web")]
fn confirm_removal(email: &str, capability: &str) -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message(&format!("Remove {} from {}?", email, capability))
                .ok()
        })
        .unwrap_or(false)
}

/// Without a browser there is no one to ask; treat it as declined.
#[cfg(not(feature = "web"))]
fn confirm_removal(_email: &str, _capability: &str) -> bool {
    false
}

// ============================================================================
// Provider
// ============================================================================

/// Provider component that owns all shared state and wraps the app.
#[component]
pub fn DirectoryProvider(children: Element) -> Element {
    let snapshot = use_signal(|| None::<CapabilityDirectory>);
    let store = DirectoryStore { snapshot };

    let phase = use_signal(SyncPhase::default);
    let sync = DirectorySync { store, phase };

    let banner = BannerState {
        current: use_signal(|| None),
        serial: use_signal(|| 0u64),
    };

    let workflow = RegistrationWorkflow {
        modal: use_signal(ModalState::default),
        pending: use_signal(|| false),
        store,
        sync,
        banner,
    };

    use_context_provider(|| store);
    use_context_provider(|| sync);
    use_context_provider(|| banner);
    use_context_provider(|| workflow);

    children
}

pub fn use_directory_store() -> DirectoryStore {
    use_context::<DirectoryStore>()
}

pub fn use_directory_sync() -> DirectorySync {
    use_context::<DirectorySync>()
}

pub fn use_banner() -> BannerState {
    use_context::<BannerState>()
}

pub fn use_registration() -> RegistrationWorkflow {
    use_context::<RegistrationWorkflow>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_starts_closed() {
        let modal = ModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn test_modal_open_for_selects_capability() {
        let modal = ModalState::open_for("Cloud Migration");
        assert!(modal.is_open());
        assert_eq!(modal.selected(), Some("Cloud Migration"));
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_message() {
        // First message shown, then superseded before its timer fired.
        let first = 1u64;
        let second = 2u64;
        assert!(!timer_may_hide(first, second));
        // The newest message's own timer still hides it.
        assert!(timer_may_hide(second, second));
    }

    #[test]
    fn test_message_kind_classes_differ() {
        assert_ne!(
            MessageKind::Success.css_class(),
            MessageKind::Error.css_class()
        );
        assert_ne!(MessageKind::Info.css_class(), MessageKind::Error.css_class());
    }
}
