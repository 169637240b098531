//! Registration modal component
//!
//! Rendered only while the workflow's modal state is Open; the form state
//! lives inside the dialog, so every close path resets it by unmounting.

use dioxus::prelude::*;

use crate::state::{use_registration, RegistrationWorkflow};

/// Modal host. Mounts the dialog when a capability is selected.
#[component]
pub fn RegistrationModal() -> Element {
    let workflow = use_registration();

    rsx! {
        if let Some(capability) = workflow.selected() {
            ModalDialog { capability }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ModalDialogProps {
    capability: String,
}

#[component]
fn ModalDialog(props: ModalDialogProps) -> Element {
    let workflow = use_registration();
    let mut email = use_signal(String::new);

    // Escape closes the dialog no matter where focus sits, so the listener
    // goes on the document for the dialog's lifetime.
    use_escape_listener(workflow);

    let practice_area = workflow.selected_practice_area().unwrap_or_default();

    let handle_submit = move |_| {
        workflow.submit(email().trim().to_string());
    };

    rsx! {
        // Backdrop: a click here (not on the dialog itself) closes the modal.
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50 px-4",
            onclick: move |_| workflow.close(),

            div {
                class: "bg-white rounded-xl shadow-xl w-full max-w-md p-6",
                onclick: move |e| e.stop_propagation(),

                // Header with close control
                div {
                    class: "flex items-start justify-between mb-4",
                    h3 {
                        class: "text-xl font-semibold text-gray-900",
                        "Register Your Expertise"
                    }
                    button {
                        class: "text-gray-400 hover:text-gray-600 text-2xl leading-none",
                        aria_label: "Close",
                        onclick: move |_| workflow.close(),
                        "\u{00d7}"
                    }
                }

                // Capability preview
                div {
                    class: "bg-blue-50 rounded-lg p-4 mb-4",
                    p { class: "text-sm font-medium text-gray-600", "Registering for:" }
                    p { class: "mt-1 text-lg font-semibold text-blue-900", "{props.capability}" }
                    p { class: "text-sm text-gray-500", "{practice_area} Practice" }
                }

                form {
                    onsubmit: handle_submit,

                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        r#for: "email",
                        "Your Email"
                    }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        placeholder: "you@company.com",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 mb-4",
                        onmounted: move |element| async move {
                            let _ = element.set_focus(true).await;
                        },
                    }

                    div {
                        class: "flex gap-3",
                        button {
                            r#type: "submit",
                            class: "flex-1 py-2.5 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: workflow.is_pending(),
                            if workflow.is_pending() { "Registering..." } else { "Register" }
                        }
                        button {
                            r#type: "button",
                            class: "flex-1 py-2.5 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors font-medium",
                            onclick: move |_| workflow.close(),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// Install a document-level keydown listener that closes the workflow's
/// modal on Escape. Added when the dialog mounts, removed when it unmounts.
#[cfg(feature = "web")]
fn use_escape_listener(workflow: RegistrationWorkflow) {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let listener = use_hook(|| {
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    workflow.close();
                }
            },
        );
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        Rc::new(closure)
    });

    use_drop(move || {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let _ = document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    });
}

#[cfg(not(feature = "web"))]
fn use_escape_listener(_workflow: RegistrationWorkflow) {}
