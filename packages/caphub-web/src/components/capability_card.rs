//! Capability card component

use dioxus::prelude::*;

use crate::state::use_registration;
use crate::types::CapabilityRecord;

/// Props for CapabilityCard
#[derive(Props, Clone, PartialEq)]
pub struct CapabilityCardProps {
    pub name: String,
    pub record: CapabilityRecord,
}

/// Card displaying a single capability with its consultant roster
#[component]
pub fn CapabilityCard(props: CapabilityCardProps) -> Element {
    let workflow = use_registration();
    let record = &props.record;
    let name = props.name.clone();

    let practice_class = record.practice_class();

    let handle_register = {
        let name = props.name.clone();
        move |_| workflow.open_for(name.clone())
    };

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Header: name + practice badge
            div {
                class: "flex items-start justify-between gap-2 mb-3",
                h4 {
                    class: "text-lg font-semibold text-gray-900",
                    "{props.name}"
                }
                span {
                    class: "practice-badge {practice_class} px-2.5 py-1 rounded-full text-xs font-medium whitespace-nowrap",
                    "{record.practice_area}"
                }
            }

            p {
                class: "text-gray-700 text-sm mb-4",
                "{record.description}"
            }

            // Metadata rows
            div {
                class: "space-y-1.5 text-sm mb-4",
                div {
                    span { class: "font-medium text-gray-600", "Industry Verticals: " }
                    span { class: "text-gray-500", "{record.verticals_display()}" }
                }
                div {
                    span { class: "font-medium text-gray-600", "Skill Levels: " }
                    span { class: "text-gray-500", "{record.skills_display()}" }
                }
                div {
                    span { class: "font-medium text-gray-600", "Key Certifications: " }
                    span { class: "text-gray-500", "{record.certifications_display()}" }
                }
            }

            // Capacity + team size
            div {
                class: "flex items-center justify-between bg-gray-50 rounded-lg px-4 py-3 mb-4",
                div {
                    p { class: "text-xs text-gray-500", "Available Capacity" }
                    p { class: "font-semibold text-gray-900", "{record.capacity} hours/week" }
                }
                div {
                    class: "text-right",
                    p { class: "text-xs text-gray-500", "Team Size" }
                    p { class: "font-bold text-lg text-blue-900", "{record.team_size()}" }
                }
            }

            // Consultant roster
            div {
                class: "mb-4 flex-grow",
                if record.consultants.is_empty() {
                    p {
                        class: "text-sm text-gray-400 italic",
                        "No consultants registered yet"
                    }
                } else {
                    h5 { class: "text-sm font-medium text-gray-600 mb-2", "Registered Consultants" }
                    ul {
                        class: "space-y-1.5",
                        for email in record.consultants.iter() {
                            li {
                                key: "{email}",
                                class: "flex items-center justify-between text-sm bg-gray-50 rounded px-2.5 py-1.5",
                                span { class: "text-gray-700 truncate", "{email}" }
                                RemoveButton {
                                    capability: name.clone(),
                                    email: email.clone(),
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: "mt-auto w-full py-2.5 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                onclick: handle_register,
                "Register Your Expertise"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RemoveButtonProps {
    capability: String,
    email: String,
}

#[component]
fn RemoveButton(props: RemoveButtonProps) -> Element {
    let workflow = use_registration();

    let capability = props.capability.clone();
    let email = props.email.clone();
    let handle_remove = move |_| {
        workflow.remove(capability.clone(), email.clone());
    };

    rsx! {
        button {
            class: "px-2 py-0.5 bg-red-50 text-red-600 text-xs rounded hover:bg-red-100 transition-colors disabled:opacity-50",
            disabled: workflow.is_pending(),
            aria_label: "Remove {props.email}",
            onclick: handle_remove,
            "Remove"
        }
    }
}
