//! Reusable UI components

mod capability_card;
mod loading;
mod message_banner;
mod registration_modal;

pub use capability_card::*;
pub use loading::*;
pub use message_banner::*;
pub use registration_modal::*;
