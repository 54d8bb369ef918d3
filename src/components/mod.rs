//! Reusable view components.

pub mod layout;
pub mod loading;
pub mod score_ring;
pub mod toast;
