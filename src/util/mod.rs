//! Small display-only helpers.

pub mod currency;
pub mod dates;
pub mod score;
