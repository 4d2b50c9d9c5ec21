//! Reusable UI pieces: the site header and the building blocks it mounts.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod modal;
