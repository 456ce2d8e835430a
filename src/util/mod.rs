//! Helpers that don't belong to any one part of this crate.

pub mod misc;
pub mod notice;
pub mod text;
