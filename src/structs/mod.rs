//! This is the parent module over the core types of this crate, such as *GameModeDescriptor* or *SettingsStore*.

pub mod descriptor;
pub mod error;
pub mod record;
pub mod settings;
pub mod theme;
