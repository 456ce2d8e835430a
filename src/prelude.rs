//! This module re-exports a bunch of utilities used across this crate.

#![allow(unused_imports)]

pub use mlua::prelude::*;
pub use tap::prelude::*;

pub use indexmap::{IndexMap, IndexSet};
pub use itertools::Itertools;
pub use thiserror::Error;

pub use log::debug;
pub use log::error;
pub use log::info;
pub use log::warn;

pub use crate::structs::error::{AppError, AppResult, GameError, RegistryError};
pub use crate::util::text::{FancyText, TextColor, TextStyle};
pub use crate::util::notice::Notice;
pub use crate::util::notice::NoticePreset;

pub use crate::structs::descriptor::{GameModeDescriptor, GameModeExt, RequiredTool};
pub use crate::structs::record::{GameModeRecord, RawGameModeRecord};
pub use crate::structs::settings::{PathSettings, PathSettingsData, SettingsStore};
pub use crate::structs::theme::Theme;
