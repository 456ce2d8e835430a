//! This module defines the contract every supported game implements.
//!
//! A game mode is described by a *GameModeDescriptor*. Implementors only supply what is specific to their game;
//! everything optional has a default here, and the two settings-backed paths are resolved against the
//! *PathSettings* handle the descriptor was constructed with.
//!
//! Absence is the only failure signal at this layer. A missing value means the feature doesn't apply to the game,
//! and none of these methods can fail.

use std::{
	ffi::OsStr,
	path::{Path, PathBuf},
};

use crate::prelude::*;

/// Describes a game that this crate is capable of handling.
///
/// Only *name*, *mode_id*, *game_executables*, *mode_theme*, *plugin_directory*, and *settings* must be implemented.
/// Every list prefixed with 'ordered' reflects load order exactly, so position matters and not just membership.
pub trait GameModeDescriptor: Send + Sync {
	/// The human-readable name of the game.
	fn name(&self) -> &str;

	/// The unique ID of this game mode.
	/// This is the key used for every settings lookup, so it must never change.
	fn mode_id(&self) -> &str;

	/// Possible file names of the game's executable, in the order they should be looked for.
	fn game_executables(&self) -> Vec<String>;

	/// The theme used while this game mode is active.
	fn mode_theme(&self) -> Theme;

	/// The directory the game keeps its plugins in.
	/// A relative directory is relative to the installation path.
	fn plugin_directory(&self) -> PathBuf;

	/// The settings this descriptor was constructed with.
	fn settings(&self) -> &dyn PathSettings;

	/// The path mod files are installed to.
	/// This reads the settings every time it is called, so changes made elsewhere show up immediately.
	fn installation_path(&self) -> Option<PathBuf> {
		self.settings().installation_path(self.mode_id())
	}

	/// A second path mod files can be installed to, for games that split their data across installs.
	fn secondary_installation_path(&self) -> Option<PathBuf> {
		None
	}

	/// File extensions (without the leading dot) that mark a file as a manageable plugin.
	fn plugin_extensions(&self) -> IndexSet<String> {
		IndexSet::new()
	}

	/// Folder names that anchor the structure of a mod archive.
	fn stop_folders(&self) -> IndexSet<String> {
		IndexSet::new()
	}

	/// Plugins the game cannot run without, ordered by load order.
	fn ordered_critical_plugin_names(&self) -> Option<Vec<String>> {
		None
	}

	/// Plugins shipped by the game's developer, ordered by load order.
	fn ordered_official_plugin_names(&self) -> Option<Vec<String>> {
		None
	}

	/// Official plugins whose position cannot be managed, ordered by load order.
	fn ordered_official_unmanaged_plugin_names(&self) -> Option<Vec<String>> {
		None
	}

	/// The name of an external tool this game mode depends on.
	fn required_tool_name(&self) -> Option<String> {
		None
	}

	/// Files that identify the required tool, in the order they should be looked for.
	fn ordered_required_tool_file_names(&self) -> Option<Vec<String>> {
		None
	}

	/// The message shown when the required tool is missing.
	fn required_tool_error_message(&self) -> Option<String> {
		None
	}

	/// The message shown when critical files are missing.
	/// If this is *None*, a generic message should be used instead.
	fn critical_files_error_message(&self) -> Option<String> {
		None
	}
}

/// The required tool of a game mode, bundled into one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredTool {
	/// The name of the tool.
	pub name: String,

	/// Files that identify the tool, in search order.
	pub file_names: Vec<String>,

	/// The game mode's message for when this tool is missing.
	pub error_message: Option<String>,
}

/// Behaviour shared by every game mode that cannot be replaced by a single game.
///
/// This trait is implemented for all descriptors by a blanket impl, so none of its methods can be overridden.
pub trait GameModeExt: GameModeDescriptor {
	/// The path to the game's executable, as configured in the settings.
	fn executable_path(&self) -> Option<PathBuf> {
		self.settings().executable_path(self.mode_id())
	}

	/// Bundles the required tool name, its file names, and its error message.
	/// Returns *None* if this game mode has no required tool.
	fn required_tool(&self) -> Option<RequiredTool> {
		let tool = RequiredTool {
			name: self.required_tool_name()?,
			file_names: self.ordered_required_tool_file_names().unwrap_or_default(),
			error_message: self.required_tool_error_message(),
		};

		Some(tool)
	}

	/// The plugin directory as a usable path.
	/// A relative plugin directory is joined onto the installation path, which must be configured.
	fn resolved_plugin_directory(&self) -> Option<PathBuf> {
		let dir = self.plugin_directory();
		if dir.is_absolute() { return Some(dir); }

		self.installation_path().map(|root| root.join(dir))
	}

	/// Checks if a file's extension marks it as a plugin for this game.
	/// The comparison ignores ASCII case.
	fn is_plugin_file(&self, path: impl AsRef<Path>) -> bool {
		let Some(ext) = path.as_ref().extension().and_then(OsStr::to_str) else {
			return false;
		};

		self.plugin_extensions()
			.iter()
			.any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
	}

	/// Checks if a plugin is one of this game's critical plugins, ignoring ASCII case.
	fn is_critical_plugin(&self, name: &str) -> bool {
		contains_ignore_case(self.ordered_critical_plugin_names(), name)
	}

	/// Checks if a plugin is one of this game's official plugins, ignoring ASCII case.
	fn is_official_plugin(&self, name: &str) -> bool {
		contains_ignore_case(self.ordered_official_plugin_names(), name)
	}
}

impl<T: GameModeDescriptor + ?Sized> GameModeExt for T {}

fn contains_ignore_case(list: Option<Vec<String>>, name: &str) -> bool {
	list.is_some_and(|l| l.iter().any(|p| p.eq_ignore_ascii_case(name)))
}
