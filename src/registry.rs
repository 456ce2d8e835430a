//! This module keeps track of every game mode available at runtime.

use std::sync::Arc;

use crate::{games::builtin_game_modes, prelude::*};

/// The set of registered game modes, kept in registration order.
/// Mode IDs are unique ignoring ASCII case, and lookups ignore case as well.
#[derive(Default, Clone)]
pub struct GameModeRegistry {
	modes: IndexMap<String, Arc<dyn GameModeDescriptor>>,
}

impl GameModeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding every built-in game mode.
	pub fn with_builtin_modes(settings: Arc<dyn PathSettings>) -> AppResult<Self> {
		let mut registry = Self::new();

		for mode in builtin_game_modes(settings) {
			registry.register(mode)?;
		}

		Ok(registry)
	}

	/// Adds a game mode to this registry.
	///
	/// # Errors
	/// The mode is rejected if its ID is empty, its ID is already taken, or its required tool is inconsistent.
	pub fn register(&mut self, mode: Arc<dyn GameModeDescriptor>) -> Result<(), RegistryError> {
		let key = mode.mode_id().to_ascii_lowercase();

		if key.is_empty() {
			return Err(RegistryError::EmptyModeId(mode.name().to_owned()));
		}

		if self.modes.contains_key(&key) {
			return Err(RegistryError::DuplicateModeId(mode.mode_id().to_owned()));
		}

		validate_required_tool(mode.as_ref())?;

		debug!("Registered game mode '{}' ({}).", mode.mode_id(), mode.name());
		self.modes.insert(key, mode);
		Ok(())
	}

	/// Finds a game mode by its ID, ignoring ASCII case.
	pub fn get(&self, mode_id: &str) -> Option<&Arc<dyn GameModeDescriptor>> {
		self.modes.get(&mode_id.to_ascii_lowercase())
	}

	/// Like *GameModeRegistry::get*, but an unknown ID becomes a *GameError*.
	pub fn require(&self, mode_id: &str) -> AppResult<&Arc<dyn GameModeDescriptor>> {
		self.get(mode_id).ok_or_else(|| GameError::UnknownMode(mode_id.to_owned()).into())
	}

	/// Iterates over every game mode in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn GameModeDescriptor>> {
		self.modes.values()
	}

	/// The ID of every game mode, as each descriptor reports it.
	pub fn mode_ids(&self) -> Vec<&str> {
		self.iter().map(|m| m.mode_id()).collect()
	}

	pub fn len(&self) -> usize {
		self.modes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.modes.is_empty()
	}
}

/// Checks that a game mode's required tool name, file names, and error message agree.
///
/// A mode with no tool at all is fine. If a tool is named, it needs at least one file to be found by.
/// File names or an error message without a tool name are rejected. An error message is never required.
pub fn validate_required_tool(mode: &dyn GameModeDescriptor) -> Result<(), RegistryError> {
	let inconsistent = |reason: &str| RegistryError::InconsistentRequiredTool {
		mode_id: mode.mode_id().to_owned(),
		reason: reason.to_owned(),
	};

	let files = mode.ordered_required_tool_file_names();

	match mode.required_tool_name() {
		None if files.is_some() => Err(inconsistent("it lists tool files, but no tool name")),
		None if mode.required_tool_error_message().is_some() => Err(inconsistent("it has a tool error message, but no tool name")),
		None => Ok(()),
		Some(name) if name.trim().is_empty() => Err(inconsistent("its tool name is blank")),
		Some(_) if files.as_ref().map_or(true, |f| f.is_empty()) => Err(inconsistent("it names a tool, but lists no files to find it by")),
		Some(_) => Ok(()),
	}
}
