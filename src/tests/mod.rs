// Tests for the game mode descriptors and everything built around them.

use std::{path::PathBuf, sync::Arc};

use crate::prelude::*;

mod descriptor;
mod lua;
mod registry;

/// A game mode that only implements what it has to, so every default shows through.
struct MinimalGame {
	id: &'static str,
	settings: Arc<dyn PathSettings>,
}

impl MinimalGame {
	fn new(id: &'static str, settings: Arc<dyn PathSettings>) -> Self {
		Self { id, settings }
	}
}

impl GameModeDescriptor for MinimalGame {
	fn name(&self) -> &str {
		"Minimal Game"
	}

	fn mode_id(&self) -> &str {
		self.id
	}

	fn game_executables(&self) -> Vec<String> {
		vec!["minimal.exe".to_owned()]
	}

	fn mode_theme(&self) -> Theme {
		Theme::default()
	}

	fn plugin_directory(&self) -> PathBuf {
		PathBuf::from("plugins")
	}

	fn settings(&self) -> &dyn PathSettings {
		self.settings.as_ref()
	}
}

/// Builds a fixed provider from lists of installation and executable paths.
fn fixed_settings(installs: &[(&str, &str)], exes: &[(&str, &str)]) -> Arc<PathSettingsData> {
	Arc::new(PathSettingsData {
		installation_paths: to_path_map(installs),
		executable_paths: to_path_map(exes),
	})
}

fn to_path_map(pairs: &[(&str, &str)]) -> IndexMap<String, PathBuf> {
	pairs.iter()
		.map(|(id, path)| (id.to_string(), PathBuf::from(path)))
		.collect()
}
