//! This module defines where descriptors look up their installation and executable paths.
//! Descriptors only ever read from a *PathSettings*; writing is left to whoever owns the store.

use std::{
	path::{Path, PathBuf},
	sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Read-only view of the two path mappings a descriptor depends on.
/// Both mappings are keyed by a game's mode ID, and an unknown ID simply resolves to *None*.
pub trait PathSettings: Send + Sync {
	/// Looks up the installation path configured for a mode ID.
	fn installation_path(&self, mode_id: &str) -> Option<PathBuf>;

	/// Looks up the executable path configured for a mode ID.
	fn executable_path(&self, mode_id: &str) -> Option<PathBuf>;
}

/// A plain snapshot of both path mappings.
/// This is what gets saved to disk, and it doubles as a fixed provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettingsData {
	/// Maps a mode ID to the folder its mods are installed into.
	pub installation_paths: IndexMap<String, PathBuf>,

	/// Maps a mode ID to the game's executable.
	pub executable_paths: IndexMap<String, PathBuf>,
}

impl PathSettings for PathSettingsData {
	fn installation_path(&self, mode_id: &str) -> Option<PathBuf> {
		self.installation_paths.get(mode_id).cloned()
	}

	fn executable_path(&self, mode_id: &str) -> Option<PathBuf> {
		self.executable_paths.get(mode_id).cloned()
	}
}

/// A live, shareable settings store.
/// Every lookup reads the current value, so changes are visible to all descriptors holding this store.
#[derive(Debug, Default)]
pub struct SettingsStore {
	data: RwLock<PathSettingsData>,
}

impl SettingsStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the installation path for a mode ID, replacing any previous value.
	pub fn set_installation_path(&self, mode_id: &str, path: impl AsRef<Path>) {
		debug!("Setting installation path of '{mode_id}' to '{}'.", path.as_ref().display());
		self.write().installation_paths.insert(mode_id.to_owned(), path.as_ref().to_owned());
	}

	/// Sets the executable path for a mode ID, replacing any previous value.
	pub fn set_executable_path(&self, mode_id: &str, path: impl AsRef<Path>) {
		debug!("Setting executable path of '{mode_id}' to '{}'.", path.as_ref().display());
		self.write().executable_paths.insert(mode_id.to_owned(), path.as_ref().to_owned());
	}

	/// Removes both paths for a mode ID.
	/// Returns *true* if anything was removed.
	pub fn clear(&self, mode_id: &str) -> bool {
		let mut data = self.write();
		let install = data.installation_paths.shift_remove(mode_id).is_some();
		let exe = data.executable_paths.shift_remove(mode_id).is_some();

		install || exe
	}

	/// Copies the current contents of this store.
	pub fn snapshot(&self) -> PathSettingsData {
		self.read().clone()
	}

	#[cfg(test)]
	pub(crate) fn data_for_test(&self) -> &RwLock<PathSettingsData> {
		&self.data
	}

	// A poisoned lock still holds valid maps, so it's recovered instead of failing the read.
	fn read(&self) -> RwLockReadGuard<'_, PathSettingsData> {
		self.data.read().unwrap_or_else(|e| {
			warn!("Recovered the settings store from a poisoned lock.");
			PoisonError::into_inner(e)
		})
	}

	fn write(&self) -> RwLockWriteGuard<'_, PathSettingsData> {
		self.data.write().unwrap_or_else(|e| {
			warn!("Recovered the settings store from a poisoned lock.");
			PoisonError::into_inner(e)
		})
	}
}

impl From<PathSettingsData> for SettingsStore {
	fn from(data: PathSettingsData) -> Self {
		Self { data: RwLock::new(data) }
	}
}

impl PathSettings for SettingsStore {
	fn installation_path(&self, mode_id: &str) -> Option<PathBuf> {
		self.read().installation_path(mode_id)
	}

	fn executable_path(&self, mode_id: &str) -> Option<PathBuf> {
		self.read().executable_path(mode_id)
	}
}
