//! This module is the general place for utilities that don't need their own module.

use std::{fmt::Display, fs, io, path::{Component, Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Allows a struct to easily be saved and loaded using a file.
/// This is powered via Serde and Bincode.
pub trait SaveLoad {
	/// Attempts to save (serialize) this struct to the file provided.
	/// Missing parent directories are created first.
	fn save(&self, path: impl AsRef<Path>) -> AppResult<()>;

	/// Attempts to load (deserialize) this struct from the file provided.
	fn load(path: impl AsRef<Path>) -> AppResult<Self>
	where
		Self: Sized;
}

/// Trait to extend the *SaveLoad* trait with the ability to fallback to a struct's default value.
pub trait LoadOrDefault {
	/// Attempts to load this struct, and it will fallback to its default value on failure.
	/// Specifically, this method will fallback when the provided file doesn't exist or its content is invalid.
	fn load_or_default(path: impl AsRef<Path>) -> AppResult<Self>
	where
		Self: Sized;
}

impl<T> SaveLoad for T
where
	T: Serialize + for<'de> Deserialize<'de>,
{
	fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
		let path = path.as_ref();

		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}

		let bin = bincode::serialize(self)?;
		fs::write(path, bin)?;
		Ok(())
	}

	fn load(path: impl AsRef<Path>) -> AppResult<Self> {
		let bin = fs::read(path)?;

		let item: T = bincode::deserialize(&bin[..])?;
		Ok(item)
	}
}

impl<T> LoadOrDefault for T
where
	T: SaveLoad + Default,
{
	fn load_or_default(path: impl AsRef<Path>) -> AppResult<Self> {
		match T::load(&path) {
			Err(AppError::IO(e)) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
			Err(AppError::Bincode(e)) => {
				warn!("Ignoring the invalid contents of '{}': {e}", path.as_ref().display());
				Ok(T::default())
			},
			other => other,
		}
	}
}

/// Helper function to generate a pretty string based on a slice's contents.
pub fn display_slice<T: Display>(slice: &[T]) -> String {
	slice.iter().join(", ")
}

/// Replaces a path's prefix of '~' with the user's home directory.
/// If a path does not start with '~', this function will return a unchanged copy of that path instead.
pub fn replace_path_home_prefix(path: impl AsRef<Path>) -> AppResult<PathBuf> {
	let path = path.as_ref();

	let mut components = path.components();
	if components.next() != Some(Component::Normal("~".as_ref())) { return Ok(path.to_owned()); }

	let Some(home) = dirs::home_dir() else {
		let error = Notice::from_preset(NoticePreset::Error, "Other")
			.add_field("Description", "Failed to retrieve the user's home directory.");

		return Err(AppError::Custom(error));
	};

	Ok(home.join(components.as_path()))
}

/// The file the settings store is saved to when no other file is requested.
pub fn default_settings_path() -> AppResult<PathBuf> {
	let Some(config) = dirs::config_dir() else {
		let error = Notice::from_preset(NoticePreset::Error, "Settings")
			.add_field("Description", "Failed to find the user's config directory.")
			.add_field("Suggestion", "Pass a settings file with '--settings'.");

		return Err(AppError::Custom(error));
	};

	Ok(config.join("modcrab").join("games.bin"))
}
