//! This module contains the errors used all over this codebase.
//! Descriptor reads never produce these; they only come from the operations built around descriptors.

use std::{io, path::PathBuf};

use crate::prelude::*;

/// Convenience wrapper around *Result<T, AppError>*.
pub type AppResult<T> = Result<T, AppError>;

/// Error returned by several functions in this crate.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error returned by failing IO operations.
    /// Most of these will occur during filesystem interactions.
    #[error(transparent)]
    IO(#[from] io::Error),

    /// Error returned while running Lua code.
    /// This is mostly seen while evaluating a user-defined game mode.
    #[error(transparent)]
    Lua(#[from] LuaError),

    /// Error returned when failing to (de)serialize type using Serde and Bincode.
    #[error(transparent)]
    Bincode(#[from] bincode::Error),

	/// Error returned by operations involving a specific game mode.
	#[error(transparent)]
	Game(#[from] GameError),

	/// Error returned when a game mode cannot be registered.
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// Custom error that simply wraps a *Notice*.
	#[error("{0}")]
	Custom(Notice),

    /// Error converted from any error that does not have a matching *AppError* variant.
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// An error related to locating or checking a game mode's files.
#[derive(Error, Debug)]
pub enum GameError {
	/// No registered game mode uses this ID.
	#[error("No game mode has the ID '{0}'.")]
	UnknownMode(String),

	/// The game mode lists no executables, so its installation cannot be discovered.
	#[error("The game mode '{0}' does not list any executables to scan for.")]
	ScanUnavailable(String),

	/// None of the scanned directories contained one of the game's executables.
	#[error("Failed to find an installation of '{mode_id}' in {} scanned directories.", .searched.len())]
	ScanFailed {
		/// The game mode being scanned for.
		mode_id: String,

		/// Every directory that was checked.
		searched: Vec<PathBuf>,
	},

	/// The game mode has no installation path configured, and one was needed.
	#[error("No installation path is configured for '{0}'.")]
	MissingInstallation(String),

	/// One or more of the game's critical plugins are missing.
	#[error("The game mode '{mode_id}' is missing critical files: {files:?}")]
	MissingCriticalFiles {
		/// The game mode being checked.
		mode_id: String,

		/// The missing files, in load order.
		files: Vec<String>,

		/// The game mode's own message for this situation, if it has one.
		message: Option<String>,
	},

	/// The game mode's required tool could not be found.
	#[error("The required tool {tool} could not be found.")]
	MissingTool {
		/// The name of the missing tool.
		tool: String,

		/// The files that were searched for.
		files: Vec<String>,

		/// The game mode's own message for this situation, if it has one.
		message: Option<String>,
	},
}

/// An error returned when a descriptor breaks one of the registry's rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// The descriptor's mode ID is empty.
	/// This wraps the descriptor's display name.
	#[error("The game mode {0} has an empty mode ID.")]
	EmptyModeId(String),

	/// Another descriptor already uses this mode ID.
	#[error("The mode ID '{0}' is already registered.")]
	DuplicateModeId(String),

	/// The descriptor's required tool name, file names, and error message do not agree with each other.
	#[error("The game mode '{mode_id}' has an inconsistent required tool: {reason}")]
	InconsistentRequiredTool {
		/// The offending descriptor's mode ID.
		mode_id: String,

		/// What is wrong with the tool.
		reason: String,
	},
}
