//! This module provides the *Notice* struct, which is used for pretty-printing warnings, errors, or other messages to users.

use crate::prelude::*;
use std::{fmt::Display, io};

use super::misc::display_slice;

/// The generic description used when a game mode has no message of its own for missing critical files.
pub const GENERIC_CRITICAL_FILES_MESSAGE: &str = "Some of the files this game cannot run without are missing.";

/// The generic description used when a game mode has no message of its own for a missing required tool.
pub const GENERIC_REQUIRED_TOOL_MESSAGE: &str = "A tool this game mode depends on is not installed.";

/// Notices allow you to easily pretty-print warning, errors, and other various information.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Notice {
	color: TextColor,
	prefix: String,
	header: String,
	fields: Vec<(String, String)>,
}

/// Presets to use while making a notice, allowing you to quickly recreate common forms of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticePreset {
	/// A red notice with the prefix "ERROR".
	Error,

	/// A yellow notice with the prefix "WARN".
	Warning,

	/// A green notice with the prefix "DONE".
	Success,

	/// A cyan notice with the prefix "INFO".
	Info,
}

impl Notice {
	/// Builds a new notice from raw components.
	pub fn new(color: TextColor, prefix: &str, header: &str) -> Self {
		Self {
			color,
			prefix: prefix.to_owned(),
			header: header.to_owned(),
			fields: Vec::new(),
		}
	}

	/// Builds a new notice from a preset and a header.
	pub fn from_preset(preset: NoticePreset, header: &str) -> Self {
		match preset {
			NoticePreset::Error => Notice::new(TextColor::Red, "ERROR", header),
			NoticePreset::Warning => Notice::new(TextColor::Yellow, "WARN", header),
			NoticePreset::Success => Notice::new(TextColor::Green, "DONE", header),
			NoticePreset::Info => Notice::new(TextColor::Cyan, "INFO", header),
		}
	}

	/// Adds a new field to this notice, which will be printed after any other fields.
	/// A field will be presented in the form of `"{label}: {content}"`.
	pub fn add_field(mut self, label: &str, content: &str) -> Self {
		self.fields.push((label.to_owned(), content.to_owned()));
		self
	}

	/// Finds the content of the first field with the given label.
	pub fn field(&self, label: &str) -> Option<&str> {
		self.fields.iter()
			.find(|(l, _)| l == label)
			.map(|(_, content)| content.as_str())
	}

	/// Convenience method to allow printing a notice at the end of a dot-call chain.
	pub fn print(self) {
		println!("{self}");
	}
}

impl Display for Notice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let title = format!("[{} - {}]", self.prefix, self.header).stylize(Some(TextStyle::Bold), Some(self.color), None);
		writeln!(f, "{title}")?;

		for (label, content) in self.fields.iter() {
			let formatted_label = format!("  {label}: ").stylize(Some(TextStyle::Bold), Some(self.color), None);
			writeln!(f, "{formatted_label}{content}")?;
		}

		Ok(())
	}
}

// Beyond this point is just conversions between errors and notices.

impl From<AppError> for Notice {
	fn from(value: AppError) -> Self {
		match value {
			AppError::IO(error) => error.into(),
			AppError::Lua(error) => error.into(),
			AppError::Game(error) => error.into(),
			AppError::Registry(error) => error.into(),
			AppError::Custom(notice) => notice,

			AppError::Bincode(error) => Notice::from_preset(NoticePreset::Error, "(De)serialization")
				.add_field("Description", "Failed to read or write the settings file.")
				.add_field("Details", &error.to_string()),

			AppError::Unknown(error) => Notice::from_preset(NoticePreset::Error, "Unknown")
				.add_field("Message", "An unknown error has occurred!")
				.add_field("Details", &error.to_string()),
		}
	}
}

impl From<io::Error> for Notice {
	fn from(value: io::Error) -> Self {
		let notice = Notice::from_preset(NoticePreset::Error, "IO");

		match value.kind() {
			io::ErrorKind::NotFound => notice
				.add_field("Description", "Tried to access a file that doesn't exist.")
				.add_field("Details", &value.to_string()),

			io::ErrorKind::PermissionDenied => notice
				.add_field("Description", "Tried to access a file without the right permissions.")
				.add_field("Suggestion", "Ensure your user can read and write the settings file and the game's folders."),

			_ => notice
				.add_field("Description", "An unknown error has occurred!")
				.add_field("Details", &value.to_string()),
		}
	}
}

impl From<LuaError> for Notice {
	fn from(value: LuaError) -> Self {
		let notice = Notice::from_preset(NoticePreset::Error, "Lua");

		match value {
			LuaError::SyntaxError { message, .. } => notice
				.add_field("Description", "A game mode file contains a syntax error.")
				.add_field("Details", &message),

			LuaError::RuntimeError(msg) => notice
				.add_field("Description", "A game mode file caused a Lua runtime error.")
				.add_field("Details", &msg),

			LuaError::FromLuaConversionError { from, to, message } => notice
				.add_field("Description", &format!("Failed to convert a Lua {from} into a {to}."))
				.pipe(|n| match message { Some(msg) => n.add_field("Details", &msg), None => n, }),

			LuaError::CallbackError { cause, .. } => (*cause).clone().conv::<Notice>(),

			other => notice
				.add_field("Description", "An unknown error occurred while evaluating a game mode file.")
				.add_field("Details", &other.to_string()),
		}
	}
}

impl From<GameError> for Notice {
	fn from(value: GameError) -> Self {
		let notice = Notice::from_preset(NoticePreset::Error, "Game");

		match value {
			GameError::UnknownMode(id) => notice
				.add_field("Description", &format!("No game mode has the ID '{id}'."))
				.add_field("Suggestion", "Run 'modcrab-games list' to see every known game mode."),

			GameError::ScanUnavailable(id) => notice
				.add_field("Description", &format!("The game mode '{id}' lists no executables, so it can't be found automatically."))
				.add_field("Suggestion", &format!("Set its path by hand with 'modcrab-games set {id} --install <PATH>'.")),

			GameError::ScanFailed { mode_id, searched } => notice
				.add_field("Description", &format!("None of the scanned folders contain '{mode_id}'."))
				.add_field("Searched", &display_slice(&searched.iter().map(|p| p.display()).collect_vec()))
				.add_field("Suggestion", &format!("Set its path by hand with 'modcrab-games set {mode_id} --install <PATH>'.")),

			GameError::MissingInstallation(id) => notice
				.add_field("Description", &format!("No installation path is configured for '{id}'."))
				.add_field("Suggestion", &format!("Run 'modcrab-games scan {id} <DIRS>' or 'modcrab-games set {id} --install <PATH>'.")),

			GameError::MissingCriticalFiles { mode_id, files, message } => notice
				.add_field("Description", message.as_deref().unwrap_or(GENERIC_CRITICAL_FILES_MESSAGE))
				.add_field("Game Mode", &mode_id)
				.add_field("Missing", &display_slice(&files)),

			GameError::MissingTool { tool, files, message } => notice
				.add_field("Description", message.as_deref().unwrap_or(GENERIC_REQUIRED_TOOL_MESSAGE))
				.add_field("Tool", &tool)
				.add_field("Looked For", &display_slice(&files)),
		}
	}
}

impl From<RegistryError> for Notice {
	fn from(value: RegistryError) -> Self {
		Notice::from_preset(NoticePreset::Error, "Registry")
			.add_field("Description", &value.to_string())
			.add_field("Suggestion", "Fix the game mode's definition, then try again.")
	}
}
