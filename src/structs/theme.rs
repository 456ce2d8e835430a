//! This module defines the *Theme* each game mode is presented with.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The colors and branding a front end uses while a game mode is active.
/// Nothing in this crate interprets a theme beyond comparing it and coloring terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
	/// A label for this theme, usually matching the game's name.
	pub name: String,

	/// The main color, used for headers and the game's title.
	pub primary: TextColor,

	/// A secondary color for highlights.
	pub accent: TextColor,

	/// An optional icon, either a path or a resource key that the front end understands.
	pub icon: Option<String>,
}

impl Theme {
	/// Builds a theme without an icon.
	pub fn new(name: &str, primary: TextColor, accent: TextColor) -> Self {
		Self {
			name: name.to_owned(),
			primary,
			accent,
			icon: None,
		}
	}

	/// Sets this theme's icon.
	pub fn with_icon(mut self, icon: &str) -> Self {
		self.icon = Some(icon.to_owned());
		self
	}

	/// Styles text as a bold title in this theme's primary color.
	pub fn title(&self, text: &str) -> String {
		text.stylize(Some(TextStyle::Bold), Some(self.primary), None)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::new("Default", TextColor::White, TextColor::Cyan)
	}
}

impl<'lua> FromLua<'lua> for Theme {
	fn from_lua(value: LuaValue<'lua>, _: &'lua Lua) -> LuaResult<Self> {
		let Some(table) = value.as_table() else {
			return Err(LuaError::FromLuaConversionError {
				from: value.type_name(),
				to: "Theme",
				message: Some("A game mode's theme must be a table.".to_owned()),
			});
		};

		let default = Theme::default();

		let theme = Self {
			name: table.get::<_, Option<String>>("name")?.unwrap_or(default.name),
			primary: table.get::<_, Option<TextColor>>("primary")?.unwrap_or(default.primary),
			accent: table.get::<_, Option<TextColor>>("accent")?.unwrap_or(default.accent),
			icon: table.get("icon")?,
		};

		Ok(theme)
	}
}
