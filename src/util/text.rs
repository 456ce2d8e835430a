//! This module provides facilities for coloring and styling strings.
//! Game mode themes are built from *TextColor*, so colors can also be parsed from names and Lua values.

// Source for ANSI codes: https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A trait to provide text styling capability to strings.
pub trait FancyText {
	/// Stylize a string with the provided options.
	///
	/// # Parameters
	/// *style* - The text style to use, such as bold or italic.
	/// *foreground* - The color of the text itself.
	/// *background* - The color of the text's background.
	fn stylize(
		&self,
		style: Option<TextStyle>,
		foreground: Option<TextColor>,
		background: Option<TextColor>,
	) -> String;
}

/// The ANSI escape code to reset all styles and colors.
const ANSI_RESET: &str = "\x1B[0m";

/// Various styles of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextStyle {
	/// **Bold** text.
	Bold,

	/// *Italic* text.
	Italic,

	/// Underlined text.
	Underlined,
}

/// Various text colors available in the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TextColor {
	True(u8, u8, u8), // RGB
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	White,
}

impl FancyText for str {
	fn stylize(
		&self,
		style: Option<TextStyle>,
		foreground: Option<TextColor>,
		background: Option<TextColor>,
	) -> String {
		let style_code = style.map(|s| s.ansi()).unwrap_or_default();
		let fg_code = foreground.map(|c| c.ansi_fg()).unwrap_or_default();
		let bg_code = background.map(|c| c.ansi_bg()).unwrap_or_default();

		format!("{style_code}{fg_code}{bg_code}{self}{ANSI_RESET}")
	}
}

impl TextStyle {
	/// Returns this style's associated ANSI escape code.
	pub fn ansi(&self) -> String {
		match self {
			TextStyle::Bold => "\x1B[1m",
			TextStyle::Italic => "\x1B[3m",
			TextStyle::Underlined => "\x1B[4m",
		}.to_owned()
	}
}

impl TextColor {
	/// Returns this color's ANSI escape code for the text's foreground.
	pub fn ansi_fg(&self) -> String {
		match self {
			TextColor::True(r, g, b) => format!("\x1B[38;2;{r};{g};{b}m"),
			basic => format!("\x1B[3{}m", basic.basic_index()),
		}
	}

	/// Returns this color's ANSI escape code for the text's background.
	pub fn ansi_bg(&self) -> String {
		match self {
			TextColor::True(r, g, b) => format!("\x1B[48;2;{r};{g};{b}m"),
			basic => format!("\x1B[4{}m", basic.basic_index()),
		}
	}

	/// The position of a named color in the basic 8-color ANSI palette.
	/// True colors map to 9, which is the terminal's default color.
	fn basic_index(&self) -> u8 {
		match self {
			TextColor::Black => 0,
			TextColor::Red => 1,
			TextColor::Green => 2,
			TextColor::Yellow => 3,
			TextColor::Blue => 4,
			TextColor::Magenta => 5,
			TextColor::Cyan => 6,
			TextColor::White => 7,
			TextColor::True(..) => 9,
		}
	}
}

impl Display for TextColor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TextColor::True(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
			other => write!(f, "{}", format!("{other:?}").to_lowercase()),
		}
	}
}

impl FromStr for TextColor {
	type Err = String;

	/// Parses either a basic color's name or a hex code in the form of '#rrggbb'.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let color = match s.to_lowercase().as_str() {
			"black" => TextColor::Black,
			"red" => TextColor::Red,
			"green" => TextColor::Green,
			"yellow" => TextColor::Yellow,
			"blue" => TextColor::Blue,
			"magenta" => TextColor::Magenta,
			"cyan" => TextColor::Cyan,
			"white" => TextColor::White,
			hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
				let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
				TextColor::True(channel(1)?, channel(3)?, channel(5)?)
			},
			other => return Err(format!("'{other}' is not a color name or '#rrggbb' hex code.")),
		};

		Ok(color)
	}
}

impl<'lua> FromLua<'lua> for TextColor {
	/// Colors in Lua are either a string (see *TextColor::from_str*) or a table of three channels.
	fn from_lua(value: LuaValue<'lua>, lua: &'lua Lua) -> LuaResult<Self> {
		if value.is_string() {
			return String::from_lua(value, lua)?
				.parse()
				.map_err(|message| LuaError::FromLuaConversionError {
					from: "string",
					to: "TextColor",
					message: Some(message),
				});
		}

		let Ok([r, g, b]) = <[u8; 3]>::try_from(Vec::<u8>::from_lua(value, lua)?) else {
			return Err(LuaError::FromLuaConversionError {
				from: "table",
				to: "TextColor",
				message: Some("A color table needs exactly three channels: { r, g, b }.".to_owned()),
			});
		};

		Ok(TextColor::True(r, g, b))
	}
}
