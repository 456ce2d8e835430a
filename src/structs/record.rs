//! This module provides a descriptor built entirely from data.
//! It backs every game mode that users define in Lua, and it's handy anywhere a one-off game mode is needed.

use std::{fmt, path::PathBuf, sync::Arc};

use crate::{lua::table_item_to_vec, prelude::*};

/// A game mode whose every property is a plain field.
/// Optional fields start at their defaults and are filled in through the 'with' methods.
#[derive(Clone)]
pub struct GameModeRecord {
	settings: Arc<dyn PathSettings>,
	data: RawGameModeRecord,
}

/// The data of a *GameModeRecord*, without the settings it reads paths from.
/// This is what Lua configs produce; see *RawGameModeRecord::into_record*.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawGameModeRecord {
	pub name: String,
	pub mode_id: String,
	pub game_executables: Vec<String>,
	pub mode_theme: Theme,
	pub plugin_directory: PathBuf,
	pub secondary_installation_path: Option<PathBuf>,
	pub plugin_extensions: IndexSet<String>,
	pub stop_folders: IndexSet<String>,
	pub critical_plugins: Option<Vec<String>>,
	pub official_plugins: Option<Vec<String>>,
	pub official_unmanaged_plugins: Option<Vec<String>>,
	pub required_tool_name: Option<String>,
	pub required_tool_files: Option<Vec<String>>,
	pub required_tool_error: Option<String>,
	pub critical_files_error: Option<String>,
}

impl GameModeRecord {
	/// Builds a record from every required property.
	pub fn new(
		name: &str,
		mode_id: &str,
		game_executables: &[&str],
		mode_theme: Theme,
		plugin_directory: impl Into<PathBuf>,
		settings: Arc<dyn PathSettings>,
	) -> Self {
		let data = RawGameModeRecord {
			name: name.to_owned(),
			mode_id: mode_id.to_owned(),
			game_executables: to_owned_vec(game_executables),
			mode_theme,
			plugin_directory: plugin_directory.into(),
			..Default::default()
		};

		Self { settings, data }
	}

	/// Sets the secondary installation path.
	pub fn with_secondary_installation_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.data.secondary_installation_path = Some(path.into());
		self
	}

	/// Sets the plugin extensions.
	pub fn with_plugin_extensions(mut self, extensions: &[&str]) -> Self {
		self.data.plugin_extensions = extensions.iter().map(|e| e.to_string()).collect();
		self
	}

	/// Sets the stop folders.
	pub fn with_stop_folders(mut self, folders: &[&str]) -> Self {
		self.data.stop_folders = folders.iter().map(|f| f.to_string()).collect();
		self
	}

	/// Sets the critical plugins, in load order.
	pub fn with_critical_plugins(mut self, plugins: &[&str]) -> Self {
		self.data.critical_plugins = Some(to_owned_vec(plugins));
		self
	}

	/// Sets the official plugins, in load order.
	pub fn with_official_plugins(mut self, plugins: &[&str]) -> Self {
		self.data.official_plugins = Some(to_owned_vec(plugins));
		self
	}

	/// Sets the official plugins that cannot be managed, in load order.
	pub fn with_official_unmanaged_plugins(mut self, plugins: &[&str]) -> Self {
		self.data.official_unmanaged_plugins = Some(to_owned_vec(plugins));
		self
	}

	/// Sets the whole required tool at once.
	pub fn with_required_tool(mut self, name: &str, files: &[&str], error: Option<&str>) -> Self {
		self.data.required_tool_name = Some(name.to_owned());
		self.data.required_tool_files = Some(to_owned_vec(files));
		self.data.required_tool_error = error.map(str::to_owned);
		self
	}

	/// Sets the message for missing critical files.
	pub fn with_critical_files_error(mut self, message: &str) -> Self {
		self.data.critical_files_error = Some(message.to_owned());
		self
	}

	/// Gives direct access to this record's data.
	pub fn data(&self) -> &RawGameModeRecord {
		&self.data
	}
}

impl fmt::Debug for GameModeRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GameModeRecord").field("data", &self.data).finish_non_exhaustive()
	}
}

impl GameModeDescriptor for GameModeRecord {
	fn name(&self) -> &str {
		&self.data.name
	}

	fn mode_id(&self) -> &str {
		&self.data.mode_id
	}

	fn game_executables(&self) -> Vec<String> {
		self.data.game_executables.clone()
	}

	fn mode_theme(&self) -> Theme {
		self.data.mode_theme.clone()
	}

	fn plugin_directory(&self) -> PathBuf {
		self.data.plugin_directory.clone()
	}

	fn settings(&self) -> &dyn PathSettings {
		self.settings.as_ref()
	}

	fn secondary_installation_path(&self) -> Option<PathBuf> {
		self.data.secondary_installation_path.clone()
	}

	fn plugin_extensions(&self) -> IndexSet<String> {
		self.data.plugin_extensions.clone()
	}

	fn stop_folders(&self) -> IndexSet<String> {
		self.data.stop_folders.clone()
	}

	fn ordered_critical_plugin_names(&self) -> Option<Vec<String>> {
		self.data.critical_plugins.clone()
	}

	fn ordered_official_plugin_names(&self) -> Option<Vec<String>> {
		self.data.official_plugins.clone()
	}

	fn ordered_official_unmanaged_plugin_names(&self) -> Option<Vec<String>> {
		self.data.official_unmanaged_plugins.clone()
	}

	fn required_tool_name(&self) -> Option<String> {
		self.data.required_tool_name.clone()
	}

	fn ordered_required_tool_file_names(&self) -> Option<Vec<String>> {
		self.data.required_tool_files.clone()
	}

	fn required_tool_error_message(&self) -> Option<String> {
		self.data.required_tool_error.clone()
	}

	fn critical_files_error_message(&self) -> Option<String> {
		self.data.critical_files_error.clone()
	}
}

impl RawGameModeRecord {
	/// Attaches settings to this data, producing a usable descriptor.
	pub fn into_record(self, settings: Arc<dyn PathSettings>) -> GameModeRecord {
		GameModeRecord { settings, data: self }
	}
}

impl<'lua> FromLua<'lua> for RawGameModeRecord {
	fn from_lua(value: LuaValue<'lua>, lua: &'lua Lua) -> LuaResult<Self> {
		let Some(table) = value.as_table() else {
			return Err(LuaError::FromLuaConversionError {
				from: value.type_name(),
				to: "GameModeRecord",
				message: Some("A game mode must be a table.".to_owned()),
			});
		};

		let Some(name) = table.get::<_, Option<String>>(1)? else {
			return Err(LuaError::FromLuaConversionError {
				from: "table",
				to: "GameModeRecord",
				message: Some("The first item in a game mode should be a string containing its name.".to_owned()),
			});
		};

		let Some(mode_id) = table.get::<_, Option<String>>("id")? else {
			return Err(LuaError::FromLuaConversionError {
				from: "table",
				to: "GameModeRecord",
				message: Some(format!("The game mode {name} is missing its 'id' field.")),
			});
		};

		let Some(plugin_directory) = table.get::<_, Option<String>>("plugins")? else {
			return Err(LuaError::FromLuaConversionError {
				from: "table",
				to: "GameModeRecord",
				message: Some(format!("The game mode {name} is missing its 'plugins' directory.")),
			});
		};

		let (required_tool_name, required_tool_files, required_tool_error) = match table.get::<_, LuaValue>("tool")? {
			LuaValue::Nil => (None, None, None),
			LuaValue::String(tool) => (Some(tool.to_str()?.to_owned()), None, None),
			LuaValue::Table(tool) => (
				tool.get::<_, Option<String>>(1)?,
				table_item_to_vec::<_, String>(lua, &tool, "files")?,
				tool.get::<_, Option<String>>("error")?,
			),
			other => return Err(LuaError::FromLuaConversionError {
				from: other.type_name(),
				to: "RequiredTool",
				message: Some(format!("The required tool of {name} must be a string or table.")),
			}),
		};

		let record = Self {
			game_executables: table_item_to_vec(lua, table, "exe")?.unwrap_or_default(),
			mode_theme: table.get::<_, Option<Theme>>("theme")?.unwrap_or_else(|| Theme { name: name.clone(), ..Default::default() }),
			plugin_directory: plugin_directory.into(),
			secondary_installation_path: table.get::<_, Option<String>>("secondary")?.map(PathBuf::from),
			plugin_extensions: table_item_to_vec(lua, table, "ext")?.unwrap_or_default().into_iter().collect(),
			stop_folders: table_item_to_vec(lua, table, "stop")?.unwrap_or_default().into_iter().collect(),
			critical_plugins: table_item_to_vec(lua, table, "critical")?,
			official_plugins: table_item_to_vec(lua, table, "official")?,
			official_unmanaged_plugins: table_item_to_vec(lua, table, "unmanaged")?,
			required_tool_name,
			required_tool_files,
			required_tool_error,
			critical_files_error: table.get("critical_error")?,
			name,
			mode_id,
		};

		Ok(record)
	}
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}
