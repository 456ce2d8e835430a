//! This module defines the game modes supported out of the box.

use std::{path::PathBuf, sync::Arc};

use crate::prelude::*;

/// Folders found at the top of Bethesda game data, used to find where a mod's data starts inside its archive.
const BETHESDA_STOP_FOLDERS: &[&str] = &[
	"textures", "meshes", "music", "shaders", "video", "interface", "fonts", "scripts",
	"facegen", "menus", "lodsettings", "lsdata", "sound", "strings", "trees", "seq",
	"grass", "materials", "programs", "vis", "skse", "f4se",
];

/// Plugin extensions shared by modern Bethesda games.
const BETHESDA_PLUGIN_EXTENSIONS: &[&str] = &["esp", "esm", "esl"];

/// Generates the game modes that are supported out of the box, all reading from the same settings.
pub fn builtin_game_modes(settings: Arc<dyn PathSettings>) -> Vec<Arc<dyn GameModeDescriptor>> {
	let skyrim: Arc<dyn GameModeDescriptor> = Arc::new(SkyrimSE::new(settings.clone()));
	let fallout: Arc<dyn GameModeDescriptor> = Arc::new(Fallout4::new(settings.clone()));
	let unreal: Arc<dyn GameModeDescriptor> = Arc::new(UnrealTournament::new(settings));

	vec![skyrim, fallout, unreal]
}

/// Skyrim Special Edition.
pub struct SkyrimSE {
	settings: Arc<dyn PathSettings>,
}

impl SkyrimSE {
	pub const MODE_ID: &'static str = "skyrimse";

	pub fn new(settings: Arc<dyn PathSettings>) -> Self {
		Self { settings }
	}
}

impl GameModeDescriptor for SkyrimSE {
	fn name(&self) -> &str {
		"Skyrim Special Edition"
	}

	fn mode_id(&self) -> &str {
		Self::MODE_ID
	}

	fn game_executables(&self) -> Vec<String> {
		to_strings(&["SkyrimSE.exe", "SkyrimSELauncher.exe"])
	}

	fn mode_theme(&self) -> Theme {
		Theme::new("Skyrim", TextColor::True(196, 184, 150), TextColor::True(92, 124, 153))
	}

	fn plugin_directory(&self) -> PathBuf {
		PathBuf::from("Data")
	}

	fn settings(&self) -> &dyn PathSettings {
		self.settings.as_ref()
	}

	fn plugin_extensions(&self) -> IndexSet<String> {
		to_set(BETHESDA_PLUGIN_EXTENSIONS)
	}

	fn stop_folders(&self) -> IndexSet<String> {
		to_set(BETHESDA_STOP_FOLDERS)
	}

	fn ordered_critical_plugin_names(&self) -> Option<Vec<String>> {
		Some(to_strings(&["Skyrim.esm", "Update.esm"]))
	}

	fn ordered_official_plugin_names(&self) -> Option<Vec<String>> {
		Some(to_strings(&["Skyrim.esm", "Update.esm", "Dawnguard.esm", "HearthFires.esm", "Dragonborn.esm"]))
	}

	fn ordered_official_unmanaged_plugin_names(&self) -> Option<Vec<String>> {
		Some(to_strings(&[
			"ccBGSSSE001-Fish.esm",
			"ccBGSSSE025-AdvDSGS.esm",
			"ccBGSSSE037-Curios.esl",
			"ccQDRSSE001-SurvivalMode.esl",
		]))
	}

	fn critical_files_error_message(&self) -> Option<String> {
		Some("Skyrim.esm or Update.esm is missing from the Data folder. Verify the game's files through Steam, then try again.".to_owned())
	}
}

/// Fallout 4.
/// If no installation path is configured, this game mode falls back to the folder holding the configured executable.
pub struct Fallout4 {
	settings: Arc<dyn PathSettings>,
}

impl Fallout4 {
	pub const MODE_ID: &'static str = "fallout4";

	pub fn new(settings: Arc<dyn PathSettings>) -> Self {
		Self { settings }
	}
}

impl GameModeDescriptor for Fallout4 {
	fn name(&self) -> &str {
		"Fallout 4"
	}

	fn mode_id(&self) -> &str {
		Self::MODE_ID
	}

	fn game_executables(&self) -> Vec<String> {
		to_strings(&["Fallout4.exe", "Fallout4Launcher.exe"])
	}

	fn mode_theme(&self) -> Theme {
		Theme::new("Fallout", TextColor::True(26, 255, 128), TextColor::Yellow)
	}

	fn plugin_directory(&self) -> PathBuf {
		PathBuf::from("Data")
	}

	fn settings(&self) -> &dyn PathSettings {
		self.settings.as_ref()
	}

	fn installation_path(&self) -> Option<PathBuf> {
		self.settings.installation_path(self.mode_id())
			.or_else(|| self.executable_path()?.parent().map(PathBuf::from))
	}

	fn plugin_extensions(&self) -> IndexSet<String> {
		to_set(BETHESDA_PLUGIN_EXTENSIONS)
	}

	fn stop_folders(&self) -> IndexSet<String> {
		to_set(BETHESDA_STOP_FOLDERS)
	}

	fn ordered_critical_plugin_names(&self) -> Option<Vec<String>> {
		Some(to_strings(&["Fallout4.esm"]))
	}

	fn ordered_official_plugin_names(&self) -> Option<Vec<String>> {
		Some(to_strings(&[
			"Fallout4.esm",
			"DLCRobot.esm",
			"DLCworkshop01.esm",
			"DLCCoast.esm",
			"DLCworkshop02.esm",
			"DLCworkshop03.esm",
			"DLCNukaWorld.esm",
		]))
	}

	fn required_tool_name(&self) -> Option<String> {
		Some("F4SE".to_owned())
	}

	fn ordered_required_tool_file_names(&self) -> Option<Vec<String>> {
		Some(to_strings(&["f4se_loader.exe", "f4se_steam_loader.dll"]))
	}

	fn required_tool_error_message(&self) -> Option<String> {
		Some("Fallout 4 needs the Fallout 4 Script Extender (F4SE). Extract it into the game's folder, next to Fallout4.exe.".to_owned())
	}
}

/// Unreal Tournament (1999).
/// Its mods are spread over several top-level folders, and user content lives in a second folder under the home directory.
pub struct UnrealTournament {
	settings: Arc<dyn PathSettings>,
}

impl UnrealTournament {
	pub const MODE_ID: &'static str = "ut99";

	pub fn new(settings: Arc<dyn PathSettings>) -> Self {
		Self { settings }
	}
}

impl GameModeDescriptor for UnrealTournament {
	fn name(&self) -> &str {
		"Unreal Tournament (1999)"
	}

	fn mode_id(&self) -> &str {
		Self::MODE_ID
	}

	fn game_executables(&self) -> Vec<String> {
		to_strings(&["UnrealTournament.exe", "ut-bin", "ut-bin-amd64"])
	}

	fn mode_theme(&self) -> Theme {
		Theme::new("Unreal", TextColor::Red, TextColor::True(255, 170, 0))
	}

	fn plugin_directory(&self) -> PathBuf {
		PathBuf::from("System")
	}

	fn settings(&self) -> &dyn PathSettings {
		self.settings.as_ref()
	}

	fn secondary_installation_path(&self) -> Option<PathBuf> {
		dirs::home_dir().map(|home| home.join(".utpg"))
	}

	fn stop_folders(&self) -> IndexSet<String> {
		to_set(&["System", "Maps", "Textures", "Sounds", "Music"])
	}
}

fn to_strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

fn to_set(items: &[&str]) -> IndexSet<String> {
	items.iter().map(|s| s.to_string()).collect()
}
