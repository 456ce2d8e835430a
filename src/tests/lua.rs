use std::{fs, path::PathBuf, sync::Arc};

use tempfile::tempdir;

use super::fixed_settings;
use crate::{
	lua::{load_game_modes_from_dir, load_game_modes_from_str},
	prelude::*,
};

const MORROWIND: &str = r##"
return {
	{
		"Morrowind",
		id = "morrowind",
		exe = "Morrowind.exe",
		plugins = "Data Files",
		ext = { "esp", "esm" },
		stop = { "meshes", "textures" },
		critical = { "Morrowind.esm" },
		official = { "Morrowind.esm", "Tribunal.esm", "Bloodmoon.esm" },
		tool = { "MGE XE", files = { "MGEXEgui.exe", "MGEXE.dll" }, error = "Install MGE XE." },
		critical_error = "Morrowind.esm is missing.",
		theme = { name = "Vvardenfell", primary = "#c8aa5a", accent = { 90, 60, 30 }, icon = "morrowind.png" },
	},
	{ "Tiny", id = "tiny", plugins = "mods" },
}
"##;

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn full_game_mode_is_parsed() {
	let settings = fixed_settings(&[("morrowind", "/games/morrowind")], &[]);
	let modes = load_game_modes_from_str(MORROWIND, "morrowind.lua", settings).unwrap();
	assert_eq!(modes.len(), 2);

	let mw = &modes[0];
	assert_eq!(mw.name(), "Morrowind");
	assert_eq!(mw.mode_id(), "morrowind");
	assert_eq!(mw.game_executables(), strings(&["Morrowind.exe"]));
	assert_eq!(mw.plugin_directory(), PathBuf::from("Data Files"));
	assert_eq!(mw.plugin_extensions().into_iter().collect::<Vec<_>>(), strings(&["esp", "esm"]));
	assert_eq!(mw.stop_folders().into_iter().collect::<Vec<_>>(), strings(&["meshes", "textures"]));
	assert_eq!(mw.ordered_critical_plugin_names(), Some(strings(&["Morrowind.esm"])));
	assert_eq!(mw.ordered_official_plugin_names(), Some(strings(&["Morrowind.esm", "Tribunal.esm", "Bloodmoon.esm"])));
	assert_eq!(mw.ordered_official_unmanaged_plugin_names(), None);
	assert_eq!(mw.required_tool_name().as_deref(), Some("MGE XE"));
	assert_eq!(mw.ordered_required_tool_file_names(), Some(strings(&["MGEXEgui.exe", "MGEXE.dll"])));
	assert_eq!(mw.required_tool_error_message().as_deref(), Some("Install MGE XE."));
	assert_eq!(mw.critical_files_error_message().as_deref(), Some("Morrowind.esm is missing."));
	assert_eq!(mw.installation_path(), Some(PathBuf::from("/games/morrowind")));

	let theme = mw.mode_theme();
	assert_eq!(theme.name, "Vvardenfell");
	assert_eq!(theme.primary, TextColor::True(0xc8, 0xaa, 0x5a));
	assert_eq!(theme.accent, TextColor::True(90, 60, 30));
	assert_eq!(theme.icon.as_deref(), Some("morrowind.png"));
}

#[test]
fn sparse_game_mode_keeps_defaults() {
	let modes = load_game_modes_from_str(MORROWIND, "morrowind.lua", fixed_settings(&[], &[])).unwrap();

	let tiny = &modes[1];
	assert!(tiny.game_executables().is_empty());
	assert!(tiny.plugin_extensions().is_empty());
	assert!(tiny.stop_folders().is_empty());
	assert_eq!(tiny.ordered_critical_plugin_names(), None);
	assert_eq!(tiny.required_tool(), None);
	assert_eq!(tiny.secondary_installation_path(), None);
	assert_eq!(tiny.mode_theme().name, "Tiny");
}

#[test]
fn tool_can_be_just_a_name() {
	let source = r#"return { { "Named", id = "named", plugins = "x", tool = "Loader" } }"#;
	let modes = load_game_modes_from_str(source, "named.lua", fixed_settings(&[], &[])).unwrap();

	assert_eq!(modes[0].required_tool_name().as_deref(), Some("Loader"));
	assert_eq!(modes[0].ordered_required_tool_file_names(), None);
}

#[test]
fn empty_list_is_kept_distinct_from_nil() {
	let source = r#"return { { "Empty", id = "empty", plugins = "x", critical = {} } }"#;
	let modes = load_game_modes_from_str(source, "empty.lua", fixed_settings(&[], &[])).unwrap();

	assert_eq!(modes[0].ordered_critical_plugin_names(), Some(Vec::new()));
	assert_eq!(modes[0].ordered_official_plugin_names(), None);
}

#[test]
fn returning_nothing_yields_no_modes() {
	let modes = load_game_modes_from_str("local unused = 1", "nothing.lua", fixed_settings(&[], &[])).unwrap();
	assert!(modes.is_empty());
}

#[test]
fn missing_required_fields_are_errors() {
	let no_id = r#"return { { "No ID", plugins = "x" } }"#;
	assert!(matches!(load_game_modes_from_str(no_id, "no_id.lua", fixed_settings(&[], &[])), Err(AppError::Lua(_))));

	let no_plugins = r#"return { { "No Plugins", id = "np" } }"#;
	assert!(matches!(load_game_modes_from_str(no_plugins, "np.lua", fixed_settings(&[], &[])), Err(AppError::Lua(_))));

	let bad_color = r#"return { { "Bad", id = "bad", plugins = "x", theme = { primary = "puce" } } }"#;
	assert!(matches!(load_game_modes_from_str(bad_color, "bad.lua", fixed_settings(&[], &[])), Err(AppError::Lua(_))));
}

#[test]
fn sandbox_hides_unsafe_libraries() {
	let source = r#"os.remove("anything") return nil"#;
	assert!(matches!(load_game_modes_from_str(source, "escape.lua", fixed_settings(&[], &[])), Err(AppError::Lua(_))));

	let source = r#"return { { string.upper("safe"), id = "safe", plugins = "x" } }"#;
	let modes = load_game_modes_from_str(source, "safe.lua", fixed_settings(&[], &[])).unwrap();
	assert_eq!(modes[0].name(), "SAFE");
}

#[test]
fn directory_files_load_in_name_order() {
	let dir = tempdir().unwrap();
	fs::write(dir.path().join("b.lua"), r#"return { { "Beta", id = "beta", plugins = "x" } }"#).unwrap();
	fs::write(dir.path().join("a.lua"), r#"return { { "Alpha", id = "alpha", plugins = "x" } }"#).unwrap();
	fs::write(dir.path().join("notes.txt"), "not lua").unwrap();

	let store = Arc::new(SettingsStore::new());
	let modes = load_game_modes_from_dir(dir.path(), store.clone()).unwrap();
	assert_eq!(modes.iter().map(|m| m.mode_id()).collect::<Vec<_>>(), vec!["alpha", "beta"]);

	store.set_installation_path("beta", "/games/beta");
	assert_eq!(modes[1].installation_path(), Some(PathBuf::from("/games/beta")));
}

#[test]
fn missing_directory_is_an_error() {
	let dir = tempdir().unwrap();

	let result = load_game_modes_from_dir(dir.path().join("does_not_exist"), fixed_settings(&[], &[]));
	assert!(matches!(result, Err(AppError::IO(_))));
}

#[test]
fn each_file_gets_its_own_environment() {
	let dir = tempdir().unwrap();
	fs::write(dir.path().join("a.lua"), r#"SHARED = "leaked" math = nil string.upper = nil return nil"#).unwrap();
	fs::write(dir.path().join("b.lua"), r#"return { { SHARED or "clean", id = tostring(math ~= nil), plugins = string.upper("x") } }"#).unwrap();

	let modes = load_game_modes_from_dir(dir.path(), fixed_settings(&[], &[])).unwrap();

	assert_eq!(modes.len(), 1);
	assert_eq!(modes[0].name(), "clean");
	assert_eq!(modes[0].mode_id(), "true");
	assert_eq!(modes[0].plugin_directory(), PathBuf::from("X"));
}
