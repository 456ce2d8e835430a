use std::{path::PathBuf, sync::Arc, thread};

use super::{fixed_settings, MinimalGame};
use crate::prelude::*;

#[test]
fn unset_optional_properties_use_their_defaults() {
	let game = MinimalGame::new("minimal", fixed_settings(&[], &[]));

	assert_eq!(game.secondary_installation_path(), None);
	assert!(game.plugin_extensions().is_empty());
	assert!(game.stop_folders().is_empty());
	assert_eq!(game.ordered_critical_plugin_names(), None);
	assert_eq!(game.ordered_official_plugin_names(), None);
	assert_eq!(game.ordered_official_unmanaged_plugin_names(), None);
	assert_eq!(game.required_tool_name(), None);
	assert_eq!(game.ordered_required_tool_file_names(), None);
	assert_eq!(game.required_tool_error_message(), None);
	assert_eq!(game.required_tool(), None);
	assert_eq!(game.critical_files_error_message(), None);
}

#[test]
fn paths_come_from_the_settings_when_present() {
	let settings = fixed_settings(&[("skyrim", "/games/skyrim")], &[]);
	let game = MinimalGame::new("skyrim", settings);

	assert_eq!(game.installation_path(), Some(PathBuf::from("/games/skyrim")));
	assert_eq!(game.executable_path(), None);
}

#[test]
fn executable_path_comes_from_its_own_mapping() {
	let settings = fixed_settings(&[], &[("skyrim", "/games/skyrim/SkyrimSE.exe")]);
	let game = MinimalGame::new("skyrim", settings);

	assert_eq!(game.executable_path(), Some(PathBuf::from("/games/skyrim/SkyrimSE.exe")));
	assert_eq!(game.installation_path(), None);
}

#[test]
fn unknown_mode_ids_resolve_to_nothing() {
	let settings = fixed_settings(&[("other", "/games/other")], &[("other", "/games/other/o.exe")]);
	let game = MinimalGame::new("minimal", settings);

	assert_eq!(game.installation_path(), None);
	assert_eq!(game.executable_path(), None);
}

#[test]
fn repeated_reads_are_identical() {
	let settings = fixed_settings(&[("minimal", "/games/minimal")], &[("minimal", "/games/minimal/minimal.exe")]);
	let game = MinimalGame::new("minimal", settings);

	assert_eq!(game.installation_path(), game.installation_path());
	assert_eq!(game.executable_path(), game.executable_path());
	assert_eq!(game.game_executables(), game.game_executables());
	assert_eq!(game.mode_theme(), game.mode_theme());
}

#[test]
fn paths_are_read_live_from_the_store() {
	let store = Arc::new(SettingsStore::new());
	let game = MinimalGame::new("minimal", store.clone());

	assert_eq!(game.installation_path(), None);

	store.set_installation_path("minimal", "/first");
	assert_eq!(game.installation_path(), Some(PathBuf::from("/first")));

	store.set_installation_path("minimal", "/second");
	store.set_executable_path("minimal", "/second/minimal.exe");
	assert_eq!(game.installation_path(), Some(PathBuf::from("/second")));
	assert_eq!(game.executable_path(), Some(PathBuf::from("/second/minimal.exe")));

	store.clear("minimal");
	assert_eq!(game.installation_path(), None);
	assert_eq!(game.executable_path(), None);
}

#[test]
fn overriding_critical_plugins_leaves_the_other_lists_absent() {
	let record = GameModeRecord::new("Test", "test", &["test.exe"], Theme::default(), "Data", fixed_settings(&[], &[]))
		.with_critical_plugins(&["base.plugin", "update.plugin"]);

	assert_eq!(record.ordered_critical_plugin_names(), Some(vec!["base.plugin".to_owned(), "update.plugin".to_owned()]));
	assert_eq!(record.ordered_official_plugin_names(), None);
	assert_eq!(record.ordered_official_unmanaged_plugin_names(), None);
}

#[test]
fn ordered_lists_keep_their_order() {
	let record = GameModeRecord::new("Test", "test", &["test.exe"], Theme::default(), "Data", fixed_settings(&[], &[]))
		.with_official_plugins(&["z.esm", "a.esm", "m.esm"]);

	assert_eq!(record.ordered_official_plugin_names(), Some(vec!["z.esm".to_owned(), "a.esm".to_owned(), "m.esm".to_owned()]));
}

#[test]
fn relative_plugin_directory_needs_an_installation() {
	let store = Arc::new(SettingsStore::new());
	let game = MinimalGame::new("minimal", store.clone());

	assert_eq!(game.resolved_plugin_directory(), None);

	store.set_installation_path("minimal", "/games/minimal");
	assert_eq!(game.resolved_plugin_directory(), Some(PathBuf::from("/games/minimal/plugins")));
}

#[test]
fn absolute_plugin_directory_is_used_as_is() {
	let record = GameModeRecord::new("Test", "test", &["test.exe"], Theme::default(), "/srv/plugins", fixed_settings(&[], &[]));

	assert_eq!(record.resolved_plugin_directory(), Some(PathBuf::from("/srv/plugins")));
}

#[test]
fn plugin_files_match_ignoring_case() {
	let record = GameModeRecord::new("Test", "test", &["test.exe"], Theme::default(), "Data", fixed_settings(&[], &[]))
		.with_plugin_extensions(&["esp", ".esm"]);

	assert!(record.is_plugin_file("Data/MyMod.ESP"));
	assert!(record.is_plugin_file("Master.esm"));
	assert!(!record.is_plugin_file("textures/rock.dds"));
	assert!(!record.is_plugin_file("README"));
}

#[test]
fn plugin_membership_ignores_case() {
	let record = GameModeRecord::new("Test", "test", &["test.exe"], Theme::default(), "Data", fixed_settings(&[], &[]))
		.with_critical_plugins(&["Base.esm"])
		.with_official_plugins(&["Base.esm", "DLC.esm"]);

	assert!(record.is_critical_plugin("base.esm"));
	assert!(!record.is_critical_plugin("dlc.esm"));
	assert!(record.is_official_plugin("DLC.ESM"));

	let minimal = MinimalGame::new("minimal", fixed_settings(&[], &[]));
	assert!(!minimal.is_critical_plugin("base.esm"));
}

#[test]
fn required_tool_bundles_all_three_parts() {
	let record = GameModeRecord::new("Test", "test", &["test.exe"], Theme::default(), "Data", fixed_settings(&[], &[]))
		.with_required_tool("Loader", &["loader.exe", "loader.dll"], Some("Install the loader."));

	let tool = record.required_tool().unwrap();
	assert_eq!(tool.name, "Loader");
	assert_eq!(tool.file_names, vec!["loader.exe".to_owned(), "loader.dll".to_owned()]);
	assert_eq!(tool.error_message.as_deref(), Some("Install the loader."));
}

#[test]
fn descriptors_work_behind_trait_objects() {
	let game: Arc<dyn GameModeDescriptor> = Arc::new(MinimalGame::new("minimal", fixed_settings(&[], &[("minimal", "/m.exe")])));

	assert_eq!(game.executable_path(), Some(PathBuf::from("/m.exe")));
	assert_eq!(game.plugin_directory(), PathBuf::from("plugins"));
}

#[test]
fn descriptors_can_be_read_while_the_store_is_written() {
	let store = Arc::new(SettingsStore::new());
	store.set_executable_path("minimal", "/game/minimal.exe");
	let game: Arc<dyn GameModeDescriptor> = Arc::new(MinimalGame::new("minimal", store.clone()));

	let writer = {
		let store = store.clone();
		thread::spawn(move || {
			for i in 0..200 {
				store.set_installation_path("minimal", format!("/install/{i}"));
			}
		})
	};

	let readers: Vec<_> = (0..4)
		.map(|_| {
			let game = game.clone();
			thread::spawn(move || {
				for _ in 0..200 {
					if let Some(path) = game.installation_path() {
						assert!(path.starts_with("/install"));
					}
					assert_eq!(game.executable_path(), Some(PathBuf::from("/game/minimal.exe")));
				}
			})
		})
		.collect();

	writer.join().unwrap();
	for reader in readers {
		reader.join().unwrap();
	}

	assert_eq!(game.installation_path(), Some(PathBuf::from("/install/199")));
}
