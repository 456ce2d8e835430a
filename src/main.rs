//! Command-line front end for Modcrab's game modes.
//! It lists and inspects game modes, and manages the paths Modcrab knows for each game.

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use modcrab_games::{
	lua::load_game_modes_from_dir,
	prelude::*,
	registry::GameModeRegistry,
	resolver::{check_game_files, infer_archive_root, scan_for_installation},
	util::misc::{default_settings_path, display_slice, LoadOrDefault, SaveLoad},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
	/// Print more logs. Pass twice for debug output.
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	/// The settings file holding each game's paths.
	#[arg(short, long)]
	settings: Option<PathBuf>,

	/// A directory of Lua files defining extra game modes.
	#[arg(short, long)]
	modes: Option<PathBuf>,

	/// The command to execute.
	#[command(subcommand)]
	cmd: Command,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Command {
	/// List every known game mode.
	List,

	/// Show everything known about a game mode.
	Show {
		/// The game mode's ID.
		mode: String,
	},

	/// Set the paths of a game mode.
	Set {
		/// The game mode's ID.
		mode: String,

		/// The folder mods are installed to.
		#[arg(long)]
		install: Option<PathBuf>,

		/// The game's executable.
		#[arg(long)]
		exe: Option<PathBuf>,
	},

	/// Forget the paths of a game mode.
	Unset {
		/// The game mode's ID.
		mode: String,
	},

	/// Search folders for a game's executable, and remember where it was found.
	Scan {
		/// The game mode's ID.
		mode: String,

		/// Folders that may hold the game.
		#[arg(required = true)]
		dirs: Vec<PathBuf>,
	},

	/// Check that a game's critical files and required tool are present.
	Check {
		/// The game mode's ID.
		mode: String,
	},

	/// Work out which folder of a mod archive maps to the game's mod folder.
	Infer {
		/// The game mode's ID.
		mode: String,

		/// Paths of the archive's entries.
		#[arg(required = true)]
		entries: Vec<PathBuf>,
	},
}

/// Entrypoint for the game mode CLI.
fn main() {
	let args = Cli::parse();

	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};

	if let Err(error) = SimpleLogger::new().with_colors(true).with_level(level).init() {
		Notice::from_preset(NoticePreset::Warning, "Logger")
			.add_field("Description", "Failed to start the logger, so no logs will be shown.")
			.add_field("Details", &error.to_string())
			.print();
	}

	if let Err(error) = run_command(args) { error.conv::<Notice>().print(); }
}

/// Runs the command specified by the passed CLI arguments.
fn run_command(args: Cli) -> AppResult<()> {
	let settings_path = match args.settings {
		Some(path) => path,
		None => default_settings_path()?,
	};

	let store = Arc::new(SettingsStore::from(PathSettingsData::load_or_default(&settings_path)?));
	let mut registry = GameModeRegistry::with_builtin_modes(store.clone())?;

	if let Some(ref dir) = args.modes {
		for record in load_game_modes_from_dir(dir, store.clone())? {
			registry.register(Arc::new(record))?;
		}
	}

	match args.cmd {
		Command::List => {
			let listing = registry.iter()
				.map(|m| format!("{} - {}", m.mode_theme().title(m.mode_id()), m.name()))
				.join("\n");

			println!("{listing}");
		},

		Command::Show { mode } => show_mode(registry.require(&mode)?.as_ref()),

		Command::Set { mode, install, exe } => {
			let id = registry.require(&mode)?.mode_id().to_owned();
			if install.is_none() && exe.is_none() {
				Notice::from_preset(NoticePreset::Warning, "Settings")
					.add_field("Description", "Nothing to set.")
					.add_field("Suggestion", "Pass '--install', '--exe', or both.")
					.print();

				return Ok(());
			}

			if let Some(path) = install { store.set_installation_path(&id, path); }
			if let Some(path) = exe { store.set_executable_path(&id, path); }

			store.snapshot().save(&settings_path)?;
			Notice::from_preset(NoticePreset::Success, "Settings")
				.add_field("Description", &format!("Updated the paths of '{id}'."))
				.print();
		},

		Command::Unset { mode } => {
			let id = registry.require(&mode)?.mode_id().to_owned();
			if store.clear(&id) {
				store.snapshot().save(&settings_path)?;
			}

			Notice::from_preset(NoticePreset::Success, "Settings")
				.add_field("Description", &format!("'{id}' has no configured paths."))
				.print();
		},

		Command::Scan { mode, dirs } => {
			let mode = registry.require(&mode)?;
			let found = scan_for_installation(mode.as_ref(), &dirs)?;

			store.set_installation_path(mode.mode_id(), &found.root);
			store.set_executable_path(mode.mode_id(), &found.executable);
			store.snapshot().save(&settings_path)?;

			Notice::from_preset(NoticePreset::Success, "Scan")
				.add_field("Description", &format!("Found {}.", mode.name()))
				.add_field("Installation", &found.root.display().to_string())
				.add_field("Executable", &found.executable.display().to_string())
				.print();
		},

		Command::Check { mode } => {
			let mode = registry.require(&mode)?;
			let tool = check_game_files(mode.as_ref())?;

			Notice::from_preset(NoticePreset::Success, "Check")
				.add_field("Description", &format!("{} has everything it needs.", mode.name()))
				.pipe(|n| match tool {
					Some(path) => n.add_field("Required Tool", &path.display().to_string()),
					None => n,
				})
				.print();
		},

		Command::Infer { mode, entries } => {
			let mode = registry.require(&mode)?;

			match infer_archive_root(mode.as_ref(), &entries) {
				Some(root) if root.as_os_str().is_empty() => println!("The archive's contents map directly onto the game's mod folder."),
				Some(root) => println!("{}", root.display()),
				None => Notice::from_preset(NoticePreset::Warning, "Archive")
					.add_field("Description", &format!("The archive has no folders or plugins that {} recognizes.", mode.name()))
					.print(),
			}
		},
	}

	Ok(())
}

/// Prints every property of a game mode.
fn show_mode(mode: &dyn GameModeDescriptor) {
	let path = |p: Option<PathBuf>| p.map_or_else(|| "(not set)".to_owned(), |p| p.display().to_string());
	let list = |l: Option<Vec<String>>| l.map_or_else(|| "(none)".to_owned(), |l| display_slice(&l));
	let text = |t: Option<String>| t.unwrap_or_else(|| "(none)".to_owned());

	let theme = mode.mode_theme();
	let tool = mode.required_tool();

	Notice::new(theme.primary, "GAME", mode.name())
		.add_field("Mode ID", mode.mode_id())
		.add_field("Executables", &display_slice(&mode.game_executables()))
		.add_field("Installation", &path(mode.installation_path()))
		.add_field("Secondary Installation", &path(mode.secondary_installation_path()))
		.add_field("Executable", &path(mode.executable_path()))
		.add_field("Plugin Directory", &mode.plugin_directory().display().to_string())
		.add_field("Plugin Extensions", &mode.plugin_extensions().iter().join(", "))
		.add_field("Stop Folders", &mode.stop_folders().iter().join(", "))
		.add_field("Critical Plugins", &list(mode.ordered_critical_plugin_names()))
		.add_field("Official Plugins", &list(mode.ordered_official_plugin_names()))
		.add_field("Unmanaged Plugins", &list(mode.ordered_official_unmanaged_plugin_names()))
		.add_field("Required Tool", &text(tool.as_ref().map(|t| t.name.clone())))
		.add_field("Required Tool Files", &list(tool.map(|t| t.file_names)))
		.add_field("Required Tool Message", &text(mode.required_tool_error_message()))
		.add_field("Critical Files Message", &text(mode.critical_files_error_message()))
		.add_field("Theme", &format!("{} ({}, {})", theme.name, theme.primary, theme.accent))
		.print();
}
