//! This module finds and checks a game's files using only what its descriptor reports.
//! File names are matched ignoring ASCII case, as Windows games under Proton rarely agree with themselves on casing.

use std::{
	collections::HashSet,
	fs,
	path::{Component, Path, PathBuf},
};

use crate::{prelude::*, util::misc::replace_path_home_prefix};

/// Where a game was found by *scan_for_installation*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstall {
	/// The folder holding the game's executable.
	pub root: PathBuf,

	/// The executable that was found.
	pub executable: PathBuf,
}

/// Scans a list of folders for one holding any of the game's executables.
/// Folders are checked in order, and within each folder the executables are checked in the game's own order.
/// A leading '~' in a folder is replaced with the user's home directory.
pub fn scan_for_installation(mode: &dyn GameModeDescriptor, candidates: &[PathBuf]) -> AppResult<ResolvedInstall> {
	let executables = mode.game_executables();

	if executables.is_empty() {
		return Err(GameError::ScanUnavailable(mode.mode_id().to_owned()).into());
	}

	let mut searched = Vec::with_capacity(candidates.len());
	for candidate in candidates {
		let root = replace_path_home_prefix(candidate)?;
		debug!("Scanning '{}' for {}.", root.display(), mode.name());

		if let Some(executable) = executables.iter().find_map(|exe| find_ignore_case(&root, exe)) {
			info!("Found {} at '{}'.", mode.name(), root.display());
			return Ok(ResolvedInstall { root, executable });
		}

		searched.push(root);
	}

	Err(GameError::ScanFailed { mode_id: mode.mode_id().to_owned(), searched }.into())
}

/// Lists the game's critical plugins that are missing from its plugin directory, in load order.
/// A game mode without critical plugins is never missing any.
pub fn missing_critical_files(mode: &dyn GameModeDescriptor) -> AppResult<Vec<String>> {
	let Some(critical) = mode.ordered_critical_plugin_names() else {
		return Ok(Vec::new());
	};

	let Some(dir) = mode.resolved_plugin_directory() else {
		return Err(GameError::MissingInstallation(mode.mode_id().to_owned()).into());
	};

	let present = lowercase_file_names(&dir)?;

	let missing = critical.into_iter()
		.filter(|name| !present.contains(&name.to_lowercase()))
		.collect();

	Ok(missing)
}

/// Like *missing_critical_files*, but any missing file becomes an error carrying the game's own message.
pub fn check_critical_files(mode: &dyn GameModeDescriptor) -> AppResult<()> {
	let files = missing_critical_files(mode)?;
	if files.is_empty() { return Ok(()); }

	warn!("{} is missing critical files: {}", mode.name(), files.iter().join(", "));

	Err(GameError::MissingCriticalFiles {
		mode_id: mode.mode_id().to_owned(),
		files,
		message: mode.critical_files_error_message(),
	}.into())
}

/// Looks for the game's required tool in a folder, returning the first of its files that exists.
/// Returns *None* if the game mode doesn't need a tool.
pub fn locate_required_tool(mode: &dyn GameModeDescriptor, search_root: impl AsRef<Path>) -> AppResult<Option<PathBuf>> {
	let Some(tool) = mode.required_tool() else {
		return Ok(None);
	};

	let search_root = search_root.as_ref();
	if let Some(found) = tool.file_names.iter().find_map(|f| find_ignore_case(search_root, f)) {
		debug!("Found {} at '{}'.", tool.name, found.display());
		return Ok(Some(found));
	}

	Err(GameError::MissingTool {
		tool: tool.name,
		files: tool.file_names,
		message: tool.error_message,
	}.into())
}

/// Runs every check a game mode asks for: its critical files, then its required tool inside the installation folder.
/// The installation is only needed for the tool, so a mode without one passes once its critical files are present.
/// Returns where the required tool was found, if the mode has one.
pub fn check_game_files(mode: &dyn GameModeDescriptor) -> AppResult<Option<PathBuf>> {
	check_critical_files(mode)?;

	if mode.required_tool().is_none() {
		return Ok(None);
	}

	let Some(root) = mode.installation_path() else {
		return Err(GameError::MissingInstallation(mode.mode_id().to_owned()).into());
	};

	locate_required_tool(mode, root)
}

/// Infers which folder inside a mod archive corresponds to the game's mod folder.
///
/// The shallowest entry passing through one of the game's stop folders decides: everything above that stop folder
/// is the archive's wrapping. If no entry has a stop folder, the folder holding the shallowest plugin file is used.
/// Returns *None* if neither is found, and an empty path if the archive needs no unwrapping.
pub fn infer_archive_root(mode: &dyn GameModeDescriptor, entries: &[impl AsRef<Path>]) -> Option<PathBuf> {
	let stop_folders = mode.stop_folders();

	let by_stop_folder = entries.iter()
		.filter_map(|entry| {
			entry.as_ref()
				.components()
				.position(|c| matches!(c, Component::Normal(name)
					if stop_folders.iter().any(|s| name.to_str().is_some_and(|n| n.eq_ignore_ascii_case(s)))))
				.map(|depth| (depth, entry.as_ref().components().take(depth).collect::<PathBuf>()))
		})
		.min_by_key(|(depth, _)| *depth);

	if let Some((_, root)) = by_stop_folder {
		return Some(root);
	}

	entries.iter()
		.map(|entry| -> &Path { entry.as_ref() })
		.filter(|entry| mode.is_plugin_file(entry))
		.min_by_key(|entry| entry.components().count())
		.map(|entry| entry.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// Finds a file directly inside a folder, ignoring ASCII case.
fn find_ignore_case(dir: &Path, name: &str) -> Option<PathBuf> {
	let exact = dir.join(name);
	if exact.is_file() { return Some(exact); }

	fs::read_dir(dir).ok()?
		.filter_map(|r| r.ok())
		.find(|e| e.file_name().to_str().is_some_and(|n| n.eq_ignore_ascii_case(name)))
		.map(|e| e.path())
		.filter(|p| p.is_file())
}

/// Collects the lowercased names of every entry directly inside a folder.
/// A folder that doesn't exist holds nothing.
fn lowercase_file_names(dir: &Path) -> AppResult<HashSet<String>> {
	if !dir.exists() { return Ok(HashSet::new()); }

	let names = fs::read_dir(dir)?
		.filter_map(|r| r.ok())
		.filter_map(|e| e.file_name().to_str().map(str::to_lowercase))
		.collect();

	Ok(names)
}
