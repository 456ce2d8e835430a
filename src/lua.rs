//! This module contains code related to Lua interop.
//! Users can describe extra game modes in Lua files, which are evaluated here.

use std::{ffi::OsStr, io, path::Path, sync::Arc};

use walkdir::WalkDir;

use crate::prelude::*;

/// Evaluates every Lua file in a directory and collects the game modes they return.
/// Files are evaluated in order of their names, each in its own sandbox, and each one may return a list of game modes or nothing.
///
/// # Errors
/// Fails if the directory, or anything inside it, can't be read.
pub fn load_game_modes_from_dir(dir: impl AsRef<Path>, settings: Arc<dyn PathSettings>) -> AppResult<Vec<GameModeRecord>> {
	let lua = Lua::new();
	let mut records = Vec::new();

	for entry in WalkDir::new(dir.as_ref()).sort_by_file_name() {
		let script = entry.map_err(io::Error::from)?;
		if !script.file_type().is_file() || script.path().extension() != Some(OsStr::new("lua")) {
			continue;
		}

		debug!("Evaluating game modes in '{}'.", script.path().display());

		let found = lua.load(script.path())
			.set_environment(build_sandbox(&lua)?)
			.eval::<Option<Vec<RawGameModeRecord>>>()?
			.unwrap_or_default();

		info!("Loaded {} game mode(s) from '{}'.", found.len(), script.path().display());
		records.extend(found.into_iter().map(|r| r.into_record(settings.clone())));
	}

	Ok(records)
}

/// Evaluates a single chunk of Lua source and collects the game modes it returns.
/// The chunk's name is only used in error messages.
pub fn load_game_modes_from_str(source: &str, chunk_name: &str, settings: Arc<dyn PathSettings>) -> AppResult<Vec<GameModeRecord>> {
	let lua = Lua::new();
	let sandbox = build_sandbox(&lua)?;

	let records = lua.load(source)
		.set_name(chunk_name)
		.set_environment(sandbox)
		.eval::<Option<Vec<RawGameModeRecord>>>()?
		.unwrap_or_default()
		.into_iter()
		.map(|r| r.into_record(settings.clone()))
		.collect();

	Ok(records)
}

/// Builds a sandbox environment to use with the user's Lua files.
/// This sandbox is a fresh table holding copies of the safe parts of Lua's standard library.
fn build_sandbox(lua: &Lua) -> AppResult<LuaTable<'_>> {
	let sandbox_env: LuaTable = lua.load(include_str!("sandbox.lua"))
		.set_name("SANDBOX")
		.eval()?;

	Ok(sandbox_env)
}

/// Retrieves a Lua value or table of values and then converts that into a *Vec<V>*.
/// A single value becomes a list of one, while nil becomes *None* so that "absent" and "empty" stay distinct.
pub fn table_item_to_vec<'lua, K: IntoLua<'lua>, V: FromLua<'lua>>(lua: &'lua Lua, table: &LuaTable<'lua>, key: K) -> LuaResult<Option<Vec<V>>> {
	match table.get::<_, LuaValue>(key)? {
		LuaValue::Nil => Ok(None),
		list @ LuaValue::Table(_) => Ok(Some(Vec::<V>::from_lua(list, lua)?)),
		single => Ok(Some(vec![V::from_lua(single, lua)?])),
	}
}
