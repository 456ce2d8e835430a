use std::sync::Arc;

use super::{fixed_settings, MinimalGame};
use crate::{
	prelude::*,
	registry::{validate_required_tool, GameModeRegistry},
};

fn record(id: &str) -> GameModeRecord {
	GameModeRecord::new("Test Game", id, &["test.exe"], Theme::default(), "Data", fixed_settings(&[], &[]))
}

#[test]
fn builtin_mode_ids_are_unique_and_non_empty() {
	let registry = GameModeRegistry::with_builtin_modes(fixed_settings(&[], &[])).unwrap();

	assert_eq!(registry.mode_ids(), vec!["skyrimse", "fallout4", "ut99"]);
	assert!(registry.iter().all(|m| !m.mode_id().is_empty()));
}

#[test]
fn empty_mode_id_is_rejected() {
	let mut registry = GameModeRegistry::new();

	let error = registry.register(Arc::new(record(""))).unwrap_err();
	assert_eq!(error, RegistryError::EmptyModeId("Test Game".to_owned()));
	assert!(registry.is_empty());
}

#[test]
fn duplicate_mode_id_is_rejected_ignoring_case() {
	let mut registry = GameModeRegistry::new();
	registry.register(Arc::new(record("morrowind"))).unwrap();

	let error = registry.register(Arc::new(record("Morrowind"))).unwrap_err();
	assert_eq!(error, RegistryError::DuplicateModeId("Morrowind".to_owned()));
	assert_eq!(registry.len(), 1);
}

#[test]
fn lookups_ignore_case() {
	let mut registry = GameModeRegistry::new();
	registry.register(Arc::new(MinimalGame::new("Minimal", fixed_settings(&[], &[])))).unwrap();

	assert_eq!(registry.get("minimal").map(|m| m.name()), Some("Minimal Game"));
	assert!(registry.get("other").is_none());
	assert!(matches!(registry.require("other"), Err(AppError::Game(GameError::UnknownMode(id))) if id == "other"));
}

#[test]
fn only_ascii_letters_are_folded() {
	let mut registry = GameModeRegistry::new();
	registry.register(Arc::new(record("Ärger"))).unwrap();
	registry.register(Arc::new(record("ärger"))).unwrap();

	assert_eq!(registry.len(), 2);
	assert_eq!(registry.get("ÄRGER").map(|m| m.mode_id()), Some("Ärger"));
	assert_eq!(registry.get("äRGER").map(|m| m.mode_id()), Some("ärger"));
}

#[test]
fn registration_order_is_kept() {
	let mut registry = GameModeRegistry::new();
	for id in ["c", "a", "b"] {
		registry.register(Arc::new(record(id))).unwrap();
	}

	assert_eq!(registry.mode_ids(), vec!["c", "a", "b"]);
}

#[test]
fn complete_or_absent_tools_are_valid() {
	assert_eq!(validate_required_tool(&record("none")), Ok(()));
	assert_eq!(validate_required_tool(&record("full").with_required_tool("Loader", &["loader.exe"], Some("Install it."))), Ok(()));
	assert_eq!(validate_required_tool(&record("quiet").with_required_tool("Loader", &["loader.exe"], None)), Ok(()));
}

#[test]
fn partial_tools_are_rejected() {
	let no_files = record("nofiles").with_required_tool("Loader", &[], None);
	assert!(matches!(validate_required_tool(&no_files), Err(RegistryError::InconsistentRequiredTool { .. })));

	let blank_name = record("blank").with_required_tool("  ", &["loader.exe"], None);
	assert!(matches!(validate_required_tool(&blank_name), Err(RegistryError::InconsistentRequiredTool { .. })));

	let mut nameless = record("nameless").data().clone();
	nameless.required_tool_files = Some(vec!["loader.exe".to_owned()]);
	let nameless = nameless.into_record(fixed_settings(&[], &[]));
	assert!(matches!(validate_required_tool(&nameless), Err(RegistryError::InconsistentRequiredTool { mode_id, .. }) if mode_id == "nameless"));

	let mut message_only = record("message").data().clone();
	message_only.required_tool_error = Some("Install it.".to_owned());
	let message_only = message_only.into_record(fixed_settings(&[], &[]));
	assert!(validate_required_tool(&message_only).is_err());

	let mut registry = GameModeRegistry::new();
	assert!(registry.register(Arc::new(no_files)).is_err());
	assert!(registry.is_empty());
}
