//! Modcrab Games describes the games Modcrab knows how to manage.
//!
//! Each supported game is a *GameModeDescriptor*: its name and unique mode ID, where it is installed, which
//! executables identify it, how its plugins and mod archives are recognized, which plugins must load in a fixed
//! order, which external tool it needs, and how it is themed. Paths are looked up live in a *PathSettings*
//! handle given to each descriptor when it is built, so descriptors themselves never change.
//!
//! Built-in games live in [`games`], extra ones can be written in Lua (see [`lua`]), and all of them are
//! collected in a [`registry::GameModeRegistry`]. The [`resolver`] module finds installations and checks for
//! missing files using nothing but the descriptor contract.

pub mod games;
pub mod lua;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod structs;
pub mod util;

#[cfg(test)]
mod tests;
