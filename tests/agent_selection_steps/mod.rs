//! Step definitions for agent selection BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
