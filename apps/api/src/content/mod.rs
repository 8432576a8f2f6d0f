// Profile content composition engine.
// Records flow: classifier (per skill) -> grouping (per collection) -> assembler (per page).
// The engine modules are synchronous and pure; only handlers.rs is async.

pub mod assembler;
pub mod catalog;
pub mod classifier;
pub mod grouping;
pub mod handlers;
pub mod profile_data;
