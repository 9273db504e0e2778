// Catalog admin shared type definitions
// Each submodule defines types used across the panel.

pub mod catalog;
pub mod errors;
pub mod navigation;
pub mod session;
pub mod settings;
pub mod tab;
