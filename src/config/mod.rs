//! Configuration module for kakeibo
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KakeiboPaths;
pub use settings::{Settings, SettingsPatch};
