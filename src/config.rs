//! Configuration for Bookdex
//!
//! Centralized configuration with sensible defaults.

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::buffer::DEFAULT_CAPACITY;

/// Main configuration for a Bookdex session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Catalogue file. `None` means the shell asks for one on startup.
    pub catalogue_path: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Initial capacity of buffers created while reading input lines
    pub initial_buffer_capacity: usize,

    // -------------------------------------------------------------------------
    // Terminal Configuration
    // -------------------------------------------------------------------------
    /// Whether headings are printed with ANSI colour
    pub color: ColorMode,

    /// Prompt printed before each command
    pub prompt: String,
}

/// When to emit ANSI escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    Auto,

    /// Always colour
    Always,

    /// Never colour
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            initial_buffer_capacity: DEFAULT_CAPACITY,
            color: ColorMode::Auto,
            prompt: ">>> ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalogue file
    pub fn catalogue_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalogue_path = Some(path.into());
        self
    }

    /// Set the initial capacity of line buffers (in bytes)
    pub fn initial_buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_buffer_capacity = capacity;
        self
    }

    /// Set the colour mode
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.config.color = mode;
        self
    }

    /// Set the command prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
