use serde::Deserialize;
use std::path::Path;
use vq_codec::{Initialization, TrainOptions};

use crate::error::AppError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Palette training settings
    #[serde(default)]
    pub compression: CompressionConfig,

    /// Output settings for decompression
    #[serde(default)]
    pub decompression: DecompressionConfig,
}

/// Palette training settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CompressionConfig {
    /// Number of palette colors (1-256)
    #[serde(default = "default_palette_size")]
    pub palette_size: u16,

    /// Iteration cap for k-means
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Seed for k-means++ initialization
    #[serde(default)]
    pub seed: u64,

    /// "kmeans++" or "popularity"
    #[serde(default = "default_initialization")]
    pub initialization: String,

    /// Use multiple threads for training
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_palette_size() -> u16 {
    64
}

fn default_max_iterations() -> u32 {
    vq_codec::train::DEFAULT_MAX_ITERATIONS
}

fn default_initialization() -> String {
    "kmeans++".to_string()
}

fn default_parallel() -> bool {
    true
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            palette_size: default_palette_size(),
            max_iterations: default_max_iterations(),
            seed: 0,
            initialization: default_initialization(),
            parallel: default_parallel(),
        }
    }
}

/// Output settings for decompression
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DecompressionConfig {
    /// Write an indexed (PLTE) PNG instead of 24-bit RGB
    #[serde(default)]
    pub indexed_png: bool,
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// A missing path means defaults. An unreadable or invalid file is
    /// logged and also yields defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        palette_size = config.compression.palette_size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

impl CompressionConfig {
    /// Convert to codec training options, validating every field
    pub fn to_train_options(&self) -> Result<TrainOptions, AppError> {
        let initialization: Initialization = self
            .initialization
            .parse()
            .map_err(|e: vq_codec::ConfigError| AppError::Config(e.to_string()))?;

        let options = TrainOptions::new(usize::from(self.palette_size))
            .max_iterations(self.max_iterations)
            .seed(self.seed)
            .initialization(initialization)
            .parallel(self.parallel);
        options
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(options)
    }
}
