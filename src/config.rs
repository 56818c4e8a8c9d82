//! 配置加载
//!
//! 从 TOML 文件读取分类列表和表单选项，文件不存在时使用默认值。

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Category, default_categories};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config must list at least one category")]
    NoCategories,

    #[error("category id {0} is listed more than once")]
    DuplicateCategory(u32),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    #[serde(default = "default_reset_after_submit")]
    pub reset_after_submit: bool,
}

fn default_reset_after_submit() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            reset_after_submit: default_reset_after_submit(),
        }
    }
}

/// 默认配置文件路径 (~/.config/calorie-form/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calorie-form").join("config.toml"))
}

impl AppConfig {
    /// 从文件加载配置，文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(ConfigError::DuplicateCategory(category.id));
            }
        }
        Ok(())
    }
}
