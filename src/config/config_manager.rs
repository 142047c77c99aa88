// ==========================================
// 家庭住房分配系统 - 配置管理器
// ==========================================
// 职责: 配置加载（JSON 文件）与默认值回落
// ==========================================

use crate::config::packing_config::PackingConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误 ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: PackingConfig,
}

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径；None 时使用全部默认值
    ///
    /// # 返回
    /// - Ok(ConfigManager)
    /// - Err(ConfigError): 文件不可读或 JSON 格式错误
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::from_config(PackingConfig::default()));
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PackingConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), "已加载配置文件");
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: PackingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    pub fn into_config(self) -> PackingConfig {
        self.config
    }
}
