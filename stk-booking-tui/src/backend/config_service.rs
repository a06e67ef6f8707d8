//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stk_booking_core::BookingConfig;

use crate::view::theme::Theme;

const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端地址，未设置时请求使用相对路径
    pub backend_url: Option<String>,
    pub theme: Theme,
}

impl AppConfig {
    /// 合并环境变量配置后得到核心库配置
    ///
    /// `from_env` 带有地址时优先于配置文件。
    pub fn booking_config(&self, from_env: BookingConfig) -> BookingConfig {
        if !from_env.is_relative() {
            return from_env;
        }
        BookingConfig::new(self.backend_url.clone().unwrap_or_default())
    }

    /// 读取 `BACKEND_URL` 后合并
    pub fn booking_config_from_env(&self) -> BookingConfig {
        self.booking_config(BookingConfig::from_env())
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用 `<config_dir>/stk-booking-tui/config.json`
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stk-booking-tui");
        Self::at(dir.join(CONFIG_FILE_NAME))
    }

    /// 使用指定路径
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> LocalConfigService {
        LocalConfigService::at(dir.path().join("nested").join(CONFIG_FILE_NAME))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
        let config = service_in(&dir).load().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
        let service = service_in(&dir);
        let config = AppConfig {
            backend_url: Some("https://api.stk.ro".into()),
            theme: Theme::Light,
        };
        service.save(&config).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(service.load().unwrap_or_else(|e| panic!("{e}")), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"theme":"light"}"#).unwrap_or_else(|e| panic!("{e}"));
        let config = LocalConfigService::at(path)
            .load()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.backend_url, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").unwrap_or_else(|e| panic!("{e}"));
        assert!(LocalConfigService::at(path).load().is_err());
    }

    #[test]
    fn env_url_wins_over_file() {
        let config = AppConfig {
            backend_url: Some("https://file.example".into()),
            theme: Theme::Dark,
        };
        assert_eq!(
            config
                .booking_config(BookingConfig::new("http://localhost:8000/"))
                .backend_base_url(),
            "http://localhost:8000"
        );
        assert_eq!(
            config
                .booking_config(BookingConfig::default())
                .backend_base_url(),
            "https://file.example"
        );
        assert!(AppConfig::default()
            .booking_config(BookingConfig::default())
            .is_relative());
    }
}
