use crate::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSVを探すフォルダ
    pub input_dir: PathBuf,
    /// 出力JSONファイル
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("TKT"),
            output: PathBuf::from("ticket_data.json"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TicketError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ticket-extract").join("config.json"))
    }

    /// 引数で指定があればそちらを優先
    pub fn resolve(&self, input_dir: Option<PathBuf>, output: Option<PathBuf>) -> (PathBuf, PathBuf) {
        (
            input_dir.unwrap_or_else(|| self.input_dir.clone()),
            output.unwrap_or_else(|| self.output.clone()),
        )
    }
}
