use crate::adapters::report::DEFAULT_REPORT_PATH;
use crate::core::Stock;
use crate::utils::error::{DispenserError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispenserConfig {
    pub report: ReportConfig,
    #[serde(default)]
    pub stock: StockConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockConfig {
    pub cups: Option<u32>,
    pub sugar: Option<u32>,
    pub coffee: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl Default for DispenserConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                path: DEFAULT_REPORT_PATH.to_string(),
            },
            stock: StockConfig::default(),
            logging: None,
        }
    }
}

impl DispenserConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DispenserError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DispenserError::ConfigParseError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 初始庫存，缺少的欄位使用預設值
    pub fn initial_stock(&self) -> Stock {
        let defaults = Stock::default();
        Stock {
            cups: self.stock.cups.unwrap_or(defaults.cups),
            sugar: self.stock.sugar.unwrap_or(defaults.sugar),
            coffee: self.stock.coffee.unwrap_or(defaults.coffee),
        }
    }

    pub fn report_path(&self) -> &str {
        &self.report.path
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for DispenserConfig {
    fn validate(&self) -> Result<()> {
        validate_path("report.path", &self.report.path)?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
