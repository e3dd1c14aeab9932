pub mod order;
pub mod toml_config;

pub use order::Order;
pub use toml_config::DispenserConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "coffee-dispenser")]
#[command(about = "Serve coffee orders against a finite stock and keep a report of every attempt")]
pub struct CliConfig {
    /// Orders to serve in sequence, as SIZE[:SUGAR] (e.g. medium:2 large small:-1)
    #[arg(value_name = "ORDER")]
    pub orders: Vec<Order>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report file, overrides the configuration file
    #[arg(long)]
    pub report_path: Option<String>,

    /// Print the remaining stock as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併配置檔與命令列參數，命令列優先
    pub fn resolve(&self) -> crate::utils::error::Result<DispenserConfig> {
        let mut config = match &self.config {
            Some(path) => DispenserConfig::from_file(path)?,
            None => DispenserConfig::default(),
        };

        if let Some(report_path) = &self.report_path {
            config.report.path = report_path.clone();
        }

        Ok(config)
    }
}
