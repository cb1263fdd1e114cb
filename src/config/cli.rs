use crate::config::toml_config::FinderConfig;
use crate::domain::model::Criteria;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "color-finder")]
#[command(about = "Fetch the color list and filter it by name, hex or complementary color")]
pub struct CliConfig {
    /// Color name, case-insensitive exact match
    #[arg(long)]
    pub name: Option<String>,

    /// Color hex code, case-insensitive exact match
    #[arg(long)]
    pub hex: Option<String>,

    /// Complementary color name, case-insensitive partial match
    #[arg(long)]
    pub comp_name: Option<String>,

    /// Complementary color hex code, case-insensitive exact match
    #[arg(long)]
    pub comp_hex: Option<String>,

    /// Color list URL [default: https://nt-cdn.s3.amazonaws.com/colors.json]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn criteria(&self) -> Criteria {
        Criteria {
            name: self.name.clone(),
            hex: self.hex.clone(),
            comp_name: self.comp_name.clone(),
            comp_hex: self.comp_hex.clone(),
        }
    }

    /// 合併 TOML 檔案與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<(FinderConfig, Criteria)> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                FinderConfig::from_file(path)?
            }
            None => FinderConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_seconds = Some(timeout);
        }

        let criteria = config.criteria.clone().merge(self.criteria());
        Ok((config, criteria))
    }
}
