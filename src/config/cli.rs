use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "regform")]
#[command(about = "Validates a registration form and submits it to the user API")]
pub struct CliConfig {
    /// TOML file holding the form fields to submit
    #[arg(long)]
    pub input: String,

    #[arg(long, default_value = super::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_path("input", &self.input)?;
        Ok(())
    }
}
