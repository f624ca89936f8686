use crate::core::query::DEFAULT_ENDPOINT;
use crate::domain::ports::QueryConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_numeric_string, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "quake-report")]
#[command(about = "Lists recent earthquakes from the USGS feed")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = super::DEFAULT_MIN_MAGNITUDE)]
    pub min_magnitude: String,

    #[arg(long, default_value = super::DEFAULT_ORDER_BY)]
    pub order_by: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl QueryConfig for CliConfig {
    fn min_magnitude(&self) -> &str {
        &self.min_magnitude
    }

    fn order_by(&self) -> &str {
        &self.order_by
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_numeric_string("min_magnitude", &self.min_magnitude)?;
        validate_non_empty_string("order_by", &self.order_by)?;
        Ok(())
    }
}
