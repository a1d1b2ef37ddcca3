use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-utils")]
#[command(about = "Small utility toolbox with a CSV round-trip demo")]
pub struct CliConfig {
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "demo.csv")]
    pub csv_name: String,

    #[arg(long, default_value = "A man, a plan, a canal: Panama")]
    pub phrase: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("csv_name", &self.csv_name)?;
        validation::validate_file_extension("csv_name", &self.csv_name, &["csv", "tsv"])?;
        Ok(())
    }
}
