pub mod profile;

use crate::core::fetcher::SourceSpec;
use crate::domain::model::{ResumeVariant, Section};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ANIMATION_URL: &str =
    "https://assets7.lottiefiles.com/packages/lf20_qp1q7mct.json";
const DEFAULT_RESUME_URL: &str =
    "https://raw.githubusercontent.com/mayaraghavan/portfolio/main/Maya_Raghavan_Resume.pdf";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio")]
#[command(about = "Render a single-person portfolio site in the terminal")]
pub struct CliConfig {
    #[arg(
        long,
        value_delimiter = ',',
        help = "Sections to select after the initial Home render"
    )]
    pub visit: Vec<Section>,

    #[arg(long, help = "Override the catalog's resume variant (pdf or docx)")]
    pub resume_format: Option<ResumeVariant>,

    #[arg(long, help = "TOML profile replacing the built-in content catalog")]
    pub profile: Option<PathBuf>,

    #[arg(long, default_value = "./assets")]
    pub assets_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_ANIMATION_URL)]
    pub animation_url: String,

    #[arg(long, default_value = DEFAULT_RESUME_URL)]
    pub resume_url: String,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "2")]
    pub retry_attempts: u32,

    #[arg(long, default_value = "1")]
    pub retry_delay_seconds: u64,

    #[arg(long, help = "Drop remote sources from every asset chain")]
    pub offline: bool,

    #[arg(long, help = "Directory to save the resume into after rendering")]
    pub save_resume: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    // Chains follow the local-file-then-remote-mirror pattern. `--offline`
    // leaves only the local entries.

    pub fn animation_chain(&self) -> Vec<SourceSpec> {
        let mut chain = vec![SourceSpec::local(self.assets_dir.join("animation.json"))];
        if !self.offline {
            chain.push(SourceSpec::remote(
                self.animation_url.clone(),
                self.timeout_seconds,
            ));
        }
        chain
    }

    pub fn portrait_chain(&self) -> Vec<SourceSpec> {
        vec![SourceSpec::local(self.assets_dir.join("placeholder.png"))]
    }

    pub fn resume_chain(&self, variant: ResumeVariant) -> Vec<SourceSpec> {
        let mut chain = vec![SourceSpec::local(
            self.assets_dir.join(format!("resume.{}", variant.extension())),
        )];
        if !self.offline {
            chain.push(SourceSpec::remote(
                self.resume_url.clone(),
                self.timeout_seconds,
            ));
        }
        chain
    }
}

impl ConfigProvider for CliConfig {
    fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("animation_url", &self.animation_url)?;
        validate_url("resume_url", &self.resume_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResumeVariant;

    fn config() -> CliConfig {
        CliConfig::parse_from(["folio"])
    }

    #[test]
    fn test_defaults_validate() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_resume_chain_is_local_then_remote() {
        let chain = config().resume_chain(ResumeVariant::Pdf);
        assert_eq!(chain.len(), 2);
        assert!(matches!(&chain[0], SourceSpec::Local { path } if path.ends_with("resume.pdf")));
        assert!(matches!(&chain[1], SourceSpec::Remote { .. }));
    }

    #[test]
    fn test_offline_drops_remote_sources() {
        let mut cfg = config();
        cfg.offline = true;
        assert!(cfg
            .animation_chain()
            .iter()
            .all(|s| matches!(s, SourceSpec::Local { .. })));
        assert!(cfg
            .resume_chain(ResumeVariant::Docx)
            .iter()
            .all(|s| matches!(s, SourceSpec::Local { .. })));
    }

    #[test]
    fn test_remote_sources_carry_configured_timeout() {
        let mut cfg = config();
        cfg.timeout_seconds = 9;
        let chain = cfg.animation_chain();
        assert!(chain
            .iter()
            .any(|s| matches!(s, SourceSpec::Remote { timeout_seconds, .. } if *timeout_seconds == 9)));
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut cfg = config();
        cfg.animation_url = "ftp://example.com/a.json".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut cfg = config();
        cfg.timeout_seconds = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_visit_list_parses_sections() {
        let cfg = CliConfig::parse_from(["folio", "--visit", "skills,contact"]);
        assert_eq!(cfg.visit, vec![Section::Skills, Section::Contact]);
    }
}
