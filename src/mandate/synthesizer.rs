//! Mandate synthesis: load inputs, decide, render, write.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::analyzer::{DocumentAnalyzer, ExistenceGatedAnalyzer};
use crate::config::SynthesizerConfig;
use crate::error::{FounderError, FounderResult};
use crate::mandate::decision::{build_mandate, format_score};
use crate::mandate::model::{MandateInputs, MandateOutput};
use crate::mandate::render::render_mandate;
use crate::mandate::sources::{
    load_contribution_log, load_growth_results, load_quality_report, BusinessProfile,
};

/// Builds founder-in-residence mandates from asset documents.
pub struct MandateSynthesizer {
    config: SynthesizerConfig,
    analyzer: Box<dyn DocumentAnalyzer>,
}

impl std::fmt::Debug for MandateSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MandateSynthesizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MandateSynthesizer {
    /// Creates a synthesizer with the existence-gated analyzer.
    #[must_use]
    pub fn new(config: SynthesizerConfig) -> Self {
        Self::with_analyzer(config, Box::new(ExistenceGatedAnalyzer))
    }

    /// Creates a synthesizer with a custom document analyzer.
    #[must_use]
    pub fn with_analyzer(config: SynthesizerConfig, analyzer: Box<dyn DocumentAnalyzer>) -> Self {
        Self { config, analyzer }
    }

    /// Resolved configuration.
    #[must_use]
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Loads the business plan through the analyzer.
    pub fn load_business_plan(&self) -> FounderResult<BusinessProfile> {
        self.analyzer.business_profile(&self.config.business_plan_path)
    }

    /// Loads all four input documents.
    ///
    /// # Errors
    ///
    /// Fails on a malformed quality report in strict mode, or on I/O errors
    /// other than a missing file.
    pub fn load_inputs(&self) -> FounderResult<MandateInputs> {
        info!("loading asset data");
        let inputs = MandateInputs {
            business: self.load_business_plan()?,
            contribution: load_contribution_log(&self.config.contribution_log_path)?,
            quality: load_quality_report(
                &self.config.quality_report_path,
                self.config.quality_parse_mode,
            )?,
            growth: load_growth_results(&self.config.growth_results_path),
        };
        info!("asset data loaded");
        Ok(inputs)
    }

    /// Loads inputs and produces the mandate data and text without writing.
    pub fn synthesize(&self) -> FounderResult<MandateOutput> {
        let inputs = self.load_inputs()?;
        let generation_time = Utc::now();
        let data = build_mandate(&inputs, self.config.low_signup_threshold, generation_time);
        let text = render_mandate(&data);

        info!(
            target_market = %data.business_summary.target_market,
            quality_score = %format_score(data.business_summary.ai_debt_score),
            traction_validated = data.business_summary.traction_validated,
            critical_skill = %data.critical_skill.skill,
            "mandate generated"
        );

        Ok(MandateOutput {
            data,
            text,
            generation_time,
        })
    }

    /// Writes the prompt text and the JSON data.
    ///
    /// # Errors
    ///
    /// Returns the first write or serialization failure.
    pub fn write_outputs(&self, output: &MandateOutput) -> FounderResult<()> {
        write_file(&self.config.prompt_output_path, &output.text)?;
        let json = serde_json::to_string_pretty(&output.data)?;
        write_file(&self.config.data_output_path, &json)?;

        info!(
            prompt = %self.config.prompt_output_path.display(),
            data = %self.config.data_output_path.display(),
            "mandate saved"
        );
        Ok(())
    }

    /// Synthesizes and writes the mandate.
    pub fn run(&self) -> FounderResult<MandateOutput> {
        let output = self.synthesize()?;
        self.write_outputs(&output)?;
        Ok(output)
    }
}

fn write_file(path: &Path, contents: &str) -> FounderResult<()> {
    std::fs::write(path, contents).map_err(|e| FounderError::io(path, e))
}

/// Generates and writes a mandate with default paths in the current directory.
///
/// # Errors
///
/// See [`MandateSynthesizer::run`].
pub fn generate_mandate() -> FounderResult<MandateOutput> {
    MandateSynthesizer::new(SynthesizerConfig::default()).run()
}
