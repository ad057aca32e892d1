//! founderx command line
//!
//! Runs the growth simulator or the mandate synthesizer to completion.
//! Exits with status 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use founderx::{
    FounderConfig, FounderResult, GrowthSimulator, LaunchOptions, MandateSynthesizer,
    QualityParseMode, SaveOutcome,
};

/// FounderX asset validation workflows
#[derive(Parser)]
#[command(name = "founderx")]
#[command(about = "Growth campaign simulation and FIR mandate synthesis", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path [default: <dir>/founderx.toml if present]
    #[arg(short, long, global = true, env = "FOUNDERX_CONFIG")]
    config: Option<PathBuf>,

    /// Working directory for inputs and outputs
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Log level
    #[arg(long, global = true, env = "FOUNDERX_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true, env = "FOUNDERX_LOG_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch a simulated growth campaign for a project
    Growth {
        /// Project identifier, used in the results file name
        #[arg(short, long)]
        project_id: String,

        /// Business plan document [default: Business_Plan.md]
        #[arg(short, long)]
        business_plan: Option<PathBuf>,

        /// Deployed MVP URL recorded in the results
        #[arg(long)]
        deployment_url: Option<String>,
    },

    /// Synthesize the founder-in-residence mandate
    Mandate {
        /// How malformed numbers in the quality report are handled
        #[arg(long, value_parser = ["strict", "lenient"])]
        quality_mode: Option<String>,

        /// Growth results document [default: AGAResults.json]
        #[arg(long)]
        growth_results: Option<PathBuf>,
    },
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn run_growth(
    config: FounderConfig,
    dir: &std::path::Path,
    project_id: &str,
    options: LaunchOptions,
) -> FounderResult<()> {
    let mut sim_config = config.simulator;
    if sim_config.output_dir.is_relative() {
        sim_config.output_dir = dir.join(&sim_config.output_dir);
    }
    let options = LaunchOptions {
        business_plan_path: Some(
            dir.join(
                options
                    .business_plan_path
                    .unwrap_or_else(|| sim_config.business_plan_path.clone()),
            ),
        ),
        ..options
    };

    let simulator = GrowthSimulator::new(sim_config)?;
    let outcome = simulator.launch_campaign(project_id, &options)?;
    let report = &outcome.report;

    println!();
    println!("Final Results:");
    println!("  Campaign ID:        {}", report.campaign_id);
    println!("  Traction Validated: {}", report.traction_validated);
    println!("  Total Signups:      {}", report.campaign_results.total_signups);
    println!("  Total Revenue:      ${:.2}", report.campaign_results.total_revenue);
    match &outcome.save {
        SaveOutcome::Saved(path) => println!("  Results File:       {}", path.display()),
        SaveOutcome::Failed { path, reason } => {
            println!("  Results File:       not saved to {} ({reason})", path.display());
        }
    }
    Ok(())
}

fn run_mandate(
    config: FounderConfig,
    dir: &std::path::Path,
    quality_mode: Option<String>,
    growth_results: Option<PathBuf>,
) -> FounderResult<()> {
    let mut synth_config = config.synthesizer;
    if let Some(mode) = quality_mode {
        synth_config.quality_parse_mode = mode.parse::<QualityParseMode>()?;
    }
    if let Some(path) = growth_results {
        synth_config.growth_results_path = path;
    }
    let synth_config = synth_config.rooted_at(dir);

    let output = MandateSynthesizer::new(synth_config.clone()).run()?;
    let summary = &output.data.business_summary;

    println!();
    println!("FIR Generation Complete");
    println!("  Target Market:  {}", summary.target_market);
    println!(
        "  Quality Score:  {}/100",
        founderx::mandate::decision::format_score(summary.ai_debt_score)
    );
    println!(
        "  Traction:       {}",
        if summary.traction_validated { "Validated" } else { "Pending" }
    );
    println!("  Critical Need:  {}", output.data.critical_skill.skill);
    println!("  Prompt:         {}", synth_config.prompt_output_path.display());
    println!("  Data:           {}", synth_config.data_output_path.display());
    Ok(())
}

fn run(cli: Cli) -> FounderResult<()> {
    let config = FounderConfig::load(cli.config.as_deref(), &cli.dir)?;

    match cli.command {
        Command::Growth {
            project_id,
            business_plan,
            deployment_url,
        } => run_growth(
            config,
            &cli.dir,
            &project_id,
            LaunchOptions {
                business_plan_path: business_plan,
                deployment_url,
            },
        ),
        Command::Mandate {
            quality_mode,
            growth_results,
        } => run_mandate(config, &cli.dir, quality_mode, growth_results),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
