use crate::application::dto::OutputFormat;
use crate::stack_definition::policies::StackVariant;
use clap::Parser;
use std::path::PathBuf;

/// Synthesize CloudFormation templates for an EC2 Image Builder web server pipeline
#[derive(Parser, Debug)]
#[command(name = "imagebuilder-stack")]
#[command(version)]
#[command(
    about = "Synthesize CloudFormation templates for an EC2 Image Builder web server pipeline",
    long_about = None
)]
pub struct Args {
    /// Stack name (required; falls back to BASE_STACK_NAME)
    #[arg(short = 'n', long, env = "BASE_STACK_NAME")]
    pub stack_name: Option<String>,

    /// Stack variant: full or reduced [default: full]
    #[arg(short = 'v', long)]
    pub variant: Option<StackVariant>,

    /// Output format: json, yaml or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (auto-discovers imagebuilder-stack.config.yml if not specified)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pipeline schedule: five-field cron or cron(...)
    #[arg(long, value_name = "EXPR", conflicts_with = "no_schedule")]
    pub schedule: Option<String>,

    /// Leave the pipeline manually triggered, even for the reduced variant
    #[arg(long)]
    pub no_schedule: bool,

    /// Deployment region; the parent image must be pinned to it
    #[arg(long)]
    pub region: Option<String>,

    /// Build and validate the template without writing any output
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
