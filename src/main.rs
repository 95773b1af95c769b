use imagebuilder_stack::adapters::outbound::console::StderrProgressReporter;
use imagebuilder_stack::application::dto::{OutputFormat, SynthRequest};
use imagebuilder_stack::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use imagebuilder_stack::application::use_cases::SynthesizeStackUseCase;
use imagebuilder_stack::cli::Args;
use imagebuilder_stack::config::{self, ConfigFile};
use imagebuilder_stack::ports::outbound::ProgressReporter;
use imagebuilder_stack::shared::error::ExitCode;
use imagebuilder_stack::shared::Result;
use imagebuilder_stack::stack_definition::domain::{ScheduleExpression, StackOptions};
use imagebuilder_stack::stack_definition::policies::StackVariant;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments and 0 for --help / --version
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        StderrProgressReporter::new().report_error(&error_report(&e));
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Error message followed by its cause chain
fn error_report(error: &anyhow::Error) -> String {
    let mut report = format!("\n❌ An error occurred:\n\n{}", error);
    for cause in error.chain().skip(1) {
        report.push_str(&format!("\n\nCaused by: {}", cause));
    }
    report.push('\n');
    report
}

/// Settings after layering CLI flags over the config file over the preset
struct ResolvedSettings {
    variant: StackVariant,
    format: OutputFormat,
    options: StackOptions,
    region: Option<String>,
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config.as_ref())?;

    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&format!("📦 Variant: {}", settings.variant));

    let use_case = SynthesizeStackUseCase::new(progress_reporter);
    let request = SynthRequest::new(args.stack_name.clone(), settings.options)
        .with_target_region(settings.region);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let rendered = formatter.format(&response.stack)?;

    if args.dry_run {
        eprintln!("🔎 Dry run: template validated, nothing written");
        return Ok(());
    }

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&rendered)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<ResolvedSettings> {
    let config_variant = config.map(ConfigFile::variant).transpose()?.flatten();
    let config_format = config.map(ConfigFile::format).transpose()?.flatten();

    let variant = args.variant.or(config_variant).unwrap_or_default();
    let format = args.format.or(config_format).unwrap_or_default();

    let mut options = variant.options();
    if let Some(config) = config {
        config.apply_to(&mut options)?;
    }

    if args.no_schedule {
        options.schedule_expression = None;
    } else if let Some(expression) = &args.schedule {
        options.schedule_expression = Some(ScheduleExpression::new(expression.as_str())?);
    }

    let region = args
        .region
        .clone()
        .or_else(|| config.and_then(|c| c.region.clone()));

    Ok(ResolvedSettings {
        variant,
        format,
        options,
        region,
    })
}
