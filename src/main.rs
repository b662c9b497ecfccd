//! healthassist - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use healthassist::{
    cli::{Args, Commands, Verbosity},
    config::Config,
    doctor::Doctor,
    errors::DiagnosisError,
    inference::InferenceAdapter,
    models::{ModelPaths, ModelRegistry},
    repl::{DisplayManager, ReplSession},
    schema::{Disease, FieldValue, FormCollector},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load, inference or compute failure, or a failed doctor check
const EXIT_FAILURE: i32 = 1;
/// Submission rejected before reaching a model
const EXIT_REJECTED: i32 = 2;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(msg) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), msg);
        std::process::exit(EXIT_REJECTED);
    }

    let loaded = Config::load(args.config.as_deref());

    let verbosity = effective_verbosity(&args, loaded.as_ref().ok());
    init_logging(verbosity);

    // Doctor reports a broken configuration as a failed check
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) if matches!(args.command, Some(Commands::Doctor)) => (Config::default(), Some(e)),
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to load configuration")),
    };

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    let paths = config.model_paths(args.models_dir.as_deref());
    tracing::debug!(?paths, "resolved model paths");

    let code = match &args.command {
        Some(Commands::Predict { disease, values, set }) => {
            run_predict(&paths, *disease, values, set, verbosity)?
        }
        Some(Commands::Schema { disease }) => {
            let display = DisplayManager::new();
            match disease {
                Some(disease) => display.show_schema(*disease),
                None => Disease::ALL.iter().for_each(|d| display.show_schema(*d)),
            }
            0
        }
        Some(Commands::About) => {
            DisplayManager::new().show_about();
            0
        }
        Some(Commands::Start) => {
            run_repl(&paths, &config)?;
            0
        }
        Some(Commands::Doctor) => run_doctor(config, config_error, paths),
        Some(Commands::Config) => {
            show_config(&args, &config, &paths)?;
            0
        }
        None => {
            println!("Health Assistant v{} - Multiple Disease Prediction", env!("CARGO_PKG_VERSION"));
            println!("\nUsage:");
            println!("  healthassist predict <disease> <values..>   Classify measurements");
            println!("  healthassist predict <disease> --set F=V    Classify starting from defaults");
            println!("  healthassist schema [disease]               List input fields");
            println!("  healthassist start                          Interactive mode");
            println!("  healthassist about                          About the diseases");
            println!("  healthassist doctor                         Check model artifacts");
            println!("  healthassist config                         Show configuration");
            println!("\nExample:");
            println!("  healthassist predict diabetes 0 100 80 20 100 25 0.5 30");
            println!();
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Command-line flags win over the configured default
fn effective_verbosity(args: &Args, config: Option<&Config>) -> Verbosity {
    if args.quiet || args.verbose > 0 {
        return args.verbosity();
    }
    config
        .and_then(|c| Verbosity::from_name(&c.display.default_verbosity))
        .unwrap_or(Verbosity::Normal)
}

fn init_logging(verbosity: Verbosity) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| verbosity.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_registry(paths: &ModelPaths) -> Result<ModelRegistry> {
    ModelRegistry::load(paths).context("Failed to load model artifacts (run 'healthassist doctor' for details)")
}

fn run_predict(
    paths: &ModelPaths,
    disease: Disease,
    values: &[String],
    overrides: &[String],
    verbosity: Verbosity,
) -> Result<i32> {
    let display = DisplayManager::new();

    let raw_fields: Vec<FieldValue> = if values.is_empty() {
        let mut form = FormCollector::new(disease);
        for assignment in overrides {
            if let Err(e) = form.apply(assignment) {
                display.show_error(&format!("Submission rejected: {}", e));
                return Ok(EXIT_REJECTED);
            }
        }
        form.values()
    } else {
        values.iter().map(|v| FieldValue::from(v.as_str())).collect()
    };

    let registry = load_registry(paths)?;
    let adapter = InferenceAdapter::new(&registry);

    match adapter.classify(disease, &raw_fields) {
        Ok(result) => {
            if verbosity.show_decorations() {
                display.show_result(&result);
            } else {
                println!("{}", result);
            }
            Ok(0)
        }
        Err(e @ DiagnosisError::InvalidInput { .. }) => {
            display.show_error(&format!("Submission rejected: {}", e));
            Ok(EXIT_REJECTED)
        }
        Err(e) => {
            tracing::error!(error = %e, "prediction failed");
            display.show_error("Prediction failed.");
            Ok(EXIT_FAILURE)
        }
    }
}

fn run_repl(paths: &ModelPaths, config: &Config) -> Result<()> {
    let registry = load_registry(paths)?;
    let mut session = ReplSession::with_history(&registry, config.history_file())?;
    session.show_welcome(env!("CARGO_PKG_VERSION"));
    session.run()
}

fn run_doctor(config: Config, config_error: Option<DiagnosisError>, paths: ModelPaths) -> i32 {
    let mut doctor = Doctor::new(config, paths);
    if let Some(e) = config_error {
        doctor = doctor.with_config_error(e);
    }
    let checks = doctor.run_diagnostics();
    Doctor::print_report(&checks);

    let display = DisplayManager::new();
    if Doctor::overall_status(&checks) {
        display.show_success("All checks passed.");
        0
    } else {
        display.show_error("Some checks failed.");
        EXIT_FAILURE
    }
}

fn show_config(args: &Args, config: &Config, paths: &ModelPaths) -> Result<()> {
    let source = match (&args.config, Config::default_path()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };

    println!("{} {}\n", "Configuration:".bold().cyan(), source);
    println!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);

    println!("{}", "Resolved model artifacts:".bold());
    for disease in Disease::ALL {
        println!("  {:<22} {}", disease.title(), paths.get(disease).display());
    }
    println!();
    Ok(())
}
