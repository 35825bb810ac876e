//! appdeploy - App Engine deployment
//!
//! Usage:
//!   appdeploy deploy              # Deploy the staged app.yaml
//!   appdeploy deploy-all          # Deploy app.yaml and every descriptor present
//!   appdeploy deploy-cron         # Deploy a single descriptor
//!   appdeploy show-configuration  # Print the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appdeploy_core::commands::{
    DeployCommand, DeployOptions, DeployReport, DeployTarget, show_configuration,
};
use appdeploy_core::config::{ConfigOverrides, ConfigStore};
use appdeploy_core::context::DeployContext;
use appdeploy_core::deploy::DeployableKind;
use appdeploy_core::types::Environment;

#[derive(Parser)]
#[command(name = "appdeploy")]
#[command(about = "Deploy App Engine applications with gcloud", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    /// Config file (defaults to <project-root>/appengine.toml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the application (staged app.yaml only)
    Deploy(DeployArgs),

    /// Deploy app.yaml plus cron, dispatch, dos, index and queue descriptors
    DeployAll(DeployArgs),

    /// Deploy cron.yaml
    DeployCron(DeployArgs),

    /// Deploy dispatch.yaml
    DeployDispatch(DeployArgs),

    /// Deploy dos.yaml
    DeployDos(DeployArgs),

    /// Deploy index.yaml
    DeployIndex(DeployArgs),

    /// Deploy queue.yaml
    DeployQueue(DeployArgs),

    /// Show the effective configuration
    #[command(alias = "show-config")]
    ShowConfiguration(OverrideArgs),
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable summary
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
    /// No output on success
    Quiet,
}

#[derive(Clone, Copy, ValueEnum)]
enum EnvironmentArg {
    Standard,
    Flexible,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Standard => Environment::Standard,
            EnvironmentArg::Flexible => Environment::Flexible,
        }
    }
}

#[derive(Args, Clone, Default)]
struct OverrideArgs {
    /// App Engine environment
    #[arg(long, value_enum)]
    environment: Option<EnvironmentArg>,

    /// Project id: a literal, GCLOUD_CONFIG or APPENGINE_CONFIG
    #[arg(long)]
    project_id: Option<String>,

    /// Version: a literal, GCLOUD_CONFIG or APPENGINE_CONFIG
    #[arg(long = "app-version", value_name = "VERSION")]
    version: Option<String>,

    /// Directory holding cron/dispatch/dos/index/queue descriptors
    #[arg(long)]
    appengine_directory: Option<PathBuf>,

    /// Staging directory produced by the stage step
    #[arg(long)]
    staging_directory: Option<PathBuf>,

    /// Cloud SDK installation directory
    #[arg(long)]
    cloud_sdk_home: Option<PathBuf>,
}

#[derive(Args)]
struct DeployArgs {
    #[command(flatten)]
    overrides: OverrideArgs,

    /// Promote the deployed version to receive all traffic
    #[arg(long, overrides_with = "no_promote")]
    promote: bool,

    /// Do not promote the deployed version
    #[arg(long)]
    no_promote: bool,

    /// Stop the previously running version
    #[arg(long, overrides_with = "no_stop_previous_version")]
    stop_previous_version: bool,

    /// Keep the previously running version
    #[arg(long)]
    no_stop_previous_version: bool,

    /// Print the gcloud command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "appdeploy=debug,appdeploy_core=debug,info"
    } else {
        "appdeploy=info,appdeploy_core=info,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = config_store(&cli)?;

    match cli.command {
        Commands::Deploy(args) => run_deploy(&store, DeployTarget::App, args),
        Commands::DeployAll(args) => run_deploy(&store, DeployTarget::All, args),
        Commands::DeployCron(args) => run_descriptor(&store, DeployableKind::Cron, args),
        Commands::DeployDispatch(args) => run_descriptor(&store, DeployableKind::Dispatch, args),
        Commands::DeployDos(args) => run_descriptor(&store, DeployableKind::Dos, args),
        Commands::DeployIndex(args) => run_descriptor(&store, DeployableKind::Index, args),
        Commands::DeployQueue(args) => run_descriptor(&store, DeployableKind::Queue, args),
        Commands::ShowConfiguration(args) => run_show_configuration(&store, args),
    }
}

fn config_store(cli: &Cli) -> Result<ConfigStore> {
    let project_root = match &cli.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    Ok(match &cli.config {
        Some(path) => ConfigStore::with_config_path(project_root, path.clone()),
        None => ConfigStore::from_project_root(project_root),
    })
}

fn overrides(args: OverrideArgs) -> ConfigOverrides {
    ConfigOverrides {
        environment: args.environment.map(Environment::from),
        project_id: args.project_id,
        version: args.version,
        appengine_directory: args.appengine_directory,
        staging_directory: args.staging_directory,
        cloud_sdk_home: args.cloud_sdk_home,
        ..ConfigOverrides::default()
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn run_descriptor(store: &ConfigStore, kind: DeployableKind, args: DeployArgs) -> Result<()> {
    run_deploy(store, DeployTarget::Descriptor(kind), args)
}

fn run_deploy(store: &ConfigStore, target: DeployTarget, args: DeployArgs) -> Result<()> {
    let mut config_overrides = overrides(args.overrides.clone());
    config_overrides.promote = toggle(args.promote, args.no_promote);
    config_overrides.stop_previous_version =
        toggle(args.stop_previous_version, args.no_stop_previous_version);

    let ctx = DeployContext::load(store, config_overrides)?;
    let gcloud = ctx.gcloud()?;
    tracing::debug!(
        target = %target.describe(),
        gcloud = %gcloud.executable().display(),
        dry_run = args.dry_run,
        "Preparing deployment"
    );
    let options = DeployOptions::new(target).with_dry_run(args.dry_run);

    let report = DeployCommand::new(&ctx).execute(&options, &gcloud, &gcloud)?;

    print_deploy_result(&args, target, &report, gcloud.executable())
}

fn print_deploy_result(
    args: &DeployArgs,
    target: DeployTarget,
    report: &DeployReport,
    executable: &std::path::Path,
) -> Result<()> {
    match args.format {
        OutputFormat::Table => {
            if report.executed {
                println!("✓ Deployed {}", target.describe());
            } else {
                println!("{}", report.command_line(executable));
                return Ok(());
            }
            if let Some(project) = &report.plan.project_id {
                println!("  Project: {}", project);
            }
            if let Some(version) = &report.plan.version {
                println!("  Version: {}", version);
            }
            for path in &report.request.deployables {
                println!("  • {}", path.display());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "target": target.describe(),
                "executed": report.executed,
                "environment": report.plan.environment.as_str(),
                "project_id": report.plan.project_id,
                "version": report.plan.version,
                "deployables": report
                    .request
                    .deployables
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>(),
                "command": report.command_line(executable),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Quiet => {}
    }

    Ok(())
}

fn run_show_configuration(store: &ConfigStore, args: OverrideArgs) -> Result<()> {
    let ctx = DeployContext::load(store, overrides(args))?;
    print!("{}", show_configuration(&ctx)?);
    Ok(())
}
