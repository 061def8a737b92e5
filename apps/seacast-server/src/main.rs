use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use modkit::{DbModule, Module, ModuleCtx, ModuleCtxBuilder, RestfulModule};
use modkit_db::{ConnectOpts, DbHandle};
use runtime::{AppConfig, AppConfigProvider, CliArgs, DatabaseConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use api_ingress::{ApiIngress, ApiIngressConfig};
use forecast_admin::config::ForecastAdminConfig;
use forecast_admin::ForecastAdmin;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const MOCK_DSN: &str = "sqlite::memory:";

/// Seacast Server - maritime forecast administration backend
#[derive(Parser)]
#[command(name = "seacast-server")]
#[command(about = "Seacast Server - maritime forecast administration backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database instead of the configured one
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // home_dir is normalized and created while loading
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Seacast Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, args).await,
        Commands::Check => check_config(config, &args),
    }
}

/// DSN the server connects to: the in-memory database under `--mock`, otherwise
/// the configured URL with relative SQLite paths anchored at `home_dir`.
fn resolve_dsn(db_config: Option<&DatabaseConfig>, args: &CliArgs, home_dir: &Path) -> Result<String> {
    if args.mock {
        return Ok(MOCK_DSN.to_string());
    }
    let db_config = db_config.ok_or_else(|| anyhow!("Database configuration is required"))?;
    let dsn = db_config.url.trim();
    if dsn.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }
    DbHandle::detect(dsn)?;

    if dsn.starts_with("sqlite://") {
        Ok(modkit_db::sqlite::absolutize_dsn(dsn, home_dir, true)?)
    } else {
        Ok(dsn.to_string())
    }
}

fn connect_opts(db_config: Option<&DatabaseConfig>) -> ConnectOpts {
    let mut opts = ConnectOpts {
        acquire_timeout: Some(Duration::from_secs(5)),
        create_sqlite_dirs: true,
        ..Default::default()
    };
    if let Some(cfg) = db_config {
        if cfg.max_conns.is_some() {
            opts.max_conns = cfg.max_conns;
        }
        if let Some(ms) = cfg.busy_timeout_ms {
            opts.sqlite_busy_timeout = Some(Duration::from_millis(u64::from(ms)));
        }
    }
    opts
}

async fn run_server(config: AppConfig, args: CliArgs) -> Result<()> {
    let home_dir = PathBuf::from(&config.server.home_dir);
    let dsn = resolve_dsn(config.database.as_ref(), &args, &home_dir)?;

    tracing::info!("Connecting to database: {}", modkit_db::redact_credentials_in_dsn(&dsn));
    let db = Arc::new(DbHandle::connect(&dsn, connect_opts(config.database.as_ref())).await?);
    tracing::info!("Connected DB backend: {:?}", db.engine());

    let ingress = ApiIngress::new(ApiIngressConfig::from_server(&config.server));
    let forecast = ForecastAdmin::new();

    let base_ctx = ModuleCtxBuilder::new()
        .with_db(db.clone())
        .with_config_provider(Arc::new(AppConfigProvider::new(config)))
        .build();
    let ingress_ctx = base_ctx.clone().for_module(api_ingress::MODULE_NAME);
    let forecast_ctx: ModuleCtx = base_ctx.for_module(forecast_admin::module::MODULE_NAME);

    tracing::info!("Initializing modules...");
    ingress.init(&ingress_ctx).await?;
    forecast.init(&forecast_ctx).await?;

    forecast.migrate(&db).await?;

    let routes = forecast.register_rest(&forecast_ctx, axum::Router::new())?;
    let router = ingress.build_router(routes);

    let served = ingress
        .serve(router, async {
            if let Err(e) = modkit::wait_for_shutdown().await {
                tracing::error!(error = %e, "shutdown signal handler failed");
            }
        })
        .await;

    // Handles share one pool; closing a clone closes it for every module.
    DbHandle::clone(&db).close().await;
    tracing::info!("Seacast Server stopped");
    served
}

fn check_config(config: AppConfig, args: &CliArgs) -> Result<()> {
    tracing::info!("Checking configuration...");

    resolve_dsn(config.database.as_ref(), args, Path::new(&config.server.home_dir))?;

    let provider = AppConfigProvider::new(config.clone());
    if let Some(raw) = provider.get_module_config(forecast_admin::module::MODULE_NAME) {
        let cfg: ForecastAdminConfig = serde_json::from_value(raw.clone())
            .context("invalid modules.forecast_admin section")?;
        cfg.validate()?;
    }
    if let Some(raw) = provider.get_module_config(api_ingress::MODULE_NAME) {
        let cfg: ApiIngressConfig = serde_json::from_value(raw.clone())
            .context("invalid modules.api_ingress section")?;
        cfg.bind_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("invalid bind address '{}'", cfg.bind_addr))?;
    }

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}
