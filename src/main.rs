use anyhow::{Context, Result};
use clap::Parser;
use ringq::app::App;
use ringq::config::Config;
use ringq::input::parse_script;
use ringq::util::report;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Filter used until the config file has been read.
const BOOTSTRAP_LEVEL: &str = "warn";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Parser, Debug)]
#[command(name = "ringq", about = "Ring buffer / bounded queue demo driver", version)]
struct Cli {
    /// Queue capacity (overrides [general] capacity)
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Commands to run, e.g. "enqueue 1, peek, dequeue, print"
    #[arg(short, long)]
    script: Option<String>,

    /// Print the run as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    show_config: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_filter)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let handle = init_logging(cli.log_level.as_deref());

    let cfg = match &cli.config {
        Some(path) => Config::load_explicit(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => Config::load(),
    };
    if let Some(handle) = &handle {
        apply_config_level(handle, &cfg.log.level);
    }
    if let Some(path) = cli.config.clone().or_else(Config::config_path) {
        info!(path = %path.display(), "config resolved");
    }

    if cli.show_config {
        return run_print_config(&cfg, cli.config.as_ref());
    }

    let capacity = cli.capacity.unwrap_or(cfg.general.capacity);
    let script   = cli.script.as_deref().unwrap_or(&cfg.demo.script);
    let actions  = parse_script(script).context("invalid script")?;
    info!(capacity, commands = actions.len(), "running demo");

    let mut app = App::new(capacity, cfg.render.empty_marker.clone());
    let transcript = app.run(&actions);
    info!(occupied = app.queue().len(), "demo finished");

    if cli.json {
        let snapshot = serde_json::json!({
            "ringq_version": env!("CARGO_PKG_VERSION"),
            "timestamp":     chrono::Local::now().to_rfc3339(),
            "title":         cfg.demo.title,
            "capacity":      transcript.capacity,
            "steps":         transcript.steps,
            "final":         transcript.final_rendering,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::generate(&cfg.demo.title, &transcript));
    }
    Ok(())
}

fn parse_log_filter(s: &str) -> Result<String, String> {
    EnvFilter::try_new(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// Install the stderr subscriber before anything else logs. RUST_LOG wins, then
/// `--log-level`. Otherwise the filter starts at BOOTSTRAP_LEVEL and the returned
/// handle lets `[log] level` replace it once the config is loaded.
fn init_logging(cli_level: Option<&str>) -> Option<FilterHandle> {
    let from_env = EnvFilter::try_from_default_env();
    let env_rejected = from_env.is_err() && std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let (filter, pinned) = match (from_env, cli_level) {
        (Ok(f), _)        => (f, true),
        (Err(_), Some(l)) => (EnvFilter::new(l), true),
        (Err(_), None)    => (EnvFilter::new(BOOTSTRAP_LEVEL), false),
    };

    let (filter, handle) = reload::Layer::new(filter);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal()))
        .try_init();

    if env_rejected {
        warn!("RUST_LOG is not a valid filter, ignoring it");
    }
    if pinned { None } else { Some(handle) }
}

fn apply_config_level(handle: &FilterHandle, level: &str) {
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!(error = %e, "could not apply [log] level");
            }
        }
        Err(e) => warn!(directive = level, error = %e, "invalid [log] level, keeping {}", BOOTSTRAP_LEVEL),
    }
}

fn run_print_config(cfg: &Config, explicit: Option<&PathBuf>) -> Result<()> {
    let path = explicit.cloned()
        .or_else(Config::config_path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  capacity     = {}", cfg.general.capacity);
    println!();
    println!("[render]");
    println!("  empty_marker = {:?}", cfg.render.empty_marker);
    println!();
    println!("[demo]");
    println!("  title        = {:?}", cfg.demo.title);
    println!("  script       = {:?}", cfg.demo.script);
    println!();
    println!("[log]");
    println!("  level        = {:?}", cfg.log.level);
    Ok(())
}
