use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use coinhunter::{
    arguments::Arguments,
    config::{load_config_from_path, validate_config, DEFAULT_CONFIG_FILE},
    errors::ScreenerError,
    logger::{self, LogTag, LoggerConfig},
    paths,
    process_lock::ProcessLock,
    run::run_screener,
};

/// Entry point: parse arguments, load config, take the run lock, screen, report.
///
/// Exit codes: 0 on success or when another run holds the lock, 1 on any error.
#[tokio::main]
async fn main() {
    let args = Arguments::parse();

    logger::init(LoggerConfig::from_flags(args.verbose, args.quiet, &args.debug));

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) => {
            let category = e
                .downcast_ref::<ScreenerError>()
                .map(ScreenerError::category)
                .unwrap_or("run");
            logger::error(LogTag::System, &format!("[{}] {:#}", category, e));
            1
        }
    };

    logger::flush();
    std::process::exit(code);
}

async fn run(args: Arguments) -> anyhow::Result<()> {
    let (config_path, required) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    let config = load_config_from_path(&config_path, required)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let config = args.apply_to(config);
    validate_config(&config).context("invalid configuration")?;

    let lock_path = args.lock_file.clone().unwrap_or_else(paths::default_lock_path);
    let Some(_lock) = ProcessLock::try_acquire(&lock_path)
        .with_context(|| format!("acquiring {}", lock_path.display()))?
    else {
        logger::info(
            LogTag::Lock,
            "Another run is active. Exiting to avoid conflicts.",
        );
        return Ok(());
    };

    if config.report.log_to_file {
        let output_dir = PathBuf::from(&config.report.output_dir);
        paths::ensure_output_directory(&output_dir)
            .with_context(|| format!("creating {}", output_dir.display()))?;
        logger::init(
            LoggerConfig::from_flags(args.verbose, args.quiet, &args.debug)
                .with_log_file(paths::log_file_path(&output_dir)),
        );
    }

    logger::info(LogTag::System, "coinhunter starting");
    logger::debug(
        LogTag::Config,
        &format!(
            "discovery gates {:?}, refine gates {:?}",
            config.discovery_gates(),
            config.refine_gates()
        ),
    );

    let summary = run_screener(&config).await?;
    logger::info(
        LogTag::System,
        &format!(
            "Fetched {} pairs from {} queries ({} failed)",
            summary.fetch.pairs, summary.fetch.queries, summary.fetch.failed_queries
        ),
    );
    Ok(())
}
