//! 奖学金评审 CLI
//!
//! 命令行入口点：加载配置、初始化日志、分发子命令。

use std::io;
use std::process::ExitCode;

use advisor_cli::cli::{Cli, CommandRunner, Commands};
use advisor_cli::{exit, SERVICE_NAME};
use advisory_shared::config::AppConfig;
use advisory_shared::observability;
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => exit::report(&err),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // 统一加载配置：从 {config_dir}/{service_name}.toml 等文件与环境变量加载
    let config = AppConfig::load_from(SERVICE_NAME, &cli.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // 命令行指定的日志级别优先于配置文件
    let mut obs_config = config.observability.clone().with_service_name(SERVICE_NAME);
    if let Some(level) = &cli.log_level {
        obs_config = obs_config.with_log_level(level);
    }
    let _guard = observability::init(&obs_config)?;
    debug!(
        environment = %config.environment,
        rules_path = %config.rules.path.display(),
        "配置已加载"
    );

    let runner = CommandRunner::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Evaluate(args) => runner.run_evaluate(&args, &mut out)?,
        Commands::Rules { rules } => runner.run_rules(rules.as_deref(), &mut out)?,
    }

    Ok(())
}
