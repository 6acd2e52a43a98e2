// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Get | Vars | Which | Platform | Home | Pathsep
//!   Expand | Shrink | Options | Configs | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use envctx::cli::global::GlobalOptions;
use envctx::cli::{self, Command};
use envctx::cmd::config::{run_configs_command, run_options_command};
use envctx::cmd::env::{
    run_get_command, run_pathsep_command, run_platform_command, run_vars_command,
};
use envctx::cmd::path::{
    run_expand_command, run_home_command, run_shrink_command, run_which_command,
};
use envctx::config::loader::ConfigLoader;
use envctx::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use envctx::core::env;
use envctx::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let env = env::native();
    let format = config.output.format;
    let mut stdout = std::io::stdout().lock();
    let out = &mut stdout;

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(Into::into)
        }
        Some(Command::Options) => run_options_command(config, out),
        Some(Command::Configs) => {
            run_configs_command(&build_config_loader(&cli.global).format_loaded_files(), out)
        }
        Some(Command::Get(args)) => run_get_command(args, &env, format, out),
        Some(Command::Vars(args)) => run_vars_command(args, &env, format, out),
        Some(Command::Which(args)) => run_which_command(args, &env, format, out),
        Some(Command::Platform) => run_platform_command(&env, format, out),
        Some(Command::Home) => run_home_command(&env, format, out),
        Some(Command::Pathsep) => run_pathsep_command(format, out),
        Some(Command::Expand(args)) => run_expand_command(args, &env, format, out),
        Some(Command::Shrink(args)) => run_shrink_command(args, &env, format, out),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envctx::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
