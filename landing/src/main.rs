//! # b2b-landing
//!
//! Builds the Bits2Bytes Labs homepage into a static directory.
//!
//! ```bash
//! b2b-landing build --config site.toml --static-dir static --out-dir build
//! b2b-landing render --config site.toml > index.html
//! b2b-landing check --config site.toml --static-dir static
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use bits2bytes_landing::{BuildOptions, SiteConfig, assets, build_site, render_home_page};

#[derive(Parser, Debug)]
#[command(name = "b2b-landing")]
#[command(about = "Static homepage builder for Bits2Bytes Labs")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the homepage and copy its assets into the output directory
    Build {
        /// Site configuration file
        #[arg(long, default_value = "site.toml")]
        config: PathBuf,
        /// Directory holding the static assets (img/...)
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
        /// Output directory
        #[arg(long, default_value = "build")]
        out_dir: PathBuf,
    },
    /// Print the rendered homepage to stdout
    Render {
        /// Site configuration file
        #[arg(long, default_value = "site.toml")]
        config: PathBuf,
    },
    /// Validate the configuration and static assets without writing anything
    Check {
        /// Site configuration file
        #[arg(long, default_value = "site.toml")]
        config: PathBuf,
        /// Directory holding the static assets (img/...)
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Build {
            config,
            static_dir,
            out_dir,
        } => {
            let options = BuildOptions {
                config_path: config,
                static_dir,
                out_dir,
            };
            let report = build_site(&options).context("site build failed")?;
            info!(
                index = %report.index_path.display(),
                assets = report.assets.len(),
                bytes = report.html_bytes,
                "build finished"
            );
        }
        Command::Render { config } => {
            let config = load_config(&config)?;
            let html = render_home_page(&config);
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("failed to write to stdout")?;
        }
        Command::Check { config, static_dir } => {
            let config = load_config(&config)?;
            let resolved = assets::verify(&static_dir).context("static asset check failed")?;
            info!(
                title = %config.title,
                assets = resolved.len(),
                "configuration and assets OK"
            );
        }
    }
    Ok(())
}

fn load_config(path: &std::path::Path) -> Result<SiteConfig> {
    SiteConfig::load(path).with_context(|| format!("cannot load {}", path.display()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[b2b-landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
