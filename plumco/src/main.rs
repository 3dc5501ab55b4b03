//! # plumco
//!
//! Builds the Plumco landing page into a single static `index.html`.
//!
//! ## Usage
//!
//! ```bash
//! # Render with built-in copy into ./dist
//! plumco build
//!
//! # Custom output, mount element and edited copy
//! plumco build --out public --mount-id app --content content.toml
//!
//! # Dump the built-in copy as a starting point for edits
//! plumco content --format toml > content.toml
//! ```

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use config::{BuildOverrides, DEFAULT_CONFIG_FILE, PlumcoConfig, load_content, resolve_params};
use plumco_site::render_site;
use plumco_site::types::{ProjectFilter, SiteContent};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "plumco")]
#[command(about = "Build the Plumco landing page")]
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
    /// Render the page to <out>/index.html
    Build(BuildArgs),
    /// Print the built-in page copy
    Content {
        /// Output format
        #[arg(long, value_enum, default_value_t = ContentFormat::Toml)]
        format: ContentFormat,
    },
}

#[derive(clap::Args, Debug, Default)]
struct BuildArgs {
    /// Output directory (default: dist)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Config file (default: ./plumco.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content file (.toml or .json) replacing the built-in copy
    #[arg(long)]
    content: Option<PathBuf>,

    /// Id of the element the page is mounted into
    #[arg(long)]
    mount_id: Option<String>,

    /// Prefix for local image paths
    #[arg(long)]
    asset_base: Option<String>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Project gallery filter buttons
    #[arg(long, value_enum)]
    project_filter: Option<FilterMode>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ContentFormat {
    Toml,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterMode {
    /// Buttons are shown but don't filter
    Decorative,
    /// Buttons filter the gallery
    Interactive,
}

impl From<FilterMode> for ProjectFilter {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Decorative => ProjectFilter::Decorative,
            FilterMode::Interactive => ProjectFilter::Interactive,
        }
    }
}

impl BuildOverrides for BuildArgs {
    fn out_dir(&self) -> Option<PathBuf> {
        self.out.clone()
    }

    fn mount_id(&self) -> Option<String> {
        self.mount_id.clone()
    }

    fn asset_base(&self) -> Option<String> {
        self.asset_base.clone()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn project_filter(&self) -> Option<ProjectFilter> {
        self.project_filter.map(Into::into)
    }
}

// ============================================================================
// Commands
// ============================================================================

fn build(args: &BuildArgs) -> Result<PathBuf> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let file_config = PlumcoConfig::load(&config_path)?;
    match (&file_config, &args.config) {
        (Some(_), _) => debug!(path = %config_path.display(), "loaded config"),
        (None, Some(explicit)) => {
            anyhow::bail!("config file {} not found", explicit.display())
        }
        (None, None) => debug!("no config file, using defaults"),
    }

    let params = resolve_params(args, file_config.as_ref());

    let content = match &args.content {
        Some(path) => {
            info!(path = %path.display(), "using content file");
            load_content(path)?
        }
        None => SiteContent::plumco(),
    };

    let html = render_site(&content, &params.assets, &params.options);

    std::fs::create_dir_all(&params.out_dir)
        .with_context(|| format!("failed to create {}", params.out_dir.display()))?;
    let out_file = params.out_dir.join("index.html");
    std::fs::write(&out_file, &html)
        .with_context(|| format!("failed to write {}", out_file.display()))?;

    info!(
        path = %out_file.display(),
        bytes = html.len(),
        mount_id = %params.options.mount_id,
        "page written"
    );
    Ok(out_file)
}

fn dump_content(format: ContentFormat) -> Result<String> {
    let content = SiteContent::plumco();
    let text = match format {
        ContentFormat::Toml => toml::to_string_pretty(&content).context("serialize content as toml")?,
        ContentFormat::Json => {
            serde_json::to_string_pretty(&content).context("serialize content as json")?
        }
    };
    Ok(text)
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Build(build_args) => {
            let out_file = build(&build_args)?;
            println!("{}", out_file.display());
        }
        Command::Content { format } => {
            println!("{}", dump_content(format)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the command's result, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("plumco v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[plumco] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn build_writes_index_html() {
        let temp = TempDir::new().expect("temp dir");
        let args = BuildArgs {
            out: Some(temp.path().join("site")),
            config: None,
            mount_id: Some("app".into()),
            ..Default::default()
        };

        let out_file = build(&args).expect("build");
        assert_eq!(out_file, temp.path().join("site").join("index.html"));

        let html = std::fs::read_to_string(out_file).expect("read output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div id="app">"#));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        let args = BuildArgs {
            out: Some(temp.path().to_path_buf()),
            config: Some(temp.path().join("nope.toml")),
            ..Default::default()
        };

        let err = build(&args).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn content_dump_parses_back() {
        let text = dump_content(ContentFormat::Json).expect("dump");
        let parsed: SiteContent = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed, SiteContent::plumco());
    }
}
