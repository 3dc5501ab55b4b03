//! Configuration file support for the site builder.
//!
//! Loads an optional `plumco.toml`. Every key is optional; CLI flags take
//! precedence over the file and built-in defaults fill the rest.
//!
//! ```toml
//! title = "Plumco - Professional Plumbing Services"
//! mount_id = "root"
//! asset_base = "assets"
//! out_dir = "dist"
//! project_filter = "interactive"   # or "decorative"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plumco_site::types::{ProjectFilter, SiteContent};
use plumco_site::{SiteAssets, SiteOptions};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "plumco.toml";

/// Output directory when neither flag nor file sets one.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlumcoConfig {
    pub title: Option<String>,
    pub mount_id: Option<String>,
    pub asset_base: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub project_filter: Option<ProjectFilter>,
}

impl PlumcoConfig {
    /// Load config from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg = toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?;
        Ok(Some(cfg))
    }
}

/// Build settings the CLI can override.
pub trait BuildOverrides {
    fn out_dir(&self) -> Option<PathBuf>;
    fn mount_id(&self) -> Option<String>;
    fn asset_base(&self) -> Option<String>;
    fn title(&self) -> Option<String>;
    fn project_filter(&self) -> Option<ProjectFilter>;
}

/// Fully resolved inputs for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildParams {
    pub out_dir: PathBuf,
    pub assets: SiteAssets,
    pub options: SiteOptions,
}

/// Resolve build parameters from CLI options and config file.
///
/// CLI options take precedence over config file settings.
pub fn resolve_params<C: BuildOverrides>(cli: &C, config: Option<&PlumcoConfig>) -> BuildParams {
    let file = config.cloned().unwrap_or_default();
    let defaults = SiteOptions::default();

    BuildParams {
        out_dir: cli
            .out_dir()
            .or(file.out_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
        assets: cli
            .asset_base()
            .or(file.asset_base)
            .map(|base| SiteAssets { base })
            .unwrap_or_default(),
        options: SiteOptions {
            title: cli.title().or(file.title).unwrap_or(defaults.title),
            mount_id: cli.mount_id().or(file.mount_id).unwrap_or(defaults.mount_id),
            project_filter: cli
                .project_filter()
                .or(file.project_filter)
                .unwrap_or(defaults.project_filter),
        },
    }
}

/// Load a content file (`.toml` or `.json`) and check its invariants.
pub fn load_content(path: &Path) -> Result<SiteContent> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let content: SiteContent = match ext.as_str() {
        "json" => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json content {}", path.display()))?,
        _ => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml content {}", path.display()))?,
    };

    content
        .validate()
        .with_context(|| format!("invalid content in {}", path.display()))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Flags {
        out_dir: Option<PathBuf>,
        mount_id: Option<String>,
    }

    impl BuildOverrides for Flags {
        fn out_dir(&self) -> Option<PathBuf> {
            self.out_dir.clone()
        }
        fn mount_id(&self) -> Option<String> {
            self.mount_id.clone()
        }
        fn asset_base(&self) -> Option<String> {
            None
        }
        fn title(&self) -> Option<String> {
            None
        }
        fn project_filter(&self) -> Option<ProjectFilter> {
            None
        }
    }

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        write!(file, "{}", body).expect("write file");
        path
    }

    #[test]
    fn missing_file_is_none() {
        let temp = TempDir::new().expect("temp dir");
        let cfg = PlumcoConfig::load(&temp.path().join("plumco.toml")).expect("load");
        assert!(cfg.is_none());
    }

    #[test]
    fn loads_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write(
            &temp,
            "plumco.toml",
            r#"
title = "Plumco Staging"
mount_id = "app"
out_dir = "public"
project_filter = "decorative"
"#,
        );

        let cfg = PlumcoConfig::load(&path).expect("load").expect("present");
        assert_eq!(cfg.title.as_deref(), Some("Plumco Staging"));
        assert_eq!(cfg.mount_id.as_deref(), Some("app"));
        assert_eq!(cfg.out_dir, Some(PathBuf::from("public")));
        assert_eq!(cfg.project_filter, Some(ProjectFilter::Decorative));
        assert!(cfg.asset_base.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().expect("temp dir");
        let path = write(&temp, "plumco.toml", "colour = \"blue\"\n");

        let err = PlumcoConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse toml config"));
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let params = resolve_params(&Flags::default(), None);
        assert_eq!(params.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(params.assets, SiteAssets::default());
        assert_eq!(params.options, SiteOptions::default());
    }

    #[test]
    fn cli_flags_beat_config_file() {
        let cfg = PlumcoConfig {
            mount_id: Some("from-file".into()),
            out_dir: Some(PathBuf::from("file-out")),
            asset_base: Some("/img".into()),
            ..Default::default()
        };
        let flags = Flags {
            mount_id: Some("from-cli".into()),
            ..Default::default()
        };

        let params = resolve_params(&flags, Some(&cfg));
        assert_eq!(params.options.mount_id, "from-cli");
        assert_eq!(params.out_dir, PathBuf::from("file-out"));
        assert_eq!(params.assets.base, "/img");
    }

    #[test]
    fn loads_and_validates_content_file() {
        let temp = TempDir::new().expect("temp dir");
        let text = toml::to_string(&SiteContent::plumco()).expect("serialize");
        let path = write(&temp, "content.toml", &text);

        let content = load_content(&path).expect("load content");
        assert_eq!(content.services.len(), 6);
    }

    #[test]
    fn rejects_invalid_content_file() {
        let temp = TempDir::new().expect("temp dir");
        let mut content = SiteContent::plumco();
        content.testimonials[0].rating = 9;
        let text = serde_json::to_string(&content).expect("serialize");
        let path = write(&temp, "content.json", &text);

        let err = load_content(&path).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("invalid content"));
        assert!(msg.contains("rating 9"));
    }
}
