//! Layered configuration for folio.
//!
//! Sources are merged lowest to highest precedence:
//!
//! 1. Built-in defaults ([`Config::default`]).
//! 2. A config file: either the explicit path handed to [`Config::load`], or
//!    `config.{toml,yaml,json}` in the platform config directory (missing
//!    files there are skipped).
//! 3. Environment variables prefixed with `FOLIO_`, e.g. `FOLIO_PAGE_SIZE=12`.
//!
//! | Key         | Type                         | Default   |
//! |-------------|------------------------------|-----------|
//! | `page_size` | positive integer             | `36`      |
//! | `catalog`   | path to a catalog JSON file  | built-in  |
//! | `theme`     | `day`, `night` or `system`   | `system`  |

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use folio_browse::DEFAULT_PAGE_SIZE;
use folio_render::ThemePreference;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::instrument;

const ENV_PREFIX: &str = "FOLIO_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Books revealed per "show more"
    pub page_size: NonZeroUsize,
    /// Catalog file; the embedded sample catalog is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub theme: ThemePreference,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            catalog: None,
            theme: ThemePreference::System,
        }
    }
}
impl Config {
    /// Loads the configuration from all sources.
    ///
    /// An explicit `path` must exist and replaces the default config file
    /// lookup. Its format is chosen by extension (TOML when unrecognised).
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = match path {
            Some(path) => Self::explicit(path)?,
            None => Self::discovered(),
        };
        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract().or_raise(|| ErrorKind::Invalid)?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Platform-specific directory searched for `config.{toml,yaml,json}`.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn explicit(path: &Path) -> Result<Figment> {
        if !path.exists() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        let figment = Self::defaults();
        Ok(match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => figment.merge(Toml::file(path)),
        })
    }

    fn discovered() -> Figment {
        let figment = Self::defaults();
        let Some(dir) = Self::default_dir() else {
            tracing::debug!("No platform config directory; using defaults and environment only");
            return figment;
        };
        figment
            .merge(Toml::file(dir.join("config.toml")))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Json::file(dir.join("config.json")))
    }
}
