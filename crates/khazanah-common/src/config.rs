//! KDL configuration for the khazanah tools.
//!
//! ```kdl
//! direction "rtl"
//! reference-class "ibarat-ref"
//! elide-empty-spans false
//! format "html"
//! cache-capacity 64
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ibarat_markup::render_cache::DEFAULT_CACHE_CAPACITY;
use ibarat_markup::{RenderOptions, TextDirection};
use kdl::{KdlDocument, KdlNode, KdlValue};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::KhazanahError;

pub const CONFIG_FILE_NAME: &str = "config.kdl";

/// How rendered ibarat text is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Plain,
    /// The parsed document tree.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format `{other}`, expected html, plain or json"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "html",
            Self::Plain => "plain",
            Self::Json => "json",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub render: RenderOptions,
    pub format: OutputFormat,
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            format: OutputFormat::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// `$CONFIG_DIR/khazanah/config.kdl`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("khazanah").join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults. An explicitly given path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, KhazanahError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(source) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_kdl(&source, &path)
            }
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(KhazanahError::io(path, err)),
        }
    }

    /// Parse config text. `path` is only used in error messages.
    pub fn from_kdl(source: &str, path: &Path) -> Result<Self, KhazanahError> {
        let doc: KdlDocument = source
            .parse()
            .map_err(|err: kdl::KdlError| KhazanahError::config(path, err.to_string()))?;

        let mut config = Self::default();
        for node in doc.nodes() {
            let key = node.name().value();
            match key {
                "direction" => {
                    config.render.direction = string_arg(node, path)?
                        .parse::<TextDirection>()
                        .map_err(|bad| {
                            KhazanahError::config(
                                path,
                                format!("direction must be rtl, ltr or auto, got `{bad}`"),
                            )
                        })?;
                }
                "reference-class" => {
                    config.render.reference_class = SmolStr::new(string_arg(node, path)?);
                }
                "elide-empty-spans" => {
                    config.render.elide_empty_spans = first_arg(node, path)?
                        .as_bool()
                        .ok_or_else(|| expected(path, key, "true or false"))?;
                }
                "format" => {
                    config.format = string_arg(node, path)?
                        .parse()
                        .map_err(|msg: String| KhazanahError::config(path, msg))?;
                }
                "cache-capacity" => {
                    let n = first_arg(node, path)?
                        .as_i64()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or_else(|| expected(path, key, "a non-negative integer"))?;
                    config.cache_capacity = n;
                }
                other => {
                    tracing::warn!(key = other, path = %path.display(), "ignoring unknown config key")
                }
            }
        }
        Ok(config)
    }
}

fn first_arg<'a>(node: &'a KdlNode, path: &Path) -> Result<&'a KdlValue, KhazanahError> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .map(|e| e.value())
        .ok_or_else(|| {
            KhazanahError::config(path, format!("`{}` needs a value", node.name().value()))
        })
}

fn string_arg<'a>(node: &'a KdlNode, path: &Path) -> Result<&'a str, KhazanahError> {
    first_arg(node, path)?
        .as_string()
        .ok_or_else(|| expected(path, node.name().value(), "a string"))
}

fn expected(path: &Path, key: &str, what: &str) -> KhazanahError {
    KhazanahError::config(path, format!("`{key}` must be {what}"))
}
