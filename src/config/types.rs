use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content root directory (HTML fragments and JSON metadata)
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Liquid templates directory, relative to the content root
    #[serde(default = "defaults::default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Static assets directory (favicon.ico, robots.txt), relative to the content root
    #[serde(default = "defaults::default_static_dir")]
    pub static_dir: PathBuf,

    /// Template used when merged metadata carries no `template` key
    #[serde(default = "defaults::default_template")]
    pub default_template: String,

    /// Host to bind the server to
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            templates_dir: defaults::default_templates_dir(),
            static_dir: defaults::default_static_dir(),
            default_template: defaults::default_template(),
            host: defaults::default_host(),
            port: defaults::default_port(),
        }
    }
}

impl Config {
    /// Templates directory resolved against the content root
    pub fn templates_path(&self) -> PathBuf {
        self.resolve(&self.templates_dir)
    }

    /// Static assets directory resolved against the content root
    pub fn static_path(&self) -> PathBuf {
        self.resolve(&self.static_dir)
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.source.join(dir)
        }
    }
}
