use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOADAVG_PATH: &str = "/proc/loadavg";
pub const DEFAULT_CGROUP_DIR: &str = "/sys/fs/cgroup";
pub const DEFAULT_DISK_MOUNT: &str = "/";

/// Every field has a default, so an empty file (or no file) serves
/// `GET /stats` on `0.0.0.0:8080` from the standard Linux sources.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}

/// Where the host readers look. Overridable for containers that mount the
/// host's /proc or cgroup tree elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_loadavg_path")]
    pub loadavg_path: PathBuf,
    /// Directory holding `memory.current` and `memory.max`.
    #[serde(default = "default_cgroup_dir")]
    pub cgroup_dir: PathBuf,
    #[serde(default = "default_disk_mount")]
    pub disk_mount: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            loadavg_path: default_loadavg_path(),
            cgroup_dir: default_cgroup_dir(),
            disk_mount: default_disk_mount(),
        }
    }
}

fn default_loadavg_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOADAVG_PATH)
}

fn default_cgroup_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CGROUP_DIR)
}

fn default_disk_mount() -> PathBuf {
    PathBuf::from(DEFAULT_DISK_MOUNT)
}

impl AppConfig {
    /// Loads the TOML file named by `CONFIG_FILE`; built-in defaults when unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => {
                let s = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::load_from_str(&s)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.sources.loadavg_path.as_os_str().is_empty(),
            "sources.loadavg_path must be non-empty"
        );
        anyhow::ensure!(
            !self.sources.cgroup_dir.as_os_str().is_empty(),
            "sources.cgroup_dir must be non-empty"
        );
        anyhow::ensure!(
            !self.sources.disk_mount.as_os_str().is_empty(),
            "sources.disk_mount must be non-empty"
        );
        Ok(())
    }
}
