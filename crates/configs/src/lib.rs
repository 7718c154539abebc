use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// What a category rename does when the target name is already taken.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenamePolicy {
    /// Keep the existing target record and drop the old one.
    #[default]
    Overwrite,
    /// Refuse the rename with a conflict error.
    Reject,
}

impl std::str::FromStr for RenamePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(anyhow!("unknown rename policy `{other}`，可选值：overwrite | reject")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub rename_policy: RenamePolicy,
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

fn parse_var<T>(name: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|v| v.trim().parse::<T>().map_err(|e| anyhow!("{name}=`{v}` 无法解析：{e}")))
        .transpose()
}

impl AppConfig {
    /// `CONFIG_PATH` (default `config.toml`) first; only a missing file falls back to the environment.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path(), |name| std::env::var(name).ok())
    }

    pub fn load_or_env_from<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_vars(lookup)?,
            Err(e) => return Err(e.context(format!("failed to load config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `RENAME_POLICY`.
    fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(host) = lookup("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = parse_var::<u16>("SERVER_PORT", lookup("SERVER_PORT"))? {
            cfg.server.port = port;
        }
        if let Some(w) = parse_var::<usize>("TOKIO_WORKER_THREADS", lookup("TOKIO_WORKER_THREADS"))? {
            cfg.server.worker_threads = Some(w);
        }
        if let Some(policy) = parse_var::<RenamePolicy>("RENAME_POLICY", lookup("RENAME_POLICY"))? {
            cfg.store.rename_policy = policy;
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
