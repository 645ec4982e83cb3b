//! Application configuration, read from `WORKDESK_*` environment variables.

use crate::router::{RouteTable, paths};
use crate::simple_error;
use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_BASE_URL: &str = "WORKDESK_BASE_URL";
pub const ENV_UNMATCHED: &str = "WORKDESK_UNMATCHED";
pub const ENV_SESSION_FILE: &str = "WORKDESK_SESSION_FILE";
pub const ENV_SESSION_PERSIST: &str = "WORKDESK_SESSION_PERSIST";
pub const ENV_LOG: &str = "WORKDESK_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub router: RouterConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// History base, always of the form `/` or `/segment/`.
    pub base_path: String,
    pub unmatched: UnmatchedPolicy,
}

/// What happens when a navigation target matches no route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "path")]
pub enum UnmatchedPolicy {
    /// Navigate anyway and render nothing.
    #[default]
    Blank,
    /// Fail the navigation.
    Reject,
    /// Navigate to a known path instead.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub persist: bool,
    /// Overrides the default location under the app data directory.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `env_logger` filter directives.
    pub filter: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: paths::ROOT.to_string(),
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl FromStr for UnmatchedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(path) = s.strip_prefix("redirect:") {
            let path = path.trim();
            if !paths::is_well_formed(path) {
                return Err(simple_error!(Config, "invalid redirect path `{}`", path));
            }
            return Ok(Self::Redirect(paths::trim_trailing(path).to_string()));
        }
        match s.to_lowercase().as_str() {
            "blank" => Ok(Self::Blank),
            "reject" => Ok(Self::Reject),
            other => Err(simple_error!(
                Config,
                "unknown unmatched-path policy `{}` (expected blank, reject or redirect:<path>)",
                other
            )),
        }
    }
}

impl fmt::Display for UnmatchedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("blank"),
            Self::Reject => f.write_str("reject"),
            Self::Redirect(path) => write!(f, "redirect:{path}"),
        }
    }
}

impl SessionConfig {
    pub fn resolve_file(&self) -> anyhow::Result<PathBuf> {
        match &self.file {
            Some(file) => Ok(file.clone()),
            None => crate::utils::paths::default_session_file(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup(ENV_BASE_URL) {
            config.router.base_path = paths::normalize_base(&base);
        }
        if let Some(policy) = lookup(ENV_UNMATCHED) {
            config.router.unmatched = policy.parse()?;
        }
        if let Some(file) = lookup(ENV_SESSION_FILE).filter(|f| !f.trim().is_empty()) {
            config.session.file = Some(PathBuf::from(file));
        }
        if let Some(persist) = lookup(ENV_SESSION_PERSIST) {
            config.session.persist = parse_flag(ENV_SESSION_PERSIST, &persist)?;
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.logging.filter = filter;
        }

        Ok(config)
    }

    /// Checks settings that depend on the route table.
    pub fn validate(&self, table: &RouteTable) -> Result<()> {
        if let UnmatchedPolicy::Redirect(path) = &self.router.unmatched {
            if !table.contains(path) {
                return Err(simple_error!(
                    Config,
                    "unmatched-path redirect `{}` is not a known route",
                    path
                ));
            }
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(simple_error!(Config, "{} expects a boolean, got `{}`", key, other)),
    }
}
