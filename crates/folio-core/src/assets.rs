//! Asset resolution and the display-surface hand-off.
//!
//! Catalog URLs are usually root-relative (`/assets/...`). `AssetResolver`
//! turns them into something openable against the configured asset base, and
//! `Opener` hands the result to an external viewer in a new top-level window.

use crate::config::Config;
use crate::platform;
use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A catalog URL after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// File on the local filesystem
    Path(PathBuf),
    /// Absolute URL, or the catalog string unchanged when no base is configured
    Url(String),
}

impl ResolvedAsset {
    /// Whether a local file exists; URLs are assumed reachable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        match self {
            ResolvedAsset::Path(path) => path.exists(),
            ResolvedAsset::Url(_) => true,
        }
    }
}

impl fmt::Display for ResolvedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedAsset::Path(path) => write!(f, "{}", path.display()),
            ResolvedAsset::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AssetBase {
    Dir(PathBuf),
    Url(String),
}

/// Maps catalog URLs onto the configured asset base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetResolver {
    base: Option<AssetBase>,
}

fn has_scheme(url: &str) -> bool {
    url.split_once("://")
        .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(char::is_alphanumeric))
}

impl AssetResolver {
    /// `base` may be a directory or an `http(s)://` prefix.
    #[must_use]
    pub fn new(base: Option<&str>) -> Self {
        let base = base.map(|b| {
            if has_scheme(b) {
                AssetBase::Url(b.trim_end_matches('/').to_string())
            } else {
                AssetBase::Dir(PathBuf::from(b))
            }
        });
        Self { base }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.assets.base.as_deref())
    }

    /// Resolve a catalog URL. Absolute URLs pass through untouched.
    #[must_use]
    pub fn resolve(&self, url: &str) -> ResolvedAsset {
        if has_scheme(url) {
            return ResolvedAsset::Url(url.to_string());
        }
        match &self.base {
            Some(AssetBase::Url(base)) => {
                ResolvedAsset::Url(format!("{base}/{}", url.trim_start_matches('/')))
            }
            Some(AssetBase::Dir(dir)) => ResolvedAsset::Path(dir.join(url.trim_start_matches('/'))),
            None if Path::new(url).is_absolute() && Path::new(url).exists() => {
                ResolvedAsset::Path(PathBuf::from(url))
            }
            None => ResolvedAsset::Url(url.to_string()),
        }
    }
}

/// Opens display targets with an external program.
#[derive(Debug, Clone, Default)]
pub struct Opener {
    /// Configured command line; the platform default is used when unset
    command: Option<String>,
}

impl Opener {
    #[must_use]
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.apps.opener.clone())
    }

    /// Program and arguments that would open `target`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` when no opener is configured and the platform
    /// has no default.
    pub fn command_line(&self, target: &ResolvedAsset) -> Result<(String, Vec<String>)> {
        let target = target.to_string();
        if let Some(command) = &self.command {
            let mut parts = command.split_whitespace().map(str::to_string);
            let program = parts
                .next()
                .ok_or_else(|| Error::Open("empty opener command".to_string()))?;
            let mut args: Vec<String> = parts.collect();
            args.push(target);
            return Ok((program, args));
        }

        let platform = platform::detect();
        let (program, leading) = platform.default_opener().ok_or_else(|| {
            Error::Open(format!(
                "no default opener on platform '{}', set apps.opener",
                platform.as_str()
            ))
        })?;
        let mut args: Vec<String> = leading.iter().map(|a| (*a).to_string()).collect();
        args.push(target);
        Ok((program.to_string(), args))
    }

    /// Spawn the viewer detached, with all I/O redirected to null.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` if the viewer cannot be started.
    pub fn open(&self, target: &ResolvedAsset) -> Result<()> {
        let (program, args) = self.command_line(target)?;
        debug!("Opening {target} with {program} {args:?}");
        Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Open(format!("{program}: {e}")))?;
        info!("Opened {target}");
        Ok(())
    }
}
