//! Invoker configuration stored in `runtest.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "runtest.toml";

/// Search roots and archive globs for the JOSM source layout.
pub const DEFAULT_CLASSPATH: &str = ".:test/unit:test/functional:dist/josm-custom.jar:test/lib/commons-testing/*:test/lib/fest/*:test/lib/junit/*:test/lib/*:test/lib/unitils-core/*:tools/*:tools/spotbugs/*";

/// Invoker configuration (TOML).
///
/// Every field is optional in the file. Values are spliced into shell command
/// lines as-is, so the classpath globs reach the shell unquoted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntestConfig {
    /// Classpath passed via `-cp` to both the compiler and the launcher.
    pub classpath: String,

    /// Compiler program (e.g. `javac`).
    pub compiler: String,

    /// Program that starts the test runner (e.g. `java`).
    pub launcher: String,

    /// Entry point class handed to the launcher before the test class name.
    pub runner_main: String,
}

impl Default for RuntestConfig {
    fn default() -> Self {
        Self {
            classpath: DEFAULT_CLASSPATH.to_string(),
            compiler: "javac".to_string(),
            launcher: "java".to_string(),
            runner_main: "org.junit.runner.JUnitCore".to_string(),
        }
    }
}

impl RuntestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.classpath.trim().is_empty() {
            return Err(anyhow!("classpath must be non-empty"));
        }
        if self.compiler.trim().is_empty() {
            return Err(anyhow!("compiler must be non-empty"));
        }
        if self.launcher.trim().is_empty() {
            return Err(anyhow!("launcher must be non-empty"));
        }
        if self.runner_main.trim().is_empty() {
            return Err(anyhow!("runner_main must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RuntestConfig::default()`.
pub fn load_config(path: &Path) -> Result<RuntestConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file missing, using defaults");
        let cfg = RuntestConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RuntestConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}
