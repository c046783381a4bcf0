//! Environment snapshot handed to every external tool.
//!
//! A snapshot is built once per top-level command from the process
//! environment, the fixed tool settings, and the project's `.env` override
//! file (in increasing priority). It is never written back.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::error::Result;

use super::env_file::EnvFileParser;

/// Settings applied to every snapshot before `.env` overrides.
///
/// `PIP_NO_WARN_SCRIPT_LOCATION` is a negated flag inside pip, so a false
/// value is what disables the warning.
pub const TOOL_SETTINGS: &[(&str, &str)] = &[
    ("CUSTOM_COMPILE_COMMAND", "venvctl compile"),
    ("PIP_DISABLE_PIP_VERSION_CHECK", "1"),
    ("PIP_NO_WARN_SCRIPT_LOCATION", "0"),
];

/// Variable naming the checkout directory for editable installs.
pub const PIP_SRC: &str = "PIP_SRC";

/// Immutable name/value mapping passed to child processes.
///
/// Names and values are kept as OS strings so variables that are not valid
/// UTF-8 pass through to tools unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<OsString, OsString>,
}

impl EnvSnapshot {
    /// Build a snapshot from explicit layers, later layers overriding earlier.
    pub fn from_layers<I, L, K, V>(layers: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut vars = HashMap::new();
        for layer in layers {
            vars.extend(layer.into_iter().map(|(k, v)| (k.into(), v.into())));
        }
        Self { vars }
    }

    /// Build the snapshot for a project: process env, tool settings, `.env`.
    pub fn load(env_file: &Path) -> Result<Self> {
        let overrides = EnvFileParser::load_optional(env_file)?;
        tracing::debug!(
            "Loaded {} override(s) from {}",
            overrides.len(),
            env_file.display()
        );

        let mut vars = load_system_env();
        vars.extend(tool_settings());
        vars.extend(
            overrides
                .into_iter()
                .map(|(k, v)| (OsString::from(k), OsString::from(v))),
        );
        Ok(Self { vars })
    }

    /// Look up a variable whose value is valid UTF-8.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_os(key).and_then(OsStr::to_str)
    }

    /// Look up a variable as an OS string.
    pub fn get_os(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&OsString, &OsString)> {
        self.vars.iter()
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Load environment variables from the running process.
pub fn load_system_env() -> HashMap<OsString, OsString> {
    std::env::vars_os().collect()
}

/// The fixed tool settings as a map.
pub fn tool_settings() -> HashMap<OsString, OsString> {
    TOOL_SETTINGS
        .iter()
        .map(|(k, v)| (OsString::from(k), OsString::from(v)))
        .collect()
}
