// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! The animation path itself never fails; see the crate docs.

/// Errors produced while loading or validating a [`FlyConfig`](crate::FlyConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        /// Path that was read, as displayed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid TOML for [`FlyConfig`](crate::FlyConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending field, as spelled in the TOML file.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl ConfigError {
    /// True if the error is a missing configuration file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
