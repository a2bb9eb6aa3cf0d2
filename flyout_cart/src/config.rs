// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fly-to-cart configuration, loadable from TOML.
//!
//! Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! duration_ms = 800
//! grace_ms = 120
//! cart_anchor = "nav-cart-icon"
//!
//! [style]
//! arc_height = 60.0
//! token_size = 30.0
//! glow_inset = 8.0
//! z_index = 9999
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::overlay::OverlayStyle;

/// Settings for a [`FlyToCart`](crate::FlyToCart) orchestrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyConfig {
    /// Flight length in milliseconds.
    pub duration_ms: u64,
    /// Pause between landing and the item-added notification, in milliseconds.
    pub grace_ms: u64,
    /// Identifier of the cart anchor used by [`FlyToCart::trigger_cart`](crate::FlyToCart::trigger_cart).
    pub cart_anchor: String,
    /// Token appearance.
    pub style: OverlayStyle,
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self {
            duration_ms: Self::DEFAULT_DURATION_MS,
            grace_ms: Self::DEFAULT_GRACE_MS,
            cart_anchor: Self::DEFAULT_CART_ANCHOR.to_owned(),
            style: OverlayStyle::default(),
        }
    }
}

impl FlyConfig {
    /// Default flight length.
    pub const DEFAULT_DURATION_MS: u64 = 800;
    /// Default grace delay.
    pub const DEFAULT_GRACE_MS: u64 = 120;
    /// Default cart anchor identifier.
    pub const DEFAULT_CART_ANCHOR: &'static str = "nav-cart-icon";
    /// Conventional file name for [`load_or_default`](Self::load_or_default).
    pub const FILE_NAME: &'static str = "flyout.toml";

    /// Flight length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Grace delay.
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `path`, or fall back to defaults.
    ///
    /// A missing file is expected and silent; any other failure is logged.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => Self::default(),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring fly-to-cart config");
                Self::default()
            }
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "duration_ms",
                reason: "must be greater than zero",
            });
        }
        if self.cart_anchor.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "cart_anchor",
                reason: "must not be empty",
            });
        }
        let style = &self.style;
        if !style.arc_height.is_finite() || style.arc_height < 0.0 {
            return Err(ConfigError::Invalid {
                field: "style.arc_height",
                reason: "must be a finite, non-negative number",
            });
        }
        if !style.token_size.is_finite() || style.token_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "style.token_size",
                reason: "must be a finite, positive number",
            });
        }
        if !style.glow_inset.is_finite() || style.glow_inset < 0.0 {
            return Err(ConfigError::Invalid {
                field: "style.glow_inset",
                reason: "must be a finite, non-negative number",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront() {
        let c = FlyConfig::default();
        assert_eq!(c.duration(), Duration::from_millis(800));
        assert_eq!(c.grace(), Duration::from_millis(120));
        assert_eq!(c.cart_anchor, "nav-cart-icon");
        assert_eq!(c.style.arc_height, 60.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = FlyConfig::from_toml_str("duration_ms = 500\n[style]\narc_height = 40.0\n").unwrap();
        assert_eq!(c.duration_ms, 500);
        assert_eq!(c.grace_ms, 120);
        assert_eq!(c.style.arc_height, 40.0);
        assert_eq!(c.style.token_size, 30.0);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(FlyConfig::from_toml_str("").unwrap(), FlyConfig::default());
    }

    #[test]
    fn rejects_zero_duration() {
        let err = FlyConfig::from_toml_str("duration_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "duration_ms", .. }));
    }

    #[test]
    fn rejects_bad_style_and_anchor() {
        let err = FlyConfig::from_toml_str("[style]\ntoken_size = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "style.token_size", .. }));
        let err = FlyConfig::from_toml_str("cart_anchor = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cart_anchor", .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = FlyConfig::from_toml_str("duration_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_silently() {
        let err = FlyConfig::load_from_file("definitely/not/here/flyout.toml").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            FlyConfig::load_or_default("definitely/not/here/flyout.toml"),
            FlyConfig::default()
        );
    }
}
