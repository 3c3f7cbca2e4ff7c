use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("image pool is empty")]
    EmptyImagePool,
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("reveal threshold {0} is outside 0..=1")]
    ThresholdOutOfRange(f64),
    #[error("thumbnail template has no {{id}} placeholder")]
    TemplateMissingId,
    #[error("reveal root margin {0:?} is not one to four px or % lengths")]
    InvalidRootMargin(String),
}

/// Tunable constants for page behavior.
///
/// Every field has a default, so a config block only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Viewport width above which an open mobile menu is closed on resize.
    pub menu_breakpoint: f64,
    /// Quiet period after the last resize event.
    pub resize_debounce_ms: u32,
    /// Scroll offset above which the navbar gets the strong shadow.
    pub navbar_shadow_threshold: f64,
    /// A section counts as reached this many pixels before its top edge.
    pub section_lead: f64,
    /// Scroll offset above which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Delay before the optimistic "message sent" alert.
    pub confirm_delay_ms: u32,
    pub shuffle_interval_ms: u32,
    pub image_dir: String,
    pub image_pool: Vec<String>,
    /// Thumbnail URL with an `{id}` placeholder.
    pub thumbnail_template: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            menu_breakpoint: 768.0,
            resize_debounce_ms: 250,
            navbar_shadow_threshold: 100.0,
            section_lead: 200.0,
            scroll_top_threshold: 300.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            confirm_delay_ms: 500,
            shuffle_interval_ms: 5000,
            image_dir: "images".to_string(),
            image_pool: vec![
                "black and white.jpg".to_string(),
                "my photo.jpg".to_string(),
                "side.jpg".to_string(),
            ],
            thumbnail_template: "https://img.youtube.com/vi/{id}/hqdefault.jpg".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON config block and validate it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_pool.is_empty() {
            return Err(ConfigError::EmptyImagePool);
        }
        if self.shuffle_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("shuffle_interval_ms"));
        }
        if self.resize_debounce_ms == 0 {
            return Err(ConfigError::ZeroDuration("resize_debounce_ms"));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.reveal_threshold));
        }
        if !self.thumbnail_template.contains("{id}") {
            return Err(ConfigError::TemplateMissingId);
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return Err(ConfigError::InvalidRootMargin(
                self.reveal_root_margin.clone(),
            ));
        }
        Ok(())
    }
}

/// `IntersectionObserver` root margin: one to four whitespace-separated
/// lengths, each a number followed by `px` or `%`.
fn is_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            part.strip_suffix("px")
                .or_else(|| part.strip_suffix('%'))
                .is_some_and(|n| !n.is_empty() && n.parse::<f64>().is_ok_and(f64::is_finite))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PortfolioConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_block_merges_over_defaults() {
        let config = PortfolioConfig::from_json(r#"{"menu_breakpoint": 1024}"#)
            .unwrap_or_else(|_| PortfolioConfig::default());
        assert_eq!(config.menu_breakpoint, 1024.0);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.image_pool.len(), 3);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            PortfolioConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"image_pool": []}"#),
            Err(ConfigError::EmptyImagePool)
        ));
    }

    #[test]
    fn template_needs_placeholder() {
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"thumbnail_template": "https://x/y.jpg"}"#),
            Err(ConfigError::TemplateMissingId)
        ));
    }

    #[test]
    fn root_margin_shape_is_checked() {
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"reveal_root_margin": "not a margin"}"#),
            Err(ConfigError::InvalidRootMargin(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"reveal_root_margin": "1px 2px 3px 4px 5px"}"#),
            Err(ConfigError::InvalidRootMargin(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"reveal_root_margin": ""}"#),
            Err(ConfigError::InvalidRootMargin(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"reveal_root_margin": "10 px"}"#),
            Err(ConfigError::InvalidRootMargin(_))
        ));
        for ok in ["0px", "10% -5px", "0px 0px -50px 0px", "1.5px 2%  3px"] {
            let json = format!(r#"{{"reveal_root_margin": "{ok}"}}"#);
            assert!(PortfolioConfig::from_json(&json).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = PortfolioConfig::from_json(r#"{"shuffle_interval_ms": 0}"#)
            .err()
            .as_ref()
            .map(ToString::to_string);
        assert_eq!(
            err.as_deref(),
            Some("shuffle_interval_ms must be greater than zero")
        );
    }
}
