mod config;
mod css;
mod error;
mod layout;
mod locale;
mod sweep;
mod types;

pub use config::{ColumnTier, TypographyConfig, TypographyConfigBuilder};
pub use css::{BreakpointSheet, custom_properties, write_custom_properties};
pub use error::RunionError;
pub use layout::Layout;
pub use locale::{ConfigRegistry, Locale};
pub use sweep::{SweepPoint, sweep, write_report};
pub use types::En;

// The "characters per line" runion: an immutable typographic config
// queried per available width. Each call is independent, there is no
// state beyond the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Runion {
    config: TypographyConfig,
}

impl Runion {
    pub fn new(config: TypographyConfig) -> Runion {
        Runion { config }
    }

    pub fn for_locale(locale: &Locale) -> Result<Runion, RunionError> {
        let registry = ConfigRegistry::builtin()?;
        let config = registry.get(locale)?.clone();
        Ok(Runion { config })
    }

    pub fn config(&self) -> &TypographyConfig {
        &self.config
    }

    pub fn layout(&self, width_px: f64, em_px: f64) -> Result<Layout, RunionError> {
        if !em_px.is_finite() || em_px <= 0.0 {
            return Err(RunionError::InvalidConfiguration(format!(
                "em size must be a positive number of pixels, got {}",
                em_px
            )));
        }
        if !width_px.is_finite() || width_px < 0.0 {
            return Err(RunionError::InvalidConfiguration(format!(
                "available width must be a non-negative number of pixels, got {}",
                width_px
            )));
        }
        layout::resolve(&self.config, En::from_px(width_px, em_px))
    }
}

impl Default for Runion {
    fn default() -> Runion {
        Runion::new(TypographyConfig::latin())
    }
}
