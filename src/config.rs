use crate::error::RunionError;
use crate::types::En;

// One candidate column-count setup. Position in the tier list is
// semantically meaningful: index 0 is the 1-column setup, index 1 the
// 2-column setup, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnTier {
    pub min_line_length: En,
    pub max_line_length: En,
    pub gap: En,
}

impl ColumnTier {
    pub fn new(min_line_length: f64, max_line_length: f64, gap: f64) -> ColumnTier {
        ColumnTier {
            min_line_length: En::new(min_line_length),
            max_line_length: En::new(max_line_length),
            gap: En::new(gap),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "RawTypographyConfig")
)]
pub struct TypographyConfig {
    min_line_height: f64,
    max_line_height: f64,
    min_line_length: En,
    max_line_length: En,
    tiers: Vec<ColumnTier>,
}

impl TypographyConfig {
    pub fn builder(
        min_line_height: f64,
        max_line_height: f64,
        min_line_length: f64,
        max_line_length: f64,
    ) -> TypographyConfigBuilder {
        TypographyConfigBuilder {
            min_line_height,
            max_line_height,
            min_line_length: En::new(min_line_length),
            max_line_length: En::new(max_line_length),
            tiers: Vec::new(),
        }
    }

    // The Latin/English defaults: 33..65en line length, line height
    // 1.1 at the shortest lines up to 1.3 at the longest.
    pub fn latin() -> TypographyConfig {
        const MIN_LINE_LENGTH_EN: f64 = 33.0;
        const MAX_LINE_LENGTH_EN: f64 = 65.0;
        // The gap could be just 1em (2en, the CSS default), but wider
        // columns profit from a wider gap, so the 2-column setup gets
        // a bit more.
        TypographyConfig {
            min_line_height: 1.1,
            max_line_height: 1.3,
            min_line_length: En::new(MIN_LINE_LENGTH_EN),
            max_line_length: En::new(MAX_LINE_LENGTH_EN),
            tiers: vec![
                ColumnTier::new(0.0, MAX_LINE_LENGTH_EN, 0.0),
                ColumnTier::new(MIN_LINE_LENGTH_EN, MAX_LINE_LENGTH_EN, 3.0),
                ColumnTier::new(MIN_LINE_LENGTH_EN, 50.0, 2.5),
                ColumnTier::new(MIN_LINE_LENGTH_EN, 40.0, 2.0),
            ],
        }
    }

    // German has longer words, so the minimum line length is wider
    // than in the Latin/English defaults. Note how the 4-column setup
    // comes close together at [42, 45] where English has [33, 40].
    pub fn german() -> TypographyConfig {
        const MIN_LINE_LENGTH_EN: f64 = 42.0;
        const MAX_LINE_LENGTH_EN: f64 = 65.0;
        TypographyConfig {
            min_line_height: 1.1,
            max_line_height: 1.3,
            min_line_length: En::new(MIN_LINE_LENGTH_EN),
            max_line_length: En::new(MAX_LINE_LENGTH_EN),
            tiers: vec![
                ColumnTier::new(0.0, MAX_LINE_LENGTH_EN, 0.0),
                ColumnTier::new(MIN_LINE_LENGTH_EN, MAX_LINE_LENGTH_EN, 3.0),
                ColumnTier::new(MIN_LINE_LENGTH_EN, 50.0, 2.5),
                ColumnTier::new(MIN_LINE_LENGTH_EN, 45.0, 2.0),
            ],
        }
    }

    pub fn min_line_height(&self) -> f64 {
        self.min_line_height
    }

    pub fn max_line_height(&self) -> f64 {
        self.max_line_height
    }

    pub fn min_line_length(&self) -> En {
        self.min_line_length
    }

    pub fn max_line_length(&self) -> En {
        self.max_line_length
    }

    pub fn tiers(&self) -> &[ColumnTier] {
        &self.tiers
    }

    pub fn max_columns(&self) -> usize {
        self.tiers.len()
    }
}

#[derive(Debug, Clone)]
pub struct TypographyConfigBuilder {
    min_line_height: f64,
    max_line_height: f64,
    min_line_length: En,
    max_line_length: En,
    tiers: Vec<ColumnTier>,
}

impl TypographyConfigBuilder {
    pub fn with_tier(mut self, min_line_length: f64, max_line_length: f64, gap: f64) -> Self {
        self.tiers
            .push(ColumnTier::new(min_line_length, max_line_length, gap));
        self
    }

    pub fn build(self) -> Result<TypographyConfig, RunionError> {
        let TypographyConfigBuilder {
            min_line_height,
            max_line_height,
            min_line_length,
            max_line_length,
            tiers,
        } = self;

        if !min_line_height.is_finite() || !max_line_height.is_finite() {
            return Err(RunionError::InvalidConfiguration(
                "line heights must be finite".to_string(),
            ));
        }
        if min_line_height > max_line_height {
            return Err(RunionError::InvalidConfiguration(format!(
                "min line height {} exceeds max line height {}",
                min_line_height, max_line_height
            )));
        }
        if !min_line_length.is_finite() || !max_line_length.is_finite() {
            return Err(RunionError::InvalidConfiguration(
                "line lengths must be finite".to_string(),
            ));
        }
        if min_line_length >= max_line_length {
            return Err(RunionError::InvalidConfiguration(format!(
                "min line length {} must be below max line length {}",
                min_line_length, max_line_length
            )));
        }
        if tiers.is_empty() {
            return Err(RunionError::InvalidConfiguration(
                "at least one column tier is required".to_string(),
            ));
        }
        for (index, tier) in tiers.iter().enumerate() {
            let columns = index + 1;
            if !tier.min_line_length.is_finite()
                || !tier.max_line_length.is_finite()
                || !tier.gap.is_finite()
            {
                return Err(RunionError::InvalidConfiguration(format!(
                    "tier for {} columns has a non-finite value",
                    columns
                )));
            }
            if tier.min_line_length >= tier.max_line_length {
                return Err(RunionError::InvalidConfiguration(format!(
                    "tier for {} columns: min line length {} must be below max line length {}",
                    columns, tier.min_line_length, tier.max_line_length
                )));
            }
            if tier.gap < En::ZERO {
                return Err(RunionError::InvalidConfiguration(format!(
                    "tier for {} columns has a negative gap {}",
                    columns, tier.gap
                )));
            }
            // More columns means narrower columns; a tier may never
            // allow longer lines than the tier before it.
            if index > 0 && tier.max_line_length > tiers[index - 1].max_line_length {
                return Err(RunionError::InvalidConfiguration(format!(
                    "tier for {} columns allows longer lines than the tier before it",
                    columns
                )));
            }
        }

        Ok(TypographyConfig {
            min_line_height,
            max_line_height,
            min_line_length,
            max_line_length,
            tiers,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTypographyConfig {
    min_line_height: f64,
    max_line_height: f64,
    min_line_length: f64,
    max_line_length: f64,
    tiers: Vec<(f64, f64, f64)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTypographyConfig> for TypographyConfig {
    type Error = RunionError;

    fn try_from(raw: RawTypographyConfig) -> Result<TypographyConfig, RunionError> {
        let mut builder = TypographyConfig::builder(
            raw.min_line_height,
            raw.max_line_height,
            raw.min_line_length,
            raw.max_line_length,
        );
        for (min, max, gap) in raw.tiers {
            builder = builder.with_tier(min, max, gap);
        }
        builder.build()
    }
}
