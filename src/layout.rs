use crate::config::{ColumnTier, TypographyConfig};
use crate::error::RunionError;
use crate::types::En;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub columns: usize,
    pub line_length: En,
    pub gap: En,
    pub padding_left: En,
    pub padding_right: En,
    pub line_height: f64,
}

impl Layout {
    // Total occupied width, columns plus gaps plus padding. For an
    // exact fit this equals the available width.
    pub fn total_width(&self) -> En {
        let gaps = self.columns.saturating_sub(1) as f64;
        self.line_length * self.columns as f64
            + self.gap * gaps
            + self.padding_left
            + self.padding_right
    }
}

// A column setup before the line height is composed in.
struct ColumnFit {
    columns: usize,
    line_length: En,
    gap: En,
    padding_left: En,
    padding_right: En,
}

fn tier_line_length(tier: &ColumnTier, columns: usize, available: En) -> En {
    let gaps = (columns - 1) as f64;
    (available - tier.gap * gaps) / columns as f64
}

// First pass: ascending column count, take the first tier whose
// computed line length lands inside its (min, max] range. Fewer
// columns win when more than one tier would fit.
fn exact_fit(tiers: &[ColumnTier], available: En) -> Option<ColumnFit> {
    for (index, tier) in tiers.iter().enumerate() {
        let columns = index + 1;
        let line_length = tier_line_length(tier, columns, available);
        if line_length > tier.min_line_length && line_length <= tier.max_line_length {
            return Some(ColumnFit {
                columns,
                line_length,
                gap: tier.gap,
                padding_left: En::ZERO,
                padding_right: En::ZERO,
            });
        }
    }
    None
}

// Second pass: descending column count, so the widest setup that can
// still hold its minimum line length wins. Line length is clamped to
// the tier maximum and the leftover width becomes padding, split 3:2
// left-heavy. Another strategy could be to give all of it to the right.
fn padded_fit(tiers: &[ColumnTier], available: En) -> Option<ColumnFit> {
    for (index, tier) in tiers.iter().enumerate().rev() {
        let columns = index + 1;
        let gaps = (columns - 1) as f64;
        let line_length = tier_line_length(tier, columns, available);

        if line_length <= tier.min_line_length {
            continue; // use fewer columns
        }
        // The exact pass already ruled out min < length <= max, so the
        // length is over the tier maximum here.
        let line_length = tier.max_line_length;

        let padding = available - line_length * columns as f64 - tier.gap * gaps;
        return Some(ColumnFit {
            columns,
            line_length,
            gap: tier.gap,
            padding_left: padding * (3.0 / 5.0),
            padding_right: padding * (2.0 / 5.0),
        });
    }
    None
}

// Line height grows linearly with line length across the config's
// global line-length range; shorter lines get tighter leading. The
// clamp matters: a fallback-clamped line length can sit outside the
// global range and push the ratio outside [0, 1].
pub(crate) fn line_height(config: &TypographyConfig, line_length: En) -> f64 {
    let position = line_length - config.min_line_length();
    let range = config.max_line_length() - config.min_line_length();
    let ratio = position / range;
    let span = config.max_line_height() - config.min_line_height();
    let raw = config.min_line_height() + span * ratio;
    raw.clamp(config.min_line_height(), config.max_line_height())
}

pub(crate) fn resolve(config: &TypographyConfig, available: En) -> Result<Layout, RunionError> {
    let fit = exact_fit(config.tiers(), available)
        .or_else(|| padded_fit(config.tiers(), available));
    // With a proper config this cannot fail, since the 1-column tier
    // starts at a minimum line length of zero.
    let fit = fit.ok_or(RunionError::NoFit {
        available_width_en: available.to_f64(),
    })?;
    Ok(Layout {
        columns: fit.columns,
        line_length: fit.line_length,
        gap: fit.gap,
        padding_left: fit.padding_left,
        padding_right: fit.padding_right,
        line_height: line_height(config, fit.line_length),
    })
}
