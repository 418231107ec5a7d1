use crate::Runion;
use crate::error::RunionError;
use crate::layout::Layout;
use crate::types::En;
use std::io::{self, Write};
use std::ops::Range;

// One evaluated width of a sweep. A layout of None means the resolver
// reported no fit at that width, which the sweep records instead of
// aborting, so a malformed config's behavior can still be charted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepPoint {
    pub width_px: u32,
    pub layout: Option<Layout>,
}

// Evaluates the resolver at every integer pixel width of the range
// against a fixed em size. Input-validation errors still abort; only
// NoFit is recorded per point.
pub fn sweep(runion: &Runion, width_px: Range<u32>, em_px: f64) -> Result<Vec<SweepPoint>, RunionError> {
    let mut points = Vec::with_capacity(width_px.len());
    for width in width_px {
        let layout = match runion.layout(width as f64, em_px) {
            Ok(layout) => Some(layout),
            Err(RunionError::NoFit { .. }) => None,
            Err(err) => return Err(err),
        };
        points.push(SweepPoint {
            width_px: width,
            layout,
        });
    }
    Ok(points)
}

pub fn write_report<W: Write>(out: &mut W, points: &[SweepPoint], em_px: f64) -> io::Result<()> {
    for point in points {
        let width_em = point.width_px as f64 / em_px;
        let width_en = En::from_px(point.width_px as f64, em_px);
        write!(
            out,
            "{}px ({}em, {}): ",
            point.width_px, width_em, width_en
        )?;
        match &point.layout {
            Some(layout) => writeln!(
                out,
                "{} columns, line length {}, gap {}, padding {}/{}, line height {}",
                layout.columns,
                layout.line_length,
                layout.gap,
                layout.padding_left,
                layout.padding_right,
                layout.line_height
            )?,
            None => writeln!(out, "no fit")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypographyConfig;

    #[test]
    fn sweep_covers_every_width_in_the_range() {
        let runion = Runion::new(TypographyConfig::latin());
        let points = sweep(&runion, 0..2400, 16.0).expect("sweep");
        assert_eq!(points.len(), 2400);
        assert_eq!(points[0].width_px, 0);
        assert_eq!(points[2399].width_px, 2399);
    }

    #[test]
    fn columns_are_monotonic_across_the_full_default_range() {
        // 0..2400px at a 16px em spans every tier threshold of the
        // default config, including both padded stretches.
        let runion = Runion::new(TypographyConfig::latin());
        let points = sweep(&runion, 1..2400, 16.0).expect("sweep");
        let mut previous = 0usize;
        for point in &points {
            let layout = point.layout.expect("every width above zero fits");
            assert!(
                layout.columns >= previous,
                "columns dropped from {} to {} at {}px",
                previous,
                layout.columns,
                point.width_px
            );
            previous = layout.columns;
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn zero_width_reports_no_fit() {
        // 0en satisfies no tier: the 1-column tier needs a line length
        // strictly above zero.
        let runion = Runion::new(TypographyConfig::latin());
        let points = sweep(&runion, 0..1, 16.0).expect("sweep");
        assert_eq!(points[0].layout, None);
    }

    #[test]
    fn sweep_aborts_on_invalid_em_size() {
        let runion = Runion::new(TypographyConfig::latin());
        let result = sweep(&runion, 0..10, 0.0);
        assert!(matches!(result, Err(RunionError::InvalidConfiguration(_))));
    }

    #[test]
    fn report_lines_carry_px_em_en_and_the_layout() {
        let runion = Runion::new(TypographyConfig::latin());
        let points = sweep(&runion, 400..401, 16.0).expect("sweep");
        let mut out = Vec::new();
        write_report(&mut out, &points, 16.0).expect("report");
        let report = String::from_utf8(out).expect("utf8");
        assert!(
            report.starts_with(
                "400px (25em, 50en): 1 columns, line length 50en, gap 0en, padding 0en/0en, line height 1.20"
            ),
            "unexpected report line: {}",
            report
        );
    }

    #[test]
    fn report_marks_no_fit_widths() {
        let runion = Runion::new(TypographyConfig::latin());
        let points = sweep(&runion, 0..1, 16.0).expect("sweep");
        let mut out = Vec::new();
        write_report(&mut out, &points, 16.0).expect("report");
        let report = String::from_utf8(out).expect("utf8");
        assert_eq!(report, "0px (0em, 0en): no fit\n");
    }
}
