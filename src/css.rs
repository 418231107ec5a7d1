use crate::error::RunionError;
use crate::layout::Layout;
use std::io::{self, Write};

// The custom properties a resolved layout is applied through. Values
// stay unitless; the stylesheet multiplies by the en size itself.
pub fn write_custom_properties<W: Write>(out: &mut W, layout: &Layout) -> io::Result<()> {
    writeln!(out, "--column-count: {};", layout.columns)?;
    writeln!(out, "--column-gap-en: {};", layout.gap.to_f64())?;
    writeln!(out, "--column-width-en: {};", layout.line_length.to_f64())?;
    writeln!(out, "--padding-left-en: {};", layout.padding_left.to_f64())?;
    writeln!(out, "--padding-right-en: {};", layout.padding_right.to_f64())?;
    writeln!(out, "--line-height: {};", layout.line_height)?;
    Ok(())
}

pub fn custom_properties(layout: &Layout) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_custom_properties(&mut out, layout);
    String::from_utf8(out).unwrap_or_default()
}

const DEFAULT_BREAKPOINT_PROPERTY: &str = "--animation-position-mediaq";

// A stylesheet of min-width breakpoints: one base rule declaring the
// property at min_size, then one @media rule per step redeclaring it,
// up to and including max_size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointSheet {
    min_size: u32,
    max_size: u32,
    step: u32,
    property: String,
}

impl BreakpointSheet {
    pub fn new(min_size: u32, max_size: u32, step: u32) -> Result<BreakpointSheet, RunionError> {
        if step == 0 {
            return Err(RunionError::InvalidConfiguration(
                "breakpoint step must be greater than zero".to_string(),
            ));
        }
        if min_size > max_size {
            return Err(RunionError::InvalidConfiguration(format!(
                "breakpoint min size {}px exceeds max size {}px",
                min_size, max_size
            )));
        }
        Ok(BreakpointSheet {
            min_size,
            max_size,
            step,
            property: DEFAULT_BREAKPOINT_PROPERTY.to_string(),
        })
    }

    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.property = name.into();
        self
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = u32> + '_ {
        (self.min_size..=self.max_size)
            .step_by(self.step as usize)
            .skip(1)
    }

    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, ":root {{")?;
        writeln!(out, "    {}: {}", self.property, self.min_size)?;
        writeln!(out, "}}")?;
        // min-width means: equal or wider.
        for position in self.breakpoints() {
            writeln!(out, "@media (min-width: {}px) {{", position)?;
            writeln!(out, "    :root {{")?;
            writeln!(out, "        {}: {}", self.property, position)?;
            writeln!(out, "    }}")?;
            writeln!(out, "}}")?;
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut out = Vec::new();
        let _ = self.write(&mut out);
        String::from_utf8(out).unwrap_or_default()
    }
}
