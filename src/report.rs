use std::fmt::{self, Display, Write};

use crate::stations::Summary;

/// Renders `{key=min/mean/max, ...}` with keys in ascending byte order.
pub fn render(summary: &Summary) -> String {
    Report(summary).to_string()
}

/// Display adapter for a whole summary, see [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a Summary);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, station)) in self.0.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{key}={}/{}/{}",
                Tenths(station.min),
                Tenths(station.mean),
                Tenths(station.max)
            )?;
        }
        f.write_char('}')
    }
}

/// Formats a value with exactly one decimal.
///
/// The exact binary value is rounded half to even: `-3.25` gives `-3.2` and
/// `0.75` gives `0.8`. Negative values that round to zero print as `-0.0`.
#[derive(Debug, Clone, Copy)]
pub struct Tenths(pub f32);

impl Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}");
        }
        // f32 -> f64 is exact and so is the product: 24 significant bits times 10 fit in 53.
        let tenths = (f64::from(value) * 10.).round_ties_even().abs();
        let digits = format!("{tenths:.0}");
        let (whole, fraction) = match digits.len() {
            1 => ("0", digits.as_str()),
            n => digits.split_at(n - 1),
        };
        if value.is_sign_negative() {
            f.write_char('-')?;
        }
        write!(f, "{whole}.{fraction}")
    }
}
