use crate::error::AggregationError;

/// One `<station><delimiter><value>` line, borrowed from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub key: &'a str,
    pub value: f32,
}

impl<'a> Record<'a> {
    pub fn parse(
        line_number: usize,
        line: &'a str,
        delimiter: char,
    ) -> Result<Self, AggregationError> {
        let malformed = || AggregationError::MalformedLine {
            line_number,
            line: line.to_owned(),
            delimiter,
        };
        let (key, value) = line.split_once(delimiter).ok_or_else(malformed)?;
        if value.contains(delimiter) {
            return Err(malformed());
        }

        // Parsed straight to the nearest f32, every later operation stays in single precision.
        let parsed = fast_float::parse::<f32, _>(value)
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AggregationError::NumericFormat {
                line_number,
                line: line.to_owned(),
                value: value.to_owned(),
            })?;

        Ok(Self { key, value: parsed })
    }
}
