use std::io::{self, BufRead};

use tracing::{debug, info};

use crate::config::{Options, CHUNK_SIZE};
use crate::error::AggregationError;
use crate::record::Record;
use crate::stations::Stations;

/// Reads `reader` line by line and folds every record into a fresh mapping.
pub fn aggregate<R: BufRead>(reader: R, options: &Options) -> Result<Stations, AggregationError> {
    aggregate_lines(reader.lines(), options)
}

/// Folds a stream of lines in batches of `options.chunk_size`.
///
/// The first malformed line or read failure aborts the whole run. The batch
/// size only bounds how many lines are held at once, the resulting mapping is
/// the same for any value.
pub fn aggregate_lines<I>(lines: I, options: &Options) -> Result<Stations, AggregationError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let batch_len = options.batch_len();
    let mut stations = Stations::new();
    let mut batch = Vec::with_capacity(batch_len.min(CHUNK_SIZE));
    let mut first_line = 1;

    for line in lines {
        let line = line.map_err(|source| AggregationError::Read {
            line_number: first_line + batch.len(),
            source,
        })?;
        batch.push(line);
        if batch.len() >= batch_len {
            fold_batch(&mut stations, &batch, first_line, options.delimiter)?;
            first_line += batch.len();
            batch.clear();
        }
    }

    if !batch.is_empty() {
        debug!(lines = batch.len(), "processing trailing batch");
        fold_batch(&mut stations, &batch, first_line, options.delimiter)?;
        first_line += batch.len();
    }

    info!(
        lines = first_line - 1,
        stations = stations.len(),
        "aggregation finished"
    );
    Ok(stations)
}

fn fold_batch(
    stations: &mut Stations,
    batch: &[String],
    first_line: usize,
    delimiter: char,
) -> Result<(), AggregationError> {
    for (offset, line) in batch.iter().enumerate() {
        let record = Record::parse(first_line + offset, line, delimiter)?;
        stations.fold(record.key, record.value);
    }
    debug!(first_line, lines = batch.len(), "folded batch");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(chunk_size: usize) -> Options {
        Options {
            chunk_size,
            ..Options::default()
        }
    }

    #[test]
    fn empty_input_has_no_stations() {
        let stations = aggregate("".as_bytes(), &Options::default()).unwrap();
        assert!(stations.is_empty());
    }

    #[test]
    fn trailing_partial_batch_is_folded() {
        let input = "A;1.0\nA;2.0\nB;3.0\n";
        let stations = aggregate(input.as_bytes(), &options(2)).unwrap();
        assert_eq!(stations.get("A").unwrap().count, 2);
        assert_eq!(stations.get("B").unwrap().count, 1);
    }

    #[test]
    fn last_line_without_newline_and_crlf() {
        let input = "A;1.0\r\nB;2.0";
        let stations = aggregate(input.as_bytes(), &options(5000)).unwrap();
        assert_eq!(stations.get("A").unwrap().max, 1.0);
        assert_eq!(stations.get("B").unwrap().max, 2.0);
    }

    #[test]
    fn zero_chunk_size_folds_line_by_line() {
        let stations = aggregate("A;1.0\nA;3.0\n".as_bytes(), &options(0)).unwrap();
        assert_eq!(stations.get("A").unwrap().sum, 4.0);
    }

    #[test]
    fn malformed_line_reports_its_position() {
        let input = "A;1.0\nB;2.0\nbroken\nC;3.0\n";
        for chunk_size in [1, 2, 3, 5000] {
            let err = aggregate(input.as_bytes(), &options(chunk_size)).unwrap_err();
            assert!(
                matches!(&err, AggregationError::MalformedLine { line_number: 3, line, .. } if line == "broken"),
                "chunk size {chunk_size}: {err:?}"
            );
        }
    }

    #[test]
    fn malformed_line_in_trailing_batch_fails_too() {
        let input = "A;1.0\nB;2.0\nC;x\n";
        let err = aggregate(input.as_bytes(), &options(2)).unwrap_err();
        assert!(matches!(err, AggregationError::NumericFormat { line_number: 3, .. }));
    }

    #[test]
    fn read_error_aborts_with_line_number() {
        let lines = vec![
            Ok("A;1.0".to_owned()),
            Ok("A;2.0".to_owned()),
            Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
            Ok("A;3.0".to_owned()),
        ];
        let err = aggregate_lines(lines, &options(2)).unwrap_err();
        assert_eq!(err.line_number(), Some(3));
        assert!(matches!(err, AggregationError::Read { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let input: &[u8] = b"A;1.0\n\xff\xfe;2.0\n";
        let err = aggregate(input, &options(10)).unwrap_err();
        assert!(matches!(err, AggregationError::Read { line_number: 2, .. }));
    }
}
