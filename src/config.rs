/// Number of lines buffered before they are folded into the mapping.
pub const CHUNK_SIZE: usize = 5000;
/// Separator between the station name and its measurement.
pub const DELIMITER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub chunk_size: usize,
    pub delimiter: char,
}

impl Options {
    /// Batch size actually used, a zero chunk size still folds one line at a time.
    #[inline]
    pub fn batch_len(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            delimiter: DELIMITER,
        }
    }
}
