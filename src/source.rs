use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::error::AggregationError;

/// Measurement file mapped into memory.
pub enum Source {
    Mapped(Mmap),
    Empty,
}

impl Source {
    pub fn open(path: &Path) -> Result<Self, AggregationError> {
        let open_error = |source| AggregationError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_error)?;
        let len = file.metadata().map_err(open_error)?.len();
        if len == 0 {
            debug!(path = %path.display(), "input is empty");
            return Ok(Self::Empty);
        }

        // SAFETY: the mapping is read-only, the input must not be truncated while a run reads it.
        let mmap = unsafe { Mmap::map(&file) }.map_err(open_error)?;
        debug!(path = %path.display(), bytes = len, "mapped input");
        Ok(Self::Mapped(mmap))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Empty => &[],
        }
    }
}
