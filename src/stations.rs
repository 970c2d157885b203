use ahash::RandomState;
use hashbrown::HashMap;

/// Running statistics of one station, all arithmetic in single precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationStats {
    pub count: u64,
    pub sum: f32,
    pub min: f32,
    pub max: f32,
}

impl StationStats {
    /// Entry as it exists right before its first fold.
    #[inline]
    fn seed(value: f32) -> Self {
        Self {
            count: 0,
            sum: 0.,
            min: value,
            max: value,
        }
    }

    #[inline]
    pub fn fold(&mut self, value: f32) {
        self.count += 1;
        self.sum += value;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    #[inline]
    pub fn merge(&mut self, other: &StationStats) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// Mean of the folded values, clamped to `[min, max]` since the f32 sum drifts.
    #[inline]
    pub fn mean(&self) -> f32 {
        (self.sum / self.count as f32).clamp(self.min, self.max)
    }
}

/// The per-station mapping owned by one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct Stations {
    inner: HashMap<String, StationStats, RandomState>,
}

impl Stations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `value` into the entry of `key`, creating it on first sight.
    #[inline]
    pub fn fold(&mut self, key: &str, value: f32) {
        self.inner
            .entry_ref(key)
            .or_insert_with(|| StationStats::seed(value))
            .fold(value);
    }

    /// Combines two mappings key-wise, the result does not depend on which side is `self`.
    pub fn merge(&mut self, other: Stations) {
        for (key, stats) in other.inner {
            self.inner
                .entry(key)
                .and_modify(|e| e.merge(&stats))
                .or_insert(stats);
        }
    }

    pub fn get(&self, key: &str) -> Option<&StationStats> {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationStats)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Computes every mean once and hands the mapping over to reporting.
    pub fn finish(self) -> Summary {
        let inner = self
            .inner
            .into_iter()
            .map(|(key, stats)| {
                let summary = StationSummary {
                    min: stats.min,
                    mean: stats.mean(),
                    max: stats.max,
                    count: stats.count,
                };
                (key, summary)
            })
            .collect();
        Summary { inner }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSummary {
    pub min: f32,
    pub mean: f32,
    pub max: f32,
    pub count: u64,
}

/// Finalized statistics, keyed by station.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    inner: HashMap<String, StationSummary, RandomState>,
}

impl Summary {
    pub fn get(&self, key: &str) -> Option<&StationSummary> {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entries in ascending byte-wise key order.
    pub fn sorted(&self) -> Vec<(&str, &StationSummary)> {
        let mut entries = self
            .inner
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
