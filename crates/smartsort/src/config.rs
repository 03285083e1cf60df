use std::fmt;

/// Thresholds that shape a sort call.
///
/// - `insert_sort_threshold`: ranges of at most this length are insertion sorted.
/// - `sorted_run_threshold`: ascending runs shorter than this are not recorded.
///
/// Both are positive; a value is validated once when built and then copied
/// into each call, so it cannot change while a sort is running.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SortConfig {
    insert_sort_threshold: usize,
    sorted_run_threshold: usize,
}

pub const DEFAULT_INSERT_SORT_THRESHOLD: usize = 10;
pub const DEFAULT_SORTED_RUN_THRESHOLD: usize = 10;

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    insert_sort_threshold: DEFAULT_INSERT_SORT_THRESHOLD,
    sorted_run_threshold: DEFAULT_SORTED_RUN_THRESHOLD,
};

/// Larger base case and run floor, measured on `u64` keys.
pub const TUNED_CONFIG: SortConfig = SortConfig {
    insert_sort_threshold: 24,
    sorted_run_threshold: 32,
};

impl SortConfig {
    pub fn new(
        insert_sort_threshold: usize,
        sorted_run_threshold: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            insert_sort_threshold: positive("insert_sort_threshold", insert_sort_threshold)?,
            sorted_run_threshold: positive("sorted_run_threshold", sorted_run_threshold)?,
        })
    }

    #[inline]
    pub fn insert_sort_threshold(&self) -> usize {
        self.insert_sort_threshold
    }

    #[inline]
    pub fn sorted_run_threshold(&self) -> usize {
        self.sorted_run_threshold
    }

    pub fn with_insert_sort_threshold(self, threshold: usize) -> Result<Self, ConfigError> {
        Self::new(threshold, self.sorted_run_threshold)
    }

    pub fn with_sorted_run_threshold(self, threshold: usize) -> Result<Self, ConfigError> {
        Self::new(self.insert_sort_threshold, threshold)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

fn positive(name: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroThreshold { name });
    }
    Ok(value)
}

/// Rejected threshold values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold of zero would stop the recursion from reaching its base case
    /// or register every empty stretch as a run.
    ZeroThreshold { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroThreshold { name } => {
                write!(f, "{} must be a positive integer, got 0", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SortConfig::default();
        assert_eq!(config.insert_sort_threshold(), DEFAULT_INSERT_SORT_THRESHOLD);
        assert_eq!(config.sorted_run_threshold(), DEFAULT_SORTED_RUN_THRESHOLD);
        assert_eq!(SortConfig::new(24, 32), Ok(TUNED_CONFIG));
    }

    #[test]
    fn zero_thresholds_fail_fast() {
        assert_eq!(
            SortConfig::new(0, 5),
            Err(ConfigError::ZeroThreshold {
                name: "insert_sort_threshold"
            })
        );
        assert_eq!(
            SortConfig::default().with_sorted_run_threshold(0),
            Err(ConfigError::ZeroThreshold {
                name: "sorted_run_threshold"
            })
        );
        assert_eq!(
            ConfigError::ZeroThreshold {
                name: "sorted_run_threshold"
            }
            .to_string(),
            "sorted_run_threshold must be a positive integer, got 0"
        );
    }

    #[test]
    fn setters_keep_the_other_threshold() {
        let config = SortConfig::default()
            .with_insert_sort_threshold(1)
            .and_then(|c| c.with_sorted_run_threshold(4))
            .unwrap();
        assert_eq!(config.insert_sort_threshold(), 1);
        assert_eq!(config.sorted_run_threshold(), 4);
    }
}
