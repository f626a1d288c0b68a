//! Board configuration.

/// Policy constants for selecting and refreshing departures.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Maximum number of distinct departures to show.
    pub limit: usize,

    /// The lead journey is refetched whenever the clock minute is a
    /// multiple of this value.
    pub refresh_interval_mins: u32,
}

impl BoardConfig {
    pub fn new(limit: usize, refresh_interval_mins: u32) -> Self {
        Self {
            limit,
            refresh_interval_mins,
        }
    }

    /// Whether `clock_minute` falls on a refresh boundary.
    pub fn is_refresh_minute(&self, clock_minute: u32) -> bool {
        self.refresh_interval_mins != 0 && clock_minute % self.refresh_interval_mins == 0
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            limit: 4,
            refresh_interval_mins: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.limit, 4);
        assert_eq!(config.refresh_interval_mins, 5);
    }

    #[test]
    fn refresh_minutes() {
        let config = BoardConfig::default();
        assert!(config.is_refresh_minute(0));
        assert!(config.is_refresh_minute(10));
        assert!(config.is_refresh_minute(55));
        assert!(!config.is_refresh_minute(11));
        assert!(!config.is_refresh_minute(59));
    }

    #[test]
    fn zero_interval_never_refreshes() {
        let config = BoardConfig::new(4, 0);
        assert!(!config.is_refresh_minute(0));
        assert!(!config.is_refresh_minute(5));
    }
}
