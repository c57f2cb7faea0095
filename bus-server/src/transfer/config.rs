//! Configuration for transfer search.

/// Limits applied when looking for services towards a target.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Walking budget used when a request does not name one (metres).
    pub default_budget_metres: u32,

    /// Maximum number of stops near the origin to board at.
    pub max_boarding_stops: usize,
}

impl TransferConfig {
    pub fn new(default_budget_metres: u32, max_boarding_stops: usize) -> Self {
        Self {
            default_budget_metres,
            max_boarding_stops,
        }
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            default_budget_metres: 500,
            max_boarding_stops: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TransferConfig::default();
        assert_eq!(config.default_budget_metres, 500);
        assert_eq!(config.max_boarding_stops, 30);
    }

    #[test]
    fn custom_config() {
        let config = TransferConfig::new(800, 5);
        assert_eq!(config.default_budget_metres, 800);
        assert_eq!(config.max_boarding_stops, 5);
    }
}
