use anyhow::Context;
use serde::Deserialize;
use shared_kernel::configuration::config;

use crate::market::Market;
use crate::schedule::ParserOptions;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub market: Market,
    #[serde(default)]
    pub parser: ParserOptions,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Settings> {
        config::<Settings>().context("Failed to deserialize settings to opening_hours settings")
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::market::Market;
    use shared_kernel::configuration::config_from;
    use std::path::Path;

    #[test]
    fn test_base_configuration_is_lenient_swedish() {
        let directory = Path::new(env!("CARGO_MANIFEST_DIR")).join("../configuration");
        let settings = config_from::<Settings>(&directory).unwrap();

        assert_eq!(settings.market, Market::Sweden);
        assert!(!settings.parser.wrap_day_ranges);
        assert!(!settings.parser.strict_clock);
    }

    #[test]
    fn test_missing_base_file_is_an_error() {
        let directory = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist");
        assert!(config_from::<Settings>(&directory).is_err());
    }
}
