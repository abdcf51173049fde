use std::str::FromStr;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared_kernel::date_time::zoned_date_time::ZonedDateTime;
use strum_macros::{Display, EnumIter, EnumString};

use crate::lexicon::{Lexicon, DANO_NORWEGIAN, POLISH, SWEDISH};

/// The markets the directory API serves. Each one decides which day-name
/// vocabulary applies to its opening hours.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Market {
    #[strum(serialize = "se")]
    #[serde(rename = "se")]
    Sweden,
    #[strum(serialize = "no")]
    #[serde(rename = "no")]
    Norway,
    #[strum(serialize = "dk")]
    #[serde(rename = "dk")]
    Denmark,
    #[strum(serialize = "dgs")]
    #[serde(rename = "dgs")]
    DenmarkDgs,
    #[strum(serialize = "pl")]
    #[serde(rename = "pl")]
    Poland,
}

impl Market {
    pub fn from_code(code: &str) -> Option<Self> {
        Market::from_str(code.trim()).ok()
    }

    pub(crate) fn lexicon(&self) -> &'static Lexicon {
        match self {
            Market::Sweden => &SWEDISH,
            Market::Norway | Market::Denmark | Market::DenmarkDgs => &DANO_NORWEGIAN,
            Market::Poland => &POLISH,
        }
    }

    pub fn timezone(&self) -> Tz {
        match self {
            Market::Sweden => chrono_tz::Europe::Stockholm,
            Market::Norway => chrono_tz::Europe::Oslo,
            Market::Denmark | Market::DenmarkDgs => chrono_tz::Europe::Copenhagen,
            Market::Poland => chrono_tz::Europe::Warsaw,
        }
    }

    pub fn closed_label(&self) -> &'static str {
        match self {
            Market::Sweden => "Stängt",
            Market::Norway => "Stengt",
            Market::Denmark | Market::DenmarkDgs => "Lukket",
            Market::Poland => "Zamknięte",
        }
    }

    /// Current wall clock time in the market's timezone.
    pub fn now(&self) -> NaiveDateTime {
        ZonedDateTime::now(self.timezone()).wall_clock()
    }
}

#[cfg(test)]
mod tests {
    use super::Market;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("se", Some(Market::Sweden))]
    #[case("SE", Some(Market::Sweden))]
    #[case(" no ", Some(Market::Norway))]
    #[case("dk", Some(Market::Denmark))]
    #[case("dgs", Some(Market::DenmarkDgs))]
    #[case("pl", Some(Market::Poland))]
    #[case("fi", None)]
    #[case("", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Market>) {
        assert_eq!(Market::from_code(code), expected);
    }

    #[test]
    fn test_code_round_trips_through_display() {
        for market in Market::iter() {
            assert_eq!(Market::from_code(&market.to_string()), Some(market));
        }
    }

    #[test]
    fn test_danish_markets_share_the_norwegian_lexicon() {
        assert!(std::ptr::eq(
            Market::Denmark.lexicon(),
            Market::Norway.lexicon()
        ));
        assert!(std::ptr::eq(
            Market::DenmarkDgs.lexicon(),
            Market::Norway.lexicon()
        ));
        assert!(!std::ptr::eq(
            Market::Sweden.lexicon(),
            Market::Norway.lexicon()
        ));
    }

    #[test]
    fn test_serde_uses_market_codes() {
        let market: Market = serde_json::from_str("\"dgs\"").unwrap();
        assert_eq!(market, Market::DenmarkDgs);
        assert_eq!(serde_json::to_string(&Market::Poland).unwrap(), "\"pl\"");
    }
}
