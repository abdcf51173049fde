use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::market::Market;

/// Short and long weekday names for one language, indexed Monday = 0 .. Sunday = 6.
/// Names are stored lowercased since every lookup is case-insensitive.
#[derive(Debug)]
pub struct Lexicon {
    pub short: [&'static str; 7],
    pub long: [&'static str; 7],
}

pub static SWEDISH: Lexicon = Lexicon {
    short: ["mån", "tis", "ons", "tor", "fre", "lör", "sön"],
    long: [
        "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag",
    ],
};

/// Shared by Norway and both Danish markets.
pub static DANO_NORWEGIAN: Lexicon = Lexicon {
    short: ["man", "tir", "ons", "tor", "fre", "lør", "søn"],
    long: [
        "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag",
    ],
};

pub static POLISH: Lexicon = Lexicon {
    short: ["pon", "wto", "śro", "czw", "pią", "sob", "nie"],
    long: [
        "poniedziałek",
        "wtorek",
        "środa",
        "czwartek",
        "piątek",
        "sobota",
        "niedziela",
    ],
};

impl Lexicon {
    /// `token` must already be normalized.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.short
            .iter()
            .position(|name| *name == token)
            .or_else(|| self.long.iter().position(|name| *name == token))
    }

    /// Long name with its first letter uppercased, e.g. "Måndag".
    pub fn label(&self, index: usize) -> Option<String> {
        let name = self.long.get(index)?;
        let mut chars = name.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
    }
}

pub struct DayPatterns {
    pub short: Regex,
    pub long: Regex,
    pub range: Regex,
}

impl DayPatterns {
    fn compile(lexicon: &Lexicon) -> Self {
        fn alternation(names: &[&str]) -> String {
            names.iter().map(|name| regex::escape(name)).join("|")
        }

        fn build(pattern: &str) -> Regex {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("Expected day name pattern to compile")
        }

        let short = alternation(&lexicon.short);
        let long = alternation(&lexicon.long);

        Self {
            short: build(&format!("^(?:{short})$")),
            long: build(&format!("^(?:{long})$")),
            range: build(&format!("^(?:{short})-(?:{short})$")),
        }
    }
}

lazy_static! {
    static ref SWEDISH_PATTERNS: DayPatterns = DayPatterns::compile(&SWEDISH);
    static ref DANO_NORWEGIAN_PATTERNS: DayPatterns = DayPatterns::compile(&DANO_NORWEGIAN);
    static ref POLISH_PATTERNS: DayPatterns = DayPatterns::compile(&POLISH);
}

impl Market {
    pub(crate) fn patterns(&self) -> &'static DayPatterns {
        match self {
            Market::Sweden => &*SWEDISH_PATTERNS,
            Market::Norway | Market::Denmark | Market::DenmarkDgs => &*DANO_NORWEGIAN_PATTERNS,
            Market::Poland => &*POLISH_PATTERNS,
        }
    }
}

/// Lowercases and drops every whitespace character, so " Mån - Fre " reads as "mån-fre".
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize, DANO_NORWEGIAN, POLISH, SWEDISH};
    use crate::market::Market;
    use rstest::rstest;

    #[rstest]
    #[case(" Mån ", "mån")]
    #[case("MÅN - FRE", "mån-fre")]
    #[case("Śro\t", "śro")]
    #[case("lør\u{a0}", "lør")]
    fn test_normalize(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(normalize(token), expected);
    }

    #[test]
    fn test_every_name_is_three_chars_short() {
        for lexicon in [&SWEDISH, &DANO_NORWEGIAN, &POLISH] {
            for name in lexicon.short {
                assert_eq!(name.chars().count(), 3, "{name}");
            }
        }
    }

    #[test]
    fn test_index_of_checks_short_then_long() {
        assert_eq!(SWEDISH.index_of("ons"), Some(2));
        assert_eq!(SWEDISH.index_of("söndag"), Some(6));
        assert_eq!(POLISH.index_of("poniedziałek"), Some(0));
        assert_eq!(DANO_NORWEGIAN.index_of("måndag"), None);
    }

    #[test]
    fn test_label_capitalizes_long_name() {
        assert_eq!(SWEDISH.label(0).as_deref(), Some("Måndag"));
        assert_eq!(POLISH.label(2).as_deref(), Some("Środa"));
        assert_eq!(SWEDISH.label(7), None);
    }

    #[test]
    fn test_range_pattern_uses_short_names_on_both_sides() {
        let patterns = Market::Poland.patterns();
        assert!(patterns.range.is_match("pon-śro"));
        assert!(patterns.range.is_match("śro-nie"));
        assert!(!patterns.range.is_match("poniedziałek-środa"));
        assert!(!patterns.range.is_match("pon-"));
    }
}
