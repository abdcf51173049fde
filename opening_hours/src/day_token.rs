use std::ops::RangeInclusive;

use shared_kernel::date_time::time_frame::TimeFrame;

use crate::lexicon::normalize;
use crate::market::Market;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTokenKind {
    NotADay,
    /// e.g. "mån"
    ShortDay,
    /// e.g. "måndag"
    LongDay,
}

/// Inclusive weekday indices, Monday = 0.
pub type DayRange = TimeFrame<usize>;

pub fn classify_day_token(token: &str, market: Market) -> DayTokenKind {
    let word = normalize(token);
    let patterns = market.patterns();

    if patterns.short.is_match(&word) {
        return DayTokenKind::ShortDay;
    }

    if patterns.long.is_match(&word) {
        return DayTokenKind::LongDay;
    }

    DayTokenKind::NotADay
}

pub fn day_name_to_index(token: &str, market: Market) -> Option<usize> {
    market.lexicon().index_of(&normalize(token))
}

pub fn is_day_range(token: &str, market: Market) -> bool {
    market.patterns().range.is_match(&normalize(token))
}

/// Only meaningful once [`is_day_range`] accepted the same token. The
/// abbreviations sit at character positions 0..3 and 4..7.
pub fn resolve_day_range(token: &str, market: Market) -> Option<DayRange> {
    let word = normalize(token);
    let from: String = word.chars().take(3).collect();
    let to: String = word.chars().skip(4).take(3).collect();

    Some(DayRange {
        from: day_name_to_index(&from, market)?,
        to: day_name_to_index(&to, market)?,
    })
}

pub trait DayRangeExt {
    fn indices(&self) -> RangeInclusive<usize>;
    fn wrapping_indices(&self) -> Vec<usize>;
}

impl DayRangeExt for DayRange {
    /// Empty when `from > to`: "fre-mån" does not wrap around the week.
    fn indices(&self) -> RangeInclusive<usize> {
        self.from..=self.to
    }

    fn wrapping_indices(&self) -> Vec<usize> {
        if self.from <= self.to {
            return self.indices().collect();
        }
        (self.from..7).chain(0..=self.to).collect()
    }
}
