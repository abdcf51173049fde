use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::day_token::{
    classify_day_token, day_name_to_index, is_day_range, resolve_day_range, DayRangeExt,
    DayTokenKind,
};
use crate::interval::TimeInterval;
use crate::market::Market;
use crate::raw::RawDaySpan;
use crate::time_span::parse_time_spans;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("No weekday could be read as open")]
    NoOpenDay,
    #[error("Unknown market code: {0}")]
    UnknownMarket(String),
}

/// Both default to the lenient behaviour the directory data has always
/// been read with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Let "fre-mån" run Friday through Monday instead of assigning nothing.
    pub wrap_day_ranges: bool,
    /// Reject hours above 24 and minutes above 59.
    pub strict_clock: bool,
}

/// Interval lists for Monday (index 0) through Sunday (index 6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule([Vec<TimeInterval>; 7]);

impl WeeklySchedule {
    pub fn day(&self, index: usize) -> Option<&[TimeInterval]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn weekday(&self, weekday: Weekday) -> &[TimeInterval] {
        &self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn days(&self) -> impl Iterator<Item = &[TimeInterval]> {
        self.0.iter().map(Vec::as_slice)
    }

    pub fn has_open_day(&self) -> bool {
        self.days().flatten().any(TimeInterval::is_open)
    }
}

pub struct ScheduleParser {
    market: Market,
    options: ParserOptions,
}

impl ScheduleParser {
    pub fn new(market: Market) -> Self {
        Self {
            market,
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(self, options: ParserOptions) -> Self {
        Self { options, ..self }
    }

    fn assigned_days(&self, day: &str) -> Vec<usize> {
        if is_day_range(day, self.market) {
            return match resolve_day_range(day, self.market) {
                Some(range) if self.options.wrap_day_ranges => range.wrapping_indices(),
                Some(range) => range.indices().collect(),
                None => vec![],
            };
        }

        match classify_day_token(day, self.market) {
            DayTokenKind::ShortDay | DayTokenKind::LongDay => {
                day_name_to_index(day, self.market).into_iter().collect()
            }
            DayTokenKind::NotADay => vec![],
        }
    }

    /// Later entries overwrite earlier ones for the same weekday. Days no
    /// entry mentions are closed. Fails when no weekday ends up open.
    #[tracing::instrument(skip(self, dayspans), fields(market = %self.market, entries = dayspans.len()))]
    pub fn parse(&self, dayspans: &[RawDaySpan]) -> Result<WeeklySchedule, ScheduleError> {
        let mut days: [Option<Vec<TimeInterval>>; 7] = Default::default();

        for dayspan in dayspans {
            let time = parse_time_spans(dayspan, &self.options);
            let indices = self.assigned_days(&dayspan.day);

            if indices.is_empty() {
                tracing::debug!(day = %dayspan.day, "ignoring day span");
                continue;
            }

            for index in indices {
                days[index] = Some(time.clone());
            }
        }

        let schedule = WeeklySchedule(days.map(|day| day.unwrap_or_else(|| vec![TimeInterval::Closed])));

        if !schedule.has_open_day() {
            tracing::debug!("no open day found");
            return Err(ScheduleError::NoOpenDay);
        }

        Ok(schedule)
    }
}

pub fn parse(dayspans: &[RawDaySpan], market: Market) -> Result<WeeklySchedule, ScheduleError> {
    ScheduleParser::new(market).parse(dayspans)
}

pub fn parse_with_code(dayspans: &[RawDaySpan], code: &str) -> Result<WeeklySchedule, ScheduleError> {
    let market = Market::from_code(code).ok_or_else(|| ScheduleError::UnknownMarket(code.to_string()))?;
    parse(dayspans, market)
}
