use std::fmt;

use chrono::Weekday;
use itertools::Itertools;
use serde::Serialize;

use crate::interval::TimeInterval;
use crate::market::Market;
use crate::raw::RawDaySpan;
use crate::schedule::{ScheduleError, WeeklySchedule};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLine {
    pub label: String,
    /// "08:00-17:00" per interval, or the market's closed label.
    pub times: Vec<String>,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbatimLine {
    pub day: String,
    pub time: String,
}

/// What the details page shows for opening hours: one line per weekday
/// when the day spans could be read, otherwise every raw entry as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "snake_case")]
pub enum OpeningHoursView {
    Weekly(Vec<DayLine>),
    Verbatim(Vec<VerbatimLine>),
}

fn interval_text(interval: &TimeInterval, market: Market) -> String {
    match interval.to_printable() {
        Some(printable) => format!("{}-{}", printable.from, printable.to),
        None => market.closed_label().to_string(),
    }
}

fn weekly_lines(schedule: &WeeklySchedule, market: Market, today: Weekday) -> Vec<DayLine> {
    let today = today.num_days_from_monday() as usize;
    schedule
        .days()
        .enumerate()
        .map(|(index, intervals)| {
            let times = if intervals.is_empty() {
                vec![market.closed_label().to_string()]
            } else {
                intervals
                    .iter()
                    .map(|interval| interval_text(interval, market))
                    .collect()
            };
            DayLine {
                label: market.lexicon().label(index).unwrap_or_default(),
                times,
                is_today: index == today,
            }
        })
        .collect()
}

fn verbatim_lines(dayspans: &[RawDaySpan]) -> Vec<VerbatimLine> {
    dayspans
        .iter()
        .map(|dayspan| VerbatimLine {
            day: dayspan.day.clone(),
            time: format!(
                "{}-{}",
                dayspan.start_time(1).unwrap_or_default(),
                dayspan.end_time(1).unwrap_or_default()
            ),
        })
        .collect()
}

impl OpeningHoursView {
    pub fn build(
        dayspans: &[RawDaySpan],
        parsed: &Result<WeeklySchedule, ScheduleError>,
        market: Market,
        today: Weekday,
    ) -> Self {
        match parsed {
            Ok(schedule) => OpeningHoursView::Weekly(weekly_lines(schedule, market, today)),
            Err(_) => OpeningHoursView::Verbatim(verbatim_lines(dayspans)),
        }
    }
}

impl fmt::Display for OpeningHoursView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OpeningHoursView::Weekly(lines) => lines
                .iter()
                .map(|line| {
                    let marker = if line.is_today { "*" } else { " " };
                    format!("{marker} {:<14}{}", line.label, line.times.join(", "))
                })
                .join("\n"),
            OpeningHoursView::Verbatim(lines) => lines
                .iter()
                .map(|line| format!("  {:<14}{}", line.day, line.time))
                .join("\n"),
        };
        f.write_str(&text)
    }
}
