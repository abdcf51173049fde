use lazy_static::lazy_static;
use regex::Regex;

use crate::interval::{ClockTime, TimeInterval};
use crate::raw::RawDaySpan;
use crate::schedule::ParserOptions;

lazy_static! {
    // "8", "08", "8:30", "17:00". Digit shape only, 8:60 passes.
    static ref VALID_TIME: Regex =
        Regex::new(r"^([0-9]{1,2})(?::([0-9]{2}))?$").expect("Expected VALID_TIME regex to compile");
}

fn clear_whitespaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn read_clock(value: &str, options: &ParserOptions) -> Option<ClockTime> {
    let captures = VALID_TIME.captures(value)?;
    let hour = captures.get(1)?.as_str().parse::<u8>().ok()?;
    let minute = match captures.get(2) {
        Some(minute) => minute.as_str().parse::<u8>().ok()?,
        None => 0,
    };

    if options.strict_clock && (hour > 24 || minute > 59) {
        return None;
    }

    Some(ClockTime::new(hour, minute))
}

fn read_interval(start: &str, end: &str, options: &ParserOptions) -> TimeInterval {
    let start = clear_whitespaces(start);
    let end = clear_whitespaces(end);

    match (read_clock(&start, options), read_clock(&end, options)) {
        // identical start and end is the upstream way of saying "around the clock"
        (Some(_), Some(_)) if start == end => TimeInterval::round_the_clock(),
        (Some(from), Some(to)) => TimeInterval::open(from, to),
        _ => {
            tracing::trace!(%start, %end, "unreadable time span");
            TimeInterval::Closed
        }
    }
}

/// Reads `startTimeN`/`endTimeN` for N = 1, 2, .. until `startTimeN` is
/// missing or empty. One interval per slot, unreadable slots become
/// [`TimeInterval::Closed`].
pub fn parse_time_spans(entry: &RawDaySpan, options: &ParserOptions) -> Vec<TimeInterval> {
    (1..)
        .map_while(|n| {
            entry
                .start_time(n)
                .filter(|start| !start.is_empty())
                .map(|start| (start, entry.end_time(n).unwrap_or_default()))
        })
        .map(|(start, end)| read_interval(&start, &end, options))
        .collect()
}
