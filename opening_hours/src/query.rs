use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use shared_kernel::date_time::time_frame::TimeFrame;

use crate::interval::{ClockTime, TimeInterval};
use crate::market::Market;
use crate::schedule::WeeklySchedule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintableTime {
    pub h: String,
    pub m: String,
}

impl PrintableTime {
    pub fn of(time: &ClockTime) -> Self {
        Self {
            h: format!("{:02}", time.hour),
            m: format!("{:02}", time.minute),
        }
    }
}

impl From<&ClockTime> for PrintableTime {
    fn from(value: &ClockTime) -> Self {
        Self::of(value)
    }
}

impl fmt::Display for PrintableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.h, self.m)
    }
}

pub fn to_printable(frame: &TimeFrame<ClockTime>) -> TimeFrame<PrintableTime> {
    frame.map(PrintableTime::of)
}

fn first_open_frame(intervals: &[TimeInterval]) -> Option<&TimeFrame<ClockTime>> {
    intervals.first().and_then(TimeInterval::frame)
}

/// Only the first interval of a day is looked at, so a second opening after
/// a lunch break does not count. An interval from yesterday that closes
/// earlier than it opened, counted in minutes, is taken to run past midnight
/// into today.
pub fn is_open_now(schedule: &WeeklySchedule, now: NaiveDateTime) -> bool {
    let today = now.weekday().num_days_from_monday() as usize;
    let yesterday = if today == 0 { 6 } else { today - 1 };
    let current = now.hour() * 60 + now.minute();

    let today_frame = schedule.day(today).and_then(first_open_frame);
    if let Some(frame) = today_frame {
        let open = frame.from.minutes_since_midnight();
        let close = frame.to.minutes_since_midnight();
        if open <= current && current <= close {
            return true;
        }
    }

    match schedule.day(yesterday).and_then(first_open_frame) {
        Some(frame) => {
            let open = frame.from.minutes_since_midnight();
            let close = frame.to.minutes_since_midnight();
            close < open && current <= close
        }
        None => false,
    }
}

impl WeeklySchedule {
    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        is_open_now(self, now)
    }

    pub fn is_open_in(&self, market: Market) -> bool {
        is_open_now(self, market.now())
    }
}

impl TimeInterval {
    pub fn to_printable(&self) -> Option<TimeFrame<PrintableTime>> {
        self.frame().map(to_printable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::{open, schedule_of};
    use rstest::rstest;

    macro_rules! datetime {
        ( $date: expr ) => {{
            NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
        }};
    }

    fn closed() -> Vec<TimeInterval> {
        vec![TimeInterval::Closed]
    }

    // 2023-01-16 is a Monday
    fn office_hours() -> WeeklySchedule {
        schedule_of([
            vec![open((8, 0), (17, 0))],
            vec![open((8, 0), (17, 0))],
            vec![open((8, 0), (12, 0)), open((13, 0), (17, 0))],
            closed(),
            vec![open((22, 0), (2, 0))],
            vec![TimeInterval::round_the_clock()],
            vec![],
        ])
    }

    #[rstest]
    #[case("2023-01-16 08:00", true)]
    #[case("2023-01-16 17:00", true)]
    #[case("2023-01-16 17:01", false)]
    #[case("2023-01-16 07:59", false)]
    #[case("2023-01-18 11:00", true)]
    #[case("2023-01-18 14:00", false)]
    #[case("2023-01-19 10:00", false)]
    // the evening half of an overnight interval is not matched on its own day
    #[case("2023-01-20 23:00", false)]
    #[case("2023-01-20 12:00", false)]
    #[case("2023-01-21 01:30", true)]
    #[case("2023-01-21 14:00", true)]
    #[case("2023-01-21 23:59", true)]
    #[case("2023-01-22 10:00", false)]
    fn test_is_open_now(#[case] now: &str, #[case] expected: bool) {
        assert_eq!(is_open_now(&office_hours(), datetime!(now)), expected);
    }

    #[test]
    fn test_overnight_interval_reaches_into_next_day_even_when_it_is_closed() {
        let schedule = schedule_of([
            closed(),
            closed(),
            closed(),
            closed(),
            closed(),
            closed(),
            vec![open((20, 0), (3, 30))],
        ]);

        // Monday after a Sunday night shift
        assert!(schedule.is_open_at(datetime!("2023-01-16 03:30")));
        assert!(!schedule.is_open_at(datetime!("2023-01-16 03:31")));
        // Sunday itself, before and during the evening half
        assert!(!schedule.is_open_at(datetime!("2023-01-22 19:59")));
        assert!(!schedule.is_open_at(datetime!("2023-01-22 20:00")));
    }

    #[test]
    fn test_same_day_interval_does_not_leak_into_next_day() {
        let schedule = office_hours();
        // Tuesday 08:00-17:00 must not make Wednesday 03:00 open
        assert!(!schedule.is_open_at(datetime!("2023-01-18 03:00")));
    }

    #[rstest]
    // 08:60 is 540 minutes, the same as 09:00
    #[case((9, 0), (8, 60), "2023-01-17 03:00", false)]
    #[case((9, 0), (8, 59), "2023-01-17 03:00", true)]
    #[case((23, 0), (1, 0), "2023-01-17 01:00", true)]
    #[case((23, 0), (1, 0), "2023-01-17 01:01", false)]
    fn test_overnight_is_decided_in_minutes(
        #[case] from: (u8, u8),
        #[case] to: (u8, u8),
        #[case] now: &str,
        #[case] expected: bool,
    ) {
        let schedule = schedule_of([
            vec![open(from, to)],
            closed(),
            closed(),
            closed(),
            closed(),
            closed(),
            closed(),
        ]);

        assert_eq!(schedule.is_open_at(datetime!(now)), expected);
    }

    #[test]
    fn test_printable_from_matches_of() {
        let time = ClockTime::new(6, 5);
        assert_eq!(PrintableTime::from(&time), PrintableTime::of(&time));
    }

    #[rstest]
    #[case((8, 5), (17, 0), ("08", "05"), ("17", "00"))]
    #[case((0, 0), (24, 0), ("00", "00"), ("24", "00"))]
    #[case((10, 30), (9, 9), ("10", "30"), ("09", "09"))]
    #[case((8, 60), (17, 0), ("08", "60"), ("17", "00"))]
    fn test_to_printable(
        #[case] from: (u8, u8),
        #[case] to: (u8, u8),
        #[case] printed_from: (&str, &str),
        #[case] printed_to: (&str, &str),
    ) {
        let interval = open(from, to);
        let printable = interval.to_printable().unwrap();

        assert_eq!(printable.from.h, printed_from.0);
        assert_eq!(printable.from.m, printed_from.1);
        assert_eq!(printable.to.h, printed_to.0);
        assert_eq!(printable.to.m, printed_to.1);
        for part in [&printable.from.h, &printable.from.m, &printable.to.h, &printable.to.m] {
            assert_eq!(part.len(), 2);
        }
    }

    #[test]
    fn test_to_printable_leaves_input_untouched() {
        let frame = TimeFrame::new(ClockTime::new(7, 0), ClockTime::new(9, 45));
        let printable = to_printable(&frame);

        assert_eq!(printable.from.to_string(), "07:00");
        assert_eq!(printable.to.to_string(), "09:45");
        assert_eq!(frame.from, ClockTime::new(7, 0));
    }

    #[test]
    fn test_closed_interval_has_nothing_to_print() {
        assert_eq!(TimeInterval::Closed.to_printable(), None);
    }
}
