//! Reads the loosely structured opening hours of the directory API into a
//! normalized Monday..Sunday schedule, and answers "is it open now?" against it.

pub mod config;
pub mod day_token;
pub mod display;
pub mod interval;
pub mod lexicon;
pub mod market;
pub mod query;
pub mod raw;
pub mod schedule;
pub mod time_span;

pub use interval::{ClockTime, TimeInterval};
pub use market::Market;
pub use query::{is_open_now, to_printable, PrintableTime};
pub use raw::{OpeningHoursField, RawDaySpan};
pub use schedule::{parse, parse_with_code, ParserOptions, ScheduleError, ScheduleParser, WeeklySchedule};
