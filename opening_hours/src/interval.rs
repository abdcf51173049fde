use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use shared_kernel::date_time::time_frame::TimeFrame;

/// Wall-clock time of day. `hour` may be 24 for "until midnight".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClockTime {
    #[serde(rename = "h")]
    pub hour: u8,
    #[serde(rename = "m")]
    pub minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 24,
        minute: 0,
    };

    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeInterval {
    Open(TimeFrame<ClockTime>),
    /// Closed, or a slot whose times could not be read.
    Closed,
}

impl TimeInterval {
    pub fn open(from: ClockTime, to: ClockTime) -> Self {
        TimeInterval::Open(TimeFrame { from, to })
    }

    pub fn round_the_clock() -> Self {
        Self::open(ClockTime::MIDNIGHT, ClockTime::END_OF_DAY)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TimeInterval::Open(_))
    }

    pub fn frame(&self) -> Option<&TimeFrame<ClockTime>> {
        match self {
            TimeInterval::Open(frame) => Some(frame),
            TimeInterval::Closed => None,
        }
    }
}

// Mirrors the shape the rendering layer already consumes:
// {"open": true, "from": {"h": 8, "m": 0}, "to": {...}} or {"open": false}.
impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TimeInterval::Open(frame) => {
                let mut state = serializer.serialize_struct("TimeInterval", 3)?;
                state.serialize_field("open", &true)?;
                state.serialize_field("from", &frame.from)?;
                state.serialize_field("to", &frame.to)?;
                state.end()
            }
            TimeInterval::Closed => {
                let mut state = serializer.serialize_struct("TimeInterval", 1)?;
                state.serialize_field("open", &false)?;
                state.end()
            }
        }
    }
}
