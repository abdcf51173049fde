use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
/// ZonedDateTime stores the time as `DateTime<UTC>` for easier serialization
/// and deserialization, together with the timezone it should be read in.
pub struct ZonedDateTime {
    utc: DateTime<Utc>,
    timezone: Tz,
}

impl ZonedDateTime {
    pub fn now(timezone: Tz) -> Self {
        Self::from_utc(Utc::now(), timezone)
    }

    pub fn from_utc(utc: DateTime<Utc>, timezone: Tz) -> Self {
        Self { utc, timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn to_date_time(&self) -> DateTime<Tz> {
        self.timezone.from_utc_datetime(&self.utc.naive_utc())
    }

    /// The local time as it reads on a clock hanging in `timezone`.
    pub fn wall_clock(&self) -> NaiveDateTime {
        self.to_date_time().naive_local()
    }
}

impl TryFrom<(NaiveDateTime, Tz)> for ZonedDateTime {
    type Error = String;

    fn try_from((value, timezone): (NaiveDateTime, Tz)) -> Result<Self, Self::Error> {
        timezone
            .from_local_datetime(&value)
            .single()
            .ok_or_else(|| format!("Failed to convert {value} to the {timezone} timezone"))
            .map(|date_time| Self::from_utc(date_time.with_timezone(&Utc), timezone))
    }
}
