use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One day-span record as delivered by the directory API, e.g.
/// `{"day": "mån-fre", "startTime1": "08:00", "endTime1": "17:00"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDaySpan {
    #[serde(default, deserialize_with = "day_or_empty")]
    pub day: String,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

/// A `day` that is not a string reads as "", which no lexicon recognises.
fn day_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(day) => Ok(day),
        _ => Ok(String::new()),
    }
}

impl RawDaySpan {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Appends the next `startTimeN`/`endTimeN` pair.
    pub fn with_span(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        let n = self.next_slot();
        self.fields
            .insert(format!("startTime{n}"), Value::String(start.into()));
        self.fields
            .insert(format!("endTime{n}"), Value::String(end.into()));
        self
    }

    /// Sets `startTimeN` alone, leaving `endTimeN` absent.
    pub fn with_start_only(mut self, start: impl Into<String>) -> Self {
        let n = self.next_slot();
        self.fields
            .insert(format!("startTime{n}"), Value::String(start.into()));
        self
    }

    fn next_slot(&self) -> usize {
        (1..)
            .find(|n| !self.fields.contains_key(&format!("startTime{n}")))
            .unwrap_or(1)
    }

    /// `startTimeN`, 1-based. Numbers are read as their decimal text.
    pub fn start_time(&self, n: usize) -> Option<String> {
        self.field(&format!("startTime{n}"))
    }

    pub fn end_time(&self, n: usize) -> Option<String> {
        self.field(&format!("endTime{n}"))
    }

    fn field(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Hours {
    #[serde(default)]
    dayspans: Vec<RawDaySpan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HoursDate {
    #[serde(default)]
    hours: Hours,
}

/// The `opening_hours` product field of a business-details response:
/// `{"date": {"hours": {"dayspans": [...]}}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHoursField {
    #[serde(default)]
    date: HoursDate,
}

impl OpeningHoursField {
    pub fn dayspans(&self) -> &[RawDaySpan] {
        &self.date.hours.dayspans
    }

    pub fn into_dayspans(self) -> Vec<RawDaySpan> {
        self.date.hours.dayspans
    }
}
