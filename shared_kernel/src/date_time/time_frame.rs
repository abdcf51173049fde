use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFrame<T> {
    pub from: T,
    pub to: T,
}

impl<T> TimeFrame<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    pub fn map<U>(&self, transform: impl Fn(&T) -> U) -> TimeFrame<U> {
        TimeFrame {
            from: transform(&self.from),
            to: transform(&self.to),
        }
    }
}
