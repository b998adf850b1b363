//! Time and identifier sources used when formatting events.
//!
//! Both are passed into the formatter instead of being read ambiently, so a
//! test can pin the timestamps and UIDs of a generated document.

use chrono::{DateTime, Utc};

/// Supplies the generation instant stamped on each event.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Supplies a fresh UID per event.
pub trait UidGenerator {
    fn next_uid(&mut self) -> String;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUid;

impl UidGenerator for RandomUid {
    fn next_uid(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use chrono::TimeZone;

    /// Always returns the same instant.
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Self {
            FixedClock(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Returns `uid-1`, `uid-2`, ...
    #[derive(Default)]
    pub struct SequentialUid(pub u32);

    impl UidGenerator for SequentialUid {
        fn next_uid(&mut self) -> String {
            self.0 += 1;
            format!("uid-{}", self.0)
        }
    }
}
