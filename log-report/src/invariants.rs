use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use derive_more::{AsRef, Debug, Display};

#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self(s.chars().take(100).collect())
    }
}

/// A UTC instant truncated to minute precision.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Copy)]
#[display("{}", _0.format("%Y-%m-%dT%H:%M"))]
pub struct Minute(DateTime<Utc>);

impl Minute {
    pub fn into_utc(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Minute {
    fn from(value: DateTime<Utc>) -> Self {
        Self(
            Utc.with_ymd_and_hms(
                value.year(),
                value.month(),
                value.day(),
                value.hour(),
                value.minute(),
                0,
            )
            .unwrap(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn endpoint_caps_length() {
        let long = "x".repeat(500);
        let endpoint = Endpoint::from(long.as_str());
        assert_that!(endpoint.as_str().len()).is_equal_to(100);
    }

    #[test]
    fn minute_truncates_seconds() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 22, 59).unwrap();
        let minute = Minute::from(ts);
        assert_eq!(
            minute.into_utc(),
            Utc.with_ymd_and_hms(2024, 3, 1, 14, 22, 0).unwrap()
        );
    }

    #[test]
    fn minute_displays_iso_prefix() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 22, 0).unwrap();
        assert_eq!(Minute::from(ts).to_string(), "2024-03-01T14:22");
    }
}
