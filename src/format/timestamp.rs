//! Timestamp presets for the terminal format
//!
//! Each preset renders with a leading and trailing space so that it slots
//! between the logger name and the caller in the terminal header.

use crate::core::LoggerError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// No timestamp, the header gets a single space
    #[default]
    Off,

    /// ` 11-20 `
    Date,

    /// ` 2015-11-20 `
    DateYear,

    /// ` 11-20 01:34:22 `
    Sec,

    /// ` 2015-11-20 01:34:22 `
    SecYear,

    /// ` 11-20 01:34:22.123456 `
    Musec,

    /// ` 2015-11-20 01:34:22.123456 `
    MusecYear,

    /// Custom strftime format, rendered as is
    Custom(String),
}

impl TimeFormat {
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TimeFormat::Off => None,
            TimeFormat::Date => Some(" %m-%d "),
            TimeFormat::DateYear => Some(" %Y-%m-%d "),
            TimeFormat::Sec => Some(" %m-%d %H:%M:%S "),
            TimeFormat::SecYear => Some(" %Y-%m-%d %H:%M:%S "),
            TimeFormat::Musec => Some(" %m-%d %H:%M:%S%.6f "),
            TimeFormat::MusecYear => Some(" %Y-%m-%d %H:%M:%S%.6f "),
            TimeFormat::Custom(pattern) => Some(pattern),
        }
    }

    #[must_use]
    pub fn render(&self, datetime: &DateTime<Utc>) -> String {
        match self.pattern() {
            None => " ".to_string(),
            Some(pattern) => {
                let mut out = String::new();
                // hand-built `Custom` patterns may still be invalid
                match write!(out, "{}", datetime.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => " ".to_string(),
                }
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TimeFormat::Off => "off",
            TimeFormat::Date => "date",
            TimeFormat::DateYear => "date-year",
            TimeFormat::Sec => "sec",
            TimeFormat::SecYear => "sec-year",
            TimeFormat::Musec => "musec",
            TimeFormat::MusecYear => "musec-year",
            TimeFormat::Custom(pattern) => pattern,
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeFormat {
    type Err = LoggerError;

    /// Accepts a preset name, or a strftime pattern containing `%`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "off" => Ok(TimeFormat::Off),
            "date" => Ok(TimeFormat::Date),
            "date-year" => Ok(TimeFormat::DateYear),
            "sec" => Ok(TimeFormat::Sec),
            "sec-year" => Ok(TimeFormat::SecYear),
            "musec" => Ok(TimeFormat::Musec),
            "musec-year" => Ok(TimeFormat::MusecYear),
            custom if custom.contains('%') && is_valid_pattern(custom) => {
                Ok(TimeFormat::Custom(custom.to_string()))
            }
            other => Err(LoggerError::config(
                "TimeFormat",
                format!(
                    "unknown time format '{other}', expected one of off, date, date-year, \
                     sec, sec-year, musec, musec-year or a strftime pattern"
                ),
            )),
        }
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

impl Serialize for TimeFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TimeFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 11, 20, 1, 34, 22).unwrap()
    }

    #[test]
    fn test_presets() {
        assert_eq!(TimeFormat::Off.render(&sample()), " ");
        assert_eq!(TimeFormat::Date.render(&sample()), " 11-20 ");
        assert_eq!(TimeFormat::SecYear.render(&sample()), " 2015-11-20 01:34:22 ");
        assert_eq!(TimeFormat::Musec.render(&sample()), " 11-20 01:34:22.000000 ");
    }

    #[test]
    fn test_parse() {
        assert_eq!("date-year".parse::<TimeFormat>().unwrap(), TimeFormat::DateYear);
        assert_eq!(
            "[%H:%M]".parse::<TimeFormat>().unwrap(),
            TimeFormat::Custom("[%H:%M]".to_string())
        );
        assert!("hourly".parse::<TimeFormat>().is_err());
        assert!("%Q".parse::<TimeFormat>().is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for format in [
            TimeFormat::Off,
            TimeFormat::Date,
            TimeFormat::DateYear,
            TimeFormat::Sec,
            TimeFormat::SecYear,
            TimeFormat::Musec,
            TimeFormat::MusecYear,
        ] {
            assert_eq!(format.name().parse::<TimeFormat>().unwrap(), format);
        }
    }
}
