// Validated time-of-day value.
//
// Purpose
// - Hold an `(hour, minute)` pair that is guaranteed in range.
//
// Responsibilities
// - Parse `HH:MM` text into a value, rejecting anything that does not split
//   into two in-range integers around a single colon.
// - Map the 24-hour value onto the 12-hour display clock.
// - Never perform input or output.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid time format: {input:?}")]
pub struct InvalidFormat {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidFormat> {
        if hour > 23 || minute > 59 {
            return Err(InvalidFormat {
                input: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    pub fn is_noon(&self) -> bool {
        self.hour == 12 && self.minute == 0
    }

    /// Hour on the 12-hour clock, always in 1..=12.
    pub fn display_hour(&self) -> u8 {
        match self.hour {
            0 => 12,
            1..=12 => self.hour,
            _ => self.hour - 12,
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidFormat;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidFormat {
            input: text.to_string(),
        };
        let (hour_text, minute_text) = text.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour_text.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_text.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}
