//! Tick time samples and the digital banner text.
//!
//! The host clock is read through `chrono`'s `Timelike`/`Datelike` traits so
//! the same code runs against `NaiveDateTime` on the target and
//! `DateTime<Local>` in the simulator.

use core::fmt::Write;

use chrono::{Datelike, Timelike};
use heapless::String;

use crate::config::BANNER_TEXT_LEN;

/// Digital banner text buffer.
pub type BannerText = String<BANNER_TEXT_LEN>;

// =============================================================================
// Time Sample
// =============================================================================

/// Wall-clock time of one tick, always within `0..24`, `0..60`, `0..60`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeSample {
    /// Build a sample, rejecting out-of-range components.
    pub const fn new(
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self { hour, minute, second })
        } else {
            None
        }
    }

    /// Sample a host clock value. Leap seconds fold into second 59.
    pub fn from_clock(now: &impl Timelike) -> Self {
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second().min(59),
        }
    }

    #[inline]
    pub const fn hour(&self) -> u32 { self.hour }

    #[inline]
    pub const fn minute(&self) -> u32 { self.minute }

    #[inline]
    pub const fn second(&self) -> u32 { self.second }
}

// =============================================================================
// Banner Text
// =============================================================================

/// Host clock style. Chosen by the device settings, not by the face's own
/// configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl ClockStyle {
    /// The other style.
    pub const fn toggled(self) -> Self {
        match self {
            Self::TwentyFourHour => Self::TwelveHour,
            Self::TwelveHour => Self::TwentyFourHour,
        }
    }
}

/// Format the banner: `HH:MM  DD.MM.YYYY` or `HH:MM AM DD/MM/YY`.
pub fn format_banner<T>(
    now: &T,
    style: ClockStyle,
) -> BannerText
where
    T: Datelike + Timelike,
{
    let mut text = BannerText::new();
    match style {
        ClockStyle::TwentyFourHour => {
            write!(
                text,
                "{:02}:{:02}  {:02}.{:02}.{:04}",
                now.hour(),
                now.minute(),
                now.day(),
                now.month(),
                now.year()
            )
            .ok();
        }
        ClockStyle::TwelveHour => {
            let (pm, hour) = now.hour12();
            write!(
                text,
                "{:02}:{:02} {} {:02}/{:02}/{:02}",
                hour,
                now.minute(),
                if pm { "PM" } else { "AM" },
                now.day(),
                now.month(),
                now.year().rem_euclid(100)
            )
            .ok();
        }
    }
    text
}

// =============================================================================
// Tests
// =============================================================================
