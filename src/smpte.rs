//! SMPTE 12M timecode value type.
//!
//! A [`Timecode`] is a point on a signed frame timeline at a fixed framerate.
//! The canonical state is a signed total frame count; the displayed
//! `HH:MM:SS:FF` position is derived from its magnitude, with the sign
//! carried separately and shown only as a leading `-`. All operations return
//! new values; arithmetic between two timecodes is defined only when their
//! framerates agree.

use crate::dropframe::{self, DropFrameConfig};
use crate::error::{Result, TimecodeError};
use crate::framerate::{FrameSeparator, Framerate};
use crate::{MAX_MINUTES, MAX_SECONDS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// Regular expression for the SMPTE grammar `[-]HH:MM:SS[:;]FF`.
///
/// The semicolon and colon are equivalent before the frame field; the
/// delimiter carries no meaning on input, only on output.
pub const SMPTE_PATTERN: &str = r"^(-)?([0-9]{2}:){2}[0-9]{2}[:;][0-9]{2}$";

/// A SMPTE timecode position at a fixed framerate.
///
/// Equality is structural: two timecodes are equal when both the total frame
/// count and the framerate are equal. Ordering across framerates is
/// undefined, so `PartialOrd` is deliberately not implemented; use
/// [`Timecode::compare`], which fails on a framerate mismatch instead of
/// guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timecode {
    total_frames: i64,
    framerate: Framerate,
}

impl Timecode {
    /// Create a timecode at position `00:00:00:00`.
    #[must_use]
    pub fn zero(framerate: Framerate) -> Self {
        Self {
            total_frames: 0,
            framerate,
        }
    }

    /// Create a timecode from hour, minute, second, and frame positions.
    ///
    /// Fails with an `InvalidComponent` error when minutes or seconds exceed
    /// 59 or the frame field reaches the time base, and with a `DroppedFrame`
    /// error when the position names a label the drop-frame scheme skips.
    pub fn new(
        hour: u32,
        minute: u32,
        second: u32,
        frame: u32,
        framerate: Framerate,
    ) -> Result<Self> {
        if minute > MAX_MINUTES {
            return Err(TimecodeError::invalid_component("minutes", minute, MAX_MINUTES));
        }
        if second > MAX_SECONDS {
            return Err(TimecodeError::invalid_component("seconds", second, MAX_SECONDS));
        }
        let time_base = framerate.time_base();
        if frame >= time_base {
            return Err(TimecodeError::invalid_component("frames", frame, time_base - 1));
        }
        if dropframe::is_dropped_frame(minute, second, frame, framerate) {
            return Err(TimecodeError::dropped_frame(format!(
                "{:02}:{:02}:{:02};{:02} is skipped at {}",
                hour, minute, second, frame, framerate
            )));
        }
        Ok(Self {
            total_frames: parts_to_frames(
                hour as i64,
                minute as i64,
                second as i64,
                frame as i64,
                framerate,
            ),
            framerate,
        })
    }

    /// Create a timecode from a signed total frame count.
    ///
    /// Zero represents `00:00:00:00`; negative counts are positions before
    /// the timeline origin.
    #[must_use]
    pub fn from_total_frames(total_frames: i64, framerate: Framerate) -> Self {
        Self {
            total_frames,
            framerate,
        }
    }

    /// Parse a timecode string in the SMPTE grammar at the given framerate.
    ///
    /// Accepts `[-]HH:MM:SS:FF` and `[-]HH:MM:SS;FF`; a leading `-` places
    /// the position before the timeline origin. Anything else fails with an
    /// `InvalidFormat` error before any computation.
    pub fn parse(timecode: &str, framerate: Framerate) -> Result<Self> {
        let pattern = Regex::new(SMPTE_PATTERN).unwrap();
        if !pattern.is_match(timecode) {
            return Err(TimecodeError::invalid_format(format!(
                "expected [-]HH:MM:SS:FF or [-]HH:MM:SS;FF, got {:?}",
                timecode
            )));
        }

        let (negative, digits) = match timecode.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, timecode),
        };

        let parts: Vec<&str> = digits.split([':', ';']).collect();
        let field = |index: usize, name: &str| -> Result<u32> {
            parts[index]
                .parse()
                .map_err(|_| TimecodeError::invalid_format(format!("invalid {}: {}", name, parts[index])))
        };

        let tc = Self::new(
            field(0, "hours")?,
            field(1, "minutes")?,
            field(2, "seconds")?,
            field(3, "frames")?,
            framerate,
        )?;
        if negative {
            Ok(Self::from_total_frames(-tc.total_frames, framerate))
        } else {
            Ok(tc)
        }
    }

    /// The signed total frame count, the canonical representation.
    #[must_use]
    pub fn total_frames(&self) -> i64 {
        self.total_frames
    }

    /// The framerate this timecode is positioned at.
    #[must_use]
    pub fn framerate(&self) -> Framerate {
        self.framerate
    }

    /// Whether the position lies before the timeline origin.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.total_frames < 0
    }

    /// The displayed hour, minute, second, and frame magnitudes.
    #[must_use]
    pub fn parts(&self) -> (u64, u32, u32, u32) {
        frames_to_parts(self.total_frames.unsigned_abs(), self.framerate)
    }

    /// The hour position magnitude.
    #[must_use]
    pub fn hour(&self) -> u64 {
        self.parts().0
    }

    /// The minute position (0-59).
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.parts().1
    }

    /// The second position (0-59).
    #[must_use]
    pub fn second(&self) -> u32 {
        self.parts().2
    }

    /// The frame position (0 to time base - 1).
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.parts().3
    }

    /// The frame position expressed as milliseconds into its second,
    /// rounded to the nominal rate.
    #[must_use]
    pub fn millisecond(&self) -> u32 {
        (self.frame() as f64 / self.framerate.as_f64() * 1000.0).round() as u32
    }

    /// The elapsed time in seconds at the nominal rate. Negative for
    /// positions before the origin.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        self.total_frames as f64 / self.framerate.as_f64()
    }

    /// Add a signed number of frames. Negative totals are legal positions,
    /// not errors.
    #[must_use]
    pub fn add_frames(&self, delta: i64) -> Self {
        Self::from_total_frames(self.total_frames + delta, self.framerate)
    }

    /// Add a signed number of seconds, converted to frames at this
    /// framerate.
    #[must_use]
    pub fn add_seconds(&self, delta: i64) -> Self {
        self.add_frames(delta_frames(0, delta / 60, delta % 60, self.framerate))
    }

    /// Add a signed number of minutes, converted to frames at this
    /// framerate.
    #[must_use]
    pub fn add_minutes(&self, delta: i64) -> Self {
        self.add_frames(delta_frames(0, delta, 0, self.framerate))
    }

    /// Add a signed number of hours, converted to frames at this framerate.
    #[must_use]
    pub fn add_hours(&self, delta: i64) -> Self {
        self.add_frames(delta_frames(delta, 0, 0, self.framerate))
    }

    /// Reinterpret the same total frame count at a different framerate.
    ///
    /// This preserves the frame count, not the elapsed duration: ten hours at
    /// 24 fps becomes 09:36:00:00 at 25 fps because the same 864000 frames
    /// play out faster.
    #[must_use]
    pub fn convert_framerate(&self, target: Framerate) -> Self {
        Self::from_total_frames(self.total_frames, target)
    }

    /// Add another timecode's frame count to this one.
    ///
    /// Fails with a `FramerateMismatch` error when the framerates differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.require_same_framerate(other)?;
        Ok(Self::from_total_frames(
            self.total_frames + other.total_frames,
            self.framerate,
        ))
    }

    /// Subtract another timecode's frame count from this one.
    ///
    /// Fails with a `FramerateMismatch` error when the framerates differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.require_same_framerate(other)?;
        Ok(Self::from_total_frames(
            self.total_frames - other.total_frames,
            self.framerate,
        ))
    }

    /// Order two timecodes on the same framerate by total frame count.
    ///
    /// Fails with a `FramerateMismatch` error when the framerates differ;
    /// positions at different rates have no defined order.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        self.require_same_framerate(other)?;
        Ok(self.total_frames.cmp(&other.total_frames))
    }

    /// Format with an explicit frame-field delimiter instead of the one the
    /// framerate implies.
    #[must_use]
    pub fn to_string_with(&self, separator: FrameSeparator) -> String {
        self.format_with(separator.as_char())
    }

    /// Format as a subtitle timecode, `[-]HH:MM:SS,mmm`, with the frame
    /// position rendered as milliseconds.
    #[must_use]
    pub fn to_subtitle_string(&self) -> String {
        let (hour, minute, second, _) = self.parts();
        format!(
            "{}{:02}:{:02}:{:02},{:03}",
            if self.is_negative() { "-" } else { "" },
            hour,
            minute,
            second,
            self.millisecond()
        )
    }

    fn format_with(&self, separator: char) -> String {
        let (hour, minute, second, frame) = self.parts();
        format!(
            "{}{:02}:{:02}:{:02}{}{:02}",
            if self.is_negative() { "-" } else { "" },
            hour,
            minute,
            second,
            separator,
            frame
        )
    }

    fn require_same_framerate(&self, other: &Self) -> Result<()> {
        if self.framerate != other.framerate {
            return Err(TimecodeError::framerate_mismatch(
                self.framerate.to_string(),
                other.framerate.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(self.framerate.separator()))
    }
}

impl Add for Timecode {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Result<Self> {
        self.checked_add(&other)
    }
}

impl Sub for Timecode {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Result<Self> {
        self.checked_sub(&other)
    }
}

/// Decompose a frame count magnitude into `(H, M, S, F)` at a framerate.
fn frames_to_parts(magnitude: u64, framerate: Framerate) -> (u64, u32, u32, u32) {
    match DropFrameConfig::for_framerate(framerate) {
        Some(config) => dropframe::frames_to_parts(magnitude, &config),
        None => {
            let tb = framerate.time_base() as u64;
            let total_seconds = magnitude / tb;
            (
                total_seconds / 3600,
                ((total_seconds / 60) % 60) as u32,
                (total_seconds % 60) as u32,
                (magnitude % tb) as u32,
            )
        }
    }
}

/// Compose a signed frame count from `(H, M, S, F)` components at a
/// framerate. Components outside display range are legal; the drop-frame
/// compensation spans whatever minutes the components cover.
pub(crate) fn parts_to_frames(
    hours: i64,
    minutes: i64,
    seconds: i64,
    frames: i64,
    framerate: Framerate,
) -> i64 {
    match DropFrameConfig::for_framerate(framerate) {
        Some(config) => dropframe::parts_to_frames(hours, minutes, seconds, frames, &config),
        None => {
            let tb = framerate.time_base() as i64;
            (tb * 3600 * hours) + (tb * 60 * minutes) + (tb * seconds) + frames
        }
    }
}

/// Convert a signed hour/minute/second delta to an equivalent frame delta.
fn delta_frames(hours: i64, minutes: i64, seconds: i64, framerate: Framerate) -> i64 {
    parts_to_frames(hours, minutes, seconds, 0, framerate)
}
