//! Drop-frame conversion engine for 29.97 and 59.94 fps.
//!
//! Drop-frame timecode compensates for the difference between the integer
//! time base (30 or 60) and the true rate (29.97 or 59.94) by skipping frame
//! numbers at the start of each minute, except every tenth minute. The two
//! conversion functions here are the inverse pair every other feature builds
//! on:
//!
//! - [`frames_to_parts`] — frame count to displayed `(H, M, S, F)`
//! - [`parts_to_frames`] — displayed `(H, M, S, F)` to frame count
//!
//! Both operate on a [`DropFrameConfig`] of constants derived from the
//! nominal rate.

use crate::framerate::Framerate;
use serde::{Deserialize, Serialize};

/// Derived constants for one drop-frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Frame numbers skipped per dropped minute (2 for 29.97, 4 for 59.94).
    pub drop_frames: i64,
    /// Rounded integer rate used as the frame-field modulus.
    pub time_base: i64,
    /// Frames in a dropped minute: `time_base * 60 - drop_frames`.
    pub frames_per_minute: i64,
    /// Frames in a full ten-minute cycle: `round(nominal * 600)`.
    pub frames_per_10_minutes: i64,
    /// Frames in one hour: `round(nominal * 3600)`.
    pub frames_per_hour: i64,
    /// Frames in the 24-hour display cycle.
    pub frames_per_24_hours: i64,
}

impl DropFrameConfig {
    /// Derive the constants for a framerate, or `None` if the rate is not a
    /// drop-frame rate.
    #[must_use]
    pub fn for_framerate(framerate: Framerate) -> Option<Self> {
        if !framerate.is_drop_frame() {
            return None;
        }
        let nominal = framerate.as_f64();
        let drop_frames = (nominal * 0.066666).round() as i64;
        let time_base = framerate.time_base() as i64;
        let frames_per_hour = (nominal * 3600.0).round() as i64;
        Some(Self {
            drop_frames,
            time_base,
            frames_per_minute: time_base * 60 - drop_frames,
            frames_per_10_minutes: (nominal * 600.0).round() as i64,
            frames_per_hour,
            frames_per_24_hours: frames_per_hour * 24,
        })
    }
}

/// Convert a frame count magnitude to its displayed `(H, M, S, F)` position.
///
/// The count is reduced to the 24-hour display cycle, then the skipped frame
/// numbers are added back so the decomposition by the integer time base lands
/// on the labels drop-frame timecode actually shows.
#[must_use]
pub fn frames_to_parts(frame_count: u64, config: &DropFrameConfig) -> (u64, u32, u32, u32) {
    let mut n = (frame_count % config.frames_per_24_hours as u64) as i64;

    let d = n / config.frames_per_10_minutes;
    let m = n % config.frames_per_10_minutes;

    if m > config.drop_frames {
        n += config.drop_frames * 9 * d
            + config.drop_frames * ((m - config.drop_frames) / config.frames_per_minute);
    } else {
        n += config.drop_frames * 9 * d;
    }

    let tb = config.time_base;
    let frame = n % tb;
    let second = (n / tb) % 60;
    let minute = (n / tb / 60) % 60;
    let hour = n / tb / 60 / 60;
    (hour as u64, minute as u32, second as u32, frame as u32)
}

/// Convert a displayed `(H, M, S, F)` position to its frame count.
///
/// The base non-drop count is reduced by the frame numbers skipped over the
/// minutes spanned. Components may be negative or out of display range; the
/// truncating integer division keeps the formula symmetric around zero, which
/// lets the same function convert signed deltas for timecode arithmetic.
#[must_use]
pub fn parts_to_frames(
    hours: i64,
    minutes: i64,
    seconds: i64,
    frames: i64,
    config: &DropFrameConfig,
) -> i64 {
    let tb = config.time_base;
    let total_minutes = 60 * hours + minutes;
    (tb * 3600 * hours) + (tb * 60 * minutes) + (tb * seconds) + frames
        - config.drop_frames * (total_minutes - total_minutes / 10)
}

/// Whether a `(minute, second, frame)` label is skipped by the drop-frame
/// numbering scheme at the given rate.
///
/// Labels at second 0 of a minute not divisible by 10, with a frame number
/// below the drop count, never appear in drop-frame timecode.
#[must_use]
pub fn is_dropped_frame(minute: u32, second: u32, frame: u32, framerate: Framerate) -> bool {
    match DropFrameConfig::for_framerate(framerate) {
        Some(config) => second == 0 && minute % 10 != 0 && (frame as i64) < config.drop_frames,
        None => false,
    }
}
