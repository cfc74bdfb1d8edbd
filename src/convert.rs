//! String-in/string-out convenience surface.
//!
//! Free functions that adjust, reformat, and translate timecode strings
//! without the caller touching the value type: pass a string and a
//! framerate, get a string back or an error. Each function validates its
//! input grammar before any computation and never produces partial output.
//!
//! Includes the translation between the SMPTE grammar `HH:MM:SS:FF` and the
//! SubRip subtitle grammar `HH:MM:SS,mmm`, which rounds between frame
//! positions and milliseconds at the nominal rate.

use crate::error::{Result, TimecodeError};
use crate::framerate::Framerate;
use crate::smpte::{parts_to_frames, Timecode};
use crate::{MAX_MINUTES, MAX_SECONDS};
use regex::Regex;

/// Regular expression for the SubRip subtitle grammar `HH:MM:SS,mmm`.
pub const SUBTITLE_PATTERN: &str = r"^([0-9]{2}:){2}[0-9]{2},[0-9]{3}$";

/// Add signed hours to a SMPTE timecode string.
pub fn add_hours(timecode: &str, framerate: Framerate, delta: i64) -> Result<String> {
    let tc = Timecode::parse(timecode, framerate)?;
    Ok(tc.add_hours(delta).to_string())
}

/// Add signed minutes to a SMPTE timecode string.
pub fn add_minutes(timecode: &str, framerate: Framerate, delta: i64) -> Result<String> {
    let tc = Timecode::parse(timecode, framerate)?;
    Ok(tc.add_minutes(delta).to_string())
}

/// Add signed seconds to a SMPTE timecode string.
pub fn add_seconds(timecode: &str, framerate: Framerate, delta: i64) -> Result<String> {
    let tc = Timecode::parse(timecode, framerate)?;
    Ok(tc.add_seconds(delta).to_string())
}

/// Add signed frames to a SMPTE timecode string.
pub fn add_frames(timecode: &str, framerate: Framerate, delta: i64) -> Result<String> {
    let tc = Timecode::parse(timecode, framerate)?;
    Ok(tc.add_frames(delta).to_string())
}

/// Reinterpret a SMPTE timecode string at a different framerate.
///
/// The total frame count is preserved; the displayed position changes with
/// the target rate's time base and delimiter.
pub fn convert_framerate(timecode: &str, from: Framerate, to: Framerate) -> Result<String> {
    let tc = Timecode::parse(timecode, from)?;
    Ok(tc.convert_framerate(to).to_string())
}

/// Translate a SMPTE timecode string to the subtitle grammar.
///
/// The frame position becomes milliseconds rounded at the nominal rate:
/// `10:00:00:12` at 24 fps becomes `10:00:00,500`.
pub fn timecode_to_subtitle(timecode: &str, framerate: Framerate) -> Result<String> {
    let tc = Timecode::parse(timecode, framerate)?;
    Ok(tc.to_subtitle_string())
}

/// Translate a subtitle timecode string to the SMPTE grammar.
///
/// The millisecond field becomes the nearest frame at the nominal rate; a
/// millisecond value that rounds up to the time base carries into the next
/// second. The output uses the delimiter the framerate implies.
pub fn subtitle_to_timecode(subtitle: &str, framerate: Framerate) -> Result<String> {
    let pattern = Regex::new(SUBTITLE_PATTERN).unwrap();
    if !pattern.is_match(subtitle) {
        return Err(TimecodeError::invalid_format(format!(
            "expected HH:MM:SS,mmm, got {:?}",
            subtitle
        )));
    }

    let parts: Vec<&str> = subtitle.split([':', ',']).collect();
    let field = |index: usize, name: &str| -> Result<i64> {
        parts[index]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(format!("invalid {}: {}", name, parts[index])))
    };

    let hours = field(0, "hours")?;
    let minutes = field(1, "minutes")?;
    let seconds = field(2, "seconds")?;
    let millis = field(3, "milliseconds")?;

    if minutes > MAX_MINUTES as i64 {
        return Err(TimecodeError::invalid_component(
            "minutes",
            minutes as u32,
            MAX_MINUTES,
        ));
    }
    if seconds > MAX_SECONDS as i64 {
        return Err(TimecodeError::invalid_component(
            "seconds",
            seconds as u32,
            MAX_SECONDS,
        ));
    }

    let frame = (millis as f64 * framerate.as_f64() / 1000.0).round() as i64;
    let total = parts_to_frames(hours, minutes, seconds, frame, framerate);
    Ok(Timecode::from_total_frames(total, framerate).to_string())
}
