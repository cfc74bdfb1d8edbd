//! SMPTE Timecode Library
//!
//! This crate provides SMPTE 12M timecode support including:
//!
//! - **SMPTE Timecode**: Standard `HH:MM:SS:FF` format across the common
//!   production framerates
//! - **Drop-Frame Timecode**: Accurate wall-clock display for 29.97/59.94 fps
//!   (`HH:MM:SS;FF`)
//! - **Signed timeline**: positions before the origin are legal values,
//!   shown with a leading `-`
//! - **Subtitle Timecode**: translation to and from the SubRip
//!   `HH:MM:SS,mmm` millisecond grammar
//!
//! # Quick Start
//!
//! ```rust
//! use timecode::{Framerate, Timecode};
//!
//! // Create a timecode
//! let tc = Timecode::new(10, 0, 0, 0, Framerate::Fps25).unwrap();
//! assert_eq!(tc.to_string(), "10:00:00:00");
//! assert_eq!(tc.total_frames(), 900_000);
//!
//! // Parse from string, then move along the timeline
//! let tc = Timecode::parse("10:00:00:00", Framerate::Fps25).unwrap();
//! assert_eq!(tc.add_frames(50).to_string(), "10:00:02:00");
//! assert_eq!(tc.add_frames(-50).to_string(), "09:59:58:00");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! For 29.97 and 59.94 fps content, drop-frame timecode skips frame numbers
//! so the displayed position tracks wall-clock time. The drop-frame rates are
//! distinct [`Framerate`] variants and format with a semicolon before the
//! frame field:
//!
//! ```rust
//! use timecode::{Framerate, Timecode};
//!
//! let tc = Timecode::from_total_frames(1_078_920, Framerate::Fps29_97Df);
//! assert_eq!(tc.to_string(), "10:00:00;00");
//!
//! // 00:01:00;00 and 00:01:00;01 do not exist at 29.97 DF
//! let next_minute = Timecode::from_total_frames(1800, Framerate::Fps29_97Df);
//! assert_eq!(next_minute.to_string(), "00:01:00;02");
//! ```
//!
//! # Framerate Discipline
//!
//! Arithmetic and ordering between timecodes are only defined at a shared
//! framerate; mixing rates is an error, never a silent guess:
//!
//! ```rust
//! use timecode::{Framerate, Timecode, TimecodeError};
//!
//! let pal = Timecode::zero(Framerate::Fps25);
//! let film = Timecode::zero(Framerate::Fps24);
//! assert!(matches!(
//!     pal.compare(&film),
//!     Err(TimecodeError::FramerateMismatch { .. })
//! ));
//! ```
//!
//! # String Surface
//!
//! The [`convert`] module offers the same operations as plain
//! string-in/string-out functions:
//!
//! ```rust
//! use timecode::{convert, Framerate};
//!
//! let shifted = convert::add_frames("10:00:00:00", Framerate::Fps25, 50).unwrap();
//! assert_eq!(shifted, "10:00:02:00");
//!
//! let subtitle = convert::timecode_to_subtitle("10:00:00:12", Framerate::Fps24).unwrap();
//! assert_eq!(subtitle, "10:00:00,500");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod convert;
pub mod dropframe;
pub mod error;
pub mod framerate;
pub mod smpte;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use framerate::{FrameSeparator, Framerate};
pub use smpte::Timecode;

// Re-export drop-frame utilities
pub use dropframe::{is_dropped_frame, DropFrameConfig};

/// Maximum minutes value in a timecode position (59).
pub const MAX_MINUTES: u32 = 59;

/// Maximum seconds value in a timecode position (59).
pub const MAX_SECONDS: u32 = 59;

/// Create a timecode from hour, minute, second, and frame positions.
///
/// This is a convenience shorthand for [`Timecode::new`].
///
/// # Example
/// ```rust
/// use timecode::{timecode, Framerate};
///
/// let tc = timecode(1, 30, 45, 12, Framerate::Fps24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(
    hour: u32,
    minute: u32,
    second: u32,
    frame: u32,
    framerate: Framerate,
) -> Result<Timecode> {
    Timecode::new(hour, minute, second, frame, framerate)
}

/// Signed frame distance between two timecodes on the same framerate.
///
/// Negative when `end` is before `start`. Fails with a `FramerateMismatch`
/// error when the framerates differ.
///
/// # Example
/// ```rust
/// use timecode::{duration_frames, timecode, Framerate};
///
/// let start = timecode(0, 0, 0, 0, Framerate::Fps24).unwrap();
/// let end = timecode(0, 0, 1, 0, Framerate::Fps24).unwrap();
/// assert_eq!(duration_frames(&start, &end).unwrap(), 24);
/// ```
pub fn duration_frames(start: &Timecode, end: &Timecode) -> Result<i64> {
    Ok(end.checked_sub(start)?.total_frames())
}
