//! Timecode integration tests.
//!
//! End-to-end scenarios across construction, arithmetic, framerate
//! conversion, and the string surface.

use std::cmp::Ordering;

use timecode::{convert, duration_frames, Framerate, Timecode, TimecodeError};

/// Construct at the origin from a framerate alone.
#[test]
fn construct_using_only_framerate() {
    let tc = Timecode::zero(Framerate::Fps24);
    assert_eq!(tc.to_string(), "00:00:00:00");
}

/// Construct from a total frame count at 25 fps.
#[test]
fn construct_using_total_frames_25fps() {
    let ten_hours_as_total_frames = 900_000;
    let tc = Timecode::from_total_frames(ten_hours_as_total_frames, Framerate::Fps25);
    assert_eq!(tc.to_string(), "10:00:00:00");
}

/// Construct from a total frame count at 29.97 fps drop-frame.
#[test]
fn construct_using_total_frames_drop_frame_29_97fps() {
    let ten_hours_as_total_frames = 1_078_920;
    let tc = Timecode::from_total_frames(ten_hours_as_total_frames, Framerate::Fps29_97Df);
    assert_eq!(tc.to_string(), "10:00:00;00");
}

/// Construct from a total frame count at 59.94 fps drop-frame.
#[test]
fn construct_using_total_frames_drop_frame_59_94fps() {
    let ten_hours_as_total_frames = 2_157_840;
    let tc = Timecode::from_total_frames(ten_hours_as_total_frames, Framerate::Fps59_94Df);
    assert_eq!(tc.to_string(), "10:00:00;00");
}

/// Construct from positions at 23.976 fps.
#[test]
fn construct_using_positions_23_976fps() {
    let tc = Timecode::new(10, 0, 0, 0, Framerate::Fps23_976).unwrap();
    assert_eq!(tc.total_frames(), 864_000);
}

/// Construct from positions at 50 fps.
#[test]
fn construct_using_positions_50fps() {
    let tc = Timecode::new(10, 0, 0, 0, Framerate::Fps50).unwrap();
    assert_eq!(tc.total_frames(), 1_800_000);
}

/// Construct from positions at 59.94 fps drop-frame.
#[test]
fn construct_using_positions_drop_frame_59_94fps() {
    let tc = Timecode::new(10, 0, 0, 0, Framerate::Fps59_94Df).unwrap();
    assert_eq!(tc.total_frames(), 2_157_840);
}

/// Construct from a SMPTE string.
#[test]
fn construct_using_string_input() {
    let tc = Timecode::parse("10:00:00:00", Framerate::Fps24).unwrap();
    assert_eq!(tc.total_frames(), 864_000);
}

/// A malformed string fails with a format error.
#[test]
fn construct_using_incorrect_format_input() {
    let result = Timecode::parse("10:a0:00:00", Framerate::Fps24);
    assert!(matches!(result, Err(TimecodeError::InvalidFormat { .. })));
}

/// Adding frames recalculates the displayed position.
#[test]
fn add_frames_and_recalculate_timecode() {
    let tc = Timecode::parse("10:00:00:00", Framerate::Fps25).unwrap();
    assert_eq!(tc.add_frames(50).to_string(), "10:00:02:00");
}

/// Removing frames recalculates the displayed position.
#[test]
fn remove_frames_and_recalculate_timecode() {
    let tc = Timecode::parse("10:00:00:00", Framerate::Fps25).unwrap();
    assert_eq!(tc.add_frames(-50).to_string(), "09:59:58:00");
}

/// Framerate conversion preserves the frame count, not the duration.
#[test]
fn convert_framerate_24fps_to_25fps() {
    let tc = Timecode::parse("10:00:00:00", Framerate::Fps24).unwrap();
    assert_eq!(
        tc.convert_framerate(Framerate::Fps25).to_string(),
        "09:36:00:00"
    );
}

/// Framerate conversion between fractional rates follows the time bases.
#[test]
fn convert_framerate_23_976fps_to_59_94fps() {
    let tc = Timecode::parse("10:00:00:00", Framerate::Fps23_976).unwrap();
    assert_eq!(
        tc.convert_framerate(Framerate::Fps59_94Ndf).to_string(),
        "04:00:00:00"
    );
}

/// The frame/position mapping is a bijection over a full drop-frame day.
#[test]
fn drop_frame_bijection_over_display_cycle() {
    for rate in [Framerate::Fps29_97Df, Framerate::Fps59_94Df] {
        let day = 24 * (rate.as_f64() * 3600.0).round() as i64;
        let mut n = 0;
        while n < day {
            let tc = Timecode::from_total_frames(n, rate);
            let (h, m, s, f) = tc.parts();
            let back = Timecode::new(h as u32, m, s, f, rate).unwrap();
            assert_eq!(back.total_frames(), n, "bijection failed at {} {}", n, rate);
            n += 1499;
        }
    }
}

/// Moving back and forth by the same frame count is the identity.
#[test]
fn add_frames_inverse() {
    let tc = Timecode::parse("01:23:45:10", Framerate::Fps29_97Df).unwrap();
    for k in [1, 29, 1798, 17_982, 107_892, -1, -1_000_000] {
        assert_eq!(tc.add_frames(k).add_frames(-k), tc, "k = {}", k);
    }
}

/// A negative position walks back to the origin through mixed units.
#[test]
fn negative_timeline_returns_to_origin() {
    let tc = Timecode::parse("-10:00:00:00", Framerate::Fps25).unwrap();
    let back = tc.add_hours(8).add_minutes(60).add_seconds(3600);
    assert_eq!(back.total_frames(), 0);
}

/// Subtracting below the origin yields a negative position, not an error.
#[test]
fn subtract_past_origin_drop_frame() {
    assert_eq!(
        convert::add_hours("10:00:00:00", Framerate::Fps29_97Df, -11).unwrap(),
        "-01:00:00;00"
    );
}

/// Mixed-framerate operations always fail, never guess.
#[test]
fn mismatched_framerates_always_fail() {
    let left = Timecode::parse("01:00:00:00", Framerate::Fps24).unwrap();
    let right = Timecode::parse("01:00:00:00", Framerate::Fps25).unwrap();

    assert!(left.compare(&right).is_err());
    assert!(left.checked_add(&right).is_err());
    assert!(left.checked_sub(&right).is_err());
    assert!(duration_frames(&left, &right).is_err());
}

/// Ordering on a shared framerate follows the total frame count.
#[test]
fn compare_on_shared_framerate() {
    let early = Timecode::parse("09:59:59:23", Framerate::Fps24).unwrap();
    let late = Timecode::parse("10:00:00:00", Framerate::Fps24).unwrap();
    assert_eq!(early.compare(&late).unwrap(), Ordering::Less);
    assert_eq!(late.compare(&early).unwrap(), Ordering::Greater);
}

/// The string surface mirrors the value-type operations.
#[test]
fn string_surface_scenarios() {
    assert_eq!(
        convert::add_frames("10:00:00:00", Framerate::Fps25, 50).unwrap(),
        "10:00:02:00"
    );
    assert_eq!(
        convert::convert_framerate("10:00:00:00", Framerate::Fps24, Framerate::Fps25).unwrap(),
        "09:36:00:00"
    );
    assert_eq!(
        convert::timecode_to_subtitle("10:00:00:12", Framerate::Fps24).unwrap(),
        "10:00:00,500"
    );
    assert_eq!(
        convert::subtitle_to_timecode("10:00:00,500", Framerate::Fps24).unwrap(),
        "10:00:00:12"
    );
}

/// Serde round-trips preserve both fields of the value.
#[test]
fn serde_roundtrip() {
    let tc = Timecode::parse("10:00:00;00", Framerate::Fps29_97Df).unwrap();
    let json = serde_json::to_string(&tc).unwrap();
    let decoded: Timecode = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, tc);
    assert_eq!(decoded.framerate(), Framerate::Fps29_97Df);
}
