//! Framerate catalog.
//!
//! A closed enumeration of the nominal rates used in video production, each
//! mapped to its exact decimal value, its integer time base, and its
//! drop-frame classification. The 29.97 and 59.94 rates exist in distinct
//! drop-frame and non-drop-frame variants; drop-frame status is a property of
//! the variant itself, never a separate flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported nominal framerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framerate {
    /// 23.976 fps (NTSC film)
    Fps23_976,
    /// 24 fps (film)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps, non-drop-frame
    Fps29_97Ndf,
    /// 29.97 fps, drop-frame
    Fps29_97Df,
    /// 30 fps
    Fps30,
    /// 47.95 fps (HFR NTSC film)
    Fps47_95,
    /// 48 fps (HFR film)
    Fps48,
    /// 50 fps (PAL HFR)
    Fps50,
    /// 59.94 fps, non-drop-frame
    Fps59_94Ndf,
    /// 59.94 fps, drop-frame
    Fps59_94Df,
    /// 60 fps
    Fps60,
}

impl Framerate {
    /// All supported framerates, in ascending nominal order.
    pub const ALL: [Framerate; 12] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps25,
        Self::Fps29_97Ndf,
        Self::Fps29_97Df,
        Self::Fps30,
        Self::Fps47_95,
        Self::Fps48,
        Self::Fps50,
        Self::Fps59_94Ndf,
        Self::Fps59_94Df,
        Self::Fps60,
    ];

    /// The exact decimal nominal value as a ratio (numerator, denominator).
    ///
    /// Fractional NTSC rates map to their decimal notation (29.97 is
    /// 2997/100), which is the value all timecode constants derive from.
    #[must_use]
    pub fn as_rational(&self) -> (u32, u32) {
        match self {
            Self::Fps23_976 => (23_976, 1000),
            Self::Fps24 => (24, 1),
            Self::Fps25 => (25, 1),
            Self::Fps29_97Ndf | Self::Fps29_97Df => (2997, 100),
            Self::Fps30 => (30, 1),
            Self::Fps47_95 => (4795, 100),
            Self::Fps48 => (48, 1),
            Self::Fps50 => (50, 1),
            Self::Fps59_94Ndf | Self::Fps59_94Df => (5994, 100),
            Self::Fps60 => (60, 1),
        }
    }

    /// The nominal rate as a floating point value.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        let (num, den) = self.as_rational();
        num as f64 / den as f64
    }

    /// The integer time base: the rounded nominal rate used as the modulus
    /// in frame-count arithmetic (30 for 29.97, 24 for 23.976).
    #[must_use]
    pub fn time_base(&self) -> u32 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97Ndf | Self::Fps29_97Df | Self::Fps30 => 30,
            Self::Fps47_95 | Self::Fps48 => 48,
            Self::Fps50 => 50,
            Self::Fps59_94Ndf | Self::Fps59_94Df | Self::Fps60 => 60,
        }
    }

    /// Whether this framerate uses drop-frame timecode.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        matches!(self, Self::Fps29_97Df | Self::Fps59_94Df)
    }

    /// The delimiter placed before the frame field: `;` for drop-frame
    /// rates, `:` otherwise.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.is_drop_frame() {
            ';'
        } else {
            ':'
        }
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fps23_976 => write!(f, "23.976"),
            Self::Fps24 => write!(f, "24"),
            Self::Fps25 => write!(f, "25"),
            Self::Fps29_97Ndf => write!(f, "29.97 NDF"),
            Self::Fps29_97Df => write!(f, "29.97 DF"),
            Self::Fps30 => write!(f, "30"),
            Self::Fps47_95 => write!(f, "47.95"),
            Self::Fps48 => write!(f, "48"),
            Self::Fps50 => write!(f, "50"),
            Self::Fps59_94Ndf => write!(f, "59.94 NDF"),
            Self::Fps59_94Df => write!(f, "59.94 DF"),
            Self::Fps60 => write!(f, "60"),
        }
    }
}

/// Explicit frame-field delimiter selection for formatting.
///
/// Overrides the delimiter implied by the framerate, for output targets that
/// require a specific separator regardless of drop-frame status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameSeparator {
    /// `10:00:00:00`
    Colon,
    /// `10:00:00;00`
    Semicolon,
    /// `10:00:00,00`
    Comma,
}

impl FrameSeparator {
    /// The delimiter character.
    #[must_use]
    pub fn as_char(&self) -> char {
        match self {
            Self::Colon => ':',
            Self::Semicolon => ';',
            Self::Comma => ',',
        }
    }
}
