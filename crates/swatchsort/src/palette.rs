//! Utility module with the named base colors used as classification anchors.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::record::Rgb;

/// The 16 named base colors.
///
/// These are the classic HTML 4.01 colors. They anchor the
/// nearest-base-color grouping: every analyzed color is assigned to the base
/// color it is most similar to. The enumeration is ordered because result
/// groups concatenate in table order, so the order is part of this crate's
/// observable behavior.
///
/// Rust code converts between table indices and enumeration variants with
/// [`BaseColor as
/// TryFrom<u8>`](enum.BaseColor.html#impl-TryFrom%3Cu8%3E-for-BaseColor) and
/// [`u8 as From<BaseColor>`](enum.BaseColor.html#impl-From%3CBaseColor%3E-for-u8).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseColor {
    #[default]
    White,
    Silver,
    Gray,
    Black,
    Red,
    Maroon,
    Yellow,
    Olive,
    Lime,
    Green,
    Aqua,
    Teal,
    Blue,
    Navy,
    Fuchsia,
    Purple,
}

/// The reference channels for the base colors, in table order.
const BASE_CHANNELS: [Rgb; 16] = [
    Rgb::new(255, 255, 255), // White
    Rgb::new(192, 192, 192), // Silver
    Rgb::new(128, 128, 128), // Gray
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(255, 0, 0),     // Red
    Rgb::new(128, 0, 0),     // Maroon
    Rgb::new(255, 255, 0),   // Yellow
    Rgb::new(128, 128, 0),   // Olive
    Rgb::new(0, 255, 0),     // Lime
    Rgb::new(0, 128, 0),     // Green
    Rgb::new(0, 255, 255),   // Aqua
    Rgb::new(0, 128, 128),   // Teal
    Rgb::new(0, 0, 255),     // Blue
    Rgb::new(0, 0, 128),     // Navy
    Rgb::new(255, 0, 255),   // Fuchsia
    Rgb::new(128, 0, 128),   // Purple
];

impl BaseColor {
    /// The number of base colors.
    pub const COUNT: usize = 16;

    /// Get an iterator over all base colors in table order.
    pub fn all() -> BaseColorIterator {
        BaseColorIterator::new()
    }

    /// Get this base color's name.
    ///
    /// This method returns the lowercase human-readable name, e.g.,
    /// `"fuchsia"` for [`BaseColor::Fuchsia`].
    pub fn name(&self) -> &'static str {
        use BaseColor::*;

        match self {
            White => "white",
            Silver => "silver",
            Gray => "gray",
            Black => "black",
            Red => "red",
            Maroon => "maroon",
            Yellow => "yellow",
            Olive => "olive",
            Lime => "lime",
            Green => "green",
            Aqua => "aqua",
            Teal => "teal",
            Blue => "blue",
            Navy => "navy",
            Fuchsia => "fuchsia",
            Purple => "purple",
        }
    }

    /// Get this base color's reference channels.
    pub const fn rgb(&self) -> Rgb {
        BASE_CHANNELS[*self as usize]
    }
}

impl TryFrom<u8> for BaseColor {
    type Error = u8;

    /// Try instantiating a base color from its table index.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use BaseColor::*;

        let color = match value {
            0 => White,
            1 => Silver,
            2 => Gray,
            3 => Black,
            4 => Red,
            5 => Maroon,
            6 => Yellow,
            7 => Olive,
            8 => Lime,
            9 => Green,
            10 => Aqua,
            11 => Teal,
            12 => Blue,
            13 => Navy,
            14 => Fuchsia,
            15 => Purple,
            _ => return Err(value),
        };

        Ok(color)
    }
}

impl From<BaseColor> for u8 {
    /// Get the table index for the base color.
    fn from(value: BaseColor) -> Self {
        value as Self
    }
}

impl std::fmt::Display for BaseColor {
    /// Format this base color's name.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over all base colors in table order.
#[derive(Debug)]
pub struct BaseColorIterator {
    index: usize,
}

impl BaseColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for BaseColorIterator {
    type Item = BaseColor;

    fn next(&mut self) -> Option<Self::Item> {
        if BaseColor::COUNT <= self.index {
            None
        } else {
            let index = self.index;
            self.index += 1;
            BaseColor::try_from(index as u8).ok()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = BaseColor::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for BaseColorIterator {
    fn len(&self) -> usize {
        BaseColor::COUNT - self.index
    }
}

impl std::iter::FusedIterator for BaseColorIterator {}
