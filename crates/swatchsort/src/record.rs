use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::core::{format_hex, from_24bit, normalize, parse_hex, to_hsv, to_luma, to_yiq};
use crate::error::ColorFormatError;
use crate::Float;

// ====================================================================================================================
// 24-Bit RGB Channels
// ====================================================================================================================

/// A 24-bit RGB color.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb(u8, u8, u8);

impl Rgb {
    /// Create a new RGB color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Access the red channel.
    pub const fn red(&self) -> u8 {
        self.0
    }

    /// Access the green channel.
    pub const fn green(&self) -> u8 {
        self.1
    }

    /// Access the blue channel.
    pub const fn blue(&self) -> u8 {
        self.2
    }

    /// Access all three channels as an array.
    pub const fn channels(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        let [r, g, b] = channels;
        Self(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse an RGB color from a hexadecimal token. The token may carry a
    /// leading number sign and may use three-digit shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(&normalize(s)?).map(Self::from)
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color in hashed hexadecimal notation, e.g., `#aabbcc`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("#{}", format_hex(&self.channels())))
    }
}

// ====================================================================================================================
// Text Shade
// ====================================================================================================================

/// The shade of text that remains readable on top of a color.
///
/// A renderer labelling a swatch with its own hexadecimal value needs a
/// foreground that contrasts with the swatch. Per the YIQ brightness of the
/// swatch, that is either near-black or near-white text.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextShade {
    /// Dark text over a bright color.
    Dark,
    /// Light text over a dark color.
    Light,
}

impl TextShade {
    /// Get the six-digit hexadecimal value for this text shade.
    pub const fn hex(&self) -> &'static str {
        match self {
            TextShade::Dark => "000000",
            TextShade::Light => "ffffff",
        }
    }
}

// ====================================================================================================================
// Color Record
// ====================================================================================================================

/// A fully analyzed color.
///
/// A color record combines the canonical hexadecimal form of a color with the
/// derived quantities the sort strategies key on: the 24-bit RGB channels,
/// the HSV coordinates with chroma, the Rec. 601 luma, and the YIQ
/// brightness. Records are immutable; the one exception is the similarity to
/// the nearest base color, which starts out empty and is filled in by
/// [`classify`](crate::classify()), the only operation that computes it.
///
/// Ranges: `hue` is degrees in `0..360`; `saturation`, `value`, `chroma`, and
/// `luma` have unit range; `yiq` ranges `0..=255` because it weighs the
/// integer channels; `distance`, when present, has unit range with 1 meaning
/// identical to the base color.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRecord {
    hex: String,
    rgb: Rgb,
    hue: Float,
    saturation: Float,
    value: Float,
    chroma: Float,
    luma: Float,
    yiq: Float,
    distance: Option<Float>,
}

impl ColorRecord {
    /// Analyze the given raw token into a color record.
    ///
    /// This constructor sanitizes the token and derives all color attributes.
    /// It is the only public way of creating a record, which keeps the
    /// derived quantities consistent with the channels by construction.
    pub fn from_token(token: &str) -> Result<Self, ColorFormatError> {
        let hex = normalize(token)?;
        // The parse cannot fail on normalize's output but propagates anyway.
        let channels = parse_hex(&hex)?;
        Ok(Self::from_parts(hex, Rgb::from(channels)))
    }

    /// Build a record from the canonical hexadecimal form and its channels.
    fn from_parts(hex: String, rgb: Rgb) -> Self {
        let [r, g, b] = rgb.channels();
        let coordinates = from_24bit(r, g, b);
        let (hue, saturation, value, chroma) = to_hsv(&coordinates);

        Self {
            hex,
            rgb,
            hue,
            saturation,
            value,
            chroma,
            luma: to_luma(&coordinates),
            yiq: to_yiq(&rgb.channels()),
            distance: None,
        }
    }

    /// Access the canonical hexadecimal form, six lowercase digits without a
    /// number sign.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Access the 24-bit RGB channels.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Access the hue in degrees, `0..360`. Achromatic colors have hue zero.
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Access the saturation, `0..=1`. Black has saturation zero.
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Access the value, i.e., the maximum normalized channel.
    pub const fn value(&self) -> Float {
        self.value
    }

    /// Access the chroma, i.e., the spread between the maximum and minimum
    /// normalized channel.
    pub const fn chroma(&self) -> Float {
        self.chroma
    }

    /// Access the luma, the Rec. 601 weighted brightness with unit range.
    pub const fn luma(&self) -> Float {
        self.luma
    }

    /// Access the YIQ brightness, `0..=255`.
    pub const fn yiq(&self) -> Float {
        self.yiq
    }

    /// Access the similarity to the nearest base color.
    ///
    /// This quantity is `None` until the record has passed through
    /// [`classify`](crate::classify()), which is the case exactly for the
    /// records of the nearest-base-color result group.
    pub const fn distance(&self) -> Option<Float> {
        self.distance
    }

    /// Determine the text shade that contrasts with this color.
    ///
    /// YIQ brightness of 128 or more calls for dark text, anything below for
    /// light text.
    pub fn text_shade(&self) -> TextShade {
        if self.yiq >= 128.0 {
            TextShade::Dark
        } else {
            TextShade::Light
        }
    }

    /// Record the similarity to the nearest base color.
    pub(crate) fn with_distance(&self, distance: Float) -> Self {
        let mut record = self.clone();
        record.distance = Some(distance);
        record
    }
}

impl FromStr for ColorRecord {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl std::fmt::Display for ColorRecord {
    /// Format this record's color in hashed hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("#{}", self.hex))
    }
}

#[cfg(test)]
mod test {
    use super::{ColorRecord, Rgb, TextShade};
    use crate::assert_close_enough;
    use crate::error::ColorFormatError;

    #[test]
    fn test_rgb() -> Result<(), ColorFormatError> {
        let teal: Rgb = "#008080".parse()?;
        assert_eq!(teal, Rgb::new(0, 128, 128));
        assert_eq!(teal.red(), 0);
        assert_eq!(teal.green(), 128);
        assert_eq!(teal.blue(), 128);
        assert_eq!(teal.to_string(), "#008080");

        assert_eq!("#abc".parse::<Rgb>()?, Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(
            "#ab".parse::<Rgb>(),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }

    #[test]
    fn test_white_and_black() -> Result<(), ColorFormatError> {
        let white = ColorRecord::from_token("#fff")?;
        assert_eq!(white.hex(), "ffffff");
        assert_eq!(white.rgb(), Rgb::new(255, 255, 255));
        assert_close_enough!(white.value(), 1.0);
        assert_close_enough!(white.luma(), 1.0);
        assert_close_enough!(white.yiq(), 255.0);
        assert_eq!(white.text_shade(), TextShade::Dark);

        let black = ColorRecord::from_token("#000")?;
        assert_eq!(black.hex(), "000000");
        assert_close_enough!(black.hue(), 0.0);
        assert_close_enough!(black.saturation(), 0.0);
        assert_close_enough!(black.value(), 0.0);
        assert_close_enough!(black.luma(), 0.0);
        assert_close_enough!(black.yiq(), 0.0);
        assert_eq!(black.text_shade(), TextShade::Light);
        assert_eq!(black.distance(), None);
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), ColorFormatError> {
        for token in ["#FF8800", "0f73c2", " #AbC ", "999"] {
            let record = ColorRecord::from_token(token)?;
            let [r, g, b] = record.rgb().channels();
            assert_eq!(format!("{:02x}{:02x}{:02x}", r, g, b), record.hex());
        }
        Ok(())
    }

    #[test]
    fn test_text_shade_threshold() -> Result<(), ColorFormatError> {
        // 0x808080 has YIQ brightness of exactly 128 and flips to dark text.
        let gray = ColorRecord::from_token("#808080")?;
        assert_close_enough!(gray.yiq(), 128.0);
        assert_eq!(gray.text_shade(), TextShade::Dark);
        assert_eq!(gray.text_shade().hex(), "000000");

        let navy = ColorRecord::from_token("#000080")?;
        assert_eq!(navy.text_shade(), TextShade::Light);
        assert_eq!(navy.text_shade().hex(), "ffffff");
        Ok(())
    }
}
