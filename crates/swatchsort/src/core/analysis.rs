use crate::Float;

/// Convert the given 24-bit channels to normalized coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// The hue, saturation, value, and chroma of a color, in that order.
pub(crate) type Hsv = (Float, Float, Float, Float);

/// Derive hue, saturation, value, and chroma from normalized coordinates.
///
/// Value is the maximum channel and chroma the difference between maximum and
/// minimum channel. Saturation is zero for black, hue is zero for achromatic
/// colors. The maximum channel determines the hue sector; channels are
/// checked in red, green, blue order, so when two channels tie at the
/// maximum, the earlier one picks the sector. That check order is
/// load-bearing for output order and must not change.
pub(crate) fn to_hsv(coordinates: &[Float; 3]) -> Hsv {
    let [r, g, b] = *coordinates;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let value = max;
    let mut hue = 0.0;
    let mut saturation = 0.0;

    if value > 0.0 {
        saturation = chroma / value;

        if saturation > 0.0 {
            if r == max {
                hue = 60.0 * (((g - min) - (b - min)) / chroma);
                if hue < 0.0 {
                    hue += 360.0;
                }
            } else if g == max {
                hue = (((b - min) - (r - min)) / chroma).mul_add(60.0, 120.0);
            } else {
                hue = (((r - min) - (g - min)) / chroma).mul_add(60.0, 240.0);
            }
        }
    }

    (hue, saturation, value, chroma)
}

/// The coefficients for computing luma from normalized coordinates.
const LUMA_WEIGHTS: &[Float; 3] = &[0.299, 0.587, 0.114];

/// Compute the luma of the given normalized coordinates.
///
/// Luma is the Rec. 601 weighted sum of the channels and serves as a cheap
/// perceptual brightness for ordering swatches.
#[inline]
pub(crate) fn to_luma(coordinates: &[Float; 3]) -> Float {
    let [r, g, b] = *coordinates;
    let [wr, wg, wb] = *LUMA_WEIGHTS;
    r.mul_add(wr, g.mul_add(wg, b * wb))
}

/// Compute the YIQ brightness of the given 24-bit channels.
///
/// The result ranges `0..=255` because it weighs the integer channels, not
/// the normalized coordinates. Its one job is deciding whether dark or light
/// text remains readable on top of the color.
#[inline]
pub(crate) fn to_yiq(channels: &[u8; 3]) -> Float {
    let [r, g, b] = *channels;
    (r as Float).mul_add(299.0, (g as Float).mul_add(587.0, b as Float * 114.0)) / 1000.0
}
