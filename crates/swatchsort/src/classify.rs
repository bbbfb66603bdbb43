//! Nearest-base-color classification.

use crate::palette::BaseColor;
use crate::record::{ColorRecord, Rgb};
use crate::Float;

/// Compute the channel-wise similarity of the two colors.
///
/// For each channel, the score is `(255 - |a - b|) / 255`, i.e., 1 for
/// identical channels and 0 for maximally different ones. The similarity is
/// the mean of the three channel scores and hence has unit range, with 1
/// meaning identical colors and 0 meaning black versus white.
///
/// This metric is deliberately channel-linear. It is a cheap proxy for
/// perceptual distance, not a color-difference formula, and it stays that way
/// so that groupings match the tool this crate grew out of.
pub fn similarity(color1: Rgb, color2: Rgb) -> Float {
    fn channel(c1: u8, c2: u8) -> Float {
        (255.0 - (c1 as Float - c2 as Float).abs()) / 255.0
    }

    let r = channel(color1.red(), color2.red());
    let g = channel(color1.green(), color2.green());
    let b = channel(color1.blue(), color2.blue());

    (r + g + b) / 3.0
}

/// Find the base color most similar to the given color.
///
/// This function scans all 16 base colors in table order and returns the one
/// with maximum [`similarity`] together with that similarity. Upon equal
/// similarity, the earlier base color wins. That tie-break is deterministic
/// and intentional; changing it would reshuffle result groups.
pub fn closest_base(color: Rgb) -> (BaseColor, Float) {
    let mut max_similarity = Float::NEG_INFINITY;
    let mut closest = BaseColor::White;

    for base in BaseColor::all() {
        let score = similarity(color, base.rgb());
        if max_similarity < score {
            max_similarity = score;
            closest = base;
        }
    }

    (closest, max_similarity)
}

/// Group the given records by their nearest base color.
///
/// This function assigns every record to the base color maximizing
/// [`similarity`], fills in the record's distance with that similarity, and
/// returns fresh records concatenated group by group in base color table
/// order. Within a group, records sort ascending by distance; the sort is
/// stable, so equally distant records keep their input order.
pub fn classify(records: &[ColorRecord]) -> Vec<ColorRecord> {
    let mut buckets: [Vec<ColorRecord>; BaseColor::COUNT] = Default::default();

    for record in records {
        let (base, distance) = closest_base(record.rgb());
        buckets[base as usize].push(record.with_distance(distance));
    }

    let mut sorted = Vec::with_capacity(records.len());
    for mut bucket in buckets {
        bucket.sort_by(|a, b| {
            let d1 = a.distance().unwrap_or_default();
            let d2 = b.distance().unwrap_or_default();
            d1.total_cmp(&d2)
        });
        sorted.append(&mut bucket);
    }

    sorted
}
