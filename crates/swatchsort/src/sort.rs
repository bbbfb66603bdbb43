//! The sort strategies for color records.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::classify::classify;
use crate::record::ColorRecord;
use crate::Float;

/// A strategy for ordering a list of color records.
///
/// Each strategy orders an independent copy of the records, so applying one
/// strategy never disturbs the input or another strategy's output. All sorts
/// are stable: records with equal keys keep their relative input order.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortCriterion {
    /// Keep the original input order.
    #[default]
    Unsorted,
    /// Group by nearest base color, ascending by similarity within a group.
    ///
    /// This is not a global sort on one key. See
    /// [`classify`](crate::classify()).
    Distance,
    /// Ascending by hue in degrees.
    Hue,
    /// Ascending by saturation.
    Saturation,
    /// Ascending by value.
    Value,
    /// Ascending by luma.
    Luma,
}

/// All criteria in the order result groups are presented in.
const ALL_CRITERIA: [SortCriterion; 6] = [
    SortCriterion::Unsorted,
    SortCriterion::Distance,
    SortCriterion::Hue,
    SortCriterion::Saturation,
    SortCriterion::Value,
    SortCriterion::Luma,
];

impl SortCriterion {
    /// Get an iterator over all sort criteria in presentation order.
    pub fn all() -> impl ExactSizeIterator<Item = SortCriterion> {
        ALL_CRITERIA.into_iter()
    }

    /// Get the human-readable title for this criterion's result group.
    pub const fn label(&self) -> &'static str {
        match self {
            SortCriterion::Unsorted => "Your unsorted list",
            SortCriterion::Distance => "Sort by Distance",
            SortCriterion::Hue => "Sort by Hue (Hsv)",
            SortCriterion::Saturation => "Sort by Saturation (hSv)",
            SortCriterion::Value => "Sort by Value (hsV)",
            SortCriterion::Luma => "Sort by Luma",
        }
    }

    /// Order a fresh copy of the given records by this criterion.
    pub fn apply(&self, records: &[ColorRecord]) -> Vec<ColorRecord> {
        let key: fn(&ColorRecord) -> Float = match self {
            SortCriterion::Unsorted => return records.to_vec(),
            SortCriterion::Distance => return classify(records),
            SortCriterion::Hue => ColorRecord::hue,
            SortCriterion::Saturation => ColorRecord::saturation,
            SortCriterion::Value => ColorRecord::value,
            SortCriterion::Luma => ColorRecord::luma,
        };

        let mut sorted = records.to_vec();
        // slice::sort_by is stable and the keys are never not-a-number, so
        // total_cmp orders them like the usual partial order.
        sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
        sorted
    }
}
