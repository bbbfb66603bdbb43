//! The pipeline from raw tokens to presentation-ready result groups.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::record::ColorRecord;
use crate::sort::SortCriterion;

/// The size of a rendered swatch in pixels.
///
/// Swatch sizes are pass-through presentation hints. The pipeline echoes them
/// into its output without ever consulting them; only a renderer cares. The
/// default of 150 by 150 pixels matches the original tool's fallback.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwatchSize {
    /// The width in pixels.
    pub width: u32,
    /// The height in pixels.
    pub height: u32,
}

impl Default for SwatchSize {
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
        }
    }
}

/// One ordering of the analyzed colors, ready for presentation.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ResultGroup {
    /// The criterion that produced this ordering.
    pub criterion: SortCriterion,
    /// The human-readable group title.
    pub title: String,
    /// The ordered color records. Every group owns its records, so no
    /// ordering can disturb another.
    pub data: Vec<ColorRecord>,
}

/// The outcome of one pipeline run.
///
/// A run always yields both the result groups and the rejected tokens; an
/// empty error list does not imply non-empty groups and vice versa. When no
/// token survives validation, all six groups are present but empty.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutput {
    /// The six result groups in presentation order: unsorted, distance, hue,
    /// saturation, value, luma.
    pub groups: Vec<ResultGroup>,
    /// The rejected tokens, in input order and original spelling.
    pub errors: Vec<String>,
    /// The echoed swatch size hint.
    pub swatch_size: SwatchSize,
}

/// The color sorting pipeline.
///
/// A pipeline validates raw tokens, analyzes the survivors into
/// [`ColorRecord`]s, and orders independent copies of the records by every
/// [`SortCriterion`]. It holds no state beyond presentation hints, so one
/// pipeline value can serve any number of runs; each run is a pure function
/// of its tokens.
///
/// # Example
///
/// ```
/// # use swatchsort::Pipeline;
/// let output = Pipeline::default().run(["#fff", "nope", "#000"]);
/// assert_eq!(output.errors, ["nope"]);
/// assert_eq!(output.groups.len(), 6);
/// assert_eq!(output.groups[0].data.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    swatch_size: SwatchSize,
}

impl Pipeline {
    /// Create a new pipeline with default presentation hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given swatch size as presentation hint.
    #[must_use = "method returns a new pipeline and does not mutate original value"]
    pub fn with_swatch_size(mut self, swatch_size: SwatchSize) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Run the pipeline over the given raw tokens.
    ///
    /// Tokens are trimmed first. Empty tokens are dropped silently, whereas
    /// tokens failing the hexadecimal grammar end up in the output's error
    /// list in their original spelling. Bad tokens never halt the run; the
    /// remaining records flow through all six sort strategies.
    pub fn run<I>(&self, tokens: I) -> RunOutput
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            if token.trim().is_empty() {
                continue;
            }
            match ColorRecord::from_token(token) {
                Ok(record) => records.push(record),
                Err(_) => errors.push(token.to_string()),
            }
        }

        let groups = SortCriterion::all()
            .map(|criterion| ResultGroup {
                criterion,
                title: criterion.label().to_string(),
                data: criterion.apply(&records),
            })
            .collect();

        RunOutput {
            groups,
            errors,
            swatch_size: self.swatch_size,
        }
    }
}

/// Split a comma-separated list of color tokens.
///
/// This helper matches the input format of the original tool's text field.
/// It yields the raw tokens between commas, untrimmed; the pipeline takes
/// care of trimming and of dropping empty tokens.
pub fn split_list(input: &str) -> impl Iterator<Item = &str> {
    input.split(',')
}

#[cfg(test)]
mod test {
    use super::{split_list, Pipeline, SwatchSize};
    use crate::sort::SortCriterion;

    #[test]
    fn test_end_to_end() {
        let output = Pipeline::new().run(["#FF0000", "#00FF00", "nope", "#0000FF"]);

        assert_eq!(output.errors, ["nope"]);
        assert_eq!(output.groups.len(), 6);

        // Original order survives in the unsorted group.
        let unsorted = &output.groups[0];
        assert_eq!(unsorted.criterion, SortCriterion::Unsorted);
        assert_eq!(unsorted.title, "Your unsorted list");
        let hexes: Vec<&str> = unsorted.data.iter().map(|r| r.hex()).collect();
        assert_eq!(hexes, ["ff0000", "00ff00", "0000ff"]);

        // Ascending hue: red at 0, green at 120, blue at 240 degrees.
        let by_hue = &output.groups[2];
        assert_eq!(by_hue.criterion, SortCriterion::Hue);
        let hexes: Vec<&str> = by_hue.data.iter().map(|r| r.hex()).collect();
        assert_eq!(hexes, ["ff0000", "00ff00", "0000ff"]);

        // Distance group records carry their similarity, others do not.
        assert!(output.groups[1].data.iter().all(|r| r.distance().is_some()));
        assert!(unsorted.data.iter().all(|r| r.distance().is_none()));
    }

    #[test]
    fn test_empty_and_invalid_input() {
        let output = Pipeline::new().run(["", "  ", "#xyz", "#ab"]);

        assert_eq!(output.errors, ["#xyz", "#ab"]);
        assert_eq!(output.groups.len(), 6, "empty runs still yield all groups");
        assert!(output.groups.iter().all(|g| g.data.is_empty()));

        let output = Pipeline::new().run(Vec::<String>::new());
        assert!(output.errors.is_empty());
        assert!(output.groups.iter().all(|g| g.data.is_empty()));
    }

    #[test]
    fn test_errors_keep_original_spelling() {
        let output = Pipeline::new().run([" #GG0000 ", "#123456"]);
        assert_eq!(output.errors, [" #GG0000 "]);
        assert_eq!(output.groups[0].data.len(), 1);
    }

    #[test]
    fn test_swatch_size_passes_through() {
        let output = Pipeline::new().run(["#123456"]);
        assert_eq!(output.swatch_size, SwatchSize::default());
        assert_eq!(output.swatch_size.width, 150);

        let size = SwatchSize {
            width: 64,
            height: 48,
        };
        let output = Pipeline::new().with_swatch_size(size).run(["#123456"]);
        assert_eq!(output.swatch_size, size);
    }

    #[test]
    fn test_split_list() {
        let tokens: Vec<&str> = split_list("#fff, #000,,nope").collect();
        assert_eq!(tokens, ["#fff", " #000", "", "nope"]);

        let output = Pipeline::new().run(split_list("#fff, #000,,nope"));
        assert_eq!(output.errors, ["nope"]);
        assert_eq!(output.groups[0].data.len(), 2);
    }
}
