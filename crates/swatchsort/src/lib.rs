//! # Swatchsort
//!
//! Swatchsort turns a flat list of hexadecimal color tokens into several
//! alternative orderings of the same colors, one per perceptual criterion:
//! nearest named base color, hue, saturation, value, and luma, next to the
//! untouched input order.
//!
//! The crate's main abstractions are:
//!
//!   * [`ColorRecord`] is one **fully analyzed color**: its canonical
//!     hexadecimal form, 24-bit [`Rgb`] channels, HSV coordinates with
//!     chroma, Rec. 601 luma, and YIQ brightness, with the [`TextShade`]
//!     for readable swatch labels derived from the latter.
//!   * [`BaseColor`](palette::BaseColor) enumerates the **16 named base
//!     colors** that anchor the nearest-color grouping, and [`similarity`],
//!     [`closest_base`], and [`classify`] implement the channel-wise
//!     similarity metric over them.
//!   * [`SortCriterion`] is one of the **six ordering strategies**. Every
//!     strategy orders an independent copy of the records and every sort is
//!     stable.
//!   * [`Pipeline`] strings it all together: it validates raw tokens,
//!     collects rejects, analyzes the survivors, and hands back a
//!     [`RunOutput`] with all six [`ResultGroup`]s. Rendering those groups
//!     is somebody else's job; the pipeline neither reads ambient state nor
//!     produces markup.
//!
//! ```
//! use swatchsort::{Pipeline, split_list};
//!
//! let output = Pipeline::new().run(split_list("#fff, 808000, #xyz"));
//! assert_eq!(output.errors, [" #xyz"]);
//! for group in &output.groups {
//!     assert_eq!(group.data.len(), 2);
//! }
//! ```
//!
//! The similarity metric is a deliberately cheap channel-linear proxy rather
//! than a color-difference formula, and the tie-breaks in hue derivation and
//! base color classification are part of the crate's contract. Both
//! faithfully reproduce the web tool this library grew out of, so a list
//! sorted here comes out exactly like it did there.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod classify;
mod core;
pub mod error;
pub mod palette;
mod pipeline;
mod record;
mod sort;

pub use classify::{classify, closest_base, similarity};
pub use core::close_enough;
pub use pipeline::{split_list, Pipeline, ResultGroup, RunOutput, SwatchSize};
pub use record::{ColorRecord, Rgb, TextShade};
pub use sort::SortCriterion;

#[doc(hidden)]
pub use core::to_eq_bits;
