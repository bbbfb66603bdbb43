mod analysis;
mod equality;
mod string;

// analysis
pub(crate) use analysis::{from_24bit, to_hsv, to_luma, to_yiq};

// equality
pub use equality::{close_enough, to_eq_bits};

// string
pub(crate) use string::{format_hex, normalize, parse_hex};
