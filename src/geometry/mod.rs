pub mod convert;
pub mod sanitize;
pub mod solve;

pub use convert::{convert_to_angle, convert_to_distance, convert_to_width};
pub use sanitize::{sanitize_angle, sanitize_length};
pub use solve::{Solution, solve};
