pub mod number;
pub mod style;
pub mod text;

pub use number::{format_fixed, format_optional, format_range};
pub use style::{TextStyle, parse_hex};
pub use text::{pad, single_line, truncate};
