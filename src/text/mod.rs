//! Text containers used alongside the element graph by input front ends.
//!
//! - [`Text`]: a string built from formatted fragments, with a byte cursor.
//! - [`SurroundingText`]: the text around the input cursor, addressed in
//!   codepoints.

pub mod formatted;
pub mod surrounding;

pub use formatted::{Text, TextFormatFlag, TextFormatFlags};
pub use surrounding::SurroundingText;
