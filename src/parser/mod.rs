//! Low-level scanning functionality shared by the bracket notation parser.
pub mod delimiter;
pub mod parsing_error;

pub use delimiter::matching_bracket;
pub use parsing_error::{ParsingError, ParsingErrorType};
