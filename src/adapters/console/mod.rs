//! Console adapter - line-oriented terminal interview.

mod interview;

pub use interview::{ConsoleError, ConsoleInterview, EMPTY_INPUT_NOTICE};
