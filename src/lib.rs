//! Human-readable relative dates such as `2 days ago` or `in 7 years`,
//! described with the most significant time unit only.

pub mod descriptor;
pub mod error;
pub mod template;
pub mod time;
pub mod unit;

pub use crate::descriptor::{measure, Direction, MagnitudePhrase, RelativeDateDescriptor};
pub use crate::error::{Error, Result};
pub use crate::template::{Template, PLACEHOLDER};
pub use crate::unit::TimeUnit;
