pub use std::time::Duration as StdDuration;

pub use anyhow::{anyhow, Context};

pub type DateTime = chrono::DateTime<chrono::Utc>;
pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
