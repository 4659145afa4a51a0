use thiserror::Error;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The format string does not contain exactly one placeholder.
    #[error("`{template}` must contain exactly one `%@` placeholder, found {n_placeholders}")]
    InvalidTemplate {
        template: String,
        n_placeholders: usize,
    },
}
