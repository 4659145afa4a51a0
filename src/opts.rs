//! CLI options.

use clap::{Args, Parser};
use relative_date_descriptor::descriptor::{DEFAULT_POST_FORMAT, DEFAULT_PRIOR_FORMAT};
use relative_date_descriptor::Template;

use crate::prelude::*;

pub mod parsers;

pub fn parse() -> Opts {
    Opts::parse()
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, default_value = "0", env = "SENTRY_TRACES_SAMPLE_RATE")]
    pub traces_sample_rate: f32,

    /// Format used when the target date precedes the reference date
    #[arg(long, default_value = DEFAULT_PRIOR_FORMAT, env = "RELATIVE_DATE_PRIOR_FORMAT")]
    pub prior_format: Template,

    /// Format used when the target date follows the reference date
    #[arg(long, default_value = DEFAULT_POST_FORMAT, env = "RELATIVE_DATE_POST_FORMAT")]
    pub post_format: Template,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Describe(DescribeOpts),
    Offset(OffsetOpts),
}

/// Describes an RFC 3339 date relative to another one
#[derive(Args)]
pub struct DescribeOpts {
    /// Date to describe
    #[arg(value_parser = parsers::date_time)]
    pub target: DateTime,

    /// Reference date, defaults to now
    #[arg(long, value_parser = parsers::date_time)]
    pub reference: Option<DateTime>,
}

/// Describes a date at the offset from now
#[derive(Args)]
pub struct OffsetOpts {
    /// Offset from now, for example: `90m` or `3days`
    #[arg(value_parser = parsers::offset)]
    pub offset: StdDuration,

    /// The date is in the past
    #[arg(long)]
    pub past: bool,
}
