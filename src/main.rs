mod helpers;
mod opts;
mod prelude;

use chrono::{Duration, Utc};
use relative_date_descriptor::RelativeDateDescriptor;
use tracing::debug;

use crate::opts::{DescribeOpts, OffsetOpts, Opts, Subcommand};
use crate::prelude::*;

fn main() -> Result {
    let opts = opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    debug!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let descriptor = RelativeDateDescriptor::from_templates(opts.prior_format, opts.post_format);
    let description = match opts.subcommand {
        Subcommand::Describe(opts) => describe(&descriptor, opts),
        Subcommand::Offset(opts) => offset(&descriptor, opts)?,
    };
    println!("{}", description);
    Ok(())
}

fn describe(descriptor: &RelativeDateDescriptor, opts: DescribeOpts) -> String {
    let reference = opts.reference.unwrap_or_else(Utc::now);
    descriptor.describe(&opts.target, &reference)
}

fn offset(descriptor: &RelativeDateDescriptor, opts: OffsetOpts) -> Result<String> {
    let offset = Duration::from_std(opts.offset)
        .with_context(|| format!("the offset `{:?}` is out of range", opts.offset))?;
    Ok(descriptor.describe_duration(if opts.past { -offset } else { offset }))
}
