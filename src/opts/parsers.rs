use chrono::Utc;

use crate::prelude::*;

pub fn date_time(value: &str) -> Result<DateTime> {
    let date_time = chrono::DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("`{}` is not an RFC 3339 date", value))?;
    Ok(date_time.with_timezone(&Utc))
}

pub fn offset(value: &str) -> Result<StdDuration> {
    humantime::parse_duration(value).with_context(|| format!("`{}` is not a valid offset", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_time_ok() -> Result {
        assert_eq!(
            date_time("2012-05-12T14:00:00+02:00")?.to_rfc3339(),
            "2012-05-12T12:00:00+00:00",
        );
        Ok(())
    }

    #[test]
    fn date_time_error() {
        assert!(date_time("yesterday").is_err());
    }

    #[test]
    fn offset_ok() -> Result {
        assert_eq!(offset("90m")?, StdDuration::from_secs(90 * 60));
        assert_eq!(offset("1h 30m")?, StdDuration::from_secs(90 * 60));
        Ok(())
    }

    #[test]
    fn offset_error() {
        assert!(offset("soon").is_err());
    }
}
