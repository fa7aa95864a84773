use anyhow::{
  Context,
  anyhow
};
use chrono::{
  DateTime,
  LocalResult,
  NaiveDateTime,
  SecondsFormat,
  TimeZone,
  Utc
};
use chrono_tz::Tz;

/// Shape produced and consumed by a
/// `datetime-local` form input.
const LOCAL_INPUT_FORMATS: [&str; 2] = [
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%dT%H:%M:%S"
];

const DISPLAY_FORMAT: &str =
  "%Y/%m/%d %H:%M";

/// Parses the backend's absolute
/// RFC3339 timestamp.
pub fn parse_wire(
  raw: &str
) -> anyhow::Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(
    raw.trim()
  )
  .map(|dt| dt.with_timezone(&Utc))
  .with_context(|| {
    format!(
      "invalid RFC3339 timestamp: \
       {raw}"
    )
  })
}

pub fn format_wire(
  dt: DateTime<Utc>
) -> String {
  dt.to_rfc3339_opts(
    SecondsFormat::Secs,
    true
  )
}

/// Interprets a `datetime-local`
/// value in the viewer timezone and
/// resolves it to an absolute
/// instant. An ambiguous local time
/// (DST fold) resolves to the
/// earliest candidate; a nonexistent
/// one is an error.
pub fn local_input_to_utc(
  raw: &str,
  tz: Tz
) -> anyhow::Result<DateTime<Utc>> {
  let token = raw.trim();
  let naive = LOCAL_INPUT_FORMATS
    .iter()
    .find_map(|fmt| {
      NaiveDateTime::parse_from_str(
        token, fmt
      )
      .ok()
    })
    .ok_or_else(|| {
      anyhow!(
        "invalid date-time input: \
         {raw}"
      )
    })?;

  match tz.from_local_datetime(&naive)
  {
    | LocalResult::Single(local) => {
      Ok(local.with_timezone(&Utc))
    }
    | LocalResult::Ambiguous(
      first,
      second
    ) => {
      tracing::warn!(
        input = token,
        first = %first,
        second = %second,
        "ambiguous local datetime; using earliest"
      );
      let chosen = if first <= second {
        first
      } else {
        second
      };
      Ok(chosen.with_timezone(&Utc))
    }
    | LocalResult::None => {
      Err(anyhow!(
        "local datetime does not \
         exist in timezone {tz}: \
         {token}"
      ))
    }
  }
}

/// Prefill value for the edit form:
/// the stored instant rendered in
/// the viewer timezone, minute
/// precision.
pub fn utc_to_local_input(
  dt: DateTime<Utc>,
  tz: Tz
) -> String {
  dt.with_timezone(&tz)
    .format(LOCAL_INPUT_FORMATS[0])
    .to_string()
}

pub fn format_display(
  dt: DateTime<Utc>,
  tz: Tz
) -> String {
  dt.with_timezone(&tz)
    .format(DISPLAY_FORMAT)
    .to_string()
}

/// Initial create-form value: today
/// at midnight, viewer-local.
pub fn default_due_input(
  now: DateTime<Utc>,
  tz: Tz
) -> String {
  now
    .with_timezone(&tz)
    .format("%Y-%m-%dT00:00")
    .to_string()
}

#[cfg(test)]
mod tests {
  use chrono::{
    TimeZone,
    Utc
  };
  use chrono_tz::{
    America,
    Asia
  };

  use super::{
    default_due_input,
    format_display,
    format_wire,
    local_input_to_utc,
    parse_wire,
    utc_to_local_input
  };

  #[test]
  fn round_trip_is_timezone_correct()
  {
    // A UTC midnight viewed from
    // UTC+9 must resubmit unchanged
    // to the same instant.
    let stored =
      parse_wire("2025-03-27T00:00:00Z")
        .expect("parse wire");
    let prefill = utc_to_local_input(
      stored,
      Asia::Tokyo
    );
    assert_eq!(
      prefill,
      "2025-03-27T09:00"
    );

    let resubmitted =
      local_input_to_utc(
        &prefill,
        Asia::Tokyo
      )
      .expect("resubmit");
    assert_eq!(resubmitted, stored);
    assert_eq!(
      format_wire(resubmitted),
      "2025-03-27T00:00:00Z"
    );
  }

  #[test]
  fn ambiguous_local_time_uses_earliest()
  {
    // DST fold in New York:
    // 01:30 occurs twice.
    let resolved = local_input_to_utc(
      "2025-11-02T01:30",
      America::New_York
    )
    .expect("resolve fold");
    let expected = Utc
      .with_ymd_and_hms(
        2025, 11, 2, 5, 30, 0
      )
      .single()
      .expect("valid instant");
    assert_eq!(resolved, expected);
  }

  #[test]
  fn nonexistent_local_time_is_an_error()
  {
    // Spring-forward gap.
    assert!(
      local_input_to_utc(
        "2025-03-09T02:30",
        America::New_York
      )
      .is_err()
    );
  }

  #[test]
  fn rejects_garbage_input() {
    assert!(
      local_input_to_utc(
        "next tuesday",
        Asia::Tokyo
      )
      .is_err()
    );
    assert!(
      parse_wire("2025-03-27").is_err()
    );
  }

  #[test]
  fn display_format_matches_list_view()
  {
    let due =
      parse_wire("2026-08-04T15:00:00Z")
        .expect("parse wire");
    assert_eq!(
      format_display(due, Asia::Tokyo),
      "2026/08/05 00:00"
    );
  }

  #[test]
  fn default_due_is_local_midnight() {
    let now = Utc
      .with_ymd_and_hms(
        2026, 8, 30, 23, 0, 0
      )
      .single()
      .expect("valid now");
    assert_eq!(
      default_due_input(
        now,
        Asia::Tokyo
      ),
      "2026-08-31T00:00"
    );
  }
}
