use chrono_tz::Tz;
use serde::Deserialize;

const BASE_URL_ENV_VAR: &str =
  "SPRIG_BACKEND_URL";
const TIMEZONE_ENV_VAR: &str =
  "SPRIG_TIMEZONE";

pub const DEFAULT_BASE_URL: &str =
  "http://localhost:8080";

/// Resolved client configuration.
/// Resolution order per field is
/// environment, then the TOML text,
/// then the default. Parsing never
/// fails; bad values log a warning
/// and fall back.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Config {
  pub backend_base_url: String,
  pub timezone:         Tz
}

#[derive(
  Debug, Default, Deserialize,
)]
struct ConfigFile {
  backend: Option<BackendSection>,
  time:    Option<TimeSection>
}

#[derive(
  Debug, Default, Deserialize,
)]
struct BackendSection {
  base_url: Option<String>
}

#[derive(
  Debug, Default, Deserialize,
)]
struct TimeSection {
  timezone: Option<String>
}

impl Default for Config {
  fn default() -> Self {
    Self {
      backend_base_url:
        DEFAULT_BASE_URL.to_string(),
      timezone:         chrono_tz::UTC
    }
  }
}

impl Config {
  pub fn from_toml_str(
    raw: &str
  ) -> Self {
    let file = match toml::from_str::<
      ConfigFile
    >(raw)
    {
      | Ok(file) => file,
      | Err(err) => {
        tracing::warn!(
          error = %err,
          "malformed config; using defaults"
        );
        ConfigFile::default()
      }
    };

    Self {
      backend_base_url:
        resolve_base_url(&file),
      timezone:         resolve_timezone(
        &file
      )
    }
  }
}

fn resolve_base_url(
  file: &ConfigFile
) -> String {
  if let Ok(raw) =
    std::env::var(BASE_URL_ENV_VAR)
    && !raw.trim().is_empty()
  {
    tracing::info!(
      source = BASE_URL_ENV_VAR,
      "configured backend base url"
    );
    return normalize_base_url(&raw);
  }

  if let Some(raw) = file
    .backend
    .as_ref()
    .and_then(|backend| {
      backend.base_url.as_deref()
    })
    && !raw.trim().is_empty()
  {
    return normalize_base_url(raw);
  }

  DEFAULT_BASE_URL.to_string()
}

fn resolve_timezone(
  file: &ConfigFile
) -> Tz {
  if let Ok(raw) =
    std::env::var(TIMEZONE_ENV_VAR)
    && let Some(tz) = parse_timezone(
      &raw,
      TIMEZONE_ENV_VAR
    )
  {
    return tz;
  }

  if let Some(raw) = file
    .time
    .as_ref()
    .and_then(|time| {
      time.timezone.as_deref()
    })
    && let Some(tz) =
      parse_timezone(raw, "config")
  {
    return tz;
  }

  chrono_tz::UTC
}

fn parse_timezone(
  raw: &str,
  source: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  match trimmed.parse::<Tz>() {
    | Ok(tz) => {
      tracing::info!(
        source,
        timezone = %trimmed,
        "configured viewer timezone"
      );
      Some(tz)
    }
    | Err(err) => {
      tracing::warn!(
        source,
        timezone = %trimmed,
        error = %err,
        "failed to parse timezone id; falling back"
      );
      None
    }
  }
}

fn normalize_base_url(
  raw: &str
) -> String {
  raw
    .trim()
    .trim_end_matches('/')
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::{
    Config,
    DEFAULT_BASE_URL
  };

  #[test]
  fn parses_full_config() {
    let cfg = Config::from_toml_str(
      r#"
        [backend]
        base_url = "http://todo.lan:9090/"

        [time]
        timezone = "Asia/Tokyo"
      "#
    );
    assert_eq!(
      cfg.backend_base_url,
      "http://todo.lan:9090"
    );
    assert_eq!(
      cfg.timezone,
      chrono_tz::Asia::Tokyo
    );
  }

  #[test]
  fn empty_config_uses_defaults() {
    let cfg =
      Config::from_toml_str("");
    assert_eq!(
      cfg.backend_base_url,
      DEFAULT_BASE_URL
    );
    assert_eq!(
      cfg.timezone,
      chrono_tz::UTC
    );
  }

  #[test]
  fn bad_values_fall_back() {
    let cfg = Config::from_toml_str(
      r#"
        [time]
        timezone = "Mars/Olympus"
      "#
    );
    assert_eq!(
      cfg.timezone,
      chrono_tz::UTC
    );

    let cfg = Config::from_toml_str(
      "not really toml ["
    );
    assert_eq!(
      cfg.backend_base_url,
      DEFAULT_BASE_URL
    );
  }
}
