use std::fmt;

/// Failure classes at the HTTP
/// boundary: the fetch itself
/// rejected, the server answered
/// with a non-2xx status, or the
/// body did not decode as expected.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum ApiError {
  Network(String),
  Status(u16),
  Decode(String)
}

impl ApiError {
  /// Short text for the user-facing
  /// notice banner.
  pub fn summary(&self) -> String {
    match self {
      | Self::Network(_) => {
        "the server could not be \
         reached"
          .to_string()
      }
      | Self::Status(code) => {
        format!(
          "the server answered with \
           status {code}"
        )
      }
      | Self::Decode(_) => {
        "the server sent an \
         unexpected response"
          .to_string()
      }
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Network(detail) => {
        write!(
          f,
          "network failure: {detail}"
        )
      }
      | Self::Status(code) => {
        write!(
          f,
          "http status {code}"
        )
      }
      | Self::Decode(detail) => {
        write!(
          f,
          "decode failure: {detail}"
        )
      }
    }
  }
}

impl std::error::Error for ApiError {}
