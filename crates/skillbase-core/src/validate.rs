//! Field-level validation toolkit.
//!
//! Handlers build a [`Violations`] collector, run every rule over the
//! incoming payload, and call [`Violations::finish`]. All failures are
//! reported together — a payload with three bad fields produces one
//! response listing all three.

use serde::Serialize;

use crate::error::Error;

/// Maximum lengths for bounded string fields.
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const GRADE_CODE_MAX: usize = 50;
pub const GRADE_DESCRIPTION_MAX: usize = 255;

/// A single violated field with its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field:   &'static str,
  pub message: String,
}

/// Accumulates violations across all fields of a payload.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
    self.0.push(Violation { field, message: message.into() });
  }

  /// Required string: present and not blank. Returns the trimmed-ownership
  /// check result so callers can chain further rules only when present.
  pub fn required_string(
    &mut self,
    field: &'static str,
    value: Option<&str>,
    label: &str,
  ) -> bool {
    match value {
      Some(s) if !s.trim().is_empty() => true,
      _ => {
        self.push(field, format!("{label} is required"));
        false
      }
    }
  }

  pub fn max_len(
    &mut self,
    field: &'static str,
    value: Option<&str>,
    max: usize,
    label: &str,
  ) {
    if let Some(s) = value
      && s.chars().count() > max
    {
      self.push(field, format!("{label} must not exceed {max} characters"));
    }
  }

  pub fn email_shape(&mut self, field: &'static str, value: Option<&str>) {
    if let Some(s) = value
      && !s.trim().is_empty()
      && !is_valid_email(s)
    {
      self.push(field, "Email must be valid");
    }
  }

  pub fn non_negative(&mut self, field: &'static str, value: Option<i32>, label: &str) {
    if let Some(n) = value
      && n < 0
    {
      self.push(field, format!("{label} must be non-negative"));
    }
  }

  /// Required reference id: present (null/absent rejected).
  pub fn required_id(
    &mut self,
    field: &'static str,
    value: Option<i64>,
    label: &str,
  ) -> bool {
    if value.is_none() {
      self.push(field, format!("{label} is required"));
      return false;
    }
    true
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// `Ok(())` if nothing was violated, otherwise `Error::Validation` with
  /// the full list.
  pub fn finish(self) -> Result<(), Error> {
    if self.0.is_empty() {
      Ok(())
    } else {
      Err(Error::Validation(self.0))
    }
  }
}

/// Structural email check: one `@`, non-empty local part, and a domain
/// containing a dot, with no whitespace anywhere.
pub fn is_valid_email(s: &str) -> bool {
  if s.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !domain.is_empty()
    && domain.contains('.')
    && !domain.starts_with('.')
    && !domain.ends_with('.')
    && !domain.contains('@')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collects_every_violation() {
    let mut v = Violations::new();
    v.required_string("firstName", None, "First name");
    v.required_string("lastName", Some("  "), "Last name");
    v.email_shape("email", Some("not-an-email"));

    let err = v.finish().unwrap_err();
    let Error::Validation(list) = err else {
      panic!("expected validation error");
    };
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].field, "firstName");
    assert_eq!(list[0].message, "First name is required");
  }

  #[test]
  fn ok_when_nothing_violated() {
    let mut v = Violations::new();
    v.required_string("name", Some("Rust"), "Name");
    v.max_len("name", Some("Rust"), NAME_MAX, "Name");
    assert!(v.finish().is_ok());
  }

  #[test]
  fn email_shapes() {
    assert!(is_valid_email("ada@x.com"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("ada"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email("ada@nodot"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("a da@x.com"));
  }

  #[test]
  fn length_counts_chars_not_bytes() {
    let mut v = Violations::new();
    let s = "é".repeat(NAME_MAX);
    v.max_len("name", Some(&s), NAME_MAX, "Name");
    assert!(v.is_empty());
  }
}
