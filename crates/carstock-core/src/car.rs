//! The car record and the raw form input it is built from.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result, describe::Describable};

// ─── Car ─────────────────────────────────────────────────────────────────────

/// An immutable car record. Fields are private; once built a `Car` never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
  make:  String,
  model: String,
  year:  i32,
}

impl Car {
  /// Build a record verbatim. No validation is applied here: empty strings
  /// and non-positive years are accepted as given.
  pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
    Self {
      make: make.into(),
      model: model.into(),
      year,
    }
  }

  pub fn make(&self) -> &str { &self.make }

  pub fn model(&self) -> &str { &self.model }

  pub fn year(&self) -> i32 { self.year }
}

impl Describable for Car {
  fn describe(&self) -> String { format!("{} {}", self.make, self.model) }

  fn year(&self) -> Option<i32> { Some(self.year) }
}

// ─── NewCar ──────────────────────────────────────────────────────────────────

/// Raw, untrimmed input as submitted by the add-car form.
///
/// `year` stays a string until [`NewCar::into_car`] so that a malformed value
/// can be reported back instead of being rejected by the deserialiser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCar {
  #[serde(default)]
  pub make:  String,
  #[serde(default)]
  pub model: String,
  #[serde(default, deserialize_with = "text_or_number")]
  pub year:  String,
}

/// JSON clients send the year as a number (or `null`), forms send it as
/// text. Anything that is not an integer is kept as text so that
/// [`NewCar::into_car`] reports it as an invalid year.
fn text_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Text(String),
    Integer(i64),
    Float(f64),
  }
  Ok(match Option::<Raw>::deserialize(d)? {
    None => String::new(),
    Some(Raw::Text(s)) => s,
    Some(Raw::Integer(n)) => n.to_string(),
    Some(Raw::Float(n)) => n.to_string(),
  })
}

impl NewCar {
  pub fn new(
    make: impl Into<String>,
    model: impl Into<String>,
    year: impl Into<String>,
  ) -> Self {
    Self {
      make:  make.into(),
      model: model.into(),
      year:  year.into(),
    }
  }

  /// Trim the text fields and check that every field is present.
  ///
  /// Only presence is checked: make and model must be non-empty after
  /// trimming, and year must parse as a non-zero integer.
  pub fn into_car(self) -> Result<Car> {
    let make = self.make.trim();
    if make.is_empty() {
      return Err(Error::MissingField("make"));
    }
    let model = self.model.trim();
    if model.is_empty() {
      return Err(Error::MissingField("model"));
    }
    let parsed = self.year.trim().parse::<i32>().ok().filter(|y| *y != 0);
    let Some(year) = parsed else {
      return Err(Error::InvalidYear(self.year));
    };
    Ok(Car::new(make, model, year))
  }
}
