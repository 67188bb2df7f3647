//! Projection parameter sets in the conventional `+key=value` form.
//!
//! ```text
//! +proj=ob_tran +o_proj=moll +o_lat_p=45 +o_lon_p=-90 +lon_0=60
//! ```
//!
//! Angular parameters are given in degrees and stored in radians, so
//! everything downstream of [`ProjParams::parse`] works in radians only.

use crate::angle::parse_angle;
use crate::error::{ProjError, ProjResult};
use std::fmt;

/// Keys whose values are angles (degrees on input, radians once parsed).
pub const ANGULAR_KEYS: &[&str] = &[
    "o_lat_p", "o_lon_p", "o_alpha", "o_lon_c", "o_lat_c", "lon_1", "lat_1", "lon_2", "lat_2",
    "lon_0", "lat_0", "lat_ts",
];

/// Keys whose values are plain numbers (metres or scale factors).
pub const NUMERIC_KEYS: &[&str] = &["x_0", "y_0", "R", "a", "k_0"];

/// A single parsed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Bare key without a value, e.g. `+no_defs`.
    Flag,
    /// Angle in radians.
    Angle(f64),
    /// Linear value or factor.
    Number(f64),
    /// Anything else, kept verbatim (projection names, ellipsoid names).
    Text(String),
}

/// Ordered parameter set.
///
/// Duplicate keys are kept in input order; lookups return the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjParams {
    entries: Vec<(String, ParamValue)>,
}

impl ProjParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated `+key=value` string.
    pub fn parse(definition: &str) -> ProjResult<Self> {
        let mut params = Self::new();
        for token in definition.split_whitespace() {
            let token = token.trim_start_matches('+');
            if token.is_empty() {
                continue;
            }
            let (key, raw) = match token.split_once('=') {
                Some((k, v)) => (k, Some(v)),
                None => (token, None),
            };
            if key.is_empty() {
                return Err(ProjError::invalid_parameter(token, "empty parameter name"));
            }
            let value = match raw {
                None => ParamValue::Flag,
                Some(raw) => Self::classify(key, raw)?,
            };
            params.entries.push((key.to_string(), value));
        }
        Ok(params)
    }

    fn classify(key: &str, raw: &str) -> ProjResult<ParamValue> {
        if ANGULAR_KEYS.contains(&key) {
            parse_angle(raw)
                .map(ParamValue::Angle)
                .ok_or_else(|| ProjError::invalid_parameter(key, format!("not an angle: '{raw}'")))
        } else if NUMERIC_KEYS.contains(&key) {
            raw.trim()
                .parse::<f64>()
                .map(ParamValue::Number)
                .map_err(|_| ProjError::invalid_parameter(key, format!("not a number: '{raw}'")))
        } else {
            Ok(ParamValue::Text(raw.to_string()))
        }
    }

    /// Builder-style insert; replaces an existing value for `key`.
    pub fn with(mut self, key: &str, value: ParamValue) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key`, replacing the first existing occurrence or appending.
    pub fn set(&mut self, key: &str, value: ParamValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Text value of `key`, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ParamValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Angle in radians, or 0 when absent.
    pub fn angle_or_zero(&self, key: &str) -> ProjResult<f64> {
        Ok(self.angle(key)?.unwrap_or(0.0))
    }

    /// Angle in radians, if present.
    pub fn angle(&self, key: &str) -> ProjResult<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Angle(v)) => Ok(Some(*v)),
            Some(ParamValue::Text(raw)) => parse_angle(raw)
                .map(Some)
                .ok_or_else(|| ProjError::invalid_parameter(key, format!("not an angle: '{raw}'"))),
            Some(other) => Err(ProjError::invalid_parameter(
                key,
                format!("expected an angle, got {other:?}"),
            )),
        }
    }

    /// Plain number, if present.
    pub fn number(&self, key: &str) -> ProjResult<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Number(v)) => Ok(Some(*v)),
            Some(ParamValue::Text(raw)) => raw
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ProjError::invalid_parameter(key, format!("not a number: '{raw}'"))),
            Some(other) => Err(ProjError::invalid_parameter(
                key,
                format!("expected a number, got {other:?}"),
            )),
        }
    }
}

impl std::str::FromStr for ProjParams {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProjParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match value {
                ParamValue::Flag => write!(f, "+{key}")?,
                ParamValue::Angle(rad) => write!(f, "+{key}={}", rad.to_degrees())?,
                ParamValue::Number(v) => write!(f, "+{key}={v}")?,
                ParamValue::Text(s) => write!(f, "+{key}={s}")?,
            }
        }
        Ok(())
    }
}
