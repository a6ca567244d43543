//! Lossless JSON form of a single coordinate.
//!
//! JSON has no NaN or infinity, and `serde_json` writes them as `null`. A
//! non-finite coordinate is written as one of the strings `"NaN"`, `"inf"`,
//! `"-inf"` instead, and read back from those strings. `null` reads as NaN so
//! session files that already hold one stay loadable.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

fn non_finite_name(v: f64) -> &'static str {
    if v.is_nan() {
        "NaN"
    } else if v > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

/// Parse a string naming a non-finite value. Numeric strings are rejected.
fn parse_non_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| !v.is_finite())
}

pub(crate) fn to_json(v: f64) -> Value {
    if v.is_finite() {
        Value::from(v)
    } else {
        Value::from(non_finite_name(v))
    }
}

/// A JSON number, or a string written by [`to_json`] for a non-finite value.
pub(crate) fn from_json(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_non_finite(s),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Coord(f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordProxy {
    Num(f64),
    Text(String),
    Null,
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(non_finite_name(self.0))
        }
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CoordProxy::deserialize(deserializer)? {
            CoordProxy::Num(v) => Ok(Coord(v)),
            CoordProxy::Null => Ok(Coord(f64::NAN)),
            CoordProxy::Text(s) => parse_non_finite(&s)
                .map(Coord)
                .ok_or_else(|| D::Error::custom(format!("expected a coordinate, got {s:?}"))),
        }
    }
}

/// `#[serde(with = "crate::coord::scalar")]` for an `f64` field.
pub(crate) mod scalar {
    use super::*;

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        Coord(*v).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Coord::deserialize(deserializer).map(|c| c.0)
    }
}

/// `#[serde(with = "crate::coord::pair")]` for an `(f64, f64)` field.
pub(crate) mod pair {
    use super::*;

    pub fn serialize<S: Serializer>(v: &(f64, f64), serializer: S) -> Result<S::Ok, S::Error> {
        (Coord(v.0), Coord(v.1)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<(f64, f64), D::Error> {
        let (x, y) = <(Coord, Coord)>::deserialize(deserializer)?;
        Ok((x.0, y.0))
    }
}

/// `#[serde(with = "crate::coord::pairs")]` for a `Vec<(f64, f64)>` field.
pub(crate) mod pairs {
    use super::*;

    pub fn serialize<S: Serializer>(v: &[(f64, f64)], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(v.iter().map(|&(x, y)| (Coord(x), Coord(y))))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(f64, f64)>, D::Error> {
        let raw = Vec::<(Coord, Coord)>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(x, y)| (x.0, y.0)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_finite_values_use_names() {
        assert_eq!(to_json(1.5), json!(1.5));
        assert_eq!(to_json(f64::NAN), json!("NaN"));
        assert_eq!(to_json(f64::INFINITY), json!("inf"));
        assert_eq!(to_json(f64::NEG_INFINITY), json!("-inf"));
        assert!(from_json(&json!("NaN")).is_some_and(f64::is_nan));
        assert_eq!(from_json(&json!("-inf")), Some(f64::NEG_INFINITY));
        assert_eq!(from_json(&json!(2)), Some(2.0));
    }

    #[test]
    fn numeric_strings_and_other_values_are_not_coordinates() {
        assert_eq!(from_json(&json!("2")), None);
        assert_eq!(from_json(&json!(null)), None);
        assert_eq!(from_json(&json!([1])), None);
        assert!(serde_json::from_str::<Coord>("\"12\"").is_err());
    }

    #[test]
    fn serde_form_reads_back_and_accepts_null() {
        let text = serde_json::to_string(&[Coord(f64::INFINITY), Coord(-0.5)]).unwrap();
        assert_eq!(text, r#"["inf",-0.5]"#);
        let back: Vec<Coord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vec![Coord(f64::INFINITY), Coord(-0.5)]);
        let null: Coord = serde_json::from_str("null").unwrap();
        assert!(null.0.is_nan());
    }
}
