//! Lenient scalar decoding.
//!
//! The console encodes many scalars as strings (`"80"`, `"True"`,
//! `"1586338742"`) in some responses and as native JSON in others. These
//! helpers accept both and reject anything else, so genuine schema drift
//! still surfaces as a deserialization error.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

fn parse_i64<E: serde::de::Error>(scalar: Scalar) -> Result<i64, E> {
    match scalar {
        Scalar::Integer(i) => Ok(i),
        Scalar::Float(f) if f.fract() == 0.0 => Ok(f as i64),
        Scalar::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("expected an integer, found \"{}\"", s))),
        Scalar::Float(f) => Err(E::custom(format!("expected an integer, found {}", f))),
        Scalar::Bool(b) => Err(E::custom(format!("expected an integer, found {}", b))),
    }
}

fn parse_string(scalar: Scalar) -> String {
    match scalar {
        Scalar::String(s) => s,
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }
}

/// Integer encoded as a JSON number or a numeric string
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_i64(Scalar::deserialize(deserializer)?)
}

/// Boolean encoded natively, as `"True"`/`"False"` (any case), or as 0/1
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Bool(b) => Ok(b),
        Scalar::Integer(0) => Ok(false),
        Scalar::Integer(1) => Ok(true),
        Scalar::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(D::Error::custom(format!("expected a boolean, found \"{}\"", s))),
        },
        _ => Err(D::Error::custom("expected a boolean")),
    }
}

/// String, or a number rendered as one
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(parse_string(Scalar::deserialize(deserializer)?))
}

/// Optional string, or a number rendered as one
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(parse_string))
}

/// A single timestamp or a list of them; the console sends either.
pub fn events_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Scalar>),
        One(Scalar),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items.into_iter().map(parse_i64).collect(),
        OneOrMany::One(Scalar::String(s)) if s.contains(',') => s
            .split(',')
            .map(|part| parse_i64(Scalar::String(part.to_string())))
            .collect(),
        OneOrMany::One(item) => Ok(vec![parse_i64(item)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_i64")]
        port: i64,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_string")]
        stamp: String,
        #[serde(default, deserialize_with = "lenient_opt_string")]
        maybe: Option<String>,
        #[serde(default, deserialize_with = "events_list")]
        events: Vec<i64>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_integer_from_number_or_string() {
        assert_eq!(probe(r#"{"port": 80}"#).port, 80);
        assert_eq!(probe(r#"{"port": "60961"}"#).port, 60961);
    }

    #[test]
    fn test_integer_rejects_garbage() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"port": "eighty"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bool_python_style() {
        assert!(probe(r#"{"flag": "True"}"#).flag);
        assert!(!probe(r#"{"flag": "False"}"#).flag);
        assert!(probe(r#"{"flag": true}"#).flag);
        assert!(probe(r#"{"flag": 1}"#).flag);
    }

    #[test]
    fn test_bool_rejects_garbage() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"flag": "maybe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_string_from_number() {
        assert_eq!(probe(r#"{"stamp": 1587933242}"#).stamp, "1587933242");
        assert_eq!(probe(r#"{"maybe": 12}"#).maybe.as_deref(), Some("12"));
        assert_eq!(probe(r#"{"maybe": null}"#).maybe, None);
    }

    #[test]
    fn test_events_list_shapes() {
        assert_eq!(probe(r#"{"events": 1586338742}"#).events, vec![1586338742]);
        assert_eq!(probe(r#"{"events": [1, "2"]}"#).events, vec![1, 2]);
        assert_eq!(probe(r#"{"events": "3,4"}"#).events, vec![3, 4]);
    }
}
