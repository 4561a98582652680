//! Field access helpers shared by the per-type serializers.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};
use serde_json::{Map, Value};

use crate::errors::{BuzError, BuzResult};
use crate::types::ResourceKind;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";
const TIME_FORMAT_FRACTION: &str = "%H:%M:%S%.f";

/// Typed read access to the fields of one wire map.
///
/// `null` is treated the same as an absent key.
pub(crate) struct FieldReader<'a> {
    kind: ResourceKind,
    data: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(kind: ResourceKind, data: &'a Map<String, Value>) -> Self {
        Self { kind, data }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    fn missing(&self, key: &str) -> BuzError {
        BuzError::invalid_data(self.kind.name(), format!("missing field '{}'", key))
    }

    fn wrong_type(&self, key: &str, expected: &str) -> BuzError {
        BuzError::invalid_data(
            self.kind.name(),
            format!("field '{}' is not {}", key, expected),
        )
    }

    pub(crate) fn string(&self, key: &str) -> BuzResult<String> {
        self.opt_string(key)?.ok_or_else(|| self.missing(key))
    }

    /// House numbers and similar fields are sometimes sent as JSON numbers.
    pub(crate) fn opt_string(&self, key: &str) -> BuzResult<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(self.wrong_type(key, "a string")),
        }
    }

    pub(crate) fn u32(&self, key: &str) -> BuzResult<u32> {
        let value = self.get(key).ok_or_else(|| self.missing(key))?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.wrong_type(key, "an unsigned integer"))
    }

    pub(crate) fn opt_f64(&self, key: &str) -> BuzResult<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "a number")),
        }
    }

    /// Absent booleans read as `false`.
    pub(crate) fn bool(&self, key: &str) -> BuzResult<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.wrong_type(key, "a boolean")),
        }
    }

    pub(crate) fn datetime(&self, key: &str) -> BuzResult<DateTime<FixedOffset>> {
        let raw = self.string(key)?;
        DateTime::parse_from_rfc3339(&raw).map_err(|_| self.wrong_type(key, "an RFC 3339 timestamp"))
    }

    pub(crate) fn date(&self, key: &str) -> BuzResult<NaiveDate> {
        let raw = self.string(key)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| self.wrong_type(key, "a YYYY-MM-DD date"))
    }

    pub(crate) fn opt_time(&self, key: &str) -> BuzResult<Option<NaiveTime>> {
        let Some(raw) = self.opt_string(key)? else {
            return Ok(None);
        };
        NaiveTime::parse_from_str(&raw, TIME_FORMAT_FRACTION)
            .or_else(|_| NaiveTime::parse_from_str(&raw, TIME_FORMAT))
            .map(Some)
            .map_err(|_| self.wrong_type(key, "an HH:MM time"))
    }

    pub(crate) fn object(&self, key: &str) -> BuzResult<&'a Map<String, Value>> {
        self.opt_object(key)?.ok_or_else(|| self.missing(key))
    }

    pub(crate) fn opt_object(&self, key: &str) -> BuzResult<Option<&'a Map<String, Value>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(self.wrong_type(key, "an object")),
        }
    }

    /// Absent collections read as empty.
    pub(crate) fn array(&self, key: &str) -> BuzResult<&'a [Value]> {
        match self.get(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(self.wrong_type(key, "an array")),
        }
    }
}

pub(crate) fn opt_string(value: Option<&String>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.clone()))
}

pub(crate) fn datetime(value: &DateTime<FixedOffset>) -> Value {
    Value::String(value.to_rfc3339())
}

pub(crate) fn date(value: NaiveDate) -> Value {
    Value::String(value.format(DATE_FORMAT).to_string())
}

pub(crate) fn opt_time(value: Option<NaiveTime>) -> Value {
    value.map_or(Value::Null, |time| {
        let format = match (time.second(), time.nanosecond()) {
            (0, 0) => TIME_FORMAT,
            (_, 0) => TIME_FORMAT_SECONDS,
            _ => TIME_FORMAT_FRACTION,
        };
        Value::String(time.format(format).to_string())
    })
}

pub(crate) fn opt_f64(value: Option<f64>) -> Value {
    value
        .and_then(serde_json::Number::from_f64)
        .map_or(Value::Null, Value::Number)
}
