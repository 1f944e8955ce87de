//! Typed values of data elements and conversion from the wire form
//!
//! Property and range values arrive as raw JSON, usually as strings even for
//! numbers. [`ElementValue::convert`] interprets such a raw value according to
//! the element's declared [`DataType`]; [`ElementValue::infer`] is used when no
//! type is declared.

use crate::datatypes::data_type::DataType;
use crate::error::{AasError, AasResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Typed value of a data element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// No value
    Null,
    /// xsd:boolean
    Boolean(bool),
    /// Signed integer types (byte, short, int, long, integer)
    Integer(i64),
    /// Unsigned integer types
    Unsigned(u64),
    /// decimal, double and float
    Decimal(f64),
    /// string, anyURI, langString, duration
    String(String),
    /// xsd:dateTime
    DateTime(DateTime<FixedOffset>),
    /// xsd:date
    Date(NaiveDate),
    /// xsd:time
    Time(NaiveTime),
    /// xsd:base64Binary
    Binary(Vec<u8>),
}

impl ElementValue {
    /// Convert a raw wire value to the given value type
    ///
    /// # Arguments
    /// * `raw` - JSON value as found on the wire
    /// * `data_type` - Declared value type of the element
    ///
    /// # Errors
    /// Returns [`AasError::TypeConversion`] if the raw value cannot represent
    /// the declared type, including out-of-range narrow integers.
    pub fn convert(raw: &Value, data_type: DataType) -> AasResult<Self> {
        if raw.is_null() {
            return Ok(ElementValue::Null);
        }

        match data_type {
            DataType::Boolean => parse_bool(raw).map(ElementValue::Boolean),
            DataType::Byte => parse_signed(raw, i8::MIN.into(), i8::MAX.into(), data_type),
            DataType::Short => parse_signed(raw, i16::MIN.into(), i16::MAX.into(), data_type),
            DataType::Int => parse_signed(raw, i32::MIN.into(), i32::MAX.into(), data_type),
            DataType::Long | DataType::Integer => parse_signed(raw, i64::MIN, i64::MAX, data_type),
            DataType::UnsignedByte => parse_unsigned(raw, u8::MAX.into(), data_type),
            DataType::UnsignedShort => parse_unsigned(raw, u16::MAX.into(), data_type),
            DataType::UnsignedInt => parse_unsigned(raw, u32::MAX.into(), data_type),
            DataType::UnsignedLong => parse_unsigned(raw, u64::MAX, data_type),
            DataType::Decimal | DataType::Double | DataType::Float => {
                parse_decimal(raw, data_type).map(ElementValue::Decimal)
            }
            DataType::DateTime => DateTime::parse_from_rfc3339(text(raw).trim())
                .map(ElementValue::DateTime)
                .map_err(|_| AasError::conversion(text(raw), data_type)),
            DataType::Date => NaiveDate::parse_from_str(text(raw).trim(), DATE_FORMAT)
                .map(ElementValue::Date)
                .map_err(|_| AasError::conversion(text(raw), data_type)),
            DataType::Time => NaiveTime::parse_from_str(text(raw).trim(), TIME_FORMAT)
                .map(ElementValue::Time)
                .map_err(|_| AasError::conversion(text(raw), data_type)),
            DataType::Base64Binary => BASE64
                .decode(text(raw).trim())
                .map(ElementValue::Binary)
                .map_err(|_| AasError::conversion(text(raw), data_type)),
            DataType::String | DataType::AnyUri | DataType::LangString | DataType::Duration => {
                Ok(ElementValue::String(text(raw)))
            }
            DataType::AnyType => Ok(Self::infer(raw)),
        }
    }

    /// Type a raw wire value without a declared value type
    pub fn infer(raw: &Value) -> Self {
        match raw {
            Value::Null => ElementValue::Null,
            Value::Bool(b) => ElementValue::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ElementValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    ElementValue::Unsigned(u)
                } else {
                    ElementValue::Decimal(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => ElementValue::String(s.clone()),
            other => ElementValue::String(other.to_string()),
        }
    }

    /// Wire form of this value
    ///
    /// Booleans and numbers are written natively, everything else as text.
    /// Non-finite decimals are written in their XSD lexical form.
    pub fn to_json(&self) -> Value {
        match self {
            ElementValue::Null => Value::Null,
            ElementValue::Boolean(b) => Value::Bool(*b),
            ElementValue::Integer(i) => Value::from(*i),
            ElementValue::Unsigned(u) => Value::from(*u),
            ElementValue::Decimal(d) => serde_json::Number::from_f64(*d)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(xsd_float(*d))),
            other => Value::String(other.to_string()),
        }
    }

    /// Value type a value of this variant naturally has
    pub fn natural_type(&self) -> DataType {
        match self {
            ElementValue::Null => DataType::AnyType,
            ElementValue::Boolean(_) => DataType::Boolean,
            ElementValue::Integer(_) => DataType::Long,
            ElementValue::Unsigned(_) => DataType::UnsignedLong,
            ElementValue::Decimal(_) => DataType::Double,
            ElementValue::String(_) => DataType::String,
            ElementValue::DateTime(_) => DataType::DateTime,
            ElementValue::Date(_) => DataType::Date,
            ElementValue::Time(_) => DataType::Time,
            ElementValue::Binary(_) => DataType::Base64Binary,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, ElementValue::Null)
    }

    /// Get the value as a boolean
    pub fn as_bool(&self) -> AasResult<bool> {
        match self {
            ElementValue::Boolean(b) => Ok(*b),
            _ => Err(self.unexpected("boolean")),
        }
    }

    /// Get the value as a signed integer
    pub fn as_i64(&self) -> AasResult<i64> {
        match self {
            ElementValue::Integer(i) => Ok(*i),
            ElementValue::Unsigned(u) => {
                i64::try_from(*u).map_err(|_| AasError::conversion(u, DataType::Long))
            }
            _ => Err(self.unexpected("integer")),
        }
    }

    /// Get the value as a floating point number, widening integers
    pub fn as_f64(&self) -> AasResult<f64> {
        match self {
            ElementValue::Decimal(d) => Ok(*d),
            ElementValue::Integer(i) => Ok(*i as f64),
            ElementValue::Unsigned(u) => Ok(*u as f64),
            _ => Err(self.unexpected("number")),
        }
    }

    /// Get the value as a string slice
    pub fn as_str(&self) -> AasResult<&str> {
        match self {
            ElementValue::String(s) => Ok(s),
            _ => Err(self.unexpected("string")),
        }
    }

    fn unexpected(&self, expected: &str) -> AasError {
        AasError::InvalidData(format!(
            "Expected {}, got {}",
            expected,
            self.natural_type()
        ))
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementValue::Null => Ok(()),
            ElementValue::Boolean(b) => write!(f, "{}", b),
            ElementValue::Integer(i) => write!(f, "{}", i),
            ElementValue::Unsigned(u) => write!(f, "{}", u),
            ElementValue::Decimal(d) => f.write_str(&xsd_float(*d)),
            ElementValue::String(s) => f.write_str(s),
            ElementValue::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            ElementValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            ElementValue::Time(t) => write!(f, "{}", t.format(TIME_FORMAT)),
            ElementValue::Binary(bytes) => f.write_str(&BASE64.encode(bytes)),
        }
    }
}

impl From<bool> for ElementValue {
    fn from(value: bool) -> Self {
        ElementValue::Boolean(value)
    }
}

impl From<i64> for ElementValue {
    fn from(value: i64) -> Self {
        ElementValue::Integer(value)
    }
}

impl From<f64> for ElementValue {
    fn from(value: f64) -> Self {
        ElementValue::Decimal(value)
    }
}

impl From<&str> for ElementValue {
    fn from(value: &str) -> Self {
        ElementValue::String(value.to_string())
    }
}

impl From<String> for ElementValue {
    fn from(value: String) -> Self {
        ElementValue::String(value)
    }
}

fn text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn xsd_float(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        if d > 0.0 { "INF".to_string() } else { "-INF".to_string() }
    } else {
        d.to_string()
    }
}

fn parse_bool(raw: &Value) -> AasResult<bool> {
    match raw {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) if n.as_u64() == Some(1) => Ok(true),
        Value::Number(n) if n.as_u64() == Some(0) => Ok(false),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(AasError::conversion(s, DataType::Boolean)),
        },
        other => Err(AasError::conversion(other, DataType::Boolean)),
    }
}

fn parse_signed(raw: &Value, min: i64, max: i64, data_type: DataType) -> AasResult<ElementValue> {
    let value = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| AasError::conversion(text(raw), data_type))?;

    if value < min || value > max {
        return Err(AasError::conversion(value, data_type));
    }
    Ok(ElementValue::Integer(value))
}

fn parse_unsigned(raw: &Value, max: u64, data_type: DataType) -> AasResult<ElementValue> {
    let value = match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| AasError::conversion(text(raw), data_type))?;

    if value > max {
        return Err(AasError::conversion(value, data_type));
    }
    Ok(ElementValue::Unsigned(value))
}

fn parse_decimal(raw: &Value, data_type: DataType) -> AasResult<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim() {
            "INF" => Some(f64::INFINITY),
            "-INF" => Some(f64::NEG_INFINITY),
            "NaN" => Some(f64::NAN),
            other => other.parse::<f64>().ok().filter(|d| d.is_finite()),
        },
        _ => None,
    }
    .ok_or_else(|| AasError::conversion(text(raw), data_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_integers_from_strings_and_numbers() {
        assert_eq!(
            ElementValue::convert(&json!("42"), DataType::Int).unwrap(),
            ElementValue::Integer(42)
        );
        assert_eq!(
            ElementValue::convert(&json!(-7), DataType::Short).unwrap(),
            ElementValue::Integer(-7)
        );
        assert_eq!(
            ElementValue::convert(&json!("255"), DataType::UnsignedByte).unwrap(),
            ElementValue::Unsigned(255)
        );
    }

    #[test]
    fn test_convert_rejects_out_of_range() {
        assert!(ElementValue::convert(&json!(128), DataType::Byte).is_err());
        assert!(ElementValue::convert(&json!("70000"), DataType::Short).is_err());
        assert!(ElementValue::convert(&json!(-1), DataType::UnsignedInt).is_err());
        assert!(ElementValue::convert(&json!("12.5"), DataType::Int).is_err());
    }

    #[test]
    fn test_convert_boolean_forms() {
        for raw in [json!(true), json!("TRUE"), json!("1"), json!(1)] {
            assert_eq!(
                ElementValue::convert(&raw, DataType::Boolean).unwrap(),
                ElementValue::Boolean(true)
            );
        }
        assert!(ElementValue::convert(&json!("yes"), DataType::Boolean).is_err());
    }

    #[test]
    fn test_convert_decimals() {
        assert_eq!(
            ElementValue::convert(&json!("3.25"), DataType::Double).unwrap(),
            ElementValue::Decimal(3.25)
        );
        let inf = ElementValue::convert(&json!("INF"), DataType::Float).unwrap();
        assert_eq!(inf.as_f64().unwrap(), f64::INFINITY);
        assert_eq!(inf.to_json(), json!("INF"));
        assert!(ElementValue::convert(&json!("fast"), DataType::Decimal).is_err());
    }

    #[test]
    fn test_convert_dates_and_times() {
        let dt = ElementValue::convert(&json!("2020-05-01T12:30:00+02:00"), DataType::DateTime)
            .unwrap();
        assert_eq!(dt.to_json(), json!("2020-05-01T12:30:00+02:00"));

        let date = ElementValue::convert(&json!("2020-05-01"), DataType::Date).unwrap();
        assert_eq!(date.to_string(), "2020-05-01");

        let time = ElementValue::convert(&json!("08:15:00"), DataType::Time).unwrap();
        assert_eq!(time.to_string(), "08:15:00");

        assert!(ElementValue::convert(&json!("yesterday"), DataType::Date).is_err());
    }

    #[test]
    fn test_convert_binary_and_strings() {
        let bin = ElementValue::convert(&json!("aGVsbG8="), DataType::Base64Binary).unwrap();
        assert_eq!(bin, ElementValue::Binary(b"hello".to_vec()));
        assert_eq!(bin.to_json(), json!("aGVsbG8="));

        let s = ElementValue::convert(&json!(17), DataType::String).unwrap();
        assert_eq!(s, ElementValue::String("17".to_string()));

        assert_eq!(
            ElementValue::convert(&json!(null), DataType::Int).unwrap(),
            ElementValue::Null
        );
    }

    #[test]
    fn test_infer() {
        assert_eq!(ElementValue::infer(&json!(5)), ElementValue::Integer(5));
        assert_eq!(ElementValue::infer(&json!(1.5)), ElementValue::Decimal(1.5));
        assert_eq!(ElementValue::infer(&json!(u64::MAX)), ElementValue::Unsigned(u64::MAX));
        assert_eq!(ElementValue::infer(&json!("x")), ElementValue::String("x".into()));
        assert_eq!(
            ElementValue::convert(&json!(false), DataType::AnyType).unwrap(),
            ElementValue::Boolean(false)
        );
    }

    #[test]
    fn test_accessors() {
        let v = ElementValue::Integer(12);
        assert_eq!(v.as_i64().unwrap(), 12);
        assert_eq!(v.as_f64().unwrap(), 12.0);
        assert!(v.as_bool().is_err());
        assert!(v.as_str().is_err());
        assert_eq!(ElementValue::from("abc").as_str().unwrap(), "abc");
    }
}
