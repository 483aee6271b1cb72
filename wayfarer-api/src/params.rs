//! Typed access to the flat name/value parameter list.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use wayfarer_core::car_rental::RENTAL_TIMESTAMP_FORMAT;

use crate::envelope::{HandlerError, Parameter};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Clone)]
pub struct Params {
    values: HashMap<String, Value>,
}

impl Params {
    /// Later duplicates win.
    pub fn from_parameters(parameters: &[Parameter]) -> Self {
        let values = parameters
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect();
        Self { values }
    }

    /// Fails on the first name that is absent.
    pub fn require(&self, names: &[&str]) -> Result<(), HandlerError> {
        match names.iter().find(|name| !self.values.contains_key(**name)) {
            Some(missing) => Err(HandlerError::validation(format!(
                "Missing required parameter: {}",
                missing
            ))),
            None => Ok(()),
        }
    }

    fn get(&self, name: &str) -> Result<&Value, HandlerError> {
        self.values
            .get(name)
            .ok_or_else(|| HandlerError::validation(format!("Missing required parameter: {}", name)))
    }

    pub fn text(&self, name: &str) -> Result<String, HandlerError> {
        Ok(as_text(self.get(name)?))
    }

    /// Absent, null and blank values all read as `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(as_text(value)).filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, HandlerError> {
        match self.get(name)? {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                HandlerError::validation(format!("Invalid parameter value: {} must be a whole number", name))
            }),
            other => as_text(other)
                .trim()
                .parse::<i64>()
                .map_err(|e| HandlerError::validation(format!("Invalid parameter value: {}", e))),
        }
    }

    pub fn date(&self, name: &str) -> Result<NaiveDate, HandlerError> {
        parse_date(&self.text(name)?)
    }

    pub fn optional_date(&self, name: &str) -> Result<Option<NaiveDate>, HandlerError> {
        self.optional_text(name).map(|s| parse_date(&s)).transpose()
    }

    pub fn timestamp(&self, name: &str) -> Result<NaiveDateTime, HandlerError> {
        let text = self.text(name)?;
        NaiveDateTime::parse_from_str(text.trim(), RENTAL_TIMESTAMP_FORMAT)
            .map_err(|_| HandlerError::validation("Invalid date format. Use YYYY-MM-DD HH:MM:SS"))
    }

    /// A JSON parameter, given either as an encoded string or inline.
    pub fn json(&self, name: &str) -> Result<Value, HandlerError> {
        match self.get(name)? {
            Value::String(s) => serde_json::from_str(s).map_err(|_| invalid_json(name)),
            other => Ok(other.clone()),
        }
    }

    pub fn json_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, HandlerError> {
        serde_json::from_value(self.json(name)?).map_err(|_| invalid_json(name))
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, HandlerError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| HandlerError::validation("Invalid date format. Use YYYY-MM-DD"))
}

fn invalid_json(name: &str) -> HandlerError {
    HandlerError::validation(format!("Invalid {} format. Must be valid JSON.", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        let parameters: Vec<Parameter> = serde_json::from_value(value).unwrap();
        Params::from_parameters(&parameters)
    }

    #[test]
    fn test_missing_parameter_is_named() {
        let p = params(json!([{"name": "origin", "value": "JFK"}]));
        let err = p.require(&["origin", "destination", "departure_date"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: destination");
        assert_eq!(err.error_type(), "validation_error");
    }

    #[test]
    fn test_numbers_from_strings_and_numbers() {
        let p = params(json!([
            {"name": "passengers", "value": " 2 "},
            {"name": "flight_id", "value": 7},
            {"name": "guests", "value": "two"}
        ]));
        assert_eq!(p.int("passengers").unwrap(), 2);
        assert_eq!(p.int("flight_id").unwrap(), 7);
        assert_eq!(
            p.int("guests").unwrap_err().to_string(),
            "Invalid parameter value: invalid digit found in string"
        );
    }

    #[test]
    fn test_dates_and_blank_optionals() {
        let p = params(json!([
            {"name": "departure_date", "value": "2030-03-01"},
            {"name": "return_date", "value": ""},
            {"name": "check_in_date", "value": "03/01/2030"}
        ]));
        assert_eq!(p.date("departure_date").unwrap(), NaiveDate::from_ymd_opt(2030, 3, 1).unwrap());
        assert_eq!(p.optional_date("return_date").unwrap(), None);
        assert_eq!(
            p.date("check_in_date").unwrap_err().to_string(),
            "Invalid date format. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn test_json_inline_or_encoded() {
        let p = params(json!([
            {"name": "a", "value": "{\"passengers\": [1, 2]}"},
            {"name": "b", "value": {"passengers": [1]}},
            {"name": "c", "value": "{not json"}
        ]));
        assert_eq!(p.json("a").unwrap()["passengers"], json!([1, 2]));
        assert_eq!(p.json("b").unwrap()["passengers"], json!([1]));
        assert_eq!(p.json("c").unwrap_err().to_string(), "Invalid c format. Must be valid JSON.");
    }
}
