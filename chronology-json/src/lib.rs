//! JSON records and options to chronology `Event`s and `ChronologyOptions`.

use chronology_core::{parse_date, ChronologyError, ChronologyOptions, Event};
use serde::Deserialize;
use serde_json::Value;

/// Load events from a JSON string holding an array of `{ "date", "body" }` records.
pub fn load_events_str(data_json: &str) -> Result<Vec<Event>, ChronologyError> {
    let value: Value =
        serde_json::from_str(data_json).map_err(|err| ChronologyError::Parse(err.to_string()))?;
    load_events_value(&value)
}

/// Load events from a `serde_json::Value`.
///
/// Dataset order is preserved, since record indices identify the selected event.
pub fn load_events_value(data: &Value) -> Result<Vec<Event>, ChronologyError> {
    let records = data.as_array().ok_or_else(|| {
        ChronologyError::Parse(format!("Expected an array of records, received {}", kind(data)))
    })?;

    if records.is_empty() {
        return Err(ChronologyError::EmptyDataset);
    }

    let events = records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = events.len(), "loaded chronology records");
    Ok(events)
}

/// Load options from a JSON string. Unknown keys are ignored.
pub fn load_options_str(options_json: &str) -> Result<ChronologyOptions, ChronologyError> {
    let value: Value = serde_json::from_str(options_json)
        .map_err(|err| ChronologyError::Parse(err.to_string()))?;
    load_options_value(&value)
}

/// Load options from a `serde_json::Value`; `null` yields the defaults.
pub fn load_options_value(options: &Value) -> Result<ChronologyOptions, ChronologyError> {
    if options.is_null() {
        return Ok(ChronologyOptions::default());
    }
    ChronologyOptions::deserialize(options)
        .map_err(|err| ChronologyError::Parse(format!("Invalid options: {err}")))
}

fn parse_record(index: usize, record: &Value) -> Result<Event, ChronologyError> {
    let Some(fields) = record.as_object() else {
        return Err(ChronologyError::Parse(format!(
            "Record {index} is {}, expected an object",
            kind(record)
        )));
    };

    let date = match fields.get("date") {
        Some(Value::String(raw)) => parse_date(raw).ok_or_else(|| ChronologyError::MalformedDate {
            index,
            value: raw.clone(),
        })?,
        other => {
            return Err(ChronologyError::MalformedDate {
                index,
                value: other.map(Value::to_string).unwrap_or_default(),
            })
        }
    };

    let body = match fields.get("body") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    Ok(Event { date, body })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn records_keep_dataset_order() {
        let events = load_events_value(&json!([
            { "date": "2020-06-01", "body": "later" },
            { "date": "2020-01-01", "body": "earlier" }
        ]))
        .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        assert_eq!(events[1].body, "earlier");
    }

    #[test]
    fn malformed_date_reports_index_and_value() {
        let err = load_events_str(r#"[{"date":"2020-01-01","body":"ok"},{"date":"01/02/2020"}]"#)
            .unwrap_err();
        assert_eq!(
            err,
            ChronologyError::MalformedDate {
                index: 1,
                value: "01/02/2020".to_string()
            }
        );
    }

    #[test]
    fn missing_date_is_malformed() {
        let err = load_events_value(&json!([{ "body": "no date" }])).unwrap_err();
        assert!(matches!(err, ChronologyError::MalformedDate { index: 0, .. }));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        assert_eq!(load_events_str("[]"), Err(ChronologyError::EmptyDataset));
    }

    #[test]
    fn non_array_input_is_a_parse_error() {
        let err = load_events_value(&json!({ "date": "2020-01-01" })).unwrap_err();
        assert!(matches!(err, ChronologyError::Parse(message) if message.contains("an object")));
        assert!(matches!(
            load_events_str("not json"),
            Err(ChronologyError::Parse(_))
        ));
    }

    #[test]
    fn missing_body_becomes_empty_text() {
        let events = load_events_value(&json!([{ "date": "2020-01-01" }])).unwrap();
        assert_eq!(events[0].body, "");
    }

    #[test]
    fn options_accept_camel_case_and_null() {
        let options = load_options_str(r#"{"detailsPanelWidth": 320, "fontSize": "12px"}"#).unwrap();
        assert_eq!(options.details_panel_width, Some(320.0));
        assert_eq!(options.font_size.as_deref(), Some("12px"));

        assert_eq!(
            load_options_value(&Value::Null).unwrap(),
            ChronologyOptions::default()
        );
    }

    #[test]
    fn options_with_bad_dates_are_rejected() {
        let err = load_options_str(r#"{"start": "yesterday"}"#).unwrap_err();
        assert!(matches!(err, ChronologyError::Parse(_)));
    }
}
