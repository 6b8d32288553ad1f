//! Conversions between model values and their SQLite column encodings.

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn to_json<T: Serialize>(value: &T) -> DbErrorResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[track_caller]
pub(crate) fn from_json<T: DeserializeOwned>(column: &str, raw: &str) -> DbErrorResult<T> {
    serde_json::from_str(raw).map_err(|e| DbError::decode(column, e.to_string()))
}

pub(crate) fn date_to_text(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

#[track_caller]
pub(crate) fn text_to_date(column: &str, raw: Option<&str>) -> DbErrorResult<Option<NaiveDate>> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| DbError::decode(column, e.to_string()))
    })
    .transpose()
}

#[track_caller]
pub(crate) fn millis_to_datetime(column: &str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::decode(column, format!("timestamp {} out of range", millis)))
}

#[track_caller]
pub(crate) fn parse_uuid(column: &str, raw: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DbError::decode(column, e.to_string()))
}
