use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr, NoneAsEmptyString};
use validify::{schema_err, schema_validation, Validate, ValidationErrors};

/// Maximum length of a single timesheet entry, in hours.
pub const MAX_DURATION_HOURS: i64 = 24;

/// Main model for the `timesheets` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: i32,
    pub employee_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub summary: Option<String>,
}

/// A timesheet joined with info about its employee.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDisplay {
    pub id: i32,
    pub employee_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub summary: Option<String>,
    pub full_name: String,
    pub department: String,
}

/// Timesheet fields as submitted through the new timesheet form.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[validate(Self::validate_schema)]
pub struct TimesheetInsert {
    #[serde_as(as = "DisplayFromStr")]
    pub employee_id: i32,

    #[serde(deserialize_with = "form_datetime")]
    pub start_time: NaiveDateTime,

    #[serde(deserialize_with = "form_datetime")]
    pub end_time: NaiveDateTime,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub summary: Option<String>,
}

impl TimesheetInsert {
    #[schema_validation]
    fn validate_schema(&self) -> Result<(), ValidationErrors> {
        if self.end_time <= self.start_time {
            schema_err!("end_time", "End time must be after start time");
        } else if self.end_time - self.start_time > Duration::hours(MAX_DURATION_HOURS) {
            schema_err!("end_time", "Timesheet duration cannot exceed 24 hours");
        }
    }
}

/// Formats accepted for date-time form fields. Browsers omit seconds from
/// `datetime-local` inputs unless a step is set.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn form_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_datetime(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid date-time '{value}'"))
    })
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}
