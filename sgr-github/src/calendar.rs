//! GraphQL query and response parsing for the GitHub contribution calendar.
//!
//! The response has the nested shape
//! `data.user.contributionsCollection.contributionCalendar.weeks[].contributionDays[]`.
//! Every link is optional on the wire, so each one is checked and a missing
//! link is reported by name as [`ContribError::MalformedResponse`].

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    day_record::DayRecord,
    error::{ContribError, Result},
    window::QueryWindow,
};

/// Date format of `contributionDays[].date`: "YYYY-MM-DD"
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub const CONTRIBUTIONS_QUERY: &str = r#"query ($user: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $user) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}"#;

/// JSON body `{query, variables: {user, from, to}}` for one calendar request.
pub fn request_body(username: &str, window: &QueryWindow) -> Value {
    json!({
        "query": CONTRIBUTIONS_QUERY,
        "variables": {
            "user": username,
            "from": window.from_iso(),
            "to": window.to_iso(),
        }
    })
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Deserialize)]
struct ContributionCalendar {
    weeks: Option<Vec<Week>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Option<Vec<ContributionDay>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionDay {
    date: String,
    contribution_count: u32,
}

fn missing(path: &str, errors: &Option<Value>) -> ContribError {
    match errors {
        Some(errors) => ContribError::MalformedResponse(format!(
            "missing {} ({})",
            path,
            describe_errors(errors)
        )),
        None => ContribError::MalformedResponse(format!("missing {}", path)),
    }
}

/// Render a GraphQL `errors` member for a log line or error message.
///
/// An array of `{message}` objects is joined by "; ", anything else is
/// serialized as JSON.
fn describe_errors(errors: &Value) -> String {
    if let Some(list) = errors.as_array() {
        let messages: Vec<&str> = list
            .iter()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect();
        if !messages.is_empty() && messages.len() == list.len() {
            return messages.join("; ");
        }
    }
    errors.to_string()
}

/// Extract the remote error payload of a failed request, or "unknown".
pub fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("errors").map(describe_errors))
        .unwrap_or_else(|| String::from("unknown"))
}

/// Parse a calendar response body into a chronological sequence of days.
pub fn parse_calendar(body: &str) -> Result<Vec<DayRecord>> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| ContribError::MalformedResponse(format!("invalid JSON body: {}", e)))?;
    let errors = response.errors;
    let weeks = response
        .data
        .ok_or_else(|| missing("data", &errors))?
        .user
        .ok_or_else(|| missing("data.user", &errors))?
        .contributions_collection
        .ok_or_else(|| missing("data.user.contributionsCollection", &errors))?
        .contribution_calendar
        .ok_or_else(|| {
            missing(
                "data.user.contributionsCollection.contributionCalendar",
                &errors,
            )
        })?
        .weeks
        .ok_or_else(|| {
            missing(
                "data.user.contributionsCollection.contributionCalendar.weeks",
                &errors,
            )
        })?;

    let mut days: Vec<DayRecord> = Vec::new();
    for (week_index, week) in weeks.into_iter().enumerate() {
        let contribution_days = week.contribution_days.ok_or_else(|| {
            missing(
                &format!("weeks[{}].contributionDays", week_index),
                &errors,
            )
        })?;
        for day in contribution_days {
            let date = NaiveDate::parse_from_str(&day.date, DAY_FORMAT).map_err(|e| {
                ContribError::MalformedResponse(format!("bad date {:?}: {}", day.date, e))
            })?;
            days.push(DayRecord::new(date, day.contribution_count));
        }
    }
    if days.is_empty() {
        warn!("Contribution calendar contained no days");
    }
    days.sort_by_key(|d| d.date);
    Ok(days)
}
