use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use ego_tree::NodeRef;
use scraper::Node;

use super::nav::{Cursor, NodeExt};
use crate::config::Markers;
use crate::error::DateError;

/// Year assumed when the caller passes `0`.
pub const DEFAULT_YEAR: i32 = 2023;
/// Set times are pinned to 16:00 local.
pub const SET_HOUR: u32 = 16;
/// UTC-8, no daylight saving.
const UTC_OFFSET_SECS: i32 = -8 * 3600;

const MONTHS: [(&str, u32); 12] = [
    ("JANUARY", 1),
    ("FEBRUARY", 2),
    ("MARCH", 3),
    ("APRIL", 4),
    ("MAY", 5),
    ("JUNE", 6),
    ("JULY", 7),
    ("AUGUST", 8),
    ("SEPTEMBER", 9),
    ("OCTOBER", 10),
    ("NOVEMBER", 11),
    ("DECEMBER", 12),
];

pub fn festival_tz() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECS).expect("UTC-8 is within the +/-24h offset range")
}

/// Read the date off a schedule panel.
///
/// `Ok(None)` means the panel was well-formed but named a month (or day) that
/// does not exist; cards under it get no set time.
pub fn normalize(
    panel: NodeRef<'_, Node>,
    year: i32,
    markers: &Markers,
) -> Result<Option<DateTime<FixedOffset>>, DateError> {
    if !panel.has_class(&markers.panel_class) {
        return Err(DateError::Structure("node is not a schedule panel"));
    }

    let date_p = Cursor::at(panel).first_child().next_sibling();
    let date_node = date_p
        .node()
        .ok_or(DateError::Structure("panel has no date paragraph"))?;
    if !date_node.is_tag("p") {
        return Err(DateError::Structure("date node is not a paragraph"));
    }
    if !date_node.has_class(&markers.date_class) {
        return Err(DateError::Structure("date paragraph lacks date class"));
    }

    let phrase = date_p
        .first_child()
        .text()
        .ok_or(DateError::Structure("date paragraph has no text"))?;

    parse_phrase(phrase, year)
}

/// Parse `"FRIDAY, JUNE 14"` style phrases into 16:00 UTC-8 on that day.
pub fn parse_phrase(phrase: &str, year: i32) -> Result<Option<DateTime<FixedOffset>>, DateError> {
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    let [_weekday, month, day, ..] = tokens.as_slice() else {
        return Err(DateError::TooFewTokens(phrase.to_string()));
    };

    let day: u32 = day
        .parse()
        .map_err(|_| DateError::InvalidDay(day.to_string()))?;

    let Some(month) = month_number(month) else {
        return Ok(None);
    };

    let year = if year == 0 { DEFAULT_YEAR } else { year };

    Ok(NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(SET_HOUR, 0, 0))
        .and_then(|dt| festival_tz().from_local_datetime(&dt).single()))
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(m, _)| *m == name)
        .map(|(_, n)| *n)
}
