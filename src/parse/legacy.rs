use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use tracing::warn;

use crate::error::{ScanError, ScanResult};
use crate::types::{NormalizedAccessRecord, Party, ResidentInfo, SourceFormat};

// Field patterns
//------------------------------------------------------------------------------

// Ordered extractions over the legacy human-readable export. The resident
// block precedes the visitor block, so the first unqualified "Tél:" belongs
// to the resident.
static RESIDENT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Créé par \(Résident\):\s*\n\s*Nom:\s*(.+)").unwrap());

static RESIDENT_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Tél:\s*(.+)").unwrap());

static RESIDENT_APARTMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Appartement:\s*(.+)").unwrap());

static VISITOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Pour le visiteur:\s*\n\s*Nom:\s*(.+)").unwrap());

static VISITOR_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Pour le visiteur:[\s\S]*?Tél:\s*(.+)").unwrap());

static CREATED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Créé le:\s*(.+)").unwrap());

static EXPIRES_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Expire le:\s*(.+)").unwrap());

// "<day> <month-name> <year> à <hour>:<minute>"
static LONG_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\s+(\w+)\s+(\d{4})\s+à\s+(\d{1,2}):(\d{2})").unwrap());

// Date fallback
//------------------------------------------------------------------------------

/// How far the date normalization had to degrade. Worst of the two
/// timestamps; never fails the record, but callers can distinguish a lossy
/// parse from an exact one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateFallback {
    /// Long-form date parsed cleanly through the month table.
    None,
    /// Month table missed; a generic timestamp reinterpretation succeeded.
    Heuristic,
    /// Nothing parsed; current wall-clock time substituted.
    WallClock,
}

/// Legacy parse result: the record plus the date-normalization grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyParse {
    pub record: NormalizedAccessRecord,
    pub date_fallback: DateFallback,
}

// Parsing
//------------------------------------------------------------------------------

/// Parses the legacy human-readable pass text (both marker substrings
/// already confirmed by the classifier).
///
/// Resident name, visitor name and both date lines are required; anything
/// else defaults to the empty string when absent. A missing required field
/// fails with [`ScanError::MalformedRecord`]; no value is guessed.
pub fn parse_legacy_record(text: &str) -> ScanResult<LegacyParse> {
    parse_legacy_record_at(text, Utc::now())
}

pub(crate) fn parse_legacy_record_at(
    text: &str,
    now: DateTime<Utc>,
) -> ScanResult<LegacyParse> {
    let resident_name = require(&RESIDENT_NAME, text, "resident name")?;
    let visitor_name = require(&VISITOR_NAME, text, "visitor name")?;
    let created_text = require(&CREATED_DATE, text, "creation date")?;
    let expires_text = require(&EXPIRES_DATE, text, "expiry date")?;

    let resident_phone = capture(&RESIDENT_PHONE, text).unwrap_or_default();
    let resident_apartment = capture(&RESIDENT_APARTMENT, text).unwrap_or_default();
    let visitor_phone = capture(&VISITOR_PHONE, text).unwrap_or_default();

    let (created_at, created_fb) = normalize_date(&created_text, now);
    let (expires_at, expires_fb) = normalize_date(&expires_text, now);

    Ok(LegacyParse {
        record: NormalizedAccessRecord {
            visitor: Party { name: visitor_name, phone: visitor_phone },
            resident: ResidentInfo {
                name: resident_name,
                phone: resident_phone,
                apartment: resident_apartment,
            },
            created_at,
            expires_at,
            source_format: SourceFormat::LegacyText,
        },
        date_fallback: created_fb.max(expires_fb),
    })
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim().to_owned())
}

fn require(re: &Regex, text: &str, what: &str) -> ScanResult<String> {
    capture(re, text)
        .ok_or_else(|| ScanError::MalformedRecord(format!("pass text is missing the {what}")))
}

// Date normalization
//------------------------------------------------------------------------------

fn normalize_date(raw: &str, now: DateTime<Utc>) -> (String, DateFallback) {
    if let Some(ts) = structured_date(raw) {
        return (format_utc_iso(ts), DateFallback::None);
    }
    if let Some(ts) = reparse_generic(raw) {
        warn!(raw, "date text needed generic reinterpretation");
        return (format_utc_iso(ts), DateFallback::Heuristic);
    }
    warn!(raw, "unreadable date text, substituting current time");
    (format_utc_iso(now), DateFallback::WallClock)
}

fn structured_date(raw: &str) -> Option<DateTime<Utc>> {
    let caps = LONG_DATE.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    let hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "janvier" => 1,
        "février" => 2,
        "mars" => 3,
        "avril" => 4,
        "mai" => 5,
        "juin" => 6,
        "juillet" => 7,
        "août" => 8,
        "septembre" => 9,
        "octobre" => 10,
        "novembre" => 11,
        "décembre" => 12,
        _ => return None,
    };
    Some(month)
}

fn reparse_generic(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

fn format_utc_iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
