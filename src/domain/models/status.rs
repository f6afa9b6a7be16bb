//! Publication-status history attached to a definition.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const PSO_PREFIX: &str = "pso:";
const PSO_NAMESPACE: &str = "http://purl.org/spar/pso/";

/// Publication status of a definition, from the Publishing Status Ontology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Draft,
    FinalDraft,
    Submitted,
    Published,
    Other(String),
}

impl PublicationStatus {
    /// Parse a status tag given as `draft`, `pso:draft` or the full PSO IRI.
    pub fn parse(tag: &str) -> Self {
        let trimmed = tag.trim();
        let local = trimmed
            .strip_prefix(PSO_NAMESPACE)
            .or_else(|| trimmed.strip_prefix(PSO_PREFIX))
            .unwrap_or(trimmed);

        match local.to_ascii_lowercase().as_str() {
            "draft" => Self::Draft,
            "final-draft" | "final_draft" | "finaldraft" => Self::FinalDraft,
            "submitted" => Self::Submitted,
            "published" => Self::Published,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Submitted and published definitions are expected to resolve.
    pub const fn expects_resolution(&self) -> bool {
        matches!(self, Self::Submitted | Self::Published)
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "pso:draft"),
            Self::FinalDraft => write!(f, "pso:final-draft"),
            Self::Submitted => write!(f, "pso:submitted"),
            Self::Published => write!(f, "pso:published"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

/// One time-stamped status value. An unset `end` means the interval is ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: PublicationStatus,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl StatusRecord {
    pub const fn new(
        status: PublicationStatus,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        Self { status, start, end }
    }

    /// Build a record from raw interval text.
    ///
    /// A bound that is present but unparsable is kept: an unparsable start
    /// becomes the earliest representable instant, an unparsable end the
    /// latest, so the record still counts when deciding whether it is active.
    pub fn from_raw(status: PublicationStatus, start: Option<&str>, end: Option<&str>) -> Self {
        let start = start.map(|raw| {
            parse_instant(raw).unwrap_or_else(|| {
                tracing::warn!(raw, %status, "unparsable status start, using earliest instant");
                DateTime::<Utc>::MIN_UTC
            })
        });
        let end = end.map(|raw| {
            parse_instant(raw).unwrap_or_else(|| {
                tracing::warn!(raw, %status, "unparsable status end, using latest instant");
                DateTime::<Utc>::MAX_UTC
            })
        });
        Self { status, start, end }
    }

    /// A record is active when it has started and has not ended.
    pub const fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }
}

impl fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => write!(f, " ({} to {})", start.to_rfc3339(), end.to_rfc3339()),
            (Some(start), None) => write!(f, " (since {})", start.to_rfc3339()),
            (None, Some(end)) => write!(f, " (until {})", end.to_rfc3339()),
            (None, None) => Ok(()),
        }
    }
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a list of statuses the way report comments show them: `[a, b]`.
pub fn format_statuses(records: &[StatusRecord]) -> String {
    let parts: Vec<String> = records.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
