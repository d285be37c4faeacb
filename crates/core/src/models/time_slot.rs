use serde::{Deserialize, Serialize};

/// A raw entry in an availability feed.
///
/// Depending on the backend revision, the availability endpoint answers
/// either with bare time strings (`"09:00"`) or with slot objects carrying
/// an availability flag and a reason (`available`, `booked`, `closed`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotRecord {
    Time(String),
    Detailed {
        time: String,
        #[serde(default)]
        available: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl SlotRecord {
    pub fn time(&self) -> &str {
        match self {
            SlotRecord::Time(time) => time,
            SlotRecord::Detailed { time, .. } => time,
        }
    }

    /// A record without an explicit flag counts as available.
    pub fn is_available(&self) -> bool {
        match self {
            SlotRecord::Time(_) => true,
            SlotRecord::Detailed { available, .. } => available.unwrap_or(true),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SlotRecord::Time(_) => None,
            SlotRecord::Detailed { reason, .. } => reason.as_deref(),
        }
    }
}

/// Normalized slot form used by the booking workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&SlotRecord> for TimeSlot {
    fn from(record: &SlotRecord) -> Self {
        TimeSlot {
            time: record.time().to_string(),
            available: record.is_available(),
            reason: record.reason().map(str::to_string),
        }
    }
}
