//! Lead data models: the wire records returned by `GET /api/leads` and the
//! view records the dashboard renders.
//!
//! The backend speaks snake_case and numeric ids; the view side uses a
//! string id (row keys, substring search) and its own field names. The
//! `From<LeadRecord>` impl is the single place that translation happens.
//!
//! The three category enums serialize as the backend's display strings
//! ("Cold Call", not "ColdCall"). Deserialization coerces any out-of-set
//! value to `Unknown` instead of failing: the listing endpoint is decoded
//! fail-soft, and one bad row must not blank the whole page.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Where a lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Referral,
    Website,
    ColdCall,
    Event,
    /// Catch-all for wire values outside the known set. Rendered as-is,
    /// never offered as a filter and never sent back to the server.
    Unknown,
}

/// How interested the lead is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    Low,
    Medium,
    High,
    Unknown,
}

/// Pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    New,
    Contacted,
    Qualified,
    Closed,
    Unknown,
}

impl Source {
    /// Every selectable source, in menu order.
    pub const ALL: [Source; 4] = [
        Source::Referral,
        Source::Website,
        Source::ColdCall,
        Source::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Referral => "Referral",
            Source::Website => "Website",
            Source::ColdCall => "Cold Call",
            Source::Event => "Event",
            Source::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Source> {
        Source::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl Interest {
    pub const ALL: [Interest; 3] = [Interest::Low, Interest::Medium, Interest::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Low => "Low",
            Interest::Medium => "Medium",
            Interest::High => "High",
            Interest::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Interest> {
        Interest::ALL.into_iter().find(|i| i.as_str() == label)
    }
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::New,
        Status::Contacted,
        Status::Qualified,
        Status::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Contacted => "Contacted",
            Status::Qualified => "Qualified",
            Status::Closed => "Closed",
            Status::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Source::from_label(&label).unwrap_or(Source::Unknown))
    }
}

impl Serialize for Interest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Interest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Interest::from_label(&label).unwrap_or(Interest::Unknown))
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Status::from_label(&label).unwrap_or(Status::Unknown))
    }
}

/// One lead exactly as the backend serializes it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeadRecord {
    pub id: i64,
    pub name: String,
    pub contact_information: String,
    pub source: Source,
    pub interest: Interest,
    pub status: Status,
    pub assigned_salesperson_name: String,
    #[serde(default)]
    pub salesperson_id: Option<i64>,
}

/// One lead as the dashboard renders it. Read-only on this side; leads are
/// only ever created server-side (CSV import).
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub contact_info: String,
    pub source: Source,
    pub interest_level: Interest,
    pub status: Status,
    pub assigned_salesperson: String,
    pub salesperson_id: Option<i64>,
}

impl From<LeadRecord> for Lead {
    fn from(record: LeadRecord) -> Self {
        Lead {
            id: record.id.to_string(),
            name: record.name,
            contact_info: record.contact_information,
            source: record.source,
            interest_level: record.interest,
            status: record.status,
            assigned_salesperson: record.assigned_salesperson_name,
            salesperson_id: record.salesperson_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_strings_round_trip() {
        let json = serde_json::to_string(&Source::ColdCall).unwrap();
        assert_eq!(json, "\"Cold Call\"");
        let back: Source = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Source::ColdCall);
    }

    #[test]
    fn out_of_set_enum_values_coerce_to_unknown() {
        let source: Source = serde_json::from_str("\"Carrier Pigeon\"").unwrap();
        assert_eq!(source, Source::Unknown);
        let status: Status = serde_json::from_str("\"Reopened\"").unwrap();
        assert_eq!(status, Status::Unknown);
    }

    #[test]
    fn record_maps_to_view_lead_field_by_field() {
        let record: LeadRecord = serde_json::from_str(
            r#"{"id":1,"name":"A","contact_information":"a@x.com","source":"Referral",
                "interest":"High","status":"New","assigned_salesperson_name":"Bob",
                "salesperson_id":7}"#,
        )
        .unwrap();
        let lead = Lead::from(record);
        assert_eq!(lead.id, "1");
        assert_eq!(lead.name, "A");
        assert_eq!(lead.contact_info, "a@x.com");
        assert_eq!(lead.source, Source::Referral);
        assert_eq!(lead.interest_level, Interest::High);
        assert_eq!(lead.status, Status::New);
        assert_eq!(lead.assigned_salesperson, "Bob");
        assert_eq!(lead.salesperson_id, Some(7));
    }

    #[test]
    fn missing_salesperson_id_is_none() {
        let record: LeadRecord = serde_json::from_str(
            r#"{"id":2,"name":"B","contact_information":"b@x.com","source":"Event",
                "interest":"Low","status":"Closed","assigned_salesperson_name":""}"#,
        )
        .unwrap();
        assert_eq!(Lead::from(record).salesperson_id, None);
    }

    #[test]
    fn leads_response_is_a_two_element_tuple() {
        let json = r#"[[{"id":1,"name":"A","contact_information":"a@x.com",
            "source":"Website","interest":"Medium","status":"Contacted",
            "assigned_salesperson_name":"Bob","salesperson_id":null}],42]"#;
        let (records, total): (Vec<LeadRecord>, u64) = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(total, 42);
    }
}
