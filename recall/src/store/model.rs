use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

pub(crate) const SESSION_FILE_VERSION: u32 = 1;

/// Opaque, stable identifier of a query session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct SessionId(String);

impl SessionId {
    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted record of a past query interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Session {
    #[serde(alias = "_id")]
    id: SessionId,
    title: String,
    #[serde(alias = "createdAt")]
    created_at: DateTime<Utc>,
}

impl Session {
    #[cfg(test)]
    pub(crate) fn new(
        id: SessionId,
        title: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            created_at,
        }
    }

    pub(crate) fn id(&self) -> &SessionId {
        &self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    /// Creation date in the local time zone, e.g. `3/14/2024`.
    pub(crate) fn created_date_label(&self) -> String {
        format_date(self.created_at.with_timezone(&Local))
    }
}

fn format_date<Tz>(date: DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: fmt::Display,
{
    date.format("%-m/%-d/%Y").to_string()
}

/// On-disk session collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SessionFile {
    pub(crate) version: u32,
    #[serde(default)]
    pub(crate) sessions: Vec<Session>,
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            version: SESSION_FILE_VERSION,
            sessions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::{Session, SessionId, format_date};

    #[test]
    fn given_web_backend_payload_when_deserialized_then_aliases_are_accepted()
    {
        let json = serde_json::json!({
            "_id": "65f1c0ffee",
            "title": "Quarterly revenue by region",
            "createdAt": "2024-03-14T09:30:00Z"
        });

        let session: Session =
            serde_json::from_value(json).expect("should deserialize");

        assert_eq!(session.id(), &SessionId::from("65f1c0ffee"));
        assert_eq!(session.title(), "Quarterly revenue by region");
        assert_eq!(session.created_at.timestamp(), 1_710_408_600);
    }

    #[test]
    fn given_utc_date_when_formatted_then_uses_month_day_year() {
        let date: DateTime<Utc> = "2024-03-04T23:00:00Z"
            .parse()
            .expect("date should parse");

        assert_eq!(format_date(date), "3/4/2024");
    }

    #[test]
    fn given_session_id_when_displayed_then_raw_value_is_printed() {
        let id = SessionId::from(String::from("abc"));
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_str(), "abc");
    }
}
