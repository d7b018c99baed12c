// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use chrono::NaiveDate;

use crate::datetime::{date_key, parse_date_key, parse_time};

/// A scheduled piece of social media content.
///
/// This is the sole persisted entity: the whole collection is written to a
/// single JSON snapshot, see [`crate::ContentStore`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentEntry {
    /// Opaque unique identifier, assigned at creation and never changed.
    pub id: String,

    /// Display title, non-empty.
    pub title: String,

    /// Scheduled date as a date-key (`YYYY-MM-DD`).
    pub date: String,

    /// Scheduled time of day (`HH:MM`, 24h).
    pub time: String,

    /// Target platform.
    pub platform: Platform,

    /// Kind of content.
    #[serde(rename = "type")]
    pub kind: ContentType,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContentEntry {
    /// The hour component of `time`, if it parses.
    pub fn hour(&self) -> Option<u32> {
        use chrono::Timelike;
        parse_time(&self.time).map(|t| t.hour())
    }
}

/// Target platform for a content entry.
///
/// Display name, brand color and icon are static metadata of the variant,
/// not persisted per entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "lowercase"))]
pub enum Platform {
    #[default]
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

impl Platform {
    /// All platforms, in form/select order.
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
    ];

    /// Human-facing name, as rendered in details and CSV exports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
        }
    }

    /// Brand color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Platform::Facebook => "#1877f2",
            Platform::Instagram => "#e4405f",
            Platform::Twitter => "#1da1f2",
            Platform::Linkedin => "#0a66c2",
        }
    }

    /// Icon reference.
    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Facebook => "fab fa-facebook-f",
            Platform::Instagram => "fab fa-instagram",
            Platform::Twitter => "fab fa-twitter",
            Platform::Linkedin => "fab fa-linkedin-in",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of content entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "lowercase"))]
pub enum ContentType {
    #[default]
    Post,
    Story,
    Reel,
    Video,
}

impl ContentType {
    /// All content types, in form/select order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Post,
        ContentType::Story,
        ContentType::Reel,
        ContentType::Video,
    ];

    /// Human-facing name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Post => "Post",
            ContentType::Story => "Story",
            ContentType::Reel => "Reel",
            ContentType::Video => "Video",
        }
    }

    /// Icon reference.
    pub fn icon(&self) -> &'static str {
        match self {
            ContentType::Post => "fas fa-file-alt",
            ContentType::Story => "fas fa-bolt",
            ContentType::Reel => "fas fa-film",
            ContentType::Video => "fas fa-video",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Draft for a content entry, used for creating and editing.
///
/// Fields mirror the entry form: free-text fields stay strings until
/// [`EntryDraft::validate`] checks them.
#[derive(Debug, Default, Clone)]
pub struct EntryDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub platform: Platform,
    pub kind: ContentType,
    pub description: String,
}

impl EntryDraft {
    /// A fresh draft defaulting to the given date at 12:00.
    pub fn default_at(today: NaiveDate) -> Self {
        Self {
            date: date_key(today),
            time: "12:00".to_string(),
            ..Self::default()
        }
    }

    /// A draft pre-filled from an existing entry.
    pub fn from_entry(entry: &ContentEntry) -> Self {
        Self {
            title: entry.title.clone(),
            date: entry.date.clone(),
            time: entry.time.clone(),
            platform: entry.platform,
            kind: entry.kind,
            description: entry.description.clone().unwrap_or_default(),
        }
    }

    /// Checks that the draft can become a valid entry.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty");
        }
        if parse_date_key(&self.date).is_none() {
            return Err("Invalid date, expected YYYY-MM-DD");
        }
        if parse_time(&self.time).is_none() {
            return Err("Invalid time, expected HH:MM");
        }
        Ok(())
    }

    /// Builds an entry with the given id. Call [`EntryDraft::validate`] first.
    pub fn into_entry(self, id: String) -> ContentEntry {
        ContentEntry {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            platform: self.platform,
            kind: self.kind,
            description: match self.description.is_empty() {
                true => None,
                false => Some(self.description),
            },
        }
    }
}

/// Generates a fresh opaque entry id.
pub fn new_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn draft_defaults_to_noon_today() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let draft = EntryDraft::default_at(today);
        assert_eq!(draft.date, "2025-01-05");
        assert_eq!(draft.time, "12:00");
        assert!(draft.title.is_empty());
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut draft = EntryDraft::default_at(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert!(draft.validate().is_err());
        draft.title = "Launch".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_date_and_time() {
        let mut draft = EntryDraft {
            title: "Launch".to_string(),
            date: "2025-13-01".to_string(),
            time: "12:00".to_string(),
            ..EntryDraft::default()
        };
        assert!(draft.validate().is_err());

        draft.date = "2025-01-05".to_string();
        draft.time = "25:00".to_string();
        assert!(draft.validate().is_err());

        draft.time = "23:59".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn empty_description_becomes_none() {
        let draft = EntryDraft {
            title: "Launch".to_string(),
            date: "2025-01-05".to_string(),
            time: "09:00".to_string(),
            ..EntryDraft::default()
        };
        let entry = draft.into_entry(new_entry_id());
        assert_eq!(entry.description, None);
    }

    #[test]
    fn entry_survives_json_round_trip() {
        let entry = ContentEntry {
            id: new_entry_id(),
            title: "Launch".to_string(),
            date: "2025-01-05".to_string(),
            time: "09:00".to_string(),
            platform: Platform::Facebook,
            kind: ContentType::Post,
            description: Some("Product launch".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ContentEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let entry = ContentEntry {
            id: "a".to_string(),
            title: "Launch".to_string(),
            date: "2025-01-05".to_string(),
            time: "09:00".to_string(),
            platform: Platform::Instagram,
            kind: ContentType::Reel,
            description: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"reel""#));
        assert!(json.contains(r#""platform":"instagram""#));
    }
}
