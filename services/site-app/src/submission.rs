//! Submission form schema and client-side validation
//!
//! A [`SubmissionRecord`] holds the raw string values of one form
//! interaction. [`validate`] is pure: it never touches the record and
//! returns one message per failing field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, Serializer};

/// Hosts a project video link must point at (matched as substrings of the
/// lowercased link).
pub const ALLOWED_VIDEO_HOSTS: [&str; 3] = ["drive.google.com", "youtube.com", "youtu.be"];

/// Inclusive digit-count bounds for a WhatsApp number once formatting is
/// stripped.
pub const WHATSAPP_MIN_DIGITS: usize = 10;
pub const WHATSAPP_MAX_DIGITS: usize = 15;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A named field of a submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    EmailAddress,
    TeamName,
    ProjectTitle,
    TeamLeaderEmail,
    TeamLeaderWhatsApp,
    ProjectVideoLink,
    ProjectDescription,
    PptLink,
    ExtraAssetsLink,
}

/// The rule a field's value is checked against once it is non-blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Text,
    Email,
    WhatsApp,
    VideoLink,
}

impl Field {
    /// JSON key sent to the spreadsheet endpoint
    pub fn key(self) -> &'static str {
        match self {
            Field::EmailAddress => "emailAddress",
            Field::TeamName => "teamName",
            Field::ProjectTitle => "projectTitle",
            Field::TeamLeaderEmail => "teamLeaderEmail",
            Field::TeamLeaderWhatsApp => "teamLeaderWhatsApp",
            Field::ProjectVideoLink => "projectVideoLink",
            Field::ProjectDescription => "projectDescription",
            Field::PptLink => "pptLink",
            Field::ExtraAssetsLink => "extraAssetsLink",
        }
    }

    /// Human-readable label, also used in "required" messages
    pub fn label(self) -> &'static str {
        match self {
            Field::EmailAddress => "Email address",
            Field::TeamName => "Team name",
            Field::ProjectTitle => "Project title",
            Field::TeamLeaderEmail => "Team leader email",
            Field::TeamLeaderWhatsApp => "Team leader WhatsApp number",
            Field::ProjectVideoLink => "Project video link",
            Field::ProjectDescription => "Project description",
            Field::PptLink => "Presentation (PPT) link",
            Field::ExtraAssetsLink => "Extra assets link",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::EmailAddress | Field::TeamLeaderEmail => "you@example.com",
            Field::TeamName => "Circuit Breakers",
            Field::ProjectTitle => "Autonomous line follower",
            Field::TeamLeaderWhatsApp => "+91 98765 43210",
            Field::ProjectVideoLink => "https://youtu.be/...",
            Field::ProjectDescription => "What did you build, and how?",
            Field::PptLink | Field::ExtraAssetsLink => "https://drive.google.com/...",
        }
    }

    /// HTML input type for the field's control
    pub fn input_type(self) -> &'static str {
        match self.rule() {
            FieldRule::Email => "email",
            FieldRule::WhatsApp => "tel",
            FieldRule::VideoLink => "url",
            FieldRule::Text => match self {
                Field::PptLink | Field::ExtraAssetsLink => "url",
                _ => "text",
            },
        }
    }

    /// Whether the field is rendered as a multi-line textarea
    pub fn is_multiline(self) -> bool {
        self == Field::ProjectDescription
    }

    pub fn rule(self) -> FieldRule {
        match self {
            Field::EmailAddress | Field::TeamLeaderEmail => FieldRule::Email,
            Field::TeamLeaderWhatsApp => FieldRule::WhatsApp,
            Field::ProjectVideoLink => FieldRule::VideoLink,
            _ => FieldRule::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which form a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Team registration: six fields
    Registration,
    /// Final project submission: registration fields plus description and asset links
    ProjectSubmission,
}

const REGISTRATION_FIELDS: [Field; 6] = [
    Field::EmailAddress,
    Field::TeamName,
    Field::ProjectTitle,
    Field::TeamLeaderEmail,
    Field::TeamLeaderWhatsApp,
    Field::ProjectVideoLink,
];

const PROJECT_SUBMISSION_FIELDS: [Field; 9] = [
    Field::EmailAddress,
    Field::TeamName,
    Field::ProjectTitle,
    Field::ProjectDescription,
    Field::TeamLeaderEmail,
    Field::TeamLeaderWhatsApp,
    Field::ProjectVideoLink,
    Field::PptLink,
    Field::ExtraAssetsLink,
];

impl FormVariant {
    /// Fields of this variant, in display order. All of them are required.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormVariant::Registration => &REGISTRATION_FIELDS,
            FormVariant::ProjectSubmission => &PROJECT_SUBMISSION_FIELDS,
        }
    }
}

/// Raw values of one form interaction, keyed by field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    variant: FormVariant,
    values: BTreeMap<Field, String>,
}

impl SubmissionRecord {
    /// A record with every field of `variant` set to the empty string
    pub fn empty(variant: FormVariant) -> Self {
        let values = variant
            .fields()
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        Self { variant, values }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Current value of `field`; empty for fields outside the variant
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Overwrite one field. Returns false (and changes nothing) when the
    /// field is not part of this record's variant.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.values.get_mut(&field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// JSON body posted to the spreadsheet endpoint
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for SubmissionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter().map(|(field, value)| (field.key(), value)))
    }
}

/// Validation messages keyed by failing field
pub type FieldErrors = BTreeMap<Field, String>;

/// Check every field of the record's variant.
///
/// An empty map means the record may be submitted. Blank values (after
/// trimming) only ever produce the "required" message.
pub fn validate(record: &SubmissionRecord) -> FieldErrors {
    record
        .variant()
        .fields()
        .iter()
        .filter_map(|field| check_field(*field, record.get(*field)).map(|msg| (*field, msg)))
        .collect()
}

fn check_field(field: Field, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(format!("{} is required", field.label()));
    }

    match field.rule() {
        FieldRule::Text => None,
        FieldRule::Email if !is_valid_email(value) => {
            Some("Please enter a valid email address".to_string())
        }
        FieldRule::WhatsApp if !is_valid_whatsapp(value) => Some(format!(
            "WhatsApp number must have {}-{} digits",
            WHATSAPP_MIN_DIGITS, WHATSAPP_MAX_DIGITS
        )),
        FieldRule::VideoLink if !is_allowed_video_link(value) => {
            Some("Video link must be a Google Drive or YouTube URL".to_string())
        }
        _ => None,
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Formatting characters (spaces, `+`, dashes, parentheses) are ignored
pub fn is_valid_whatsapp(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (WHATSAPP_MIN_DIGITS..=WHATSAPP_MAX_DIGITS).contains(&digits)
}

pub fn is_allowed_video_link(value: &str) -> bool {
    let lowered = value.to_lowercase();
    ALLOWED_VIDEO_HOSTS
        .iter()
        .any(|host| lowered.contains(host))
}
