//! Field validation for the contribution form.
//!
//! Pure functions from the current [`FormValues`] to a field → error-message
//! mapping. Each field is checked independently; the first failing rule wins,
//! so a field never carries more than one message. Re-validating unchanged
//! values always produces an identical mapping.

use common::{Category, FileRef, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Largest accepted thumbnail, in bytes.
pub const MAX_THUMBNAIL_BYTES: u64 = 5_000_000;

/// MIME types accepted for the thumbnail image.
pub const ALLOWED_THUMBNAIL_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// A form field, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Age,
    Location,
    Topic,
    Description,
    Audiofile,
    Category,
    Thumbnail,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Age,
        Field::Location,
        Field::Topic,
        Field::Description,
        Field::Audiofile,
        Field::Category,
        Field::Thumbnail,
    ];

    /// Wire/display name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Location => "location",
            Field::Topic => "topic",
            Field::Description => "description",
            Field::Audiofile => "audiofile",
            Field::Category => "category",
            Field::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error mapping produced by a validation pass: at most one message per
/// invalid field, iterated in field-declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    /// True when every field passed, i.e. the form is valid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Validate every field of the form.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Some(message) = validate_field(values, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate a single field, returning the first failing rule's message.
/// Required-ness is checked before format rules.
pub fn validate_field(values: &FormValues, field: Field) -> Option<&'static str> {
    match field {
        Field::Name => required(&values.name, "Name is required"),
        Field::Email => {
            required(&values.email, "Email is required").or_else(|| email_format(&values.email))
        }
        Field::Age => validate_age(&values.age),
        Field::Location => required(&values.location, "Location is required"),
        Field::Topic => required(&values.topic, "Topic is required"),
        Field::Description => required(&values.description, "Description is required"),
        Field::Audiofile => {
            if values.audiofile.is_empty() {
                Some("Audio file is required")
            } else {
                None
            }
        }
        Field::Category => validate_category(&values.category),
        Field::Thumbnail => validate_thumbnail(&values.thumbnail),
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(message)
    } else {
        None
    }
}

fn email_format(value: &str) -> Option<&'static str> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid")
    });
    if pattern.is_match(value.trim()) {
        None
    } else {
        Some("Invalid email address")
    }
}

fn validate_age(value: &str) -> Option<&'static str> {
    let raw = value.trim();
    if raw.is_empty() {
        return Some("Age is required");
    }
    match raw.parse::<f64>() {
        // "inf" and "NaN" parse as f64 but are not ages
        Ok(age) if age.is_finite() => {
            if age > 0.0 {
                None
            } else {
                Some("Age must be a positive number")
            }
        }
        _ => Some("Age must be a number"),
    }
}

fn validate_category(value: &str) -> Option<&'static str> {
    let raw = value.trim();
    if raw.is_empty() {
        return Some("Category is required");
    }
    if Category::from_slug(raw).is_none() {
        return Some("Invalid category");
    }
    None
}

fn validate_thumbnail(value: &FileRef) -> Option<&'static str> {
    match value {
        // Optional field: absent passes, and a server-side reference has
        // already been through these checks once.
        FileRef::Empty | FileRef::Remote(_) => None,
        FileRef::Uploaded(file) => {
            if !ALLOWED_THUMBNAIL_TYPES.contains(&file.mime.as_str()) {
                Some("Unsupported file format")
            } else if file.size() > MAX_THUMBNAIL_BYTES {
                Some("File too large")
            } else {
                None
            }
        }
    }
}
