pub mod category;
pub mod file_ref;

pub use category::Category;
pub use file_ref::{FileRef, UploadedFile};

use serde::{Deserialize, Serialize};

/// The single mutable record the contributor edits.
///
/// Text fields hold the raw input exactly as entered; the validation crate
/// decides whether it is acceptable. `Default` produces the initial all-empty
/// record, so dirtiness is a plain comparison against `FormValues::default()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    /// Raw age input; validated as a positive number, not parsed eagerly.
    pub age: String,
    pub location: String,
    pub topic: String,
    pub description: String,
    /// Required audio upload.
    pub audiofile: FileRef,
    /// Optional thumbnail image.
    pub thumbnail: FileRef,
    /// Raw category slug; validated against [`Category`].
    pub category: String,
}

/// Response envelope from the contribution endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ContributeResponse {
    pub success: bool,
    /// Opaque payload; the client does not interpret it.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}
