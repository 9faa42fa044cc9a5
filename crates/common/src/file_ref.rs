use std::fmt;

/// A file-shaped form value.
///
/// A field starts out [`Empty`](FileRef::Empty), becomes
/// [`Uploaded`](FileRef::Uploaded) when the contributor selects a local file,
/// and may instead be a [`Remote`](FileRef::Remote) reference to a file the
/// server already holds from an earlier submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FileRef {
    /// No file selected.
    #[default]
    Empty,
    /// A locally selected file, carried with its content.
    Uploaded(UploadedFile),
    /// Server-side reference to an already-uploaded file.
    Remote(String),
}

impl FileRef {
    pub fn is_empty(&self) -> bool {
        matches!(self, FileRef::Empty)
    }
}

/// A selected local file: original filename, MIME type, and content.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Size of the file content in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// Manual Debug so log output carries the size, not the content.
impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("filename", &self.filename)
            .field("mime", &self.mime)
            .field("size", &self.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_the_default() {
        assert_eq!(FileRef::default(), FileRef::Empty);
        assert!(FileRef::Empty.is_empty());
        assert!(!FileRef::Remote("ref-1".to_string()).is_empty());
    }

    #[test]
    fn size_reflects_content_length() {
        let file = UploadedFile::new("clip.mp3", "audio/mpeg", vec![0u8; 1024]);
        assert_eq!(file.size(), 1024);
    }

    #[test]
    fn debug_omits_content() {
        let file = UploadedFile::new("cover.png", "image/png", vec![0u8; 32]);
        let printed = format!("{:?}", file);
        assert!(printed.contains("cover.png"));
        assert!(printed.contains("size: 32"));
        assert!(!printed.contains("[0"));
    }
}
