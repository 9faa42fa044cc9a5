use anyhow::{Context, Result};
use common::UploadedFile;
use std::fs;
use std::path::Path;

/// Read a local file into an upload handle, inferring the MIME type from the
/// file extension.
pub fn load_file(path: &Path) -> Result<UploadedFile> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {:?}", path))?;

    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let mime = mime_from_extension(path);

    Ok(UploadedFile::new(filename, mime, bytes))
}

fn mime_from_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_and_audio_extensions() {
        assert_eq!(mime_from_extension(Path::new("cover.PNG")), "image/png");
        assert_eq!(mime_from_extension(Path::new("cover.jpeg")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("a/b/ep.mp3")), "audio/mpeg");
        assert_eq!(mime_from_extension(Path::new("take2.wav")), "audio/wav");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(
            mime_from_extension(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_from_extension(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
