//! Image attachments held between selection and send.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

use crate::transcript::Part;
use crate::ChatError;

/// Where the attachment's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Bytes already in memory.
    Bytes(Vec<u8>),
    /// A file read lazily when the turn is built.
    File(PathBuf),
}

/// A user-selected file plus its declared media type.
///
/// The media type is taken as declared; it is never sniffed from content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: Option<String>,
    pub mime_type: String,
    pub source: AttachmentSource,
}

impl Attachment {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: None,
            mime_type: mime_type.into(),
            source: AttachmentSource::Bytes(bytes),
        }
    }

    /// Reference a file on disk, guessing its media type from the extension.
    ///
    /// Unknown extensions get `application/octet-stream`, which
    /// [`crate::ChatSession::attach_image`] then rejects.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mime_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Self {
            name,
            mime_type,
            source: AttachmentSource::File(path),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Label for previews: the file name, or the media type if unnamed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.mime_type)
    }

    /// Read the attachment's bytes.
    pub async fn load_bytes(&self) -> std::io::Result<Vec<u8>> {
        match &self.source {
            AttachmentSource::Bytes(bytes) => Ok(bytes.clone()),
            AttachmentSource::File(path) => tokio::fs::read(path).await,
        }
    }

    /// Load and base64-encode the payload. An empty payload is an error.
    pub async fn encode_base64(&self) -> Result<String, ChatError> {
        let bytes = self.load_bytes().await.map_err(|e| {
            ChatError::AttachmentEncoding(format!("failed to read {}: {e}", self.display_name()))
        })?;
        if bytes.is_empty() {
            return Err(ChatError::AttachmentEncoding(format!(
                "{} is empty",
                self.display_name()
            )));
        }
        Ok(BASE64_STANDARD.encode(bytes))
    }

    /// Build the inline part carried by an outgoing turn.
    pub async fn to_part(&self) -> Result<Part, ChatError> {
        let data = self.encode_base64().await?;
        Ok(Part::inline(self.mime_type.clone(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_detection_uses_declared_type() {
        assert!(Attachment::from_bytes("image/png", vec![1]).is_image());
        assert!(Attachment::from_bytes("image/webp", vec![1]).is_image());
        assert!(!Attachment::from_bytes("application/pdf", vec![1]).is_image());
        assert!(!Attachment::from_bytes("text/plain", vec![1]).is_image());
    }

    #[test]
    fn from_path_guesses_mime_type() {
        let attachment = Attachment::from_path("/photos/sofa.JPG");
        assert_eq!(attachment.mime_type, "image/jpeg");
        assert_eq!(attachment.name.as_deref(), Some("sofa.JPG"));

        let unknown = Attachment::from_path("/tmp/blob.unknownext");
        assert_eq!(unknown.mime_type, "application/octet-stream");
        assert!(!unknown.is_image());
    }

    #[tokio::test]
    async fn encodes_bytes_as_standard_base64() {
        let attachment = Attachment::from_bytes("image/png", b"hello".to_vec());
        assert_eq!(attachment.encode_base64().await.unwrap(), "aGVsbG8=");
    }

    #[tokio::test]
    async fn empty_payload_fails_encoding() {
        let attachment = Attachment::from_bytes("image/png", Vec::new());
        let err = attachment.encode_base64().await.unwrap_err();
        assert!(matches!(err, ChatError::AttachmentEncoding(_)));
    }

    #[tokio::test]
    async fn missing_file_fails_encoding() {
        let attachment = Attachment::from_path("/tmp/noid-missing-image-for-test.png");
        let err = attachment.encode_base64().await.unwrap_err();
        assert!(matches!(err, ChatError::AttachmentEncoding(_)));
    }

    #[tokio::test]
    async fn file_source_is_read_at_encode_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chair.png");
        let attachment = Attachment::from_path(&path);

        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        let part = attachment.to_part().await.unwrap();

        assert_eq!(part, Part::inline("image/png", "iVBORw=="));
    }
}
