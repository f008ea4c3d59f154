use axum::body::Bytes;
use chrono::Utc;
use rand::Rng;
use std::path::Path;

use super::error::{AppError, AppResult};

/// URL prefix the uploads directory is served under
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Image file accepted from a product form, not yet written to disk.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Checks type and size and picks the stored file name.
    pub fn accept(
        original_name: Option<&str>,
        content_type: Option<&str>,
        bytes: Bytes,
        max_bytes: usize,
    ) -> AppResult<Self> {
        check_image(content_type, bytes.len(), max_bytes)?;
        let suffix = rand::thread_rng().gen_range(0..1_000_000_000u32);
        Ok(Self {
            file_name: stored_file_name(original_name, Utc::now().timestamp_millis(), suffix),
            bytes,
        })
    }

    pub fn public_url(&self) -> String {
        format!("{}/{}", UPLOADS_URL_PREFIX, self.file_name)
    }

    /// Writes the file into `dir`, creating the directory on first use.
    pub async fn save(&self, dir: &Path) -> AppResult<()> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!(
            "Stored upload {} ({} bytes)",
            path.display(),
            self.bytes.len()
        );
        Ok(())
    }
}

/// Only `image/*` content up to `max_bytes` is accepted.
pub fn check_image(content_type: Option<&str>, len: usize, max_bytes: usize) -> AppResult<()> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => {}
        Some(ct) => {
            return Err(AppError::Upload(format!(
                "Only image files are allowed, got {}",
                ct
            )))
        }
        None => return Err(AppError::Upload("Only image files are allowed".to_string())),
    }
    if len > max_bytes {
        return Err(AppError::Upload(format!(
            "File too large: {} bytes, limit is {} bytes",
            len, max_bytes
        )));
    }
    Ok(())
}

/// `<unix-millis>-<suffix><ext>`, keeping only a plain alphanumeric extension of the original name.
pub fn stored_file_name(original_name: Option<&str>, millis: i64, suffix: u32) -> String {
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();
    format!("{}-{}{}", millis, suffix, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_file_name() {
        assert_eq!(
            stored_file_name(Some("photo.PNG"), 1700000000000, 42),
            "1700000000000-42.png"
        );
        assert_eq!(stored_file_name(Some("noext"), 1, 2), "1-2");
        assert_eq!(stored_file_name(None, 1, 2), "1-2");
        assert_eq!(stored_file_name(Some("../../evil.p/hp"), 1, 2), "1-2");
    }

    #[test]
    fn test_check_image() {
        assert!(check_image(Some("image/jpeg"), 100, 1000).is_ok());
        assert!(check_image(Some("image/png"), 1000, 1000).is_ok());
        assert!(matches!(
            check_image(Some("text/plain"), 10, 1000),
            Err(AppError::Upload(_))
        ));
        assert!(matches!(check_image(None, 10, 1000), Err(AppError::Upload(_))));
        assert!(matches!(
            check_image(Some("image/gif"), 1001, 1000),
            Err(AppError::Upload(_))
        ));
    }

    #[tokio::test]
    async fn test_accept_and_save() {
        let upload = ImageUpload::accept(
            Some("cat.jpg"),
            Some("image/jpeg"),
            Bytes::from_static(b"\xff\xd8\xff"),
            1024,
        )
        .unwrap();
        assert!(upload.file_name.ends_with(".jpg"));
        assert!(upload.public_url().starts_with("/uploads/"));

        let dir = std::env::temp_dir().join(format!("dashboard-uploads-{}", upload.file_name));
        upload.save(&dir).await.unwrap();
        let written = tokio::fs::read(dir.join(&upload.file_name)).await.unwrap();
        assert_eq!(written, b"\xff\xd8\xff");
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
