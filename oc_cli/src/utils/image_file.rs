use crate::error::Result;
use std::path::Path;

pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("image"));
        Ok(ImageFile {
            mime_type: guess_mime_type(path),
            file_name,
            bytes,
        })
    }
}

/// The server only forwards `image/*` parts, so anything unrecognised is sent
/// as opaque bytes and ignored there.
fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[test]
fn test_guess_mime_type() {
    assert_eq!(guess_mime_type(Path::new("cat.PNG")), "image/png");
    assert_eq!(guess_mime_type(Path::new("/tmp/photo.jpeg")), "image/jpeg");
    assert_eq!(guess_mime_type(Path::new("notes.txt")), "text/plain");
    assert_eq!(guess_mime_type(Path::new("README")), "application/octet-stream");
}

#[test]
fn test_guess_mime_type_less_common_images() {
    for name in ["scan.tiff", "icon.svg", "pic.jfif", "photo.gif"] {
        let mime = guess_mime_type(Path::new(name));
        assert!(mime.starts_with("image/"), "{name} guessed as {mime}");
    }
}
