pub mod image_file;
pub mod session_id;
pub mod stream_text;
