pub mod attachment;
pub mod multipart_form;
pub mod ndjson_lines;
pub mod stream_relay;
