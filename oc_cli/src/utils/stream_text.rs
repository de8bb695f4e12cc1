use crate::error::Result;
use futures_util::StreamExt;
use reqwest::Response;
use std::io::Write;

/// Decodes UTF-8 text arriving in arbitrary chunks, holding back the bytes of
/// a character split across two chunks until the rest arrives.
#[derive(Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // Incomplete trailing sequence: keep it for the next chunk.
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => {
                let text = String::from_utf8_lossy(&self.pending).into_owned();
                self.pending.clear();
                return text;
            }
        };
        let rest = self.pending.split_off(valid);
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending = rest;
        text
    }

    pub fn finish(self) -> String {
        String::from_utf8_lossy(&self.pending).into_owned()
    }
}

/// Writes a streamed text body to stdout as it arrives.
pub async fn print_stream(response: Response) -> Result<()> {
    let mut stream = response.bytes_stream();
    let mut decoder = Utf8Decoder::default();
    let mut stdout = std::io::stdout();

    while let Some(chunk) = stream.next().await {
        let text = decoder.push(&chunk?);
        print!("{text}");
        stdout.flush()?;
    }
    let rest = decoder.finish();
    print!("{rest}");
    stdout.flush()?;
    Ok(())
}

#[test]
fn test_utf8_decoder_across_chunks() {
    let bytes = "Grüße ✓".as_bytes();
    let mut decoder = Utf8Decoder::default();
    let mut output = String::new();
    for chunk in bytes.chunks(1) {
        output.push_str(&decoder.push(chunk));
    }
    output.push_str(&decoder.finish());
    assert_eq!(output, "Grüße ✓");

    let mut decoder = Utf8Decoder::default();
    assert_eq!(decoder.push(&[b'a', 0xE2, 0x9C]), "a");
    assert_eq!(decoder.push(&[0x93, b'b']), "✓b");
    assert_eq!(decoder.finish(), "");
}
