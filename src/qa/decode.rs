//! # Incremental UTF-8 Decoding
//!
//! The backend streams raw UTF-8 bytes and the transport chunks them
//! wherever it likes, so a multi-byte character regularly arrives split
//! across two reads. Decoding each chunk independently would corrupt every
//! split character — with mostly-Chinese answers that is nearly every
//! chunk boundary. [`StreamDecoder`] holds the incomplete tail back and
//! prepends it to the next chunk, so boundaries never show up in the text.

/// Resumable UTF-8 decoder. Feed it chunks with [`decode`](Self::decode),
/// then call [`finish`](Self::finish) when the stream ends.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Trailing bytes of an unfinished sequence from the previous chunk.
    /// A UTF-8 sequence is at most 4 bytes, so this holds at most 3.
    carry: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes one chunk, returning all characters completed by it.
    ///
    /// Malformed bytes become U+FFFD and decoding resumes after them; an
    /// incomplete trailing sequence is held until the next chunk.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let joined: Vec<u8>;
        let mut bytes: &[u8] = if self.carry.is_empty() {
            chunk
        } else {
            let mut buf = std::mem::take(&mut self.carry);
            buf.extend_from_slice(chunk);
            joined = buf;
            &joined
        };

        let mut out = String::new();
        loop {
            match std::str::from_utf8(bytes) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = bytes.split_at(err.valid_up_to());
                    // `valid` is well-formed up to the error, so this borrow
                    // never actually replaces anything.
                    out.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            bytes = &rest[bad..];
                        }
                        None => {
                            // Chunk ends mid-sequence: wait for the rest.
                            self.carry = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Flushes the decoder at end-of-stream. A truncated trailing sequence
    /// becomes a single U+FFFD; otherwise the result is empty.
    pub fn finish(&mut self) -> String {
        if self.carry.is_empty() {
            String::new()
        } else {
            self.carry.clear();
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }
}
