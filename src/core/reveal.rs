//! # Reveal Buffer
//!
//! Decoded answer text waits here between arrival and display. Network
//! chunks land in bursts; the reveal timer drains one character every
//! [`REVEAL_INTERVAL`] so the answer types out at a steady pace regardless
//! of how it arrived.

use std::collections::VecDeque;
use std::time::Duration;

/// One character leaves the buffer per tick.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(24);

/// FIFO of characters received but not yet shown.
#[derive(Debug, Default)]
pub struct RevealBuffer {
    chars: VecDeque<char>,
}

impl RevealBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_preserves_arrival_order() {
        let mut buf = RevealBuffer::new();
        buf.push_text("金银");
        buf.push_text("花");
        assert_eq!(buf.pop(), Some('金'));
        assert_eq!(buf.pop(), Some('银'));
        assert_eq!(buf.pop(), Some('花'));
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        let mut buf = RevealBuffer::new();
        buf.push_text("茶ab");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_clear_discards_pending() {
        let mut buf = RevealBuffer::new();
        buf.push_text("pending");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.pop(), None);
    }
}
