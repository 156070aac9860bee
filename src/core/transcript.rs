//! # Conversation Transcript
//!
//! Ordered log of what has been said. Entries are append-only and keep
//! insertion order; the only entry that ever changes after insertion is the
//! trailing assistant entry, which grows one character at a time while an
//! answer is being revealed.

/// Who produced an entry. The QA protocol has exactly two parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub role: Role,
    pub content: String,
}

/// The conversation so far. Never reordered, cleared only by a reset.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an immutable user entry.
    pub fn push_user(&mut self, question: impl Into<String>) {
        self.entries.push(Entry {
            role: Role::User,
            content: question.into(),
        });
    }

    /// Opens an empty assistant entry that `push_char` will fill.
    pub fn begin_answer(&mut self) {
        self.entries.push(Entry {
            role: Role::Assistant,
            content: String::new(),
        });
    }

    /// Appends one revealed character to the trailing assistant entry.
    ///
    /// Ignores the character if the transcript is empty or ends with a user
    /// entry; that can only happen after a reset raced a reveal tick, and
    /// dropping the orphaned character is the correct outcome.
    pub fn push_char(&mut self, ch: char) {
        if let Some(last) = self.entries.last_mut()
            && last.role == Role::Assistant
        {
            last.content.push(ch);
        }
    }

    /// Content of the trailing assistant entry, if the transcript ends with one.
    pub fn last_answer(&self) -> Option<&str> {
        match self.entries.last() {
            Some(entry) if entry.role == Role::Assistant => Some(&entry.content),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_user_keeps_order() {
        let mut t = Transcript::new();
        t.push_user("第一问");
        t.push_user("第二问");
        assert_eq!(t.entries()[0].content, "第一问");
        assert_eq!(t.entries()[1].content, "第二问");
    }

    #[test]
    fn test_push_char_grows_trailing_answer() {
        let mut t = Transcript::new();
        t.push_user("金银花茶有什么功效？");
        t.begin_answer();
        t.push_char('清');
        t.push_char('热');
        assert_eq!(t.last_answer(), Some("清热"));
        // The user entry is untouched.
        assert_eq!(t.entries()[0].content, "金银花茶有什么功效？");
    }

    #[test]
    fn test_push_char_without_answer_is_dropped() {
        let mut t = Transcript::new();
        t.push_char('x');
        assert!(t.is_empty());

        t.push_user("q");
        t.push_char('x');
        assert_eq!(t.entries()[0].content, "q");
    }

    #[test]
    fn test_last_answer_none_after_user_entry() {
        let mut t = Transcript::new();
        t.begin_answer();
        t.push_char('a');
        t.push_user("q");
        assert_eq!(t.last_answer(), None);
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut t = Transcript::new();
        t.push_user("q");
        t.begin_answer();
        t.clear();
        assert!(t.is_empty());
    }
}
