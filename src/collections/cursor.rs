//! Explicit iteration cursors.
//!
//! A [`Cursor`] borrows a container and owns nothing but a position. Any
//! number of cursors can walk the same container independently; the shared
//! borrow rules out mutation for as long as one is alive.
//!
//! The cursor mirrors the classic `rewind / valid / current / key / next`
//! protocol and is also an ordinary [`Iterator`].

/// Positional access to a container's entries, in iteration order.
pub trait Seek {
    /// The key type yielded alongside each value.
    type Key<'a>
    where
        Self: 'a;
    /// The stored value type.
    type Value;

    /// The entry at `position`, or `None` past the end.
    fn entry_at(&self, position: usize) -> Option<(Self::Key<'_>, &Self::Value)>;
}

/// An independent iteration position over a [`Seek`] container.
#[derive(Debug)]
pub struct Cursor<'a, S: ?Sized> {
    source: &'a S,
    position: usize,
}

impl<S: ?Sized> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position,
        }
    }
}

impl<'a, S: Seek + ?Sized> Cursor<'a, S> {
    /// Creates a cursor positioned at the first entry.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// The current position, counted in entries from the start.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` while the cursor points at an entry.
    pub fn valid(&self) -> bool {
        self.source.entry_at(self.position).is_some()
    }

    /// The value at the cursor, or `None` once past the end.
    pub fn current(&self) -> Option<&'a S::Value> {
        self.source.entry_at(self.position).map(|(_, value)| value)
    }

    /// The key at the cursor, or `None` once past the end.
    pub fn key(&self) -> Option<S::Key<'a>> {
        self.source.entry_at(self.position).map(|(key, _)| key)
    }

    /// Moves to the next entry. Moving past the end invalidates the cursor;
    /// it does not wrap around.
    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    /// Moves back to the first entry.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl<'a, S: Seek + ?Sized> Iterator for Cursor<'a, S> {
    type Item = (S::Key<'a>, &'a S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.source.entry_at(self.position)?;
        self.advance();
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Letters(Vec<char>);

    impl Seek for Letters {
        type Key<'a> = usize;
        type Value = char;

        fn entry_at(&self, position: usize) -> Option<(usize, &char)> {
            self.0.get(position).map(|value| (position, value))
        }
    }

    #[test]
    fn test_protocol() {
        let letters = Letters(vec!['a', 'b', 'c']);
        let mut cursor = Cursor::new(&letters);
        assert!(cursor.valid());
        assert_eq!(cursor.key(), Some(0));
        cursor.advance();
        assert_eq!(cursor.current(), Some(&'b'));
        assert_eq!(cursor.key(), Some(1));
        cursor.rewind();
        assert_eq!(cursor.current(), Some(&'a'));
    }

    #[test]
    fn test_no_wrap_past_end() {
        let letters = Letters(vec!['a']);
        let mut cursor = Cursor::new(&letters);
        cursor.advance();
        assert!(!cursor.valid());
        cursor.advance();
        assert!(!cursor.valid());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_source_is_invalid() {
        let letters = Letters(Vec::new());
        assert!(!Cursor::new(&letters).valid());
    }

    #[test]
    fn test_independent_cursors() {
        let letters = Letters(vec!['a', 'b']);
        let mut first = Cursor::new(&letters);
        let second = Cursor::new(&letters);
        first.advance();
        assert_eq!(first.current(), Some(&'b'));
        assert_eq!(second.current(), Some(&'a'));
    }

    #[test]
    fn test_iterator_yields_remaining() {
        let letters = Letters(vec!['a', 'b', 'c']);
        let mut cursor = Cursor::new(&letters);
        cursor.advance();
        let rest: Vec<_> = cursor.collect();
        assert_eq!(rest, vec![(1, &'b'), (2, &'c')]);
    }
}
