//! Positions of the Levenshtein automaton.
//!
//! A position `(i, e)` says that `i` characters of the query have been
//! aligned with the dictionary path read so far at a cost of `e` edits. The
//! extended models carry a third component marking an operation that has
//! started but not yet completed (a transposition or a split).

use std::fmt;

/// Common interface of the position shapes.
pub trait Position: Copy + Eq + fmt::Debug + fmt::Display {
    /// The position every search starts from, `(0, 0)`.
    fn initial() -> Self;

    /// Number of query characters consumed.
    fn offset(&self) -> usize;

    /// Number of edits spent.
    fn errors(&self) -> usize;

    /// True while a multi-character operation is in flight.
    fn is_flagged(&self) -> bool;

    /// Order used when inserting into a state.
    #[inline]
    fn insertion_key(&self) -> (usize, usize, bool) {
        (self.errors(), self.offset(), self.is_flagged())
    }

    /// Order used when stepping a state.
    #[inline]
    fn traversal_key(&self) -> (usize, usize, bool) {
        (self.offset(), self.errors(), self.is_flagged())
    }
}

/// `(offset, errors)`, used by the standard model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimplePosition {
    /// Query characters consumed.
    pub offset: usize,
    /// Edits spent.
    pub errors: usize,
}

impl SimplePosition {
    /// Create a position.
    #[inline(always)]
    pub fn new(offset: usize, errors: usize) -> Self {
        SimplePosition { offset, errors }
    }
}

impl Position for SimplePosition {
    fn initial() -> Self {
        SimplePosition::new(0, 0)
    }

    #[inline(always)]
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    fn errors(&self) -> usize {
        self.errors
    }

    #[inline(always)]
    fn is_flagged(&self) -> bool {
        false
    }
}

impl fmt::Display for SimplePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.offset, self.errors)
    }
}

/// `(offset, errors, flag)`, used by the transposition and merge/split
/// models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlaggedPosition {
    /// Query characters consumed.
    pub offset: usize,
    /// Edits spent.
    pub errors: usize,
    /// A transposition or split is pending.
    pub flagged: bool,
}

impl FlaggedPosition {
    /// Create an unflagged position.
    #[inline(always)]
    pub fn new(offset: usize, errors: usize) -> Self {
        FlaggedPosition {
            offset,
            errors,
            flagged: false,
        }
    }

    /// Create a position with a pending operation.
    #[inline(always)]
    pub fn new_flagged(offset: usize, errors: usize) -> Self {
        FlaggedPosition {
            offset,
            errors,
            flagged: true,
        }
    }
}

impl Position for FlaggedPosition {
    fn initial() -> Self {
        FlaggedPosition::new(0, 0)
    }

    #[inline(always)]
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    fn errors(&self) -> usize {
        self.errors
    }

    #[inline(always)]
    fn is_flagged(&self) -> bool {
        self.flagged
    }
}

impl fmt::Display for FlaggedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.offset,
            self.errors,
            u8::from(self.flagged)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_order_components() {
        let p = FlaggedPosition::new_flagged(3, 1);
        assert_eq!(p.insertion_key(), (1, 3, true));
        assert_eq!(p.traversal_key(), (3, 1, true));

        let q = SimplePosition::new(2, 0);
        assert_eq!(q.insertion_key(), (0, 2, false));
    }

    #[test]
    fn test_display() {
        assert_eq!(SimplePosition::new(4, 2).to_string(), "(4,2)");
        assert_eq!(FlaggedPosition::new_flagged(1, 1).to_string(), "(1,1,1)");
        assert_eq!(FlaggedPosition::initial().to_string(), "(0,0,0)");
    }
}
