use serde::{Deserialize, Serialize};

use super::error::ConnectionError;
use crate::cursor::decode_cursor;

/// Pagination arguments exactly as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

impl ConnectionArgs {
    pub fn new(
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Self {
        Self {
            first,
            after,
            last,
            before,
        }
    }

    pub fn first(mut self, first: i32) -> Self {
        self.first = Some(first);
        self
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn last(mut self, last: i32) -> Self {
        self.last = Some(last);
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Validates the arguments and decodes the cursors.
    pub fn page_request(&self) -> Result<PageRequest, ConnectionError> {
        Ok(PageRequest {
            first: non_negative("first", self.first)?,
            last: non_negative("last", self.last)?,
            after: self.after.as_deref().map(decode_cursor).transpose()?,
            before: self.before.as_deref().map(decode_cursor).transpose()?,
        })
    }
}

fn non_negative(name: &'static str, value: Option<i32>) -> Result<Option<usize>, ConnectionError> {
    match value {
        Some(n) if n < 0 => Err(ConnectionError::InvalidArgument(name, n)),
        Some(n) => Ok(Some(n as usize)),
        None => Ok(None),
    }
}

/// Validated pagination arguments with cursors decoded to offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub first: Option<usize>,
    pub after: Option<usize>,
    pub last: Option<usize>,
    pub before: Option<usize>,
}

impl PageRequest {
    /// Visible window over a collection of `total` items.
    ///
    /// `after`/`before` bound the window first, then `first` narrows it from
    /// the front and `last` narrows what remains from the back.
    pub fn window(&self, total: usize) -> Window {
        let mut start = 0;
        let mut end = total;
        if let Some(after) = self.after {
            start = start.max(after.saturating_add(1)).min(total);
        }
        if let Some(before) = self.before {
            end = end.min(before);
        }
        if start <= end {
            if let Some(first) = self.first {
                end = end.min(start.saturating_add(first));
            }
            if let Some(last) = self.last {
                start = start.max(end.saturating_sub(last));
            }
        }
        Window { start, end, total }
    }
}

/// Half open range `[start, end)` of visible items.
///
/// `start > end` happens when `after` points at or past `before`; such a
/// window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_previous_page(&self) -> bool {
        self.start > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.end < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{encode_cursor, CursorError};

    fn window(args: ConnectionArgs, total: usize) -> Window {
        args.page_request().expect("valid args").window(total)
    }

    #[test]
    fn no_arguments_select_everything() {
        let w = window(ConnectionArgs::default(), 10);
        assert_eq!((w.start, w.end), (0, 10));
        assert!(!w.has_previous_page());
        assert!(!w.has_next_page());
    }

    #[test]
    fn after_and_before_bound_the_window() {
        let w = window(
            ConnectionArgs::default()
                .after(encode_cursor(2))
                .before(encode_cursor(6)),
            10,
        );
        assert_eq!((w.start, w.end), (3, 6));
        assert!(w.has_previous_page());
        assert!(w.has_next_page());
    }

    #[test]
    fn crossed_cursors_give_an_empty_window() {
        let w = window(
            ConnectionArgs::default()
                .after(encode_cursor(6))
                .before(encode_cursor(3))
                .first(2),
            10,
        );
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
    }

    #[test]
    fn after_past_the_end_is_clamped() {
        let w = window(ConnectionArgs::default().after(encode_cursor(50)), 10);
        assert!(w.is_empty());
        assert!(w.has_previous_page());
        assert!(!w.has_next_page());
    }

    #[test]
    fn first_then_last() {
        let w = window(ConnectionArgs::default().first(5).last(2), 10);
        assert_eq!((w.start, w.end), (3, 5));
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert_eq!(
            ConnectionArgs::default().first(-1).page_request(),
            Err(ConnectionError::InvalidArgument("first", -1))
        );
        assert_eq!(
            ConnectionArgs::default().last(-3).page_request(),
            Err(ConnectionError::InvalidArgument("last", -3))
        );
    }

    #[test]
    fn garbage_cursors_are_rejected() {
        assert_eq!(
            ConnectionArgs::default().before("nope").page_request(),
            Err(ConnectionError::InvalidCursor(CursorError::Malformed(
                "nope".to_string()
            )))
        );
    }
}
