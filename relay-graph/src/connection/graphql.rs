use async_graphql::{types::connection, OutputType};

use super::Connection;
use crate::cursor::{CursorError, OffsetCursor};

impl connection::CursorType for OffsetCursor {
    type Error = CursorError;

    fn decode_cursor(s: &str) -> Result<Self, Self::Error> {
        Self::decode(s)
    }

    fn encode_cursor(&self) -> String {
        self.encode()
    }
}

impl<T: OutputType> Connection<T> {
    pub fn into_graphql(self) -> connection::Connection<OffsetCursor, T> {
        let mut graphql = connection::Connection::new(
            self.page_info.has_previous_page,
            self.page_info.has_next_page,
        );
        graphql.edges.extend(
            self.edges
                .into_iter()
                .map(|edge| connection::Edge::new(edge.cursor, edge.node)),
        );
        graphql
    }
}
