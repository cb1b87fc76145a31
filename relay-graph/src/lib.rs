#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

//! Global object identification and cursor connections for graph APIs
//! backed by relational rows.

pub mod association;
pub mod connection;
pub mod cursor;
pub mod node;
mod query;
pub mod registry;

pub use association::{make_connection_resolver, AssociatedRows, Association, ConnectionResolver};
pub use connection::{
    connection_from_slice, connection_from_source, connection_from_vec, Connection,
    ConnectionArgs, ConnectionSource, Edge, PageInfo,
};
pub use cursor::{
    decode_cursor, decode_global_id, encode_cursor, encode_global_id, GlobalId, OffsetCursor,
    ResolvedGlobalId,
};
pub use node::{NodeDispatcher, ResolvedNode};
pub use query::*;
pub use registry::{AnyNode, TypeRegistry, TypeRegistryBuilder};
