//! Syntax tree of the `FROM ... JOIN ...` part of a `SELECT`, with deep
//! cloning (`Clone`) and rendering back to SQL ([`Format`]).
//!
//! Trees are plain owned values: a clone shares nothing with its source, and
//! formatting only reads, so independent trees can be rendered from several
//! threads at once. Rendering recurses once per subquery level; callers that
//! accept untrusted input should bound nesting depth before formatting.
mod common;
mod error;
pub mod expr;
pub mod format;
mod node;
mod select;
pub mod tables;

pub use crate::{
    common::{ColumnRef, Identifier, TableIdentifier},
    error::{Error, Result},
    format::{Format, FormatSettings, FormatState, FormatStateStacked, Formatter},
    node::AstRef,
    select::{SelectQuery, SelectTarget, Subquery},
    tables::*,
};
