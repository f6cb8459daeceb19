//! The FROM clause: a sequence of elements, each a table expression
//! optionally joined to the ones before it.
mod element;
mod table_expression;
mod table_join;


pub use {
    element::{TablesInSelectQuery, TablesInSelectQueryElement},
    table_expression::{Sample, TableExpression, TableSource},
    table_join::{JoinConstraint, JoinKind, JoinLocality, JoinStrictness, TableJoin},
};
