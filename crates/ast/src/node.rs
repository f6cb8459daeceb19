//! Generic access to the populated children of a node.
//!
//! Children are never stored separately from the typed fields: each node
//! computes them on demand, in field order, so a rewrite of a field can not
//! leave a stale entry behind.
use crate::{
    common::TableIdentifier,
    expr::{Expression, ExpressionList, FunctionCall},
    select::{SelectQuery, Subquery},
    tables::{TableExpression, TableJoin, TablesInSelectQuery, TablesInSelectQueryElement},
};

#[derive(Debug, Clone, Copy)]
pub enum AstRef<'a> {
    TablesInSelectQuery(&'a TablesInSelectQuery),
    TablesInSelectQueryElement(&'a TablesInSelectQueryElement),
    TableExpression(&'a TableExpression),
    TableJoin(&'a TableJoin),
    TableIdentifier(&'a TableIdentifier),
    FunctionCall(&'a FunctionCall),
    Subquery(&'a Subquery),
    SelectQuery(&'a SelectQuery),
    Expression(&'a Expression),
    ExpressionList(&'a ExpressionList),
}

macro_rules! ast_ref_from {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for AstRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    Self::$ty(node)
                }
            }
        )*
    };
}

ast_ref_from!(
    TablesInSelectQuery,
    TablesInSelectQueryElement,
    TableExpression,
    TableJoin,
    TableIdentifier,
    FunctionCall,
    Subquery,
    SelectQuery,
    Expression,
    ExpressionList,
);

impl<'a> AstRef<'a> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TablesInSelectQuery(_) => "TablesInSelectQuery",
            Self::TablesInSelectQueryElement(_) => "TablesInSelectQueryElement",
            Self::TableExpression(_) => "TableExpression",
            Self::TableJoin(_) => "TableJoin",
            Self::TableIdentifier(_) => "TableIdentifier",
            Self::FunctionCall(_) => "FunctionCall",
            Self::Subquery(_) => "Subquery",
            Self::SelectQuery(_) => "SelectQuery",
            Self::Expression(_) => "Expression",
            Self::ExpressionList(_) => "ExpressionList",
        }
    }

    /// The populated children, in field order. Expressions and function
    /// calls are leaves here.
    pub fn children(&self) -> Vec<AstRef<'a>> {
        match *self {
            Self::TablesInSelectQuery(node) => node.children(),
            Self::TablesInSelectQueryElement(node) => node.children(),
            Self::TableExpression(node) => node.children(),
            Self::TableJoin(node) => node.children(),
            Self::Subquery(node) => vec![node.query.as_ref().into()],
            Self::SelectQuery(node) => {
                let mut children: Vec<AstRef<'a>> = vec![];
                if let Some(tables) = &node.tables {
                    children.push(tables.into());
                }
                if let Some(cond) = &node.where_expression {
                    children.push(cond.into());
                }
                children
            }
            Self::ExpressionList(list) => list.0.iter().map(AstRef::from).collect(),
            Self::TableIdentifier(_) | Self::FunctionCall(_) | Self::Expression(_) => vec![],
        }
    }

    /// Depth-first, pre-order walk; `visit` receives each node with its depth
    /// below `self`.
    pub fn walk<F: FnMut(AstRef<'a>, usize)>(self, visit: &mut F) {
        self.walk_at(0, visit)
    }

    fn walk_at<F: FnMut(AstRef<'a>, usize)>(self, depth: usize, visit: &mut F) {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }
}
