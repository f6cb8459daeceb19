use {
    super::{TableExpression, TableJoin},
    crate::{
        error::Result,
        format::{Format, FormatStateStacked, Formatter},
        node::AstRef,
    },
    common::pub_fields_struct,
    serde::{Deserialize, Serialize},
};

pub_fields_struct! {
    /// A table expression and, except for the first element of a FROM
    /// clause, the join that attaches it.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TablesInSelectQueryElement {
        #[serde(default)]
        table_join: Option<TableJoin>,
        table_expression: TableExpression,
    }

    /// All data sources of one FROM clause, left to right.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct TablesInSelectQuery {
        elements: Vec<TablesInSelectQueryElement>,
    }
}

impl TablesInSelectQueryElement {
    pub fn new(table_expression: TableExpression) -> Self {
        Self {
            table_join: None,
            table_expression,
        }
    }

    pub fn joined(table_join: TableJoin, table_expression: TableExpression) -> Self {
        Self {
            table_join: Some(table_join),
            table_expression,
        }
    }

    /// The join (when present), then the table expression.
    pub fn children(&self) -> Vec<AstRef<'_>> {
        let mut children: Vec<AstRef<'_>> = Vec::with_capacity(2);
        if let Some(join) = &self.table_join {
            children.push(join.into());
        }
        children.push((&self.table_expression).into());
        children
    }
}

impl Format for TablesInSelectQueryElement {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        let Some(join) = &self.table_join else {
            return f.node(&self.table_expression, frame);
        };

        join.format_before_table(f, frame)?;
        f.write_char(' ')?;
        f.node(&self.table_expression, frame)?;
        f.write_char(' ')?;
        join.format_after_table(f, frame)
    }
}

impl TablesInSelectQuery {
    pub fn new(first: TableExpression) -> Self {
        Self {
            elements: vec![TablesInSelectQueryElement::new(first)],
        }
    }

    /// Appends `table_expression`, attached to everything before it by `join`.
    pub fn join(mut self, join: TableJoin, table_expression: TableExpression) -> Self {
        self.elements
            .push(TablesInSelectQueryElement::joined(join, table_expression));
        self
    }

    pub fn push(&mut self, element: TablesInSelectQueryElement) {
        self.elements.push(element);
    }

    pub fn children(&self) -> Vec<AstRef<'_>> {
        self.elements.iter().map(AstRef::from).collect()
    }
}

impl FromIterator<TablesInSelectQueryElement> for TablesInSelectQuery {
    fn from_iter<I: IntoIterator<Item = TablesInSelectQueryElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Format for TablesInSelectQuery {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.new_line(frame)?;
            }
            f.node(element, frame)?;
        }
        Ok(())
    }
}
