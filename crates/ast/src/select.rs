use {
    crate::{
        common::{format_alias, Identifier},
        error::Result,
        expr::Expression,
        format::{Format, FormatStateStacked, Formatter},
        tables::TablesInSelectQuery,
    },
    common::pub_fields_struct,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectTarget {
    Expr {
        expr: Expression,
        #[serde(default)]
        alias: Option<Identifier>,
    },
    Wildcard,
}

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SelectQuery {
        #[serde(default)]
        distinct: bool,
        targets: Vec<SelectTarget>,
        #[serde(default)]
        tables: Option<TablesInSelectQuery>,
        #[serde(default)]
        where_expression: Option<Expression>,
    }

    /// A parenthesised query used as a data source.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Subquery {
        query: Box<SelectQuery>,
        #[serde(default)]
        alias: Option<Identifier>,
    }
}

impl SelectQuery {
    pub fn new(targets: Vec<SelectTarget>, tables: TablesInSelectQuery) -> Self {
        Self {
            distinct: false,
            targets,
            tables: Some(tables),
            where_expression: None,
        }
    }
}

impl Subquery {
    pub fn new(query: SelectQuery) -> Self {
        Self {
            query: Box::new(query),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(Identifier::new(alias));
        self
    }
}

impl Format for SelectTarget {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        match self {
            Self::Expr { expr, alias } => {
                f.node(expr, frame)?;
                format_alias(f, alias.as_ref())
            }
            Self::Wildcard => f.write_char('*'),
        }
    }
}

impl Format for SelectQuery {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        let indent = f.indent_str(frame);
        let frame = FormatStateStacked {
            need_parens: false,
            ..frame
        };

        f.write_str(&indent)?;
        f.keyword("SELECT")?;
        if self.distinct {
            f.write_char(' ')?;
            f.keyword("DISTINCT")?;
        }
        f.write_char(' ')?;
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.node(target, frame)?;
        }

        if let Some(tables) = &self.tables {
            f.new_line(frame)?;
            f.keyword("FROM")?;
            f.write_char(' ')?;
            f.node(tables, frame)?;
        }

        if let Some(cond) = &self.where_expression {
            f.new_line(frame)?;
            f.keyword("WHERE")?;
            f.write_char(' ')?;
            f.node(cond, frame)?;
        }

        Ok(())
    }
}

impl Format for Subquery {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        f.write_char('(')?;
        if f.settings.one_line {
            f.node(self.query.as_ref(), frame.nested())?;
        } else {
            f.nl_or_ws()?;
            f.node(self.query.as_ref(), frame.nested())?;
            f.new_line(frame)?;
        }
        f.write_char(')')?;
        format_alias(f, self.alias.as_ref())
    }
}
