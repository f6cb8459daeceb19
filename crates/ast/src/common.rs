use {
    crate::{
        error::Result,
        format::{Format, FormatStateStacked, Formatter},
    },
    common::pub_fields_struct,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plain words are printed bare; anything else needs back quotes.
    fn is_bare(&self) -> bool {
        let mut chars = self.0.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    fn quoted(&self) -> String {
        if self.is_bare() {
            self.0.clone()
        } else {
            format!("`{}`", self.0.replace('`', "``"))
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Format for Identifier {
    fn format_impl(&self, f: &mut Formatter<'_>, _: FormatStateStacked) -> Result<()> {
        f.write_str(&self.quoted())
    }
}

/// Writes ` AS alias` with the alias highlighted.
pub(crate) fn format_alias(f: &mut Formatter<'_>, alias: Option<&Identifier>) -> Result<()> {
    if let Some(alias) = alias {
        f.write_char(' ')?;
        f.keyword("AS")?;
        f.write_char(' ')?;
        f.alias(&alias.quoted())?;
    }
    Ok(())
}

pub_fields_struct! {
    /// A possibly database-qualified table name.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TableIdentifier {
        #[serde(default)]
        database: Option<Identifier>,
        table: Identifier,
        #[serde(default)]
        alias: Option<Identifier>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct ColumnRef {
        #[serde(default)]
        table: Option<Identifier>,
        column: Identifier,
    }
}

impl TableIdentifier {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            database: None,
            table: Identifier::new(table),
            alias: None,
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(Identifier::new(database));
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(Identifier::new(alias));
        self
    }
}

impl Format for TableIdentifier {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        if let Some(database) = &self.database {
            database.format_impl(f, frame)?;
            f.write_char('.')?;
        }
        self.table.format_impl(f, frame)?;
        format_alias(f, self.alias.as_ref())
    }
}

impl ColumnRef {
    pub fn new(table: Option<&str>, column: &str) -> Self {
        Self {
            table: table.map(Identifier::from),
            column: Identifier::from(column),
        }
    }
}

impl Format for ColumnRef {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        if let Some(table) = &self.table {
            table.format_impl(f, frame)?;
            f.write_char('.')?;
        }
        self.column.format_impl(f, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_quoted_when_needed() -> Result<()> {
        assert_eq!(Identifier::from("events_2024").to_sql()?, "events_2024");
        assert_eq!(Identifier::from("1st").to_sql()?, "`1st`");
        assert_eq!(Identifier::from("a`b").to_sql()?, "`a``b`");
        assert_eq!(Identifier::from("").to_sql()?, "``");
        Ok(())
    }

    #[test]
    fn qualified_table_with_alias() -> Result<()> {
        let table = TableIdentifier::new("hits").with_database("default").with_alias("h");
        assert_eq!(table.to_sql()?, "default.hits AS h");
        assert_eq!(ColumnRef::new(Some("h"), "id").to_sql()?, "h.id");
        Ok(())
    }
}
