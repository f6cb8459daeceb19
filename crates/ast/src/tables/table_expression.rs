use {
    crate::{
        common::TableIdentifier,
        error::Result,
        expr::{Expression, FunctionCall},
        format::{Format, FormatStateStacked, Formatter},
        node::AstRef,
        select::Subquery,
    },
    common::pub_fields_struct,
    serde::{Deserialize, Serialize},
};

/// The single data source of a [`TableExpression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSource {
    Table(TableIdentifier),
    Function(FunctionCall),
    Subquery(Subquery),
}

pub_fields_struct! {
    /// `SAMPLE size [OFFSET offset]`. An offset can only exist together with
    /// a size.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        size: Expression,
        #[serde(default)]
        offset: Option<Expression>,
    }

    /// One data source in a FROM clause, with its `FINAL` and `SAMPLE`
    /// modifiers.
    ///
    /// A missing source is tolerated and renders no source text; the parser
    /// never builds one.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct TableExpression {
        #[serde(default)]
        source: Option<TableSource>,
        #[serde(default, rename = "final")]
        is_final: bool,
        #[serde(default)]
        sample: Option<Sample>,
    }
}

impl TableExpression {
    pub fn new(source: TableSource) -> Self {
        Self {
            source: Some(source),
            ..Default::default()
        }
    }

    pub fn table(table: TableIdentifier) -> Self {
        Self::new(TableSource::Table(table))
    }

    pub fn function(call: FunctionCall) -> Self {
        Self::new(TableSource::Function(call))
    }

    pub fn subquery(subquery: Subquery) -> Self {
        Self::new(TableSource::Subquery(subquery))
    }

    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_sample(mut self, size: Expression, offset: Option<Expression>) -> Self {
        self.sample = Some(Sample { size, offset });
        self
    }

    pub fn database_and_table_name(&self) -> Option<&TableIdentifier> {
        match &self.source {
            Some(TableSource::Table(table)) => Some(table),
            _ => None,
        }
    }

    pub fn table_function(&self) -> Option<&FunctionCall> {
        match &self.source {
            Some(TableSource::Function(call)) => Some(call),
            _ => None,
        }
    }

    pub fn subquery_source(&self) -> Option<&Subquery> {
        match &self.source {
            Some(TableSource::Subquery(subquery)) => Some(subquery),
            _ => None,
        }
    }

    pub fn sample_size(&self) -> Option<&Expression> {
        self.sample.as_ref().map(|sample| &sample.size)
    }

    pub fn sample_offset(&self) -> Option<&Expression> {
        self.sample.as_ref().and_then(|sample| sample.offset.as_ref())
    }

    /// Source, sample size, sample offset; absent fields are skipped.
    pub fn children(&self) -> Vec<AstRef<'_>> {
        let mut children: Vec<AstRef<'_>> = vec![];
        match &self.source {
            Some(TableSource::Table(table)) => children.push(table.into()),
            Some(TableSource::Function(call)) => children.push(call.into()),
            Some(TableSource::Subquery(subquery)) => children.push(subquery.into()),
            None => {}
        }
        if let Some(sample) = &self.sample {
            children.push((&sample.size).into());
            if let Some(offset) = &sample.offset {
                children.push(offset.into());
            }
        }
        children
    }
}

impl Format for TableExpression {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        match &self.source {
            Some(TableSource::Table(table)) => f.node(table, frame)?,
            Some(TableSource::Function(call)) => f.node(call, frame)?,
            Some(TableSource::Subquery(subquery)) => f.node(subquery, frame)?,
            None => {}
        }

        if self.is_final {
            f.new_line(frame)?;
            f.keyword("FINAL")?;
        }

        if let Some(Sample { size, offset }) = &self.sample {
            let frame = FormatStateStacked {
                need_parens: false,
                ..frame
            };

            f.new_line(frame)?;
            f.keyword("SAMPLE")?;
            f.write_char(' ')?;
            f.node(size, frame)?;

            if let Some(offset) = offset {
                f.write_char(' ')?;
                f.keyword("OFFSET")?;
                f.write_char(' ')?;
                f.node(offset, frame)?;
            }
        }

        Ok(())
    }
}
