use {
    crate::{
        error::{
            Error, Result, UnsupportedJoinKindSnafu, UnsupportedJoinLocalitySnafu,
            UnsupportedJoinStrictnessSnafu,
        },
        expr::{Expression, ExpressionList},
        format::{Format, FormatStateStacked, Formatter},
        node::AstRef,
    },
    common::code_enum,
    serde::{Deserialize, Serialize},
    snafu::prelude::*,
};

code_enum! {
    #[derive(Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum JoinLocality {
        #[default]
        Unspecified,
        Local,
        Global,
    }
}

code_enum! {
    #[derive(Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum JoinStrictness {
        #[default]
        Unspecified,
        Any,
        All,
    }
}

code_enum! {
    #[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum JoinKind {
        Inner,
        Left,
        Right,
        Full,
        Cross,
        Comma,
        Anti,
    }
}

impl JoinLocality {
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Unspecified | Self::Local => None,
            Self::Global => Some("GLOBAL"),
        }
    }
}

impl JoinStrictness {
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::Any => Some("ANY"),
            Self::All => Some("ALL"),
        }
    }
}

impl JoinKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL OUTER JOIN",
            Self::Cross => "CROSS JOIN",
            Self::Comma => ",",
            Self::Anti => "ANTI JOIN",
        }
    }

    /// Cross and comma joins have no matching step, so ANY/ALL is moot.
    pub const fn has_strictness(self) -> bool {
        !matches!(self, Self::Cross | Self::Comma)
    }
}

impl TryFrom<u8> for JoinLocality {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code).context(UnsupportedJoinLocalitySnafu { code })
    }
}

impl TryFrom<u8> for JoinStrictness {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code).context(UnsupportedJoinStrictnessSnafu { code })
    }
}

impl TryFrom<u8> for JoinKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code).context(UnsupportedJoinKindSnafu { code })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinConstraint {
    Using(ExpressionList),
    On(Expression),
}

/// How a table expression joins with the one before it.
///
/// Rendering is split in two because the owning element prints the table
/// between the join keywords and the join constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableJoin {
    #[serde(default)]
    pub locality: JoinLocality,
    #[serde(default)]
    pub strictness: JoinStrictness,
    pub kind: JoinKind,
    #[serde(default)]
    pub constraint: Option<JoinConstraint>,
}

impl TableJoin {
    pub fn new(kind: JoinKind) -> Self {
        Self {
            locality: JoinLocality::default(),
            strictness: JoinStrictness::default(),
            kind,
            constraint: None,
        }
    }

    pub fn global(mut self) -> Self {
        self.locality = JoinLocality::Global;
        self
    }

    pub fn with_strictness(mut self, strictness: JoinStrictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn using(mut self, columns: ExpressionList) -> Self {
        self.constraint = Some(JoinConstraint::Using(columns));
        self
    }

    pub fn on(mut self, cond: Expression) -> Self {
        self.constraint = Some(JoinConstraint::On(cond));
        self
    }

    pub fn using_expression_list(&self) -> Option<&ExpressionList> {
        match &self.constraint {
            Some(JoinConstraint::Using(list)) => Some(list),
            _ => None,
        }
    }

    pub fn on_expression(&self) -> Option<&Expression> {
        match &self.constraint {
            Some(JoinConstraint::On(cond)) => Some(cond),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<AstRef<'_>> {
        match &self.constraint {
            Some(JoinConstraint::Using(list)) => vec![list.into()],
            Some(JoinConstraint::On(cond)) => vec![cond.into()],
            None => vec![],
        }
    }

    /// `[GLOBAL] [ANY|ALL] <kind>`, highlighted as a single keyword run.
    pub fn format_before_table(&self, f: &mut Formatter<'_>, _: FormatStateStacked) -> Result<()> {
        let mut keywords = String::new();

        if let Some(locality) = self.locality.keyword() {
            keywords.push_str(locality);
            keywords.push(' ');
        }

        if self.kind.has_strictness() {
            if let Some(strictness) = self.strictness.keyword() {
                keywords.push_str(strictness);
                keywords.push(' ');
            }
        }

        keywords.push_str(self.kind.keyword());
        f.keyword(&keywords)
    }

    /// `USING (...)`, `ON ...` or nothing.
    pub fn format_after_table(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        let frame = FormatStateStacked {
            need_parens: false,
            ..frame
        };

        match &self.constraint {
            Some(JoinConstraint::Using(list)) => {
                f.keyword("USING")?;
                f.write_str(" (")?;
                f.node(list, frame)?;
                f.write_char(')')
            }
            Some(JoinConstraint::On(cond)) => {
                f.keyword("ON")?;
                f.write_char(' ')?;
                f.node(cond, frame)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{expr::BinaryOperator, format::FormatSettings},
    };

    fn render(
        join: &TableJoin,
        phase: fn(&TableJoin, &mut Formatter<'_>, FormatStateStacked) -> Result<()>,
    ) -> Result<String> {
        let mut out = String::new();
        let mut f = Formatter::new(&mut out, FormatSettings::one_line());
        phase(join, &mut f, FormatStateStacked::default())?;
        Ok(out)
    }

    #[test]
    fn any_left_join_on() -> Result<()> {
        let join = TableJoin::new(JoinKind::Left)
            .with_strictness(JoinStrictness::Any)
            .on(Expression::binary(
                BinaryOperator::Equal,
                Expression::column(Some("a"), "id"),
                Expression::column(Some("b"), "id"),
            ));

        assert_eq!(render(&join, TableJoin::format_before_table)?, "ANY LEFT JOIN");
        assert_eq!(render(&join, TableJoin::format_after_table)?, "ON a.id = b.id");
        Ok(())
    }

    #[test]
    fn cross_join_drops_strictness() -> Result<()> {
        let join = TableJoin::new(JoinKind::Cross).with_strictness(JoinStrictness::All);

        assert_eq!(render(&join, TableJoin::format_before_table)?, "CROSS JOIN");
        assert_eq!(render(&join, TableJoin::format_after_table)?, "");
        Ok(())
    }

    #[test]
    fn strictness_never_printed_for_cross_or_comma() -> Result<()> {
        for &kind in JoinKind::ALL {
            for &strictness in JoinStrictness::ALL {
                for &locality in JoinLocality::ALL {
                    let join = TableJoin {
                        locality,
                        strictness,
                        kind,
                        constraint: None,
                    };
                    let sql = render(&join, TableJoin::format_before_table)?;

                    assert!(sql.ends_with(kind.keyword()));
                    assert_eq!(sql.starts_with("GLOBAL "), locality == JoinLocality::Global);
                    let printed = sql.contains("ANY ") || sql.contains("ALL ");
                    assert_eq!(
                        printed,
                        kind.has_strictness() && strictness != JoinStrictness::Unspecified
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn global_all_full_join_using() -> Result<()> {
        let join = TableJoin::new(JoinKind::Full)
            .global()
            .with_strictness(JoinStrictness::All)
            .using(ExpressionList::columns(&["x", "y"]));

        assert_eq!(render(&join, TableJoin::format_before_table)?, "GLOBAL ALL FULL OUTER JOIN");
        assert_eq!(render(&join, TableJoin::format_after_table)?, "USING (x, y)");
        Ok(())
    }

    #[test]
    fn local_prints_nothing() -> Result<()> {
        let mut join = TableJoin::new(JoinKind::Comma);
        join.locality = JoinLocality::Local;

        assert_eq!(render(&join, TableJoin::format_before_table)?, ",");
        Ok(())
    }

    #[test]
    fn raw_codes() {
        assert_eq!(JoinKind::try_from(2).unwrap(), JoinKind::Right);
        assert_eq!(JoinKind::try_from(6).unwrap(), JoinKind::Anti);
        assert_eq!(JoinStrictness::try_from(1).unwrap(), JoinStrictness::Any);
        assert_eq!(JoinLocality::try_from(2).unwrap(), JoinLocality::Global);

        let err = JoinKind::try_from(7).unwrap_err();
        assert!(matches!(err, Error::UnsupportedJoinKind { code: 7 }));
        assert_eq!(err.to_string(), "join kind 7 is not supported");
        assert!(matches!(
            JoinStrictness::try_from(3),
            Err(Error::UnsupportedJoinStrictness { code: 3 })
        ));
        assert!(matches!(
            JoinLocality::try_from(200),
            Err(Error::UnsupportedJoinLocality { code: 200 })
        ));
    }

    #[test]
    fn children_follow_constraint() {
        assert!(TableJoin::new(JoinKind::Cross).children().is_empty());

        let join = TableJoin::new(JoinKind::Inner).using(ExpressionList::columns(&["x"]));
        let children = join.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind_name(), "ExpressionList");
        assert!(join.on_expression().is_none());
    }
}
