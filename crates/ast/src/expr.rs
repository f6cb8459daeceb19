//! Scalar expressions used inside the FROM clause: join predicates, `USING`
//! column lists, table function arguments and sample ratios.
use {
    crate::{
        common::{ColumnRef, Identifier},
        error::Result,
        format::{Format, FormatStateStacked, Formatter},
    },
    common::pub_fields_struct,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Column(ColumnRef),
    Literal(Literal),
    Function(FunctionCall),
    Unary {
        op: UnaryOperator,
        expr: Box<Expression>,
    },
    Binary {
        op: BinaryOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Asterisk,
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<ColumnRef> for Expression {
    fn from(column: ColumnRef) -> Self {
        Self::Column(column)
    }
}

impl From<FunctionCall> for Expression {
    fn from(call: FunctionCall) -> Self {
        Self::Function(call)
    }
}

impl Expression {
    pub fn column(table: Option<&str>, column: &str) -> Self {
        ColumnRef::new(table, column).into()
    }

    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOperator, expr: Expression) -> Self {
        Self::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    /// Binding strength; atoms bind tighter than any operator.
    fn prec(&self) -> u8 {
        match self {
            Self::Unary { op, .. } => op.prec(),
            Self::Binary { op, .. } => op.prec(),
            _ => u8::MAX,
        }
    }

    /// Whether the rendering begins with `-` or `+`.
    fn starts_with_sign(&self) -> bool {
        match self {
            Self::Unary { op, .. } => !op.is_word(),
            Self::Literal(Literal::Int(v)) => *v < 0,
            Self::Literal(Literal::Float(v)) => v.is_sign_negative(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Null,
    Boolean(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

macro_rules! operators {
    {
        $(
            $id:ident {
                $( ($op:ident, $sql:literal, $prec:literal), )*
            }
        )*
    }
    => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
            #[serde(rename_all = "snake_case")]
            pub enum $id {
                $( $op, )*
            }

            impl $id {
                pub const fn sql(self) -> &'static str {
                    match self {
                        $( Self::$op => $sql, )*
                    }
                }

                pub const fn prec(self) -> u8 {
                    match self {
                        $( Self::$op => $prec, )*
                    }
                }

                const fn is_word(self) -> bool {
                    self.sql().as_bytes()[0].is_ascii_alphabetic()
                }
            }
        )*
    }
}

operators! {
    UnaryOperator {
        (Not, "NOT", 3),
        (Negative, "-", 9),
        (Positive, "+", 9),
    }

    BinaryOperator {
        (Or, "OR", 1),
        (And, "AND", 2),

        (Equal, "=", 4),
        (NotEqual, "!=", 4),
        (Like, "LIKE", 4),
        (GreaterThan, ">", 5),
        (GreaterThanOrEqual, ">=", 5),
        (LessThan, "<", 5),
        (LessThanOrEqual, "<=", 5),

        (Add, "+", 6),
        (Subtract, "-", 6),
        (Multiply, "*", 7),
        (Divide, "/", 7),
        (Modulo, "%", 7),
    }
}

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct FunctionCall {
        name: Identifier,
        #[serde(default)]
        arguments: ExpressionList,
    }
}

impl FunctionCall {
    pub fn new(name: &str, arguments: Vec<Expression>) -> Self {
        Self {
            name: Identifier::from(name),
            arguments: ExpressionList(arguments),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpressionList(pub Vec<Expression>);

impl ExpressionList {
    pub fn columns(names: &[&str]) -> Self {
        Self(names.iter().map(|name| Expression::column(None, name)).collect())
    }
}

impl Format for ExpressionList {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        for (i, expr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.node(expr, frame)?;
        }
        Ok(())
    }
}

impl Format for FunctionCall {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        self.name.format_impl(f, frame)?;
        f.write_char('(')?;
        self.arguments.format_impl(
            f,
            FormatStateStacked {
                need_parens: false,
                ..frame
            },
        )?;
        f.write_char(')')
    }
}

impl Format for Literal {
    fn format_impl(&self, f: &mut Formatter<'_>, _: FormatStateStacked) -> Result<()> {
        match self {
            Self::Null => f.keyword("NULL"),
            Self::Boolean(true) => f.keyword("true"),
            Self::Boolean(false) => f.keyword("false"),
            Self::Int(v) => f.write_str(&v.to_string()),
            Self::Uint(v) => f.write_str(&v.to_string()),
            Self::Float(v) => f.write_str(&format!("{v:?}")),
            Self::String(s) => {
                let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
                f.write_str(&format!("'{escaped}'"))
            }
        }
    }
}

impl Format for Expression {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
        if frame.need_parens {
            f.write_char('(')?;
        }
        let inner = FormatStateStacked {
            need_parens: false,
            ..frame
        };

        match self {
            Self::Column(column) => column.format_impl(f, inner)?,
            Self::Literal(literal) => literal.format_impl(f, inner)?,
            Self::Function(call) => call.format_impl(f, inner)?,
            Self::Asterisk => f.write_char('*')?,
            Self::Unary { op, expr } => {
                if op.is_word() {
                    f.keyword(op.sql())?;
                    f.write_char(' ')?;
                } else {
                    f.write_str(op.sql())?;
                }
                // `--` would open a comment.
                let need_parens =
                    expr.prec() < op.prec() || (!op.is_word() && expr.starts_with_sign());
                f.node(expr.as_ref(), FormatStateStacked { need_parens, ..frame })?;
            }
            Self::Binary { op, lhs, rhs } => {
                // Operators are left-associative, so an equal-precedence
                // operand only needs parentheses on the right.
                let need_parens = lhs.prec() < op.prec();
                f.node(lhs.as_ref(), FormatStateStacked { need_parens, ..frame })?;

                f.write_char(' ')?;
                if op.is_word() {
                    f.keyword(op.sql())?;
                } else {
                    f.write_str(op.sql())?;
                }
                f.write_char(' ')?;

                let need_parens = rhs.prec() <= op.prec();
                f.node(rhs.as_ref(), FormatStateStacked { need_parens, ..frame })?;
            }
        }

        if frame.need_parens {
            f.write_char(')')?;
        }
        Ok(())
    }
}
