//! Rendering of syntax trees back into SQL text.
//!
//! Every node implements [`Format`]. A traversal shares one [`Formatter`],
//! which owns the output sink together with the [`FormatSettings`] and the
//! [`FormatState`]; the per-call [`FormatStateStacked`] frame is passed by
//! value so changes made for one child never leak to its siblings.

use {
    crate::error::{Result, WriteSnafu},
    snafu::prelude::*,
    std::fmt::Write,
};

pub const HILITE_KEYWORD: &str = "\x1b[1m";
pub const HILITE_ALIAS: &str = "\x1b[0;32m";
pub const HILITE_NONE: &str = "\x1b[0m";

const INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSettings {
    /// Suppress newlines and indentation.
    pub one_line: bool,
    /// Wrap keywords and aliases in terminal highlight markers.
    pub hilite: bool,
    /// Separator emitted between clause lines.
    pub nl_or_ws: char,
}

impl FormatSettings {
    pub const fn new(one_line: bool, hilite: bool) -> Self {
        Self {
            one_line,
            hilite,
            nl_or_ws: if one_line { ' ' } else { '\n' },
        }
    }

    pub const fn one_line() -> Self {
        Self::new(true, false)
    }
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// State shared across a whole traversal. Nodes thread it through without
/// looking inside.
#[derive(Debug, Default)]
pub struct FormatState {
    nodes_formatted: usize,
}

impl FormatState {
    pub fn nodes_formatted(&self) -> usize {
        self.nodes_formatted
    }
}

/// The per-call frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatStateStacked {
    pub indent: usize,
    pub need_parens: bool,
}

impl FormatStateStacked {
    /// A frame one nesting level deeper, with parentheses reset.
    pub fn nested(self) -> Self {
        Self {
            indent: self.indent + 1,
            need_parens: false,
        }
    }
}

pub struct Formatter<'w> {
    out: &'w mut dyn Write,
    pub settings: FormatSettings,
    pub state: FormatState,
}

impl<'w> Formatter<'w> {
    pub fn new(out: &'w mut dyn Write, settings: FormatSettings) -> Self {
        Self {
            out,
            settings,
            state: FormatState::default(),
        }
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.out.write_str(s).context(WriteSnafu)
    }

    pub fn write_char(&mut self, c: char) -> Result<()> {
        self.out.write_char(c).context(WriteSnafu)
    }

    /// Writes `text` wrapped in the keyword markers when highlighting is on.
    /// Only the keyword itself is wrapped, never surrounding separators.
    pub fn keyword(&mut self, text: &str) -> Result<()> {
        self.hilite(HILITE_KEYWORD, text)
    }

    pub fn alias(&mut self, text: &str) -> Result<()> {
        self.hilite(HILITE_ALIAS, text)
    }

    fn hilite(&mut self, marker: &str, text: &str) -> Result<()> {
        if self.settings.hilite {
            self.write_str(marker)?;
            self.write_str(text)?;
            self.write_str(HILITE_NONE)
        } else {
            self.write_str(text)
        }
    }

    pub fn nl_or_ws(&mut self) -> Result<()> {
        let sep = self.settings.nl_or_ws;
        self.write_char(sep)
    }

    pub fn indent_str(&self, frame: FormatStateStacked) -> String {
        if self.settings.one_line {
            String::new()
        } else {
            " ".repeat(INDENT_WIDTH * frame.indent)
        }
    }

    /// Writes the separator followed by the indentation of `frame`; this is
    /// how every clause line after the first is started.
    pub fn new_line(&mut self, frame: FormatStateStacked) -> Result<()> {
        let indent = self.indent_str(frame);
        self.nl_or_ws()?;
        self.write_str(&indent)
    }

    /// Formats a child node, keeping count of visited nodes in the state.
    pub fn node<N: Format + ?Sized>(&mut self, node: &N, frame: FormatStateStacked) -> Result<()> {
        self.state.nodes_formatted += 1;
        node.format_impl(self, frame)
    }
}

pub trait Format {
    fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()>;

    /// Renders the node with `settings` into a fresh string.
    fn format_with(&self, settings: FormatSettings) -> Result<String> {
        let mut out = String::new();
        let mut f = Formatter::new(&mut out, settings);
        f.node(self, FormatStateStacked::default())?;
        tracing::trace!(
            one_line = settings.one_line,
            hilite = settings.hilite,
            nodes = f.state.nodes_formatted(),
            "formatted syntax tree"
        );
        Ok(out)
    }

    /// Single-line rendering without highlighting.
    fn to_sql(&self) -> Result<String> {
        self.format_with(FormatSettings::one_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Word(&'static str);

    impl Format for Word {
        fn format_impl(&self, f: &mut Formatter<'_>, frame: FormatStateStacked) -> Result<()> {
            f.keyword(self.0)?;
            f.new_line(frame.nested())?;
            f.write_str("x")
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write_str(&mut self, _: &str) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn settings_pick_separator() {
        assert_eq!(FormatSettings::new(true, false).nl_or_ws, ' ');
        assert_eq!(FormatSettings::default().nl_or_ws, '\n');
    }

    #[test]
    fn indentation_follows_depth() -> Result<()> {
        assert_eq!(Word("FINAL").format_with(FormatSettings::default())?, "FINAL\n    x");
        assert_eq!(Word("FINAL").to_sql()?, "FINAL x");
        Ok(())
    }

    #[test]
    fn hilite_wraps_keyword_only() -> Result<()> {
        let sql = Word("FINAL").format_with(FormatSettings::new(true, true))?;
        assert_eq!(sql, format!("{HILITE_KEYWORD}FINAL{HILITE_NONE} x"));
        Ok(())
    }

    #[test]
    fn sink_failure_is_reported() {
        let mut sink = Broken;
        let mut f = Formatter::new(&mut sink, FormatSettings::default());
        let err = f.node(&Word("FINAL"), FormatStateStacked::default()).unwrap_err();
        assert!(matches!(err, crate::Error::Write { .. }));
    }
}
