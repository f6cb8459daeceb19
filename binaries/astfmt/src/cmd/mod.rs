mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

use {
    ast::{
        AstRef, FormatSettings, FormatStateStacked, Formatter, SelectQuery,
        TablesInSelectQuery,
    },
    error::{DecodeSnafu, FormatSnafu, ReadFileSnafu, ReadStdinSnafu},
    snafu::prelude::*,
    std::{io::Read, path::Path},
};

/// Which node type the JSON input encodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    From,
    Select,
}

impl NodeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "from" => Some(Self::From),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub settings: FormatSettings,
    pub indent: usize,
    pub node: NodeKind,
}

enum Tree {
    From(TablesInSelectQuery),
    Select(SelectQuery),
}

impl Tree {
    fn decode(json: &str, node: NodeKind) -> Result<Self> {
        Ok(match node {
            NodeKind::From => Self::From(serde_json::from_str(json).context(DecodeSnafu)?),
            NodeKind::Select => Self::Select(serde_json::from_str(json).context(DecodeSnafu)?),
        })
    }

    fn root(&self) -> AstRef<'_> {
        match self {
            Self::From(tables) => tables.into(),
            Self::Select(query) => query.into(),
        }
    }
}

/// Reads `path`, or standard input when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading syntax tree");
            std::fs::read_to_string(path).context(ReadFileSnafu { path })
        }
        None => {
            tracing::debug!("reading syntax tree from stdin");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context(ReadStdinSnafu)?;
            Ok(input)
        }
    }
}

/// Decodes `json` and renders it with `options`.
pub fn format_source(json: &str, options: &FormatOptions) -> Result<String> {
    let tree = Tree::decode(json, options.node)?;
    tracing::debug!(node = tree.root().kind_name(), "decoded syntax tree");

    let frame = FormatStateStacked {
        indent: options.indent,
        need_parens: false,
    };
    let mut out = String::new();
    let mut f = Formatter::new(&mut out, options.settings);
    match &tree {
        Tree::From(tables) => f.node(tables, frame),
        Tree::Select(query) => f.node(query, frame),
    }
    .context(FormatSnafu)?;

    tracing::trace!(nodes = f.state.nodes_formatted(), "formatted syntax tree");
    Ok(out)
}

/// Decodes `json` and lists its nodes depth first, one per line, indented
/// by two spaces per level.
pub fn tree_source(json: &str, node: NodeKind) -> Result<String> {
    let tree = Tree::decode(json, node)?;

    let mut out = String::new();
    tree.root().walk(&mut |node, depth| {
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.kind_name());
        out.push('\n');
    });
    Ok(out)
}
