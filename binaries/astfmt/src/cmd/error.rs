use {snafu::prelude::*, std::path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed to read {}, source: {}", path.display(), source))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to read standard input, source: {}", source))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("Failed to decode syntax tree, source: {}", source))]
    Decode { source: serde_json::Error },

    #[snafu(display("Failed to format syntax tree, source: {}", source))]
    Format {
        #[snafu(backtrace)]
        source: ast::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
