use {snafu::prelude::*, std::backtrace::Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to write formatted output"))]
    Write {
        source: std::fmt::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("join kind {} is not supported", code))]
    UnsupportedJoinKind { code: u8 },

    #[snafu(display("join strictness {} is not supported", code))]
    UnsupportedJoinStrictness { code: u8 },

    #[snafu(display("join locality {} is not supported", code))]
    UnsupportedJoinLocality { code: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
