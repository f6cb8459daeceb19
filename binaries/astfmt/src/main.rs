use {
    astfmt::cmd::{self, Error as ExecutionError, FormatOptions, NodeKind},
    ast::FormatSettings,
    clap::{arg, value_parser, Arg, ArgAction, ArgMatches, Command},
    snafu::prelude::*,
    std::{env, path::PathBuf, process},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    ExecuteCommand {
        #[snafu(backtrace)]
        source: ExecutionError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const ASTFMT_INPUT: &str = "ASTFMT_INPUT";

const FORMAT: &str = "format";
const TREE: &str = "tree";

fn node_arg() -> Arg {
    Arg::new("node")
        .long("node")
        .value_parser(["from", "select"])
        .default_value("from")
        .help("node type encoded by the input")
}

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .subcommand(
            Command::new(FORMAT)
                .about("print the SQL rendering of a JSON syntax tree")
                .arg(
                    Arg::new("one_line")
                        .long("one-line")
                        .action(ArgAction::SetTrue)
                        .help("render on a single line"),
                )
                .arg(
                    Arg::new("hilite")
                        .long("hilite")
                        .action(ArgAction::SetTrue)
                        .help("highlight keywords with terminal escapes"),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .value_parser(value_parser!(usize))
                        .default_value("0")
                        .help("starting nesting depth"),
                )
                .arg(node_arg())
                .arg(arg!([FILE] "input file, defaults to stdin")),
        )
        .subcommand(
            Command::new(TREE)
                .about("list the nodes of a JSON syntax tree depth first")
                .arg(node_arg())
                .arg(arg!([FILE] "input file, defaults to stdin")),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn input_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("FILE")
        .cloned()
        .or_else(|| env::var(ASTFMT_INPUT).ok())
        .map(PathBuf::from)
}

fn node_kind(matches: &ArgMatches) -> NodeKind {
    matches
        .get_one::<String>("node")
        .and_then(|name| NodeKind::from_name(name))
        .unwrap_or_default()
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();
    match matches.subcommand() {
        Some((FORMAT, sub_matches)) => {
            let input = cmd::read_input(input_path(sub_matches).as_deref())
                .context(ExecuteCommandSnafu)?;

            let options = FormatOptions {
                settings: FormatSettings::new(
                    sub_matches.get_flag("one_line"),
                    sub_matches.get_flag("hilite"),
                ),
                indent: sub_matches.get_one::<usize>("indent").copied().unwrap_or(0),
                node: node_kind(sub_matches),
            };

            let sql = cmd::format_source(&input, &options).context(ExecuteCommandSnafu)?;
            println!("{}", sql);
        }
        Some((TREE, sub_matches)) => {
            let input = cmd::read_input(input_path(sub_matches).as_deref())
                .context(ExecuteCommandSnafu)?;

            let tree = cmd::tree_source(&input, node_kind(sub_matches)).context(ExecuteCommandSnafu)?;
            print!("{}", tree);
        }
        _ => unreachable!(),
    }

    Ok(())
}
