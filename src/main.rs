use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;
use cscan::{
    cli::{self, ColorArg},
    diagnostic::Format,
};
use log::LevelFilter;
use termcolor::BufferWriter;

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about = "Lexical scanner for C-like source files",
    next_display_order = None,
    help_template = "\
{before-help}{name} {version}

{usage-heading} {usage}

{all-args}{after-help}",
    styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Yellow.on_default())
        .literal(AnsiColor::Green.on_default())
)]
struct Arguments {
    #[command(subcommand)]
    command: Command,

    /// Layout of the error report
    #[arg(long, value_enum, default_value_t, global = true)]
    format: Format,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t, global = true)]
    color: ColorArg,

    /// Raise the log level, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Report every lexical error in a file
    Check {
        /// File to scan, the editor is opened when omitted
        path: Option<Utf8PathBuf>,
    },
    /// Print the token table of a file
    Tokens {
        /// File to scan, the editor is opened when omitted
        path: Option<Utf8PathBuf>,

        /// Show comments as tokens
        #[arg(long)]
        comments: bool,

        /// Also print the identifier table
        #[arg(long)]
        symbols: bool,
    },
}

impl Command {
    fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Check { path } | Self::Tokens { path, .. } => path.as_ref(),
        }
    }
}

fn main() {
    let arguments = Arguments::parse();

    let input = arguments
        .command
        .path()
        .map_or_else(|| cli::EDITOR_PATH.to_owned(), ToString::to_string);
    cli::panic::add_handler(arguments.color.into(), input);
    init_logging(arguments.verbose);

    let result = match arguments.command {
        Command::Check { path } => cli::check::handle(path),
        Command::Tokens {
            path,
            comments,
            symbols,
        } => cli::tokens::handle(
            path,
            cli::tokens::Options {
                keep_comments: comments,
                symbols,
                styled: use_styling(arguments.color),
            },
        ),
    };

    let Err(error) = result else {
        return;
    };

    let buffer_writer = BufferWriter::stderr(arguments.color.into());
    let mut buffer = buffer_writer.buffer();
    if let Err(report_error) = error
        .pretty(&mut buffer, arguments.format)
        .and_then(|()| buffer_writer.print(&buffer))
    {
        log::error!("could not write the error report: {report_error}");
    }

    std::process::exit(error.exit_code());
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn use_styling(color: ColorArg) -> bool {
    match color {
        ColorArg::Auto => console::colors_enabled(),
        ColorArg::Always => true,
        ColorArg::Never => false,
    }
}
