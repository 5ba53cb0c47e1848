//! Command-line parsing for the routine driver.

use std::env;
use std::path::PathBuf;
use std::process;

use getopts::Options;

/// Parsed global options plus the command to run.
pub struct Args {
    pub db_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub log_dir: Option<String>,
    pub command: Command,
}

/// One subcommand taken from the free arguments.
pub enum Command {
    List,
    Layout,
    Add(DraftArgs),
    Edit { id: String, draft: DraftArgs },
    Delete { id: String },
    Clock { use_24h: bool },
    ImportLegacy { path: PathBuf },
}

/// Raw event fields for `add` and `edit`, validated by the core.
pub struct DraftArgs {
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Option<String>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "d",
        "db",
        "SQLite file holding the routine [Default: routine.sqlite3]",
        "PATH",
    );
    opts.optopt(
        "c",
        "config",
        "JSON file overriding timeline defaults and zones",
        "PATH",
    );
    opts.optopt(
        "l",
        "log-dir",
        "Absolute directory for rolling log files [Default: logging disabled]",
        "DIR",
    );
    opts
}

const COMMANDS_USAGE: &str = "Commands:
    list                                  List stored events
    layout                                Print the laid-out day
    add TITLE START END [COLOR]           Add an event (times as HH:MM)
    edit ID TITLE START END [COLOR]       Replace an event
    delete ID                             Delete an event
    clock 12|24                           Set the display clock format
    import-legacy FILE                    Import a weekly planner export";

fn usage(opts: &Options) -> String {
    format!(
        "{}\n{COMMANDS_USAGE}",
        opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME")))
    )
}

fn fail(message: impl AsRef<str>, opts: &Options) -> ! {
    eprintln!("{}\n\n{}", message.as_ref(), usage(opts));
    process::exit(1);
}

/// Parses `args` (without the program name), exiting on usage errors.
pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", usage(&opts));
        process::exit(0);
    }

    let db_path = matches
        .opt_str("db")
        .map_or_else(|| PathBuf::from("routine.sqlite3"), PathBuf::from);
    let config_path = matches.opt_str("config").map(PathBuf::from);
    let log_dir = matches.opt_str("log-dir");

    let mut free = matches.free.into_iter();
    let command = match free.next().as_deref() {
        None | Some("list") => Command::List,
        Some("layout") => Command::Layout,
        Some("add") => Command::Add(parse_draft(&mut free, &opts)),
        Some("edit") => {
            let id = free
                .next()
                .unwrap_or_else(|| fail("edit requires an event ID", &opts));
            Command::Edit {
                id,
                draft: parse_draft(&mut free, &opts),
            }
        }
        Some("delete") => Command::Delete {
            id: free
                .next()
                .unwrap_or_else(|| fail("delete requires an event ID", &opts)),
        },
        Some("clock") => match free.next().as_deref() {
            Some("24") => Command::Clock { use_24h: true },
            Some("12") => Command::Clock { use_24h: false },
            _ => fail("clock expects 12 or 24", &opts),
        },
        Some("import-legacy") => Command::ImportLegacy {
            path: free
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| fail("import-legacy requires a file", &opts)),
        },
        Some(other) => fail(format!("Unknown command '{other}'"), &opts),
    };

    Args {
        db_path,
        config_path,
        log_dir,
        command,
    }
}

fn parse_draft(free: &mut impl Iterator<Item = String>, opts: &Options) -> DraftArgs {
    let (Some(title), Some(start), Some(end)) = (free.next(), free.next(), free.next()) else {
        fail("expected TITLE START END", opts);
    };
    DraftArgs {
        title,
        start,
        end,
        color: free.next(),
    }
}
