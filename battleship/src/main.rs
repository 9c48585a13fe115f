use std::{error::Error, fmt, io, path::Path, process};

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::error;

/// Match file read when no path is given.
const DEFAULT_INPUT: &str = "sample.txt";

fn main() {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Plays a single round of salvo battleship described by a match file.")
        .arg(
            Arg::with_name("INPUT")
                .help("match file to play")
                .index(1)
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("do not log anything to stderr"),
        )
        .get_matches();

    if !matches.is_present("quiet") {
        env_logger::init_from_env(Env::default().default_filter_or("warn"));
    }

    if let Err(err) = run(&matches) {
        error!("{}", ErrorChain(err.as_ref()));
        process::exit(1);
    }
}

/// Play the match file named on the command line and print the report to stdout.
fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let path = Path::new(matches.value_of("INPUT").unwrap_or(DEFAULT_INPUT));
    let report = broadside::play_file(path)?;
    let stdout = io::stdout();
    report.write_to(&mut stdout.lock())?;
    Ok(())
}

/// Display helper that prints an error followed by each of its sources.
struct ErrorChain<'a>(&'a (dyn Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}
