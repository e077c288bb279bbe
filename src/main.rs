use std::{fs, path::PathBuf, process};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vinculum::{
    ParseResult,
    batch::{Entry, parse_source},
    error::ParseError,
    parse,
};

/// Numeral parsed when nothing is given on the command line.
const SAMPLE_NUMERAL: &str = "XXIX";
/// Vinculum parsed when nothing is given on the command line.
const SAMPLE_VINCULUM: &str = "CXVII";

/// vinculum validates a Roman numeral and prints its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells vinculum to read requests from a file, one per line, instead of
    /// parsing a single numeral.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The numeral carrying the vinculum; its value counts a thousand times.
    #[arg(long)]
    vinculum: Option<String>,

    /// Prints results as JSON.
    #[arg(short, long)]
    json: bool,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// The numeral, or the path of the file with `--file`.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("vinculum=debug")
    } else {
        EnvFilter::new("vinculum=info")
    };

    tracing_subscriber::fmt().with_env_filter(env_filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    debug!("Logging initialized (verbose={})", args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ParseError> {
    if args.file {
        let path = args.contents.map(PathBuf::from).ok_or(ParseError::FileRequired)?;
        let source =
            fs::read_to_string(&path).map_err(|source| ParseError::Io { path, source })?;
        for entry in parse_source(&source)? {
            print_entry(&entry, args.json);
        }
        return Ok(());
    }

    let result = match (args.contents.as_deref(), args.vinculum.as_deref()) {
        (Some(numeral), vinculum) => parse(numeral, vinculum),
        (None, Some(_)) => return Err(ParseError::NumeralRequired),
        (None, None) => {
            info!("no numeral given, parsing the sample");
            parse(SAMPLE_NUMERAL, Some(SAMPLE_VINCULUM))
        },
    };

    print_result(&result, args.json);
    Ok(())
}

fn print_entry(entry: &Entry, json: bool) {
    let request = match &entry.vinculum {
        Some(vinculum) => format!("{vinculum}|{}", entry.numeral),
        None => entry.numeral.clone(),
    };

    if json {
        let line = serde_json::json!({ "line":    entry.line,
                                       "request": request,
                                       "result":  entry.result });
        println!("{line}");
    } else {
        println!("{}: {request} => {}", entry.line, entry.result);
    }
}

fn print_result(result: &ParseResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Failed to serialize the result: {e}"),
        }
    } else {
        println!("{result}");
    }
}
