use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use log::error;

use dumpbolt::{dump, open, render, Style};

/// Prints the contents of a Bolt database, optionally starting at the given
/// path(s), which should be a list of nested buckets formatted as a unix
/// path (use -p if a bucket contains a "/").
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
  /// Bolt database file to dump
  db: PathBuf,

  /// Bucket path(s) to start from; the whole database when omitted
  starts: Vec<String>,

  /// Bucket separator
  #[arg(short = 'p', long, default_value = "/")]
  separator: String,

  /// Print a full path for every key/value pair
  #[arg(short = 'a', long)]
  all_paths: bool,

  /// Number of spaces to indent each bucket level
  #[arg(short, long, default_value_t = 8)]
  indent: usize,

  /// Database open timeout
  #[arg(short, long, default_value = "1s", value_parser = humantime::parse_duration)]
  timeout: Duration,
}

fn main() -> ExitCode {
  env_logger::init();
  let args = Args::parse();

  if args.separator.is_empty() {
    Args::command()
      .error(
        clap::error::ErrorKind::InvalidValue,
        "separator must not be empty",
      )
      .exit();
  }

  let db = match open(&args.db, args.timeout) {
    Ok(db) => db,
    Err(err) => {
      error!("{err}");
      return ExitCode::from(2);
    }
  };

  let sep = args.separator.as_bytes();
  let style = Style::new(sep, args.all_paths, args.indent);
  let starts: Vec<Vec<u8>> = if args.starts.is_empty() {
    vec![sep.to_vec()]
  } else {
    args.starts.iter().map(|s| s.as_bytes().to_vec()).collect()
  };

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut usable = 0usize;
  for start in &starts {
    match dump(&db, start, &style, &mut out) {
      Ok(()) => usable += 1,
      Err(err) => error!("error dumping from {}: {err}", render::text(start)),
    }
  }
  let _ = out.flush();
  if usable == 0 {
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
