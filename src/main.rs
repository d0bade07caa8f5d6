use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use course_planner::display;
use course_planner::error::LoadError;
use course_planner::loader;
use course_planner::tree::BinarySearchTree;

/// Data format error
const DATAERR: i32 = 65;
/// Cannot open input
const NOINPUT: i32 = 66;
/// Input/output error
const IOERR: i32 = 74;

/// Load a course catalog and look courses up in it
#[derive(Parser, Debug)]
#[command(name = "course_planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog to load before the menu is shown
    #[arg(short, long, env = "COURSE_PLANNER_FILE", value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Log verbosity, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut planner = Planner::default();
    if let Some(path) = &cli.file {
        if let Err(e) = planner.load(path) {
            eprintln!("{}", format!("Error: {}", e).red());
            process::exit(exit_code(&e));
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = planner.run(stdin.lock(), stdout.lock()) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        process::exit(IOERR);
    }
}

fn exit_code(e: &LoadError) -> i32 {
    match e {
        LoadError::SourceUnavailable { .. } => NOINPUT,
        LoadError::Read(_) => IOERR,
        LoadError::MalformedRow { .. } | LoadError::UnresolvedPrerequisite { .. } => DATAERR,
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::debug!(?filter, "logging initialised");
}

/// The interactive menu around a single catalog.
#[derive(Default)]
struct Planner {
    tree: BinarySearchTree,
}

impl Planner {
    /// Replaces the catalog with the contents of `path`. The old catalog is gone even when the
    /// new one is rejected.
    fn load(&mut self, path: &Path) -> Result<usize, LoadError> {
        self.tree.clear();
        self.tree = loader::build_tree(loader::load_file(path)?);
        Ok(self.tree.len())
    }

    fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "Welcome to the course planner.")?;

        loop {
            write!(
                out,
                "\n  1. Load Data Structure.\n  2. Print Course List.\n  3. Print Course.\n  9. Exit\n\n"
            )?;
            let Some(choice) = prompt(&mut input, &mut out, "What would you like to do? ")? else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    let Some(file_name) = prompt(&mut input, &mut out, "File name: ")? else {
                        break;
                    };
                    let start = Instant::now();
                    match self.load(Path::new(&file_name)) {
                        Ok(count) => writeln!(out, "Loaded {} courses.", count)?,
                        Err(e) => writeln!(out, "ERROR: {}", e)?,
                    }
                    write_elapsed(&mut out, start.elapsed())?;
                }
                "2" => display::write_listing(&mut out, &self.tree)?,
                "3" => {
                    let Some(number) =
                        prompt(&mut input, &mut out, "What course do you want to know about? ")?
                    else {
                        break;
                    };
                    let number = number.to_uppercase();
                    let start = Instant::now();
                    let found = self.tree.search(&number);
                    let elapsed = start.elapsed();
                    writeln!(out, "{}", display::lookup(&number, found))?;
                    write_elapsed(&mut out, elapsed)?;
                }
                "9" => break,
                other => writeln!(out, "{} is not a valid option.", other)?,
            }
        }

        writeln!(out, "Thank you for using the course planner!")?;
        Ok(())
    }
}

/// Shows `text` and reads one trimmed line. `None` means the input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "time: {:.6} seconds", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = "\
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI200,Data Structures,CSCI101
CSCI101,Introduction to Programming in C++,CSCI100
CSCI100,Introduction to Computer Science
MATH201,Discrete Mathematics
";

    fn session(planner: &mut Planner, script: &str) -> String {
        let mut out = Vec::new();
        planner.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write_catalog(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("courses.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_counts_debug_flags() {
        let cli = Cli::try_parse_from(["course_planner", "-dd", "--file", "courses.csv"]).unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.file, Some(PathBuf::from("courses.csv")));
    }

    #[test]
    fn test_load_list_and_search() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, CATALOG);
        let mut planner = Planner::default();

        let output = session(
            &mut planner,
            &format!("1\n{}\n2\n3\ncsci300\n3\nCSCI999\n9\n", path.display()),
        );

        assert!(output.starts_with("Welcome to the course planner."));
        assert!(output.contains("Loaded 5 courses."));
        assert!(output.contains(
            "CSCI100, Introduction to Computer Science\n\
             CSCI101, Introduction to Programming in C++\n\
             CSCI200, Data Structures\n\
             CSCI300, Introduction to Algorithms\n\
             MATH201, Discrete Mathematics\n"
        ));
        assert!(output.contains(
            "CSCI300, Introduction to Algorithms\nPrerequisites: CSCI200, MATH201\n"
        ));
        assert!(output.contains("Course number CSCI999 not found."));
        assert!(output.trim_end().ends_with("Thank you for using the course planner!"));
    }

    #[test]
    fn test_failed_load_leaves_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let good = write_catalog(&dir, CATALOG);
        let bad = dir.path().join("bad.csv");
        fs::write(&bad, "CSCI200,Data Structures,CSCI101\n").unwrap();

        let mut planner = Planner::default();
        assert_eq!(planner.load(&good).unwrap(), 5);

        let err = planner.load(&bad).unwrap_err();
        assert!(matches!(err, LoadError::UnresolvedPrerequisite { .. }));
        assert!(planner.tree.is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        let mut planner = Planner::default();

        let output = session(&mut planner, &format!("1\n{}\n9\n", missing.display()));

        assert!(output.contains("ERROR: Could not open file"));
        assert!(planner.tree.is_empty());
        assert_eq!(exit_code(&planner.load(&missing).unwrap_err()), NOINPUT);
    }

    #[test]
    fn test_invalid_option_and_end_of_input() {
        let mut planner = Planner::default();

        let output = session(&mut planner, "4\nabc\n");

        assert!(output.contains("4 is not a valid option."));
        assert!(output.contains("abc is not a valid option."));
        assert!(output.trim_end().ends_with("Thank you for using the course planner!"));
    }

    #[test]
    fn test_search_on_empty_catalog() {
        let mut planner = Planner::default();

        let output = session(&mut planner, "3\nCS999\n9\n");

        assert!(output.contains("Course number CS999 not found."));
    }
}
