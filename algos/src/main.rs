use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use algos::{Algorithm, fold_case};
use clap::Parser;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Algo {
    Naive,
    Kmp,
    Hashing,
    Horspool,
}

impl From<Algo> for Algorithm {
    fn from(algo: Algo) -> Self {
        match algo {
            Algo::Naive => Algorithm::Naive,
            Algo::Kmp => Algorithm::Kmp,
            Algo::Hashing => Algorithm::Hashing,
            Algo::Horspool => Algorithm::Horspool,
        }
    }
}

/// Unit in which match offsets are counted.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Unit {
    Chars,
    Bytes,
    Utf16,
}

/// Example:
/// time cargo run --release -- -t data/chimpansee_dna.txt -t data/ipsum.txt --pattern "TCGC" -a kmp --measure-time
/// cargo run --release -- -t - --pattern "lorem" -a horspool --ignore-case --unit bytes < data/ipsum.txt
#[derive(Debug, clap::Parser)]
#[command(
    name = "string-search",
    about = "Find every occurrence of one pattern in one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "naive")]
    algo: Algo,

    /// Text file to search; `-` reads stdin
    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    /// File holding the pattern; one trailing line break is dropped
    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Unit of the reported offsets
    #[arg(short = 'u', long, value_enum, default_value = "chars")]
    unit: Unit,

    /// Lowercase text and pattern before searching; offsets still refer to
    /// the unmodified text
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Only print the number of matches per text
    #[arg(long)]
    count_only: bool,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut pattern = load_pattern(&cli)?;
    if pattern.is_empty() {
        return Err("Pattern must not be empty".into());
    }
    if cli.ignore_case {
        pattern = fold_case(&pattern);
    }

    let algorithm = Algorithm::from(cli.algo);
    log::info!("searching with {algorithm} in {} text(s)", cli.texts.len());

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={}, unit={:?}, pattern-length={}",
        algorithm,
        cli.unit,
        pattern.chars().count()
    )?;

    for text_path in cli.texts.iter() {
        let mut text = load_text(text_path)?;
        if cli.ignore_case {
            text = fold_case(&text);
        }

        let (matches, duration) =
            run_algorithm(algorithm, cli.unit, &text, &pattern, cli.measure_time);
        log::debug!("{:?}: {} match(es)", text_path, matches.len());

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        if cli.count_only {
            writeln!(out, "count: {}", matches.len())?;
        } else {
            writeln!(out, "matches: {:?}", matches)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        let mut pat = load_text(path)?;
        if pat.ends_with('\n') {
            pat.pop();
            if pat.ends_with('\r') {
                pat.pop();
            }
        }
        Ok(pat)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn load_text(path: &PathBuf) -> Result<String, Box<dyn std::error::Error>> {
    let mut buf = String::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_string(&mut buf)?;
    } else {
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut buf))
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    }
    Ok(buf)
}

fn run_algorithm(
    algorithm: Algorithm,
    unit: Unit,
    text: &str,
    pattern: &str,
    measure_time: bool,
) -> (Vec<usize>, Option<Duration>) {
    // Decoding into the requested unit is not part of the measured search.
    let start;
    let result = match unit {
        Unit::Bytes => {
            start = Instant::now();
            algorithm.find_all_bytes(text.as_bytes(), pattern.as_bytes())
        }
        Unit::Chars => {
            let text: Vec<char> = text.chars().collect();
            let pattern: Vec<char> = pattern.chars().collect();
            start = Instant::now();
            algorithm.find_all_in(&text, &pattern)
        }
        Unit::Utf16 => {
            let text: Vec<u16> = text.encode_utf16().collect();
            let pattern: Vec<u16> = pattern.encode_utf16().collect();
            start = Instant::now();
            algorithm.find_all_in(&text, &pattern)
        }
    };

    let duration = measure_time.then(|| start.elapsed());

    (result, duration)
}
