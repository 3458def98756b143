use std::thread;
use std::time::{Duration, Instant};

use algos::Algorithm;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// Configuration
const CORPUS_LEN: usize = 1 << 20;
const SEED: u64 = 0x5eed_cafe;

const PATTERNS: &[(&str, &str)] = &[
    ("TCGC", "Short DNA"),
    ("GATTACA", "Medium DNA"),
    ("Lorem", "Common Word"),
    ("aaaaaaab", "Adversarial"),
    ("XYZXYZMISSING", "Not Present"),
];

const IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. ";

struct Corpus {
    name: &'static str,
    text: Vec<u8>,
}

#[derive(Debug)]
struct ResultEntry {
    algo: Algorithm,
    pattern: String,
    file: &'static str,
    duration: Duration,
    found_count: usize,
}

#[derive(Debug)]
struct Mismatch {
    algo: Algorithm,
    pattern: String,
    file: &'static str,
    expected: usize,
    actual: usize,
}

fn build_corpora() -> Vec<Corpus> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let dna = (0..CORPUS_LEN)
        .map(|_| b"ACGT"[rng.gen_range(0..4usize)])
        .collect();

    let ipsum = IPSUM.bytes().cycle().take(CORPUS_LEN).collect();

    let mut runs = vec![b'a'; CORPUS_LEN];
    for i in (0..CORPUS_LEN).step_by(4096) {
        runs[i] = b'b';
    }

    vec![
        Corpus {
            name: "dna.txt",
            text: dna,
        },
        Corpus {
            name: "ipsum.txt",
            text: ipsum,
        },
        Corpus {
            name: "runs.txt",
            text: runs,
        },
    ]
}

fn run_corpus(corpus: &Corpus) -> (Vec<ResultEntry>, Vec<Mismatch>) {
    let mut results = Vec::new();
    let mut mismatches = Vec::new();

    for (pattern, _) in PATTERNS {
        let mut expected = None;

        for algo in Algorithm::ALL {
            let start = Instant::now();
            let found = algo.find_all_bytes(&corpus.text, pattern.as_bytes());
            let duration = start.elapsed();

            match expected {
                None => expected = Some(found.clone()),
                Some(ref reference) if *reference != found => mismatches.push(Mismatch {
                    algo,
                    pattern: pattern.to_string(),
                    file: corpus.name,
                    expected: reference.len(),
                    actual: found.len(),
                }),
                Some(_) => {}
            }

            results.push(ResultEntry {
                algo,
                pattern: pattern.to_string(),
                file: corpus.name,
                duration,
                found_count: found.len(),
            });
        }
    }

    (results, mismatches)
}

fn main() {
    println!("--- Starting Benchmark ---");

    println!("> Generating corpora ({} bytes each)...", CORPUS_LEN);
    let corpora = build_corpora();

    for (pattern, pat_desc) in PATTERNS {
        println!("> Pattern '{}' ({})", pattern, pat_desc);
    }

    // One thread per corpus; every search owns its own tables.
    let per_corpus: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = corpora
            .iter()
            .map(|corpus| s.spawn(move || run_corpus(corpus)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("benchmark thread panicked"))
            .collect()
    });

    let mut results = Vec::new();
    let mut mismatches = Vec::new();
    for (r, m) in per_corpus {
        results.extend(r);
        mismatches.extend(m);
    }

    print_summary_table(&results);

    if !mismatches.is_empty() {
        eprintln!("Error: {} algorithm(s) disagreed with naive:", mismatches.len());
        for m in &mismatches {
            eprintln!(
                "  ! {} on '{}' in {}: expected {} match(es), got {}",
                m.algo, m.pattern, m.file, m.expected, m.actual
            );
        }
        std::process::exit(1);
    }
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^80}", " RESULTS SUMMARY ");
    println!(
        "{:<12} | {:<15} | {:<12} | {:>10} | {:>15}",
        "Algorithm", "Pattern", "File", "Matches", "Time (µs)"
    );
    println!("{:-^80}", "");

    for entry in results {
        let micros = entry.duration.as_nanos() as f64 / 1000.0;

        println!(
            "{:<12} | {:<15} | {:<12} | {:>10} | {:>15.2}",
            entry.algo.name(),
            entry.pattern.chars().take(12).collect::<String>(),
            entry.file,
            entry.found_count,
            micros
        );
    }
    println!("{:=^80}", " END ");
}
