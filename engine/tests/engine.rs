use algos::{search, Algorithm};
use engine::{locate_all, lookup, whole_word_matches, KeywordTable, Position, Record, ScoreOptions};

const REVIEW: &str = "An excellent film.\nThe plot is weak,\nbut the cast is excellent!";

#[test]
fn search_results_map_to_lines() {
    for tag in ["naive", "kmp", "hashing", "horspool"] {
        let offsets = search(REVIEW, "excellent", tag);
        assert_eq!(offsets.len(), 2, "{tag}");

        let positions = locate_all(REVIEW, &offsets);
        assert_eq!(
            positions,
            vec![
                Position { line: 1, column: 4 },
                Position { line: 3, column: 17 },
            ],
            "{tag}"
        );
    }
}

#[test]
fn every_algorithm_scores_the_same() {
    let table = KeywordTable::new()
        .category("positive", 1.5, ["excellent", "good"])
        .category("negative", -1.0, ["weak", "bad", "the"]);

    let baseline = table.score(REVIEW, Algorithm::Naive, ScoreOptions::default());
    assert_eq!(baseline[0].hits, 2);
    assert_eq!(baseline[0].weighted, 3.0);
    // "The" and "the" fold together
    assert_eq!(baseline[1].hits, 3);

    for algo in Algorithm::ALL {
        assert_eq!(table.score(REVIEW, algo, ScoreOptions::default()), baseline, "{algo}");
    }
}

#[test]
fn whole_word_filter_drops_embedded_hits() {
    let text = "cast, outcast, castle; cast";
    assert_eq!(Algorithm::Kmp.find_all(text, "cast").len(), 4);
    assert_eq!(whole_word_matches(text, "cast", Algorithm::Kmp), vec![0, 23]);
}

#[test]
fn record_lookup_reports_presence() {
    let records = vec![
        Record::new("tt0133093", ["The Matrix", "1999"]),
        Record::new("tt0245429", ["Spirited Away", "2001"]),
    ];

    let found = lookup(&records, "spirit", true);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "tt0245429");
}
