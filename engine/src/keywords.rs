use algos::{fold_char, Algorithm};

/// Characters that may surround a whole-word match. The edges of the text
/// count as boundaries too.
pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// Char offsets of `keyword` in `text` that are delimited by boundaries on
/// both sides.
pub fn whole_word_matches(text: &str, keyword: &str, algorithm: Algorithm) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let keyword: Vec<char> = keyword.chars().collect();
    whole_words_in(&text, &keyword, algorithm)
}

fn whole_words_in(text: &[char], keyword: &[char], algorithm: Algorithm) -> Vec<usize> {
    let m = keyword.len();
    algorithm
        .find_all_in(text, keyword)
        .into_iter()
        .filter(|&start| {
            let before = start.checked_sub(1).map(|i| text[i]);
            let after = text.get(start + m).copied();
            before.is_none_or(is_boundary) && after.is_none_or(is_boundary)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub weight: f64,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub name: String,
    /// Total occurrences of all keywords of the category.
    pub hits: usize,
    /// `hits * weight`
    pub weighted: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    pub whole_words: bool,
    pub fold_case: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            whole_words: true,
            fold_case: true,
        }
    }
}

/// Named groups of keywords, scored in insertion order.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    categories: Vec<Category>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category<I, S>(mut self, name: &str, weight: f64, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.push(Category {
            name: name.to_string(),
            weight,
            keywords: keywords.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Count every keyword of every category in `text`, one core search per
    /// keyword.
    pub fn score(&self, text: &str, algorithm: Algorithm, options: ScoreOptions) -> Vec<CategoryScore> {
        let text: Vec<char> = if options.fold_case {
            text.chars().map(fold_char).collect()
        } else {
            text.chars().collect()
        };

        self.categories
            .iter()
            .map(|category| {
                let hits = category
                    .keywords
                    .iter()
                    .map(|keyword| {
                        let keyword: Vec<char> = if options.fold_case {
                            keyword.chars().map(fold_char).collect()
                        } else {
                            keyword.chars().collect()
                        };
                        if options.whole_words {
                            whole_words_in(&text, &keyword, algorithm).len()
                        } else {
                            algorithm.find_all_in(&text, &keyword).len()
                        }
                    })
                    .sum::<usize>();
                log::debug!("category {:?}: {} hit(s)", category.name, hits);
                CategoryScore {
                    name: category.name.clone(),
                    hits,
                    weighted: hits as f64 * category.weight,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_set() {
        for c in [' ', '\n', '\t', '.', ',', '!', '?', '"', '(', ')'] {
            assert!(is_boundary(c), "{c:?}");
        }
        for c in ['a', 'Z', '0', 'é'] {
            assert!(!is_boundary(c), "{c:?}");
        }
        // ASCII punctuation includes the underscore
        assert!(is_boundary('_'));
    }

    #[test]
    fn whole_words_only() {
        let text = "good goods, goodness. good!";
        assert_eq!(whole_word_matches(text, "good", Algorithm::Kmp), vec![0, 22]);
    }

    #[test]
    fn whole_words_at_text_edges() {
        assert_eq!(whole_word_matches("bad", "bad", Algorithm::Horspool), vec![0]);
        assert!(whole_word_matches("badly", "bad", Algorithm::Horspool).is_empty());
        assert!(whole_word_matches("", "bad", Algorithm::Horspool).is_empty());
    }

    #[test]
    fn scoring_respects_options() {
        let table = KeywordTable::new()
            .category("positive", 1.0, ["good", "great"])
            .category("negative", -2.0, ["bad"]);
        let text = "Good film, great cast, GOODIES were bad.";

        let scores = table.score(text, Algorithm::Hashing, ScoreOptions::default());
        assert_eq!(scores[0].name, "positive");
        assert_eq!(scores[0].hits, 2);
        assert_eq!(scores[1].hits, 1);
        assert_eq!(scores[1].weighted, -2.0);

        let loose = ScoreOptions {
            whole_words: false,
            fold_case: true,
        };
        assert_eq!(table.score(text, Algorithm::Naive, loose)[0].hits, 3);

        let strict_case = ScoreOptions {
            whole_words: true,
            fold_case: false,
        };
        assert_eq!(table.score(text, Algorithm::Kmp, strict_case)[0].hits, 1);
    }

    #[test]
    fn empty_keyword_scores_nothing() {
        let table = KeywordTable::new().category("empty", 1.0, [""]);
        assert_eq!(table.score("anything", Algorithm::Naive, ScoreOptions::default())[0].hits, 0);
    }
}
