use algos::{fold_char, Kmp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new<I, S>(id: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_string(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

fn chars(s: &str, fold_case: bool) -> Vec<char> {
    if fold_case {
        s.chars().map(fold_char).collect()
    } else {
        s.chars().collect()
    }
}

/// Records with at least one field containing `query`, in input order.
///
/// The query's KMP table is built once and reused for every field. An empty
/// query matches nothing.
pub fn lookup<'r>(records: &'r [Record], query: &str, fold_case: bool) -> Vec<&'r Record> {
    let query = Kmp::prepare(&chars(query, fold_case));

    let found: Vec<&Record> = records
        .iter()
        .filter(|record| {
            record
                .fields
                .iter()
                .any(|field| query.is_match(&chars(field, fold_case)))
        })
        .collect();

    log::debug!("lookup: {} of {} record(s) matched", found.len(), records.len());
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<Record> {
        vec![
            Record::new("1", ["The Matrix", "1999", "Action, Sci-Fi"]),
            Record::new("2", ["Spirited Away", "2001", "Animation, Fantasy"]),
            Record::new("3", ["Matrix Reloaded", "2003", "Action"]),
        ]
    }

    fn ids(found: &[&Record]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn matches_any_field() {
        let records = movies();
        assert_eq!(ids(&lookup(&records, "Matrix", false)), ["1", "3"]);
        assert_eq!(ids(&lookup(&records, "2001", false)), ["2"]);
        assert_eq!(ids(&lookup(&records, "Action", false)), ["1", "3"]);
    }

    #[test]
    fn case_folding_is_opt_in() {
        let records = movies();
        assert!(lookup(&records, "matrix", false).is_empty());
        assert_eq!(ids(&lookup(&records, "matrix", true)), ["1", "3"]);
    }

    #[test]
    fn empty_or_missing_query() {
        let records = movies();
        assert!(lookup(&records, "", true).is_empty());
        assert!(lookup(&records, "Casablanca", true).is_empty());
        assert!(lookup(&[], "Matrix", true).is_empty());
    }
}
