//! Search filter over the loaded beer list
//!
//! Matching is a plain case-insensitive substring test on the beer name.
//! The query is never trimmed or tokenized: whitespace is literal.

use crate::types::BeerRecord;

/// Returns true if `beer`'s name contains `search`, ignoring case.
///
/// An empty search matches every record.
pub fn matches_search(beer: &BeerRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    beer.name.to_lowercase().contains(&search.to_lowercase())
}

/// Derive the subsequence of `beers` matching `search`, preserving order.
pub fn filter_beers<'a>(beers: &'a [BeerRecord], search: &str) -> Vec<&'a BeerRecord> {
    beers
        .iter()
        .filter(|beer| matches_search(beer, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<BeerRecord> {
        vec![
            BeerRecord::new(1, "Amber Ale", "$5"),
            BeerRecord::new(2, "Pale Lager", "$4"),
            BeerRecord::new(3, "India Pale Ale", "$6"),
            BeerRecord::new(4, "Stout", "$7"),
        ]
    }

    fn ids(beers: &[&BeerRecord]) -> Vec<u64> {
        beers.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_empty_search_is_identity() {
        let beers = sample();
        let filtered = filter_beers(&beers, "");
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let beers = sample();
        assert_eq!(ids(&filter_beers(&beers, "ale")), vec![1, 2, 3]);
        assert_eq!(ids(&filter_beers(&beers, "ALE")), vec![1, 2, 3]);
        assert_eq!(ids(&filter_beers(&beers, "pAlE")), vec![2, 3]);
    }

    #[test]
    fn test_substring_inside_word() {
        let beers = sample();
        assert_eq!(ids(&filter_beers(&beers, "tou")), vec![4]);
        assert_eq!(ids(&filter_beers(&beers, "dia p")), vec![3]);
    }

    #[test]
    fn test_whitespace_is_literal() {
        let beers = sample();
        assert_eq!(ids(&filter_beers(&beers, " ")), vec![1, 2, 3]);
        assert_eq!(ids(&filter_beers(&beers, "  ")), Vec::<u64>::new());
        // Trailing space is kept: "Amber Ale" no longer matches
        assert_eq!(ids(&filter_beers(&beers, "ale ")), vec![2, 3]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let beers = sample();
        assert!(filter_beers(&beers, "pilsner").is_empty());
    }

    #[test]
    fn test_not_fuzzy() {
        let beers = sample();
        assert!(filter_beers(&beers, "amberale").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let beers = sample();
        for query in ["", "ale", "PALE", " ", "x"] {
            let once: Vec<BeerRecord> =
                filter_beers(&beers, query).into_iter().cloned().collect();
            let twice = filter_beers(&once, query);
            assert_eq!(ids(&twice), once.iter().map(|b| b.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_filter_matches_predicate_exactly() {
        let beers = sample();
        for query in ["a", "le", "Stout", "zzz", "India"] {
            let expected: Vec<u64> = beers
                .iter()
                .filter(|b| b.name.to_lowercase().contains(&query.to_lowercase()))
                .map(|b| b.id)
                .collect();
            assert_eq!(ids(&filter_beers(&beers, query)), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_matches_search_agrees_with_filter() {
        let beers = sample();
        for beer in &beers {
            assert_eq!(
                matches_search(beer, "ale"),
                filter_beers(&beers, "ale").iter().any(|b| b.id == beer.id)
            );
        }
        assert!(matches_search(&beers[3], ""));
    }

    #[test]
    fn test_unicode_case_folding() {
        let beers = vec![BeerRecord::new(9, "ÄPFEL Cider", "$3")];
        assert_eq!(filter_beers(&beers, "äpfel").len(), 1);
    }
}
