//! Substring route matching.

use crate::domain::{RouteRecord, normalize};

/// Return every record whose two route endpoints both appear in `query`.
///
/// The query is normalized once; each record's endpoints were normalized when
/// the record was built. Matching is a plain substring test in either order
/// with no word boundaries, so "delhi" also matches inside "delhighat".
/// Record order is preserved and nothing is de-duplicated or ranked.
pub fn match_routes<'a>(query: &str, records: &'a [RouteRecord]) -> Vec<&'a RouteRecord> {
    let query = normalize(query);
    records
        .iter()
        .filter(|record| record.route.is_mentioned_in(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;

    fn train(name: &str, number: &str, route: &str) -> RouteRecord {
        RouteRecord::train(name, number, Route::parse(route).unwrap(), "N/A")
    }

    #[test]
    fn matches_both_endpoints() {
        let records = vec![train("Rajdhani", "101", "Delhi to Mumbai")];
        let found = match_routes("bus from delhi to mumbai please", &records);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Rajdhani");
    }

    #[test]
    fn order_independent() {
        let records = vec![train("Rajdhani", "101", "Delhi to Mumbai")];
        assert_eq!(match_routes("Mumbai <- Delhi", &records).len(), 1);
    }

    #[test]
    fn one_endpoint_is_not_enough() {
        let records = vec![train("Rajdhani", "101", "Delhi to Mumbai")];
        assert!(match_routes("trains from delhi", &records).is_empty());
    }

    #[test]
    fn case_and_punctuation_ignored() {
        let records = vec![train("Duronto", "202", "New Delhi to Kolkata")];
        assert_eq!(match_routes("NEW DELHI -> KOLKATA?!", &records).len(), 1);
    }

    #[test]
    fn punctuation_inside_endpoint_is_stripped_on_both_sides() {
        let records = vec![train("Express", "303", "St. Louis to Chicago")];
        assert_eq!(match_routes("st louis chicago", &records).len(), 1);
    }

    #[test]
    fn no_word_boundary() {
        let records = vec![train("Local", "404", "Delhi to Agra")];
        assert_eq!(match_routes("delhighat and agrabad", &records).len(), 1);
    }

    #[test]
    fn returns_all_matches_in_order() {
        let records = vec![
            train("First", "1", "Delhi to Mumbai"),
            train("Other", "2", "Pune to Goa"),
            train("Second", "3", "Mumbai to Delhi"),
            train("Third", "4", "Pune to Nagpur"),
        ];
        let found = match_routes("delhi mumbai pune goa", &records);
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Other", "Second"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let records = vec![
            train("Rajdhani", "101", "Delhi to Mumbai"),
            train("Rajdhani", "101", "Delhi to Mumbai"),
        ];
        assert_eq!(match_routes("delhi to mumbai", &records).len(), 2);
    }

    #[test]
    fn empty_inputs() {
        assert!(match_routes("delhi to mumbai", &[]).is_empty());
        let records = vec![train("Rajdhani", "101", "Delhi to Mumbai")];
        assert!(match_routes("", &records).is_empty());
    }
}
