//! Text normalization for substring comparisons.

/// Lowercase `text` and drop every character outside `[a-z0-9 ]`.
///
/// Queries and route endpoints go through the same function before they are
/// compared, so "New-Delhi!" and "new delhi" normalize to "newdelhi" and
/// "new delhi" respectively.
///
/// ```
/// use enquiry_server::domain::normalize;
///
/// assert_eq!(normalize("Delhi to MUMBAI?"), "delhi to mumbai");
/// assert_eq!(normalize("Train #12051"), "train 12051");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' '))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output only ever contains the allowed alphabet
        #[test]
        fn output_alphabet(s in any::<String>()) {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | ' ')));
        }

        /// Normalizing twice changes nothing
        #[test]
        fn idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        /// Case never affects the result for ASCII input
        #[test]
        fn case_insensitive(s in "[A-Za-z0-9 ,.!?-]{0,40}") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
