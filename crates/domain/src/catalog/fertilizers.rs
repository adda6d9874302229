//! Fertilizer code → description

/// Description returned when the model emits a code outside the table
pub const NO_FERTILIZER_INFO: &str = "No specific recommendation";

/// Fertilizer codes emitted by the fertilizer recommender
pub const FERTILIZERS: [(&str, &str); 7] = [
    (
        "Urea",
        "Urea is a high-nitrogen fertilizer that is suitable for promoting leafy growth.",
    ),
    (
        "DAP",
        "Diammonium Phosphate (DAP) provides both nitrogen and phosphorus, promoting root development and overall plant growth.",
    ),
    (
        "14-35-14",
        "This NPK fertilizer has a balanced ratio (14% Nitrogen, 35% Phosphorus, 14% Potassium) good for flowering and fruiting.",
    ),
    (
        "28-28",
        "This fertilizer has equal parts of nitrogen and phosphorus (28% each) but no potassium.",
    ),
    (
        "17-17-17",
        "A balanced NPK fertilizer (17% each) suitable for overall plant development.",
    ),
    (
        "20-20",
        "Contains equal parts of nitrogen and phosphorus (20% each) but no potassium.",
    ),
    (
        "10-26-26",
        "NPK fertilizer with emphasis on phosphorus and potassium, good for root development and disease resistance.",
    ),
];

/// Look up the description for a fertilizer code
pub fn fertilizer_description(code: &str) -> Option<&'static str> {
    FERTILIZERS
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, description)| *description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_seven_entries() {
        assert_eq!(FERTILIZERS.len(), 7);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = FERTILIZERS.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), FERTILIZERS.len());
    }

    #[test]
    fn known_codes_resolve() {
        assert!(fertilizer_description("Urea").unwrap().contains("high-nitrogen"));
        assert!(fertilizer_description("DAP").unwrap().contains("Diammonium"));
        assert!(fertilizer_description("10-26-26").is_some());
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(fertilizer_description("urea"), None);
        assert_eq!(fertilizer_description("Potash"), None);
    }
}
