//! Crop id → crop name

/// Label returned when the model predicts an id outside the table
pub const UNKNOWN_CROP: &str = "Unknown crop";

/// Crop ids emitted by the crop recommender, in id order
pub const CROPS: [(i64, &str); 22] = [
    (1, "Rice"),
    (2, "Maize"),
    (3, "Jute"),
    (4, "Cotton"),
    (5, "Coconut"),
    (6, "Papaya"),
    (7, "Orange"),
    (8, "Apple"),
    (9, "Muskmelon"),
    (10, "Watermelon"),
    (11, "Grapes"),
    (12, "Mango"),
    (13, "Banana"),
    (14, "Pomegranate"),
    (15, "Lentil"),
    (16, "Blackgram"),
    (17, "Mungbean"),
    (18, "Mothbeans"),
    (19, "Pigeonpeas"),
    (20, "Kidneybeans"),
    (21, "Chickpea"),
    (22, "Coffee"),
];

/// Look up the crop name for a predicted id
pub fn crop_name(id: i64) -> Option<&'static str> {
    CROPS
        .iter()
        .find(|(crop_id, _)| *crop_id == id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twenty_two_contiguous_ids() {
        assert_eq!(CROPS.len(), 22);
        for (i, (id, _)) in CROPS.iter().enumerate() {
            assert_eq!(*id, i as i64 + 1);
        }
    }

    #[test]
    fn known_ids_resolve() {
        assert_eq!(crop_name(1), Some("Rice"));
        assert_eq!(crop_name(22), Some("Coffee"));
        assert_eq!(crop_name(14), Some("Pomegranate"));
    }

    #[test]
    fn unknown_ids_are_none() {
        assert_eq!(crop_name(0), None);
        assert_eq!(crop_name(23), None);
        assert_eq!(crop_name(-1), None);
    }
}
