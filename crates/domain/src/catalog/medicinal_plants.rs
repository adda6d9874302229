//! Medicinal plant class → Ayurvedic profile
//!
//! Entries are ordered by the class index of the plant classifier. The
//! classifier was trained on one directory per species, so index order is
//! the alphabetical order of those directory names. Keep it that way.

use serde::Serialize;

/// Class name used when the classifier emits an index outside the table
pub const UNKNOWN_PLANT: &str = "Unknown plant";

/// Description used when a class has no Ayurvedic profile
pub const NO_PLANT_INFO: &str = "No information available";

/// Ayurvedic profile of a medicinal plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlantProfile {
    pub class_name: &'static str,
    pub description: &'static str,
    pub uses: &'static [&'static str],
}

const fn plant(
    class_name: &'static str,
    description: &'static str,
    uses: &'static [&'static str],
) -> PlantProfile {
    PlantProfile {
        class_name,
        description,
        uses,
    }
}

/// Medicinal plants known to the classifier, in class-index order
pub const MEDICINAL_PLANTS: [PlantProfile; 30] = [
    plant(
        "Alpinia Galanga (Rasna)",
        "Rasna is an aromatic rhizome of the ginger family, valued in Ayurveda as a Vata-pacifying herb.",
        &[
            "Relieves joint pain and rheumatism",
            "Eases cough and bronchitis",
            "Supports digestion",
        ],
    ),
    plant(
        "Amaranthus Viridis (Arive-Dantu)",
        "Arive-Dantu is a leafy green amaranth eaten as a vegetable and used as a cooling, nourishing herb.",
        &[
            "Rich source of iron and vitamins",
            "Mild laxative",
            "Soothes inflammation",
        ],
    ),
    plant(
        "Artocarpus Heterophyllus (Jackfruit)",
        "Jackfruit is a large tropical tree whose leaves, fruit and seeds are used in traditional medicine.",
        &[
            "Leaves used for skin conditions and wounds",
            "Helps regulate blood sugar",
            "Supports digestion",
        ],
    ),
    plant(
        "Azadirachta Indica (Neem)",
        "Neem is a bitter evergreen tree revered in Ayurveda as a blood purifier and antimicrobial herb.",
        &[
            "Treats skin disorders such as acne and eczema",
            "Antibacterial and antifungal",
            "Supports oral hygiene",
            "Purifies blood",
        ],
    ),
    plant(
        "Basella Alba (Basale)",
        "Basale, or Malabar spinach, is a succulent climbing vine with mucilaginous, cooling leaves.",
        &[
            "Relieves constipation",
            "Cooling effect on the body",
            "Supports healthy skin",
        ],
    ),
    plant(
        "Brassica Juncea (Indian Mustard)",
        "Indian mustard is a pungent leafy plant whose seeds and oil are warming and stimulating.",
        &[
            "Relieves muscle and joint pain when applied as oil",
            "Stimulates digestion",
            "Clears respiratory congestion",
        ],
    ),
    plant(
        "Carissa Carandas (Karanda)",
        "Karanda is a thorny shrub bearing sour berries, used in Ayurveda as an appetizer and antiscorbutic.",
        &[
            "Improves appetite",
            "Rich in vitamin C",
            "Used for fevers and digestive complaints",
        ],
    ),
    plant(
        "Citrus Limon (Lemon)",
        "Lemon is a citrus tree whose juice and peel are sour, cleansing and rich in vitamin C.",
        &[
            "Aids digestion",
            "Boosts immunity",
            "Relieves nausea",
            "Supports detoxification",
        ],
    ),
    plant(
        "Ficus Auriculata (Roxburgh fig)",
        "Roxburgh fig is a small fig tree with large leaves and edible fruit used in folk medicine.",
        &[
            "Used for wounds and cuts",
            "Relieves diarrhoea",
            "Fruit is mildly laxative",
        ],
    ),
    plant(
        "Ficus Religiosa (Peepal Tree)",
        "The Peepal tree is a sacred fig whose bark, leaves and fruit have astringent and cooling properties.",
        &[
            "Supports respiratory health",
            "Used for skin diseases",
            "Helps with diabetes management",
        ],
    ),
    plant(
        "Hibiscus Rosa-sinensis",
        "Hibiscus is a flowering shrub whose flowers and leaves are cooling and nourishing for hair and heart.",
        &[
            "Promotes hair growth",
            "Supports heart health",
            "Helps regulate blood pressure",
        ],
    ),
    plant(
        "Jasminum (Jasmine)",
        "Jasmine is a fragrant climbing shrub whose flowers and leaves are cooling and calming.",
        &[
            "Calms the mind and reduces stress",
            "Leaves used for mouth ulcers",
            "Soothes skin irritation",
        ],
    ),
    plant(
        "Mangifera Indica (Mango)",
        "Mango is a large fruit tree; its leaves, bark and seed kernel are astringent and used medicinally.",
        &[
            "Leaves help manage blood sugar",
            "Bark used for diarrhoea",
            "Supports digestion",
        ],
    ),
    plant(
        "Mentha (Mint)",
        "Mint is an aromatic herb with cooling, carminative leaves.",
        &[
            "Relieves indigestion and gas",
            "Eases headaches",
            "Freshens breath",
            "Soothes nausea",
        ],
    ),
    plant(
        "Moringa Oleifera (Drumstick)",
        "Drumstick is a fast-growing tree whose leaves and pods are among the most nutrient-dense foods.",
        &[
            "Rich in vitamins and minerals",
            "Anti-inflammatory",
            "Supports lactation",
            "Helps regulate blood sugar",
        ],
    ),
    plant(
        "Muntingia Calabura (Jamaica Cherry-Gasagase)",
        "Jamaica cherry is a small tree with sweet berries; its leaves and flowers are used in folk remedies.",
        &[
            "Relieves headaches and colds",
            "Antioxidant-rich fruit",
            "Used as an antispasmodic",
        ],
    ),
    plant(
        "Murraya Koenigii (Curry)",
        "Curry leaf is an aromatic shrub whose leaves are a staple of South Indian cooking and medicine.",
        &[
            "Supports digestion",
            "Promotes hair health",
            "Helps manage blood sugar",
        ],
    ),
    plant(
        "Nerium Oleander (Oleander)",
        "Oleander is an ornamental shrub that is highly toxic; it is used only externally and under supervision.",
        &[
            "External use for skin diseases",
            "Used in traditional preparations for ringworm",
            "Not for internal use",
        ],
    ),
    plant(
        "Nyctanthes Arbor-tristis (Parijata)",
        "Parijata, the night-flowering jasmine, is a shrub whose leaves are bitter and anti-inflammatory.",
        &[
            "Relieves fever",
            "Eases joint pain and sciatica",
            "Used for chronic cough",
        ],
    ),
    plant(
        "Ocimum Tenuiflorum (Tulsi)",
        "Tulsi, or holy basil, is a sacred aromatic perennial of the family Lamiaceae and a renowned adaptogen.",
        &[
            "Treatment of respiratory conditions",
            "Reduces stress and anxiety",
            "Helps with fever and common cold",
            "Has anti-inflammatory properties",
        ],
    ),
    plant(
        "Piper Betle (Betel)",
        "Betel is a climbing vine whose heart-shaped leaves are aromatic, warming and antiseptic.",
        &[
            "Aids digestion",
            "Freshens breath",
            "Antiseptic for wounds",
        ],
    ),
    plant(
        "Plectranthus Amboinicus (Mexican Mint)",
        "Mexican mint is a succulent aromatic herb with thick, fuzzy leaves used for coughs and colds.",
        &[
            "Relieves cough and sore throat",
            "Eases indigestion",
            "Soothes insect bites",
        ],
    ),
    plant(
        "Pongamia Pinnata (Indian Beech)",
        "Indian beech is a hardy legume tree whose seed oil and bark are used for skin and joint ailments.",
        &[
            "Treats skin diseases",
            "Relieves rheumatic pain",
            "Antiseptic for wounds",
        ],
    ),
    plant(
        "Psidium Guajava (Guava)",
        "Guava is a fruit tree whose astringent leaves are a classic remedy for digestive upsets.",
        &[
            "Relieves diarrhoea",
            "Rich in vitamin C",
            "Leaves used for oral health",
        ],
    ),
    plant(
        "Punica Granatum (Pomegranate)",
        "Pomegranate is a fruit shrub whose fruit, rind and bark are astringent and heart-nourishing.",
        &[
            "Supports heart health",
            "Rind used for diarrhoea",
            "Rich in antioxidants",
        ],
    ),
    plant(
        "Santalum Album (Sandalwood)",
        "Sandalwood is a fragrant tree whose heartwood is cooling and calming.",
        &[
            "Cools and soothes the skin",
            "Calms the mind",
            "Used for urinary complaints",
        ],
    ),
    plant(
        "Syzygium Cumini (Jamun)",
        "Jamun is an evergreen tree whose purple fruit and seeds are astringent and sweet.",
        &[
            "Helps manage diabetes",
            "Supports digestion",
            "Used for oral health",
        ],
    ),
    plant(
        "Syzygium Jambos (Rose Apple)",
        "Rose apple is a tropical tree bearing rose-scented fruit; its leaves and bark are astringent.",
        &[
            "Relieves diarrhoea",
            "Used for sore eyes",
            "Cooling fruit for fever",
        ],
    ),
    plant(
        "Tabernaemontana Divaricata (Crape Jasmine)",
        "Crape jasmine is a flowering shrub whose roots and latex are used in traditional medicine.",
        &[
            "Relieves toothache",
            "Used for eye infections",
            "Applied to wounds",
        ],
    ),
    plant(
        "Trigonella Foenum-graecum (Fenugreek)",
        "Fenugreek is an annual herb whose bitter seeds and leaves are warming and nourishing.",
        &[
            "Helps control blood sugar",
            "Supports lactation",
            "Aids digestion",
            "Promotes hair health",
        ],
    ),
];

/// Number of plant classes known to the classifier
pub const fn plant_count() -> usize {
    MEDICINAL_PLANTS.len()
}

/// Class name for a classifier output index
pub fn plant_class_name(index: usize) -> Option<&'static str> {
    MEDICINAL_PLANTS.get(index).map(|p| p.class_name)
}

/// Ayurvedic profile for a class name
pub fn plant_profile(class_name: &str) -> Option<&'static PlantProfile> {
    MEDICINAL_PLANTS.iter().find(|p| p.class_name == class_name)
}
