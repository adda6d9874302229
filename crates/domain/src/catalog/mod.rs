//! Static lookup tables
//!
//! Every table here is immutable for the lifetime of the process. The
//! models emit numeric ids or short codes; these tables turn them back
//! into something a farmer can read.

mod crops;
mod fertilizers;
mod medicinal_plants;

pub use crops::{CROPS, UNKNOWN_CROP, crop_name};
pub use fertilizers::{FERTILIZERS, NO_FERTILIZER_INFO, fertilizer_description};
pub use medicinal_plants::{
    MEDICINAL_PLANTS, NO_PLANT_INFO, PlantProfile, UNKNOWN_PLANT, plant_class_name, plant_count,
    plant_profile,
};
