//! Value objects - Immutable, validated categorical inputs

mod crop_type;
mod soil_type;

pub use crop_type::CropType;
pub use soil_type::SoilType;
