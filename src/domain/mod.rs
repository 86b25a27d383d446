mod geo_location;
mod school;

pub use geo_location::GeoLocation;
pub use school::School;
