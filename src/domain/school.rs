use crate::domain::GeoLocation;

/// A school with resolved coordinates. Created once per successful lookup, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct School {
    pub name: String,
    pub location: GeoLocation,
}
