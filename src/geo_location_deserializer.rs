use crate::domain::GeoLocation;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            lat: f64,
            lng: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.lat >= -90.0 && inner.lat <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", inner.lat)));
        }

        if !(inner.lng >= -180.0 && inner.lng <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", inner.lng)));
        }

        Ok(GeoLocation {
            latitude: inner.lat,
            longitude: inner.lng,
        })
    }
}
