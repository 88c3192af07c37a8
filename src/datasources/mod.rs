pub mod carbonintensity;
pub mod openmeteo;
pub mod postcodes;

pub use carbonintensity::CarbonIntensityClient;
pub use openmeteo::{OpenMeteoClient, RawForecast};
pub use postcodes::{Coordinates, PostcodeClient};
