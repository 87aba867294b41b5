pub mod geodesic;

pub use geodesic::{EARTH_RADIUS, haversine_distance, path_length, ring_area};
