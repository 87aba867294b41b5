pub mod element;
pub mod marker;
pub mod point;

pub use element::{ElementId, ElementKind, MapElement, Shape};
pub use marker::{IconKind, ParseIconError, ParseRgbError, Rgb};
pub use point::{LatLng, ParseLatLngError};
