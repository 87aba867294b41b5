//! mapmark - Annotation store for drawn map shapes with geodesic measurements

pub mod config;
pub mod domain;
pub mod geometry;
pub mod report;
pub mod script;
pub mod store;
pub mod surface;

pub use domain::{ElementId, ElementKind, IconKind, LatLng, MapElement, Rgb, Shape};
pub use store::{AnnotationStore, StoreError};
pub use surface::Gesture;
