use crate::domain::{ElementId, ElementKind, LatLng};
use thiserror::Error;

/// Contract violations reported by the annotation store
///
/// A failed operation never leaves the store partially mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{kind} needs at least {min} points, got {got}")]
    InvalidGeometry {
        kind: ElementKind,
        min: usize,
        got: usize,
    },

    #[error("coordinate out of range: lat {}, lng {}", .0.lat, .0.lng)]
    InvalidCoordinate(LatLng),

    #[error("no element with id {0}")]
    UnknownElement(ElementId),

    #[error("element {id} is a {found}, expected a {expected}")]
    WrongElementKind {
        id: ElementId,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("no element is active")]
    NoActiveElement,
}
