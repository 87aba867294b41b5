//! Contract with the drawing widget
//!
//! The widget owns drawing modes and pointer handling. Once a gesture is
//! finished it reports the resulting geometry as a [`Gesture`], and the
//! store turns it into a [`MapElement`].

use crate::domain::{IconKind, LatLng, MapElement, Rgb};
use crate::store::{AnnotationStore, StoreError};

/// A completed drawing gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Vertex ring of a finished polygon
    PolygonComplete(Vec<LatLng>),
    /// Vertices of a finished polyline
    PolylineComplete(Vec<LatLng>),
    MarkerDropped {
        position: LatLng,
        icon: IconKind,
        color: Rgb,
    },
}

impl AnnotationStore {
    /// Create the element a finished gesture describes
    pub fn accept(&mut self, gesture: Gesture) -> Result<MapElement, StoreError> {
        match gesture {
            Gesture::PolygonComplete(points) => self.create_polygon(points),
            Gesture::PolylineComplete(points) => self.create_polyline(points),
            Gesture::MarkerDropped {
                position,
                icon,
                color,
            } => self.create_marker(position, icon, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ElementKind;

    #[test]
    fn test_accept_dispatches_by_gesture() {
        let mut store = AnnotationStore::new();
        let gestures = vec![
            Gesture::PolylineComplete(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)]),
            Gesture::MarkerDropped {
                position: LatLng::new(40.0, -74.0),
                icon: IconKind::SolarStation,
                color: IconKind::SolarStation.default_color(),
            },
            Gesture::PolygonComplete(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 1.0),
                LatLng::new(1.0, 0.0),
            ]),
        ];

        for gesture in gestures {
            store.accept(gesture).unwrap();
        }

        let kinds: Vec<ElementKind> = store.elements().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            [ElementKind::Polyline, ElementKind::Marker, ElementKind::Polygon]
        );
    }

    #[test]
    fn test_accept_propagates_store_errors() {
        let mut store = AnnotationStore::new();
        let err = store
            .accept(Gesture::PolygonComplete(vec![LatLng::new(0.0, 0.0)]))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidGeometry { got: 1, .. }));
        assert!(store.is_empty());
    }
}
