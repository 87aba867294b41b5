//! In-memory store of user-drawn map elements
//!
//! The store is the only place elements are created, measured, mutated or
//! removed. It is plain single-threaded state: every operation runs to
//! completion on `&mut self` with no I/O.

use geo::BoundingRect;
use log::debug;

use super::StoreError;
use crate::domain::{ElementId, ElementKind, IconKind, LatLng, MapElement, Rgb, Shape};
use crate::geometry::{path_length, ring_area};

const MIN_POLYGON_POINTS: usize = 3;
const MIN_POLYLINE_POINTS: usize = 2;

#[derive(Debug, Default)]
pub struct AnnotationStore {
    elements: Vec<MapElement>,
    active: Option<ElementId>,
    /// Last issued id sequence, never reused
    id_seq: u64,
    polygon_seq: u64,
    polyline_seq: u64,
    marker_seq: u64,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed polygon ring
    ///
    /// A ring of more than 3 points passed explicitly closed (last vertex
    /// equal to the first) has the duplicate dropped before validation.
    ///
    /// # Errors
    /// * `InvalidGeometry` - fewer than 3 vertices
    /// * `InvalidCoordinate` - a vertex is out of range
    pub fn create_polygon(&mut self, mut points: Vec<LatLng>) -> Result<MapElement, StoreError> {
        if points.len() > MIN_POLYGON_POINTS && points.first() == points.last() {
            points.pop();
        }
        validate_path(ElementKind::Polygon, &points, MIN_POLYGON_POINTS)?;

        let area = ring_area(&points);
        self.polygon_seq += 1;
        let name = format!("{} {}", ElementKind::Polygon, self.polygon_seq);
        Ok(self.push(name, Shape::Polygon { path: points, area }))
    }

    /// Record a completed open path
    ///
    /// # Errors
    /// * `InvalidGeometry` - fewer than 2 points
    /// * `InvalidCoordinate` - a vertex is out of range
    pub fn create_polyline(&mut self, points: Vec<LatLng>) -> Result<MapElement, StoreError> {
        validate_path(ElementKind::Polyline, &points, MIN_POLYLINE_POINTS)?;

        let length = path_length(&points);
        self.polyline_seq += 1;
        let name = format!("{} {}", ElementKind::Polyline, self.polyline_seq);
        Ok(self.push(name, Shape::Polyline { path: points, length }))
    }

    /// Record a dropped marker
    pub fn create_marker(
        &mut self,
        position: LatLng,
        icon: IconKind,
        color: Rgb,
    ) -> Result<MapElement, StoreError> {
        if !position.is_valid() {
            return Err(StoreError::InvalidCoordinate(position));
        }

        self.marker_seq += 1;
        let name = format!("{} {}", ElementKind::Marker, self.marker_seq);
        Ok(self.push(
            name,
            Shape::Marker {
                position,
                icon,
                color,
            },
        ))
    }

    fn push(&mut self, name: String, shape: Shape) -> MapElement {
        self.id_seq += 1;
        let element = MapElement::new(ElementId::from_sequence(self.id_seq), name, shape);
        debug!(
            "Created {} {:?} as {}",
            element.kind(),
            element.name(),
            element.id()
        );
        self.elements.push(element.clone());
        element
    }

    /// All live elements in insertion order
    pub fn elements(&self) -> &[MapElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &ElementId) -> Option<&MapElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// First element carrying the given display name
    pub fn find_by_name(&self, name: &str) -> Option<&MapElement> {
        self.elements.iter().find(|e| e.name() == name)
    }

    /// Select an element, or clear the selection with `None`
    ///
    /// An unknown id leaves the current selection untouched.
    pub fn set_active(&mut self, id: Option<&ElementId>) -> Result<(), StoreError> {
        match id {
            Some(id) => {
                if self.get(id).is_none() {
                    return Err(StoreError::UnknownElement(id.clone()));
                }
                debug!("Selected {}", id);
                self.active = Some(id.clone());
            }
            None => {
                debug!("Cleared selection");
                self.active = None;
            }
        }
        Ok(())
    }

    pub fn active_id(&self) -> Option<&ElementId> {
        self.active.as_ref()
    }

    pub fn active(&self) -> Option<&MapElement> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    /// Remove the active element and clear the selection
    pub fn delete_active(&mut self) -> Result<MapElement, StoreError> {
        let id = self.active.as_ref().ok_or(StoreError::NoActiveElement)?;
        let index = self
            .elements
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| StoreError::UnknownElement(id.clone()))?;

        self.active = None;
        let removed = self.elements.remove(index);
        debug!("Deleted {} {:?}", removed.id(), removed.name());
        Ok(removed)
    }

    /// Change a marker's icon and color in place
    ///
    /// # Errors
    /// * `UnknownElement` - no element has this id
    /// * `WrongElementKind` - the element is a polygon or polyline
    pub fn customize_marker(
        &mut self,
        id: &ElementId,
        new_icon: IconKind,
        new_color: Rgb,
    ) -> Result<(), StoreError> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| StoreError::UnknownElement(id.clone()))?;

        match element.shape_mut() {
            Shape::Marker { icon, color, .. } => {
                *icon = new_icon;
                *color = new_color;
                debug!("Customized {} to {} {}", id, new_icon, new_color);
                Ok(())
            }
            other => Err(StoreError::WrongElementKind {
                id: id.clone(),
                expected: ElementKind::Marker,
                found: other.kind(),
            }),
        }
    }

    /// Bounding box of every live element, x = longitude and y = latitude
    ///
    /// Longitudes are taken as-is: elements spanning the antimeridian yield a
    /// box running the long way round, from the westmost to the eastmost
    /// raw longitude.
    pub fn bounds(&self) -> Option<geo::Rect<f64>> {
        let collection: geo::GeometryCollection<f64> =
            self.elements.iter().map(MapElement::to_geometry).collect();
        collection.bounding_rect()
    }
}

fn validate_path(kind: ElementKind, points: &[LatLng], min: usize) -> Result<(), StoreError> {
    if points.len() < min {
        return Err(StoreError::InvalidGeometry {
            kind,
            min,
            got: points.len(),
        });
    }
    match points.iter().find(|p| !p.is_valid()) {
        Some(&bad) => Err(StoreError::InvalidCoordinate(bad)),
        None => Ok(()),
    }
}
