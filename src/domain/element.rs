use super::{IconKind, LatLng, Rgb};
use serde::Serialize;
use std::fmt;

/// Opaque element identity, unique for the whole session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub(crate) fn from_sequence(seq: u64) -> Self {
        Self(format!("el-{seq:06}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Polygon,
    Polyline,
    Marker,
}

impl ElementKind {
    /// Prefix of the generated default name
    pub fn title(&self) -> &'static str {
        match self {
            ElementKind::Polygon => "Polygon",
            ElementKind::Polyline => "Polyline",
            ElementKind::Marker => "Marker",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.title())
    }
}

/// Kind-specific geometry and attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Implicitly closed ring; `area` in square meters
    Polygon { path: Vec<LatLng>, area: f64 },
    /// Open path; `length` in meters
    Polyline { path: Vec<LatLng>, length: f64 },
    Marker {
        position: LatLng,
        icon: IconKind,
        color: Rgb,
    },
}

impl Shape {
    pub fn kind(&self) -> ElementKind {
        match self {
            Shape::Polygon { .. } => ElementKind::Polygon,
            Shape::Polyline { .. } => ElementKind::Polyline,
            Shape::Marker { .. } => ElementKind::Marker,
        }
    }
}

/// One user-drawn annotation
///
/// Only the annotation store builds these, so the derived `area`/`length`
/// always match the stored path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapElement {
    id: ElementId,
    name: String,
    #[serde(flatten)]
    shape: Shape,
}

impl MapElement {
    pub(crate) fn new(id: ElementId, name: String, shape: Shape) -> Self {
        Self { id, name, shape }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ElementKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Vertices of a polygon or polyline
    pub fn path(&self) -> Option<&[LatLng]> {
        match &self.shape {
            Shape::Polygon { path, .. } | Shape::Polyline { path, .. } => Some(path),
            Shape::Marker { .. } => None,
        }
    }

    pub fn area(&self) -> Option<f64> {
        match self.shape {
            Shape::Polygon { area, .. } => Some(area),
            _ => None,
        }
    }

    pub fn length(&self) -> Option<f64> {
        match self.shape {
            Shape::Polyline { length, .. } => Some(length),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<LatLng> {
        match self.shape {
            Shape::Marker { position, .. } => Some(position),
            _ => None,
        }
    }

    pub fn icon(&self) -> Option<IconKind> {
        match self.shape {
            Shape::Marker { icon, .. } => Some(icon),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<Rgb> {
        match self.shape {
            Shape::Marker { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Metric as shown in the property list: `"12.34 m²"` or `"5.00 m"`
    pub fn measurement(&self) -> Option<String> {
        match self.shape {
            Shape::Polygon { area, .. } => Some(format!("{area:.2} m²")),
            Shape::Polyline { length, .. } => Some(format!("{length:.2} m")),
            Shape::Marker { .. } => None,
        }
    }

    /// Geometry in `geo` types, x = longitude and y = latitude
    pub fn to_geometry(&self) -> geo::Geometry<f64> {
        match &self.shape {
            Shape::Polygon { path, .. } => {
                let ring: geo::LineString<f64> =
                    path.iter().map(|&p| geo::Coord::from(p)).collect();
                geo::Geometry::Polygon(geo::Polygon::new(ring, Vec::new()))
            }
            Shape::Polyline { path, .. } => geo::Geometry::LineString(
                path.iter().map(|&p| geo::Coord::from(p)).collect(),
            ),
            Shape::Marker { position, .. } => geo::Geometry::Point((*position).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon() -> MapElement {
        MapElement::new(
            ElementId::from_sequence(1),
            "Polygon 1".to_string(),
            Shape::Polygon {
                path: vec![
                    LatLng::new(0.0, 0.0),
                    LatLng::new(0.0, 1.0),
                    LatLng::new(1.0, 0.0),
                ],
                area: 1234.5678,
            },
        )
    }

    #[test]
    fn test_measurement_labels() {
        assert_eq!(polygon().measurement().as_deref(), Some("1234.57 m²"));

        let line = MapElement::new(
            ElementId::from_sequence(2),
            "Polyline 1".to_string(),
            Shape::Polyline {
                path: vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)],
                length: 5.0,
            },
        );
        assert_eq!(line.measurement().as_deref(), Some("5.00 m"));
        assert_eq!(line.area(), None);
    }

    #[test]
    fn test_marker_has_no_measurement() {
        let marker = MapElement::new(
            ElementId::from_sequence(3),
            "Marker 1".to_string(),
            Shape::Marker {
                position: LatLng::new(40.0, -74.0),
                icon: IconKind::General,
                color: IconKind::General.default_color(),
            },
        );
        assert_eq!(marker.measurement(), None);
        assert_eq!(marker.path(), None);
        assert_eq!(marker.kind(), ElementKind::Marker);
    }

    #[test]
    fn test_serialize_is_tagged_by_kind() {
        let json = serde_json::to_value(polygon()).unwrap();
        assert_eq!(json["kind"], "polygon");
        assert_eq!(json["id"], "el-000001");
        assert_eq!(json["name"], "Polygon 1");
        assert_eq!(json["path"].as_array().unwrap().len(), 3);
        assert_eq!(json["path"][1]["lng"], 1.0);
    }

    #[test]
    fn test_to_geometry_polygon_closes_ring() {
        match polygon().to_geometry() {
            geo::Geometry::Polygon(poly) => {
                // geo closes the exterior ring on construction
                assert_eq!(poly.exterior().0.len(), 4);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
