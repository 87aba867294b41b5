//! Text and JSON views of the store for the property list

use serde::Serialize;

use crate::domain::{MapElement, Shape};
use crate::store::AnnotationStore;

/// One property-list line per element, in insertion order
///
/// The active element is prefixed with `*`. Polygons and polylines show their
/// measurement, markers their icon label and color.
pub fn list_rows(store: &AnnotationStore) -> Vec<String> {
    let active = store.active_id();
    store
        .elements()
        .iter()
        .map(|element| {
            let mark = if Some(element.id()) == active { '*' } else { ' ' };
            format!(
                "{} {:<8} {:<14} {}",
                mark,
                element.kind(),
                element.name(),
                detail(element)
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

fn detail(element: &MapElement) -> String {
    match element.shape() {
        Shape::Marker { icon, color, .. } => format!("{} {}", icon.label(), color),
        _ => element.measurement().unwrap_or_default(),
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    active: Option<&'a str>,
    elements: &'a [MapElement],
}

/// Pretty JSON of every element plus the active id
pub fn snapshot_json(store: &AnnotationStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Snapshot {
        active: store.active_id().map(|id| id.as_str()),
        elements: store.elements(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IconKind, LatLng};

    fn sample_store() -> AnnotationStore {
        let mut store = AnnotationStore::new();
        store
            .create_polygon(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 0.001),
                LatLng::new(0.001, 0.0),
            ])
            .unwrap();
        store
            .create_polyline(vec![LatLng::new(40.0, -74.0), LatLng::new(40.0, -73.99)])
            .unwrap();
        let marker = store
            .create_marker(
                LatLng::new(40.0, -74.0),
                IconKind::NeedsRepair,
                IconKind::NeedsRepair.default_color(),
            )
            .unwrap();
        store.set_active(Some(marker.id())).unwrap();
        store
    }

    #[test]
    fn test_list_rows() {
        let rows = list_rows(&sample_store());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("  Polygon"));
        assert!(rows[0].ends_with("6182.16 m²"));
        assert!(rows[1].contains("Polyline 1"));
        assert!(rows[1].ends_with("851.80 m"));
        assert!(rows[2].starts_with("* Marker"));
        assert!(rows[2].ends_with("Needs Repair #FF3333"));
    }

    #[test]
    fn test_list_rows_empty() {
        assert!(list_rows(&AnnotationStore::new()).is_empty());
    }

    #[test]
    fn test_snapshot_json() {
        let store = sample_store();
        let json: serde_json::Value =
            serde_json::from_str(&snapshot_json(&store).unwrap()).unwrap();

        assert_eq!(json["active"], store.active_id().unwrap().as_str());
        let elements = json["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[2]["kind"], "marker");
        assert_eq!(elements[2]["icon"], "needs-repair");
        assert_eq!(elements[2]["color"], "#FF3333");
    }
}
