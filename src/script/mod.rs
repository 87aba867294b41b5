//! Replayable gesture scripts
//!
//! A script lists user actions in the order the hosting UI would deliver
//! them:
//!
//! ```toml
//! [[step]]
//! action = "polygon"
//! points = [[0.0, 0.0], [0.0, 0.001], [0.001, 0.0]]
//!
//! [[step]]
//! action = "marker"
//! at = [40.0, -74.0]
//! icon = "general"
//!
//! [[step]]
//! action = "select"
//! name = "Polygon 1"
//!
//! [[step]]
//! action = "delete"
//! ```

use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::config::FileConfig;
use crate::domain::{ElementId, IconKind, LatLng, Rgb};
use crate::store::AnnotationStore;
use crate::surface::Gesture;

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One user action; points are `[lat, lng]` pairs
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Polygon {
        points: Vec<[f64; 2]>,
    },
    Polyline {
        points: Vec<[f64; 2]>,
    },
    Marker {
        at: [f64; 2],
        #[serde(default)]
        icon: Option<IconKind>,
        #[serde(default)]
        color: Option<Rgb>,
    },
    /// Omitting `name` clears the selection
    Select {
        #[serde(default)]
        name: Option<String>,
    },
    Delete,
    Customize {
        name: String,
        icon: IconKind,
        color: Rgb,
    },
}

fn to_points(pairs: &[[f64; 2]]) -> Vec<LatLng> {
    pairs.iter().map(|&[lat, lng]| LatLng::new(lat, lng)).collect()
}

impl Script {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse gesture script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Apply every step to `store`, stopping at the first failure
    pub fn replay(&self, store: &mut AnnotationStore, config: &FileConfig) -> Result<()> {
        for (i, step) in self.steps.iter().enumerate() {
            debug!("Step {}: {:?}", i + 1, step);
            apply(store, step, config).with_context(|| format!("Step {} failed", i + 1))?;
        }
        Ok(())
    }
}

fn resolve(store: &AnnotationStore, name: &str) -> Result<ElementId> {
    store
        .find_by_name(name)
        .map(|e| e.id().clone())
        .ok_or_else(|| anyhow!("No element named {:?}", name))
}

fn apply(store: &mut AnnotationStore, step: &Step, config: &FileConfig) -> Result<()> {
    match step {
        Step::Polygon { points } => {
            store.accept(Gesture::PolygonComplete(to_points(points)))?;
        }
        Step::Polyline { points } => {
            store.accept(Gesture::PolylineComplete(to_points(points)))?;
        }
        Step::Marker { at, icon, color } => {
            let (icon, color) = match (icon, color) {
                (Some(icon), Some(color)) => (*icon, *color),
                (Some(icon), None) => (*icon, icon.default_color()),
                (None, Some(color)) => (config.marker_style().0, *color),
                (None, None) => config.marker_style(),
            };
            store.accept(Gesture::MarkerDropped {
                position: LatLng::new(at[0], at[1]),
                icon,
                color,
            })?;
        }
        Step::Select { name } => match name {
            Some(name) => {
                let id = resolve(store, name)?;
                store.set_active(Some(&id))?;
            }
            None => store.set_active(None)?,
        },
        Step::Delete => {
            store.delete_active()?;
        }
        Step::Customize { name, icon, color } => {
            let id = resolve(store, name)?;
            store.customize_marker(&id, *icon, *color)?;
        }
    }
    Ok(())
}
