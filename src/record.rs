//! The plot (parcela) record exchanged with the REST backend.
//!
//! The backend stores boundaries as WKT in `plot_geom`. Records are converted
//! to [`Geometry`] right after fetch and back to WKT right before submission;
//! nothing in between touches the WKT text.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::algorithm::GeodesicArea;
use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;
use crate::io::geojson::geometry_to_geojson;
use crate::io::wkt::{read_wkt, read_wkt_lenient, write_wkt};

/// Earliest implant or creation year the backend accepts.
pub const MIN_YEAR: i32 = 1800;

/// Vine training system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConductionType {
    Espaldera,
    Vaso,
    Parral,
    Lira,
    Guyot,
}

/// Farming regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ManagementType {
    Conventional,
    Organic,
    Biodynamic,
    Integrated,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRecord {
    /// Assigned by the backend, absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_id: Option<i64>,
    pub plot_name: String,
    /// Grape variety reference.
    #[serde(default)]
    pub plot_var: Option<String>,
    #[serde(default)]
    pub plot_rootstock: Option<String>,
    #[serde(default)]
    pub plot_implant_year: Option<i32>,
    #[serde(default)]
    pub plot_creation_year: Option<i32>,
    #[serde(default)]
    pub plot_conduction: Option<ConductionType>,
    #[serde(default)]
    pub plot_management: Option<ManagementType>,
    #[serde(default)]
    pub plot_description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Boundary as WKT.
    #[serde(default)]
    pub plot_geom: Option<String>,
    /// Area in square meters.
    #[serde(default)]
    pub plot_area: Option<f64>,
}

impl PlotRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            plot_id: None,
            plot_name: name.into(),
            plot_var: None,
            plot_rootstock: None,
            plot_implant_year: None,
            plot_creation_year: None,
            plot_conduction: None,
            plot_management: None,
            plot_description: None,
            active: true,
            plot_geom: None,
            plot_area: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The boundary, if present and well formed. Malformed WKT is logged.
    pub fn geometry(&self) -> Option<Geometry> {
        self.plot_geom.as_deref().and_then(read_wkt_lenient)
    }

    /// The boundary as a GeoJSON geometry for display.
    ///
    /// Unsupported geometry kinds yield `None`, so nothing is drawn.
    pub fn geojson(&self) -> Option<geojson::Geometry> {
        self.geometry()
            .filter(|geometry| !geometry.is_unknown())
            .map(|geometry| geometry_to_geojson(&geometry))
    }

    /// Store a new boundary and recompute `plot_area`.
    pub fn set_geometry(&mut self, geometry: &Geometry) -> Result<()> {
        self.plot_geom = Some(write_wkt(geometry)?);
        self.plot_area = Some(geometry.geodesic_area_unsigned());
        Ok(())
    }

    /// Remove the boundary and its area.
    pub fn clear_geometry(&mut self) {
        self.plot_geom = None;
        self.plot_area = None;
    }

    /// Validate against the current calendar year.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(chrono::Local::now().year())
    }

    /// Check the fields the backend would reject.
    ///
    /// Implant and creation years must fall within `MIN_YEAR..=current_year`,
    /// and `plot_geom`, when present, must be well-formed WKT.
    pub fn validate_at(&self, current_year: i32) -> Result<()> {
        if self.plot_name.trim().is_empty() {
            return Err(GeometryError::Validation("plot_name is empty".to_string()));
        }

        for (field, year) in [
            ("plot_implant_year", self.plot_implant_year),
            ("plot_creation_year", self.plot_creation_year),
        ] {
            if let Some(year) = year {
                if !(MIN_YEAR..=current_year).contains(&year) {
                    return Err(GeometryError::Validation(format!(
                        "{field} must be between {MIN_YEAR} and {current_year}, got {year}"
                    )));
                }
            }
        }

        if let Some(wkt) = &self.plot_geom {
            read_wkt(wkt)?;
        }
        Ok(())
    }
}
