//! Labeled prediction results: a flux tensor plus its row and proxy axes.

use faer::Mat;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Free-form key/value annotations (units, descriptions).
pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandAxis {
    pub numbers: Vec<usize>,
    pub centers: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<f64>>,
}

impl BandAxis {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineAxis {
    pub numbers: Vec<usize>,
    pub wavelengths: Vec<f64>,
}

impl LineAxis {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowAxis {
    Bands(BandAxis),
    Lines(LineAxis),
}

impl RowAxis {
    pub fn len(&self) -> usize {
        match self {
            Self::Bands(axis) => axis.len(),
            Self::Lines(axis) => axis.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension name of the row axis.
    pub const fn dimension(&self) -> &'static str {
        match self {
            Self::Bands(_) => "band_number",
            Self::Lines(_) => "line_number",
        }
    }

    pub fn numbers(&self) -> &[usize] {
        match self {
            Self::Bands(axis) => &axis.numbers,
            Self::Lines(axis) => &axis.numbers,
        }
    }

    /// Band centers or line wavelengths, one per row.
    pub fn positions(&self) -> &[f64] {
        match self {
            Self::Bands(axis) => &axis.centers,
            Self::Lines(axis) => &axis.wavelengths,
        }
    }

    pub fn as_bands(&self) -> Option<&BandAxis> {
        match self {
            Self::Bands(axis) => Some(axis),
            Self::Lines(_) => None,
        }
    }

    pub fn as_lines(&self) -> Option<&LineAxis> {
        match self {
            Self::Lines(axis) => Some(axis),
            Self::Bands(_) => None,
        }
    }
}

/// Named proxy coordinate (`hei`, `lac`, `f107`) holding the observation
/// values in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProxyAxis {
    pub name: String,
    pub values: Vec<f64>,
}

impl ProxyAxis {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LabeledResult {
    variable: String,
    rows: RowAxis,
    proxy: ProxyAxis,
    flux: Mat<f64>,
    attributes: Attributes,
}

impl LabeledResult {
    /// Callers go through [`super::ResultPackager::wrap`], which checks the
    /// axes against the tensor shape.
    pub(crate) fn from_parts(
        variable: String,
        rows: RowAxis,
        proxy: ProxyAxis,
        flux: Mat<f64>,
        attributes: Attributes,
    ) -> Self {
        Self {
            variable,
            rows,
            proxy,
            flux,
            attributes,
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn rows(&self) -> &RowAxis {
        &self.rows
    }

    pub fn proxy(&self) -> &ProxyAxis {
        &self.proxy
    }

    pub fn flux(&self) -> &Mat<f64> {
        &self.flux
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// `(rows, observations)`
    pub fn shape(&self) -> (usize, usize) {
        (self.flux.nrows(), self.flux.ncols())
    }

    pub fn value(&self, row: usize, observation: usize) -> f64 {
        self.flux[(row, observation)]
    }

    pub fn column(&self, observation: usize) -> Vec<f64> {
        (0..self.flux.nrows())
            .map(|row| self.flux[(row, observation)])
            .collect()
    }

    pub fn row(&self, row: usize) -> Vec<f64> {
        (0..self.flux.ncols())
            .map(|observation| self.flux[(row, observation)])
            .collect()
    }

    /// Same labels, flux multiplied elementwise by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let flux = Mat::from_fn(self.flux.nrows(), self.flux.ncols(), |row, col| {
            self.flux[(row, col)] * factor
        });
        Self {
            flux,
            ..self.clone()
        }
    }

    pub fn to_json(&self) -> Value {
        let data: Vec<Vec<f64>> = (0..self.flux.nrows()).map(|row| self.row(row)).collect();
        json!({
            "variable": self.variable,
            "dims": [self.rows.dimension(), self.proxy.name],
            "rows": self.rows,
            "proxy": self.proxy,
            "data": data,
            "attributes": self.attributes,
        })
    }
}

impl PartialEq for LabeledResult {
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable
            && self.rows == other.rows
            && self.proxy == other.proxy
            && self.attributes == other.attributes
            && self.shape() == other.shape()
            && (0..self.flux.nrows()).all(|row| {
                (0..self.flux.ncols())
                    .all(|col| self.flux[(row, col)] == other.flux[(row, col)])
            })
    }
}
