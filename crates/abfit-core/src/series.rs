//! Paired A/B sample series
//!
//! A [`PairedSeries`] holds two co-located sample arrays (the "A" and "B"
//! attributes of a crossplot) plus optional spatial coordinates. It validates
//! array lengths at construction and is immutable afterwards, so it can be
//! shared freely across threads.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Min/max extents of a series, computed in one pass at construction.
///
/// Callers use these for plot-axis scaling; the z extents are only present
/// when the series carries spatial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub min_a: f64,
    pub max_a: f64,
    pub min_b: f64,
    pub max_b: f64,
    pub min_z: Option<f32>,
    pub max_z: Option<f32>,
}

/// Spatial coordinates accompanying a series: map-plane x/y and depth/time z.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCoordinates {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f32>,
}

impl SeriesCoordinates {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f32] {
        &self.z
    }
}

/// An immutable pair of equal-length sample arrays.
///
/// All arrays are moved in at construction and never mutated, so accessors
/// hand out plain slices. An empty series is legal; statistics and
/// regressions are simply not defined for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSeries {
    name: Option<String>,
    id: u32,
    a: Vec<f64>,
    b: Vec<f64>,
    coordinates: Option<SeriesCoordinates>,
    bounds: Option<SeriesBounds>,
}

impl PairedSeries {
    /// Create a series from A and B sample arrays.
    ///
    /// Fails with [`Error::LengthMismatch`] when the arrays disagree on
    /// length.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self> {
        if b.len() != a.len() {
            return Err(Error::length_mismatch("b values", a.len(), b.len()));
        }
        let bounds = compute_bounds(&a, &b, None);
        Ok(Self {
            name: None,
            id: 0,
            a,
            b,
            coordinates: None,
            bounds,
        })
    }

    /// Create a series with spatial coordinates (x/y in map units, z in
    /// time or depth).
    ///
    /// Every array must have the same length as `a`.
    pub fn with_coordinates(
        a: Vec<f64>,
        b: Vec<f64>,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f32>,
    ) -> Result<Self> {
        let n = a.len();
        if b.len() != n {
            return Err(Error::length_mismatch("b values", n, b.len()));
        }
        if x.len() != n {
            return Err(Error::length_mismatch("x coordinates", n, x.len()));
        }
        if y.len() != n {
            return Err(Error::length_mismatch("y coordinates", n, y.len()));
        }
        if z.len() != n {
            return Err(Error::length_mismatch("z coordinates", n, z.len()));
        }
        let coordinates = SeriesCoordinates { x, y, z };
        let bounds = compute_bounds(&a, &b, Some(&coordinates.z));
        Ok(Self {
            name: None,
            id: 0,
            a,
            b,
            coordinates: Some(coordinates),
            bounds,
        })
    }

    /// Attach a display name to the series.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a display id to the series.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Number of sample pairs in the series.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// The A sample array.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// The B sample array.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Spatial coordinates, when the series carries them.
    pub fn coordinates(&self) -> Option<&SeriesCoordinates> {
        self.coordinates.as_ref()
    }

    /// Min/max extents of the series, `None` when the series is empty.
    pub fn bounds(&self) -> Option<&SeriesBounds> {
        self.bounds.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

fn compute_bounds(a: &[f64], b: &[f64], z: Option<&[f32]>) -> Option<SeriesBounds> {
    let first_a = *a.first()?;
    let first_b = *b.first()?;
    let mut bounds = SeriesBounds {
        min_a: first_a,
        max_a: first_a,
        min_b: first_b,
        max_b: first_b,
        min_z: None,
        max_z: None,
    };
    for (&ai, &bi) in a.iter().zip(b) {
        bounds.min_a = bounds.min_a.min(ai);
        bounds.max_a = bounds.max_a.max(ai);
        bounds.min_b = bounds.min_b.min(bi);
        bounds.max_b = bounds.max_b.max(bi);
    }
    if let Some(z) = z {
        let mut min_z = z[0];
        let mut max_z = z[0];
        for &zi in z {
            min_z = min_z.min(zi);
            max_z = max_z.max(zi);
        }
        bounds.min_z = Some(min_z);
        bounds.max_z = Some(max_z);
    }
    Some(bounds)
}
