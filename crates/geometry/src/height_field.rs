use bevy::prelude::*;

use crate::config::{GRID_MAX, GRID_MIN, GRID_SAMPLES};
use crate::plane::PlaneParams;

/// Fixed rectangular sampling of the X-Y domain. Built once at startup and
/// immutable afterwards.
#[derive(Resource, Debug, Clone)]
pub struct SampleGrid {
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::new(GRID_MIN, GRID_MAX, GRID_SAMPLES)
    }
}

impl SampleGrid {
    pub fn new(min: f32, max: f32, samples: usize) -> Self {
        let xs = linspace(min, max, samples);
        let ys = xs.clone();
        Self { xs, ys }
    }

    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    pub fn ys(&self) -> &[f32] {
        &self.ys
    }

    /// Samples along X.
    pub fn width(&self) -> usize {
        self.xs.len()
    }

    /// Samples along Y.
    pub fn height(&self) -> usize {
        self.ys.len()
    }
}

/// Evenly spaced samples from `min` to `max`, both inclusive.
fn linspace(min: f32, max: f32, samples: usize) -> Vec<f32> {
    if samples <= 1 {
        return vec![min];
    }
    let step = (max - min) / (samples - 1) as f32;
    (0..samples).map(|i| min + step * i as f32).collect()
}

/// Plane heights at every grid sample, row-major (one row per Y sample).
///
/// Fully derived from [`PlaneParams`]; recomputed in one pass on every
/// parameter change and never stored beyond the rebuild that consumed it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl HeightField {
    /// Evaluate the plane over the whole grid.
    ///
    /// Reads all six parameters at once, so a change to any single scalar
    /// yields a field consistent with the full current parameter set.
    pub fn compute(params: &PlaneParams, grid: &SampleGrid) -> Self {
        let mut values = Vec::with_capacity(grid.width() * grid.height());
        for &y in grid.ys() {
            for &x in grid.xs() {
                values.push(params.height_at(x, y));
            }
        }
        Self {
            width: grid.width(),
            height: grid.height(),
            values,
        }
    }

    pub fn get(&self, ix: usize, iy: usize) -> f32 {
        self.values[iy * self.width + ix]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
