//! Sampled solution curves.

use std::ops::Index;

use crate::Float;

/// One point `(x, y)` on an approximate or exact solution curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: Float,
    pub y: Float,
}

impl Sample {
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

/// Ordered samples produced by one integration run.
///
/// Element 0 is the initial condition and element `i + 1` follows from
/// element `i` by exactly one step. A trajectory is built once by the
/// integrator and is read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Number of samples, `steps + 1` for a completed run.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Abscissae of all samples.
    pub fn x(&self) -> Vec<Float> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Ordinates of all samples.
    pub fn y(&self) -> Vec<Float> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// New trajectory on the same abscissae with `y = g(x)`.
    ///
    /// Used to tabulate a reference solution on exactly the grid an
    /// integrator produced.
    pub fn resample<G>(&self, mut g: G) -> Trajectory
    where
        G: FnMut(Float) -> Float,
    {
        Trajectory {
            samples: self.samples.iter().map(|s| Sample::new(s.x, g(s.x))).collect(),
        }
    }
}

impl Index<usize> for Trajectory {
    type Output = Sample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
