//! Randomly weighted compositional pattern-producing network.
//!
//! The network maps the four coordinate features of a cell to a single density. Weights are
//! drawn uniformly from `[-weight_range, weight_range)` with a seeded ChaCha stream, so a seed
//! always reproduces the same shape. There are no bias terms.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coords::coordinate_field;
use crate::density::{DensityField, cell_count};
use crate::error::{ShapeResult, invalid};

pub const INPUTS: usize = 4;
const HIDDEN_LAYERS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Gaussian,
    Sin,
    Sigmoid,
    Tanh,
}

impl Activation {
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            // Standard normal pdf
            Activation::Gaussian => (-x * x / 2.0).exp() / (2.0 * std::f32::consts::PI).sqrt(),
            Activation::Sin => x.sin(),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

// Per-layer activations, input side first.
const ACTIVATIONS: [Activation; HIDDEN_LAYERS + 1] = [
    Activation::Gaussian,
    Activation::Sin,
    Activation::Sigmoid,
    Activation::Tanh,
    Activation::Sigmoid,
];

#[derive(Clone, Debug)]
struct Layer {
    inputs: usize,
    outputs: usize,
    // inputs x outputs, row-major by input
    weights: Vec<f32>,
    activation: Activation,
}

impl Layer {
    fn forward(&self, x: &[f32], out: &mut Vec<f32>) {
        out.clear();
        out.resize(self.outputs, 0.0);
        for (r, &xi) in x.iter().enumerate().take(self.inputs) {
            let row = &self.weights[r * self.outputs..(r + 1) * self.outputs];
            for (o, &w) in out.iter_mut().zip(row) {
                *o += xi * w;
            }
        }
        for o in out.iter_mut() {
            *o = self.activation.apply(*o);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cppn {
    layers: Vec<Layer>,
}

impl Cppn {
    /// Builds a `4 -> h -> h -> h -> h -> 1` network.
    pub fn random(seed: u64, hidden: usize, weight_range: f32) -> ShapeResult<Self> {
        if hidden == 0 {
            return Err(invalid("hidden", "must be at least 1"));
        }
        if !(weight_range.is_finite() && weight_range > 0.0) {
            return Err(invalid("weight_range", "must be a positive number"));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let widths = [INPUTS, hidden, hidden, hidden, hidden, 1];
        let layers = widths
            .windows(2)
            .zip(ACTIVATIONS)
            .map(|(w, activation)| {
                let weights = (0..w[0] * w[1])
                    .map(|_| rng.gen_range(-weight_range..weight_range))
                    .collect();
                Layer {
                    inputs: w[0],
                    outputs: w[1],
                    weights,
                    activation,
                }
            })
            .collect();
        Ok(Self { layers })
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn eval(&self, input: [f32; INPUTS]) -> f32 {
        let mut cur = input.to_vec();
        let mut next = Vec::new();
        for layer in &self.layers {
            layer.forward(&cur, &mut next);
            std::mem::swap(&mut cur, &mut next);
        }
        cur.first().copied().unwrap_or(0.0)
    }

    /// Evaluates the network over the coordinate field of an `n`³ cube.
    pub fn density(&self, n: usize) -> ShapeResult<DensityField> {
        cell_count(n)?;
        let values = coordinate_field(n)
            .into_iter()
            .map(|row| self.eval(row))
            .collect();
        DensityField::from_values(n, values)
    }
}
