use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LabeledPoint {
    pub weight: f64,
    pub size: f64,
    pub label: String,
}

impl LabeledPoint {
    pub fn new(weight: f64, size: f64, label: impl Into<String>) -> Self {
        Self {
            weight,
            size,
            label: label.into(),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Query {
    pub weight: f64,
    pub size: f64,
}

impl Query {
    pub fn new(weight: f64, size: f64) -> Self {
        Self { weight, size }
    }
}

/// A training point scored with its distance to one query. Built fresh per
/// call; the training data itself is never annotated.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ScoredPoint {
    pub point: LabeledPoint,
    pub distance: f64,
}

/// Feature-space coordinates, shared by labeled and unlabeled items.
pub trait Coords {
    fn coords(&self) -> [f64; 2];
}

impl Coords for LabeledPoint {
    fn coords(&self) -> [f64; 2] {
        [self.weight, self.size]
    }
}

impl Coords for Query {
    fn coords(&self) -> [f64; 2] {
        [self.weight, self.size]
    }
}
