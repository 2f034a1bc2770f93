use tracing::debug;

use crate::error::ClassifyError;
use crate::neighbors::nearest;
use crate::params::Params;
use crate::types::{LabeledPoint, Query};
use crate::vote::majority;

pub struct Classifier {
    points: Vec<LabeledPoint>,
    params: Params,
}

impl Classifier {
    pub fn new(points: Vec<LabeledPoint>) -> Self {
        Self::with_params(points, Params::default())
    }

    pub fn with_params(points: Vec<LabeledPoint>, params: Params) -> Self {
        Self { points, params }
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Classifies with the configured default `k`.
    pub fn classify(&self, query: &Query) -> Result<String, ClassifyError> {
        self.classify_k(query, self.params.k)
    }

    pub fn classify_k(&self, query: &Query, k: usize) -> Result<String, ClassifyError> {
        if k == 0 {
            return Err(ClassifyError::InvalidArgument(
                "k must be at least 1".into(),
            ));
        }
        if self.points.is_empty() {
            return Err(ClassifyError::InvalidArgument(
                "training set is empty".into(),
            ));
        }
        if !query.weight.is_finite() || !query.size.is_finite() {
            return Err(ClassifyError::InvalidArgument(format!(
                "query features must be finite, got ({}, {})",
                query.weight, query.size
            )));
        }
        let neighbors = nearest(&self.points, query, k);
        debug!(k, found = neighbors.len(), "selected nearest neighbors");
        let label = majority(&neighbors)?;
        debug!(%label, "majority vote");
        Ok(label)
    }
}
