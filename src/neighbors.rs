use ordered_float::NotNan;

use crate::metrics::euclidean;
use crate::types::{LabeledPoint, Query, ScoredPoint};

/// Scores every training point against `query` and returns the `k` closest,
/// ascending by distance. Equal distances keep training-data insertion order.
pub fn nearest(points: &[LabeledPoint], query: &Query, k: usize) -> Vec<ScoredPoint> {
    let mut scored: Vec<ScoredPoint> = points
        .iter()
        .map(|p| ScoredPoint {
            point: p.clone(),
            distance: euclidean(p, query),
        })
        .collect();
    scored.sort_by_key(|s| NotNan::new(s.distance).unwrap());
    scored.truncate(k);
    scored
}
