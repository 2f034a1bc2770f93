use std::collections::HashMap;

use crate::error::ClassifyError;
use crate::types::ScoredPoint;

struct Tally {
    count: usize,
    first: usize,
}

/// Majority vote over neighbors ordered ascending by distance.
///
/// A tie on vote count goes to the label whose closest member is nearest to
/// the query; with the input ordered, that is the label seen earliest.
pub fn majority(neighbors: &[ScoredPoint]) -> Result<String, ClassifyError> {
    if neighbors.is_empty() {
        return Err(ClassifyError::EmptyNeighborhood);
    }
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for (i, n) in neighbors.iter().enumerate() {
        tallies
            .entry(n.point.label.as_str())
            .or_insert(Tally { count: 0, first: i })
            .count += 1;
    }
    let (label, _) = tallies
        .into_iter()
        .max_by(|(_, a), (_, b)| a.count.cmp(&b.count).then_with(|| b.first.cmp(&a.first)))
        .ok_or(ClassifyError::EmptyNeighborhood)?;
    Ok(label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabeledPoint;

    fn scored(label: &str, distance: f64) -> ScoredPoint {
        ScoredPoint {
            point: LabeledPoint::new(0.0, 0.0, label),
            distance,
        }
    }

    #[test]
    fn simple_majority() {
        let neighbors = vec![scored("a", 0.1), scored("b", 0.2), scored("a", 0.3)];
        assert_eq!(majority(&neighbors).unwrap(), "a");
    }

    #[test]
    fn tie_goes_to_closest() {
        let neighbors = vec![
            scored("b", 0.1),
            scored("a", 0.2),
            scored("a", 0.3),
            scored("b", 0.4),
        ];
        assert_eq!(majority(&neighbors).unwrap(), "b");
    }

    #[test]
    fn single_neighbor() {
        assert_eq!(majority(&[scored("only", 1.0)]).unwrap(), "only");
    }

    #[test]
    fn empty_neighborhood() {
        let err = majority(&[]).unwrap_err();
        assert_eq!(err, ClassifyError::EmptyNeighborhood);
    }
}
