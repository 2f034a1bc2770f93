use crate::types::LabeledPoint;

/// The fixed quality-control training set: (weight kg, size cm) per label.
pub fn quality_control() -> Vec<LabeledPoint> {
    vec![
        LabeledPoint::new(1.0, 5.0, "Good"),
        LabeledPoint::new(1.2, 5.5, "Good"),
        LabeledPoint::new(0.8, 4.8, "Good"),
        LabeledPoint::new(1.5, 6.0, "Defective"),
        LabeledPoint::new(1.6, 6.2, "Defective"),
        LabeledPoint::new(1.4, 5.8, "Defective"),
    ]
}
