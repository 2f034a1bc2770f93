use crate::types::Coords;

pub fn euclidean(a: &impl Coords, b: &impl Coords) -> f64 {
    let pa = a.coords();
    let pb = b.coords();
    pa.iter()
        .zip(pb.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
