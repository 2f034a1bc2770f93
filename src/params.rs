use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct Params {
    pub k: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self { k: 3 }
    }
}
