use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for randomized matrix initialization.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InitConfig {
    /// Fixed seed for reproducible draws; `None` seeds from OS entropy.
    pub seed: Option<u64>,

    #[serde(flatten)]
    pub init_type: InitType,
}

/// Supported sampling distributions and their bounds.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum InitType {
    /// Integers uniform over `[min, max]` (inclusive).
    Int { min: i64, max: i64 },
    /// Floats uniform over `[min, max)` (upper bound excluded).
    Float { min: f64, max: f64 },
}

impl Default for InitType {
    fn default() -> Self {
        InitType::Float {
            min: -1.0,
            max: 1.0,
        }
    }
}

impl FromStr for InitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(InitType::Int { min: 0, max: 1 }),
            "float" | "uniform" => Ok(InitType::Float {
                min: -1.0,
                max: 1.0,
            }),
            _ => Err(format!(
                "Unknown init type: {}. Expected one of `int`, `integer`, `float` or `uniform`",
                s
            )),
        }
    }
}

impl InitConfig {
    pub fn new(seed: Option<u64>, init_type: InitType) -> Self {
        Self { seed, init_type }
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            seed: None,
            init_type: InitType::default(),
        }
    }
}
