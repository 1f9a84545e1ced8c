use serde::{Deserialize, Serialize};

/// Default criterion weighting. Hard skills dominate; time zone and contract
/// terms act as tie-breakers rather than gates.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    hard_skills: 0.40,
    soft_skills: 0.20,
    certifications: 0.20,
    time_zone: 0.10,
    contract_duration: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub hard_skills: f64,
    pub soft_skills: f64,
    pub certifications: f64,
    pub time_zone: f64,
    pub contract_duration: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.hard_skills
            + self.soft_skills
            + self.certifications
            + self.time_zone
            + self.contract_duration
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
