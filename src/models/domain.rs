use serde::{Deserialize, Serialize};

/// One structured holiday suggestion returned by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub description: String,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
    #[serde(rename = "bestTimeToVisit")]
    pub best_time_to_visit: String,
    pub highlights: Vec<String>,
}

impl Destination {
    /// A destination counts as complete only when every field carries a
    /// usable value. Empty strings and a zero cost are treated the same as
    /// absent fields, matching how the model tends to degrade output.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.country.is_empty()
            && !self.description.is_empty()
            && self.estimated_cost > 0.0
            && !self.best_time_to_visit.is_empty()
            && !self.highlights.is_empty()
    }
}
