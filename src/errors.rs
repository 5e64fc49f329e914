use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlannerError {
    #[error("recipe '{0}' not found")]
    NotFound(String),
    #[error("index {index} out of range for list of length {len}")]
    InvalidIndex { index: usize, len: usize },
    #[error("duplicate recipe id '{0}'")]
    DuplicateId(String),
    #[error("recipe '{id}' is invalid: {}", .issues.join("; "))]
    InvalidRecipe { id: String, issues: Vec<String> },
    #[error("recipe draft is invalid: {}", .0.join("; "))]
    InvalidDraft(Vec<String>),
    #[error("nutrition target for {nutrient} must be positive, got {value}")]
    InvalidTarget { nutrient: &'static str, value: f64 },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
