use serde::{Deserialize, Serialize};

/// Athlete record as stored in the registry.
///
/// `national_id` is the unique key. Input also accepts the Portuguese field
/// names (`nome`, `cpf`, `centro_treinamento`, `categoria`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Athlete {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "cpf")]
    pub national_id: String,
    #[serde(alias = "centro_treinamento")]
    pub training_center: String,
    #[serde(alias = "categoria")]
    pub category: String,
}

impl Athlete {
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        training_center: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            training_center: training_center.into(),
            category: category.into(),
        }
    }

    /// Convert stored record to API response format
    pub fn to_response(&self) -> AthleteResponse {
        AthleteResponse {
            name: self.name.clone(),
            training_center: self.training_center.clone(),
            category: self.category.clone(),
        }
    }
}

/// Public projection of an athlete; the national id is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteResponse {
    pub name: String,
    pub training_center: String,
    pub category: String,
}

/// Filters for listing athletes. Both fields are exact matches and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    pub name: Option<String>,
    pub national_id: Option<String>,
}

impl AthleteFilter {
    /// Empty strings count as "no filter".
    pub fn new(name: Option<String>, national_id: Option<String>) -> Self {
        Self {
            name: name.filter(|s| !s.is_empty()),
            national_id: national_id.filter(|s| !s.is_empty()),
        }
    }

    pub fn matches(&self, athlete: &Athlete) -> bool {
        self.name.as_deref().is_none_or(|n| athlete.name == n)
            && self
                .national_id
                .as_deref()
                .is_none_or(|id| athlete.national_id == id)
    }
}

/// Offset/limit page of results with the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
