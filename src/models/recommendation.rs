use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Heating,
    Laundry,
    Mobility,
    Cooking,
    Insulation,
    Appliances,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Heating => "heating",
            Category::Laundry => "laundry",
            Category::Mobility => "mobility",
            Category::Cooking => "cooking",
            Category::Insulation => "insulation",
            Category::Appliances => "appliances",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How urgent a suggestion is. Lower rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rough money-saving magnitude of a suggestion, independent of urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn rank(&self) -> u8 {
        match self {
            Impact::High => 0,
            Impact::Medium => 1,
            Impact::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// Same-day annotation: has the action window already elapsed?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStatus {
    Active,
    Passed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reasoning: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_estimate: Option<String>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_status: Option<TimeStatus>,
    pub is_personalised: bool,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            reasoning: String::new(),
            priority,
            savings_estimate: None,
            category,
            impact: None,
            time_status: None,
            is_personalised: false,
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_savings(mut self, estimate: impl Into<String>) -> Self {
        self.savings_estimate = Some(estimate.into());
        self
    }

    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = Some(impact);
        self
    }

    pub fn personalised(mut self) -> Self {
        self.is_personalised = true;
        self
    }

    /// Missing impact is treated as medium everywhere it matters.
    pub fn impact_or_default(&self) -> Impact {
        self.impact.unwrap_or(Impact::Medium)
    }

    pub fn is_passed(&self) -> bool {
        self.time_status == Some(TimeStatus::Passed)
    }
}
