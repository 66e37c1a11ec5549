//! Help request domain types and parameters.

/// Urgency of a community help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyLevel {
    Low,
    Medium,
    Urgent,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(UrgencyLevel::Low),
            "medium" => Some(UrgencyLevel::Medium),
            "urgent" => Some(UrgencyLevel::Urgent),
            _ => None,
        }
    }
}

/// Progress state of a help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpStatus {
    Open,
    InProgress,
    Resolved,
}

impl HelpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpStatus::Open => "open",
            HelpStatus::InProgress => "in-progress",
            HelpStatus::Resolved => "resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(HelpStatus::Open),
            "in-progress" => Some(HelpStatus::InProgress),
            "resolved" => Some(HelpStatus::Resolved),
            _ => None,
        }
    }
}

/// Parameters for creating a help request.
#[derive(Debug, Clone)]
pub struct CreateHelpRequestParams {
    pub title: String,
    pub description: String,
    pub urgency_level: UrgencyLevel,
    pub created_by: i32,
}

/// Parameters for a partial help request update.
#[derive(Debug, Clone, Default)]
pub struct UpdateHelpRequestParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub urgency_level: Option<UrgencyLevel>,
}

/// Filters for the help request list endpoint.
#[derive(Debug, Clone, Default)]
pub struct HelpRequestFilter {
    pub urgency_level: Option<String>,
    pub status: Option<String>,
}
