use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum Confidence {
    #[serde(rename = "Non Commit")]
    #[schemars(description = "No commitment from the customer yet; the deal may slip or vanish")]
    NonCommit,

    #[schemars(description = "Plausible but not forecast; counts as upside on top of the committed pipeline")]
    Upside,

    #[serde(rename = "Commit with risk")]
    #[schemars(description = "Customer has committed but a known risk could still push the close out")]
    CommitWithRisk,

    #[schemars(description = "Customer has signed off; the deal is expected to close in the stated quarter")]
    Committed,

    #[schemars(
        description = "Legacy placeholder carried by newly created, not-yet-edited opportunities. Never assigned through the edit flow."
    )]
    Medium,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::Medium
    }
}

/// Display color for a confidence label. Total over [`Confidence`]: the four
/// known labels map to their dashboard colors, the legacy placeholder (and
/// nothing else) renders neutrally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceColor {
    Green,
    Yellow,
    Blue,
    Red,
    Neutral,
}

impl Confidence {
    pub fn display_color(&self) -> ConfidenceColor {
        match self {
            Confidence::Committed => ConfidenceColor::Green,
            Confidence::CommitWithRisk => ConfidenceColor::Yellow,
            Confidence::Upside => ConfidenceColor::Blue,
            Confidence::NonCommit => ConfidenceColor::Red,
            Confidence::Medium => ConfidenceColor::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Opportunity {
    #[schemars(
        description = "Deal identifier as displayed (e.g. 'OPP-001'). Unique within its customer by convention, not guaranteed globally unique."
    )]
    pub id: String,

    #[schemars(description = "Number of seats this deal would add if it closes")]
    pub seats: u32,

    #[schemars(description = "Short description of the deal (e.g. the business unit being licensed)")]
    pub description: String,

    #[serde(default)]
    #[schemars(description = "Free-text running notes from the account team")]
    pub notes: String,

    #[schemars(
        description = "Free-form fiscal-quarter label such as 'Q4 FY25'. Compared as text everywhere; never parsed as a calendar date."
    )]
    pub close_date: String,

    #[serde(default)]
    pub confidence: Confidence,

    #[schemars(description = "Partner name credited with the deal")]
    pub partner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Customer {
    #[schemars(description = "Unique customer identifier")]
    pub id: String,

    #[schemars(description = "Display name of the account")]
    pub name: String,

    #[schemars(description = "Licensed seat target for the whole account")]
    pub total_seats: u32,

    #[schemars(
        description = "Seats already adopted. Expected to stay at or below the target, but this is not enforced; overshoot surfaces as negative potential revenue."
    )]
    pub adopted_seats: u32,

    #[serde(default)]
    #[schemars(description = "Open pipeline deals, in display order")]
    pub opportunities: Vec<Opportunity>,

    #[serde(default)]
    #[schemars(description = "Named contacts at the account; display-only")]
    pub stakeholders: Vec<Stakeholder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    OpportunityArr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortConfig {
    /// Header-click behavior: selecting the active field flips its direction,
    /// selecting a new field resets to ascending.
    pub fn toggle(&mut self, field: SortField) {
        self.direction = if self.field == field && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.field = field;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    None,
    Quarter,
    Partner,
    QuarterPartner,
}

impl Default for GroupBy {
    fn default() -> Self {
        Self::Quarter
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerFilter {
    All,
    Named(String),
}

impl Default for PartnerFilter {
    fn default() -> Self {
        Self::All
    }
}

impl PartnerFilter {
    pub fn named(partner: impl Into<String>) -> Self {
        Self::Named(partner.into())
    }

    pub fn matches(&self, partner: &str) -> bool {
        match self {
            PartnerFilter::All => true,
            PartnerFilter::Named(selected) => selected == partner,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PartnerFilter::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }
}

/// Everything the presentation layer selects interactively, passed by value
/// into the engine on every recomputation. The engine holds no hidden state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub sort: SortConfig,
    pub group_by: GroupBy,
    pub partner: PartnerFilter,
    pub theme: Theme,
}
