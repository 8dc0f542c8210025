use crate::metrics::deal_size;
use crate::schema::{Customer, Opportunity};
use indexmap::IndexMap;
use serde::Serialize;

/// The quarter the executive summary reports on. Deliberately a constant:
/// the dashboard never derives it from the clock. Bump it when the fiscal
/// quarter rolls over, or call [`quarter_summary`] with an explicit label.
pub const CURRENT_QUARTER: &str = "Q4 FY25";

/// Number of deals shown in the top-deals panel.
pub const TOP_DEALS: usize = 5;

/// Fixed-quarter aggregates backing the executive-summary panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuarterSummary {
    /// The quarter label the figures below are restricted to.
    pub quarter: String,
    /// Combined annualized value of every deal closing in the quarter.
    pub total_arr: u64,
    /// Combined seat count of every deal closing in the quarter.
    pub total_seats: u64,
    /// The quarter's deals, largest first, truncated to [`TOP_DEALS`]. Ties
    /// keep their dataset order.
    pub top_deals: Vec<Opportunity>,
    /// Revenue per partner within the quarter, in first-occurrence order.
    /// Feeds the partner-distribution chart.
    pub partner_data: IndexMap<String, u64>,
}

/// Collects every opportunity closing in `quarter` (customer order, then each
/// customer's opportunity order) and derives the summary figures from it.
pub fn quarter_summary(customers: &[Customer], quarter: &str) -> QuarterSummary {
    let quarter_opps: Vec<&Opportunity> = customers
        .iter()
        .flat_map(|customer| customer.opportunities.iter())
        .filter(|opp| opp.close_date == quarter)
        .collect();

    let total_arr = quarter_opps.iter().map(|opp| deal_size(opp.seats)).sum();
    let total_seats = quarter_opps.iter().map(|opp| opp.seats as u64).sum();

    let mut top_deals: Vec<Opportunity> = quarter_opps.iter().map(|&opp| opp.clone()).collect();
    top_deals.sort_by(|a, b| deal_size(b.seats).cmp(&deal_size(a.seats)));
    top_deals.truncate(TOP_DEALS);

    let mut partner_data: IndexMap<String, u64> = IndexMap::new();
    for opp in &quarter_opps {
        *partner_data.entry(opp.partner.clone()).or_insert(0) += deal_size(opp.seats);
    }

    QuarterSummary {
        quarter: quarter.to_string(),
        total_arr,
        total_seats,
        top_deals,
        partner_data,
    }
}
