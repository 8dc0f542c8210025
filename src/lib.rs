//! # Seat Pipeline
//!
//! A library for tracking software-seat adoption across a customer base and
//! computing the revenue views behind a sales dashboard: per-customer
//! metrics, filtered/sorted/grouped customer lists, and fixed-quarter
//! executive summaries.
//!
//! ## Core Concepts
//!
//! - **Customer**: an account with a seat target, an adopted-seat count, its
//!   open pipeline of [`Opportunity`] deals, and display-only stakeholders
//! - **Seat pricing**: every revenue figure is seats x $30/month x 12; there
//!   is no other pricing input
//! - **View pipeline**: filter (by partner) -> sort (by name or pipeline ARR)
//!   -> group (none / quarter / partner / quarter-with-partners), recomputed
//!   from scratch on every state change
//! - **Executive summary**: totals, top deals, and partner distribution for
//!   one fixed fiscal quarter ([`CURRENT_QUARTER`]), never derived from the
//!   clock
//!
//! All computations are pure over an in-memory [`CustomerBook`]; there is no
//! persistence and no concurrency.
//!
//! ## Example
//!
//! ```rust,ignore
//! use seat_pipeline::*;
//!
//! let book = sample_book();
//!
//! let state = ViewState {
//!     group_by: GroupBy::Quarter,
//!     partner: PartnerFilter::named("Telstra"),
//!     ..ViewState::default()
//! };
//!
//! let view = build_dashboard(&book, &state).unwrap();
//! match &view.groups {
//!     CustomerGroups::Grouped(buckets) => { /* render bucket headers */ }
//!     CustomerGroups::Ungrouped(customers) => { /* render flat list */ }
//! }
//! println!("pipeline this quarter: ${}", view.summary.total_arr);
//! ```

pub mod aggregates;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod schema;
pub mod store;
pub mod summary;

pub use aggregates::{
    partner_arr, partners_in_quarter, quarter_arr, quarter_partner_arr,
    quarter_partner_opportunities,
};
pub use dataset::{sample_book, sample_customers};
pub use engine::{
    build_view, compare_quarter_labels, CustomerGroups, ViewEngine, NO_CLOSE_DATE, NO_PARTNER,
};
pub use error::{PipelineError, Result};
pub use metrics::*;
pub use schema::*;
pub use store::{CustomerBook, MAX_OPPORTUNITIES};
pub use summary::{quarter_summary, QuarterSummary, CURRENT_QUARTER, TOP_DEALS};

use log::{debug, info};
use serde::Serialize;

/// Everything one render pass needs: the grouped customer list and the
/// executive summary, both plain data for the presentation layer to walk.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub groups: CustomerGroups,
    pub summary: QuarterSummary,
}

pub struct PipelineProcessor;

impl PipelineProcessor {
    /// Builds the full dashboard view with the summary pinned to
    /// [`CURRENT_QUARTER`].
    pub fn process(book: &CustomerBook, state: &ViewState) -> Result<DashboardView> {
        Self::process_for_quarter(book, state, CURRENT_QUARTER)
    }

    pub fn process_for_quarter(
        book: &CustomerBook,
        state: &ViewState,
        quarter: &str,
    ) -> Result<DashboardView> {
        book.validate()?;

        info!("Building dashboard view over {} customers", book.len());
        debug!("View state: {:?}; summary quarter: {}", state, quarter);
        for warning in book.integrity_warnings() {
            debug!("Dataset integrity: {}", warning);
        }

        let groups = build_view(book.customers(), state);
        let summary = quarter_summary(book.customers(), quarter);

        Ok(DashboardView { groups, summary })
    }
}

pub fn build_dashboard(book: &CustomerBook, state: &ViewState) -> Result<DashboardView> {
    PipelineProcessor::process(book, state)
}

pub fn build_dashboard_for_quarter(
    book: &CustomerBook,
    state: &ViewState,
    quarter: &str,
) -> Result<DashboardView> {
    PipelineProcessor::process_for_quarter(book, state, quarter)
}
