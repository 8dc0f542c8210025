use crate::metrics::opportunity_revenue;
use crate::schema::{Customer, GroupBy, Opportunity, PartnerFilter, SortDirection, SortField, ViewState};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::cmp::Ordering;

/// Sentinel bucket for customers with no opportunity from the selected partner.
pub const NO_PARTNER: &str = "No Partner";

/// Sentinel bucket for customers with no opportunity carrying a close quarter.
pub const NO_CLOSE_DATE: &str = "No Close Date";

/// Output of the view pipeline. Callers must branch on the shape: `Ungrouped`
/// is a flat ordered sequence, `Grouped` is an ordered bucket-label map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum CustomerGroups {
    Ungrouped(Vec<Customer>),
    Grouped(IndexMap<String, Vec<Customer>>),
}

impl CustomerGroups {
    /// Bucket labels in display order; empty for the ungrouped shape.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            CustomerGroups::Ungrouped(_) => Vec::new(),
            CustomerGroups::Grouped(buckets) => buckets.keys().map(String::as_str).collect(),
        }
    }
}

pub struct ViewEngine {
    state: ViewState,
}

impl ViewEngine {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }

    /// Runs the full filter -> sort -> group pipeline over a snapshot of the
    /// customer base. The input is never mutated.
    pub fn build(&self, customers: &[Customer]) -> CustomerGroups {
        let filtered = self.filter(customers);
        let sorted = self.sort(filtered);
        self.group(sorted)
    }

    /// Keeps customers with at least one opportunity from the selected
    /// partner; a kept customer retains its full opportunity list. Narrowing
    /// individual opportunities to the partner happens during grouping and
    /// rendering, not here.
    pub fn filter(&self, customers: &[Customer]) -> Vec<Customer> {
        match &self.state.partner {
            PartnerFilter::All => customers.to_vec(),
            PartnerFilter::Named(partner) => customers
                .iter()
                .filter(|customer| {
                    customer
                        .opportunities
                        .iter()
                        .any(|opp| &opp.partner == partner)
                })
                .cloned()
                .collect(),
        }
    }

    /// Stable sort by the configured field. The opportunity-ARR key always
    /// uses the customer's full pipeline, ignoring any active partner filter.
    pub fn sort(&self, mut customers: Vec<Customer>) -> Vec<Customer> {
        let sort = self.state.sort;
        customers.sort_by(|a, b| {
            let ordering = match sort.field {
                SortField::Name => compare_names(&a.name, &b.name),
                SortField::OpportunityArr => opportunity_revenue(&a.opportunities)
                    .cmp(&opportunity_revenue(&b.opportunities)),
            };
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        customers
    }

    pub fn group(&self, customers: Vec<Customer>) -> CustomerGroups {
        match self.state.group_by {
            GroupBy::None => CustomerGroups::Ungrouped(customers),
            GroupBy::Partner => CustomerGroups::Grouped(self.bucket_by(customers, |opp| &opp.partner, NO_PARTNER)),
            // Quarter buckets get a final chronological reorder; the
            // quarter-with-partners view keeps first-encounter order.
            GroupBy::Quarter => {
                let buckets = self.bucket_by(customers, |opp| &opp.close_date, NO_CLOSE_DATE);
                CustomerGroups::Grouped(sort_quarter_buckets(buckets))
            }
            GroupBy::QuarterPartner => {
                CustomerGroups::Grouped(self.bucket_by(customers, |opp| &opp.close_date, NO_CLOSE_DATE))
            }
        }
    }

    /// Assigns each customer to one bucket per distinct key among its
    /// relevant opportunities (those matching the selected partner), at most
    /// once per bucket; customers with no relevant opportunity land in the
    /// sentinel bucket. Bucket order is first-encounter order.
    fn bucket_by(
        &self,
        customers: Vec<Customer>,
        key: impl Fn(&Opportunity) -> &str,
        sentinel: &str,
    ) -> IndexMap<String, Vec<Customer>> {
        let mut buckets: IndexMap<String, Vec<Customer>> = IndexMap::new();
        for customer in customers {
            let keys: IndexSet<String> = customer
                .opportunities
                .iter()
                .filter(|opp| self.state.partner.matches(&opp.partner))
                .map(|opp| key(opp).to_string())
                .collect();

            if keys.is_empty() {
                buckets.entry(sentinel.to_string()).or_default().push(customer);
                continue;
            }

            for label in keys {
                buckets.entry(label).or_default().push(customer.clone());
            }
        }
        buckets
    }
}

/// Convenience wrapper over [`ViewEngine`] for one-shot recomputation.
pub fn build_view(customers: &[Customer], state: &ViewState) -> CustomerGroups {
    ViewEngine::new(state.clone()).build(customers)
}

/// Case-insensitive comparison with a raw tiebreak, standing in for the
/// locale-aware comparison the dashboard used (see DESIGN.md).
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sentinel bucket sorts last; every other label is split on its first space
/// and compared year token first, then quarter token, both lexically. This is
/// correct for the "Q<1-4> FY<2-digit year>" labels actually in use and is
/// deliberately not calendar-aware.
pub fn compare_quarter_labels(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a == NO_CLOSE_DATE {
        return Ordering::Greater;
    }
    if b == NO_CLOSE_DATE {
        return Ordering::Less;
    }

    let (a_quarter, a_year) = split_quarter_label(a);
    let (b_quarter, b_year) = split_quarter_label(b);
    a_year.cmp(b_year).then_with(|| a_quarter.cmp(b_quarter))
}

fn split_quarter_label(label: &str) -> (&str, &str) {
    match label.split_once(' ') {
        Some((quarter, year)) => (quarter, year),
        // A label with no year token sorts ahead of any "FY.." label.
        None => (label, ""),
    }
}

fn sort_quarter_buckets(
    buckets: IndexMap<String, Vec<Customer>>,
) -> IndexMap<String, Vec<Customer>> {
    let mut entries: Vec<(String, Vec<Customer>)> = buckets.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_quarter_labels(a, b));
    entries.into_iter().collect()
}
