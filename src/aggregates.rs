//! Cross aggregates for the quarter -> partner drill-down views. All of
//! these take the customers of one display bucket and recompute from their
//! opportunity lists, so they work on any subset the grouping engine emits.

use crate::metrics::deal_size;
use crate::schema::{Customer, Opportunity};
use std::collections::BTreeSet;

/// Combined annualized value of every deal among `customers` closing in
/// `quarter`. The quarter-bucket header figure.
pub fn quarter_arr(customers: &[Customer], quarter: &str) -> u64 {
    customers
        .iter()
        .flat_map(|customer| customer.opportunities.iter())
        .filter(|opp| opp.close_date == quarter)
        .map(|opp| deal_size(opp.seats))
        .sum()
}

/// As [`quarter_arr`], additionally restricted to one partner.
pub fn quarter_partner_arr(customers: &[Customer], quarter: &str, partner: &str) -> u64 {
    customers
        .iter()
        .flat_map(|customer| customer.opportunities.iter())
        .filter(|opp| opp.close_date == quarter && opp.partner == partner)
        .map(|opp| deal_size(opp.seats))
        .sum()
}

/// The matching deals themselves, in customer order then opportunity order.
/// Renders the per-deal line items under a quarter -> partner heading.
pub fn quarter_partner_opportunities(
    customers: &[Customer],
    quarter: &str,
    partner: &str,
) -> Vec<Opportunity> {
    customers
        .iter()
        .flat_map(|customer| customer.opportunities.iter())
        .filter(|opp| opp.close_date == quarter && opp.partner == partner)
        .cloned()
        .collect()
}

/// Distinct partners with a deal closing in `quarter`, sorted alphabetically.
/// Drives the partner breakdown inside a quarter bucket.
pub fn partners_in_quarter(customers: &[Customer], quarter: &str) -> Vec<String> {
    let mut partners = BTreeSet::new();
    for customer in customers {
        for opp in &customer.opportunities {
            if opp.close_date == quarter {
                partners.insert(opp.partner.clone());
            }
        }
    }
    partners.into_iter().collect()
}

/// Combined annualized value of one partner's deals across `customers`,
/// regardless of quarter. The partner-bucket header figure.
pub fn partner_arr(customers: &[Customer], partner: &str) -> u64 {
    customers
        .iter()
        .flat_map(|customer| customer.opportunities.iter())
        .filter(|opp| opp.partner == partner)
        .map(|opp| deal_size(opp.seats))
        .sum()
}
