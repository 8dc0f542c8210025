use crate::schema::Opportunity;

/// Price of one seat per month, in whole dollars.
pub const SEAT_PRICE_MONTHLY: u64 = 30;

pub const MONTHS_PER_YEAR: u64 = 12;

/// Annualized price of a single seat.
pub const SEAT_PRICE_ANNUAL: u64 = SEAT_PRICE_MONTHLY * MONTHS_PER_YEAR;

/// ARR currently booked for an account: every adopted seat at full price.
pub fn annual_revenue(adopted_seats: u32) -> u64 {
    adopted_seats as u64 * SEAT_PRICE_ANNUAL
}

/// Annualized value of a single deal.
pub fn deal_size(seats: u32) -> u64 {
    seats as u64 * SEAT_PRICE_ANNUAL
}

/// Combined annualized value of a set of deals. Callers pass either a
/// customer's full pipeline or a partner-filtered subset.
pub fn opportunity_revenue(opportunities: &[Opportunity]) -> u64 {
    opportunities.iter().map(|opp| deal_size(opp.seats)).sum()
}

/// ARR still on the table after adoption and the open pipeline are taken out
/// of the seat target. Negative when the pipeline overshoots the target;
/// callers display the negative figure as-is.
pub fn potential_revenue(total_seats: u32, adopted_seats: u32, opportunities: &[Opportunity]) -> i64 {
    let pipeline_seats: i64 = opportunities.iter().map(|opp| opp.seats as i64).sum();
    (total_seats as i64 - adopted_seats as i64 - pipeline_seats) * SEAT_PRICE_ANNUAL as i64
}

/// Percent of the seat target already adopted. `None` when the target is
/// zero; see DESIGN.md for the division-by-zero policy.
pub fn adoption_progress(adopted_seats: u32, total_seats: u32) -> Option<f64> {
    if total_seats == 0 {
        return None;
    }
    Some(adopted_seats as f64 / total_seats as f64 * 100.0)
}

/// Width of one opportunity's segment on the progress bar, as a percent of
/// the seat target. Same zero-target policy as [`adoption_progress`].
pub fn seat_share(seats: u32, total_seats: u32) -> Option<f64> {
    if total_seats == 0 {
        return None;
    }
    Some(seats as f64 / total_seats as f64 * 100.0)
}
