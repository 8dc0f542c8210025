use crate::error::{PipelineError, Result};
use crate::schema::{Confidence, Customer, Opportunity};
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Maximum number of open opportunities a single customer may hold. A fifth
/// add is silently rejected, matching the dashboard's behavior.
pub const MAX_OPPORTUNITIES: usize = 4;

/// The in-memory customer base: an ordered sequence of customer records,
/// mutated wholesale by replace-by-id. Serializes as a plain JSON array.
///
/// There is no persistence behind this; a session starts from
/// [`crate::dataset::sample_book`] (or an empty book) and edits live only as
/// long as the process does.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct CustomerBook {
    customers: Vec<Customer>,
}

impl CustomerBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Appends a blank template record and returns it so the caller can open
    /// it for inline editing.
    pub fn add_customer(&mut self) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: "New Customer".to_string(),
            total_seats: 0,
            adopted_seats: 0,
            opportunities: Vec::new(),
            stakeholders: Vec::new(),
        };
        self.customers.push(customer.clone());
        customer
    }

    /// Replaces the record with the same id. Unknown ids are a silent no-op.
    pub fn update_customer(&mut self, updated: Customer) {
        if let Some(existing) = self.customers.iter_mut().find(|c| c.id == updated.id) {
            *existing = updated;
        }
    }

    /// Removes the record with the given id, cascading its opportunities and
    /// stakeholders with it.
    pub fn delete_customer(&mut self, id: &str) {
        self.customers.retain(|c| c.id != id);
    }

    /// Returns a blank opportunity template for the given customer, to be
    /// inserted later via [`Self::upsert_opportunity`] once edited. `None`
    /// when the customer is unknown or already at [`MAX_OPPORTUNITIES`]; the
    /// rejection is silent apart from a debug log line.
    pub fn add_opportunity(&self, customer_id: &str) -> Option<Opportunity> {
        let customer = self.get(customer_id)?;
        if customer.opportunities.len() >= MAX_OPPORTUNITIES {
            debug!(
                "rejecting new opportunity for {}: cap of {} reached",
                customer.name, MAX_OPPORTUNITIES
            );
            return None;
        }

        let mut fragment = Uuid::new_v4().simple().to_string();
        fragment.truncate(4);
        Some(Opportunity {
            id: format!("OPP-{fragment}"),
            seats: 0,
            description: "New Opportunity".to_string(),
            notes: String::new(),
            close_date: String::new(),
            confidence: Confidence::Medium,
            partner: "Microsoft".to_string(),
        })
    }

    /// Replaces the opportunity with the same id within the owning customer,
    /// or appends it when no id matches (the save path for both edits and
    /// newly created templates). Unknown customers are a silent no-op.
    pub fn upsert_opportunity(&mut self, customer_id: &str, opportunity: Opportunity) {
        if let Some(customer) = self.customers.iter_mut().find(|c| c.id == customer_id) {
            match customer
                .opportunities
                .iter_mut()
                .find(|o| o.id == opportunity.id)
            {
                Some(existing) => *existing = opportunity,
                None => customer.opportunities.push(opportunity),
            }
        }
    }

    pub fn delete_opportunity(&mut self, customer_id: &str, opportunity_id: &str) {
        if let Some(customer) = self.customers.iter_mut().find(|c| c.id == customer_id) {
            customer.opportunities.retain(|o| o.id != opportunity_id);
        }
    }

    /// Distinct partner names across every opportunity, sorted. Drives the
    /// partner filter dropdown.
    pub fn unique_partners(&self) -> Vec<String> {
        let mut partners = BTreeSet::new();
        for customer in &self.customers {
            for opportunity in &customer.opportunities {
                partners.insert(opportunity.partner.clone());
            }
        }
        partners.into_iter().collect()
    }

    /// Structural validation. Customer ids must be unique; everything else is
    /// soft (see [`Self::integrity_warnings`]).
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for customer in &self.customers {
            if !seen.insert(customer.id.as_str()) {
                return Err(PipelineError::DuplicateCustomer(customer.id.clone()));
            }
        }
        Ok(())
    }

    /// Human-readable warnings for records that violate the soft seat
    /// invariants. These never fail an operation; the dashboard simply shows
    /// the resulting negative figures.
    pub fn integrity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for customer in &self.customers {
            if customer.adopted_seats > customer.total_seats {
                warnings.push(format!(
                    "{}: adopted seats ({}) exceed the seat target ({})",
                    customer.name, customer.adopted_seats, customer.total_seats
                ));
            }

            let pipeline_seats: i64 = customer
                .opportunities
                .iter()
                .map(|o| o.seats as i64)
                .sum();
            let unadopted = customer.total_seats as i64 - customer.adopted_seats as i64;
            if pipeline_seats > unadopted {
                warnings.push(format!(
                    "{}: pipeline seats ({}) exceed the unadopted remainder ({}); potential revenue is negative",
                    customer.name, pipeline_seats, unadopted
                ));
            }
        }
        warnings
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a book from its JSON array form.
    pub fn from_json(json: &str) -> Result<Self> {
        let book: Self = serde_json::from_str(json)?;
        book.validate()?;
        Ok(book)
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(CustomerBook)
    }

    pub fn schema_as_json() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::generate_json_schema())?)
    }
}
