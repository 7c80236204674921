use serde::{Deserialize, Serialize};

use crate::error::{DecisionError, InputField, Result};
use crate::money::{parse_amount, parse_probability};

/// The five raw text fields a record is entered with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub decision: String,
    pub condition: String,
    pub probability: String,
    pub cost: String,
    pub revenue: String,
}

impl RecordInput {
    pub fn new(
        decision: impl Into<String>,
        condition: impl Into<String>,
        probability: impl Into<String>,
        cost: impl Into<String>,
        revenue: impl Into<String>,
    ) -> Self {
        Self {
            decision: decision.into(),
            condition: condition.into(),
            probability: probability.into(),
            cost: cost.into(),
            revenue: revenue.into(),
        }
    }

    /// Parse every numeric field. Nothing is produced unless all three parse.
    pub fn parse(&self) -> Result<Record> {
        let probability = parse_probability(&self.probability)?;
        let cost = parse_amount(&self.cost, InputField::Cost)?;
        let revenue = parse_amount(&self.revenue, InputField::Revenue)?;

        Ok(Record::new(
            self.decision.clone(),
            self.condition.clone(),
            probability,
            cost,
            revenue,
        ))
    }
}

/// One observed (decision, condition) pair.
///
/// `payoff` is derived once in [`Record::new`] and has no setter, so it always
/// equals `revenue - cost`. Deserialization goes through [`RecordFields`] for
/// the same reason, and rejects non-finite numbers like text input does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields", into = "RecordFields")]
pub struct Record {
    decision: String,
    condition: String,
    probability: f64,
    cost: f64,
    revenue: f64,
    payoff: f64,
}

impl Record {
    pub fn new(
        decision: impl Into<String>,
        condition: impl Into<String>,
        probability: f64,
        cost: f64,
        revenue: f64,
    ) -> Self {
        Self {
            decision: decision.into(),
            condition: condition.into(),
            probability,
            cost,
            revenue,
            payoff: revenue - cost,
        }
    }

    pub fn decision(&self) -> &str {
        &self.decision
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub fn payoff(&self) -> f64 {
        self.payoff
    }

    /// Probability-weighted payoff, the record's contribution to its decision's EV
    pub fn weighted_payoff(&self) -> f64 {
        self.probability * self.payoff
    }
}

/// Serialized shape of a record. Payoff is left out and recomputed on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordFields {
    decision: String,
    #[serde(default)]
    condition: String,
    probability: f64,
    cost: f64,
    revenue: f64,
}

impl TryFrom<RecordFields> for Record {
    type Error = DecisionError;

    fn try_from(f: RecordFields) -> Result<Self> {
        for (field, value) in [
            (InputField::Probability, f.probability),
            (InputField::Cost, f.cost),
            (InputField::Revenue, f.revenue),
        ] {
            if !value.is_finite() {
                return Err(DecisionError::invalid(field, &value.to_string()));
            }
        }
        Ok(Record::new(f.decision, f.condition, f.probability, f.cost, f.revenue))
    }
}

impl From<Record> for RecordFields {
    fn from(r: Record) -> Self {
        Self {
            decision: r.decision,
            condition: r.condition,
            probability: r.probability,
            cost: r.cost,
            revenue: r.revenue,
        }
    }
}
