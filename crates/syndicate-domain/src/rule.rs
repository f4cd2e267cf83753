//! Rule module - directional associations between itemsets

use crate::measure::{tolerance_key, LIFT_TOLERANCE, SUPPORT_TOLERANCE};
use crate::Item;
use std::cmp::Ordering;

/// An association rule `antecedent ⇒ consequent`
///
/// Both sides are non-empty, disjoint, and their union is a frequent
/// itemset. Besides support, confidence and lift, the rule carries the
/// side supports plus leverage and conviction so downstream consumers can
/// rank by any of the usual interestingness measures.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Left-hand side, canonical order
    pub antecedent: Vec<Item>,

    /// Right-hand side, canonical order
    pub consequent: Vec<Item>,

    /// Support of `antecedent ∪ consequent`
    pub support: f64,

    /// `support / antecedent_support`, in [0, 1]
    pub confidence: f64,

    /// `confidence / consequent_support`
    pub lift: f64,

    /// Support of the antecedent alone
    pub antecedent_support: f64,

    /// Support of the consequent alone
    pub consequent_support: f64,

    /// `support - antecedent_support * consequent_support`
    pub leverage: f64,

    /// `(1 - consequent_support) / (1 - confidence)`; infinite when confidence is 1
    pub conviction: f64,
}

impl Rule {
    /// Derive every rule measure from the three supports involved
    ///
    /// The caller guarantees both side supports are strictly positive.
    pub fn from_supports(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        support: f64,
        antecedent_support: f64,
        consequent_support: f64,
    ) -> Self {
        let confidence = support / antecedent_support;
        let lift = confidence / consequent_support;
        let leverage = support - antecedent_support * consequent_support;
        let conviction = if confidence >= 1.0 {
            f64::INFINITY
        } else {
            (1.0 - consequent_support) / (1.0 - confidence)
        };

        Self {
            antecedent,
            consequent,
            support,
            confidence,
            lift,
            antecedent_support,
            consequent_support,
            leverage,
            conviction,
        }
    }

    /// Presentation order: confidence desc, lift desc, then canonical sides
    ///
    /// Confidence and lift are compared with a small tolerance, so rules
    /// whose measures differ only by rounding noise order by their sides.
    pub fn ranking(a: &Rule, b: &Rule) -> Ordering {
        let confidence = |rule: &Rule| tolerance_key(rule.confidence, SUPPORT_TOLERANCE);
        let lift = |rule: &Rule| tolerance_key(rule.lift, LIFT_TOLERANCE);
        confidence(b)
            .total_cmp(&confidence(a))
            .then_with(|| lift(b).total_cmp(&lift(a)))
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    }
}
