//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use syndicate_analysis::{AnalysisReport, Insights, InvestorProfile, Ranked};
use syndicate_domain::{Item, Itemset, Rule};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis report, showing at most `limit` itemsets and rules.
    pub fn format_report(&self, report: &AnalysisReport, limit: usize) -> Result<String> {
        let itemsets = report.top_itemsets(limit);
        let rules = report.top_rules(limit);

        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "kind": report.kind.as_str(),
                    "transactions": report.transaction_count,
                    "weighted_fallback": report.weighted_fallback,
                    "itemset_count": report.itemsets.len(),
                    "rule_count": report.rules.len(),
                    "itemsets": itemsets.iter().map(itemset_json).collect::<Vec<_>>(),
                    "rules": rules.iter().map(rule_json).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = Vec::new();
                out.push(self.info(&format!(
                    "{} analysis over {} transactions: {} itemsets, {} rules",
                    report.kind,
                    report.transaction_count,
                    report.itemsets.len(),
                    report.rules.len()
                )));
                if report.weighted_fallback {
                    out.push(self.warning(
                        "No funding amounts in the data; mined without weights",
                    ));
                }
                out.push(self.format_itemsets_table(itemsets));
                out.push(self.format_rules_table(rules));
                Ok(out.join("\n"))
            }
            OutputFormat::Quiet => {
                // Rules when there are any, otherwise the itemsets themselves
                let lines: Vec<String> = if rules.is_empty() {
                    itemsets.iter().map(|set| set.labels().join(", ")).collect()
                } else {
                    rules
                        .iter()
                        .map(|r| format!("{} => {}", join(&r.antecedent), join(&r.consequent)))
                        .collect()
                };
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format dataset insights.
    pub fn format_insights(&self, insights: &Insights) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(insights)?),
            OutputFormat::Table => {
                let stats = &insights.stats;
                let mut out = vec![self.info(&format!(
                    "{} records, {} startups, {} investors",
                    stats.records, stats.startups, stats.investors
                ))];
                if let Some(total) = insights.total_amount_usd {
                    out.push(format!(
                        "Reported funding: ${:.0} across {} records",
                        total, stats.records_with_amount
                    ));
                }
                out.push(self.format_ranked_table("Investor", "Deals", &insights.top_investors));
                out.push(self.format_ranked_table("Domain", "Deals", &insights.top_domains));
                out.push(self.format_ranked_table("Startup", "Investors", &insights.top_startups));
                Ok(out.join("\n"))
            }
            OutputFormat::Quiet => Ok(names(&insights.top_investors)),
        }
    }

    /// Format an investor profile.
    pub fn format_profile(&self, profile: &InvestorProfile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
            OutputFormat::Table => {
                let out = [
                    self.success(&format!(
                        "{}: {} deals in {} startups",
                        profile.investor,
                        profile.deals,
                        profile.startups.len()
                    )),
                    format!("Portfolio: {}", profile.startups.join(", ")),
                    self.format_ranked_table("Domain", "Deals", &profile.top_domains),
                    self.format_ranked_table("Co-investor", "Shared deals", &profile.top_co_investors),
                ];
                Ok(out.join("\n"))
            }
            OutputFormat::Quiet => Ok(profile.startups.join("\n")),
        }
    }

    fn format_itemsets_table(&self, itemsets: &[Itemset]) -> String {
        if itemsets.is_empty() {
            return self.colorize("No frequent itemsets found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Items", "Size", "Support"]);
        for set in itemsets {
            builder.push_record([
                set.labels().join(", "),
                set.len().to_string(),
                format!("{:.4}", set.support()),
            ]);
        }
        render(builder)
    }

    fn format_rules_table(&self, rules: &[Rule]) -> String {
        if rules.is_empty() {
            return self.colorize("No rules found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Antecedent",
            "Consequent",
            "Support",
            "Confidence",
            "Lift",
            "Conviction",
        ]);
        for rule in rules {
            let conviction = if rule.conviction.is_infinite() {
                "∞".to_string()
            } else {
                format!("{:.3}", rule.conviction)
            };
            builder.push_record([
                join(&rule.antecedent),
                join(&rule.consequent),
                format!("{:.4}", rule.support),
                format!("{:.3}", rule.confidence),
                format!("{:.3}", rule.lift),
                conviction,
            ]);
        }
        render(builder)
    }

    fn format_ranked_table(&self, name: &str, count: &str, ranked: &[Ranked]) -> String {
        if ranked.is_empty() {
            return self.colorize(&format!("No {} data.", name.to_lowercase()), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([name, count]);
        for entry in ranked {
            builder.push_record([entry.name.clone(), entry.count.to_string()]);
        }
        render(builder)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join(items: &[Item]) -> String {
    items.iter().map(Item::as_str).collect::<Vec<_>>().join(", ")
}

fn names(ranked: &[Ranked]) -> String {
    ranked
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn itemset_json(set: &Itemset) -> serde_json::Value {
    serde_json::json!({
        "items": set.labels(),
        "support": set.support(),
    })
}

/// Infinite conviction has no JSON number and is written as null.
fn rule_json(rule: &Rule) -> serde_json::Value {
    serde_json::json!({
        "antecedent": rule.antecedent.iter().map(Item::as_str).collect::<Vec<_>>(),
        "consequent": rule.consequent.iter().map(Item::as_str).collect::<Vec<_>>(),
        "support": rule.support,
        "confidence": rule.confidence,
        "lift": rule.lift,
        "antecedent_support": rule.antecedent_support,
        "consequent_support": rule.consequent_support,
        "leverage": rule.leverage,
        "conviction": rule.conviction.is_finite().then_some(rule.conviction),
    })
}
