//! Diagnostic signal ladders.
//!
//! Each signal is an explicitly ordered list of (predicate, label) rules
//! evaluated top to bottom with a mandatory default: the first matching
//! rule wins, and later rules are never consulted even when they would
//! also match. An undefined (None) input fails every threshold predicate
//! and falls through to the default label.

use analytics_core::{safe_div, safe_pct, Dataset};
use serde::Serialize;
use views::{campaign_effectiveness, growth_strategy};

use crate::financial::financial_kpis;
use crate::stats::{revenue_volatility, Grain};

/// An ordered threshold ladder with a mandatory default.
struct Ladder<I: 'static> {
    rules: &'static [(fn(&I) -> bool, &'static str)],
    default_label: &'static str,
}

impl<I> Ladder<I> {
    fn evaluate(&self, input: &I) -> &'static str {
        for (predicate, label) in self.rules {
            if predicate(input) {
                return label;
            }
        }
        self.default_label
    }
}

fn at_least(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v >= threshold)
}

fn above(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

fn below(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v < threshold)
}

/// Inputs to the executive revenue signal.
#[derive(Debug, Clone, Copy)]
pub struct RevenueSignalInput {
    /// total revenue / total investment.
    pub efficiency_ratio: Option<f64>,
    /// Row-grain revenue volatility score.
    pub volatility: Option<f64>,
}

/// Executive revenue signal, first match wins.
pub fn revenue_signal(input: &RevenueSignalInput) -> &'static str {
    const LADDER: Ladder<RevenueSignalInput> = Ladder {
        rules: &[
            (
                |i| at_least(i.efficiency_ratio, 1.3) && below(i.volatility, 0.5),
                "STRONG & STABLE",
            ),
            (|i| at_least(i.efficiency_ratio, 1.0), "PROFITABLE BUT VOLATILE"),
        ],
        default_label: "HIGH RISK",
    };
    LADDER.evaluate(input)
}

/// Inputs to the conversion/revenue diagnostic.
#[derive(Debug, Clone, Copy)]
pub struct ConversionDiagnosticInput {
    pub concentration_pct: Option<f64>,
    pub cost_per_conversion: Option<f64>,
    pub roi_ratio: Option<f64>,
    /// Percent, 0-100.
    pub conversion_rate_pct: Option<f64>,
}

pub fn conversion_diagnostic(input: &ConversionDiagnosticInput) -> &'static str {
    const LADDER: Ladder<ConversionDiagnosticInput> = Ladder {
        rules: &[
            (
                |i| above(i.concentration_pct, 40.0),
                "REVENUE HIGHLY CONCENTRATED",
            ),
            (
                |i| above(i.cost_per_conversion, 500.0),
                "COST PER CONVERSION CRITICAL",
            ),
            (
                |i| at_least(i.roi_ratio, 1.3) && above(i.conversion_rate_pct, 5.0),
                "HIGHLY OPTIMIZED",
            ),
        ],
        default_label: "STABLE WITH OPTIMIZATION POTENTIAL",
    };
    LADDER.evaluate(input)
}

/// Inputs to the growth outlook signal. Note the conversion rate here is a
/// fraction, not a percent, matching the growth strategy view.
#[derive(Debug, Clone, Copy)]
pub struct GrowthOutlookInput {
    /// Proxy revenue / budget.
    pub revenue_budget_ratio: Option<f64>,
    /// Fraction, 0-1.
    pub conversion_rate: Option<f64>,
}

pub fn growth_outlook(input: &GrowthOutlookInput) -> &'static str {
    const LADDER: Ladder<GrowthOutlookInput> = Ladder {
        rules: &[
            (
                |i| above(i.revenue_budget_ratio, 3.0) && above(i.conversion_rate, 0.15),
                "HIGHLY SCALABLE",
            ),
            (|i| below(i.conversion_rate, 0.08), "FUNNEL LEAKAGE RISK"),
        ],
        default_label: "STABLE GROWTH",
    };
    LADDER.evaluate(input)
}

/// The three executive signals evaluated against a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveSignals {
    pub revenue_signal: &'static str,
    pub conversion_diagnostic: &'static str,
    pub growth_outlook: &'static str,
}

/// Compute every signal's aggregate inputs from the views and run the
/// ladders.
pub fn executive_signals(dataset: &Dataset) -> ExecutiveSignals {
    let effectiveness = campaign_effectiveness(dataset);
    let kpis = financial_kpis(&effectiveness.rows);
    let volatility = revenue_volatility(&effectiveness.rows, Grain::Row);

    let total_clicks: u64 = effectiveness.rows.iter().map(|r| r.clicks).sum();
    let conversion_rate_pct = safe_pct(kpis.total_conversions as f64, total_clicks as f64);

    let growth = growth_strategy(dataset);
    let proxy_revenue: f64 = growth.rows.iter().map(|r| r.revenue_proxy).sum();
    let growth_conversions: u64 = growth.rows.iter().map(|r| r.conversions).sum();
    let growth_clicks: u64 = growth.rows.iter().map(|r| r.clicks).sum();

    ExecutiveSignals {
        revenue_signal: revenue_signal(&RevenueSignalInput {
            efficiency_ratio: kpis.revenue_efficiency_index,
            volatility,
        }),
        conversion_diagnostic: conversion_diagnostic(&ConversionDiagnosticInput {
            concentration_pct: kpis.revenue_concentration_pct,
            cost_per_conversion: kpis.cost_per_conversion,
            roi_ratio: kpis.revenue_efficiency_index,
            conversion_rate_pct,
        }),
        growth_outlook: growth_outlook(&GrowthOutlookInput {
            revenue_budget_ratio: safe_div(proxy_revenue, kpis.total_investment),
            conversion_rate: safe_div(growth_conversions as f64, growth_clicks as f64),
        }),
    }
}
