//! Aggregate KPIs computed from the analytical views.
//!
//! Every KPI is a single-pass aggregation producing one scalar or one row
//! per group. Ratio KPIs share the safe-division convention from
//! `analytics_core`: a zero denominator yields `None`, serialized as JSON
//! null for the dashboard, and excluded from any further averaging.

pub mod financial;
pub mod grouped;
pub mod scores;
pub mod signals;
pub mod stats;
pub mod timeseries;

pub use financial::{financial_kpis, FinancialKpis};
pub use grouped::{grouped_kpis, Dimension, GroupedKpiRow};
pub use scores::{brand_leadership_scores, business_scalability_score, BrandLeadershipRow};
pub use signals::{
    conversion_diagnostic, executive_signals, growth_outlook, revenue_signal, ExecutiveSignals,
};
pub use stats::{mean, population_stddev, revenue_volatility, Grain};
pub use timeseries::{
    campaign_cumulative_curve, influencer_cumulative_curve, monthly_revenue, moving_average,
    period_growth, year_over_year_growth, CurvePoint, DateRange, GrowthPoint, PeriodValue,
};
