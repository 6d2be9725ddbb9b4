//! Time-series KPIs: period growth, moving averages, and cumulative
//! revenue/engagement curves.
//!
//! Day expansion is done with a closed-form, finite date iterator rather
//! than open-ended recursion, and every span is clamped to a hard cap so
//! a long-lived campaign cannot produce unbounded work.

use std::collections::BTreeMap;

use analytics_core::{safe_pct, Dataset, Error, Result};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::warn;
use views::ExecutiveAnalyticsRow;

/// Hard cap on curve expansion, in days (five years).
pub const MAX_CURVE_DAYS: i64 = 1827;

/// A lazy, finite, inclusive calendar-day iterator.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    /// Iterate from `start` to `end` inclusive. Spans longer than
    /// `MAX_CURVE_DAYS` are truncated at the cap.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            return Self { next: None, end };
        }
        let span = (end - start).num_days() + 1;
        let end = if span > MAX_CURVE_DAYS {
            warn!(span, cap = MAX_CURVE_DAYS, "Date range truncated at cap");
            start + Days::new((MAX_CURVE_DAYS - 1) as u64)
        } else {
            end
        };
        Self {
            next: Some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }
}

/// One period of an ordered series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodValue {
    pub period: String,
    pub value: f64,
}

/// One period with its growth against the immediately preceding period.
/// The first period, or any period following a missing one at the head of
/// the series, has undefined growth (never zero).
#[derive(Debug, Clone, Serialize)]
pub struct GrowthPoint {
    pub period: String,
    pub value: f64,
    pub growth_pct: Option<f64>,
}

/// Revenue per calendar month, chronologically ordered, keyed "YYYY-MM".
pub fn monthly_revenue(rows: &[ExecutiveAnalyticsRow]) -> Vec<PeriodValue> {
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        let key = format!("{:04}-{:02}", row.date.year(), row.date.month());
        *months.entry(key).or_default() += row.revenue;
    }
    months
        .into_iter()
        .map(|(period, value)| PeriodValue { period, value })
        .collect()
}

fn yearly_revenue(rows: &[ExecutiveAnalyticsRow]) -> Vec<PeriodValue> {
    let mut years: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        *years
            .entry(format!("{:04}", row.date.year()))
            .or_default() += row.revenue;
    }
    years
        .into_iter()
        .map(|(period, value)| PeriodValue { period, value })
        .collect()
}

/// Growth of each period against the immediately preceding one:
/// (current − previous) / previous × 100. Applied to a monthly series this
/// is month-over-month; to a yearly series, year-over-year. Periods are
/// taken as given; gaps are not filled.
pub fn period_growth(series: &[PeriodValue]) -> Vec<GrowthPoint> {
    series
        .iter()
        .enumerate()
        .map(|(i, point)| GrowthPoint {
            period: point.period.clone(),
            value: point.value,
            growth_pct: if i == 0 {
                None
            } else {
                safe_pct(point.value - series[i - 1].value, series[i - 1].value)
            },
        })
        .collect()
}

/// Year-over-year revenue growth.
pub fn year_over_year_growth(rows: &[ExecutiveAnalyticsRow]) -> Vec<GrowthPoint> {
    period_growth(&yearly_revenue(rows))
}

/// Trailing moving average over `window` periods (current plus the
/// preceding ones). At the head of the series the window is partial and
/// averages over however many periods exist.
pub fn moving_average(series: &[PeriodValue], window: usize) -> Vec<PeriodValue> {
    let window = window.max(1);
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let from = i.saturating_sub(window - 1);
            let slice = &series[from..=i];
            PeriodValue {
                period: point.period.clone(),
                value: slice.iter().map(|p| p.value).sum::<f64>() / slice.len() as f64,
            }
        })
        .collect()
}

/// One calendar day of a cumulative curve. Days without facts contribute
/// zero and keep the running totals flat.
#[derive(Debug, Clone, Serialize)]
pub struct CurvePoint {
    pub date: NaiveDate,
    pub daily_revenue: f64,
    pub cumulative_revenue: f64,
    pub daily_engagement: u64,
    pub cumulative_engagement: u64,
}

fn build_curve(
    span_start: NaiveDate,
    span_end: NaiveDate,
    daily: &BTreeMap<NaiveDate, (f64, u64)>,
) -> Vec<CurvePoint> {
    let mut cumulative_revenue = 0.0;
    let mut cumulative_engagement = 0u64;
    DateRange::new(span_start, span_end)
        .map(|date| {
            let (daily_revenue, daily_engagement) =
                daily.get(&date).copied().unwrap_or((0.0, 0));
            cumulative_revenue += daily_revenue;
            cumulative_engagement += daily_engagement;
            CurvePoint {
                date,
                daily_revenue,
                cumulative_revenue,
                daily_engagement,
                cumulative_engagement,
            }
        })
        .collect()
}

/// Cumulative revenue/engagement curve for one campaign, one point per
/// calendar day of its active span (widened to cover any facts recorded
/// outside the declared dates).
pub fn campaign_cumulative_curve(dataset: &Dataset, campaign_id: u32) -> Result<Vec<CurvePoint>> {
    let campaign = dataset
        .campaign(campaign_id)
        .ok_or(Error::UnknownCampaign(campaign_id))?;

    let mut daily: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();
    for record in dataset.performance_for(campaign_id) {
        let entry = daily.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.revenue;
        entry.1 += record.engagement();
    }

    let mut start = campaign.start_date;
    let mut end = campaign.end_date.max(campaign.start_date);
    if let (Some((&first, _)), Some((&last, _))) =
        (daily.first_key_value(), daily.last_key_value())
    {
        start = start.min(first);
        end = end.max(last);
    }

    Ok(build_curve(start, end, &daily))
}

/// Cumulative curve for one influencer across all their campaigns,
/// spanning from their first to their last recorded day.
pub fn influencer_cumulative_curve(
    dataset: &Dataset,
    influencer_id: u32,
) -> Result<Vec<CurvePoint>> {
    if dataset.influencer(influencer_id).is_none() {
        return Err(Error::UnknownInfluencer(influencer_id));
    }

    let mut daily: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();
    for record in &dataset.performance {
        let belongs = dataset
            .campaign(record.campaign_id)
            .is_some_and(|c| c.influencer_id == influencer_id);
        if belongs {
            let entry = daily.entry(record.date).or_insert((0.0, 0));
            entry.0 += record.revenue;
            entry.1 += record.engagement();
        }
    }

    let (Some((&start, _)), Some((&end, _))) =
        (daily.first_key_value(), daily.last_key_value())
    else {
        return Ok(Vec::new());
    };

    Ok(build_curve(start, end, &daily))
}
