//! Chart-ready series for the visualization collaborator
//!
//! Three views over one record set: amount distribution grouped by due
//! year, a per-record scatter (rate vs maturity, amount as marker
//! size), and a maturity timeline of stacked per-instrument segments.

use crate::instrument::DebtInstrumentRecord;
use serde::Serialize;

/// One unaggregated scatter marker per record, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub due_year: i32,
    /// Maps to the marker color scale
    pub rate_pct: f64,
    /// Maps to the marker size/radius
    pub amount_millions: f64,
    pub name: String,
}

/// One stacked bar segment per record, keyed by the instrument name.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineSegment {
    pub due_year: i32,
    pub name: String,
    pub amount_millions: f64,
    pub rate_pct: f64,
}

/// All chart series for one record set.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    /// Due year -> summed amount in millions, first-encounter order
    pub by_year: Vec<(i32, f64)>,
    pub scatter: Vec<ScatterPoint>,
    /// Sorted ascending by due year; ties keep extraction order
    pub timeline: Vec<TimelineSegment>,
}

/// Build the chart series from a record set.
pub fn render_series(records: &[DebtInstrumentRecord]) -> ChartSeries {
    let mut by_year: Vec<(i32, f64)> = Vec::new();
    for record in records {
        match by_year.iter_mut().find(|(y, _)| *y == record.due_year) {
            Some((_, total)) => *total += record.amount_millions,
            None => by_year.push((record.due_year, record.amount_millions)),
        }
    }

    let scatter = records
        .iter()
        .map(|r| ScatterPoint {
            due_year: r.due_year,
            rate_pct: r.interest_rate_pct,
            amount_millions: r.amount_millions,
            name: r.name.clone(),
        })
        .collect();

    let mut timeline: Vec<TimelineSegment> = records
        .iter()
        .map(|r| TimelineSegment {
            due_year: r.due_year,
            name: r.name.clone(),
            amount_millions: r.amount_millions,
            rate_pct: r.interest_rate_pct,
        })
        .collect();
    timeline.sort_by_key(|segment| segment.due_year);

    ChartSeries {
        by_year,
        scatter,
        timeline,
    }
}
