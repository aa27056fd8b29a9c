//! JSON rendering of a seat chart.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ExportOptions;
use crate::models::SeatChart;

#[derive(Serialize)]
struct ChartDocument<'a> {
    title: &'a str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    chart: &'a SeatChart,
}

/// Renders the chart as pretty-printed JSON stamped with `generated_at`.
pub fn render_json(
    chart: &SeatChart,
    options: &ExportOptions,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let document = ChartDocument {
        title: &options.title,
        generated_at,
        chart,
    };
    serde_json::to_string_pretty(&document).context("Failed to serialize seat chart")
}
