//! Hand-drawn SVG charts of the home view.
//!
//! Geometry lives in plain functions so it can be checked without a DOM.

use contracts::dashboards::d001_ecommerce::{
    LocationRevenue, ProjectionPoint, RevenuePoint, RevenueTotals, SalesChannel,
};
use contracts::shared::format::{format_currency, format_percent};
use leptos::prelude::*;
use std::f64::consts::PI;

const COLUMN_START: f64 = 60.0;
const COLUMN_STEP: f64 = 60.0;

const BAR_WIDTH: f64 = 20.0;
const BAR_BASELINE: f64 = 200.0;
const BAR_MAX_HEIGHT: f64 = 160.0;
/// Value (millions) drawn at full bar height
const BAR_SCALE: f64 = 30.0;
const ACTUAL_BAR_OFFSET: f64 = 25.0;
const MONTH_LABEL_OFFSET: f64 = 30.0;

const LINE_BASELINE: f64 = 160.0;
const LINE_MAX_HEIGHT: f64 = 140.0;
const LINE_SCALE: f64 = 35.0;

const DONUT_RADIUS: f64 = 80.0;

const Y_AXIS_LABELS: [(&str, u32); 5] = [("30M", 20), ("20M", 60), ("10M", 100), ("5M", 140), ("0", 180)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

fn column_x(index: usize) -> f64 {
    COLUMN_START + index as f64 * COLUMN_STEP
}

fn bar(index: usize, value: f64, offset: f64) -> BarRect {
    let height = value / BAR_SCALE * BAR_MAX_HEIGHT;
    BarRect {
        x: column_x(index) + offset,
        y: BAR_BASELINE - height,
        height,
    }
}

pub fn projection_bar(index: usize, value: f64) -> BarRect {
    bar(index, value, 0.0)
}

pub fn actual_bar(index: usize, value: f64) -> BarRect {
    bar(index, value, ACTUAL_BAR_OFFSET)
}

pub fn bar_label_x(index: usize) -> f64 {
    column_x(index) + MONTH_LABEL_OFFSET
}

/// `points` attribute of a revenue polyline.
pub fn line_points(values: impl IntoIterator<Item = f64>) -> String {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "{},{}",
                column_x(i),
                LINE_BASELINE - v / LINE_SCALE * LINE_MAX_HEIGHT
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `stroke-dasharray` drawing `share` (0..=1) of the donut ring.
pub fn donut_dash_array(share: f64) -> String {
    let circumference = 2.0 * PI * DONUT_RADIUS;
    format!("{} {}", circumference * share, circumference)
}

#[component]
pub fn ProjectionsChart(points: Vec<ProjectionPoint>) -> impl IntoView {
    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let projected = projection_bar(i, point.projections);
            let actual = actual_bar(i, point.actuals);
            view! {
                <rect x=projected.x y=projected.y width=BAR_WIDTH height=projected.height fill="#e2e8f0" opacity="0.6" rx="2" />
                <rect x=actual.x y=actual.y width=BAR_WIDTH height=actual.height fill="#3b82f6" rx="2" />
                <text x=bar_label_x(i) y="195" font-size="12" fill="var(--text-tertiary)" text-anchor="middle">
                    {point.month.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Projections vs Actuals"</h3>
            </div>
            <svg width="100%" height="200" viewBox="0 0 400 200" class="chart-card__svg">
                {Y_AXIS_LABELS
                    .iter()
                    .map(|(label, y)| view! {
                        <text x="10" y=*y font-size="12" fill="var(--text-tertiary)">{*label}</text>
                    })
                    .collect_view()}
                {bars}
            </svg>
        </div>
    }
}

#[component]
pub fn RevenueChart(points: Vec<RevenuePoint>, totals: RevenueTotals) -> impl IntoView {
    let current = line_points(points.iter().map(|p| p.current));
    let previous = line_points(points.iter().map(|p| p.previous));

    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Revenue"</h3>
                <div class="chart-card__legend">
                    <span class="chart-card__legend-item">
                        "Current Week "
                        <strong>{format_currency(totals.current_week)}</strong>
                    </span>
                    <span class="chart-card__legend-item">
                        "Previous Week "
                        <strong>{format_currency(totals.previous_week)}</strong>
                    </span>
                </div>
            </div>
            <svg width="100%" height="160" viewBox="0 0 400 160" class="chart-card__svg">
                <polyline points=current fill="none" stroke="var(--text-primary)" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
                <polyline points=previous fill="none" stroke="#3b82f6" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" stroke-dasharray="5,5" />
                {points
                    .iter()
                    .enumerate()
                    .map(|(i, point)| view! {
                        <text x=column_x(i) y="155" font-size="12" fill="var(--text-tertiary)" text-anchor="middle">
                            {point.month.clone()}
                        </text>
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

#[component]
pub fn LocationRevenueList(locations: Vec<LocationRevenue>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Revenue by Location"</h3>
            </div>
            <div class="location-map">{crate::shared::icons::icon("globe")}</div>
            <div class="location-list">
                {locations
                    .into_iter()
                    .map(|location| {
                        let label = location.revenue_label();
                        view! {
                            <div class="location-list__item">
                                <span class="dot" style:background-color=location.color></span>
                                <span class="location-list__city">{location.city}</span>
                                <span class="location-list__value">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TotalSalesDonut(
    channels: Vec<SalesChannel>,
    /// Share (0..=1) drawn as the highlighted arc
    share: f64,
) -> impl IntoView {
    let centre_label = channels
        .first()
        .map(|channel| format_percent(channel.percentage))
        .unwrap_or_default();

    view! {
        <div class="chart-card chart-card--donut">
            <div class="chart-card__header">
                <h3 class="chart-card__title">"Total Sales"</h3>
            </div>
            <svg width="200" height="200" viewBox="0 0 200 200">
                <circle cx="100" cy="100" r=DONUT_RADIUS fill="none" stroke="#e2e8f0" stroke-width="16" />
                <circle
                    cx="100"
                    cy="100"
                    r=DONUT_RADIUS
                    fill="none"
                    stroke="#3b82f6"
                    stroke-width="16"
                    stroke-dasharray=donut_dash_array(share)
                    stroke-dashoffset="0"
                    transform="rotate(-90 100 100)"
                />
                <text x="100" y="105" text-anchor="middle" font-size="24" font-weight="600" fill="var(--text-primary)">
                    {centre_label}
                </text>
            </svg>
            <div class="donut-legend">
                {channels
                    .into_iter()
                    .map(|channel| view! {
                        <div class="donut-legend__item">
                            <span class="dot" style:background-color=channel.color></span>
                            <span class="donut-legend__label">{channel.channel}</span>
                            <span class="donut-legend__value">{format_currency(channel.amount)}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bar_geometry() {
        let projected = projection_bar(0, 30.0);
        assert_eq!(projected, BarRect { x: 60.0, y: 40.0, height: 160.0 });

        let actual = actual_bar(2, 15.0);
        assert!(close(actual.x, 205.0));
        assert!(close(actual.height, 80.0));
        assert!(close(actual.y, 120.0));

        assert!(close(bar_label_x(1), 150.0));
    }

    #[test]
    fn test_line_points() {
        assert_eq!(line_points([15.0, 35.0, 0.0]), "60,100 120,20 180,160");
        assert_eq!(line_points(std::iter::empty()), "");
    }

    #[test]
    fn test_donut_dash_array() {
        let full = 2.0 * PI * 80.0;
        assert_eq!(donut_dash_array(1.0), format!("{} {}", full, full));
        assert_eq!(donut_dash_array(0.0), format!("0 {}", full));
    }
}
