use serde::{Deserialize, Serialize};

use crate::shared::format::{format_currency, format_integer, format_percent};

/// Headline numbers of the eCommerce dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeStats {
    pub customers: u64,
    pub orders: u64,
    pub revenue: f64,
    pub growth: f64,
}

/// Change of each headline number against the previous period, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatChanges {
    pub customers: f64,
    pub orders: f64,
    pub revenue: f64,
    pub growth: f64,
}

/// One month of the "Projections vs Actuals" bar chart (millions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: String,
    pub projections: f64,
    pub actuals: f64,
}

/// One point of the "Revenue" line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTotals {
    pub current_week: f64,
    pub previous_week: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub amount: f64,
}

/// Revenue of a city, in thousands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub city: String,
    pub revenue: f64,
    pub color: String,
}

impl LocationRevenue {
    pub fn revenue_label(&self) -> String {
        format!("{}K", self.revenue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub channel: String,
    pub amount: f64,
    pub percentage: f64,
    pub color: String,
}

/// Everything the home view displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub stats: HomeStats,
    pub stat_changes: StatChanges,
    pub projections: Vec<ProjectionPoint>,
    pub revenue: Vec<RevenuePoint>,
    pub revenue_totals: RevenueTotals,
    pub top_products: Vec<TopProduct>,
    pub revenue_by_location: Vec<LocationRevenue>,
    pub sales_breakdown: Vec<SalesChannel>,
}

impl HomeData {
    /// Share (0..=1) of the leading sales channel, drawn as the donut arc.
    pub fn leading_channel_share(&self) -> f64 {
        self.sales_breakdown
            .first()
            .map(|c| (c.percentage / 100.0).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Stat cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    pub fn from_value(change: f64) -> Self {
        if change < 0.0 {
            ChangeDirection::Negative
        } else {
            ChangeDirection::Positive
        }
    }
}

/// Display-ready content of one stat card
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardData {
    pub title: &'static str,
    /// Icon name understood by the frontend `icon()` helper
    pub icon: &'static str,
    pub value: String,
    pub change: String,
    pub direction: ChangeDirection,
}

fn format_change(change: f64) -> String {
    format!("{:+}%", change)
}

fn card(title: &'static str, icon: &'static str, value: String, change: f64) -> StatCardData {
    StatCardData {
        title,
        icon,
        value,
        change: format_change(change),
        direction: ChangeDirection::from_value(change),
    }
}

/// Customers, Orders, Revenue and Growth cards, formatted on every call.
pub fn stat_cards(stats: &HomeStats, changes: &StatChanges) -> Vec<StatCardData> {
    vec![
        card(
            "Customers",
            "customers",
            format_integer(stats.customers),
            changes.customers,
        ),
        card("Orders", "orders", format_integer(stats.orders), changes.orders),
        card(
            "Revenue",
            "dollar-sign",
            format_currency(stats.revenue),
            changes.revenue,
        ),
        card("Growth", "trending-up", format_percent(stats.growth), changes.growth),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d001_ecommerce::mock;

    #[test]
    fn test_stat_cards_from_mock_data() {
        let data = mock::home_data().unwrap();
        let cards = stat_cards(&data.stats, &data.stat_changes);
        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["3,781", "1,219", "$695", "30.1%"]);

        let changes: Vec<_> = cards.iter().map(|c| c.change.as_str()).collect();
        assert_eq!(changes, vec!["+11.01%", "-0.03%", "+15.03%", "+6.08%"]);
        assert_eq!(cards[1].direction, ChangeDirection::Negative);
        assert_eq!(cards[0].direction, ChangeDirection::Positive);
    }

    #[test]
    fn test_leading_channel_share() {
        let data = mock::home_data().unwrap();
        assert!((data.leading_channel_share() - 0.386).abs() < 1e-9);

        let empty = HomeData {
            sales_breakdown: vec![],
            ..data
        };
        assert_eq!(empty.leading_channel_share(), 0.0);
    }

    #[test]
    fn test_location_label() {
        let data = mock::home_data().unwrap();
        assert_eq!(data.revenue_by_location[0].revenue_label(), "72K");
    }
}
