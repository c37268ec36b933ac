//! Built-in sample orders standing in for a real data source.

use once_cell::sync::Lazy;

use super::aggregate::OrderRecord;

const MOCK_ORDERS_JSON: &str = include_str!("mock_orders.json");

static MOCK_ORDERS: Lazy<Result<Vec<OrderRecord>, String>> = Lazy::new(|| {
    serde_json::from_str::<Vec<OrderRecord>>(MOCK_ORDERS_JSON).map_err(|e| e.to_string())
});

/// The ten sample orders, parsed once and cloned per call.
pub fn orders() -> anyhow::Result<Vec<OrderRecord>> {
    match &*MOCK_ORDERS {
        Ok(orders) => Ok(orders.clone()),
        Err(e) => Err(anyhow::anyhow!("Failed to parse mock_orders.json: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderStatus;
    use std::collections::HashSet;

    #[test]
    fn test_mock_orders_load() {
        let orders = orders().unwrap();
        assert_eq!(orders.len(), 10);

        let ids: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), 10, "order ids must be unique");

        let first = &orders[0];
        assert_eq!(first.id, "CM9801");
        assert_eq!(first.user, "Natali Craig");
        assert_eq!(first.status, OrderStatus::InProgress);
        assert!(!first.has_document);
        assert!(first.has_calendar);

        let rejected: Vec<_> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Rejected)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(rejected, vec!["CM9805", "CM9810"]);
        assert!(orders[4].has_document);
    }
}
