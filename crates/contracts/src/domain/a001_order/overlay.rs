use super::aggregate::OrderRecord;

/// Order detail overlay: `Closed → Open` on row activation, `Open → Closed`
/// on close button, background click or Escape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(OrderRecord),
}

impl DetailOverlay {
    /// Activating another row while open replaces the shown order.
    pub fn open(&mut self, order: OrderRecord) {
        *self = DetailOverlay::Open(order);
    }

    pub fn close(&mut self) {
        *self = DetailOverlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailOverlay::Open(_))
    }

    pub fn current(&self) -> Option<&OrderRecord> {
        match self {
            DetailOverlay::Open(order) => Some(order),
            DetailOverlay::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::mock;

    #[test]
    fn test_open_and_close() {
        let orders = mock::orders().unwrap();
        let mut overlay = DetailOverlay::default();
        assert!(!overlay.is_open());
        assert!(overlay.current().is_none());

        overlay.open(orders[2].clone());
        assert!(overlay.is_open());
        assert_eq!(overlay.current().map(|o| o.id.as_str()), Some("CM9803"));

        overlay.open(orders[4].clone());
        assert_eq!(overlay.current().map(|o| o.id.as_str()), Some("CM9805"));

        overlay.close();
        assert_eq!(overlay, DetailOverlay::Closed);

        overlay.close();
        assert_eq!(overlay, DetailOverlay::Closed);
    }
}
