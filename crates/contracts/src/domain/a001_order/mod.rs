pub mod aggregate;
pub mod mock;
pub mod overlay;
pub mod query;
pub mod selection;

pub use aggregate::{parse_order_date, OrderRecord, OrderSortKey, OrderStatus};
pub use overlay::DetailOverlay;
pub use query::{OrdersQuery, StatusFilter};
pub use selection::SelectionSet;
