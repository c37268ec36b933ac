pub mod dto;
pub mod mock;

pub use dto::{
    stat_cards, ChangeDirection, HomeData, LocationRevenue, ProjectionPoint, RevenuePoint,
    RevenueTotals, SalesChannel, StatCardData, TopProduct,
};
