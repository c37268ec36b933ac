pub mod d001_ecommerce;

pub use d001_ecommerce::ui::EcommerceDashboard;
