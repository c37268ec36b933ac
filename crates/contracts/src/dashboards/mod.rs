pub mod d001_ecommerce;
