//! Catalog data models

pub mod category;
pub mod price;
pub mod product;

pub use category::Category;
pub use price::{InvalidPrice, Price};
pub use product::{Product, ProductCreate, ProductUpdate};
