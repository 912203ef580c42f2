//! Text renderings of the storefront screens. Each screen reads a cart
//! snapshot and never mutates it.

pub mod badge;
pub mod cart_list;
pub mod catalog_list;
pub mod product_detail;
