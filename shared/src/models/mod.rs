//! Domain models shared between client and console crates

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use order::{Order, OrderDetail, OrderStatus, PaymentStatus};
pub use product::{Product, ProductInfo};
pub use user::Role;
