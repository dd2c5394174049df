//! Shopping cart domain module.
//!
//! The cart is a small aggregate: commands are turned into events by pure
//! decision logic, and events are the only way its state changes. The
//! [`CartManager`] owns one cart and runs each operation as a single
//! decide-then-apply transition.

pub mod cart;
pub mod line;
pub mod manager;

pub use cart::{
    AddProduct, Cart, CartCleared, CartCommand, CartEvent, ClearCart, LineAdded, LineRemoved,
    QuantityChanged, RemoveLine, RemoveOne,
};
pub use line::CartLine;
pub use manager::CartManager;
