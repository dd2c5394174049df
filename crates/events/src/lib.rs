//! Domain events and their in-process distribution.
//!
//! Cart transitions are described as events; a host publishes them on an
//! [`EventBus`] so other parts of the session (cart badge, logs) can follow
//! along without reaching into the cart state.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
