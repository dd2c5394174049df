use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{Aggregate, AggregateRoot, CartId, DomainError, Price, ProductId};
use storefront_events::Event;

use crate::line::CartLine;

/// Aggregate root: Cart.
///
/// Lines are kept in first-add order and are keyed by product id; a line
/// keeps its position when its quantity changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of unit price times quantity across all lines.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: add one unit of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub cart_id: CartId,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: remove one unit of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOne {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: remove a product's line whatever its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLine {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: empty the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddProduct(AddProduct),
    RemoveOne(RemoveOne),
    RemoveLine(RemoveLine),
    ClearCart(ClearCart),
}

/// Event: a new line was appended with quantity 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub cart_id: CartId,
    pub line: CartLine,
    pub occurred_at: DateTime<Utc>,
}

/// Event: an existing line's quantity moved to `quantity` (always >= 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: a line left the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: every line left the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantityIncremented(QuantityChanged),
    QuantityDecremented(QuantityChanged),
    LineRemoved(LineRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantityIncremented(_) => "cart.line.incremented",
            CartEvent::QuantityDecremented(_) => "cart.line.decremented",
            CartEvent::LineRemoved(_) => "cart.line.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::LineAdded(e) => e.occurred_at,
            CartEvent::QuantityIncremented(e) | CartEvent::QuantityDecremented(e) => e.occurred_at,
            CartEvent::LineRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl CartEvent {
    /// Product affected by the event, if it concerns a single line.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartEvent::LineAdded(e) => Some(e.line.product_id),
            CartEvent::QuantityIncremented(e) | CartEvent::QuantityDecremented(e) => {
                Some(e.product_id)
            }
            CartEvent::LineRemoved(e) => Some(e.product_id),
            CartEvent::CartCleared(_) => None,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(e) => {
                self.lines.push(e.line.clone());
            }
            CartEvent::QuantityIncremented(e) | CartEvent::QuantityDecremented(e) => {
                if let Some(line) = self.line_mut(e.product_id) {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::LineRemoved(e) => {
                self.lines.retain(|l| l.product_id != e.product_id);
            }
            CartEvent::CartCleared(_) => {
                self.lines.clear();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddProduct(cmd) => self.handle_add(cmd),
            CartCommand::RemoveOne(cmd) => self.handle_remove_one(cmd),
            CartCommand::RemoveLine(cmd) => self.handle_remove_line(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        }
    }
}

impl Cart {
    fn ensure_cart_id(&self, cart_id: CartId) -> Result<(), DomainError> {
        if self.id != cart_id {
            return Err(DomainError::invariant("cart_id mismatch"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddProduct) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        let product_id = cmd.product.id_typed();
        let event = match self.line(product_id) {
            // A line at the quantity cap stays as it is.
            Some(line) if line.quantity == u32::MAX => return Ok(Vec::new()),
            Some(line) => CartEvent::QuantityIncremented(QuantityChanged {
                cart_id: cmd.cart_id,
                product_id,
                quantity: line.quantity + 1,
                occurred_at: cmd.occurred_at,
            }),
            None => CartEvent::LineAdded(LineAdded {
                cart_id: cmd.cart_id,
                line: CartLine::from_product(&cmd.product),
                occurred_at: cmd.occurred_at,
            }),
        };

        Ok(vec![event])
    }

    fn handle_remove_one(&self, cmd: &RemoveOne) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        let Some(line) = self.line(cmd.product_id) else {
            return Ok(Vec::new());
        };

        // Removing the last unit drops the line instead of leaving quantity 0.
        let event = if line.quantity > 1 {
            CartEvent::QuantityDecremented(QuantityChanged {
                cart_id: cmd.cart_id,
                product_id: cmd.product_id,
                quantity: line.quantity - 1,
                occurred_at: cmd.occurred_at,
            })
        } else {
            CartEvent::LineRemoved(LineRemoved {
                cart_id: cmd.cart_id,
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            })
        };

        Ok(vec![event])
    }

    fn handle_remove_line(&self, cmd: &RemoveLine) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.line(cmd.product_id).is_none() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::LineRemoved(LineRemoved {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        Ok(vec![CartEvent::CartCleared(CartCleared {
            cart_id: cmd.cart_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
