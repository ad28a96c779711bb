//! Cart add/edit form.

use serde::Serialize;

use super::{FormMode, SubmitOutcome};
use crate::Error;
use crate::api::CartsClient;
use crate::types::{Cart, Resource};

/// One product line as entered in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLineInput {
    /// Selected product, if any.
    pub product_id: Option<u64>,
    /// Requested quantity.
    pub quantity: u32,
}

impl Default for CartLineInput {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: 1,
        }
    }
}

/// One update for a [`CartForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Selects the owning user.
    SetUser(Option<u64>),
    /// Appends an empty line with quantity 1.
    AddLine,
    /// Removes the line at this index.
    RemoveLine(usize),
    /// Selects the product of a line.
    SetLineProduct {
        /// Line index.
        index: usize,
        /// Selected product.
        product_id: Option<u64>,
    },
    /// Changes the quantity of a line.
    SetLineQuantity {
        /// Line index.
        index: usize,
        /// New quantity.
        quantity: u32,
    },
}

/// Raw input of the cart form. A new form starts with one empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartForm {
    mode: FormMode,
    user_id: Option<u64>,
    lines: Vec<CartLineInput>,
}

/// One validated line of a [`CartDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartLineDraft {
    /// Product ID.
    pub id: u64,
    /// Quantity, at least 1.
    pub quantity: u32,
}

/// Validated payload for `POST /carts/add` and `PUT /carts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    /// Owning user.
    pub user_id: u64,
    /// Product lines.
    pub products: Vec<CartLineDraft>,
}

impl Default for CartForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            user_id: None,
            lines: vec![CartLineInput::default()],
        }
    }
}

impl CartForm {
    /// Creates an empty form in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form in edit mode prefilled from `cart`.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            mode: FormMode::Edit(cart.id),
            user_id: Some(cart.user_id),
            lines: cart
                .products
                .iter()
                .map(|line| CartLineInput {
                    product_id: Some(line.id),
                    quantity: u32::try_from(line.quantity).unwrap_or(u32::MAX),
                })
                .collect(),
        }
    }

    /// Returns the form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the selected user.
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Returns the lines in order.
    pub fn lines(&self) -> &[CartLineInput] {
        &self.lines
    }

    /// Applies one update. Returns `false` if `index` named no line.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::SetUser(user_id) => {
                self.user_id = user_id;
                true
            },
            CartAction::AddLine => {
                self.lines.push(CartLineInput::default());
                true
            },
            CartAction::RemoveLine(index) => {
                if index < self.lines.len() {
                    self.lines.remove(index);
                    true
                } else {
                    false
                }
            },
            CartAction::SetLineProduct { index, product_id } => {
                self.line_mut(index).map(|line| line.product_id = product_id).is_some()
            },
            CartAction::SetLineQuantity { index, quantity } => {
                self.line_mut(index).map(|line| line.quantity = quantity).is_some()
            },
        }
    }

    fn line_mut(&mut self, index: usize) -> Option<&mut CartLineInput> {
        self.lines.get_mut(index)
    }

    /// Checks that a user and at least one complete line are present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` describing the first problem found.
    pub fn validate(&self) -> Result<CartDraft, Error> {
        let user_id = self
            .user_id
            .ok_or_else(|| Error::invalid_argument("user is required"))?;

        if self.lines.is_empty() {
            return Err(Error::invalid_argument("at least one product is required"));
        }

        let products = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let id = line.product_id.ok_or_else(|| {
                    Error::invalid_argument(format!("line {}: product is required", index + 1))
                })?;
                if line.quantity == 0 {
                    return Err(Error::invalid_argument(format!(
                        "line {}: quantity must be at least 1",
                        index + 1
                    )));
                }
                Ok(CartLineDraft {
                    id,
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(CartDraft { user_id, products })
    }

    /// Validates, then creates or updates the cart.
    pub async fn submit(&self, carts: &CartsClient) -> SubmitOutcome<Cart> {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(e) => return SubmitOutcome::invalid(e),
        };

        let result = match self.mode {
            FormMode::Create => carts.create(&draft).await,
            FormMode::Edit(id) => carts.update(id, &draft).await,
        };
        SubmitOutcome::from_result(self.mode, Cart::NOUN, result)
    }
}
