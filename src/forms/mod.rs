//! Edit forms for products and carts.
//!
//! Forms hold raw user input. Updates arrive as tagged values
//! ([`ProductField`], [`CartAction`]) instead of string field names, and
//! `validate()` turns the input into a typed draft ready to send. Only
//! required-field and number checks are made.
//!
//! `submit()` validates, sends the create or update call chosen by
//! [`FormMode`], and reports the result as a [`Notice`] with the same wording
//! for every entity:
//!
//! | Mode     | Success               | Failure                    |
//! |----------|-----------------------|----------------------------|
//! | create   | `Product added`       | `Failed to add product`    |
//! | edit     | `Product updated`     | `Failed to update product` |
//!
//! Deletes go through [`delete_with_notice`], which reports
//! `Product deleted successfully` or `Failed to delete product`.

mod cart;
mod product;

pub use cart::{CartAction, CartDraft, CartForm, CartLineDraft, CartLineInput};
pub use product::{ProductDraft, ProductField, ProductForm};

use std::future::Future;

use crate::Error;
use crate::listing::Notice;

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting creates a record.
    #[default]
    Create,
    /// Submitting updates the record with this id.
    Edit(u64),
}

impl FormMode {
    /// Returns the verb used in messages.
    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "add",
            FormMode::Edit(_) => "update",
        }
    }

    fn success_message(&self, noun: &str) -> String {
        let mut title = capitalize(noun);
        match self {
            FormMode::Create => title.push_str(" added"),
            FormMode::Edit(_) => title.push_str(" updated"),
        }
        title
    }

    fn failure_message(&self, noun: &str) -> String {
        format!("Failed to {} {}", self.verb(), noun)
    }
}

/// What a form submission produced.
#[derive(Debug)]
pub struct SubmitOutcome<T> {
    /// The saved record as echoed by the server, or why it failed.
    pub result: Result<T, Error>,
    /// Notice to show.
    pub notice: Notice,
}

impl<T> SubmitOutcome<T> {
    pub(crate) fn from_result(mode: FormMode, noun: &str, result: Result<T, Error>) -> Self {
        let notice = match &result {
            Ok(_) => Notice::success(mode.success_message(noun)),
            Err(e) => {
                tracing::warn!(error = %e, noun, verb = mode.verb(), "form submit failed");
                Notice::danger(mode.failure_message(noun))
            },
        };
        Self { result, notice }
    }

    pub(crate) fn invalid(err: Error) -> Self {
        Self {
            notice: Notice::danger(err.message().to_string()),
            result: Err(err),
        }
    }

    pub(crate) fn from_delete(noun: &str, result: Result<T, Error>) -> Self {
        let notice = match &result {
            Ok(_) => Notice::success(format!("{} deleted successfully", capitalize(noun))),
            Err(e) => {
                tracing::warn!(error = %e, noun, "delete failed");
                Notice::danger(format!("Failed to delete {}", noun))
            },
        };
        Self { result, notice }
    }

    /// Returns `true` if the record was saved.
    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }
}

/// Awaits a delete call and wraps the result with its notice.
///
/// ```rust,no_run
/// # async fn example(client: shopadmin::Client) {
/// let outcome = shopadmin::forms::delete_with_notice("cart", client.carts().delete(7)).await;
/// println!("{}", outcome.notice);
/// # }
/// ```
pub async fn delete_with_notice<T>(noun: &str, delete: impl Future<Output = Result<T, Error>>) -> SubmitOutcome<T> {
    SubmitOutcome::from_delete(noun, delete.await)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
