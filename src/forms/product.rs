//! Product add/edit form.

use serde::Serialize;

use super::{FormMode, SubmitOutcome};
use crate::Error;
use crate::api::ProductsClient;
use crate::types::{Product, Resource};

/// One field update for a [`ProductForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductField {
    /// Display title.
    Title(String),
    /// Brand name.
    Brand(String),
    /// Long description.
    Description(String),
    /// Category slug.
    Category(String),
    /// Unit price, as typed.
    Price(String),
    /// Units in stock, as typed.
    Stock(String),
}

/// Raw input of the product form.
///
/// ```rust
/// use shopadmin::forms::{ProductField, ProductForm};
///
/// let mut form = ProductForm::new();
/// form.apply(ProductField::Title("Desk Lamp".into()));
/// form.apply(ProductField::Price("19.99".into()));
/// assert!(form.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    mode: FormMode,
    title: String,
    brand: String,
    description: String,
    category: String,
    price: String,
    stock: String,
}

/// Validated product payload for `POST /products/add` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    /// Display title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Brand name.
    pub brand: String,
    /// Category slug.
    pub category: String,
    /// Units in stock.
    pub stock: u64,
}

impl ProductForm {
    /// Creates an empty form in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form in edit mode prefilled from `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            title: product.title.clone(),
            brand: product.brand.clone().unwrap_or_default(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    /// Returns the form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Applies one field update.
    pub fn apply(&mut self, field: ProductField) {
        match field {
            ProductField::Title(v) => self.title = v,
            ProductField::Brand(v) => self.brand = v,
            ProductField::Description(v) => self.description = v,
            ProductField::Category(v) => self.category = v,
            ProductField::Price(v) => self.price = v,
            ProductField::Stock(v) => self.stock = v,
        }
    }

    /// Returns the names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("brand", &self.brand),
            ("price", &self.price),
            ("stock", &self.stock),
            ("category", &self.category),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Checks required fields and parses the numbers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the blank fields, or the field that is
    /// not a number.
    pub fn validate(&self) -> Result<ProductDraft, Error> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::invalid_argument(format!(
                "required: {}",
                missing.join(", ")
            )));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| Error::invalid_argument("price must be a number"))?;
        let stock: u64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| Error::invalid_argument("stock must be a whole number"))?;

        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            brand: self.brand.trim().to_string(),
            category: self.category.trim().to_string(),
            stock,
        })
    }

    /// Validates, then creates or updates the product.
    pub async fn submit(&self, products: &ProductsClient) -> SubmitOutcome<Product> {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(e) => return SubmitOutcome::invalid(e),
        };

        let result = match self.mode {
            FormMode::Create => products.create(&draft).await,
            FormMode::Edit(id) => products.update(id, &draft).await,
        };
        SubmitOutcome::from_result(self.mode, Product::NOUN, result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn filled() -> ProductForm {
        let mut form = ProductForm::new();
        for field in [
            ProductField::Title("Desk Lamp".into()),
            ProductField::Brand("Lumen".into()),
            ProductField::Description("Adjustable arm".into()),
            ProductField::Category("home-decoration".into()),
            ProductField::Price(" 19.5 ".into()),
            ProductField::Stock("40".into()),
        ] {
            form.apply(field);
        }
        form
    }

    #[test]
    fn test_new_form_is_create_mode() {
        assert_eq!(ProductForm::new().mode(), FormMode::Create);
    }

    #[test]
    fn test_validate_filled_form() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.title, "Desk Lamp");
        assert_eq!(draft.price, 19.5);
        assert_eq!(draft.stock, 40);
    }

    #[test]
    fn test_missing_fields_listed() {
        let mut form = filled();
        form.apply(ProductField::Brand("  ".into()));
        form.apply(ProductField::Stock(String::new()));

        assert_eq!(form.missing_fields(), vec!["brand", "stock"]);
        let err = form.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "required: brand, stock");
    }

    #[test]
    fn test_numbers_must_parse() {
        let mut form = filled();
        form.apply(ProductField::Price("cheap".into()));
        assert_eq!(form.validate().unwrap_err().message(), "price must be a number");

        let mut form = filled();
        form.apply(ProductField::Stock("-3".into()));
        assert_eq!(
            form.validate().unwrap_err().message(),
            "stock must be a whole number"
        );
    }

    #[test]
    fn test_from_product_prefills_edit_mode() {
        let product = Product {
            id: 9,
            title: "Phone".into(),
            description: "Smart".into(),
            category: "smartphones".into(),
            price: 299.0,
            stock: 12,
            brand: Some("Acme".into()),
            ..Default::default()
        };

        let form = ProductForm::from_product(&product);
        assert_eq!(form.mode(), FormMode::Edit(9));
        let draft = form.validate().unwrap();
        assert_eq!(draft.price, 299.0);
        assert_eq!(draft.brand, "Acme");
    }

    #[test]
    fn test_draft_wire_shape() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["title"], "Desk Lamp");
        assert_eq!(json["stock"], 40);
        assert_eq!(json["category"], "home-decoration");
    }
}
