//! Form validation.
//!
//! Raw form inputs arrive as opaque strings; validation collects
//! per-field errors and, when everything holds, parses the input into
//! a typed draft. A failed validation blocks the corresponding
//! gateway call entirely.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime};
use regex::Regex;

use crate::domain::{ProductDraft, ProductStatus, StoreDraft};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{9,15}$").expect("phone pattern"));

/// A single inline form error, anchored to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Raw inputs of the create-store form.
#[derive(Debug, Clone, Default)]
pub struct StoreForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// `YYYY-MM-DD`, as a date input produces.
    pub established: String,
    pub floor_area: String,
}

/// Raw inputs of the add/edit-product form.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    /// Optional; empty means no rating.
    pub rating: String,
    pub specs: String,
    pub supplier_info: String,
    pub made_in: String,
    pub company: String,
    /// One of the wire statuses (`OK`, `STORAGE`, `OUT_OF_STOCK`).
    pub status: String,
}

fn require(value: &str, field: &'static str, errors: &mut Vec<FieldError>) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", field)));
        false
    } else {
        true
    }
}

/// Validate the store form and parse it into a create payload.
/// The establishment date is carried forward as a UTC midnight
/// timestamp, matching what the gateway stores.
pub fn validate_store(form: &StoreForm) -> Result<StoreDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    require(&form.name, "name", &mut errors);
    require(&form.address, "address", &mut errors);

    if require(&form.email, "email", &mut errors) && !EMAIL.is_match(form.email.trim()) {
        errors.push(FieldError::new("email", "enter a valid email address"));
    }

    if require(&form.phone_number, "phone number", &mut errors)
        && !PHONE.is_match(form.phone_number.trim())
    {
        errors.push(FieldError::new("phone number", "enter a valid phone number"));
    }

    let mut established = None;
    if require(&form.established, "establishment date", &mut errors) {
        match NaiveDate::parse_from_str(form.established.trim(), "%Y-%m-%d") {
            Ok(date) => established = Some(date.and_time(NaiveTime::MIN).and_utc()),
            Err(_) => errors.push(FieldError::new(
                "establishment date",
                "enter a valid date in YYYY-MM-DD format",
            )),
        }
    }

    let mut floor_area = None;
    if require(&form.floor_area, "floor area", &mut errors) {
        match form.floor_area.trim().parse::<f64>() {
            Ok(area) => floor_area = Some(area),
            Err(_) => errors.push(FieldError::new("floor area", "floor area must be a number")),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(StoreDraft {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone_number: form.phone_number.trim().to_string(),
        address: form.address.trim().to_string(),
        established: established.unwrap_or(DateTime::UNIX_EPOCH),
        floor_area: floor_area.unwrap_or_default(),
    })
}

/// Validate the product form and parse it into a write payload scoped
/// to the given store.
pub fn validate_product(
    form: &ProductForm,
    store_id: &str,
) -> Result<ProductDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    require(&form.name, "name", &mut errors);
    require(&form.specs, "specs", &mut errors);
    require(&form.supplier_info, "supplier info", &mut errors);
    require(&form.made_in, "country", &mut errors);
    require(&form.company, "company", &mut errors);

    let mut price = None;
    if require(&form.price, "price", &mut errors) {
        match form.price.trim().parse::<f64>() {
            Ok(amount) if amount > 0.0 => price = Some(amount),
            _ => errors.push(FieldError::new("price", "price must be a positive number")),
        }
    }

    let mut rating = None;
    if !form.rating.trim().is_empty() {
        match form.rating.trim().parse::<f64>() {
            Ok(value) if (0.0..=5.0).contains(&value) => rating = Some(value),
            _ => errors.push(FieldError::new(
                "rating",
                "rating must be a number between 0 and 5",
            )),
        }
    }

    let mut status = None;
    if require(&form.status, "status", &mut errors) {
        match ProductStatus::from_wire(form.status.trim()) {
            Some(parsed) => status = Some(parsed),
            None => errors.push(FieldError::new(
                "status",
                "status must be OK, STORAGE, or OUT_OF_STOCK",
            )),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ProductDraft {
        name: form.name.trim().to_string(),
        price_amount: price.unwrap_or_default(),
        rating,
        specs: form.specs.trim().to_string(),
        supplier_info: form.supplier_info.trim().to_string(),
        made_in: form.made_in.trim().to_string(),
        production_company_name: form.company.trim().to_string(),
        status: status.unwrap_or(ProductStatus::Ok),
        store_id: store_id.to_string(),
    })
}
