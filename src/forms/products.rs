//! Product payload validation.
//!
//! Request bodies are arbitrary JSON objects, so both forms wrap a raw
//! field map and validate field by field. Create mode requires `name` and
//! `price`; update mode validates only the supplied subset and keeps the
//! supplied-versus-absent distinction intact. Numeric fields accept JSON
//! numbers or numeric strings; anything else is a type error, and negative
//! values are a separate range error.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::product::{NewProduct, ProductChanges};
use crate::domain::types::{
    ProductDescription, ProductName, ProductPrice, StockCount,
};

/// Field-level validation failures for a product payload.
///
/// Messages for every failing field are collected and reported together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .0.join(", "))]
pub struct ProductFormError(pub Vec<String>);

/// Raw body of a `POST /products` request.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CreateProductForm(pub Map<String, Value>);

/// Raw body of a `PUT /products/{id}` request.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct UpdateProductForm(pub Map<String, Value>);

fn coerce_number(value: &Value, field: &str) -> Result<f64, String> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| format!("{field} must be a valid number")),
        Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{field} must be a valid number")),
        _ => Err(format!("{field} must be a valid number")),
    }
}

fn coerce_integer(value: &Value, field: &str) -> Result<i32, String> {
    let number = coerce_number(value, field)?;
    if number.fract() != 0.0 || number < i32::MIN as f64 || number > i32::MAX as f64 {
        return Err(format!("{field} must be a valid number"));
    }
    Ok(number as i32)
}

fn coerce_nullable_string(value: &Value, field: &str) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        _ => Err(format!("{field} must be a string")),
    }
}

impl TryFrom<CreateProductForm> for NewProduct {
    type Error = ProductFormError;

    fn try_from(form: CreateProductForm) -> Result<Self, Self::Error> {
        let map = form.0;
        let mut errors = Vec::new();

        let name = match map.get("name") {
            None | Some(Value::Null) => {
                errors.push("Product name is required and cannot be empty".to_string());
                None
            }
            Some(Value::String(raw)) => match ProductName::new(raw.clone()) {
                Ok(name) => Some(name),
                Err(err) => {
                    errors.push(err.to_string());
                    None
                }
            },
            Some(_) => {
                errors.push("Product name must be a string".to_string());
                None
            }
        };

        let price = match map.get("price") {
            None | Some(Value::Null) => {
                errors.push("Product price is required".to_string());
                None
            }
            Some(Value::String(raw)) if raw.trim().is_empty() => {
                errors.push("Product price is required".to_string());
                None
            }
            Some(value) => {
                let price = coerce_number(value, "Product price")
                    .and_then(|number| ProductPrice::new(number).map_err(|e| e.to_string()));
                match price {
                    Ok(price) => Some(price),
                    Err(message) => {
                        errors.push(message);
                        None
                    }
                }
            }
        };

        let stock = match map.get("stock") {
            None | Some(Value::Null) => Some(StockCount::default()),
            Some(value) => {
                let stock = coerce_integer(value, "Stock")
                    .and_then(|number| StockCount::new(number).map_err(|e| e.to_string()));
                match stock {
                    Ok(stock) => Some(stock),
                    Err(message) => {
                        errors.push(message);
                        None
                    }
                }
            }
        };

        let image_url = match map.get("imageUrl") {
            None => Some(None),
            Some(value) => match coerce_nullable_string(value, "Image URL") {
                Ok(image_url) => Some(image_url),
                Err(message) => {
                    errors.push(message);
                    None
                }
            },
        };

        let category = match map.get("category") {
            None => Some(None),
            Some(value) => match coerce_nullable_string(value, "Category") {
                Ok(category) => Some(category),
                Err(message) => {
                    errors.push(message);
                    None
                }
            },
        };

        let description = match map.get("description") {
            None => Some(None),
            Some(value) => match coerce_nullable_string(value, "Description") {
                Ok(None) => Some(None),
                Ok(Some(raw)) => match ProductDescription::new(raw) {
                    Ok(description) => Some(Some(description)),
                    Err(err) => {
                        errors.push(err.to_string());
                        None
                    }
                },
                Err(message) => {
                    errors.push(message);
                    None
                }
            },
        };

        match (name, price, image_url, category, description, stock) {
            (
                Some(name),
                Some(price),
                Some(image_url),
                Some(category),
                Some(description),
                Some(stock),
            ) if errors.is_empty() => Ok(NewProduct {
                name,
                price,
                image_url,
                category,
                description,
                stock,
            }),
            _ => Err(ProductFormError(errors)),
        }
    }
}

impl TryFrom<UpdateProductForm> for ProductChanges {
    type Error = ProductFormError;

    fn try_from(form: UpdateProductForm) -> Result<Self, Self::Error> {
        let map = form.0;
        let mut errors = Vec::new();
        let mut changes = ProductChanges::default();

        // createdAt is immutable; supplying it at all is an error,
        // regardless of the value.
        if map.contains_key("createdAt") {
            errors.push("Cannot update createdAt field".to_string());
        }

        if let Some(value) = map.get("name") {
            match value {
                Value::String(raw) => match ProductName::new(raw.clone()) {
                    Ok(name) => changes.name = Some(name),
                    Err(err) => errors.push(err.to_string()),
                },
                _ => errors.push("Product name cannot be empty".to_string()),
            }
        }

        if let Some(value) = map.get("price") {
            let price = coerce_number(value, "Product price")
                .and_then(|number| ProductPrice::new(number).map_err(|e| e.to_string()));
            match price {
                Ok(price) => changes.price = Some(price),
                Err(message) => errors.push(message),
            }
        }

        if let Some(value) = map.get("stock") {
            let stock = coerce_integer(value, "Stock")
                .and_then(|number| StockCount::new(number).map_err(|e| e.to_string()));
            match stock {
                Ok(stock) => changes.stock = Some(stock),
                Err(message) => errors.push(message),
            }
        }

        if let Some(value) = map.get("imageUrl") {
            match coerce_nullable_string(value, "Image URL") {
                Ok(image_url) => changes.image_url = Some(image_url),
                Err(message) => errors.push(message),
            }
        }

        if let Some(value) = map.get("category") {
            match coerce_nullable_string(value, "Category") {
                Ok(category) => changes.category = Some(category),
                Err(message) => errors.push(message),
            }
        }

        if let Some(value) = map.get("description") {
            match coerce_nullable_string(value, "Description") {
                Ok(None) => changes.description = Some(None),
                Ok(Some(raw)) => match ProductDescription::new(raw) {
                    Ok(description) => changes.description = Some(Some(description)),
                    Err(err) => errors.push(err.to_string()),
                },
                Err(message) => errors.push(message),
            }
        }

        if errors.is_empty() && changes.is_empty() {
            errors.push("No valid fields provided for update".to_string());
        }

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(ProductFormError(errors))
        }
    }
}
