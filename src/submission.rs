//! Validation of user-submitted recipes
//!
//! Nothing here touches the network: a form that fails validation is never
//! uploaded.

use crate::model::{Ingredient, NewRecipe};
use crate::RecipeError;

/// Parse one `quantity,unit,description` ingredient entry
///
/// Quantity and unit may be empty, the description may not.
pub fn parse_ingredient(entry: &str) -> Result<Ingredient, RecipeError> {
    let parts: Vec<&str> = entry.split(',').collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(RecipeError::InvalidIngredient(entry.to_string()));
    };

    let description = description.trim();
    if description.is_empty() {
        return Err(RecipeError::InvalidIngredient(entry.to_string()));
    }

    let quantity = match quantity.trim() {
        "" => None,
        text => {
            let value: f64 = text
                .parse()
                .map_err(|_| RecipeError::InvalidIngredient(entry.to_string()))?;
            if !value.is_finite() || value < 0.0 {
                return Err(RecipeError::InvalidIngredient(entry.to_string()));
            }
            Some(value)
        }
    };

    Ok(Ingredient {
        quantity,
        unit: unit.trim().to_string(),
        description: description.to_string(),
    })
}

/// A recipe as typed into the submission form
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub cooking_time: String,
    pub servings: String,
    /// Raw ingredient entries, blank ones are ignored
    pub ingredients: Vec<String>,
}

impl RecipeForm {
    pub fn validate(&self) -> Result<NewRecipe, RecipeError> {
        let entries: Vec<&String> = self
            .ingredients
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .collect();
        if entries.is_empty() {
            return Err(RecipeError::NoIngredients);
        }
        let ingredients = entries
            .into_iter()
            .map(|entry| parse_ingredient(entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewRecipe {
            title: required("title", &self.title)?,
            publisher: required("publisher", &self.publisher)?,
            source_url: required("source URL", &self.source_url)?,
            image_url: required("image URL", &self.image_url)?,
            cooking_time: positive("cooking time", &self.cooking_time)?,
            servings: positive("servings", &self.servings)?,
            ingredients,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, RecipeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RecipeError::InvalidRecipe(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn positive(field: &str, value: &str) -> Result<u32, RecipeError> {
    match value.trim().parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(RecipeError::InvalidRecipe(format!(
            "{} must be a positive whole number",
            field
        ))),
    }
}
