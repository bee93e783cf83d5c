use crate::model::Ingredient;

/// Scale ingredient quantities from `original` servings to `new` servings
///
/// Absent quantities stay absent. `new` is clamped to at least one serving and
/// an `original` of zero is treated as one.
pub fn scale_quantities(original: u32, new: u32, ingredients: &[Ingredient]) -> Vec<Option<f64>> {
    let factor = new.max(1) as f64 / original.max(1) as f64;
    ingredients
        .iter()
        .map(|ingredient| ingredient.quantity.map(|quantity| quantity * factor))
        .collect()
}

/// Serving counter of the recipe currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings {
    original: u32,
    current: u32,
}

impl Servings {
    pub fn new(original: u32) -> Self {
        let original = original.max(1);
        Self {
            original,
            current: original,
        }
    }

    pub fn original(&self) -> u32 {
        self.original
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn increment(&mut self) -> u32 {
        self.current = self.current.saturating_add(1);
        self.current
    }

    /// Decrease by one, never going below a single serving
    pub fn decrement(&mut self) -> u32 {
        if self.current > 1 {
            self.current -= 1;
        }
        self.current
    }

    pub fn set(&mut self, servings: u32) -> u32 {
        self.current = servings.max(1);
        self.current
    }

    pub fn scaled(&self, ingredients: &[Ingredient]) -> Vec<Option<f64>> {
        scale_quantities(self.original, self.current, ingredients)
    }
}
