//! Pure conversions from recipes to display text and markup

mod fraction;
mod markup;

pub use fraction::format_quantity;
pub use markup::{preview_item, preview_list, recipe_detail, PREVIEW_ITEM_CLASS, SAVED_ITEM_CLASS};
