use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::bookmarks::SavedState;
use crate::format::format_quantity;
use crate::model::{Ingredient, Recipe, RecipePreview};
use crate::servings::Servings;

/// List item class used for search results
pub const PREVIEW_ITEM_CLASS: &str = "recipe-preview-item";
/// List item class used for saved recipes
pub const SAVED_ITEM_CLASS: &str = "saved-recipe-preview-item";

/// Markup for one recipe in a result or saved list
pub fn preview_item(recipe: &RecipePreview, class: &str, highlighted: bool) -> String {
    let highlight = if highlighted { " highlight" } else { "" };
    let owner = if recipe.is_user_owned() {
        r#"<span class="preview-user">👤</span>"#
    } else {
        ""
    };

    format!(
        r##"<li class="recipe-item {class}{highlight}" data-id="{id}">
  <a href="#{id}" class="recipe-preview-link">
    <img class="preview-img" src="{image}" alt="" />
    <div class="preview-text">
      <p class="preview-title">{title}</p>
      <p class="preview-publisher"><span>{publisher}</span>{owner}</p>
    </div>
  </a>
</li>"##,
        class = encode_double_quoted_attribute(class),
        id = encode_double_quoted_attribute(&recipe.id),
        image = encode_double_quoted_attribute(&recipe.image_url),
        title = encode_text(&recipe.title),
        publisher = encode_text(&recipe.publisher),
    )
}

/// Markup for a whole list, highlighting the item whose id is `highlight_id`
pub fn preview_list<'a>(
    recipes: impl IntoIterator<Item = &'a RecipePreview>,
    class: &str,
    highlight_id: Option<&str>,
) -> String {
    recipes
        .into_iter()
        .map(|recipe| preview_item(recipe, class, highlight_id == Some(recipe.id.as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

fn ingredient_item(ingredient: &Ingredient, quantity: Option<f64>) -> String {
    format!(
        r#"<li class="recipe-ingredient"><span class="ing-quantity">{}</span> {} {}</li>"#,
        format_quantity(quantity),
        encode_text(&ingredient.unit),
        encode_text(&ingredient.description),
    )
}

/// Markup for the recipe detail view
///
/// Quantities are scaled to `servings.current()` and the save button shows
/// the label that flips `saved`.
pub fn recipe_detail(recipe: &Recipe, servings: &Servings, saved: SavedState) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .zip(servings.scaled(&recipe.ingredients))
        .map(|(ingredient, quantity)| ingredient_item(ingredient, quantity))
        .collect::<Vec<_>>()
        .join("\n");

    let owner = if recipe.is_user_owned() {
        r#"<span class="recipe-user">👤</span>"#
    } else {
        ""
    };

    format!(
        r##"<div class="recipe-img-box">
  <img src="{image}" alt="" class="recipe-img" />
  <h1 class="recipe-title">{title}</h1>
</div>
<div class="recipe-text">
  <div class="recipe-actions">
    <p class="recipe-duration">🕒 <span>{cooking_time}</span> minutes</p>
    <div class="recipe-servings-box">
      <p class="recipe-servings">🥣 <span>{servings}</span> servings</p>
      <div class="update-ing-btns">
        <a href="#" class="increase-servings">➕</a>
        <a href="#" class="decrease-servings">➖</a>
      </div>
    </div>
    {owner}
    <a href="#" class="save-recipe">{save_label}</a>
  </div>
  <div class="ingredients">
    <h2 class="ingredients-title">Recipe Ingredients</h2>
    <ul class="recipe-ingredient-list">
{ingredients}
    </ul>
  </div>
  <div class="cook">
    <h2 class="cook-title">How to cook it</h2>
    <p class="cook-text">
      This recipe was carefully designed and tested by
      <span>{publisher}</span>. Please check out directions at their website.
    </p>
    <a href="{source}" target="_blank" class="btn-direction">Directions &rarr;</a>
  </div>
</div>"##,
        image = encode_double_quoted_attribute(&recipe.image_url),
        title = encode_text(&recipe.title),
        cooking_time = recipe.cooking_time,
        servings = servings.current(),
        save_label = saved.button_label(),
        publisher = encode_text(&recipe.publisher),
        source = encode_double_quoted_attribute(&recipe.source_url),
    )
}
