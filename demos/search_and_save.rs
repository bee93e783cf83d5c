//! Search, page through results, open a recipe, scale it and save it
//!
//! Saved recipes go to a scratch directory so the demo leaves your real
//! bookmarks alone.

use forkify_client::format::format_quantity;
use forkify_client::{FileStorage, RecipeApp, Region};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scratch = std::env::temp_dir().join("forkify-demo");
    let mut app = RecipeApp::builder()
        .storage(FileStorage::new(&scratch))
        .items_per_page(5)
        .build()?;

    println!("=== Search ===");
    app.search("pizza").await?;
    for recipe in app.visible_results() {
        println!("  {} {}", recipe.id, recipe.title);
    }

    if app.next_page() {
        if let Some(page) = app.pagination() {
            println!("\n=== Page {} of {} ===", page.page_number(), page.page_count());
        }
        for recipe in app.visible_results() {
            println!("  {} {}", recipe.id, recipe.title);
        }
    }

    let Some(first) = app.visible_results().first().map(|r| r.id.clone()) else {
        return Ok(());
    };

    println!("\n=== Recipe, scaled to 8 servings ===");
    app.open_recipe(&first).await?;
    app.set_servings(8);
    if let Some(detail) = app.detail() {
        println!("{}", detail.recipe().title);
        for (ingredient, quantity) in detail
            .recipe()
            .ingredients
            .iter()
            .zip(detail.scaled_quantities())
        {
            println!(
                "  - {} {} {}",
                format_quantity(quantity),
                ingredient.unit,
                ingredient.description
            );
        }
    }

    println!("\n=== Save ===");
    app.toggle_bookmark()?;
    println!("{} saved recipes in {}", app.bookmarks().len(), scratch.display());
    if let Some(message) = app.message(Region::Saved) {
        println!("{}", message.text);
    }

    Ok(())
}
