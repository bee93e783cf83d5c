use forkify_client::{Bookmarks, FileStorage, Ingredient, Recipe, SavedState, Storage};

fn recipe(id: &str, key: Option<&str>) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        publisher: "Test Kitchen".to_string(),
        image_url: format!("http://img/{}.jpg", id),
        source_url: format!("http://src/{}", id),
        cooking_time: 15,
        servings: 2,
        ingredients: vec![Ingredient {
            quantity: Some(1.5),
            unit: "cups".to_string(),
            description: "rice".to_string(),
        }],
        key: key.map(String::from),
    }
}

#[test]
fn test_saved_recipes_survive_reload_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let saved = vec![
        recipe("b", None),
        recipe("a", Some("user-key")),
        recipe("c", None),
    ];

    let mut bookmarks =
        Bookmarks::load(Box::new(FileStorage::new(dir.path())), "saved-recipes").unwrap();
    for recipe in &saved {
        assert_eq!(bookmarks.toggle(recipe).unwrap(), SavedState::Saved);
    }
    drop(bookmarks);

    let reloaded =
        Bookmarks::load(Box::new(FileStorage::new(dir.path())), "saved-recipes").unwrap();
    assert_eq!(reloaded.recipes(), saved.as_slice());
}

#[test]
fn test_saving_twice_stores_one_copy() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks =
        Bookmarks::load(Box::new(FileStorage::new(dir.path())), "saved-recipes").unwrap();

    bookmarks.save(&recipe("a", None)).unwrap();
    bookmarks.save(&recipe("a", None)).unwrap();

    let stored = FileStorage::new(dir.path()).get("saved-recipes").unwrap().unwrap();
    let stored: Vec<Recipe> = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_storage_file_removed_when_nothing_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks =
        Bookmarks::load(Box::new(FileStorage::new(dir.path())), "saved-recipes").unwrap();

    bookmarks.toggle(&recipe("a", None)).unwrap();
    assert!(dir.path().join("saved-recipes.json").exists());

    assert_eq!(
        bookmarks.toggle(&recipe("a", None)).unwrap(),
        SavedState::Unsaved
    );
    assert!(!dir.path().join("saved-recipes.json").exists());
}
