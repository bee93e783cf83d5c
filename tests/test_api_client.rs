use forkify_client::{ForkifyClient, Ingredient, NewRecipe, RecipeApi, RecipeError};
use mockito::{Matcher, Server};

fn client(server: &Server, key: Option<&str>) -> ForkifyClient {
    let mut builder = ForkifyClient::builder().base_url(format!("{}/api/v2/recipes", server.url()));
    if let Some(key) = key {
        builder = builder.api_key(key);
    }
    builder.build().unwrap()
}

const RECIPE_BODY: &str = r#"{
    "status": "success",
    "data": {
        "recipe": {
            "publisher": "My Baking Addiction",
            "ingredients": [
                {"quantity": 1, "unit": "", "description": "tbsp. canola or olive oil"},
                {"quantity": 0.5, "unit": "cup", "description": "chopped sweet onion"},
                {"quantity": null, "unit": "", "description": "Salt and pepper"}
            ],
            "source_url": "http://www.mybakingaddiction.com/spicy-chicken-and-pepper-jack-pizza-recipe/",
            "image_url": "http://forkify-api.herokuapp.com/images/FlatBread21of1a180.jpg",
            "title": "Spicy Chicken and Pepper Jack Pizza",
            "servings": 4,
            "cooking_time": 45,
            "id": "5ed6604591c37cdc054bc886"
        }
    }
}"#;

#[tokio::test]
async fn test_search_returns_previews() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/recipes")
        .match_query(Matcher::UrlEncoded("search".into(), "pizza".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "status": "success",
                "results": 2,
                "data": {"recipes": [
                    {"publisher": "101 Cookbooks", "image_url": "http://img/1.jpg", "title": "Best Pizza Dough Ever", "id": "5ed6604591c37cdc054bcac4"},
                    {"publisher": "Closet Cooking", "image_url": "http://img/2.jpg", "title": "Pizza Dip", "id": "5ed6604591c37cdc054bcd09", "key": "user-key"}
                ]}
            }"#,
        )
        .create_async()
        .await;

    let results = client(&server, None).search("pizza").await.unwrap();
    assert_eq!(results.total, 2);
    assert_eq!(results.recipes.len(), 2);
    assert!(!results.recipes[0].is_user_owned());
    assert!(results.recipes[1].is_user_owned());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_without_matches_is_no_results() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v2/recipes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","results":0,"data":{"recipes":[]}}"#)
        .create_async()
        .await;

    let err = client(&server, None).search("xyzzy").await.unwrap_err();
    assert!(matches!(err, RecipeError::NoResults));
    assert_eq!(err.to_string(), "No recipes found. Please try again!");
}

#[tokio::test]
async fn test_search_server_error_is_http_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v2/recipes")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let err = client(&server, None).search("pizza").await.unwrap_err();
    assert!(matches!(err, RecipeError::Http { status: 500 }));
}

#[tokio::test]
async fn test_fail_status_is_api_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v2/recipes/5ed6604591c37cdc054bc999")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"fail","message":"Invalid _id: 5ed6604591c37cdc054bc999"}"#)
        .create_async()
        .await;

    let err = client(&server, None)
        .recipe("5ed6604591c37cdc054bc999")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "An error occurred! Invalid _id: 5ed6604591c37cdc054bc999"
    );
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v2/recipes/abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client(&server, None).recipe("abc").await.unwrap_err();
    assert!(matches!(err, RecipeError::InvalidResponse(_)));
    assert!(err
        .to_string()
        .starts_with("An error occurred! Unexpected response from the recipe service"));
}

#[tokio::test]
async fn test_recipe_missing_fields_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v2/recipes/abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","data":{"recipe":{"id":"abc","title":"T"}}}"#)
        .create_async()
        .await;

    let err = client(&server, None).recipe("abc").await.unwrap_err();
    assert!(matches!(err, RecipeError::InvalidResponse(_)));
    assert!(!err.to_string().contains("Network error"));
}

#[tokio::test]
async fn test_success_without_data_is_api_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v2/recipes/abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success"}"#)
        .create_async()
        .await;

    let err = client(&server, None).recipe("abc").await.unwrap_err();
    assert!(matches!(err, RecipeError::Api { .. }));
}

#[tokio::test]
async fn test_fetch_recipe_with_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/recipes/5ed6604591c37cdc054bc886")
        .match_query(Matcher::UrlEncoded("key".into(), "secret".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RECIPE_BODY)
        .create_async()
        .await;

    let recipe = client(&server, Some("secret"))
        .recipe("5ed6604591c37cdc054bc886")
        .await
        .unwrap();
    assert_eq!(recipe.title, "Spicy Chicken and Pepper Jack Pizza");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.ingredients[1].quantity, Some(0.5));
    assert_eq!(recipe.ingredients[2].quantity, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_posts_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/recipes")
        .match_query(Matcher::UrlEncoded("key".into(), "secret".into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJsonString(
            r#"{"title":"TEST23","servings":4,"ingredients":[{"quantity":0.5,"unit":"kg","description":"Rice"}]}"#
                .to_string(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status":"success","data":{"recipe":{
                "id":"664c8f193e7aa067e94e8297","title":"TEST23","publisher":"TEST23",
                "source_url":"https://example.com","image_url":"https://example.com/i.jpg",
                "cooking_time":23,"servings":4,"key":"secret",
                "ingredients":[{"quantity":0.5,"unit":"kg","description":"Rice"}]
            }}}"#,
        )
        .create_async()
        .await;

    let new_recipe = NewRecipe {
        title: "TEST23".to_string(),
        publisher: "TEST23".to_string(),
        source_url: "https://example.com".to_string(),
        image_url: "https://example.com/i.jpg".to_string(),
        cooking_time: 23,
        servings: 4,
        ingredients: vec![Ingredient {
            quantity: Some(0.5),
            unit: "kg".to_string(),
            description: "Rice".to_string(),
        }],
    };

    let recipe = client(&server, Some("secret"))
        .upload(&new_recipe)
        .await
        .unwrap();
    assert_eq!(recipe.id, "664c8f193e7aa067e94e8297");
    assert!(recipe.is_user_owned());
    mock.assert_async().await;
}
