//! `pantry recipes`, `show` and `facets` against the sample catalog.

use pantry_testing::{TestWorld, assertions};

#[test]
fn test_all_recipes_keep_catalog_order() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["recipes"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_recipe_names(
        &json,
        &[
            "Cheese Omelette",
            "Banana Pancakes",
            "Egg Fried Rice",
            "Tomato Soup",
            "Mushroom Risotto",
            "Fruit Salad",
        ],
    )
    .unwrap();
    assert_eq!(json["content"]["total_count"], 6);
    assert!(json["content"]["recipes"][0].get("matching_count").is_none());
}

#[test]
fn test_ingredients_rank_by_matching_count() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["recipes", "-i", "egg", "-i", "Rice"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_recipe_names(
        &json,
        &[
            "Egg Fried Rice",
            "Cheese Omelette",
            "Banana Pancakes",
            "Mushroom Risotto",
        ],
    )
    .unwrap();
    assertions::assert_matching_counts(&json, &[2, 1, 1, 1]).unwrap();
}

#[test]
fn test_legacy_single_category_is_filterable() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["recipes", "--category", "Breakfast"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_recipe_names(&json, &["Cheese Omelette", "Banana Pancakes"]).unwrap();
}

#[test]
fn test_category_and_ingredients_combine() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["recipes", "--category", "dinner", "-i", "mushroom"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_recipe_names(&json, &["Mushroom Risotto"]).unwrap();
    assertions::assert_matching_counts(&json, &[1]).unwrap();
}

#[test]
fn test_plain_list_output() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["recipes", "--category", "dinner"]).unwrap();
    assert!(result.success());

    let expected = "\
✓ 2 recipes

Filter: category=dinner

  #3  Egg Fried Rice  (dinner, quick)
      Leftover rice, crisped and tossed with egg.
  #5  Mushroom Risotto  (dinner, vegetarian)
      Creamy arborio rice with mushrooms.
";
    assert_eq!(result.stdout(), expected);
}

#[test]
fn test_no_match_suggests_next_steps() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["recipes", "--category", "dessert", "-i", "rice"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "info");
    assert_eq!(json["badge"]["label"], "No recipes match");
    assert_eq!(json["suggestions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_show_prints_full_recipe() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["show", "2"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.starts_with("Banana Pancakes  #2\n"));
    assert!(out.contains("Prep: 5 min | Cook: 10 min | Serves: 2"));
    assert!(out.contains("  - 1 banana\n"));
    assert!(out.contains("  - flour\n"));
    assert!(out.contains("  2. Fry small rounds until golden on both sides.\n"));
}

#[test]
fn test_show_unknown_id_fails() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["show", "99"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("No recipe with id 99"));
}

#[test]
fn test_facets_list_categories_and_groups() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["facets"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    let categories: Vec<&str> = json["content"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["label"].as_str())
        .collect();
    assert_eq!(categories[0], "all");
    assert!(categories.contains(&"breakfast"));
    assert!(categories.contains(&"vegetarian"));

    let groups: Vec<&str> = json["content"]["ingredient_groups"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|g| g["type"].as_str())
        .collect();
    assert!(groups.contains(&"dairy"));
    assert!(groups.contains(&"other"));
}

#[test]
fn test_missing_catalog_is_an_error() {
    let world = TestWorld::new();

    let result = world.run(&["recipes"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("No recipe catalog found"));
}
