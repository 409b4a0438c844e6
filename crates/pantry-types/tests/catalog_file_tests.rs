use pantry_types::*;
use std::fs::File;
use std::io::Write;

#[test]
fn test_catalog_from_file_reader() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    let mut file = File::create(&path).unwrap();
    write!(
        file,
        r#"{{"recipes": [
            {{"id": 1, "name": "Pancakes", "categories": ["Breakfast"], "prepTime": "10 min",
              "ingredients": [{{"name": "Flour", "amount": "200g", "type": "pantry"}}]}},
            {{"id": 2, "name": "Stew", "category": "dinner", "servings": 6}}
        ]}}"#
    )
    .unwrap();

    let catalog = Catalog::from_reader(File::open(&path).unwrap()).unwrap();

    assert_eq!(catalog.len(), 2);
    let pancakes = catalog.get(RecipeId::new(1)).unwrap();
    assert_eq!(pancakes.prep_time, "10 min");
    assert!(pancakes.has_ingredient("flour"));

    let stew = catalog.get(RecipeId::new(2)).unwrap();
    assert_eq!(stew.servings, "6");
    assert!(stew.ingredients.is_empty());

    assert_eq!(
        catalog.facets().category_tabs(),
        vec!["all", "breakfast", "dinner"]
    );
}

#[test]
fn test_catalog_file_roundtrip_keeps_order() {
    let catalog = Catalog::new(vec![
        Recipe::new(3, "C"),
        Recipe::new(1, "A"),
        Recipe::new(2, "B"),
    ]);

    let json = serde_json::to_string(&catalog.to_file()).unwrap();
    let reloaded = Catalog::from_json_str(&json).unwrap();

    let ids: Vec<u32> = reloaded.recipes().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}
