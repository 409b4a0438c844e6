//! Assertions against `--format json` command output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Recipe names from `content.recipes`, in output order.
pub fn recipe_names(json: &Value) -> Result<Vec<String>> {
    let recipes = json["content"]["recipes"]
        .as_array()
        .context("Expected 'content.recipes' array in JSON")?;

    recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            recipe["name"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Recipe {} missing name", i))
        })
        .collect()
}

/// Assert the exact recipe order in `content.recipes`.
pub fn assert_recipe_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names = recipe_names(json)?;
    if names != expected {
        anyhow::bail!("Expected recipes {:?}, got {:?}", expected, names);
    }
    Ok(())
}

/// Assert every entry in `content.recipes` carries the given match count.
pub fn assert_matching_counts(json: &Value, expected: &[u64]) -> Result<()> {
    let recipes = json["content"]["recipes"]
        .as_array()
        .context("Expected 'content.recipes' array in JSON")?;

    let counts: Vec<Option<u64>> = recipes
        .iter()
        .map(|recipe| recipe["matching_count"].as_u64())
        .collect();
    let wanted: Vec<Option<u64>> = expected.iter().copied().map(Some).collect();

    if counts != wanted {
        anyhow::bail!("Expected matching counts {:?}, got {:?}", wanted, counts);
    }
    Ok(())
}
