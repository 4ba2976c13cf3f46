//! Ingredient-to-menu planner.
//!
//! Each ingredient carries a flat calorie value (a 100g-equivalent figure),
//! so the total depends only on which ingredients are selected, never on
//! which menus they unlock.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::RoutineError;

/// One checkbox in the ingredient grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// ASCII name accepted on the command line
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Candidate menus, in catalog order
    pub menus: &'static [&'static str],
    /// Calories per 100g-equivalent
    pub calories: u32,
}

static INGREDIENTS: [Ingredient; 8] = [
    Ingredient {
        key: "egg",
        label: "卵",
        menus: &["オムレツ", "ゆで卵サラダ", "スクランブルエッグ"],
        calories: 150,
    },
    Ingredient {
        key: "tomato",
        label: "トマト",
        menus: &["トマトサラダ", "カプレーゼ", "トマトスープ"],
        calories: 20,
    },
    Ingredient {
        key: "chicken",
        label: "鶏肉",
        menus: &["チキンソテー", "鶏の照り焼き", "鶏肉サラダ"],
        calories: 200,
    },
    Ingredient {
        key: "bread",
        label: "パン",
        menus: &["トースト", "サンドイッチ", "フレンチトースト"],
        calories: 250,
    },
    Ingredient {
        key: "avocado",
        label: "アボカド",
        menus: &["アボカドトースト", "アボカドサラダ"],
        calories: 160,
    },
    Ingredient {
        key: "yogurt",
        label: "ヨーグルト",
        menus: &["ヨーグルトとフルーツ", "ヨーグルトパフェ"],
        calories: 60,
    },
    Ingredient {
        key: "bacon",
        label: "ベーコン",
        menus: &["ベーコン＆エッグ", "ベーコン炒め"],
        calories: 300,
    },
    Ingredient {
        key: "banana",
        label: "バナナ",
        menus: &["バナナスムージー", "バナナパンケーキ"],
        calories: 90,
    },
];

/// Read-only view over the fixed ingredient table
pub struct IngredientCatalog;

impl IngredientCatalog {
    /// All ingredients in grid order
    pub fn all() -> &'static [Ingredient] {
        &INGREDIENTS
    }

    /// Look up by key (case-insensitive) or by label
    pub fn find(name: &str) -> Option<&'static Ingredient> {
        let name = name.trim();
        INGREDIENTS
            .iter()
            .find(|i| i.label == name || i.key.eq_ignore_ascii_case(name))
    }
}

/// Menus and calorie total for one planner activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSelection {
    /// Deduplicated union of candidate menus, sorted ascending
    pub menus: Vec<String>,
    /// Sum of each selected ingredient's calories, counted once
    pub total_calories: u32,
    /// Selected names with no catalog entry; they contributed nothing
    pub unknown: Vec<String>,
}

/// Plan breakfast from the selected ingredients.
///
/// A name may be an ingredient key or its label; both resolve to the same
/// entry and count once. Unknown names add no menus and no calories.
pub fn plan_breakfast<I, S>(selected: I) -> Result<MenuSelection, RoutineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut known: Vec<&'static Ingredient> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    let mut any = false;

    for name in selected {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        any = true;

        match IngredientCatalog::find(name) {
            Some(ingredient) => {
                if !known.iter().any(|k| k.key == ingredient.key) {
                    known.push(ingredient);
                }
            }
            None => {
                tracing::debug!("Ingredient '{}' is not in the catalog", name);
                if !unknown.iter().any(|u| u == name) {
                    unknown.push(name.to_string());
                }
            }
        }
    }

    if !any {
        return Err(RoutineError::NoIngredients);
    }

    let menus: BTreeSet<&'static str> = known
        .iter()
        .flat_map(|i| i.menus.iter().copied())
        .collect();
    let total_calories = known.iter().map(|i| i.calories).sum();

    Ok(MenuSelection {
        menus: menus.into_iter().map(str::to_string).collect(),
        total_calories,
        unknown,
    })
}
