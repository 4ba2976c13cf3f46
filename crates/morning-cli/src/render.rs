//! Plain-text rendering of each section's output area.

use morning_routine::{Ingredient, MenuSelection, Mood, ScheduleView, TimerState, Video};
use morning_weather::OutfitAdvice;

const PROGRESS_WIDTH: usize = 30;

fn unit_symbol(units: &str) -> &'static str {
    match units {
        "imperial" => "°F",
        "standard" => "K",
        _ => "°C",
    }
}

pub fn weather(advice: &OutfitAdvice, units: &str) -> String {
    format!(
        "🌡 Current temperature: {}{}\n☁️ Weather: {}\n\n👕 Today's outfit\n  {}\n  {}\n",
        advice.reading.temperature,
        unit_symbol(units),
        advice.reading.description,
        advice.tier.caption(),
        advice.tier.image_url(),
    )
}

pub fn ingredient_grid(ingredients: &[Ingredient]) -> String {
    let mut out = String::from("Select the ingredients you have:\n");
    for ingredient in ingredients {
        out.push_str(&format!(
            "  [ ] {:<8} {}  ({} kcal)\n",
            ingredient.key, ingredient.label, ingredient.calories
        ));
    }
    out
}

pub fn breakfast(selection: &MenuSelection) -> String {
    let mut out = String::from("🧑‍🍳 Suggested menus:\n");
    for menu in &selection.menus {
        out.push_str(&format!("- {}\n", menu));
    }
    out.push_str(&format!(
        "🔥 Estimated calories (100g-equivalent total): {} kcal\n",
        selection.total_calories
    ));
    if !selection.unknown.is_empty() {
        out.push_str(&format!(
            "   (not in catalog, ignored: {})\n",
            selection.unknown.join(", ")
        ));
    }
    out
}

pub fn mood_list() -> String {
    let mut out = String::from("How are you feeling?\n");
    for mood in Mood::ALL {
        out.push_str(&format!("  {:<9} {}\n", mood.key(), mood.label()));
    }
    out
}

pub fn videos(mood: Mood, videos: &[Video]) -> String {
    let mut out = format!("🎬 {}\n", mood.label());
    for video in videos {
        out.push_str(&format!("\n{}\n  ▶ {}\n", video.title, video.url));
    }
    out
}

/// One countdown line: progress bar, percentage and remaining time
pub fn countdown_line(state: &TimerState) -> String {
    let filled = (state.progress() * PROGRESS_WIDTH as f64).floor() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}] {:>3}%  Remaining: {}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        (state.progress() * 100.0).floor() as u32,
        state.remaining_display(),
    )
}

pub fn countdown_complete() -> String {
    "✅ Time's up! You're ready to go!\n🎈 🎉 🎈 🎉 🎈\n".to_string()
}

pub fn schedule(view: &ScheduleView) -> String {
    let mut out = format!("📅 Date: {}\n📝 Today's schedule\n", view.date);
    for entry in &view.entries {
        out.push_str(&format!("✅ {}\n", entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use morning_routine::{plan_breakfast, IngredientCatalog};
    use morning_weather::{OutfitTier, WeatherReading};

    #[test]
    fn weather_shows_reading_and_tier() {
        let advice = OutfitAdvice::from(WeatherReading {
            temperature: 12.5,
            description: "曇り".into(),
        });
        let out = weather(&advice, "metric");

        assert!(out.contains("12.5°C"));
        assert!(out.contains("曇り"));
        assert!(out.contains(OutfitTier::LightJacket.caption()));
        assert!(out.contains(OutfitTier::LightJacket.image_url()));
    }

    #[test]
    fn weather_unit_follows_config() {
        let advice = OutfitAdvice::from(WeatherReading {
            temperature: 70.0,
            description: "clear".into(),
        });
        assert!(weather(&advice, "imperial").contains("70°F"));
    }

    #[test]
    fn grid_lists_every_ingredient() {
        let out = ingredient_grid(IngredientCatalog::all());
        for ingredient in IngredientCatalog::all() {
            assert!(out.contains(ingredient.key));
            assert!(out.contains(ingredient.label));
        }
    }

    #[test]
    fn breakfast_lists_menus_and_total() {
        let selection = plan_breakfast(["banana", "natto"]).unwrap();
        let out = breakfast(&selection);

        assert!(out.contains("- バナナスムージー\n- バナナパンケーキ\n"));
        assert!(out.contains("90 kcal"));
        assert!(out.contains("ignored: natto"));
    }

    #[test]
    fn videos_show_title_then_link() {
        let out = videos(Mood::Focus, Mood::Focus.videos());
        let title = out.find("Lo-fi作業用BGM").unwrap();
        let link = out.find("https://www.youtube.com/watch?v=5qap5aO4i9A").unwrap();
        assert!(title < link);
    }

    #[test]
    fn countdown_line_at_start_and_half() {
        let start = TimerState {
            total_seconds: 60,
            elapsed_seconds: 0,
        };
        assert_eq!(
            countdown_line(&start),
            format!("[{}]   0%  Remaining: 1:00", "-".repeat(30))
        );

        let half = TimerState {
            total_seconds: 60,
            elapsed_seconds: 30,
        };
        let line = countdown_line(&half);
        assert!(line.contains(&"#".repeat(15)));
        assert!(line.contains(" 50%"));
        assert!(line.ends_with("0:30"));
    }

    #[test]
    fn schedule_prefixes_checkmarks() {
        let view = ScheduleView {
            date: "2026-10-18".into(),
            entries: vec!["buy milk".into(), "read book".into()],
        };
        let out = schedule(&view);
        assert!(out.starts_with("📅 Date: 2026-10-18\n"));
        assert!(out.ends_with("✅ buy milk\n✅ read book\n"));
    }
}
