//! One function per section. Each runs a single activation to completion and
//! returns the section's output area as text. The timer draws live instead.

use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use std::time::Duration;

use morning_core::{AppError, Config, WeatherConfig};
use morning_routine::{
    plan_breakfast, run_countdown, videos_for_mood, CountdownDisplay, IngredientCatalog, Mood,
    ScheduleForm, TimerState,
};
use morning_weather::{ProviderOptions, WeatherProvider};

use crate::error_mapping::IntoAppError;
use crate::render;

pub fn provider_options(config: &WeatherConfig) -> ProviderOptions {
    ProviderOptions {
        base_url: config.base_url.clone(),
        units: config.units.clone(),
        lang: config.lang.clone(),
        timeout: config.timeout_secs.map(Duration::from_secs),
    }
}

pub async fn weather(config: &Config, city: &str) -> Result<String, AppError> {
    let provider = WeatherProvider::new(provider_options(&config.weather))
        .map_err(IntoAppError::into_app_error)?;

    // Read at call time so a key exported after startup is still picked up.
    let api_key = config.weather.api_key();

    let advice = provider
        .fetch_outfit_advice(city, &api_key)
        .await
        .map_err(IntoAppError::into_app_error)?;

    Ok(render::weather(&advice, &config.weather.units))
}

pub fn ingredients() -> String {
    render::ingredient_grid(IngredientCatalog::all())
}

pub fn breakfast(selected: &[String]) -> Result<String, AppError> {
    let selection = plan_breakfast(selected).map_err(IntoAppError::into_app_error)?;
    Ok(render::breakfast(&selection))
}

pub fn moods() -> String {
    render::mood_list()
}

pub fn mood(mood: Mood) -> String {
    render::videos(mood, videos_for_mood(mood))
}

/// Progress bar and remaining-time line, redrawn in place
struct TerminalCountdown<W: Write> {
    out: W,
}

impl<W: Write> CountdownDisplay for TerminalCountdown<W> {
    fn tick(&mut self, state: &TimerState) {
        if let Err(e) = write!(self.out, "\r{}", render::countdown_line(state))
            .and_then(|()| self.out.flush())
        {
            tracing::debug!("Failed to draw countdown: {}", e);
        }
    }

    fn complete(&mut self) {
        if let Err(e) = write!(self.out, "\n{}", render::countdown_complete())
            .and_then(|()| self.out.flush())
        {
            tracing::debug!("Failed to draw completion: {}", e);
        }
    }
}

pub async fn timer(minutes: u32) -> Result<(), AppError> {
    println!("🕒 Timer started: {} min", minutes);
    let mut display = TerminalCountdown {
        out: std::io::stdout(),
    };
    run_countdown(minutes, &mut display)
        .await
        .map_err(IntoAppError::into_app_error)
}

/// Read the text area from `file`, or from stdin until EOF (the submit).
pub fn schedule(file: Option<&Path>) -> Result<String, AppError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter today's plans, one per line. Press Ctrl-D to show them.");
            }
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        }
    };

    let mut form = ScheduleForm::new();
    form.edit(text);
    let view = form.submit(chrono::Local::now().date_naive());

    Ok(render::schedule(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use morning_core::WeatherError;
    use morning_weather::OutfitTier;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.weather.base_url = format!("{}/weather", server.uri());
        config
    }

    #[test]
    fn provider_options_follow_config() {
        let config = WeatherConfig {
            lang: "en".into(),
            timeout_secs: Some(7),
            ..WeatherConfig::default()
        };
        let options = provider_options(&config);

        assert_eq!(options.base_url, config.base_url);
        assert_eq!(options.units, "metric");
        assert_eq!(options.lang, "en");
        assert_eq!(options.timeout, Some(Duration::from_secs(7)));
    }

    #[test]
    fn breakfast_lists_selected_ingredients() {
        let text = breakfast(&["egg".to_string()]).unwrap();
        assert_eq!(text, render::breakfast(&plan_breakfast(["egg"]).unwrap()));
    }

    #[test]
    fn breakfast_without_selection_is_warning() {
        let err = breakfast(&[]).unwrap_err();
        assert!(err.is_warning());
    }

    #[test]
    fn schedule_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = schedule(Some(&dir.path().join("absent.txt"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn schedule_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("today.txt");
        std::fs::write(&path, "stretch\n\n  pack lunch \n").unwrap();

        let today = chrono::Local::now().date_naive().format("%Y-%m-%d");
        assert_eq!(
            schedule(Some(&path)).unwrap(),
            format!("📅 Date: {}\n📝 Today's schedule\n✅ stretch\n✅ pack lunch\n", today)
        );
    }

    #[test]
    fn terminal_countdown_draws_in_place() {
        let mut display = TerminalCountdown { out: Vec::new() };
        display.tick(&TimerState {
            total_seconds: 60,
            elapsed_seconds: 59,
        });
        display.complete();

        let text = String::from_utf8(display.out).unwrap();
        assert!(text.starts_with('\r'));
        assert!(text.contains("Remaining: 0:01"));
        assert!(text.contains("Time's up"));
    }

    #[tokio::test]
    async fn weather_with_empty_city_is_warning() {
        let err = weather(&Config::default(), "  ").await.unwrap_err();
        assert!(err.is_warning());
    }

    #[tokio::test]
    async fn weather_rejected_by_service_shows_no_outfit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"cod":401,"message":"Invalid API key."}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server);
        let err = weather(&config, "Tokyo").await.unwrap_err();

        assert!(!err.is_warning());
        assert!(matches!(err, AppError::Weather(WeatherError::Unavailable(_))));
        assert_eq!(
            err.user_message(),
            "Could not retrieve weather information. Check the city name or API key."
        );
    }

    #[tokio::test]
    async fn weather_renders_outfit_for_reading() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"main":{"temp":5.0},"weather":[{"description":"snow"}]}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server);
        let text = weather(&config, "Sapporo").await.unwrap();

        assert!(text.contains("snow"));
        assert!(text.contains(OutfitTier::Heavy.caption()));
        assert!(text.contains(OutfitTier::Heavy.image_url()));
    }
}
