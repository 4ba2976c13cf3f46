use crate::types::{CurrentWeatherResponse, OutfitAdvice, WeatherError, WeatherReading};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Request parameters that stay fixed between calls
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    pub base_url: String,
    pub units: String,
    pub lang: String,
    pub timeout: Option<Duration>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            units: "metric".to_string(),
            lang: "ja".to_string(),
            timeout: None,
        }
    }
}

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// One request per call: no retry, no cache.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    options: ProviderOptions,
}

impl WeatherProvider {
    pub fn new(options: ProviderOptions) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client: Arc::new(client),
            options,
        })
    }

    /// Fetch the current reading for `city`.
    ///
    /// The city is trimmed first; an empty name fails with
    /// [`WeatherError::EmptyCity`] before any request is made.
    #[instrument(skip(self, api_key), level = "info")]
    pub async fn fetch_reading(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<WeatherReading, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let response = self
            .client
            .get(&self.options.base_url)
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.options.units.as_str()),
                ("lang", self.options.lang.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Weather API returned status {}", status);
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let reading = WeatherReading::try_from(body)?;
        tracing::info!(
            "Weather for {}: {}°, {}",
            city,
            reading.temperature,
            reading.description
        );
        Ok(reading)
    }

    /// Fetch the reading for `city` and pick the matching outfit tier.
    pub async fn fetch_outfit_advice(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<OutfitAdvice, WeatherError> {
        self.fetch_reading(city, api_key).await.map(OutfitAdvice::from)
    }
}
