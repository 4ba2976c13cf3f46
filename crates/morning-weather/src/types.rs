use serde::{Deserialize, Serialize};

/// Below this temperature (°C) a heavy coat is suggested
pub const HEAVY_BELOW_CELSIUS: f64 = 10.0;
/// Below this temperature (°C) a light jacket is suggested
pub const LIGHT_JACKET_BELOW_CELSIUS: f64 = 20.0;

/// Outfit recommendation selected by temperature threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitTier {
    Heavy,
    LightJacket,
    TShirt,
}

impl OutfitTier {
    /// Select the tier for a temperature in °C.
    ///
    /// `t < 10` is Heavy, `10 <= t < 20` is LightJacket, everything else
    /// (including NaN) is TShirt.
    pub fn from_temperature(celsius: f64) -> Self {
        if celsius < HEAVY_BELOW_CELSIUS {
            Self::Heavy
        } else if celsius < LIGHT_JACKET_BELOW_CELSIUS {
            Self::LightJacket
        } else {
            Self::TShirt
        }
    }

    pub fn image_url(&self) -> &'static str {
        match self {
            Self::Heavy => "https://cancam.jp/wp-content/uploads/2018/12/25/219.jpg",
            Self::LightJacket => "https://cancam.jp/wp-content/uploads/2019/10/30/214.jpg",
            Self::TShirt => "https://img-more.hpplus.jp/w=952,q=75,a=0,f=webp:auto,through=gif/image/b0/b0805928-995b-45b8-b919-eaa2e82f5259-2048x1152.jpg",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Self::Heavy => "A thick coat is recommended. Keep warm!",
            Self::LightJacket => "A light jacket should be just right.",
            Self::TShirt => "A T-shirt will be comfortable!",
        }
    }
}

/// Current conditions as reported by the weather service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in the requested unit system (°C for metric)
    pub temperature: f64,
    pub description: String,
}

/// A reading paired with the outfit it calls for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitAdvice {
    pub reading: WeatherReading,
    pub tier: OutfitTier,
}

impl From<WeatherReading> for OutfitAdvice {
    fn from(reading: WeatherReading) -> Self {
        let tier = OutfitTier::from_temperature(reading.temperature);
        Self { reading, tier }
    }
}

// OpenWeatherMap response shape; only `main.temp` and `weather[0]` are read.

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainBlock {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionBlock {
    pub description: String,
}

impl TryFrom<CurrentWeatherResponse> for WeatherReading {
    type Error = WeatherError;

    fn try_from(resp: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let description = resp
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| WeatherError::Parse("response has no weather entries".into()))?;

        Ok(Self {
            temperature: resp.main.temp,
            description,
        })
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City name is empty")]
    EmptyCity,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}
