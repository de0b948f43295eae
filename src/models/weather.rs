//! Current weather payload (`/weather.ashx`)

use serde::{Deserialize, Serialize};

use super::{first_value, parse_number, TextValue};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub data: Option<WeatherData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherData {
    #[serde(default)]
    pub request: Vec<RequestEcho>,
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
    /// Provider-level failures, delivered with a 200 status
    #[serde(default)]
    pub error: Vec<ProviderError>,
}

/// The location the provider resolved the query to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEcho {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentCondition {
    #[serde(default)]
    pub observation_time: Option<String>,
    #[serde(default, rename = "temp_C")]
    pub temp_c: Option<String>,
    #[serde(default, rename = "FeelsLikeC")]
    pub feels_like_c: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default, rename = "windspeedKmph")]
    pub wind_speed_kmph: Option<String>,
    #[serde(default, rename = "winddir16Point")]
    pub wind_direction: Option<String>,
    #[serde(default, rename = "weatherCode")]
    pub weather_code: Option<String>,
    #[serde(default, rename = "weatherDesc")]
    pub weather_desc: Vec<TextValue>,
    #[serde(default, rename = "weatherIconUrl")]
    pub weather_icon_url: Vec<TextValue>,
}

impl WeatherResponse {
    pub fn current_condition(&self) -> Option<&CurrentCondition> {
        self.data.as_ref()?.current_condition.first()
    }

    pub fn resolved_location(&self) -> Option<&str> {
        self.data.as_ref()?.request.first()?.query.as_deref()
    }

    /// First provider error message, if the provider reported one.
    pub fn provider_error(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .error
            .iter()
            .map(|e| e.msg.as_str())
            .find(|m| !m.is_empty())
    }
}

impl CurrentCondition {
    pub fn temperature_c(&self) -> Option<i32> {
        parse_number(self.temp_c.as_deref())
    }

    pub fn feels_like(&self) -> Option<i32> {
        parse_number(self.feels_like_c.as_deref())
    }

    pub fn humidity_pct(&self) -> Option<u8> {
        parse_number(self.humidity.as_deref())
    }

    pub fn wind_speed(&self) -> Option<u32> {
        parse_number(self.wind_speed_kmph.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        first_value(&self.weather_desc)
    }

    pub fn icon_url(&self) -> Option<&str> {
        first_value(&self.weather_icon_url)
    }
}
