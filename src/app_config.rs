use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    places: Places,
    schools: Schools,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn places(&self) -> &Places {
        &self.places
    }

    pub fn schools(&self) -> &Schools {
        &self.schools
    }
}

#[derive(Debug, Deserialize)]
pub struct Places {
    url: String,
    api_key: String,
    region_qualifier: String,
}

impl Places {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn region_qualifier(&self) -> &str {
        &self.region_qualifier
    }
}

#[derive(Debug, Deserialize)]
pub struct Schools {
    file: String,
}

impl Schools {
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                places: Places {
                    url: "https://places.url/".to_string(),
                    api_key: "key".to_string(),
                    region_qualifier: "Palm Beach County FL".to_string(),
                },
                schools: Schools {
                    file: "schools.txt".to_string(),
                },
            },
        }
    }

    pub fn places_url(mut self, url: String) -> Self {
        self.config.places.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
