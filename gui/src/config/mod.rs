// GUI configuration, mirroring assets/config/default.json.
use engine::EngineSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineSettings,
    pub form: FormSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_direction")]
    pub direction: String, // "rtl" or "ltr"
}

fn default_direction() -> String {
    "ltr".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HeaderFieldSetting {
    pub name: String,
    pub label: String,
    #[serde(default = "default_input_type")]
    pub input_type: String,
    #[serde(default)]
    pub required: bool,
}

fn default_input_type() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormSettings {
    pub header_fields: Vec<HeaderFieldSetting>,
    #[serde(default)]
    pub initial_rows: usize,
    #[serde(default)]
    pub tax_rate: String,
    #[serde(default)]
    pub discount: bool,
    pub required_message: String,
}

impl AppConfig {
    /// The configuration bundled into the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.engine.validate()?;
        Ok(config)
    }

    pub fn required_fields(&self) -> Vec<String> {
        self.form
            .header_fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn input_type_for(&self, name: &str) -> String {
        self.form
            .header_fields
            .iter()
            .find(|f| f.name == name)
            .map_or_else(default_input_type, |f| f.input_type.clone())
    }

    pub fn label_for(&self, name: &str) -> Option<&str> {
        self.form
            .header_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.label.as_str())
    }
}
