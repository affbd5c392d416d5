use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API origin (e.g. "https://carelink.example.com"); empty means same origin
    pub api_origin: String,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Multiplier applied to demo timings; below 1.0 plays faster
    pub demo_speed: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: String::new(),
            api_path: "/api/v1".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
            demo_speed: 1.0,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_origin)) = storage.get_item("carelink_api_origin") {
                    settings.api_origin = api_origin.trim_end_matches('/').to_string();
                }

                if let Ok(Some(api_path)) = storage.get_item("carelink_api_path") {
                    settings.api_path = api_path;
                }

                if let Ok(Some(log_level)) = storage.get_item("carelink_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(speed)) = storage.get_item("carelink_demo_speed") {
                    if let Ok(speed) = speed.parse::<f64>() {
                        if speed > 0.0 {
                            settings.demo_speed = speed;
                        }
                    }
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("carelink_api_origin", &self.api_origin)?;
                storage.set_item("carelink_api_path", &self.api_path)?;
                storage.set_item("carelink_log_level", &format!("{:?}", self.log_level).to_lowercase())?;
                storage.set_item("carelink_demo_speed", &self.demo_speed.to_string())?;
            }
        }
        Ok(())
    }

    /// Get the base API URL (origin + path prefix)
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_origin, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_url("/waitlist"), "/api/v1/waitlist");
    }

    #[test]
    fn test_explicit_origin() {
        let settings = AppSettings {
            api_origin: "http://localhost:3000".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.api_url("/feedback"), "http://localhost:3000/api/v1/feedback");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
