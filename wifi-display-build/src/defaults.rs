//! Built-in default settings.

use crate::settings::{Settings, Value};

/// Default value of every setting the header template references.
///
/// The order of this table is the order of the effective configuration.
pub const DEFAULTS: &[(&str, &str)] = &[
    // OLED display bus
    ("OLED_I2C_ADDRESS", "0x3C"),
    ("OLED_RESET_PIN", "-1"),
    ("OLED_SDA_PIN", "21"),
    ("OLED_SCL_PIN", "22"),
    // Display geometry
    ("SCREEN_WIDTH", "128"),
    ("SCREEN_HEIGHT", "64"),
    // Input pins
    ("POT_X_PIN", "34"),
    ("POT_Y_PIN", "35"),
    ("BTN_SELECT", "27"),
    // Potentiometer tuning
    ("POT_DEADZONE", "100"),
    ("POT_CENTER", "2048"),
    ("POT_SENSITIVITY", "3"),
    ("MOVE_DELAY", "150"),
    // Power management
    ("SLEEP_DURATION_SECONDS", "300"),
    ("WIFI_TIMEOUT_MS", "15000"),
];

/// Default settings.
pub fn defaults() -> Settings {
    let mut settings = Settings::new();
    for (name, value) in DEFAULTS {
        settings.insert(*name, Value::classify(value));
    }
    settings
}

/// Effective configuration: the defaults overlaid with `overrides`.
///
/// Settings not known to the defaults are kept after the known ones.
pub fn effective(overrides: &Settings) -> Settings {
    let mut settings = defaults();
    for (name, _) in overrides.iter().filter(|(name, _)| !settings.contains(name)) {
        log::debug!("setting {name} is not used by the header template");
    }
    settings.merge(overrides);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse;

    #[test]
    fn defaults_are_numeric() {
        for (name, value) in defaults().iter() {
            assert!(!matches!(value, Value::Str(_)), "default of {name} is not numeric");
        }
    }

    #[test]
    fn override_keeps_order() {
        let settings = effective(&parse("EXTRA=1\nBTN_SELECT=99\n"));
        let names: Vec<_> = settings.iter().map(|(n, _)| n).collect();

        assert_eq!(names.len(), DEFAULTS.len() + 1);
        assert_eq!(names.last(), Some(&"EXTRA"));
        assert_eq!(names[8], "BTN_SELECT");
        assert_eq!(settings.get("BTN_SELECT"), Some(&Value::Int("99".into())));
    }
}
