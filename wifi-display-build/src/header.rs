//! Configuration header rendering.

use std::fmt::Display;

use crate::{settings::Settings, Error, Result};

/// Include guard of the generated header.
pub const INCLUDE_GUARD: &str = "CONFIG_H";

const RULE: &str = "========================================";

/// Line of the header template.
enum Line {
    /// Banner comment block.
    Banner(&'static str),
    /// Single comment line.
    Comment(&'static str),
    /// Empty line.
    Blank,
    /// Macro whose value is taken from the configuration.
    Setting(&'static str, &'static str),
    /// Macro with a fixed value.
    Literal(&'static str, &'static str, &'static str),
}

use Line::*;

const TEMPLATE: &[Line] = &[
    Banner("PIN CONFIGURATION"),
    Comment("Auto-generated from .env.local"),
    Comment("Do not edit directly - edit .env.local and regenerate"),
    Blank,
    Comment("OLED Display Configuration"),
    Setting("OLED_I2C_ADDRESS", "I2C address for SSD1306 OLED"),
    Setting("OLED_RESET_PIN", "Reset pin (-1 if no reset pin)"),
    Setting("OLED_SDA_PIN", "I2C SDA pin"),
    Setting("OLED_SCL_PIN", "I2C SCL pin"),
    Blank,
    Comment("Display Dimensions"),
    Setting("SCREEN_WIDTH", ""),
    Setting("SCREEN_HEIGHT", ""),
    Blank,
    Comment("Input Control Pins"),
    Setting("POT_X_PIN", "Horizontal potentiometer"),
    Setting("POT_Y_PIN", "Vertical potentiometer"),
    Setting("BTN_SELECT", "Selection button"),
    Blank,
    Banner("HARDWARE SETTINGS"),
    Blank,
    Comment("Potentiometer Configuration"),
    Setting("POT_DEADZONE", "Deadzone around center to prevent jitter"),
    Setting("POT_CENTER", "Center value for 12-bit ADC (4096/2)"),
    Setting("POT_SENSITIVITY", "Divisor for movement speed"),
    Setting("MOVE_DELAY", "Delay between movements in milliseconds"),
    Blank,
    Comment("Display Text Configuration"),
    Literal("CHARSIZE_INPUT_X", "7", ""),
    Literal("CHARSIZE_INPUT_Y", "8", ""),
    Blank,
    Comment("Special Characters for Keyboard"),
    Literal("SELECTED_CHAR", "8", ""),
    Literal("REMOVE_CHAR", "26", ""),
    Literal("RIGHT_CHAR", "14", ""),
    Literal("LEFT_CHAR", "15", ""),
    Literal("NEXT_CHAR", "2", ""),
    Literal("SPACE_CHAR", "32", ""),
    Blank,
    Banner("POWER MANAGEMENT SETTINGS"),
    Blank,
    Comment("Sleep Configuration"),
    Setting("SLEEP_DURATION_SECONDS", "Sleep duration in seconds"),
    Setting("WIFI_TIMEOUT_MS", "WiFi connection timeout"),
    Blank,
    Banner("WIFI SETTINGS"),
    Blank,
    Literal("WIFI_NAMESPACE", "\"wifi-creds\"", "Preferences namespace for WiFi credentials"),
    Literal("WIFI_CONNECTION_TIMEOUT", "10000", "Default WiFi connection timeout in ms"),
    Blank,
];

/// Names of all settings the header template takes from the configuration.
pub fn required_settings() -> impl Iterator<Item = &'static str> {
    TEMPLATE.iter().filter_map(|line| match line {
        Setting(name, _) => Some(*name),
        _ => None,
    })
}

fn define(name: &str, value: impl Display, comment: &str) -> String {
    match comment {
        "" => format!("#define {name} {value}\n"),
        comment => format!("#define {name} {value} // {comment}\n"),
    }
}

/// Renders the configuration header.
///
/// Output only depends on `settings`, so rendering the same configuration
/// twice yields identical text.
pub fn render(settings: &Settings) -> Result<String> {
    let mut out = String::with_capacity(4096);
    out.push_str(&format!("#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n"));

    for line in TEMPLATE {
        match line {
            Banner(title) => out.push_str(&format!("// {RULE}\n// {title}\n// {RULE}\n")),
            Comment(text) => out.push_str(&format!("// {text}\n")),
            Blank => out.push('\n'),
            Setting(name, comment) => {
                let value =
                    settings.get(name).ok_or_else(|| Error::MissingRequiredSetting(name.to_string()))?;
                out.push_str(&define(name, value, comment));
            }
            Literal(name, value, comment) => out.push_str(&define(name, value, comment)),
        }
    }

    out.push_str(&format!("#endif // {INCLUDE_GUARD}\n"));
    Ok(out)
}
