//! Declarative schedule blocks for configuration files.

use serde::{Deserialize, Serialize};

use crate::error::CronError;
use crate::schedule::{Cron, DEFAULT_TIMEZONE};

/// Schedule block as written in YAML/JSON configuration.
///
/// Deserialization keeps the expression as raw text; call
/// [`ScheduleConfig::compile`] to validate it into a matchable [`Cron`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    /// Five-field cron expression.
    pub cron: String,
    /// IANA zone name the schedule operates in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl ScheduleConfig {
    /// Validate the block into a schedule.
    pub fn compile(&self) -> Result<Cron, CronError> {
        Cron::parse(&self.cron, self.timezone.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_an_explicit_timezone() {
        let config: ScheduleConfig = serde_yaml::from_str(
            r#"
cron: "*/15 * * * *"
timezone: Asia/Manila
"#,
        )
        .unwrap();

        assert_eq!(config.timezone, "Asia/Manila");
        let cron = config.compile().unwrap();
        assert_eq!(cron.timezone(), "Asia/Manila");
        assert_eq!(cron.minute().values().len(), 4);
    }

    #[test]
    fn timezone_defaults_to_utc() {
        let config: ScheduleConfig = serde_yaml::from_str(r#"cron: "0 6 * * 1-5""#).unwrap();
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.compile().unwrap().timezone(), "UTC");
    }

    #[test]
    fn compile_surfaces_field_errors() {
        let config: ScheduleConfig = serde_yaml::from_str(r#"cron: "61 * * * *""#).unwrap();
        assert!(matches!(
            config.compile(),
            Err(CronError::InvalidField {
                segment: "minute",
                ..
            })
        ));
    }
}
