//! Validation rule configuration

use crate::error::ValidatorError;

/// Configurable bounds for the range rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Lowest acceptable hourly wage in yen
    pub hourly_wage_min: u32,

    /// Highest acceptable hourly wage in yen
    pub hourly_wage_max: u32,

    /// Lowest acceptable annual salary bound in man-yen
    pub annual_salary_floor: u32,

    /// Highest acceptable annual salary bound in man-yen
    pub annual_salary_ceiling: u32,

    /// Highest acceptable annual holiday count
    pub annual_holidays_max: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            hourly_wage_min: 800,
            hourly_wage_max: 5000,
            annual_salary_floor: 200,
            annual_salary_ceiling: 2000,
            annual_holidays_max: 365,
        }
    }
}

impl ValidationConfig {
    /// Check internal consistency of the configured bounds
    pub fn validate(&self) -> Result<(), ValidatorError> {
        if self.hourly_wage_min > self.hourly_wage_max {
            return Err(ValidatorError::Config(
                "hourly_wage_min must not exceed hourly_wage_max".to_string(),
            ));
        }
        if self.annual_salary_floor > self.annual_salary_ceiling {
            return Err(ValidatorError::Config(
                "annual_salary_floor must not exceed annual_salary_ceiling".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ValidationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hourly_wage_min, 800);
        assert_eq!(config.annual_salary_ceiling, 2000);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = ValidationConfig {
            hourly_wage_min: 6000,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
