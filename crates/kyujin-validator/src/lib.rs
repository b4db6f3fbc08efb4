//! Kyujin Validator
//!
//! Enforces the business rules extracted postings must satisfy before
//! publication:
//! - Required fields (title, accepted employment-type literals)
//! - Range checks (hourly wage, annual salary bounds, annual holidays)
//! - Cross-field rules (salary max without min, max below min)
//! - Employment-type-conditional recommendations (warnings)
//!
//! Errors block publish; warnings surface in review but do not block.
//!
//! # Examples
//!
//! ```
//! use kyujin_validator::{JobValidator, ValidationConfig};
//! use kyujin_domain::ExtractedJobData;
//!
//! let validator = JobValidator::new(ValidationConfig::default());
//! let data = ExtractedJobData {
//!     title: Some("エンジニア募集".to_string()),
//!     employment_type: Some("正社員".to_string()),
//!     annual_salary_min: Some(400),
//!     annual_salary_max: Some(600),
//!     ..Default::default()
//! };
//! assert!(!kyujin_domain::has_errors(&validator.validate(&data)));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::ValidatorError;
pub use validator::{validate_extracted_job_data, JobValidator};
