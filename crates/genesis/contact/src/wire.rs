//! Bodies exchanged with `POST /api/contact`

use crate::validation::{FieldViolation, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Path of the contact endpoint
pub const CONTACT_PATH: &str = "/api/contact";

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

/// Response of the contact endpoint for 200, 400 and 500
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl ContactResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            message: VALIDATION_ERROR_MESSAGE.to_string(),
            errors: Some(errors.into_vec()),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            errors: None,
        }
    }
}

/// Body of a 405 response; carries no success flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNotAllowedBody {
    pub message: String,
}

impl Default for MethodNotAllowedBody {
    fn default() -> Self {
        Self {
            message: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }
    }
}

/// What the client keeps from a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}
