use thiserror::Error;

use super::error_information::{
    ErrorInformation, ErrorInformationObject, Extension, ExtensionList,
};
use crate::config::core_config::ErrorHandlingConfig;

const MAX_EXTENSIONS: usize = 16;
const MAX_EXTENSION_VALUE_LENGTH: usize = 128;

/// FSPIOP error codes the adapter produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    DestinationCommunicationError,
    InternalServerError,
    GenericValidationError,
    MissingElement,
    DestinationFspError,
}

impl ErrorCode {
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorCode::DestinationCommunicationError => "1001",
            ErrorCode::InternalServerError => "2001",
            ErrorCode::GenericValidationError => "3100",
            ErrorCode::MissingElement => "3102",
            ErrorCode::DestinationFspError => "3201",
        }
    }

    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::DestinationCommunicationError => "Destination communication error",
            ErrorCode::InternalServerError => "Internal server error",
            ErrorCode::GenericValidationError => "Generic validation error",
            ErrorCode::MissingElement => "Missing mandatory element",
            ErrorCode::DestinationFspError => "Destination FSP Error",
        }
    }
}

/// Canonical error of one forwarding attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProtocolError {
    pub code: ErrorCode,
    pub message: String,
    pub cause: Option<String>,
}

impl ProtocolError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Serializes into the `errorInformation` callback body.
    pub fn to_api_error(&self, config: &ErrorHandlingConfig) -> ErrorInformationObject {
        let mut extensions = Vec::new();

        if config.include_cause_extension {
            if let Some(cause) = &self.cause {
                extensions.push(Extension {
                    key: "cause".to_owned(),
                    value: cause.to_owned(),
                });
            }
        }

        if config.truncate_extensions {
            extensions.truncate(MAX_EXTENSIONS);
            for extension in extensions.iter_mut() {
                let cut = extension.value.char_indices().nth(MAX_EXTENSION_VALUE_LENGTH);
                if let Some((index, _)) = cut {
                    extension.value.truncate(index);
                }
            }
        }

        ErrorInformationObject {
            error_information: ErrorInformation {
                error_code: self.code.code().to_owned(),
                error_description: self.message.to_owned(),
                extension_list: (!extensions.is_empty()).then_some(ExtensionList {
                    extension: extensions,
                }),
            },
        }
    }
}
