pub mod endpoint_type;
pub mod error_information;
pub mod headers;
pub mod participant;
pub mod protocol_error;

use std::collections::BTreeMap;

/// Values substituted into `{{Name}}` placeholders of a path template.
pub type PathParams = BTreeMap<String, String>;
