use serde::{Deserialize, Serialize};

/// One link of a breadcrumb trail, shaped for the design-system component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub url: String,
    pub text: String,
}
