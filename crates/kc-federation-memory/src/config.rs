//! Provider configuration transport.

use std::fmt;

use kc_spi::ComponentModel;
use serde::{Deserialize, Serialize};

/// Component config key of the sample parameter.
pub const MY_PARAMETER: &str = "myParameter";

/// Settings of one memory storage component.
///
/// Read from the component each time a provider is created; the host owns
/// persistence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    my_parameter: Option<String>,
}

impl ProviderConfig {
    /// Creates a configuration with an explicit parameter value.
    #[must_use]
    pub fn new(my_parameter: Option<String>) -> Self {
        Self { my_parameter }
    }

    /// Reads the first `myParameter` value from a component.
    #[must_use]
    pub fn from_component(component: &ComponentModel) -> Self {
        Self::new(component.get_first(MY_PARAMETER).map(str::to_string))
    }

    /// The sample parameter, if the administrator set one.
    #[must_use]
    pub fn my_parameter(&self) -> Option<&str> {
        self.my_parameter.as_deref()
    }
}

impl fmt::Display for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.my_parameter {
            Some(value) => write!(f, "{MY_PARAMETER}='{value}'"),
            None => write!(f, "{MY_PARAMETER}=<unset>"),
        }
    }
}
