//! Admin console form for the memory provider.

use std::sync::LazyLock;

use kc_spi::{PropertyType, ProviderConfigProperty, ProviderConfigurationBuilder};

use crate::config::MY_PARAMETER;

static CONFIG_PROPERTIES: LazyLock<Vec<ProviderConfigProperty>> = LazyLock::new(|| {
    ProviderConfigurationBuilder::create()
        .property()
        .name(MY_PARAMETER)
        .property_type(PropertyType::String)
        .label("My Parameter")
        .default_value("My Value")
        .help_text("A sample parameter defined by this spi")
        .add()
        .build()
});

/// The configuration properties shown on the User Federation tab.
#[must_use]
pub fn config_properties() -> &'static [ProviderConfigProperty] {
    &CONFIG_PROPERTIES
}
