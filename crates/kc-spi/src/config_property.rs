//! Configuration property metadata.
//!
//! Factories describe their configuration form with a list of
//! [`ProviderConfigProperty`] values. The admin console renders one field
//! per property; the values the administrator enters end up in the
//! component's config map under the property name.

use serde::{Deserialize, Serialize};

/// Input type of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyType {
    /// Single-line text.
    #[default]
    String,
    /// Multi-line text.
    Text,
    /// On/off switch.
    #[serde(rename = "boolean")]
    Boolean,
    /// Single choice from `options`.
    List,
    /// Multiple choices from `options`.
    MultivaluedList,
    /// Free-form list of strings.
    MultivaluedString,
    /// Masked secret.
    Password,
    /// File upload.
    File,
}

impl PropertyType {
    /// Returns the type name understood by the admin console.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Text => "Text",
            Self::Boolean => "boolean",
            Self::List => "List",
            Self::MultivaluedList => "MultivaluedList",
            Self::MultivaluedString => "MultivaluedString",
            Self::Password => "Password",
            Self::File => "File",
        }
    }
}

/// Metadata for one configurable field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigProperty {
    /// Key under which the value is stored in the component config.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Tooltip text.
    pub help_text: String,
    /// Input type.
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Value pre-filled in the form.
    pub default_value: Option<String>,
    /// Choices for list types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Whether the value must be masked when displayed.
    #[serde(default)]
    pub secret: bool,
    /// Whether the field must be filled in.
    #[serde(default)]
    pub required: bool,
}

/// Fluent builder for a list of configuration properties.
///
/// ```
/// use kc_spi::{PropertyType, ProviderConfigurationBuilder};
///
/// let properties = ProviderConfigurationBuilder::create()
///     .property()
///     .name("greeting")
///     .property_type(PropertyType::String)
///     .label("Greeting")
///     .default_value("hello")
///     .add()
///     .build();
///
/// assert_eq!(properties.len(), 1);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct ProviderConfigurationBuilder {
    properties: Vec<ProviderConfigProperty>,
}

impl ProviderConfigurationBuilder {
    /// Starts an empty property list.
    pub fn create() -> Self {
        Self::default()
    }

    /// Starts describing a new property.
    pub fn property(self) -> PropertyBuilder {
        PropertyBuilder {
            parent: self,
            property: ProviderConfigProperty::default(),
        }
    }

    /// Finishes the list.
    #[must_use]
    pub fn build(self) -> Vec<ProviderConfigProperty> {
        self.properties
    }
}

/// Builder for a single property, returned by
/// [`ProviderConfigurationBuilder::property`].
#[derive(Debug)]
#[must_use]
pub struct PropertyBuilder {
    parent: ProviderConfigurationBuilder,
    property: ProviderConfigProperty,
}

impl PropertyBuilder {
    /// Sets the config key.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.property.name = name.into();
        self
    }

    /// Sets the input type.
    pub const fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property.property_type = property_type;
        self
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.property.label = label.into();
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.property.default_value = Some(value.into());
        self
    }

    /// Sets the help text.
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.property.help_text = text.into();
        self
    }

    /// Sets the choices for list types.
    pub fn options(mut self, options: Vec<String>) -> Self {
        self.property.options = options;
        self
    }

    /// Marks the value as secret.
    pub const fn secret(mut self, secret: bool) -> Self {
        self.property.secret = secret;
        self
    }

    /// Marks the field as required.
    pub const fn required(mut self, required: bool) -> Self {
        self.property.required = required;
        self
    }

    /// Appends the property and returns to the list builder.
    pub fn add(mut self) -> ProviderConfigurationBuilder {
        self.parent.properties.push(self.property);
        self.parent
    }
}
