//! Enum field declarations loaded from TOML.
//!
//! ```toml
//! [[field]]
//! name = "status"
//! values = ["on", "off", "standby"]
//! message = "incorrect status"
//! allow_nil = true
//! ```

use serde::Deserialize;

use crate::descriptor::EnumHost;
use crate::errors::ConfigError;
use crate::options::EnumFieldOptions;
use crate::registrar::register_enum_field;
use crate::types::FieldEnumDefinition;

/// One `[[field]]` table. Unknown keys are rejected so a misspelled option fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumFieldDeclaration {
    pub name: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub allow_blank: bool,
    #[serde(default)]
    pub allow_nil: bool,
}

impl EnumFieldDeclaration {
    pub fn options(&self) -> EnumFieldOptions {
        EnumFieldOptions {
            message: self.message.clone(),
            allow_blank: self.allow_blank,
            allow_nil: self.allow_nil,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumFieldDeclarations {
    #[serde(default, rename = "field")]
    pub fields: Vec<EnumFieldDeclaration>,
}

impl EnumFieldDeclarations {
    /// Parses and checks a declaration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let declarations: Self = toml::from_str(source)?;
        for declaration in &declarations.fields {
            if declaration.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if declaration.values.is_empty() {
                return Err(ConfigError::EmptyValues {
                    field: declaration.name.clone(),
                });
            }
        }
        Ok(declarations)
    }

    /// Registers every declaration on `host`, in document order.
    pub fn apply_to<H: EnumHost + ?Sized>(&self, host: &mut H) -> Result<Vec<FieldEnumDefinition>, ConfigError> {
        self.fields
            .iter()
            .map(|declaration| {
                register_enum_field(
                    &mut *host,
                    &declaration.name,
                    declaration.values.iter().cloned(),
                    declaration.options(),
                )
                .map_err(ConfigError::from)
            })
            .collect()
    }
}
