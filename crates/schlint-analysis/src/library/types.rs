//! Core types of the component model.

use std::collections::{BTreeMap, HashSet};

use schlint_core::errors::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document keys the model does not interpret. Kept so a save writes them back.
pub type ExtraFields = BTreeMap<String, Value>;

/// Direction a pin points to, away from its connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PinOrientation {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

/// A pin of a schematic component. Coordinates and length are in mils.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub name: String,
    pub number: String,
    pub posx: i64,
    pub posy: i64,
    pub length: i64,
    #[serde(default)]
    pub orientation: PinOrientation,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A schematic component: the unit every rule is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Reference designator prefix, e.g. "U" or "R".
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: String::new(),
            fields: BTreeMap::new(),
            pins: Vec::new(),
            extra: ExtraFields::new(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.pins.push(pin);
        self
    }
}

/// A named, ordered collection of components decoded from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Source identifier (file path). Not part of the stored document.
    #[serde(skip)]
    pub id: String,
    pub components: Vec<Component>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Library {
    pub fn new(id: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            id: id.into(),
            components,
            extra: ExtraFields::new(),
        }
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Reject libraries whose component names are not unique.
    pub fn ensure_unique_names(&self) -> Result<(), DecodeError> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(DecodeError::DuplicateComponent {
                    library: self.id.clone(),
                    component: component.name.clone(),
                });
            }
        }
        Ok(())
    }
}
