//! Template contexts built from an entity name and its field map

use serde::{Deserialize, Serialize};

use crate::request::{FieldMap, ID_FIELD};
use crate::utils::capitalize_first;

/// One entry of the field map, with the names the templates need
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContext {
    /// Field (attribute) name as given by the caller
    pub name: String,
    /// Java type name
    pub type_name: String,
    /// Accessor stem: `get<accessor>` / `set<accessor>`
    pub accessor: String,
    /// Exactly `"id"`; annotated as the identity primary key
    pub is_id: bool,
}

/// Everything a template is rendered against
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityContext {
    /// Entity (class) name
    pub entity: String,
    /// Lower-cased entity name, used for variables and the controller path
    pub entity_var: String,
    /// All fields, in field map order
    pub fields: Vec<FieldContext>,
    /// Fields copied by the service's update operation (every field whose
    /// name is not `id` in any casing), in field map order
    pub update_fields: Vec<FieldContext>,
}

impl FieldContext {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            accessor: capitalize_first(name),
            is_id: name == ID_FIELD,
        }
    }
}

impl EntityContext {
    pub fn new(entity: &str, fields: &FieldMap) -> Self {
        let fields: Vec<FieldContext> = fields
            .iter()
            .map(|(name, type_name)| FieldContext::new(name, type_name))
            .collect();
        let update_fields = fields
            .iter()
            .filter(|field| !field.name.eq_ignore_ascii_case(ID_FIELD))
            .cloned()
            .collect();

        Self {
            entity: entity.to_string(),
            entity_var: entity.to_lowercase(),
            fields,
            update_fields,
        }
    }

    /// Context for templates that depend on the entity name only
    pub fn for_entity(entity: &str) -> Self {
        Self::new(entity, &FieldMap::new())
    }
}
