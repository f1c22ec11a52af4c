//! Helpers for turning Rust type information into JSON Schema that can be
//! shipped alongside a prompt.  The JSON is produced with [`schemars`] and is
//! embedded verbatim in the catalog instruction so the model knows the exact
//! field shape and the categorical constraints it must honour.
//!
//! The abstraction is intentionally **very small**: if you need a more
//! sophisticated setup (inline- vs. $ref-based schemas, custom serialization
//! logic) you can always bypass this helper and build the schema manually.

use schemars::{r#gen::SchemaSettings, JsonSchema, SchemaGenerator};
use serde_json::{self, Value};

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// A fully inlined schema is what we want in a prompt: the model reads it
/// top to bottom, so `$ref` indirection would only cost tokens and clarity.
///
/// # Panics
///
/// This function panics only if the resulting schema cannot be serialized
/// into valid JSON – which should never happen as long as [`schemars`] works
/// correctly.
///
/// # Example
///
/// ```
/// use frontier_core::schema_util::derive_response_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_response_schema::<Foo>();
/// println!("{}", serde_json::to_string_pretty(&schema).unwrap());
/// ```
pub fn derive_response_schema<T>() -> Value
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("generated schema should be serialisable")
}
