//! Reference annotation.
//!
//! Templates cannot follow `$ref` pointers, so before rendering every
//! reference object whose id is a known type gets that type's `name` copied
//! next to it:
//!
//! ```
//! use serde_json::json;
//! use umlgen_core::model::{annotate, SourceModel, TypeNames};
//!
//! let model = SourceModel::new(json!({
//!     "packagedElement": [
//!         {"$type": "Class", "id": "1", "name": "Order",
//!          "ownedAttribute": [{"name": "total", "type": {"$ref": "2"}}]},
//!         {"$type": "PrimitiveType", "id": "2", "name": "Real"}
//!     ]
//! }));
//! let names = TypeNames::from_model(&model);
//! let annotated = annotate(model.as_json(), &names);
//!
//! assert_eq!(
//!     annotated["packagedElement"][0]["ownedAttribute"][0]["type"],
//!     json!({"$ref": "2", "name": "Real"})
//! );
//! ```

use serde_json::{Map, Value as JsonValue};

use super::{TypeNames, NAME_KEY, REF_KEY};

/// Return a copy of `value` in which every object with a `$ref` naming a key of
/// `names` carries the resolved `name`. The input is never modified.
pub fn annotate(value: &JsonValue, names: &TypeNames) -> JsonValue {
    match value {
        JsonValue::Array(items) => {
            JsonValue::Array(items.iter().map(|item| annotate(item, names)).collect())
        }
        JsonValue::Object(fields) => JsonValue::Object(annotate_object(fields, names)),
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => {
            value.clone()
        }
    }
}

fn annotate_object(fields: &Map<String, JsonValue>, names: &TypeNames) -> Map<String, JsonValue> {
    let mut annotated: Map<String, JsonValue> = fields
        .iter()
        .map(|(key, field)| (key.clone(), annotate(field, names)))
        .collect();

    if let Some(name) = fields
        .get(REF_KEY)
        .and_then(JsonValue::as_str)
        .and_then(|id| names.name_of(id))
    {
        annotated.insert(NAME_KEY.to_string(), JsonValue::String(name.to_string()));
    }

    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, TypeEntry};
    use proptest::prelude::*;
    use serde_json::json;

    fn table(pairs: &[(&str, &str)]) -> TypeNames {
        pairs
            .iter()
            .map(|(id, name)| TypeEntry {
                id: id.to_string(),
                name: name.to_string(),
                kind: ElementKind::Class,
            })
            .collect()
    }

    #[test]
    fn test_scalars_pass_through() {
        let names = table(&[("1", "Order")]);
        for value in [json!(null), json!(true), json!(42), json!(1.5), json!("1")] {
            assert_eq!(annotate(&value, &names), value);
        }
    }

    #[test]
    fn test_resolves_nested_references() {
        let names = table(&[("c", "Customer"), ("o", "Order")]);
        let value = json!({
            "ownedAttribute": [
                {"name": "buyer", "type": {"$ref": "c"}},
                {"name": "previous", "type": {"$ref": "o"}},
                {"name": "note", "type": {"$ref": "unknown"}}
            ],
            "generalization": [{"general": {"$ref": "o"}}]
        });

        let annotated = annotate(&value, &names);
        assert_eq!(
            annotated["ownedAttribute"][0]["type"],
            json!({"$ref": "c", "name": "Customer"})
        );
        assert_eq!(annotated["ownedAttribute"][1]["type"]["name"], "Order");
        assert_eq!(
            annotated["ownedAttribute"][2]["type"],
            json!({"$ref": "unknown"})
        );
        assert_eq!(annotated["generalization"][0]["general"]["name"], "Order");
        // the attribute's own name is not a reference and stays as is
        assert_eq!(annotated["ownedAttribute"][0]["name"], "buyer");
    }

    #[test]
    fn test_overwrites_stale_name() {
        let names = table(&[("1", "Invoice")]);
        let annotated = annotate(&json!({"$ref": "1", "name": "Bill"}), &names);
        assert_eq!(annotated, json!({"$ref": "1", "name": "Invoice"}));
    }

    #[test]
    fn test_non_string_ref_is_ignored() {
        let names = table(&[("1", "Invoice")]);
        let value = json!({"$ref": 1});
        assert_eq!(annotate(&value, &names), value);
    }

    #[test]
    fn test_input_is_not_modified() {
        let names = table(&[("1", "Invoice")]);
        let value = json!({"items": [{"$ref": "1"}]});
        let before = value.clone();
        let _ = annotate(&value, &names);
        assert_eq!(value, before);
    }

    fn arb_key() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(REF_KEY.to_string()),
            Just(NAME_KEY.to_string()),
            "[a-z]{1,5}",
        ]
    }

    fn arb_json(strings: &'static str) -> impl Strategy<Value = JsonValue> {
        let leaf = prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            strings.prop_map(JsonValue::String),
            strings.prop_map(|id| json!({ "$ref": id })),
        ];
        leaf.prop_recursive(4, 48, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
                prop::collection::btree_map(arb_key(), inner, 0..4)
                    .prop_map(|fields| JsonValue::Object(fields.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_annotate_is_idempotent(value in arb_json("[a-d]")) {
            let names = table(&[("a", "Alpha"), ("b", "Beta")]);
            let once = annotate(&value, &names);
            let twice = annotate(&once, &names);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_unmatched_references_are_identity(value in arb_json("[a-z]{1,4}")) {
            // table ids are upper case and never generated above
            let names = table(&[("ID1", "Alpha"), ("ID2", "Beta")]);
            prop_assert_eq!(annotate(&value, &names), value);
        }
    }
}
