//! Tera testers available to every template.
//!
//! * `present`: the value exists and is not null
//! * `class`, `interface`, `enumeration`: the element's `$type` matches.
//!   These fail the render when the value is not a tagged element, so a
//!   template that tests the wrong thing is caught instead of silently
//!   producing nothing.

use tera::{Tera, Value};

use crate::model::{ElementKind, TYPE_KEY};

pub fn register(tera: &mut Tera) {
    tera.register_tester("present", present);
    tera.register_tester("class", |value: Option<&Value>, _: &[Value]| {
        is_kind(value, ElementKind::Class, "class")
    });
    tera.register_tester("interface", |value: Option<&Value>, _: &[Value]| {
        is_kind(value, ElementKind::Interface, "interface")
    });
    tera.register_tester("enumeration", |value: Option<&Value>, _: &[Value]| {
        is_kind(value, ElementKind::Enumeration, "enumeration")
    });
}

fn present(value: Option<&Value>, _args: &[Value]) -> tera::Result<bool> {
    Ok(value.is_some_and(|v| !v.is_null()))
}

fn is_kind(value: Option<&Value>, kind: ElementKind, tester: &str) -> tera::Result<bool> {
    let tag = value
        .and_then(|v| v.get(TYPE_KEY))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            tera::Error::msg(format!(
                "Tester `{}` expects a model element with a string `{}` field, got {}",
                tester,
                TYPE_KEY,
                value.map_or_else(|| "an undefined value".to_string(), Value::to_string)
            ))
        })?;
    Ok(ElementKind::from_tag(tag) == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tera::Context;

    fn render(template: &str, data: Value) -> tera::Result<String> {
        let mut tera = Tera::default();
        register(&mut tera);
        tera.add_raw_template("t", template)?;
        tera.render("t", &Context::from_serialize(data)?)
    }

    #[test]
    fn test_present() {
        let template = "{% if a is present %}a{% endif %}{% if b is present %}b{% endif %}{% if c is present %}c{% endif %}";
        let out = render(template, json!({"a": 0, "b": null})).unwrap();
        assert_eq!(out, "a");
    }

    #[test]
    fn test_kind_testers() {
        let template = "{% for e in items %}{% if e is class %}C{% elif e is interface %}I{% elif e is enumeration %}E{% else %}-{% endif %}{% endfor %}";
        let out = render(
            template,
            json!({"items": [
                {"$type": "Class"},
                {"$type": "Interface"},
                {"$type": "Enumeration"},
                {"$type": "PrimitiveType"}
            ]}),
        )
        .unwrap();
        assert_eq!(out, "CIE-");
    }

    #[test]
    fn test_class_fails_without_discriminator() {
        let result = render(
            "{% if e is class %}yes{% endif %}",
            json!({"e": {"name": "Untagged"}}),
        );
        assert!(result.is_err());

        let result = render("{% if missing is class %}yes{% endif %}", json!({}));
        assert!(result.is_err());
    }
}
