use super::*;

#[test]
fn test_deserialize_class_symbol() {
    let json = r#"{
        "library": "sap.m",
        "version": "1.60.0",
        "symbols": [{
            "kind": "class",
            "name": "sap.m.Button",
            "basename": "Button",
            "visibility": "public",
            "extends": "sap.ui.core.Control",
            "module": "sap/m/Button",
            "constructor": {
                "visibility": "public",
                "parameters": [{ "name": "sId", "type": "string", "optional": true }]
            },
            "methods": [{
                "name": "setText",
                "visibility": "public",
                "parameters": [{ "name": "sText", "type": "string" }],
                "returnValue": { "type": "sap.m.Button", "description": "this" }
            }],
            "ui5-metadata": { "stereotype": "control" }
        }]
    }"#;

    let api: ApiDocument = serde_json::from_str(json).expect("valid api json");
    assert_eq!(api.library, "sap.m");
    assert_eq!(api.symbols.len(), 1);

    let symbol = &api.symbols[0];
    assert_eq!(symbol.kind, Kind::Class);
    assert_eq!(symbol.extends.as_deref(), Some("sap.ui.core.Control"));
    assert_eq!(symbol.module.as_deref(), Some("sap/m/Button"));

    let ctor = symbol.constructor.as_ref().expect("constructor");
    assert!(ctor.parameters[0].optional);

    let method = &symbol.methods[0];
    assert!(!method.is_static);
    let ret = method.return_value.as_ref().expect("return value");
    assert_eq!(ret.type_name.as_deref(), Some("sap.m.Button"));
}

#[test]
fn test_missing_members_default_to_empty() {
    let json = r#"{ "kind": "namespace", "name": "sap.m" }"#;
    let symbol: Symbol = serde_json::from_str(json).expect("valid symbol");

    assert_eq!(symbol.visibility, Visibility::Public);
    assert!(symbol.methods.is_empty());
    assert!(symbol.properties.is_empty());
    assert_eq!(symbol.basename(), "m");
}

#[test]
fn test_parameter_flags() {
    let json = r#"{ "name": "aArgs", "type": "any", "spread": true, "defaultValue": 5 }"#;
    let param: Parameter = serde_json::from_str(json).expect("valid parameter");

    assert!(param.spread);
    assert!(!param.optional);
    assert_eq!(param.default_value, Some(serde_json::json!(5)));
}

#[test]
fn test_restricted_renders_as_protected() {
    assert_eq!(Visibility::Restricted.keyword(), "protected");
    assert_eq!(Visibility::Protected.keyword(), "protected");
    assert_eq!(Visibility::Public.keyword(), "public");
}

#[test]
fn test_unknown_kind_is_rejected() {
    let json = r#"{ "kind": "module", "name": "x" }"#;
    assert!(serde_json::from_str::<Symbol>(json).is_err());
}
