use super::*;
use dtsgen_common::Visibility;

fn method(parent_kind: Kind, parameters: Vec<ParameterNode>, return_type: &str) -> MethodNode {
    MethodNode {
        name: "attachPress".to_string(),
        full_name: "sap.m.Button.attachPress".to_string(),
        is_static: false,
        visibility: Visibility::Public,
        description: "Attaches a handler to the press event.".to_string(),
        parameters,
        return_value: ReturnValue {
            type_name: return_type.to_string(),
            description: "Reference to this".to_string(),
        },
        parent_kind,
        parent_name: "sap.m.Button".to_string(),
    }
}

fn signature(block: &str) -> &str {
    block.lines().last().expect("block has a signature line")
}

#[test]
fn test_class_method_block() {
    let config = GeneratorConfig::default();
    let emitter = DeclarationEmitter::new(&config);
    let mut param = ParameterNode::new("fnFunction", "Function");
    param.description = "The handler".to_string();
    let method = method(Kind::Class, vec![param], "this");

    let blocks = emitter.emit_method(&method).expect("class methods emit");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0],
        "/**\n * Attaches a handler to the press event.\n * @param {Function} fnFunction The handler\n * @returns {this} Reference to this\n */\npublic attachPress(fnFunction: Function): this;"
    );
}

#[test]
fn test_signature_shape_follows_parent_kind() {
    let config = GeneratorConfig::default();
    let emitter = DeclarationEmitter::new(&config);
    let params = vec![ParameterNode::new("sText", "string")];

    let namespace = emitter
        .emit_method(&method(Kind::Namespace, params.clone(), "void"))
        .unwrap();
    assert_eq!(signature(&namespace[0]), "function attachPress(sText: string): void;");

    let interface = emitter
        .emit_method(&method(Kind::Interface, params.clone(), "void"))
        .unwrap();
    assert_eq!(signature(&interface[0]), "attachPress(sText: string): void;");

    let mut restricted_static = method(Kind::Class, params, "void");
    restricted_static.visibility = Visibility::Restricted;
    restricted_static.is_static = true;
    let class = emitter.emit_method(&restricted_static).unwrap();
    assert_eq!(
        signature(&class[0]),
        "protected static attachPress(sText: string): void;"
    );
}

#[test]
fn test_void_return_has_no_returns_tag() {
    let config = GeneratorConfig::default();
    let emitter = DeclarationEmitter::new(&config);

    let blocks = emitter.emit_method(&method(Kind::Class, vec![], "void")).unwrap();
    assert!(!blocks[0].contains("@returns"), "{}", blocks[0]);
}

#[test]
fn test_enum_and_typedef_cannot_have_methods() {
    let config = GeneratorConfig::default();
    let emitter = DeclarationEmitter::new(&config);

    for kind in [Kind::Enum, Kind::Typedef] {
        let err = emitter.emit_method(&method(kind, vec![], "void")).unwrap_err();
        assert_eq!(
            err,
            EmitError::KindCannotHaveMethods {
                kind,
                owner: "sap.m.Button".to_string(),
                method: "sap.m.Button.attachPress".to_string(),
            }
        );
    }
}

#[test]
fn test_each_overload_is_printed() {
    let config = GeneratorConfig::default();
    let emitter = DeclarationEmitter::new(&config);
    let params = vec![
        ParameterNode::new("oData", "object").with_optional(true),
        ParameterNode::new("fnFunction", "Function"),
    ];

    let blocks = emitter.emit_method(&method(Kind::Class, params, "this")).unwrap();
    let signatures: Vec<&str> = blocks.iter().map(|b| signature(b)).collect();
    assert_eq!(
        signatures,
        vec![
            "public attachPress(fnFunction: Function): this;",
            "public attachPress(oData: object, fnFunction: Function): this;",
        ]
    );
}

#[test]
fn test_compatibility_overload_is_appended_last() {
    let mut config = GeneratorConfig::default();
    config
        .replacements
        .specific
        .method_overrides_not_compatible
        .push("sap.m.Button.attachPress".to_string());
    let emitter = DeclarationEmitter::new(&config);
    let params = vec![
        ParameterNode::new("oData", "object").with_optional(true),
        ParameterNode::new("fnFunction", "Function"),
    ];

    let blocks = emitter.emit_method(&method(Kind::Class, params, "this")).unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(signature(&blocks[2]), "public attachPress(...args: any[]): any;");

    let single = emitter.emit_method(&method(Kind::Class, vec![], "this")).unwrap();
    assert_eq!(single.len(), 2);
    assert_eq!(signature(&single[1]), "public attachPress(...args: any[]): any;");
}

#[test]
fn test_filtered_method_emits_nothing() {
    let mut config = GeneratorConfig::default();
    config
        .replacements
        .specific
        .filter_methods
        .push("*.attachPress".to_string());
    let emitter = DeclarationEmitter::new(&config);

    assert!(emitter.emit_method(&method(Kind::Class, vec![], "this")).unwrap().is_empty());
}

#[test]
fn test_constructor_has_no_return_type() {
    let config = GeneratorConfig::default();
    let emitter = DeclarationEmitter::new(&config);
    let mut ctor = method(Kind::Class, vec![ParameterNode::new("sId", "string").with_optional(true)], "void");
    ctor.name = "constructor".to_string();
    ctor.full_name = "sap.m.Button.constructor".to_string();

    let blocks = emitter.emit_method(&ctor).unwrap();
    assert_eq!(signature(&blocks[0]), "public constructor(sId?: string);");
}

#[test]
fn test_doc_comment() {
    assert_eq!(doc_comment("", &[]), "");
    assert_eq!(
        doc_comment("First line\n\nSecond */ line", &["@param {string} a".to_string()]),
        "/**\n * First line\n *\n * Second * / line\n * @param {string} a\n */\n"
    );
}

#[test]
fn test_filtered_enum_method_is_still_rejected() {
    let mut config = GeneratorConfig::default();
    config
        .replacements
        .specific
        .filter_methods
        .push("*.attachPress".to_string());
    let emitter = DeclarationEmitter::new(&config);

    let err = emitter.emit_method(&method(Kind::Enum, vec![], "void")).unwrap_err();
    assert!(matches!(err, EmitError::KindCannotHaveMethods { kind: Kind::Enum, .. }), "{err}");

    // The same filter still drops a class method.
    let blocks = emitter.emit_method(&method(Kind::Class, vec![], "void")).unwrap();
    assert!(blocks.is_empty());
}
