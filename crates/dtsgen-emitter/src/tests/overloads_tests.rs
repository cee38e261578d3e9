use super::*;

fn required(name: &str, type_name: &str) -> ParameterNode {
    ParameterNode::new(name, type_name)
}

fn optional(name: &str, type_name: &str) -> ParameterNode {
    ParameterNode::new(name, type_name).with_optional(true)
}

fn render(overload: &[ParameterNode]) -> String {
    overload
        .iter()
        .map(ParameterNode::render)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_all(overloads: &[Vec<ParameterNode>]) -> Vec<String> {
    overloads.iter().map(|o| render(o)).collect()
}

#[test]
fn test_short_lists_are_never_split() {
    assert_eq!(plan_overloads(&[]), vec![Vec::<ParameterNode>::new()]);

    let single = vec![optional("a", "string")];
    assert_eq!(plan_overloads(&single), vec![single.clone()]);
}

#[test]
fn test_well_formed_list_is_a_single_overload() {
    let params = vec![
        required("a", "string"),
        required("b", "number"),
        optional("c", "boolean"),
    ];
    assert_eq!(plan_overloads(&params), vec![params.clone()]);
}

#[test]
fn test_optional_before_required_splits_in_two() {
    let params = vec![optional("a", "string"), required("b", "number")];

    let overloads = plan_overloads(&params);
    assert_eq!(render_all(&overloads), vec!["b: number", "a: string, b: number"]);
}

#[test]
fn test_split_keeps_required_before_cut_and_trailing_parameters() {
    // attachPress(oData?, fnFunction, oListener?)
    let params = vec![
        optional("oData", "object"),
        required("fnFunction", "Function"),
        optional("oListener", "object"),
    ];

    let overloads = plan_overloads(&params);
    assert_eq!(
        render_all(&overloads),
        vec![
            "fnFunction: Function, oListener?: object",
            "oData: object, fnFunction: Function, oListener?: object",
        ]
    );
}

#[test]
fn test_later_conflicts_are_handled_recursively() {
    // onChange(oEvent, mParameters?, sNewValue)
    let params = vec![
        required("oEvent", "Event"),
        optional("mParameters", "object"),
        required("sNewValue", "string"),
    ];
    assert_eq!(
        render_all(&plan_overloads(&params)),
        vec![
            "oEvent: Event, sNewValue: string",
            "oEvent: Event, mParameters: object, sNewValue: string",
        ]
    );

    // Two separate conflicts: a? b c? d
    let params = vec![
        optional("a", "string"),
        required("b", "string"),
        optional("c", "string"),
        required("d", "string"),
    ];
    assert_eq!(
        render_all(&plan_overloads(&params)),
        vec![
            "b: string, d: string",
            "b: string, c: string, d: string",
            "a: string, b: string, d: string",
            "a: string, b: string, c: string, d: string",
        ]
    );
}

#[test]
fn test_conflicting_optionals_widen_the_first() {
    let params = vec![optional("a", "string"), optional("b", "number")];

    let overloads = plan_overloads(&params);
    assert_eq!(overloads.len(), 1);
    assert_eq!(render(&overloads[0]), "a?: any, b?: number");
    assert_eq!(params[0].type_name, "string", "input must stay untouched");
}

#[test]
fn test_compatible_optionals_are_kept() {
    let params = vec![optional("sId", "string"), optional("mSettings", "any")];
    assert_eq!(plan_overloads(&params), vec![params.clone()]);
}

#[test]
fn test_only_the_first_conflicting_pair_is_widened() {
    let params = vec![
        optional("a", "string"),
        optional("b", "number"),
        optional("c", "boolean"),
    ];

    let overloads = plan_overloads(&params);
    assert_eq!(render_all(&overloads), vec!["a?: any, b?: number, c?: boolean"]);
}

#[test]
fn test_planning_is_deterministic() {
    let params = vec![
        optional("a", "string"),
        required("b", "number"),
        optional("c", "string"),
        optional("d", "number"),
    ];
    assert_eq!(plan_overloads(&params), plan_overloads(&params));
}
