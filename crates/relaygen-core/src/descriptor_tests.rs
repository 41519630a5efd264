use indoc::indoc;

use crate::{
    DescriptorError, HeaderAnnotation, MemberDescriptor, ParameterRole, ResponseKind,
    parse_descriptors,
};

const API_JSON: &str = indoc! {r#"
    {
        "name": "IUsersApi",
        "namespace": ["Contoso", "Clients"],
        "headers": [{"name": "User-Agent", "value": "relaygen"}],
        "members": [
            {"kind": "property", "name": "ApiKey", "type": "string", "has_setter": true},
            {"kind": "requester_property", "name": "Requester", "type": "global::RestEase.IRequester"},
            {"kind": "dispose"},
            {
                "kind": "method",
                "name": "GetUserAsync",
                "return_type": "global::System.Threading.Tasks.Task<User>",
                "request": {"method": "GET", "path": "users/{id}"},
                "response": {"kind": "deserialized", "type": "User"},
                "parameters": [
                    {"name": "id", "type": "string", "role": {"kind": "path"}},
                    {"name": "verbose", "type": "bool"}
                ]
            }
        ]
    }
"#};

#[test]
fn parse_single_object() {
    let descriptors = parse_descriptors(API_JSON).unwrap();
    assert_eq!(descriptors.len(), 1);

    let api = &descriptors[0];
    assert_eq!(api.name, "IUsersApi");
    assert_eq!(api.namespace, vec!["Contoso", "Clients"]);
    assert_eq!(api.headers[0].value.as_deref(), Some("relaygen"));
    assert_eq!(api.members.len(), 4);
    assert!(matches!(api.members[2], MemberDescriptor::Dispose));

    let MemberDescriptor::Property(prop) = &api.members[0] else {
        panic!("expected property, got {:?}", api.members[0]);
    };
    assert!(prop.has_getter);
    assert!(prop.has_setter);
    assert!(!prop.is_explicit);

    let MemberDescriptor::Method(method) = &api.members[3] else {
        panic!("expected method, got {:?}", api.members[3]);
    };
    assert_eq!(
        method.response,
        ResponseKind::Deserialized {
            type_name: "User".to_string()
        }
    );
    assert_eq!(method.parameters[0].role, ParameterRole::Path { name: None });
    assert_eq!(method.parameters[1].role, ParameterRole::Query);
}

#[test]
fn parse_array() {
    let json = r#"[{"name": "IA"}, {"name": "IB"}]"#;
    let descriptors = parse_descriptors(json).unwrap();
    let names: Vec<_> = descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["IA", "IB"]);
    assert!(descriptors[0].members.is_empty());
    assert!(!descriptors[0].has_headers());
}

#[test]
fn parse_rejects_unknown_member_kind() {
    let json = r#"{"name": "IA", "members": [{"kind": "event", "name": "Changed"}]}"#;
    assert!(parse_descriptors(json).is_err());
}

#[test]
fn member_names_skip_dispose_and_strip_marker() {
    let json = indoc! {r#"
        {
            "name": "IA",
            "members": [
                {"kind": "dispose"},
                {"kind": "property", "name": "@requester", "type": "int"},
                {"kind": "method", "name": "Get", "return_type": "Task"},
                {"kind": "method", "name": "Get", "return_type": "Task"}
            ]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    let names: Vec<_> = descriptor.member_names().into_iter().collect();
    assert_eq!(names, vec!["requester", "Get"]);
}

#[test]
fn validate_accepts_escaped_names() {
    let json = r#"{"name": "@event", "type_parameters": [{"name": "class"}]}"#;
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(descriptor.validate(), Ok(()));
    assert_eq!(descriptor.raw_name(), "event");
    assert_eq!(descriptor.arity(), 1);
}

#[test]
fn validate_rejects_bad_identifier() {
    let json = r#"{"name": "IApi", "namespace": ["Contoso.Clients"]}"#;
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(
        descriptor.validate(),
        Err(DescriptorError::InvalidIdentifier {
            what: "namespace segment",
            name: "Contoso.Clients".to_string(),
        })
    );
}

#[test]
fn validate_rejects_untyped_parameter() {
    let json = indoc! {r#"
        {
            "name": "IApi",
            "members": [{
                "kind": "method",
                "name": "Get",
                "return_type": "Task",
                "parameters": [{"name": "id", "type": " "}]
            }]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(
        descriptor.validate(),
        Err(DescriptorError::MissingType {
            what: "parameter",
            name: "id".to_string(),
        })
    );
}

#[test]
fn header_annotation_validation() {
    let header = HeaderAnnotation::new("X-Env", Some("prod")).unwrap();
    assert_eq!(header.value.as_deref(), Some("prod"));
    assert!(HeaderAnnotation::new("Accept", None).is_ok());

    assert_eq!(
        HeaderAnnotation::new("", Some("x")),
        Err(DescriptorError::EmptyHeaderName)
    );
    assert_eq!(
        HeaderAnnotation::new("X-Env: prod", None),
        Err(DescriptorError::HeaderNameColon("X-Env: prod".to_string()))
    );
}

#[test]
fn validate_checks_method_headers() {
    let json = indoc! {r#"
        {
            "name": "IApi",
            "members": [{
                "kind": "method",
                "name": "Get",
                "return_type": "Task",
                "headers": [{"name": "Bad:Name"}]
            }]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(
        descriptor.validate(),
        Err(DescriptorError::HeaderNameColon("Bad:Name".to_string()))
    );
}

#[test]
fn validate_rejects_property_without_accessors() {
    let json = indoc! {r#"
        {
            "name": "IApi",
            "members": [{"kind": "property", "name": "Key", "type": "string", "has_getter": false}]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(
        descriptor.validate(),
        Err(DescriptorError::NoAccessors("Key".to_string()))
    );
}

#[test]
fn reserved_names_include_type_parameters() {
    let json = indoc! {r#"
        {
            "name": "IA",
            "type_parameters": [{"name": "@requester"}, {"name": "T"}],
            "members": [{"kind": "property", "name": "T", "type": "int"}]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    let names: Vec<_> = descriptor.reserved_names().into_iter().collect();
    assert_eq!(names, vec!["requester", "T"]);
}

#[test]
fn validate_rejects_type_text_that_escapes_its_declaration() {
    let json = indoc! {r#"
        {
            "name": "IApi",
            "members": [{"kind": "property", "name": "P", "type": "int { get; } }\n} class Evil {"}]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(
        descriptor.validate(),
        Err(DescriptorError::MalformedType {
            what: "property",
            name: "P".to_string(),
            type_name: "int { get; } }\n} class Evil {".to_string(),
        })
    );
}

#[test]
fn validate_checks_every_type_position() {
    let cases = [
        (r#"{"name": "I", "members": [{"kind": "method", "name": "M", "return_type": "Task<int"}]}"#, "method"),
        (
            r#"{"name": "I", "members": [{"kind": "method", "name": "M", "return_type": "Task",
                "parameters": [{"name": "p", "type": "int)"}]}]}"#,
            "parameter",
        ),
        (
            r#"{"name": "I", "members": [{"kind": "method", "name": "M", "return_type": "Task",
                "response": {"kind": "deserialized", "type": "User; }"}}]}"#,
            "response",
        ),
        (
            r#"{"name": "I", "type_parameters": [{"name": "T", "constraints": ["class // x"]}]}"#,
            "constraint",
        ),
        (r#"{"name": "I", "members": [{"kind": "property", "name": "P", "type": "int[>"}]}"#, "property"),
    ];

    for (json, expected) in cases {
        let descriptor = parse_descriptors(json).unwrap().remove(0);
        match descriptor.validate() {
            Err(DescriptorError::MalformedType { what, .. }) => assert_eq!(what, expected),
            other => panic!("{expected}: expected malformed type, got {other:?}"),
        }
    }
}

#[test]
fn validate_accepts_ordinary_type_text() {
    let json = indoc! {r#"
        {
            "name": "IApi",
            "type_parameters": [{"name": "T", "constraints": ["class", "new()", "global::System.IComparable<T>"]}],
            "members": [
                {"kind": "property", "name": "A", "type": "global::System.Collections.Generic.Dictionary<string, int[]>"},
                {"kind": "property", "name": "B", "type": "(int Count, string? Name)"},
                {
                    "kind": "method",
                    "name": "M",
                    "return_type": "global::System.Threading.Tasks.Task<global::RestEase.Response<T>>",
                    "response": {"kind": "response", "type": "T"}
                }
            ]
        }
    "#};
    let descriptor = parse_descriptors(json).unwrap().remove(0);
    assert_eq!(descriptor.validate(), Ok(()));
}
