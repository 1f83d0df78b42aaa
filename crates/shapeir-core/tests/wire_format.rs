//! Decoding containers in the form parsers hand them over

use proptest::prelude::*;
use serde_json::json;
use shapeir_core::{
    File, ObjectLiteralType, ObjectMember, PredefinedType, PrimitiveType, Type,
};

fn arb_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![
        prop::sample::select(PrimitiveType::ALL.to_vec()).prop_map(Type::Primitive),
        prop::sample::select(PredefinedType::ALL.to_vec()).prop_map(Type::Predefined),
        "[A-Z][a-zA-Z]{0,8}".prop_map(|name: String| Type::reference(name)),
        Just(Type::string_enum()),
        Just(Type::int32_enum()),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (any::<bool>(), inner.clone()).prop_map(|(readonly, el)| if readonly {
                Type::readonly_array(el)
            } else {
                Type::array(el)
            }),
            inner.clone().prop_map(|el| Type::promise(el)),
            inner.clone().prop_map(|el| Type::readonly(el)),
            inner.clone().prop_map(|el| Type::optional(el)),
            (inner.clone(), "[a-z0-9']{1,6}").prop_map(|(el, d)| Type::with_default(el, d)),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(ret, args)| Type::function(ret, args)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Type::union),
            (
                prop::collection::vec(
                    ("[a-z]{1,5}", inner.clone(), any::<bool>(), any::<bool>()),
                    0..4
                ),
                prop::collection::vec(inner.clone(), 0..2),
            )
                .prop_map(|(members, mixins)| {
                    let members = members
                        .into_iter()
                        .map(|(name, ty, optional, readonly)| ObjectMember {
                            name,
                            ty,
                            optional,
                            readonly,
                        })
                        .collect();
                    Type::ObjectLiteral(ObjectLiteralType::new(members).with_mixins(mixins))
                }),
            inner.clone().prop_map(|el| Type::bubbling_event(el)),
            inner.prop_map(|el| Type::direct_event(el)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_json_form_decodes_to_the_same_type(ty in arb_type()) {
        let encoded = serde_json::to_string(&ty).unwrap();
        let decoded: Type = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, ty);
    }
}

#[test]
fn test_decode_component_file() {
    let json = json!({
        "types": {
            "NativeProps": {
                "type": "object_literal",
                "mixins": [{"type": "reference", "name": "ViewProps"}],
                "members": [
                    {"name": "color", "type": "ColorValue", "optional": true},
                    {
                        "name": "size",
                        "type": {
                            "type": "with_default",
                            "element": "int32",
                            "defaultValue": "12"
                        },
                        "optional": true
                    },
                    {
                        "name": "onPress",
                        "type": {
                            "type": "DirectEventHandler",
                            "element": {"type": "reference", "name": "PressEvent"}
                        }
                    }
                ],
                "allMembersReadonly": false
            },
            "PressEvent": {
                "type": "object_literal",
                "mixins": [],
                "members": [{"name": "x", "type": "double", "readonly": true}],
                "allMembersReadonly": true
            }
        }
    });

    let file: File = serde_json::from_value(json).unwrap();
    assert_eq!(file.names().collect::<Vec<_>>(), vec!["NativeProps", "PressEvent"]);
    assert!(file.validate().is_ok());

    let Some(Type::ObjectLiteral(props)) = file.get("NativeProps") else {
        panic!("expected object literal");
    };
    assert_eq!(props.mixins, vec![Type::reference("ViewProps")]);
    assert_eq!(props.members.len(), 3);
    assert!(props.members[0].optional);
    assert!(!props.members[0].readonly);
    assert_eq!(
        props.members[1].ty,
        Type::with_default(Type::INT32, "12")
    );
}

#[test]
fn test_malformed_entry_fails_the_whole_decode() {
    let json = r#"{"types": {"Good": "string", "Bad": {"type": "tuple"}}}"#;
    let err = File::from_json(json).unwrap_err();
    assert!(err.to_string().contains("unknown variant `tuple`"), "{}", err);
}
