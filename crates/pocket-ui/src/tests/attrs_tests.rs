use super::*;
use crate::attrs;
use pocket_core::ConfigurationError;

#[test]
fn unknown_attribute_is_rejected() {
    let err = Label(attrs! { text: "x", colour: "#000000" }).expect_err("unknown");
    assert_eq!(
        err,
        ConfigurationError::UnknownAttribute {
            widget: "Label",
            attribute: "colour".into(),
        }
    );
}

#[test]
fn attribute_of_another_kind_is_unsupported() {
    let err = Label(attrs! { on_press: press(|| {}) }).expect_err("unsupported");
    assert!(matches!(
        err,
        ConfigurationError::UnsupportedAttribute { widget: "Label", ref attribute } if attribute == "on_press"
    ));
    let err = Spacer(attrs! { text: "nope" }).expect_err("unsupported");
    assert!(matches!(err, ConfigurationError::UnsupportedAttribute { widget: "Spacer", .. }));
    let err = VBox(attrs! { font_size: 12 }).expect_err("unsupported");
    assert!(matches!(err, ConfigurationError::UnsupportedAttribute { widget: "VBox", .. }));
}

#[test]
fn duplicate_attribute_is_rejected() {
    let attrs = Attrs::new().with("text", "a").with("text", "b");
    let err = Label(attrs).expect_err("duplicate");
    assert!(matches!(err, ConfigurationError::DuplicateAttribute { .. }));
}

#[test]
fn malformed_values_are_rejected() {
    let cases = [
        Label(attrs! { color: "#12" }),
        Label(attrs! { color: 12 }),
        Label(attrs! { text_align: "middle" }),
        Label(attrs! { width: -1 }),
        Label(attrs! { font_size: 0 }),
        Label(attrs! { padding: -2 }),
        Label(attrs! { text: true }),
        VBox(attrs! { spacing: "wide" }),
        VBox(attrs! { children: "none" }),
        Button(attrs! { on_press: "click" }),
        Button(attrs! { disabled: 1 }),
    ];
    for case in cases {
        let err = case.expect_err("invalid value");
        assert!(
            matches!(err, ConfigurationError::InvalidValue { .. }),
            "unexpected {err:?}"
        );
    }
}

#[test]
fn button_defaults() {
    let built = Button(attrs! {}).expect("button").build();
    match &built.kind {
        NodeKind::Button {
            text,
            font_size,
            on_press,
            disabled,
            ..
        } => {
            assert_eq!(text, "Button");
            assert_eq!(*font_size, 14.0);
            assert!(on_press.is_none());
            assert!(!disabled);
        }
        other => panic!("expected a button, got {other:?}"),
    }
    assert_eq!(built.style.background, Some(Color::from_hex("#007AFF").unwrap()));
    assert_eq!(built.style.foreground, Color::WHITE);
    assert_eq!(built.style.padding, EdgeInsets::symmetric(10.0, 20.0));
}

#[test]
fn padding_accepts_pairs_and_insets() {
    let pair = Label(attrs! { padding: (4, 8) }).expect("label");
    assert_eq!(pair.style().padding, EdgeInsets::symmetric(4.0, 8.0));
    let insets = EdgeInsets {
        left: 1.0,
        top: 2.0,
        right: 3.0,
        bottom: 4.0,
    };
    let explicit = Label(attrs! { padding: insets }).expect("label");
    assert_eq!(explicit.style().padding, insets);
}

#[test]
fn text_accepts_numbers_and_observables() {
    let number = Label(attrs! { text: 42 }).expect("label").build();
    assert_eq!(number.kind.text(), Some("42"));
    let name = Observable::new(String::from("Guest"));
    let bound = Label(attrs! { text: name.clone() }).expect("label");
    name.set("Ada".into()).expect("set");
    assert_eq!(bound.build().kind.text(), Some("Ada"));
    let mapped = Label(attrs! { text: Binding::bound(&name, |n| format!("Hi {n}")) })
        .expect("label");
    assert_eq!(mapped.build().kind.text(), Some("Hi Ada"));
}

#[test]
fn alignment_parses_aliases() {
    assert_eq!("left".parse::<Alignment>(), Ok(Alignment::Start));
    assert_eq!("center".parse::<Alignment>(), Ok(Alignment::Center));
    assert_eq!("right".parse::<Alignment>(), Ok(Alignment::End));
    assert_eq!("stretch".parse::<Alignment>(), Ok(Alignment::Stretch));
    assert!("middle".parse::<Alignment>().is_err());
}
