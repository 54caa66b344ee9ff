use figura_codegen::{ComponentTransformer, Dialect, TransformOptions, TransformedComponent};
use figura_core::{
    Color, DesignDocument, DesignTree, NodeId, NodeSpec, Paint, TreeLimits, VariantValue,
};
use pretty_assertions::assert_eq;

fn transform(spec: NodeSpec, options: TransformOptions) -> TransformedComponent {
    let id = spec.id.clone();
    let (tree, aliases) =
        DesignTree::from_document(DesignDocument::Node(Box::new(spec)), &TreeLimits::default())
            .unwrap();
    ComponentTransformer::new(options)
        .unwrap()
        .transform(&tree, &aliases, &id)
        .unwrap()
}

fn login_button() -> NodeSpec {
    NodeSpec::frame("1:2", "Login Button")
        .with_size(120.0, 40.0)
        .with_fill(Paint::solid(Color::rgb(0.0, 123.0 / 255.0, 1.0)))
        .with_corner_radius(6.0)
        .with_child(NodeSpec::text("1:3", "Label", "Login"))
}

fn primary_button() -> NodeSpec {
    NodeSpec::instance("5:1", "Primary Button")
        .with_size(160.0, 48.0)
        .with_fill(Paint::solid(Color::from_rgb8(0x1d, 0x4e, 0xd8)))
        .with_stroke(Paint::solid(Color::from_rgb8(0x1e, 0x40, 0xaf)), 2.0)
        .with_corner_radius(8.0)
        .with_variant("State", VariantValue::EnumVariant("Default".into()))
        .with_variant("Disabled", VariantValue::Boolean(false))
        .with_child(NodeSpec::text("5:2", "Label", "Get started").with_font("Inter", 16.0, 600.0))
        .with_child(NodeSpec::rectangle("5:3", "Icon").with_size(16.0, 16.0))
}

#[test]
fn login_button_inline() {
    let component = transform(login_button(), TransformOptions::default());
    insta::assert_snapshot!("login_button_inline", component.artifacts.component.content);
}

#[test]
fn primary_button_scss() {
    let component = transform(
        primary_button(),
        TransformOptions {
            dialect: Dialect::Scss,
            include_type_declarations: true,
            ..Default::default()
        },
    );
    insta::assert_snapshot!("primary_button_scss", component.artifacts.component.content);

    let stylesheet = component.artifacts.stylesheet.unwrap();
    assert_eq!(stylesheet.path, "primary-button.scss");
    insta::assert_snapshot!("primary_button_stylesheet", stylesheet.content);

    let types = component.artifacts.type_declarations.unwrap();
    assert_eq!(
        types.content,
        "export interface PrimaryButtonProps {\n  /** Variant property \"State\" */\n  state?: string;\n  /** Variant property \"Disabled\" */\n  disabled?: boolean;\n  /** Whether the component is rendered */\n  visible?: boolean;\n}\n"
    );
}

#[test]
fn generation_is_deterministic() {
    for dialect in [
        Dialect::Inline,
        Dialect::Css,
        Dialect::Scss,
        Dialect::StyledComponents,
        Dialect::Tailwind,
    ] {
        let options = TransformOptions {
            dialect,
            ..Default::default()
        };
        let first = transform(primary_button(), options.clone());
        let second = transform(primary_button(), options);
        assert_eq!(first.artifacts, second.artifacts);
        assert_eq!(first.styles, second.styles);
    }
}

#[test]
fn login_button_metadata() {
    let component = transform(login_button(), TransformOptions::default());
    assert_eq!(component.name, "LoginButton");
    assert_eq!(component.metadata.original_id, NodeId::from("1:2"));
    assert_eq!(
        serde_json::to_value(&component.styles).unwrap(),
        serde_json::json!({
            "width": 120.0,
            "height": 40.0,
            "backgroundColor": "#007bff",
            "borderRadius": 6.0,
        })
    );
}
