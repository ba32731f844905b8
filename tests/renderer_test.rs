use nimbus::error::Error;
use nimbus::renderer::{MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_render_with_context() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({
        "name": "test",
        "value": 42
    });

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = engine.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_render_conditional() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "has_database": true });

    let result = engine
        .render("{% if has_database %}db{% else %}no db{% endif %}", &context)
        .unwrap();
    assert_eq!(result, "db");
}

#[test]
fn test_undefined_variable_is_an_error() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "name": "test" });

    let result = engine.render("Hello {{ missing }}!", &context);
    assert!(matches!(result, Err(Error::MinijinjaError(_))));
}

#[test]
fn test_malformed_template_is_an_error() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({});

    let result = engine.render("{% if %}", &context);
    assert!(result.is_err());
}
