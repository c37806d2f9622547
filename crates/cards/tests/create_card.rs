use anyhow::Result;
use serde_json::json;

use cardweaver_cards::CreateCard;

fn minimal_payload() -> serde_json::Value {
    json!({
        "title": "Inferno Dragon",
        "description": "A legendary beast.",
        "category": "LEGENDARY",
        "appType": "MONSTER",
        "tags": ["fire", "dragon"],
        "element": "fire",
        "palette": {
            "color1": "#dd8448",
            "color2": "#ff9d66",
            "color3": "#ff6b35",
            "glow": "rgba(221, 132, 72, 0.5)"
        },
        "animations": {
            "borderRotation": true,
            "glowPulse": true,
            "chromatic": false,
            "particles": true
        }
    })
}

#[test]
fn minimal_payload_gets_defaults() -> Result<()> {
    let card = CreateCard::parse(&minimal_payload())?;

    assert_eq!(card.width, 380);
    assert_eq!(card.height, 480);
    assert_eq!(card.border_radius, 20);
    assert_eq!(card.font_family, "Rajdhani");
    assert_eq!(card.spacing.padding, 30);
    assert_eq!(card.spacing.gap, 12);
    assert_eq!(card.layout.content_align, "top");
    assert_eq!(card.layout.text_align, "left");
    assert_eq!(card.animations.duration, None);
    Ok(())
}

#[test]
fn explicit_values_override_defaults() -> Result<()> {
    let mut payload = minimal_payload();
    payload["width"] = json!(500);
    payload["borderRadius"] = json!(0);
    payload["fontFamily"] = json!("Orbitron");
    payload["layout"] = json!({ "contentAlign": "center", "textAlign": "right" });

    let card = CreateCard::parse(&payload)?;
    assert_eq!(card.width, 500);
    assert_eq!(card.border_radius, 0);
    assert_eq!(card.font_family, "Orbitron");
    assert_eq!(card.layout.content_align, "center");
    assert_eq!(card.layout.text_align, "right");
    Ok(())
}

#[test]
fn partial_spacing_fills_in_missing_field() -> Result<()> {
    let mut payload = minimal_payload();
    payload["spacing"] = json!({ "padding": 40 });

    let card = CreateCard::parse(&payload)?;
    assert_eq!(card.spacing.padding, 40);
    assert_eq!(card.spacing.gap, 12);
    Ok(())
}

#[test]
fn missing_title_names_the_field() {
    let mut payload = minimal_payload();
    payload.as_object_mut().unwrap().remove("title");

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.message, "title is required");
}

#[test]
fn first_offending_field_wins() {
    // Both title and category are missing; title comes first in schema order.
    let mut payload = minimal_payload();
    let obj = payload.as_object_mut().unwrap();
    obj.remove("title");
    obj.remove("category");

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "title");
}

#[test]
fn wrong_type_title_names_the_field() {
    let mut payload = minimal_payload();
    payload["title"] = json!(42);

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.message, "title must be a string");
}

#[test]
fn empty_title_is_rejected() {
    let mut payload = minimal_payload();
    payload["title"] = json!("");

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "title");
    assert_eq!(err.message, "title must not be empty");
}

#[test]
fn tags_must_hold_strings() {
    let mut payload = minimal_payload();
    payload["tags"] = json!(["fire", 7]);

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "tags");
}

#[test]
fn incomplete_palette_is_rejected() {
    let mut payload = minimal_payload();
    payload["palette"] = json!({ "color1": "#fff" });

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "palette");
}

#[test]
fn fractional_width_is_rejected() {
    let mut payload = minimal_payload();
    payload["width"] = json!(380.5);

    let err = CreateCard::parse(&payload).unwrap_err();
    assert_eq!(err.field, "width");
    assert_eq!(err.message, "width must be an integer");
}

#[test]
fn element_accepts_any_string() -> Result<()> {
    let mut payload = minimal_payload();
    payload["element"] = json!("plasma-unicorn");

    let card = CreateCard::parse(&payload)?;
    assert_eq!(card.element, "plasma-unicorn");
    Ok(())
}

#[test]
fn non_object_body_is_rejected() {
    let err = CreateCard::parse(&json!("not a card")).unwrap_err();
    assert_eq!(err.field, "body");
}

#[test]
fn animation_duration_is_kept() -> Result<()> {
    let mut payload = minimal_payload();
    payload["animations"]["duration"] = json!(1.5);

    let card = CreateCard::parse(&payload)?;
    assert_eq!(card.animations.duration, Some(1.5));
    Ok(())
}

#[test]
fn wire_shape_is_camel_case() -> Result<()> {
    let card = CreateCard::parse(&minimal_payload())?.into_card();
    let value = serde_json::to_value(&card)?;
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("appType"));
    assert!(obj.contains_key("borderRadius"));
    assert!(obj.contains_key("fontFamily"));
    assert!(obj.contains_key("createdAt"));
    assert!(!obj.contains_key("app_type"));

    // An unset duration stays off the wire entirely.
    assert!(!value["animations"].as_object().unwrap().contains_key("duration"));
    assert_eq!(value["animations"]["borderRotation"], json!(true));
    assert_eq!(value["layout"]["contentAlign"], json!("top"));
    Ok(())
}
