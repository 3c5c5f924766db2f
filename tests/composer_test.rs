//! Settings Page Composition Tests
//!
//! Tests for the composed settings tree including:
//! - Fixed top-level order and collapse states
//! - Wildcard cleaning options
//! - Value population from persisted settings
//! - Assets and client flags published to the host
//! - Determinism across renders

mod common;

use common::{TestFixture, defaults_with};
use jumplinks_config::{
    ADMIN_FLAG, COMPANION_FLAG, Collapse, FieldKind, FieldNode, KindRegistry, RenderContext,
};
use serde_json::json;

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_top_level_order() {
    let fixture = TestFixture::new();
    let tree = fixture.compose();

    let labels: Vec<_> = tree.children().iter().map(FieldNode::label).collect();
    assert_eq!(
        labels,
        vec![
            Some("Wildcard Cleaning"),
            Some("Legacy Domain"),
            Some("404 Monitor"),
            Some("Disable index.php matching"),
            Some("Info & Support"),
        ]
    );

    assert!(tree.children()[0].as_group().is_some());
    assert!(tree.children()[1].as_group().is_some());
    assert_eq!(
        tree.children()[2].as_field().unwrap().key(),
        Some("enable404Monitor")
    );
    assert_eq!(
        tree.children()[3].as_field().unwrap().key(),
        Some("disableIndexPhpMatching")
    );
    assert!(tree.children()[4].as_group().is_some());
}

#[test]
fn test_order_ignores_persisted_values() {
    let fixture = TestFixture::new();

    let (plain, _) = fixture.render(json!({}));
    let (changed, _) = fixture.render(json!({
        "_schemaVersion": 1,
        "wildcardCleaning": "noClean",
        "enable404Monitor": true,
        "legacyDomain": "http://old.example.com/"
    }));

    let shape = |tree: &jumplinks_config::FieldGroup| {
        tree.fields()
            .iter()
            .map(|f| f.key().unwrap_or_default().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&plain), shape(&changed));
}

#[test]
fn test_collapse_states() {
    let fixture = TestFixture::new();
    let tree = fixture.compose();

    let collapsed: Vec<_> = tree.children().iter().map(FieldNode::collapsed).collect();
    assert_eq!(
        collapsed,
        vec![
            Collapse::Never,
            Collapse::Yes,
            Collapse::Blank,
            Collapse::Blank,
            Collapse::No,
        ]
    );
    assert_eq!(tree.find("moduleDebug").unwrap().collapsed, Collapse::Blank);
}

#[test]
fn test_wildcard_cleaning_group() {
    let fixture = TestFixture::new();
    let tree = fixture.compose();
    let group = tree.find_group("Wildcard Cleaning").unwrap();

    assert_eq!(group.len(), 2);

    let select = group.children()[0].as_field().unwrap();
    assert_eq!(select.kind, FieldKind::Radios);
    assert_eq!(select.option_values(), vec!["fullClean", "semiClean", "noClean"]);
    assert_eq!(select.options[0].label, "Full Clean (default, recommended)");
    assert_eq!(select.column_width, Some(50));
    assert!(select.skip_label_header);

    let enhanced = group.children()[1].as_field().unwrap();
    assert_eq!(enhanced.kind, FieldKind::Checkbox);
    assert_eq!(enhanced.label.as_deref(), Some("Enhanced Wildcard Cleaning"));
    assert_eq!(enhanced.column_width, Some(50));
    assert!(enhanced.autocheck);
    assert!(
        enhanced
            .notes
            .as_deref()
            .unwrap()
            .contains("only works when Wildcard Cleaning is enabled")
    );
}

#[test]
fn test_legacy_domain_group() {
    let fixture = TestFixture::new();
    let tree = fixture.compose();
    let group = tree.find_group("Legacy Domain").unwrap();

    assert!(group.description.as_deref().unwrap().contains("#legacy-domain"));

    let keys: Vec<_> = group
        .children()
        .iter()
        .filter_map(FieldNode::as_field)
        .map(|f| (f.key().unwrap(), f.kind, f.column_width))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("legacyDomain", FieldKind::Text, Some(50)),
            ("statusCodes", FieldKind::Text, Some(50)),
        ]
    );

    let codes = tree.find("statusCodes").unwrap();
    assert!(codes.notes.as_deref().unwrap().contains("#resetLegacyStatusCodes"));
    assert_eq!(codes.extra("spellcheck"), Some(&json!(false)));
    assert!(tree.find("legacyDomain").unwrap().extra("placeholder").is_some());
}

#[test]
fn test_info_support_group() {
    let fixture = TestFixture::new();
    let tree = fixture.compose();
    let group = tree.find_group("Info & Support").unwrap();

    let entries: Vec<_> = group
        .children()
        .iter()
        .filter_map(FieldNode::as_field)
        .map(|f| (f.key().unwrap(), f.kind))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("moduleDebug", FieldKind::Checkbox),
            ("docsSupport", FieldKind::Markup),
            ("moduleRecommendations", FieldKind::Markup),
            ("supportDevelopment", FieldKind::Markup),
        ]
    );
}

#[test]
fn test_every_alias_pair_matches() {
    let fixture = TestFixture::new();
    let tree = fixture.compose();

    for field in tree.fields() {
        if field.kind.holds_setting() {
            assert_eq!(field.name, field.id, "bindings differ for {:?}", field.key());
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_populates_values() {
    let fixture = TestFixture::new();
    let (tree, _) = fixture.render(json!({
        "_schemaVersion": 1,
        "wildcardCleaning": "semiClean",
        "statusCodes": "200 abc"
    }));

    assert_eq!(tree.find("wildcardCleaning").unwrap().value, Some(json!("semiClean")));
    // Not validated, passed straight through
    assert_eq!(tree.find("statusCodes").unwrap().value, Some(json!("200 abc")));
    assert_eq!(tree.find("moduleDebug").unwrap().value, Some(json!(false)));
    assert_eq!(tree.find("legacyDomain").unwrap().value, Some(json!("")));
}

#[test]
fn test_render_publishes_assets_and_flags() {
    let fixture = TestFixture::new();
    let (_, ctx) = fixture.render(json!({}));

    assert_eq!(
        ctx.scripts,
        vec!["/site/modules/ProcessJumplinks/Assets/ProcessJumplinks.min.js"]
    );
    assert_eq!(
        ctx.styles,
        vec!["/site/modules/ProcessJumplinks/Assets/ProcessJumplinks.css"]
    );
    assert_eq!(ctx.flag(ADMIN_FLAG), Some(true));
    assert_eq!(ctx.flag(COMPANION_FLAG), Some(false));
}

#[test]
fn test_companion_flag_does_not_change_tree() {
    let without = TestFixture::new();
    let with = TestFixture::with_companion();

    let (tree_without, ctx_without) = without.render(json!({}));
    let (tree_with, ctx_with) = with.render(json!({}));

    assert_eq!(ctx_without.flag(COMPANION_FLAG), Some(false));
    assert_eq!(ctx_with.flag(COMPANION_FLAG), Some(true));
    assert_eq!(tree_without, tree_with);
}

#[test]
fn test_compose_is_deterministic() {
    let fixture = TestFixture::new();

    assert_eq!(fixture.compose(), fixture.compose());

    let values = defaults_with(json!({ "moduleDebug": true }));
    let composer = fixture.composer();
    let mut first_ctx = RenderContext::new();
    let mut second_ctx = RenderContext::new();
    let first = composer
        .input_fields(&values, &fixture.installed, &mut first_ctx)
        .unwrap();
    let second = composer
        .input_fields(&values, &fixture.installed, &mut second_ctx)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first_ctx, second_ctx);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_unregistered_kind_fails_render() {
    let mut fixture = TestFixture::new();
    fixture.registry = KindRegistry::standard();
    fixture.registry.unregister("InputfieldRadios");

    let mut ctx = RenderContext::new();
    let err = fixture
        .composer()
        .input_fields(&jumplinks_config::defaults(), &fixture.installed, &mut ctx)
        .unwrap_err();

    assert!(err.is_lookup_error());
    assert!(err.to_string().contains("InputfieldRadios"));
}

#[test]
fn test_tree_serializes_for_host() {
    let fixture = TestFixture::new();
    let json = serde_json::to_value(fixture.compose()).unwrap();

    assert_eq!(json["kind"], json!("InputfieldFieldset"));
    assert_eq!(json["children"][0]["label"], json!("Wildcard Cleaning"));
    assert_eq!(json["children"][0]["collapsed"], json!("never"));
    assert_eq!(
        json["children"][0]["children"][0]["options"][1],
        json!({ "value": "semiClean", "label": "Clean, but don't change case" })
    );
    assert_eq!(json["children"][2]["name"], json!("enable404Monitor"));
}
