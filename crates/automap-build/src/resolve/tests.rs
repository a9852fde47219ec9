use super::*;
use automap_schema::node::{Accessor, Marker, MarkerValue};
use proptest::prelude::*;

fn accessor(name: &str) -> Accessor {
    Accessor::new(name, "java.lang.String")
}

fn key_marker(simple: &str, attr: &str, value: &str) -> Marker {
    Marker::new(format!("com.example.{simple}")).attr(attr, value)
}

#[test]
fn unmarked_accessor_keeps_its_name() {
    let spec = resolve("name", &accessor("name"));

    assert_eq!(
        spec,
        PropertySpec {
            key: "name".into(),
            name: "name".into(),
            ty: "java.lang.String".into(),
            value: "name()".into(),
            nullable: String::new(),
        }
    );
    assert!(!spec.is_nullable());
}

#[test]
fn unrelated_markers_are_ignored() {
    let acc = accessor("name")
        .marker(Marker::new("java.lang.Deprecated"))
        .marker(Marker::new("com.example.Value").attr("value", "nope"));

    assert_eq!(resolve("name", &acc).key, "name");
}

#[test]
fn each_key_marker_overrides_on_its_own() {
    let cases = [
        ("Json", "name"),
        ("Field", "value"),
        ("Header", "value"),
        ("Part", "value"),
        ("Query", "value"),
        ("SerializedName", "value"),
    ];

    for (simple, attr) in cases {
        let acc = accessor("id").marker(key_marker(simple, attr, "identifier"));

        assert_eq!(resolve("id", &acc).key, "identifier", "marker {simple}");
    }
}

#[test]
fn json_reads_name_not_value() {
    let acc = accessor("id").marker(key_marker("Json", "value", "ignored"));

    assert_eq!(resolve("id", &acc).key, "id");
}

#[test]
fn blank_or_missing_attribute_leaves_name() {
    let blank = accessor("id").marker(key_marker("SerializedName", "value", "   "));
    let missing = accessor("id").marker(Marker::new("com.google.gson.annotations.SerializedName"));

    assert_eq!(resolve("id", &blank).key, "id");
    assert_eq!(resolve("id", &missing).key, "id");
}

#[test]
fn override_is_trimmed() {
    let acc = accessor("id").marker(key_marker("Query", "value", "  q  "));

    assert_eq!(resolve("id", &acc).key, "q");
}

#[test]
fn last_key_marker_wins() {
    let acc = accessor("id")
        .marker(key_marker("SerializedName", "value", "first"))
        .marker(key_marker("Json", "name", "second"));

    assert_eq!(resolve("id", &acc).key, "second");
}

#[test]
fn blank_later_marker_does_not_discard_earlier_key() {
    let acc = accessor("id")
        .marker(key_marker("SerializedName", "value", "first"))
        .marker(key_marker("Json", "name", ""));

    assert_eq!(resolve("id", &acc).key, "first");
}

#[test]
fn map_key_beats_markers_in_any_position() {
    let before = accessor("id")
        .marker(key_marker("MapKey", "value", " explicit "))
        .marker(key_marker("SerializedName", "value", "serialized"));
    let after = accessor("id")
        .marker(key_marker("SerializedName", "value", "serialized"))
        .marker(key_marker("MapKey", "value", "explicit"));

    assert_eq!(resolve("id", &before).key, "explicit");
    assert_eq!(resolve("id", &after).key, "explicit");
}

#[test]
fn blank_map_key_falls_back_to_name() {
    let acc = accessor("id")
        .marker(key_marker("SerializedName", "value", "serialized"))
        .marker(key_marker("MapKey", "value", " "));

    assert_eq!(resolve("id", &acc).key, "id");
}

#[test]
fn nullable_is_emitted_qualified() {
    let acc = accessor("nick").marker(Marker::new("javax.annotation.Nullable"));
    let spec = resolve("nick", &acc);

    assert_eq!(spec.nullable, "@javax.annotation.Nullable ");
    assert!(spec.is_nullable());
    assert_eq!(spec.key, "nick");
}

#[test]
fn non_text_values_use_their_source_text() {
    let acc = accessor("code").marker(Marker::new("com.example.Field").attr("value", 42_i64));

    assert_eq!(resolve("code", &acc).key, "42");
}

#[test]
fn configured_names_join_builtin_rules() {
    let table = MarkerTable::from_config(&MarkerConfig {
        nullable: vec!["CheckForNull".into()],
        value_attribute: vec!["FormField".into(), "Json".into()],
        map_key: vec!["StoreKey".into()],
        ..MarkerConfig::default()
    });
    let resolver = PropertyResolver::new(&table);

    let acc = accessor("id")
        .marker(Marker::new("edu.umd.cs.findbugs.annotations.CheckForNull"))
        .marker(key_marker("FormField", "value", "form"));
    let spec = resolver.resolve("id", &acc);
    assert_eq!(spec.key, "form");
    assert_eq!(spec.nullable, "@edu.umd.cs.findbugs.annotations.CheckForNull ");

    // built-in rule kept: Json still reads `name`
    assert_eq!(table.rule("Json"), Some(MarkerRule::Key(KeyAttribute::Name)));

    let acc = accessor("id")
        .marker(key_marker("StoreKey", "value", "stored"))
        .marker(key_marker("Json", "name", "json"));
    assert_eq!(resolver.resolve("id", &acc).key, "stored");
}

#[test]
fn rule_display_names_the_role() {
    assert_eq!(MarkerRule::Key(KeyAttribute::Name).to_string(), "key(name)");
    assert_eq!(MarkerRule::MapKey.to_string(), "map-key");
}

//
// Properties
//

const KEY_MARKERS: [(&str, &str); 6] = [
    ("Json", "name"),
    ("Field", "value"),
    ("Header", "value"),
    ("Part", "value"),
    ("Query", "value"),
    ("SerializedName", "value"),
];

fn arb_key_marker() -> impl Strategy<Value = (Marker, String)> {
    (0..KEY_MARKERS.len(), "[a-z][a-z0-9_]{0,7}").prop_map(|(i, key)| {
        let (simple, attr) = KEY_MARKERS[i];
        (key_marker(simple, attr, &key), key)
    })
}

proptest! {
    #[test]
    fn last_non_blank_key_marker_wins(markers in prop::collection::vec(arb_key_marker(), 1..6)) {
        let expected = markers.last().map(|(_, key)| key.clone()).unwrap();
        let acc = markers
            .into_iter()
            .fold(accessor("prop"), |acc, (marker, _)| acc.marker(marker));

        prop_assert_eq!(resolve("prop", &acc).key, expected);
    }

    #[test]
    fn key_is_never_blank(
        name in "[a-z][a-zA-Z0-9]{0,7}",
        raw in prop::collection::vec("[ a-z]{0,4}", 0..4),
    ) {
        let acc = raw.iter().fold(accessor(&name), |acc, value| {
            acc.marker(Marker::new("SerializedName").attr("value", MarkerValue::Text(value.clone())))
        });

        let spec = resolve(&name, &acc);
        prop_assert!(!spec.key.trim().is_empty());
        prop_assert_eq!(spec.name, name);
    }
}
