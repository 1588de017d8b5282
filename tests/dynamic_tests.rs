use indexmap::IndexMap;
use keywordmap::dynamic::{keyword_arguments, keyword_names, keyword_types};
use keywordmap::{describe, ArgumentSpec, HostType, LibraryManifest, LibraryReport, TypeConverter};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

fn manifest() -> LibraryManifest {
    LibraryManifest::from_path(Path::new("tests/data/demo_library.json")).unwrap()
}

fn converter(manifest: &LibraryManifest) -> TypeConverter {
    TypeConverter::new()
        .with_enums(manifest.enums.clone())
        .with_converters(IndexMap::from([(
            "System.Guid".to_string(),
            "uuid".to_string(),
        )]))
}

#[test]
fn test_keyword_names_in_enumeration_order() {
    let manifest = manifest();
    let library = describe(manifest.resolve("DemoKeywords").unwrap());

    assert_eq!(keyword_names(&library).len(), 6);
    assert_eq!(keyword_names(&library)[0], "get_AProperty");
}

#[test]
fn test_overloaded_keyword_arguments() {
    let manifest = manifest();
    let library = describe(manifest.resolve("DemoKeywords").unwrap());

    let specs = keyword_arguments(&library, "DoSomethingWithAnString").unwrap();
    assert_eq!(
        serde_json::to_value(&specs).unwrap(),
        json!([["value", null], ["value2", null]])
    );

    let rendered: Vec<String> = specs.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["value=None", "value2=None"]);
}

#[test]
fn test_keyword_types_map_every_declared_type() {
    let manifest = manifest();
    let library = describe(manifest.resolve("DemoKeywords").unwrap());
    let converter = converter(&manifest);

    let types = keyword_types(&library, "DoSomethingWithAnString", &converter).unwrap();
    assert_eq!(types["value"], vec![HostType::Str, HostType::Int]);

    let paint = keyword_types(&library, "Paint", &converter).unwrap();
    assert_eq!(
        paint["target"],
        vec![HostType::Custom {
            target: "uuid".to_string()
        }]
    );
    assert_eq!(
        paint["shade"],
        vec![HostType::Optional {
            inner: Box::new(HostType::Float)
        }]
    );

    let log = keyword_types(&library, "Log", &converter).unwrap();
    assert_eq!(log["level"][0].to_string(), "Level");
    assert!(matches!(&log["level"][0], HostType::Enum { members, .. } if members.len() == 3));
}

#[test]
fn test_required_then_optional_specs() {
    let manifest = manifest();
    let library = describe(manifest.resolve("DemoKeywords").unwrap());

    assert_eq!(
        keyword_arguments(&library, "Log").unwrap(),
        vec![
            ArgumentSpec::Required("message".to_string()),
            ArgumentSpec::Optional("level".to_string()),
        ]
    );
    assert!(keyword_arguments(&library, "Missing").is_none());
    assert!(keyword_types(&library, "Missing", &TypeConverter::new()).is_none());
}

#[test]
fn test_report_matches_projection() {
    let manifest = manifest();
    let library = describe(manifest.resolve("DemoKeywords").unwrap());
    let report = LibraryReport::from_descriptor(&library, &converter(&manifest));

    assert_eq!(report.keywords.len(), 6);
    assert_eq!(report.overloaded_count(), 1);

    let paint = report.keyword("Paint").unwrap();
    assert_eq!(
        paint.argument_specs,
        keyword_arguments(&library, "Paint").unwrap()
    );
}
