use lodestar_models::r4::{
    CodeSystem, CodeSystemContentMode, FilterOperator, PublicationStatus, Questionnaire,
    QuestionnaireItem, QuestionnaireItemEnableWhenAnswer, QuestionnaireItemType, Resource,
    ValueSet,
};
use lodestar_models::{registry, FhirShape};
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fs::File, path::PathBuf};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn load_fixture<T: DeserializeOwned>(relative: &str) -> T {
    let path = fixtures_root().join(relative);
    assert!(path.exists(), "fixture missing at {:?}", path);

    let file = File::open(&path).expect("failed to open fixture");
    serde_json::from_reader(file).expect("failed to deserialize fixture")
}

#[test]
fn parse_r4_value_set_example() {
    let vs: ValueSet = load_fixture("valueset-example.json");

    assert_eq!(vs.type_name(), "ValueSet");
    assert_eq!(vs.url.as_deref(), Some("http://hl7.org/fhir/ValueSet/example-extensional"));
    assert_eq!(vs.status, PublicationStatus::Draft);

    let compose = vs.compose.as_ref().expect("compose should be present");
    assert_eq!(compose.include.len(), 1);
    assert_eq!(compose.inactive, Some(true));

    let concepts = compose.include[0]
        .concept
        .as_ref()
        .expect("concepts should be present");
    assert_eq!(concepts.len(), 4);

    assert!(vs.meta.is_some());
    assert!(vs.text.is_some());
}

#[test]
fn parse_r4_code_system_example() {
    let cs: CodeSystem = load_fixture("codesystem-example.json");

    assert_eq!(cs.url.as_deref(), Some("http://hl7.org/fhir/CodeSystem/example"));
    assert_eq!(cs.content, CodeSystemContentMode::Complete);
    assert_eq!(cs.case_sensitive, Some(true));

    let concepts = cs.concept.as_ref().expect("concepts should be present");
    assert_eq!(concepts.len(), 3);
    assert_eq!(concepts[2].code, "chol");

    let filter = &cs.filter.as_ref().expect("filter should be present")[0];
    assert_eq!(filter.operator, vec![FilterOperator::Equal]);
}

#[test]
fn parse_r4_questionnaire_nested_items() {
    let q: Questionnaire = load_fixture("questionnaire-nested.json");

    fn find<'a>(items: &'a [QuestionnaireItem], link_id: &str) -> Option<&'a QuestionnaireItem> {
        items.iter().find_map(|item| {
            if item.link_id == link_id {
                Some(item)
            } else {
                find(item.item.as_deref().unwrap_or(&[]), link_id)
            }
        })
    }

    let items = q.item.as_deref().expect("items should be present");
    let smoker = find(items, "2.2.1").expect("nested item 2.2.1");
    assert_eq!(smoker.type_, QuestionnaireItemType::Boolean);

    let per_day = find(items, "2.2.2").expect("nested item 2.2.2");
    let condition = &per_day.enable_when.as_ref().expect("enableWhen")[0];
    assert_eq!(condition.answer, Some(QuestionnaireItemEnableWhenAnswer::Boolean(true)));
}

#[test]
fn fixtures_round_trip_exactly() {
    for name in [
        "codesystem-example.json",
        "valueset-example.json",
        "questionnaire-nested.json",
    ] {
        let original: Value = load_fixture(name);
        let resource: Resource = load_fixture(name);

        assert!(registry().is_resource(resource.resource_type()));
        let written = serde_json::to_value(&resource).expect("failed to serialize");
        assert_eq!(written, original, "round trip changed {name}");
    }
}
