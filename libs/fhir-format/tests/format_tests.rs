use lodestar_format::{
    from_str, resource_from_str, resource_from_value, to_string, to_value, ErrorKind, FormatConfig,
    FormatError, JsonCodec,
};
use lodestar_models::r4::{
    Claim, ClaimAccidentLocation, ClaimDiagnosisDiagnosis, ClaimItemLocation, ClaimItemServiced,
    ClaimSupportingInfoTiming, ClaimSupportingInfoValue, CodeSystem, CodeSystemConceptProperty,
    CodeSystemConceptPropertyValue, CodeSystemContentMode, Decimal, DosageAsNeeded,
    DosageDoseAndRateDose, DosageDoseAndRateRate, Encounter, EncounterStatus, MedicationKnowledge,
    MedicationKnowledgeAdministrationGuidelinesIndication,
    MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic,
    MedicationKnowledgeDrugCharacteristicValue, OpenValue, Organization, PlanDefinition,
    PublicationStatus, QuantityComparator, Resource, StructureMap, TestScript, TimingRepeatBounds,
    UsageContextValue, ValueSet,
};
use lodestar_models::registry;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Helper to get test data directory
fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// Discover all JSON fixtures (file names) in the data directory
fn discover_test_cases() -> Vec<String> {
    let mut cases: Vec<String> = fs::read_dir(test_data_dir())
        .map(|entries| {
            entries
                .flatten()
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.ends_with(".json"))
                .collect()
        })
        .unwrap_or_default();
    cases.sort();
    cases
}

fn load_test_file(name: &str) -> String {
    let path = test_data_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
}

fn load_json(name: &str) -> Value {
    serde_json::from_str(&load_test_file(name)).expect("Failed to parse JSON")
}

/// Adds an unrecognised member to every object in the tree
fn inject_unknown_members(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for member in map.values_mut() {
                inject_unknown_members(member);
            }
            map.insert(
                "x-lodestar-unrecognised".to_string(),
                json!({"nested": [1, "two", {"three": true}]}),
            );
        }
        Value::Array(items) => items.iter_mut().for_each(inject_unknown_members),
        _ => {}
    }
}

fn find_nulls(value: &Value, at: &str, found: &mut Vec<String>) {
    match value {
        Value::Null => found.push(at.to_string()),
        Value::Object(map) => {
            for (key, member) in map {
                find_nulls(member, &format!("{at}.{key}"), found);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                find_nulls(item, &format!("{at}[{i}]"), found);
            }
        }
        _ => {}
    }
}

fn hierarchy() -> Value {
    load_json("codesystem-hierarchy.json")
}

// ============================================================================
// Fixture laws
// ============================================================================

#[test]
fn test_data_files_exist() {
    let test_cases = discover_test_cases();
    assert!(
        !test_cases.is_empty(),
        "No test cases found in {}",
        test_data_dir().display()
    );
    println!("Discovered {} test case(s): {:?}", test_cases.len(), test_cases);
}

#[test]
fn test_round_trip_all_fixtures() {
    for name in discover_test_cases() {
        let original = load_json(&name);
        let resource = resource_from_value(original.clone())
            .unwrap_or_else(|err| panic!("{name}: decode failed: {err}"));
        let written = to_value(&resource).unwrap_or_else(|err| panic!("{name}: {err}"));
        assert_eq!(written, original, "{name}: round trip changed the document");

        let again = resource_from_value(written).unwrap();
        assert_eq!(again, resource, "{name}: second decode differs");
    }
}

#[test]
fn test_round_trip_through_text() {
    for name in discover_test_cases() {
        let text = load_test_file(&name);
        let resource = resource_from_str(&text).unwrap();
        let compact = to_string(&resource).unwrap();
        assert_eq!(resource_from_str(&compact).unwrap(), resource, "{name}");
    }
}

#[test]
fn test_decimals_keep_written_form() {
    for written in ["1.50", "2", "0.1000000000000000055511151231257827"] {
        let text = format!(
            concat!(
                r#"{{"resourceType":"CodeSystem","status":"draft","content":"complete","#,
                r#""concept":[{{"code":"a","property":[{{"code":"weight","#,
                r#""valueDecimal":{}}}]}}]}}"#,
            ),
            written
        );
        let resource = resource_from_str(&text).unwrap();
        assert_eq!(to_string(&resource).unwrap(), text);

        let from_tree = resource_from_value(serde_json::from_str(&text).unwrap()).unwrap();
        assert_eq!(to_string(&from_tree).unwrap(), text);
    }
}

#[test]
fn test_encoding_never_writes_null() {
    for name in discover_test_cases() {
        let resource = resource_from_value(load_json(&name)).unwrap();
        let written = to_value(&resource).unwrap();

        let mut nulls = Vec::new();
        find_nulls(&written, "$", &mut nulls);
        assert!(nulls.is_empty(), "{name}: null members at {nulls:?}");
    }
}

#[test]
fn test_discriminator_matches_document() {
    for name in discover_test_cases() {
        let original = load_json(&name);
        let resource = resource_from_value(original.clone()).unwrap();

        assert_eq!(Some(resource.resource_type()), original["resourceType"].as_str(), "{name}");
        assert!(registry().is_resource(resource.resource_type()));
        assert_eq!(to_value(&resource).unwrap()["resourceType"], original["resourceType"]);
    }
}

#[test]
fn test_unknown_members_are_ignored() {
    for name in discover_test_cases() {
        let original = load_json(&name);
        let mut noisy = original.clone();
        inject_unknown_members(&mut noisy);

        let expected = resource_from_value(original.clone()).unwrap();
        let decoded = resource_from_value(noisy)
            .unwrap_or_else(|err| panic!("{name}: unknown members rejected: {err}"));
        assert_eq!(decoded, expected, "{name}");
        assert_eq!(to_value(&decoded).unwrap(), original, "{name}");
    }
}

// ============================================================================
// Shape behaviour
// ============================================================================

#[test]
fn test_minimal_instance_writes_only_required_members() {
    let cs = CodeSystem::new(PublicationStatus::Draft, CodeSystemContentMode::NotPresent);
    assert_eq!(
        to_value(&cs).unwrap(),
        json!({"resourceType": "CodeSystem", "status": "draft", "content": "not-present"})
    );

    assert_eq!(
        to_value(&Organization::default()).unwrap(),
        json!({"resourceType": "Organization"})
    );
}

#[test]
fn test_concept_hierarchy_three_levels_deep() {
    let cs: CodeSystem = JsonCodec::default().decode_typed(hierarchy()).unwrap();

    let top = cs.concept.as_deref().expect("top-level concepts");
    assert_eq!(top.len(), 2);
    let a = &top[0];
    assert_eq!(a.code, "A");

    let a1 = &a.concept.as_deref().expect("children of A")[0];
    assert_eq!(a1.code, "A.1");

    let grandchildren = a1.concept.as_deref().expect("children of A.1");
    let codes: Vec<&str> = grandchildren.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["A.1.1", "A.1.2"]);
    assert!(grandchildren[0].concept.is_none());

    let property = &a1.property.as_deref().expect("A.1 properties")[0];
    let weight = Decimal::from_str("0.25").unwrap();
    assert_eq!(property.value, Some(CodeSystemConceptPropertyValue::Decimal(weight)));
}

/// Longest chain of nested lists reachable through `children`.
fn nesting_depth<T>(items: &[T], children: fn(&T) -> Option<&[T]>) -> usize {
    items
        .iter()
        .map(|item| 1 + children(item).map_or(0, |nested| nesting_depth(nested, children)))
        .max()
        .unwrap_or(0)
}

#[test]
fn test_recursive_lists_three_levels_deep() {
    let codec = JsonCodec::default();

    let plan: PlanDefinition = codec
        .decode_typed(load_json("plandefinition-nested.json"))
        .unwrap();
    let actions = plan.action.as_deref().unwrap();
    assert!(nesting_depth(actions, |a| a.action.as_deref()) >= 3);

    let map: StructureMap = codec.decode_typed(load_json("structuremap-nested.json")).unwrap();
    let rules = &map.group[0].rule;
    assert!(nesting_depth(rules, |r| r.rule.as_deref()) >= 3);

    let vs: ValueSet = codec.decode_typed(load_json("valueset-expansion.json")).unwrap();
    let contains = vs.expansion.as_ref().unwrap().contains.as_deref().unwrap();
    assert!(nesting_depth(contains, |c| c.contains.as_deref()) >= 3);

    let cs: CodeSystem = codec.decode_typed(hierarchy()).unwrap();
    assert_eq!(nesting_depth(cs.concept.as_deref().unwrap(), |c| c.concept.as_deref()), 3);
}

#[test]
fn test_choice_writes_exactly_one_member() {
    let mut property = CodeSystemConceptProperty::new("notSelectable".to_string());
    property.value = Some(CodeSystemConceptPropertyValue::Boolean(true));

    let written = to_value(&property).unwrap();
    assert_eq!(written, json!({"code": "notSelectable", "valueBoolean": true}));

    let choice_keys: Vec<&String> = written
        .as_object()
        .unwrap()
        .keys()
        .filter(|key| key.starts_with("value"))
        .collect();
    assert_eq!(choice_keys, vec!["valueBoolean"]);

    let back: CodeSystemConceptProperty = lodestar_format::from_value(written).unwrap();
    assert_eq!(back, property);
}

#[test]
fn test_choice_absent_when_no_member_present() {
    let property: CodeSystemConceptProperty = from_str(r#"{"code": "weight"}"#).unwrap();
    assert_eq!(property.value, None);
    assert_eq!(to_value(&property).unwrap(), json!({"code": "weight"}));
}

#[test]
fn test_claim_choices_and_backbones() {
    let claim: Claim = JsonCodec::default()
        .decode_typed(load_json("claim-example.json"))
        .unwrap();

    let info = claim.supporting_info.as_deref().unwrap();
    assert!(matches!(
        info[0].timing,
        Some(ClaimSupportingInfoTiming::Date(ref date)) if date == "2012-04-07"
    ));
    assert!(info[0].value.is_none());
    let Some(ClaimSupportingInfoValue::Quantity(gap)) = &info[1].value else {
        panic!("expected valueQuantity, got {:?}", info[1].value);
    };
    assert_eq!(gap.value.as_ref().map(Decimal::as_str), Some("1.50"));
    assert_eq!(info[2].value, Some(ClaimSupportingInfoValue::Boolean(false)));

    let diagnosis = claim.diagnosis.as_deref().unwrap();
    assert!(matches!(diagnosis[0].diagnosis, Some(ClaimDiagnosisDiagnosis::CodeableConcept(_))));
    assert!(matches!(diagnosis[1].diagnosis, Some(ClaimDiagnosisDiagnosis::Reference(_))));

    let accident = claim.accident.as_ref().unwrap();
    assert!(matches!(accident.location, Some(ClaimAccidentLocation::Address(_))));

    let items = claim.item.as_deref().unwrap();
    assert!(matches!(items[0].serviced, Some(ClaimItemServiced::Date(_))));
    assert!(matches!(items[0].location, Some(ClaimItemLocation::CodeableConcept(_))));
    assert!(matches!(items[1].serviced, Some(ClaimItemServiced::Period(_))));
    assert!(matches!(items[1].location, Some(ClaimItemLocation::Reference(_))));

    let detail = &items[0].detail.as_deref().unwrap()[0];
    let sub_detail = &detail.sub_detail.as_deref().unwrap()[0];
    let product = &sub_detail.product_or_service.coding.as_deref().unwrap()[0];
    assert_eq!(product.code.as_deref(), Some("ORTHOEXAM"));

    let net = detail.net.as_ref().unwrap();
    assert_eq!(net.value.as_ref().map(Decimal::as_str), Some("1000.00"));
}

#[test]
fn test_encounter_backbones_and_extension_values() {
    let encounter: Encounter = JsonCodec::default()
        .decode_typed(load_json("encounter-example.json"))
        .unwrap();

    assert_eq!(encounter.status, EncounterStatus::Finished);
    assert_eq!(encounter.class.code.as_deref(), Some("AMB"));

    let history = encounter.status_history.as_deref().unwrap();
    assert_eq!(history[1].status, EncounterStatus::InProgress);

    let extensions = encounter.extension.as_deref().unwrap();
    assert!(matches!(extensions[0].value, Some(OpenValue::Duration(_))));
    assert!(matches!(extensions[1].value, Some(OpenValue::CodeableConcept(_))));

    let length = encounter.length.as_ref().unwrap();
    assert_eq!(length.value.as_ref().map(Decimal::as_str), Some("120.0"));

    let hospitalization = encounter.hospitalization.as_ref().unwrap();
    let pre_admission = hospitalization.pre_admission_identifier.as_ref().unwrap();
    assert_eq!(pre_admission.value.as_deref(), Some("93042"));
}

#[test]
fn test_medication_knowledge_choices_and_backbones() {
    use lodestar_models::r4::MedicationKnowledgeIngredientItem as IngredientItem;
    type Characteristic =
        MedicationKnowledgeAdministrationGuidelinesPatientCharacteristicsCharacteristic;

    let knowledge: MedicationKnowledge = JsonCodec::default()
        .decode_typed(load_json("medicationknowledge-example.json"))
        .unwrap();

    let ingredients = knowledge.ingredient.as_deref().unwrap();
    assert!(matches!(ingredients[0].item, Some(IngredientItem::CodeableConcept(_))));
    assert!(matches!(ingredients[1].item, Some(IngredientItem::Reference(_))));

    let guidelines = knowledge.administration_guidelines.as_deref().unwrap();
    assert!(matches!(
        guidelines[0].indication,
        Some(MedicationKnowledgeAdministrationGuidelinesIndication::CodeableConcept(_))
    ));
    assert!(matches!(
        guidelines[1].indication,
        Some(MedicationKnowledgeAdministrationGuidelinesIndication::Reference(_))
    ));

    let characteristics = guidelines[0].patient_characteristics.as_deref().unwrap();
    let Some(Characteristic::Quantity(age)) = &characteristics[0].characteristic else {
        panic!("expected characteristicQuantity");
    };
    assert_eq!(age.comparator, Some(QuantityComparator::GreaterOrEqual));

    let dosage = &guidelines[0].dosage.as_deref().unwrap()[0].dosage[0];
    assert_eq!(dosage.as_needed, Some(DosageAsNeeded::Boolean(false)));
    let repeat = dosage.timing.as_ref().unwrap().repeat.as_ref().unwrap();
    assert!(matches!(repeat.bounds, Some(TimingRepeatBounds::Duration(_))));
    let dose_and_rate = &dosage.dose_and_rate.as_deref().unwrap()[0];
    assert!(matches!(dose_and_rate.dose, Some(DosageDoseAndRateDose::Quantity(_))));
    assert!(matches!(dose_and_rate.rate, Some(DosageDoseAndRateRate::Ratio(_))));

    let values: Vec<&str> = knowledge
        .drug_characteristic
        .as_deref()
        .unwrap()
        .iter()
        .filter_map(|c| c.value.as_ref())
        .map(|value| match value {
            MedicationKnowledgeDrugCharacteristicValue::CodeableConcept(_) => "CodeableConcept",
            MedicationKnowledgeDrugCharacteristicValue::String(_) => "String",
            MedicationKnowledgeDrugCharacteristicValue::Quantity(_) => "Quantity",
            MedicationKnowledgeDrugCharacteristicValue::Base64Binary(_) => "Base64Binary",
        })
        .collect();
    assert_eq!(values, vec!["String", "CodeableConcept", "Quantity"]);

    let regulatory = &knowledge.regulatory.as_deref().unwrap()[0];
    assert!(regulatory.substitution.as_deref().unwrap()[0].allowed);
    assert_eq!(regulatory.max_dispense.as_ref().unwrap().quantity.value, Some(Decimal::from(20)));
}

#[test]
fn test_test_script_backbones_and_usage_contexts() {
    let script: TestScript = JsonCodec::default()
        .decode_typed(load_json("testscript-example.json"))
        .unwrap();

    let contexts = script.use_context.as_deref().unwrap();
    assert!(matches!(contexts[0].value, Some(UsageContextValue::CodeableConcept(_))));
    assert!(matches!(contexts[1].value, Some(UsageContextValue::Range(_))));
    assert!(matches!(contexts[2].value, Some(UsageContextValue::Reference(_))));

    let contained = script.contained.as_deref().unwrap();
    assert_eq!(contained[0].resource_type(), "Organization");

    let setup = script.setup.as_ref().unwrap();
    assert!(setup.action[0].operation.as_ref().unwrap().encode_request_url);
    assert_eq!(
        setup.action[1].assert.as_ref().unwrap().response_code.as_deref(),
        Some("200,204")
    );

    let test = &script.test.as_deref().unwrap()[0];
    let assertion = test.action[2].assert.as_ref().unwrap();
    assert_eq!(assertion.request_url.as_deref(), Some("/Organization/fixture-org"));
    assert!(assertion.warning_only);

    let headers = test.action[0].operation.as_ref().unwrap().request_header.as_deref().unwrap();
    assert_eq!((headers[0].field.as_str(), headers[0].value.as_str()), ("Accept-Charset", "utf-8"));
    assert_eq!(script.teardown.as_ref().unwrap().action.len(), 1);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_required_field_deep_in_hierarchy() {
    let mut doc = hierarchy();
    doc["concept"][0]["concept"][0]["concept"][0]
        .as_object_mut()
        .unwrap()
        .remove("code");

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MissingField));
    assert_eq!(
        err.path().unwrap().to_string(),
        "concept[0].concept[0].concept[0].code"
    );
    assert!(matches!(err, FormatError::MissingField { .. }));
}

#[test]
fn test_missing_required_top_level_field() {
    let mut doc = hierarchy();
    doc.as_object_mut().unwrap().remove("status");

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MissingField));
    assert_eq!(err.path().unwrap().to_string(), "status");
}

#[test]
fn test_type_mismatch_reports_member() {
    let mut doc = hierarchy();
    doc["count"] = json!("many");

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(err.path().unwrap().to_string(), "count");

    let mut doc = hierarchy();
    doc["status"] = json!("published");
    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(err.path().unwrap().to_string(), "status");
    assert!(err.to_string().contains("published"));
}

#[test]
fn test_non_object_document() {
    let err = resource_from_value(json!(["CodeSystem"])).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
    assert!(err.path().unwrap().is_root());
}

#[test]
fn test_unknown_discriminator_at_root() {
    let err = resource_from_value(json!({"resourceType": "Patient", "id": "p1"})).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
    assert_eq!(err.path().unwrap().to_string(), "resourceType");
    assert!(err.to_string().contains("`Patient`"));

    // Datatypes and backbone elements are shapes, not resources.
    let err = resource_from_value(json!({"resourceType": "CodeSystemConcept"})).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
}

#[test]
fn test_unknown_discriminator_in_contained_resource() {
    let doc = json!({
        "resourceType": "Organization",
        "id": "outer",
        "contained": [
            {"resourceType": "Patient", "id": "p1"}
        ]
    });

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
    assert_eq!(err.path().unwrap().to_string(), "contained[0].resourceType");
    assert!(matches!(err, FormatError::UnknownDiscriminator { ref name, .. } if name == "Patient"));
}

#[test]
fn test_unknown_discriminator_in_bundle_entry() {
    let mut doc = load_json("bundle-transaction.json");
    doc["entry"][1]["resource"]["resourceType"] = json!("Observation");

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
    assert_eq!(err.path().unwrap().to_string(), "entry[1].resource.resourceType");
}

#[test]
fn test_unknown_discriminator_nested_in_bundle_entry() {
    let mut doc = load_json("bundle-transaction.json");
    doc["entry"][0]["resource"]["contained"] = json!([{"resourceType": "Patient", "id": "p1"}]);

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnknownDiscriminator));
    assert_eq!(
        err.path().unwrap().to_string(),
        "entry[0].resource.contained[0].resourceType"
    );
}

#[test]
fn test_missing_field_inside_contained_resource() {
    let mut inner = hierarchy();
    inner["concept"][0]["concept"][0]
        .as_object_mut()
        .unwrap()
        .remove("code");
    let doc = json!({"resourceType": "Organization", "contained": [inner]});

    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MissingField));
    assert_eq!(
        err.path().unwrap().to_string(),
        "contained[0].concept[0].concept[0].code"
    );
}

#[test]
fn test_errors_inside_choice_members_are_located() {
    let doc = json!({
        "resourceType": "Organization",
        "extension": [{
            "url": "http://example.org/fhir/StructureDefinition/rule",
            "valueExpression": {"expression": "active = true"}
        }]
    });
    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MissingField));
    assert_eq!(
        err.path().unwrap().to_string(),
        "extension[0].valueExpression.language"
    );

    let doc = json!({
        "resourceType": "Organization",
        "extension": [
            {"url": "http://example.org/a", "valueBoolean": true},
            {"url": "http://example.org/b", "valueCoding": {"code": ["x"]}}
        ]
    });
    let err = resource_from_value(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(err.path().unwrap().to_string(), "extension[1].valueCoding.code");
    let FormatError::TypeMismatch { message, .. } = &err else {
        panic!("expected a type mismatch, got {err}");
    };
    assert!(message.starts_with("invalid type"), "{message}");
}

#[test]
fn test_missing_discriminator() {
    let err = resource_from_value(json!({"name": "Acme"})).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MissingField));
    assert_eq!(err.path().unwrap().to_string(), "resourceType");
}

#[test]
fn test_syntax_error() {
    let err = resource_from_str(r#"{"resourceType": "CodeSystem","#).unwrap_err();
    assert!(matches!(err, FormatError::Syntax(_)));
    assert_eq!(err.kind(), None);
    assert!(err.path().is_none());
}

#[test]
fn test_decode_typed_rejects_other_resource() {
    let codec = JsonCodec::default();
    let err = codec.decode_typed::<ValueSet>(hierarchy()).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(err.path().unwrap().to_string(), "resourceType");
    assert!(err.to_string().contains("expected `ValueSet`, found `CodeSystem`"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_pretty_encoding() {
    let resource = resource_from_value(hierarchy()).unwrap();

    let pretty = JsonCodec::new(FormatConfig::default().with_pretty(true))
        .encode_string(&resource)
        .unwrap();
    let compact = JsonCodec::default().encode_string(&resource).unwrap();

    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert_eq!(
        serde_json::from_str::<Value>(&pretty).unwrap(),
        serde_json::from_str::<Value>(&compact).unwrap()
    );
}

#[test]
fn test_require_resource_type() {
    let mut doc = hierarchy();
    doc.as_object_mut().unwrap().remove("resourceType");

    let lenient: CodeSystem = JsonCodec::default().decode_typed(doc.clone()).unwrap();
    assert_eq!(lenient.concept.as_ref().map(Vec::len), Some(2));

    let strict = JsonCodec::new(FormatConfig::default().with_require_resource_type(true));
    let err = strict.decode_typed::<CodeSystem>(doc).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MissingField));
}

#[test]
fn test_resource_conversion() {
    let resource = resource_from_value(hierarchy()).unwrap();
    assert!(matches!(resource, Resource::CodeSystem(_)));

    let cs = CodeSystem::try_from(resource).unwrap();
    assert_eq!(cs.count, Some(5));
}
