//! FHIR TestScript resource

use crate::r4::codes::{
    AssertionDirectionType, AssertionOperatorType, AssertionResponseTypes, PublicationStatus,
    TestScriptRequestMethodCode,
};
use crate::r4::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, Reference,
    UsageContext,
};
use crate::r4::primitives::{Code, DateTime, Id, Integer, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR TestScript resource
///
/// A structured set of tests against a FHIR server or client implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScript {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<TestScript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: PublicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<TestScriptOrigin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<TestScriptDestination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TestScriptMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<Vec<TestScriptFixture>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<Vec<TestScriptVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<TestScriptSetup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Vec<TestScriptTest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teardown: Option<TestScriptTeardown>,
}

impl TestScript {
    pub fn new(url: String, name: String, status: PublicationStatus) -> Self {
        Self {
            resource_type: ResourceTypeTag::new(),
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            url,
            identifier: None,
            version: None,
            name,
            title: None,
            status,
            experimental: None,
            date: None,
            publisher: None,
            contact: None,
            description: None,
            use_context: None,
            jurisdiction: None,
            purpose: None,
            copyright: None,
            origin: None,
            destination: None,
            metadata: None,
            fixture: None,
            profile: None,
            variable: None,
            setup: None,
            test: None,
            teardown: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub index: Integer,
    pub profile: Coding,
}

impl TestScriptDestination {
    pub fn new(index: Integer, profile: Coding) -> Self {
        Self {
            index,
            profile,
            ..Default::default()
        }
    }
}

/// Fixture in the test script - by reference (uri)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptFixture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub autocreate: bool,
    pub autodelete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Reference>,
}

impl TestScriptFixture {
    pub fn new(autocreate: bool, autodelete: bool) -> Self {
        Self {
            autocreate,
            autodelete,
            ..Default::default()
        }
    }
}

/// Required capability that is assumed to function correctly on the FHIR server being tested
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<TestScriptMetadataLink>>,
    pub capability: Vec<TestScriptMetadataCapability>,
}

impl TestScriptMetadata {
    pub fn new(capability: Vec<TestScriptMetadataCapability>) -> Self {
        Self {
            capability,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptMetadataCapability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub required: bool,
    pub validated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<Integer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<String>>,
    pub capabilities: String,
}

impl TestScriptMetadataCapability {
    pub fn new(required: bool, validated: bool, capabilities: String) -> Self {
        Self {
            required,
            validated,
            capabilities,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptMetadataLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TestScriptMetadataLink {
    pub fn new(url: String) -> Self {
        Self {
            url,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptOrigin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub index: Integer,
    pub profile: Coding,
}

impl TestScriptOrigin {
    pub fn new(index: Integer, profile: Coding) -> Self {
        Self {
            index,
            profile,
            ..Default::default()
        }
    }
}

/// A series of required setup operations before tests are executed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub action: Vec<TestScriptSetupAction>,
}

impl TestScriptSetup {
    pub fn new(action: Vec<TestScriptSetupAction>) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }
}

/// A setup operation or assert to perform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TestScriptSetupActionOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert: Option<TestScriptSetupActionAssert>,
}

/// The assertion to perform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<AssertionDirectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_source_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_source_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<AssertionOperatorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<TestScriptRequestMethodCode>,
    /// Request URL comparison value
    #[serde(rename = "requestURL", skip_serializing_if = "Option::is_none")]
    pub request_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<AssertionResponseTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub warning_only: bool,
}

impl TestScriptSetupActionAssert {
    pub fn new(warning_only: bool) -> Self {
        Self {
            warning_only,
            ..Default::default()
        }
    }
}

/// The setup operation to perform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Integer>,
    pub encode_request_url: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<TestScriptRequestMethodCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_header: Option<Vec<TestScriptSetupActionOperationRequestHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TestScriptSetupActionOperation {
    pub fn new(encode_request_url: bool) -> Self {
        Self {
            encode_request_url,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionOperationRequestHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub field: String,
    pub value: String,
}

impl TestScriptSetupActionOperationRequestHeader {
    pub fn new(field: String, value: String) -> Self {
        Self {
            field,
            value,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTeardown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub action: Vec<TestScriptTeardownAction>,
}

impl TestScriptTeardown {
    pub fn new(action: Vec<TestScriptTeardownAction>) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTeardownAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub operation: TestScriptSetupActionOperation,
}

impl TestScriptTeardownAction {
    pub fn new(operation: TestScriptSetupActionOperation) -> Self {
        Self {
            operation,
            ..Default::default()
        }
    }
}

/// A test in this script
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub action: Vec<TestScriptTestAction>,
}

impl TestScriptTest {
    pub fn new(action: Vec<TestScriptTestAction>) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTestAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TestScriptSetupActionOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert: Option<TestScriptSetupActionAssert>,
}

/// Placeholder for evaluated elements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptVariable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl TestScriptVariable {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

impl_shape!(TestScript, Resource, [
    "id", "meta", "implicitRules", "language", "text", "contained", "extension",
    "modifierExtension", "url", "identifier", "version", "name", "title", "status", "experimental",
    "date", "publisher", "contact", "description", "useContext", "jurisdiction", "purpose",
    "copyright", "origin", "destination", "metadata", "fixture", "profile", "variable", "setup",
    "test", "teardown",
]);
impl_shape!(TestScriptDestination, BackboneElement, [
    "id", "extension", "modifierExtension", "index", "profile",
]);
impl_shape!(TestScriptFixture, BackboneElement, [
    "id", "extension", "modifierExtension", "autocreate", "autodelete", "resource",
]);
impl_shape!(TestScriptMetadata, BackboneElement, [
    "id", "extension", "modifierExtension", "link", "capability",
]);
impl_shape!(TestScriptMetadataCapability, BackboneElement, [
    "id", "extension", "modifierExtension", "required", "validated", "description", "origin",
    "destination", "link", "capabilities",
]);
impl_shape!(TestScriptMetadataLink, BackboneElement, [
    "id", "extension", "modifierExtension", "url", "description",
]);
impl_shape!(TestScriptOrigin, BackboneElement, [
    "id", "extension", "modifierExtension", "index", "profile",
]);
impl_shape!(TestScriptSetup, BackboneElement, ["id", "extension", "modifierExtension", "action"]);
impl_shape!(TestScriptSetupAction, BackboneElement, [
    "id", "extension", "modifierExtension", "operation", "assert",
]);
impl_shape!(TestScriptSetupActionAssert, BackboneElement, [
    "id", "extension", "modifierExtension", "label", "description", "direction",
    "compareToSourceId", "compareToSourceExpression", "compareToSourcePath", "contentType",
    "expression", "headerField", "minimumId", "navigationLinks", "operator", "path",
    "requestMethod", "requestURL", "resource", "response", "responseCode", "sourceId",
    "validateProfileId", "value", "warningOnly",
]);
impl_shape!(TestScriptSetupActionOperation, BackboneElement, [
    "id", "extension", "modifierExtension", "type", "resource", "label", "description", "accept",
    "contentType", "destination", "encodeRequestUrl", "method", "origin", "params", "requestHeader",
    "requestId", "responseId", "sourceId", "targetId", "url",
]);
impl_shape!(TestScriptSetupActionOperationRequestHeader, BackboneElement, [
    "id", "extension", "modifierExtension", "field", "value",
]);
impl_shape!(TestScriptTeardown, BackboneElement, [
    "id", "extension", "modifierExtension", "action",
]);
impl_shape!(TestScriptTeardownAction, BackboneElement, [
    "id", "extension", "modifierExtension", "operation",
]);
impl_shape!(TestScriptTest, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "description", "action",
]);
impl_shape!(TestScriptTestAction, BackboneElement, [
    "id", "extension", "modifierExtension", "operation", "assert",
]);
impl_shape!(TestScriptVariable, BackboneElement, [
    "id", "extension", "modifierExtension", "name", "defaultValue", "description", "expression",
    "headerField", "hint", "path", "sourceId",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_request_url() {
        let check = TestScriptSetupActionAssert {
            request_url: Some("/Patient/example".to_string()),
            operator: Some(AssertionOperatorType::Equals),
            ..TestScriptSetupActionAssert::new(false)
        };

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(
            value,
            json!({"operator": "equals", "requestURL": "/Patient/example", "warningOnly": false})
        );
    }

    #[test]
    fn test_setup_operation() {
        let json = json!({
            "resourceType": "TestScript",
            "url": "http://example.org/fhir/TestScript/read",
            "name": "Read",
            "status": "draft",
            "setup": {
                "action": [{
                    "operation": {
                        "resource": "Patient",
                        "encodeRequestUrl": true,
                        "method": "get",
                        "params": "/example"
                    }
                }, {
                    "assert": {"response": "okay", "warningOnly": true}
                }]
            }
        });

        let script: TestScript = serde_json::from_value(json.clone()).unwrap();
        let actions = &script.setup.as_ref().unwrap().action;
        let operation = actions[0].operation.as_ref().unwrap();
        assert!(operation.encode_request_url);
        assert_eq!(operation.method, Some(TestScriptRequestMethodCode::Get));
        assert_eq!(
            actions[1].assert.as_ref().map(|a| a.response),
            Some(Some(AssertionResponseTypes::Okay))
        );

        assert_eq!(serde_json::to_value(&script).unwrap(), json);
    }
}
