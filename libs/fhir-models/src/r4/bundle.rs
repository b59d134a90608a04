//! FHIR Bundle model
//!
//! A container for a collection of resources.

use crate::r4::codes::{BundleType, HttpVerb, SearchEntryMode};
use crate::r4::datatypes::{Extension, Identifier, Meta, Signature};
use crate::r4::primitives::{Code, Decimal, Id, Instant, UnsignedInt, Uri};
use crate::r4::resource::Resource;
use crate::shape::{impl_shape, ResourceTypeTag};
use serde::{Deserialize, Serialize};

/// FHIR Bundle resource
///
/// A container for a collection of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default)]
    pub resource_type: ResourceTypeTag<Bundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
    /// Indicates the purpose of this bundle - how it was intended to be used
    #[serde(rename = "type")]
    pub type_: BundleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Instant>,
    /// If search, the total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<UnsignedInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<BundleLink>>,
    /// Entry in the bundle - will have a resource or information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<BundleEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

impl Bundle {
    /// Create an empty bundle of the given type.
    pub fn new(type_: BundleType) -> Self {
        Self {
            resource_type: ResourceTypeTag::new(),
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            identifier: None,
            type_,
            timestamp: None,
            total: None,
            link: None,
            entry: None,
            signature: None,
        }
    }
}

/// Links related to this Bundle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub relation: String,
    pub url: String,
}

impl BundleLink {
    pub fn new(relation: String, url: String) -> Self {
        Self {
            relation,
            url,
            ..Default::default()
        }
    }
}

/// Entry in the bundle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<BundleLink>>,
    /// Full URL for the entry (relative to the base URL, or absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,
    /// A resource in this bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Box<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BundleEntrySearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleEntryRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BundleEntryResponse>,
}

/// Search-related information for a Bundle entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntrySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SearchEntryMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Decimal>,
}

/// Request details for a Bundle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub method: HttpVerb,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_modified_since: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_none_exist: Option<String>,
}

impl BundleEntryRequest {
    pub fn new(method: HttpVerb, url: String) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            method,
            url,
            if_none_match: None,
            if_modified_since: None,
            if_match: None,
            if_none_exist: None,
        }
    }
}

/// Response details for a Bundle entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Instant>,
    /// OperationOutcome with hints and warnings (for batch/transaction)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Box<Resource>>,
}

impl BundleEntryResponse {
    pub fn new(status: String) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

impl_shape!(Bundle, Resource, [
    "id", "meta", "implicitRules", "language", "identifier", "type", "timestamp", "total", "link",
    "entry", "signature",
]);
impl_shape!(BundleLink, BackboneElement, [
    "id", "extension", "modifierExtension", "relation", "url",
]);
impl_shape!(BundleEntry, BackboneElement, [
    "id", "extension", "modifierExtension", "link", "fullUrl", "resource", "search", "request",
    "response",
]);
impl_shape!(BundleEntrySearch, BackboneElement, [
    "id", "extension", "modifierExtension", "mode", "score",
]);
impl_shape!(BundleEntryRequest, BackboneElement, [
    "id", "extension", "modifierExtension", "method", "url", "ifNoneMatch", "ifModifiedSince",
    "ifMatch", "ifNoneExist",
]);
impl_shape!(BundleEntryResponse, BackboneElement, [
    "id", "extension", "modifierExtension", "status", "location", "etag", "lastModified", "outcome",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::{Organization, PublicationStatus, ValueSet};
    use serde_json::json;

    #[test]
    fn test_deserialize_bundle() {
        let json = json!({
            "resourceType": "Bundle",
            "id": "example-bundle",
            "type": "searchset",
            "total": 1,
            "entry": [
                {
                    "fullUrl": "http://example.org/fhir/Organization/123",
                    "resource": {
                        "resourceType": "Organization",
                        "id": "123"
                    },
                    "search": {
                        "mode": "match",
                        "score": 1.0
                    }
                }
            ]
        });

        let bundle: Bundle = serde_json::from_value(json).unwrap();
        assert_eq!(bundle.id, Some("example-bundle".to_string()));
        assert_eq!(bundle.type_, BundleType::Searchset);
        assert_eq!(bundle.total, Some(1));
        let entries = bundle.entry.as_deref().unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.search.as_ref().unwrap().mode, Some(SearchEntryMode::Match));
        assert_eq!(entry.resource.as_ref().unwrap().id(), Some("123"));
    }

    #[test]
    fn test_unknown_entry_resource_is_rejected() {
        let json = json!({
            "resourceType": "Bundle",
            "type": "collection",
            "entry": [{"resource": {"resourceType": "Patient", "id": "123"}}]
        });

        let err = serde_json::from_value::<Bundle>(json).unwrap_err();
        assert!(err.to_string().contains("unknown resource type `Patient`"));
    }

    #[test]
    fn test_serialize_bundle() {
        let bundle = Bundle::new(BundleType::Transaction);
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json, json!({"resourceType": "Bundle", "type": "transaction"}));
    }

    #[test]
    fn test_entries_hold_mixed_resources() {
        let bundle = Bundle {
            entry: Some(vec![
                BundleEntry {
                    full_url: Some("urn:uuid:6b0b0c3f".to_string()),
                    resource: Some(Box::new(ValueSet::new(PublicationStatus::Active).into())),
                    ..Default::default()
                },
                BundleEntry {
                    resource: Some(Box::new(Organization::default().into())),
                    ..Default::default()
                },
            ]),
            ..Bundle::new(BundleType::Collection)
        };

        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["entry"][0]["resource"]["resourceType"], "ValueSet");
        assert_eq!(json["entry"][1]["resource"]["resourceType"], "Organization");

        let back: Bundle = serde_json::from_value(json).unwrap();
        assert_eq!(back, bundle);
    }

    #[test]
    fn test_bundle_entry_request() {
        let request = BundleEntryRequest::new(HttpVerb::Post, "Organization".to_string());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, json!({"method": "POST", "url": "Organization"}));
    }

    #[test]
    fn test_bundle_entry_response() {
        let response = BundleEntryResponse {
            status: "201 Created".to_string(),
            location: Some("Organization/123/_history/1".to_string()),
            etag: Some("W/\"1\"".to_string()),
            last_modified: Some("2023-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "201 Created");
        assert_eq!(json["location"], "Organization/123/_history/1");
        assert!(json.get("outcome").is_none());
    }
}
