//! Shapes shared by many EC2 actions: tags, filters, group identifiers and
//! attribute wrappers.

use crate::error::ParseFilterError;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

string_enum! {
    /// The type of resource a [`TagSpecification`] applies to.
    ResourceType {
        CapacityReservation => "capacity-reservation",
        CustomerGateway => "customer-gateway",
        Fleet => "fleet",
        Image => "image",
        Instance => "instance",
        KeyPair => "key-pair",
        LaunchTemplate => "launch-template",
        NetworkInterface => "network-interface",
        RouteTable => "route-table",
        SecurityGroup => "security-group",
        SecurityGroupRule => "security-group-rule",
        Snapshot => "snapshot",
        SpotInstancesRequest => "spot-instances-request",
        Subnet => "subnet",
        TransitGatewayAttachment => "transit-gateway-attachment",
        Volume => "volume",
        Vpc => "vpc",
        VpcEndpoint => "vpc-endpoint",
        VpcFlowLog => "vpc-flow-log",
    }
}

string_enum! {
    ProductCodeValues {
        Devpay => "devpay",
        Marketplace => "marketplace",
    }
}

/// Describes a tag.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The key of the tag. Up to 127 Unicode characters, may not begin with `aws:`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The value of the tag. Up to 256 Unicode characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// The tags to apply to a resource when the resource is being created.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct TagSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

list_setters!(TagSpecificationBuilder {
    tags, set_tags: Tag;
});

/// A filter name and values used to narrow the results of a describe call.
///
/// Filter names and values are case-sensitive. Several values for one name are
/// OR-ed together; several filters are AND-ed.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

list_setters!(FilterBuilder {
    values, set_values: String;
});

impl Filter {
    /// Shorthand for a filter with a name and a list of values.
    pub fn new<N, I>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Filter {
            name: Some(name.into()),
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// Parses `Name=value1,value2`. `Name=` yields a filter with no values.
///
/// Values are trimmed and empty ones are dropped: `Name= a,,b ` parses to
/// the values `[a, b]`.
impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, values) = s
            .split_once('=')
            .ok_or_else(|| ParseFilterError::MissingSeparator(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseFilterError::EmptyName(s.to_string()));
        }
        let values = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        Ok(Filter {
            name: Some(name.to_string()),
            values: Some(values),
        })
    }
}

/// Describes a security group by id and name.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct GroupIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

/// Describes a state change.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct StateReason {
    /// The reason code for the state change, e.g. `Server.SpotInstanceShutdown`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Describes a product code.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct ProductCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code_type: Option<ProductCodeValues>,
}

/// A string attribute value, used by the modify-attribute actions.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A boolean attribute value, used by the modify-attribute actions.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct AttributeBooleanValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
}

impl_display!(
    Tag,
    TagSpecification,
    Filter,
    GroupIdentifier,
    StateReason,
    ProductCode,
    AttributeValue,
    AttributeBooleanValue,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_builder_sets_fields() {
        let tag = TagBuilder::default()
            .key("Name")
            .value("web")
            .build()
            .unwrap();
        assert_eq!(tag.key.as_deref(), Some("Name"));
        assert_eq!(tag.value.as_deref(), Some("web"));
    }

    #[test]
    fn test_assign_none_reads_back_none() {
        let mut tag = TagBuilder::default().key("Name").build().unwrap();
        tag.key = None;
        assert_eq!(tag.key, None);
        assert_eq!(tag, Tag::default());
    }

    #[test]
    fn test_equal_values_hash_equally() {
        let a = Tag {
            key: Some("env".to_string()),
            value: Some("prod".to_string()),
        };
        let b = TagBuilder::default()
            .key("env")
            .value("prod")
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Tag::default());
    }

    #[test]
    fn test_display_empty_is_braces() {
        assert_eq!(Tag::default().to_string(), "{}");
        assert_eq!(Filter::default().to_string(), "{}");
        assert_eq!(TagSpecification::default().to_string(), "{}");
    }

    #[test]
    fn test_display_lists_set_fields_in_order() {
        let spec = TagSpecificationBuilder::default()
            .resource_type(ResourceType::Volume)
            .tags(vec![Tag {
                key: Some("team".to_string()),
                value: None,
            }])
            .build()
            .unwrap();
        assert_eq!(spec.to_string(), "{ResourceType: volume, Tags: [{Key: team}]}");
    }

    #[test]
    fn test_list_setter_creates_and_appends() {
        let mut builder = FilterBuilder::default();
        builder.name("instance-state-name").values(["running"]);
        builder.values(["stopped", "running"]);
        let filter = builder.build().unwrap();
        assert_eq!(
            filter.values,
            Some(vec![
                "running".to_string(),
                "stopped".to_string(),
                "running".to_string()
            ])
        );
    }

    #[test]
    fn test_list_setter_none_clears() {
        let filter = FilterBuilder::default()
            .values(["a"])
            .set_values(None)
            .build()
            .unwrap();
        assert_eq!(filter.values, None);

        let filter = FilterBuilder::default()
            .set_values(Some(vec![]))
            .build()
            .unwrap();
        assert_eq!(filter.values, Some(vec![]));
    }

    #[test]
    fn test_parse_filter() {
        let filter: Filter = "tag:Name=web, db".parse().unwrap();
        assert_eq!(filter, Filter::new("tag:Name", ["web", "db"]));

        let filter: Filter = "vpc-id=".parse().unwrap();
        assert_eq!(filter.values, Some(vec![]));
    }

    #[test]
    fn test_parse_filter_drops_empty_values() {
        let filter: Filter = "instance-state-name= running,,stopped , ".parse().unwrap();
        assert_eq!(
            filter,
            Filter::new("instance-state-name", ["running", "stopped"])
        );

        let filter: Filter = "owner-id=,,".parse().unwrap();
        assert_eq!(filter.values, Some(vec![]));
    }

    #[test]
    fn test_parse_filter_rejects_malformed() {
        assert_eq!(
            "vpc-id".parse::<Filter>(),
            Err(ParseFilterError::MissingSeparator("vpc-id".to_string()))
        );
        assert_eq!(
            "=vpc-1".parse::<Filter>(),
            Err(ParseFilterError::EmptyName("=vpc-1".to_string()))
        );
    }

    #[test]
    fn test_enum_known_and_unknown_values() {
        assert_eq!(ResourceType::from("instance"), ResourceType::Instance);
        assert_eq!(ResourceType::Instance.as_str(), "instance");
        let unknown = ResourceType::from("ipam-pool");
        assert_eq!(unknown, ResourceType::Unknown("ipam-pool".to_string()));
        assert_eq!(unknown.as_str(), "ipam-pool");
        assert!(ResourceType::values().contains(&"vpc-flow-log"));
        assert!(!ResourceType::values().contains(&"ipam-pool"));
    }

    #[test]
    fn test_json_keeps_none_and_empty_apart() {
        let unset = Filter {
            name: Some("owner-id".to_string()),
            values: None,
        };
        let empty = Filter {
            name: Some("owner-id".to_string()),
            values: Some(vec![]),
        };
        let unset_json = serde_json::to_string(&unset).unwrap();
        let empty_json = serde_json::to_string(&empty).unwrap();
        assert_eq!(unset_json, r#"{"Name":"owner-id"}"#);
        assert_eq!(empty_json, r#"{"Name":"owner-id","Values":[]}"#);
        assert_eq!(serde_json::from_str::<Filter>(&unset_json).unwrap(), unset);
        assert_eq!(serde_json::from_str::<Filter>(&empty_json).unwrap(), empty);
    }

    #[test]
    fn test_json_unknown_enum_round_trips() {
        let json = r#"{"ResourceType":"ipam-pool","Tags":[{"Key":"a","Value":"b"}]}"#;
        let spec: TagSpecification = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.resource_type,
            Some(ResourceType::Unknown("ipam-pool".to_string()))
        );
        assert_eq!(serde_json::to_string(&spec).unwrap(), json);
    }
}
