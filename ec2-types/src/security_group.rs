//! Security groups and their permission rules.

use crate::common::{Filter, Tag, TagSpecification};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// An IPv4 range.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct IpRange {
    /// CIDR notation. A `/32` prefix length names a single address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An IPv6 range.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Ipv6Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ipv6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct PrefixListId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_list_id: Option<String>,
}

/// A security group and account pair, possibly across a VPC peering connection.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct UserIdGroupPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peering_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// A set of permissions for a security group rule.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct IpPermission {
    /// Start of the port range, or the ICMP type. `-1` means all ICMP types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// `tcp`, `udp`, `icmp`, `icmpv6`, a protocol number, or `-1` for all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_ranges: Option<Vec<IpRange>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_ranges: Option<Vec<Ipv6Range>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_list_ids: Option<Vec<PrefixListId>>,
    /// End of the port range, or the ICMP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_group_pairs: Option<Vec<UserIdGroupPair>>,
}

list_setters!(IpPermissionBuilder {
    ip_ranges, set_ip_ranges: IpRange;
    ipv6_ranges, set_ipv6_ranges: Ipv6Range;
    prefix_list_ids, set_prefix_list_ids: PrefixListId;
    user_id_group_pairs, set_user_id_group_pairs: UserIdGroupPair;
});

/// Describes a security group.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Inbound rules.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_permissions: Option<Vec<IpPermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Outbound rules.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_permissions_egress: Option<Vec<IpPermission>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

list_setters!(SecurityGroupBuilder {
    ip_permissions, set_ip_permissions: IpPermission;
    ip_permissions_egress, set_ip_permissions_egress: IpPermission;
    tags, set_tags: Tag;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    /// Default VPC only. Use a `group-name` filter elsewhere.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 5 to 1000. Cannot be combined with `group_ids`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

list_setters!(DescribeSecurityGroupsRequestBuilder {
    filters, set_filters: Filter;
    group_ids, set_group_ids: String;
    group_names, set_group_names: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<SecurityGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeSecurityGroupsResponseBuilder {
    security_groups, set_security_groups: SecurityGroup;
});

/// Adds inbound rules to a security group.
///
/// Either a full `ip_permissions` list, or the flat shorthand (`cidr_ip`,
/// `ip_protocol`, `from_port`, `to_port`, source group) for a single rule.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizeSecurityGroupIngressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Default VPC only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_permissions: Option<Vec<IpPermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
}

list_setters!(AuthorizeSecurityGroupIngressRequestBuilder {
    ip_permissions, set_ip_permissions: IpPermission;
    tag_specifications, set_tag_specifications: TagSpecification;
});

dry_run_request!(
    DescribeSecurityGroupsRequest => "DescribeSecurityGroups",
    AuthorizeSecurityGroupIngressRequest => "AuthorizeSecurityGroupIngress",
);

paginated_request!(DescribeSecurityGroupsRequest);

paginated_response!(DescribeSecurityGroupsResponse => security_groups: SecurityGroup);

impl_display!(
    IpRange,
    Ipv6Range,
    PrefixListId,
    UserIdGroupPair,
    IpPermission,
    SecurityGroup,
    DescribeSecurityGroupsRequest,
    DescribeSecurityGroupsResponse,
    AuthorizeSecurityGroupIngressRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn https_from(cidr: &str) -> IpPermission {
        IpPermissionBuilder::default()
            .ip_protocol("tcp")
            .from_port(443)
            .to_port(443)
            .ip_ranges([IpRange {
                cidr_ip: Some(cidr.to_string()),
                description: None,
            }])
            .build()
            .unwrap()
    }

    #[test]
    fn test_ingress_request_display() {
        let request = AuthorizeSecurityGroupIngressRequestBuilder::default()
            .group_id("sg-1")
            .ip_permissions([https_from("10.0.0.0/8")])
            .build()
            .unwrap();
        assert_eq!(
            request.to_string(),
            "{GroupId: sg-1, IpPermissions: [{FromPort: 443, IpProtocol: tcp, \
             IpRanges: [{CidrIp: 10.0.0.0/8}], ToPort: 443}]}"
        );
    }

    #[test]
    fn test_permission_lists_keep_order_and_duplicates() {
        let mut builder = SecurityGroupBuilder::default();
        builder
            .ip_permissions([https_from("10.0.0.0/8")])
            .ip_permissions([https_from("0.0.0.0/0"), https_from("10.0.0.0/8")]);
        let group = builder.build().unwrap();
        let cidrs: Vec<_> = group
            .ip_permissions
            .unwrap()
            .into_iter()
            .flat_map(|p| p.ip_ranges.unwrap())
            .map(|r| r.cidr_ip.unwrap())
            .collect();
        assert_eq!(cidrs, vec!["10.0.0.0/8", "0.0.0.0/0", "10.0.0.0/8"]);
        assert_eq!(group.ip_permissions_egress, None);
    }

    #[test]
    fn test_ingress_request_from_json() {
        let json = r#"{"GroupId":"sg-1","IpPermissions":[{"IpProtocol":"-1","UserIdGroupPairs":[{"GroupId":"sg-2"}]}]}"#;
        let request: AuthorizeSecurityGroupIngressRequest = serde_json::from_str(json).unwrap();
        let pair = &request.ip_permissions.as_ref().unwrap()[0]
            .user_id_group_pairs
            .as_ref()
            .unwrap()[0];
        assert_eq!(pair.group_id.as_deref(), Some("sg-2"));
        assert_eq!(serde_json::to_string(&request).unwrap(), json);
    }
}
