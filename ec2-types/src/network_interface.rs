//! Elastic network interfaces.

use crate::common::{AttributeBooleanValue, AttributeValue, Filter, GroupIdentifier, Tag};
use crate::instance::AttachmentStatus;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    NetworkInterfaceStatus {
        Available => "available",
        Associated => "associated",
        Attaching => "attaching",
        InUse => "in-use",
        Detaching => "detaching",
    }
}

string_enum! {
    NetworkInterfaceType {
        Interface => "interface",
        NatGateway => "natGateway",
        Efa => "efa",
        Trunk => "trunk",
        LoadBalancer => "load_balancer",
        NetworkLoadBalancer => "network_load_balancer",
        VpcEndpoint => "vpc_endpoint",
        TransitGateway => "transit_gateway",
        Lambda => "lambda",
        Quicksight => "quicksight",
        GatewayLoadBalancer => "gateway_load_balancer",
        GatewayLoadBalancerEndpoint => "gateway_load_balancer_endpoint",
        ApiGatewayManaged => "api_gateway_managed",
        AwsCodestarConnectionsManaged => "aws_codestar_connections_managed",
    }
}

/// Describes the attachment of a network interface to an instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterfaceAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_card_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttachmentStatus>,
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterfacePrivateIpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

/// Describes a network interface.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<NetworkInterfaceAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<NetworkInterfaceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<NetworkInterfacePrivateIpAddress>>,
    /// The service or account that created the interface on your behalf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NetworkInterfaceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_set: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

list_setters!(NetworkInterfaceBuilder {
    groups, set_groups: GroupIdentifier;
    private_ip_addresses, set_private_ip_addresses: NetworkInterfacePrivateIpAddress;
    tag_set, set_tag_set: Tag;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkInterfacesRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 5 to 1000. Cannot be combined with `network_interface_ids`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

list_setters!(DescribeNetworkInterfacesRequestBuilder {
    filters, set_filters: Filter;
    network_interface_ids, set_network_interface_ids: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkInterfacesResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterface>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeNetworkInterfacesResponseBuilder {
    network_interfaces, set_network_interfaces: NetworkInterface;
});

/// Changes to the attachment of a network interface.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterfaceAttachmentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
}

/// Modifies one attribute of a network interface. Set exactly one of the
/// attribute fields per request.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct ModifyNetworkInterfaceAttributeRequest {
    /// Only the attachment id and delete-on-termination flag can be changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<NetworkInterfaceAttachmentChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Replaces every security group on the interface.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<AttributeBooleanValue>,
}

list_setters!(ModifyNetworkInterfaceAttributeRequestBuilder {
    groups, set_groups: String;
});

dry_run_request!(
    DescribeNetworkInterfacesRequest => "DescribeNetworkInterfaces",
    ModifyNetworkInterfaceAttributeRequest => "ModifyNetworkInterfaceAttribute",
);

paginated_request!(DescribeNetworkInterfacesRequest);

paginated_response!(DescribeNetworkInterfacesResponse => network_interfaces: NetworkInterface);

impl_display!(
    NetworkInterfaceAttachment,
    NetworkInterfacePrivateIpAddress,
    NetworkInterface,
    DescribeNetworkInterfacesRequest,
    DescribeNetworkInterfacesResponse,
    NetworkInterfaceAttachmentChanges,
    ModifyNetworkInterfaceAttributeRequest,
);
