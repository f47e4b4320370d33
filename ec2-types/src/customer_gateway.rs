//! Customer gateways, the customer side of a Site-to-Site VPN connection.

use crate::common::{Filter, Tag, TagSpecification};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    /// The VPN connection type a gateway supports.
    GatewayType {
        Ipsec1 => "ipsec.1",
    }
}

/// Describes a customer gateway.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CustomerGateway {
    /// The gateway's BGP ASN, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_asn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gateway_id: Option<String>,
    /// The IP address of the gateway's outside interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    /// `pending`, `available`, `deleting` or `deleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<GatewayType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

list_setters!(CustomerGatewayBuilder {
    tags, set_tags: Tag;
});

/// Registers a customer gateway device.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomerGatewayRequest {
    /// Defaults to 65000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_asn: Option<i32>,
    /// Must be static.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<GatewayType>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

list_setters!(CreateCustomerGatewayRequestBuilder {
    tag_specifications, set_tag_specifications: TagSpecification;
});

/// `DescribeCustomerGateways` is not paginated.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomerGatewaysRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gateway_ids: Option<Vec<String>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

list_setters!(DescribeCustomerGatewaysRequestBuilder {
    customer_gateway_ids, set_customer_gateway_ids: String;
    filters, set_filters: Filter;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomerGatewaysResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gateways: Option<Vec<CustomerGateway>>,
}

list_setters!(DescribeCustomerGatewaysResponseBuilder {
    customer_gateways, set_customer_gateways: CustomerGateway;
});

dry_run_request!(
    CreateCustomerGatewayRequest => "CreateCustomerGateway",
    DescribeCustomerGatewaysRequest => "DescribeCustomerGateways",
);

impl_display!(
    CustomerGateway,
    CreateCustomerGatewayRequest,
    DescribeCustomerGatewaysRequest,
    DescribeCustomerGatewaysResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_member_name() {
        let request = CreateCustomerGatewayRequestBuilder::default()
            .bgp_asn(65010)
            .public_ip("203.0.113.12")
            .gateway_type(GatewayType::Ipsec1)
            .build()
            .unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"BgpAsn":65010,"PublicIp":"203.0.113.12","Type":"ipsec.1"}"#
        );
        assert_eq!(
            request.to_string(),
            "{BgpAsn: 65010, PublicIp: 203.0.113.12, Type: ipsec.1}"
        );
    }

    #[test]
    fn test_gateway_from_json() {
        let gateway: CustomerGateway = serde_json::from_str(
            r#"{"BgpAsn":"4294967294","CustomerGatewayId":"cgw-1","State":"available","Type":"ipsec.1"}"#,
        )
        .unwrap();
        assert_eq!(gateway.bgp_asn.as_deref(), Some("4294967294"));
        assert_eq!(gateway.gateway_type, Some(GatewayType::Ipsec1));
        assert_eq!(gateway.tags, None);
    }
}
