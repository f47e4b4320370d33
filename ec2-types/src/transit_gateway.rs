use crate::common::{Filter, Tag};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    TransitGatewayAttachmentState {
        Initiating => "initiating",
        InitiatingRequest => "initiatingRequest",
        PendingAcceptance => "pendingAcceptance",
        RollingBack => "rollingBack",
        Pending => "pending",
        Available => "available",
        Modifying => "modifying",
        Deleting => "deleting",
        Deleted => "deleted",
        Failed => "failed",
        Rejected => "rejected",
        Rejecting => "rejecting",
        Failing => "failing",
    }
}

string_enum! {
    DnsSupportValue {
        Enable => "enable",
        Disable => "disable",
    }
}

string_enum! {
    Ipv6SupportValue {
        Enable => "enable",
        Disable => "disable",
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct TransitGatewayVpcAttachmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_support: Option<DnsSupportValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_support: Option<Ipv6SupportValue>,
}

/// Describes a VPC attachment to a transit gateway.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct TransitGatewayVpcAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_gateway_attachment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TransitGatewayAttachmentState>,
    /// One subnet per Availability Zone.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransitGatewayVpcAttachmentOptions>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

list_setters!(TransitGatewayVpcAttachmentBuilder {
    subnet_ids, set_subnet_ids: String;
    tags, set_tags: Tag;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTransitGatewayVpcAttachmentsRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_gateway_attachment_ids: Option<Vec<String>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// 5 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

list_setters!(DescribeTransitGatewayVpcAttachmentsRequestBuilder {
    transit_gateway_attachment_ids, set_transit_gateway_attachment_ids: String;
    filters, set_filters: Filter;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTransitGatewayVpcAttachmentsResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_gateway_vpc_attachments: Option<Vec<TransitGatewayVpcAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeTransitGatewayVpcAttachmentsResponseBuilder {
    transit_gateway_vpc_attachments, set_transit_gateway_vpc_attachments: TransitGatewayVpcAttachment;
});

dry_run_request!(
    DescribeTransitGatewayVpcAttachmentsRequest => "DescribeTransitGatewayVpcAttachments",
);

paginated_request!(DescribeTransitGatewayVpcAttachmentsRequest);

paginated_response!(
    DescribeTransitGatewayVpcAttachmentsResponse => transit_gateway_vpc_attachments: TransitGatewayVpcAttachment,
);

impl_display!(
    TransitGatewayVpcAttachmentOptions,
    TransitGatewayVpcAttachment,
    DescribeTransitGatewayVpcAttachmentsRequest,
    DescribeTransitGatewayVpcAttachmentsResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_attachment_with_options_and_tags() {
        let attachment = TransitGatewayVpcAttachmentBuilder::default()
            .transit_gateway_attachment_id("tgw-attach-1")
            .state(TransitGatewayAttachmentState::PendingAcceptance)
            .subnet_ids(["subnet-a", "subnet-b"])
            .creation_time(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap())
            .options(TransitGatewayVpcAttachmentOptions {
                dns_support: Some(DnsSupportValue::Enable),
                ipv6_support: Some(Ipv6SupportValue::Disable),
            })
            .tags([Tag {
                key: Some("Name".to_string()),
                value: Some("prod".to_string()),
            }])
            .build()
            .unwrap();
        assert_eq!(
            attachment.to_string(),
            "{TransitGatewayAttachmentId: tgw-attach-1, State: pendingAcceptance, \
             SubnetIds: [subnet-a, subnet-b], CreationTime: 2021-03-04T05:06:07Z, \
             Options: {DnsSupport: enable, Ipv6Support: disable}, Tags: [{Key: Name, Value: prod}]}"
        );
        let json = serde_json::to_string(&attachment).unwrap();
        assert_eq!(
            serde_json::from_str::<TransitGatewayVpcAttachment>(&json).unwrap(),
            attachment
        );
    }

    #[test]
    fn test_options_none_vs_empty() {
        let mut attachment = TransitGatewayVpcAttachment {
            options: Some(TransitGatewayVpcAttachmentOptions::default()),
            ..Default::default()
        };
        assert_eq!(attachment.to_string(), "{Options: {}}");
        attachment.options = None;
        assert_eq!(attachment.to_string(), "{}");
    }
}
