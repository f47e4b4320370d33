use crate::common::TagSpecification;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    FlowLogsResourceType {
        Vpc => "VPC",
        Subnet => "Subnet",
        NetworkInterface => "NetworkInterface",
        TransitGateway => "TransitGateway",
        TransitGatewayAttachment => "TransitGatewayAttachment",
    }
}

string_enum! {
    TrafficType {
        Accept => "ACCEPT",
        Reject => "REJECT",
        All => "ALL",
    }
}

string_enum! {
    LogDestinationType {
        CloudWatchLogs => "cloud-watch-logs",
        S3 => "s3",
        KinesisDataFirehose => "kinesis-data-firehose",
    }
}

/// Creates flow logs that capture IP traffic for network interfaces, subnets
/// or VPCs.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CreateFlowLogsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Role allowed to publish to CloudWatch Logs. Not used with `s3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_logs_permission_arn: Option<String>,
    /// `cloud-watch-logs` only. Mutually exclusive with `log_destination`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    /// Up to 1000 ids, all of the type given in `resource_type`.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<FlowLogsResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_type: Option<TrafficType>,
    /// Defaults to `cloud-watch-logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_destination_type: Option<LogDestinationType>,
    /// ARN of the log group or bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_destination: Option<String>,
    /// Space separated `${field}` list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    /// 60 or 600 seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_aggregation_interval: Option<i32>,
}

list_setters!(CreateFlowLogsRequestBuilder {
    resource_ids, set_resource_ids: String;
    tag_specifications, set_tag_specifications: TagSpecification;
});

dry_run_request!(CreateFlowLogsRequest => "CreateFlowLogs");

impl_display!(CreateFlowLogsRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DryRunSupported;

    #[test]
    fn test_flow_logs_wire_values() {
        let request = CreateFlowLogsRequestBuilder::default()
            .resource_ids(["vpc-1", "vpc-2"])
            .resource_type(FlowLogsResourceType::Vpc)
            .traffic_type(TrafficType::Reject)
            .log_destination_type(LogDestinationType::S3)
            .log_destination("arn:aws:s3:::flow-logs")
            .build()
            .unwrap()
            .dry_run_request();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"DryRun":true,"ResourceIds":["vpc-1","vpc-2"],"ResourceType":"VPC","TrafficType":"REJECT","LogDestinationType":"s3","LogDestination":"arn:aws:s3:::flow-logs"}"#
        );
    }

    #[test]
    fn test_parse_traffic_type() {
        assert_eq!("ALL".parse::<TrafficType>(), Ok(TrafficType::All));
        assert_eq!(
            "all".parse::<TrafficType>(),
            Ok(TrafficType::Unknown("all".to_string()))
        );
    }
}
