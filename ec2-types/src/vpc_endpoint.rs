use crate::common::Filter;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    ConnectionNotificationType {
        Topic => "Topic",
    }
}

string_enum! {
    ConnectionNotificationState {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

/// A notification subscription for VPC endpoint or endpoint service events.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_notification_id: Option<String>,
    /// Set for endpoint service notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Set for endpoint notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_endpoint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_notification_type: Option<ConnectionNotificationType>,
    /// The SNS topic the notifications go to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_notification_arn: Option<String>,
    /// `Accept`, `Connect`, `Delete` or `Reject`.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_notification_state: Option<ConnectionNotificationState>,
}

list_setters!(ConnectionNotificationBuilder {
    connection_events, set_connection_events: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcEndpointConnectionNotificationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_notification_id: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeVpcEndpointConnectionNotificationsRequestBuilder {
    filters, set_filters: Filter;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcEndpointConnectionNotificationsResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_notification_set: Option<Vec<ConnectionNotification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeVpcEndpointConnectionNotificationsResponseBuilder {
    connection_notification_set, set_connection_notification_set: ConnectionNotification;
});

dry_run_request!(
    DescribeVpcEndpointConnectionNotificationsRequest => "DescribeVpcEndpointConnectionNotifications",
);

paginated_request!(DescribeVpcEndpointConnectionNotificationsRequest);

paginated_response!(
    DescribeVpcEndpointConnectionNotificationsResponse => connection_notification_set: ConnectionNotification,
);

impl_display!(
    ConnectionNotification,
    DescribeVpcEndpointConnectionNotificationsRequest,
    DescribeVpcEndpointConnectionNotificationsResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PaginatedResponse;

    #[test]
    fn test_notification_events_display() {
        let notification = ConnectionNotificationBuilder::default()
            .connection_notification_id("vpce-nfn-1")
            .connection_notification_type(ConnectionNotificationType::Topic)
            .connection_events(["Accept", "Reject"])
            .connection_notification_state(ConnectionNotificationState::Enabled)
            .build()
            .unwrap();
        assert_eq!(
            notification.to_string(),
            "{ConnectionNotificationId: vpce-nfn-1, ConnectionNotificationType: Topic, \
             ConnectionEvents: [Accept, Reject], ConnectionNotificationState: Enabled}"
        );
    }

    #[test]
    fn test_response_items() {
        let response: DescribeVpcEndpointConnectionNotificationsResponse = serde_json::from_str(
            r#"{"ConnectionNotificationSet":[{"ConnectionNotificationId":"a"},{"ConnectionNotificationId":"b"}],"NextToken":"n"}"#,
        )
        .unwrap();
        assert_eq!(response.next_token(), Some("n"));
        let ids: Vec<_> = response
            .into_items()
            .into_iter()
            .filter_map(|n| n.connection_notification_id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
