use crate::common::Filter;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSpotInstanceRequestsRequest {
    /// Filters such as `state`, `launch.instance-type` or `spot-price`.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_instance_request_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 5 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

list_setters!(DescribeSpotInstanceRequestsRequestBuilder {
    filters, set_filters: Filter;
    spot_instance_request_ids, set_spot_instance_request_ids: String;
});

dry_run_request!(DescribeSpotInstanceRequestsRequest => "DescribeSpotInstanceRequests");

paginated_request!(DescribeSpotInstanceRequestsRequest);

impl_display!(DescribeSpotInstanceRequestsRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DryRunSupported;

    #[test]
    fn test_spot_request_ids_and_filters() {
        let request = DescribeSpotInstanceRequestsRequestBuilder::default()
            .spot_instance_request_ids(["sir-1"])
            .filters([Filter::new("state", ["open", "active"])])
            .build()
            .unwrap();
        assert_eq!(
            request.to_string(),
            "{Filters: [{Name: state, Values: [open, active]}], SpotInstanceRequestIds: [sir-1]}"
        );
        assert_eq!(request.dry_run(), None);
    }

    #[test]
    fn test_set_ids_none_clears() {
        let mut request = DescribeSpotInstanceRequestsRequestBuilder::default()
            .spot_instance_request_ids(["sir-1"])
            .build()
            .unwrap();
        request.spot_instance_request_ids = None;
        assert_eq!(request, DescribeSpotInstanceRequestsRequest::default());
    }
}
