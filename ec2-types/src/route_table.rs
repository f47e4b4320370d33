use crate::common::{Filter, Tag};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    /// How a route was added to its table.
    RouteOrigin {
        CreateRouteTable => "CreateRouteTable",
        CreateRoute => "CreateRoute",
        EnableVgwRoutePropagation => "EnableVgwRoutePropagation",
    }
}

string_enum! {
    /// `blackhole` means the route's target is unavailable.
    RouteState {
        Active => "active",
        Blackhole => "blackhole",
    }
}

/// Describes a route in a route table.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ipv6_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_prefix_list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_only_internet_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<RouteOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<RouteState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// Associates a route table with a subnet or a gateway.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct RouteTableAssociation {
    /// Whether this is the main route table of the VPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct RouteTable {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<Vec<RouteTableAssociation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

list_setters!(RouteTableBuilder {
    associations, set_associations: RouteTableAssociation;
    routes, set_routes: Route;
    tags, set_tags: Tag;
});

impl RouteTable {
    /// Whether this table is the main route table of its VPC.
    pub fn is_main(&self) -> bool {
        self.associations
            .iter()
            .flatten()
            .any(|a| a.main == Some(true))
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteTablesRequest {
    /// Filters such as `association.main`, `route.destination-cidr-block` or `vpc-id`.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 5 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

list_setters!(DescribeRouteTablesRequestBuilder {
    filters, set_filters: Filter;
    route_table_ids, set_route_table_ids: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteTablesResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_tables: Option<Vec<RouteTable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeRouteTablesResponseBuilder {
    route_tables, set_route_tables: RouteTable;
});

dry_run_request!(DescribeRouteTablesRequest => "DescribeRouteTables");

paginated_request!(DescribeRouteTablesRequest);

paginated_response!(DescribeRouteTablesResponse => route_tables: RouteTable);

impl_display!(
    Route,
    RouteTableAssociation,
    RouteTable,
    DescribeRouteTablesRequest,
    DescribeRouteTablesResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_main() {
        let mut table = RouteTableBuilder::default()
            .route_table_id("rtb-1")
            .associations([RouteTableAssociation {
                subnet_id: Some("subnet-1".to_string()),
                ..Default::default()
            }])
            .build()
            .unwrap();
        assert!(!table.is_main());
        table
            .associations
            .as_mut()
            .unwrap()
            .push(RouteTableAssociation {
                main: Some(true),
                ..Default::default()
            });
        assert!(table.is_main());
        table.associations = None;
        assert!(!table.is_main());
    }

    #[test]
    fn test_blackhole_route_display() {
        let route = RouteBuilder::default()
            .destination_cidr_block("0.0.0.0/0")
            .nat_gateway_id("nat-1")
            .origin(RouteOrigin::CreateRoute)
            .state(RouteState::Blackhole)
            .build()
            .unwrap();
        assert_eq!(
            route.to_string(),
            "{DestinationCidrBlock: 0.0.0.0/0, NatGatewayId: nat-1, Origin: CreateRoute, State: blackhole}"
        );
    }
}
