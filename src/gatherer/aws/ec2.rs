use async_trait::async_trait;
use aws_sdk_ec2::Client;
use ec2_types::{
    capacity_reservation::{
        CapacityReservation, DescribeCapacityReservationsRequest,
        DescribeCapacityReservationsResponse,
    },
    customer_gateway::{
        CustomerGateway, DescribeCustomerGatewaysRequest, DescribeCustomerGatewaysResponse,
    },
    image::{DescribeImagesRequest, DescribeImagesResponse, Image},
    instance::{DescribeInstancesRequest, DescribeInstancesResponse, Instance, Reservation},
    instance_type::{
        DescribeInstanceTypesRequest, DescribeInstanceTypesResponse, InstanceTypeInfo,
    },
    network_interface::{
        DescribeNetworkInterfacesRequest, DescribeNetworkInterfacesResponse, NetworkInterface,
    },
    reserved_instances::{
        DescribeReservedInstancesRequest, DescribeReservedInstancesResponse, ReservedInstances,
    },
    route_table::{DescribeRouteTablesRequest, DescribeRouteTablesResponse, RouteTable},
    security_group::{
        DescribeSecurityGroupsRequest, DescribeSecurityGroupsResponse, SecurityGroup,
    },
    transit_gateway::{
        DescribeTransitGatewayVpcAttachmentsRequest, DescribeTransitGatewayVpcAttachmentsResponse,
        TransitGatewayVpcAttachment,
    },
    vpc_endpoint::{
        ConnectionNotification, DescribeVpcEndpointConnectionNotificationsRequest,
        DescribeVpcEndpointConnectionNotificationsResponse,
    },
};
use log::{debug, info};

use crate::error::Result;
use crate::gatherer::{paginate, Gatherer};

use super::conversion::{convert_enum, convert_enums, sdk_list, FromSdk};

async fn describe_instances(
    client: &Client,
    request: DescribeInstancesRequest,
) -> Result<DescribeInstancesResponse> {
    debug!("DescribeInstances: {}", request);
    let output = client
        .describe_instances()
        .set_filters(sdk_list(request.filters))
        .set_instance_ids(request.instance_ids)
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeInstancesResponse::from_sdk(output))
}

/// Retrieves instances, flattened out of their reservations.
pub struct InstanceGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeInstancesRequest,
}

#[async_trait]
impl<'a> Gatherer for InstanceGatherer<'a> {
    type Resource = Instance;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching instances");
        let reservations = paginate(self.request.clone(), |request| {
            describe_instances(self.client, request)
        })
        .await?;
        Ok(reservations
            .into_iter()
            .flat_map(Reservation::into_instances)
            .collect())
    }
}

async fn describe_images(
    client: &Client,
    request: DescribeImagesRequest,
) -> Result<DescribeImagesResponse> {
    debug!("DescribeImages: {}", request);
    let output = client
        .describe_images()
        .set_executable_users(request.executable_users)
        .set_filters(sdk_list(request.filters))
        .set_image_ids(request.image_ids)
        .set_owners(request.owners)
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeImagesResponse::from_sdk(output))
}

pub struct ImageGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeImagesRequest,
}

#[async_trait]
impl<'a> Gatherer for ImageGatherer<'a> {
    type Resource = Image;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching images");
        paginate(self.request.clone(), |request| {
            describe_images(self.client, request)
        })
        .await
    }
}

async fn describe_capacity_reservations(
    client: &Client,
    request: DescribeCapacityReservationsRequest,
) -> Result<DescribeCapacityReservationsResponse> {
    debug!("DescribeCapacityReservations: {}", request);
    let output = client
        .describe_capacity_reservations()
        .set_capacity_reservation_ids(request.capacity_reservation_ids)
        .set_filters(sdk_list(request.filters))
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeCapacityReservationsResponse::from_sdk(output))
}

pub struct CapacityReservationGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeCapacityReservationsRequest,
}

#[async_trait]
impl<'a> Gatherer for CapacityReservationGatherer<'a> {
    type Resource = CapacityReservation;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching capacity reservations");
        paginate(self.request.clone(), |request| {
            describe_capacity_reservations(self.client, request)
        })
        .await
    }
}

async fn describe_instance_types(
    client: &Client,
    request: DescribeInstanceTypesRequest,
) -> Result<DescribeInstanceTypesResponse> {
    debug!("DescribeInstanceTypes: {}", request);
    let output = client
        .describe_instance_types()
        .set_instance_types(convert_enums(request.instance_types))
        .set_filters(sdk_list(request.filters))
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeInstanceTypesResponse::from_sdk(output))
}

pub struct InstanceTypeGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeInstanceTypesRequest,
}

#[async_trait]
impl<'a> Gatherer for InstanceTypeGatherer<'a> {
    type Resource = InstanceTypeInfo;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching instance types");
        paginate(self.request.clone(), |request| {
            describe_instance_types(self.client, request)
        })
        .await
    }
}

async fn describe_security_groups(
    client: &Client,
    request: DescribeSecurityGroupsRequest,
) -> Result<DescribeSecurityGroupsResponse> {
    debug!("DescribeSecurityGroups: {}", request);
    let output = client
        .describe_security_groups()
        .set_filters(sdk_list(request.filters))
        .set_group_ids(request.group_ids)
        .set_group_names(request.group_names)
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeSecurityGroupsResponse::from_sdk(output))
}

pub struct SecurityGroupGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeSecurityGroupsRequest,
}

#[async_trait]
impl<'a> Gatherer for SecurityGroupGatherer<'a> {
    type Resource = SecurityGroup;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching security groups");
        paginate(self.request.clone(), |request| {
            describe_security_groups(self.client, request)
        })
        .await
    }
}

async fn describe_network_interfaces(
    client: &Client,
    request: DescribeNetworkInterfacesRequest,
) -> Result<DescribeNetworkInterfacesResponse> {
    debug!("DescribeNetworkInterfaces: {}", request);
    let output = client
        .describe_network_interfaces()
        .set_filters(sdk_list(request.filters))
        .set_network_interface_ids(request.network_interface_ids)
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeNetworkInterfacesResponse::from_sdk(output))
}

pub struct NetworkInterfaceGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeNetworkInterfacesRequest,
}

#[async_trait]
impl<'a> Gatherer for NetworkInterfaceGatherer<'a> {
    type Resource = NetworkInterface;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching network interfaces");
        paginate(self.request.clone(), |request| {
            describe_network_interfaces(self.client, request)
        })
        .await
    }
}

async fn describe_route_tables(
    client: &Client,
    request: DescribeRouteTablesRequest,
) -> Result<DescribeRouteTablesResponse> {
    debug!("DescribeRouteTables: {}", request);
    let output = client
        .describe_route_tables()
        .set_filters(sdk_list(request.filters))
        .set_route_table_ids(request.route_table_ids)
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeRouteTablesResponse::from_sdk(output))
}

/// Gather route tables, main route tables included.
pub struct RouteTableGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeRouteTablesRequest,
}

#[async_trait]
impl<'a> Gatherer for RouteTableGatherer<'a> {
    type Resource = RouteTable;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching route tables");
        let tables = paginate(self.request.clone(), |request| {
            describe_route_tables(self.client, request)
        })
        .await?;
        debug!(
            "{} of {} route tables are main route tables",
            tables.iter().filter(|t| t.is_main()).count(),
            tables.len()
        );
        Ok(tables)
    }
}

/// Customer gateways come back in a single page.
pub struct CustomerGatewayGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeCustomerGatewaysRequest,
}

#[async_trait]
impl<'a> Gatherer for CustomerGatewayGatherer<'a> {
    type Resource = CustomerGateway;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching customer gateways");
        let request = self.request.clone();
        debug!("DescribeCustomerGateways: {}", request);
        let output = self
            .client
            .describe_customer_gateways()
            .set_customer_gateway_ids(request.customer_gateway_ids)
            .set_filters(sdk_list(request.filters))
            .set_dry_run(request.dry_run)
            .send()
            .await
            .map_err(aws_sdk_ec2::Error::from)?;
        Ok(DescribeCustomerGatewaysResponse::from_sdk(output)
            .customer_gateways
            .unwrap_or_default())
    }
}

/// Reserved instances come back in a single page.
pub struct ReservedInstancesGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeReservedInstancesRequest,
}

#[async_trait]
impl<'a> Gatherer for ReservedInstancesGatherer<'a> {
    type Resource = ReservedInstances;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching reserved instances");
        let request = self.request.clone();
        debug!("DescribeReservedInstances: {}", request);
        let output = self
            .client
            .describe_reserved_instances()
            .set_filters(sdk_list(request.filters))
            .set_offering_class(convert_enum(request.offering_class))
            .set_reserved_instances_ids(request.reserved_instances_ids)
            .set_dry_run(request.dry_run)
            .set_offering_type(convert_enum(request.offering_type))
            .send()
            .await
            .map_err(aws_sdk_ec2::Error::from)?;
        Ok(DescribeReservedInstancesResponse::from_sdk(output)
            .reserved_instances
            .unwrap_or_default())
    }
}

async fn describe_connection_notifications(
    client: &Client,
    request: DescribeVpcEndpointConnectionNotificationsRequest,
) -> Result<DescribeVpcEndpointConnectionNotificationsResponse> {
    debug!("DescribeVpcEndpointConnectionNotifications: {}", request);
    let output = client
        .describe_vpc_endpoint_connection_notifications()
        .set_connection_notification_id(request.connection_notification_id)
        .set_filters(sdk_list(request.filters))
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeVpcEndpointConnectionNotificationsResponse::from_sdk(output))
}

pub struct ConnectionNotificationGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeVpcEndpointConnectionNotificationsRequest,
}

#[async_trait]
impl<'a> Gatherer for ConnectionNotificationGatherer<'a> {
    type Resource = ConnectionNotification;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching VPC endpoint connection notifications");
        paginate(self.request.clone(), |request| {
            describe_connection_notifications(self.client, request)
        })
        .await
    }
}

async fn describe_transit_gateway_vpc_attachments(
    client: &Client,
    request: DescribeTransitGatewayVpcAttachmentsRequest,
) -> Result<DescribeTransitGatewayVpcAttachmentsResponse> {
    debug!("DescribeTransitGatewayVpcAttachments: {}", request);
    let output = client
        .describe_transit_gateway_vpc_attachments()
        .set_transit_gateway_attachment_ids(request.transit_gateway_attachment_ids)
        .set_filters(sdk_list(request.filters))
        .set_dry_run(request.dry_run)
        .set_max_results(request.max_results)
        .set_next_token(request.next_token)
        .send()
        .await
        .map_err(aws_sdk_ec2::Error::from)?;
    Ok(DescribeTransitGatewayVpcAttachmentsResponse::from_sdk(output))
}

pub struct TransitGatewayVpcAttachmentGatherer<'a> {
    pub client: &'a Client,
    pub request: DescribeTransitGatewayVpcAttachmentsRequest,
}

#[async_trait]
impl<'a> Gatherer for TransitGatewayVpcAttachmentGatherer<'a> {
    type Resource = TransitGatewayVpcAttachment;

    async fn gather(&self) -> Result<Vec<Self::Resource>> {
        info!("Fetching transit gateway VPC attachments");
        paginate(self.request.clone(), |request| {
            describe_transit_gateway_vpc_attachments(self.client, request)
        })
        .await
    }
}
