//! Command line access to the EC2 model types. Every describe subcommand builds
//! the model request from its arguments, follows the result pages and prints
//! the resources. `dry-run` probes whether the configured credentials may
//! perform a mutating action, without performing it.

mod dry_run;
mod error;
mod gatherer;
mod types;

use aws_sdk_ec2::Client;
use clap::{Args, Parser, Subcommand};
use ec2_types::{
    capacity_reservation::DescribeCapacityReservationsRequest, common::Filter,
    customer_gateway::DescribeCustomerGatewaysRequest, image::DescribeImagesRequest,
    instance::DescribeInstancesRequest, instance_type::DescribeInstanceTypesRequest,
    network_interface::DescribeNetworkInterfacesRequest,
    reserved_instances::DescribeReservedInstancesRequest,
    route_table::DescribeRouteTablesRequest, security_group::DescribeSecurityGroupsRequest,
    transit_gateway::DescribeTransitGatewayVpcAttachmentsRequest,
    vpc_endpoint::DescribeVpcEndpointConnectionNotificationsRequest,
};
use log::{error, info};
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::path::PathBuf;
use std::process::exit;

use crate::dry_run::Action;
use crate::error::{Error, Result};
use crate::gatherer::aws::{aws_setup, ec2::*};
use crate::gatherer::Gatherer;
use crate::types::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Describes EC2 resources and probes permissions with dry-run requests. AWS configuration must be setup to access the account."
)]
struct Options {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Region to use instead of the one from the AWS configuration.
    #[arg(long, global = true)]
    region: Option<String>,
    /// Named profile from the AWS configuration.
    #[arg(long, global = true)]
    profile: Option<String>,
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

/// Arguments shared by the paginated describe calls.
#[derive(Args, Debug, Clone)]
struct ListArgs {
    /// Filter as `Name=value1,value2`; may be repeated.
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    filters: Vec<Filter>,
    /// Page size requested from the service. All pages are fetched.
    #[arg(long)]
    max_results: Option<i32>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    DescribeInstances {
        #[arg(long = "instance-id")]
        instance_ids: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeImages {
        #[arg(long = "image-id")]
        image_ids: Vec<String>,
        /// `self`, `amazon`, `aws-marketplace` or an account id.
        #[arg(long = "owner")]
        owners: Vec<String>,
        #[arg(long = "executable-user")]
        executable_users: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeCapacityReservations {
        #[arg(long = "capacity-reservation-id")]
        capacity_reservation_ids: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeInstanceTypes {
        /// e.g. `t3.micro`.
        #[arg(long = "instance-type")]
        instance_types: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeSecurityGroups {
        #[arg(long = "group-id")]
        group_ids: Vec<String>,
        #[arg(long = "group-name")]
        group_names: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeNetworkInterfaces {
        #[arg(long = "network-interface-id")]
        network_interface_ids: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeRouteTables {
        #[arg(long = "route-table-id")]
        route_table_ids: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeCustomerGateways {
        #[arg(long = "customer-gateway-id")]
        customer_gateway_ids: Vec<String>,
        #[arg(long = "filter", value_name = "NAME=VALUES")]
        filters: Vec<Filter>,
    },
    DescribeReservedInstances {
        #[arg(long = "reserved-instances-id")]
        reserved_instances_ids: Vec<String>,
        #[arg(long = "filter", value_name = "NAME=VALUES")]
        filters: Vec<Filter>,
    },
    DescribeConnectionNotifications {
        #[arg(long)]
        connection_notification_id: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    DescribeTransitGatewayVpcAttachments {
        #[arg(long = "attachment-id")]
        attachment_ids: Vec<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Sends the request in FILE with the dry-run flag set and reports
    /// whether it would have been permitted.
    DryRun {
        #[arg(value_enum)]
        action: Action,
        /// JSON request using the service's member names, e.g. `{"Size": 8}`.
        #[arg(long)]
        file: PathBuf,
    },
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// The service rejects a page size together with explicit ids.
fn page_size(max_results: Option<i32>, ids: &[String]) -> Result<Option<i32>> {
    match max_results {
        Some(_) if !ids.is_empty() => Err(Error::InvalidInput(
            "--max-results cannot be combined with explicit ids".to_string(),
        )),
        Some(n) if n <= 0 => Err(Error::InvalidInput(format!(
            "--max-results must be positive, got {}",
            n
        ))),
        other => Ok(other),
    }
}

async fn describe<G>(gatherer: G, format: OutputFormat) -> Result<()>
where
    G: Gatherer,
    G::Resource: Display + Debug + Serialize,
{
    let resources = gatherer.gather().await?;
    info!("Retrieved {} resources", resources.len());
    println!("{}", format.render(&resources)?);
    Ok(())
}

async fn run(options: Options) -> Result<()> {
    let config = aws_setup(options.region, options.profile).await;
    let client = Client::new(&config);
    let client = &client;
    let format = options.format;
    match options.command {
        Command::DescribeInstances { instance_ids, list } => {
            let request = DescribeInstancesRequest {
                max_results: page_size(list.max_results, &instance_ids)?,
                filters: non_empty(list.filters),
                instance_ids: non_empty(instance_ids),
                ..Default::default()
            };
            describe(InstanceGatherer { client, request }, format).await
        }
        Command::DescribeImages {
            image_ids,
            owners,
            executable_users,
            list,
        } => {
            let request = DescribeImagesRequest {
                max_results: page_size(list.max_results, &image_ids)?,
                filters: non_empty(list.filters),
                image_ids: non_empty(image_ids),
                owners: non_empty(owners),
                executable_users: non_empty(executable_users),
                ..Default::default()
            };
            describe(ImageGatherer { client, request }, format).await
        }
        Command::DescribeCapacityReservations {
            capacity_reservation_ids,
            list,
        } => {
            let request = DescribeCapacityReservationsRequest {
                max_results: page_size(list.max_results, &capacity_reservation_ids)?,
                filters: non_empty(list.filters),
                capacity_reservation_ids: non_empty(capacity_reservation_ids),
                ..Default::default()
            };
            describe(CapacityReservationGatherer { client, request }, format).await
        }
        Command::DescribeInstanceTypes {
            instance_types,
            list,
        } => {
            let request = DescribeInstanceTypesRequest {
                max_results: page_size(list.max_results, &instance_types)?,
                filters: non_empty(list.filters),
                instance_types: non_empty(instance_types),
                ..Default::default()
            };
            describe(InstanceTypeGatherer { client, request }, format).await
        }
        Command::DescribeSecurityGroups {
            group_ids,
            group_names,
            list,
        } => {
            let named: Vec<String> = group_ids.iter().chain(&group_names).cloned().collect();
            let request = DescribeSecurityGroupsRequest {
                max_results: page_size(list.max_results, &named)?,
                filters: non_empty(list.filters),
                group_ids: non_empty(group_ids),
                group_names: non_empty(group_names),
                ..Default::default()
            };
            describe(SecurityGroupGatherer { client, request }, format).await
        }
        Command::DescribeNetworkInterfaces {
            network_interface_ids,
            list,
        } => {
            let request = DescribeNetworkInterfacesRequest {
                max_results: page_size(list.max_results, &network_interface_ids)?,
                filters: non_empty(list.filters),
                network_interface_ids: non_empty(network_interface_ids),
                ..Default::default()
            };
            describe(NetworkInterfaceGatherer { client, request }, format).await
        }
        Command::DescribeRouteTables {
            route_table_ids,
            list,
        } => {
            let request = DescribeRouteTablesRequest {
                max_results: page_size(list.max_results, &route_table_ids)?,
                filters: non_empty(list.filters),
                route_table_ids: non_empty(route_table_ids),
                ..Default::default()
            };
            describe(RouteTableGatherer { client, request }, format).await
        }
        Command::DescribeCustomerGateways {
            customer_gateway_ids,
            filters,
        } => {
            let request = DescribeCustomerGatewaysRequest {
                filters: non_empty(filters),
                customer_gateway_ids: non_empty(customer_gateway_ids),
                ..Default::default()
            };
            describe(CustomerGatewayGatherer { client, request }, format).await
        }
        Command::DescribeReservedInstances {
            reserved_instances_ids,
            filters,
        } => {
            let request = DescribeReservedInstancesRequest {
                filters: non_empty(filters),
                reserved_instances_ids: non_empty(reserved_instances_ids),
                ..Default::default()
            };
            describe(ReservedInstancesGatherer { client, request }, format).await
        }
        Command::DescribeConnectionNotifications {
            connection_notification_id,
            list,
        } => {
            let ids: Vec<String> = connection_notification_id.iter().cloned().collect();
            let request = DescribeVpcEndpointConnectionNotificationsRequest {
                max_results: page_size(list.max_results, &ids)?,
                filters: non_empty(list.filters),
                connection_notification_id,
                ..Default::default()
            };
            describe(ConnectionNotificationGatherer { client, request }, format).await
        }
        Command::DescribeTransitGatewayVpcAttachments {
            attachment_ids,
            list,
        } => {
            let request = DescribeTransitGatewayVpcAttachmentsRequest {
                max_results: page_size(list.max_results, &attachment_ids)?,
                filters: non_empty(list.filters),
                transit_gateway_attachment_ids: non_empty(attachment_ids),
                ..Default::default()
            };
            describe(TransitGatewayVpcAttachmentGatherer { client, request }, format).await
        }
        Command::DryRun { action, file } => {
            let report = dry_run::run(client, action, &file).await?;
            println!("{}", format.render(std::slice::from_ref(&report))?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    if let Err(e) = run(options).await {
        error!("{}", e);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_parse_describe_instances() {
        let options = Options::try_parse_from([
            "ec2-model",
            "--region",
            "eu-west-1",
            "describe-instances",
            "--filter",
            "instance-state-name=running,stopped",
            "--filter",
            "tag:env=prod",
            "--max-results",
            "50",
        ])
        .unwrap();
        assert_eq!(options.region.as_deref(), Some("eu-west-1"));
        assert_eq!(options.format, OutputFormat::Text);
        match options.command {
            Command::DescribeInstances { instance_ids, list } => {
                assert!(instance_ids.is_empty());
                assert_eq!(
                    list.filters,
                    vec![
                        Filter::new("instance-state-name", ["running", "stopped"]),
                        Filter::new("tag:env", ["prod"]),
                    ]
                );
                assert_eq!(list.max_results, Some(50));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_filter() {
        let result = Options::try_parse_from([
            "ec2-model",
            "describe-route-tables",
            "--filter",
            "vpc-id",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_dry_run() {
        let options = Options::try_parse_from([
            "ec2-model",
            "dry-run",
            "authorize-security-group-ingress",
            "--file",
            "ingress.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(options.format, OutputFormat::Json);
        match options.command {
            Command::DryRun { action, file } => {
                assert_eq!(action, Action::AuthorizeSecurityGroupIngress);
                assert_eq!(file, PathBuf::from("ingress.json"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_page_size() {
        assert_eq!(page_size(None, &[]).unwrap(), None);
        assert_eq!(page_size(Some(5), &[]).unwrap(), Some(5));
        assert_eq!(page_size(None, &["i-1".to_string()]).unwrap(), None);
        assert!(matches!(
            page_size(Some(5), &["i-1".to_string()]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(page_size(Some(0), &[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty::<String>(vec![]), None);
        assert_eq!(non_empty(vec![1, 2]), Some(vec![1, 2]));
    }
}
