//! Permission probes: send a mutating request with the dry-run flag set and
//! report whether the caller would have been allowed to perform it.

use async_trait::async_trait;
use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_ec2::Client;
use ec2_types::{
    capacity_reservation::CreateCapacityReservationRequest,
    customer_gateway::CreateCustomerGatewayRequest, flow_log::CreateFlowLogsRequest,
    instance::RunInstancesRequest, network_interface::ModifyNetworkInterfaceAttributeRequest,
    security_group::AuthorizeSecurityGroupIngressRequest, volume::CreateVolumeRequest,
    DryRunSupported, Ec2Request,
};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::path::Path;

use crate::error::{Error, Result};
use crate::gatherer::aws::conversion::{convert_enum, sdk_list, sdk_nested, sdk_timestamp};
use crate::types::{DryRunOutcome, DryRunReport};

const DRY_RUN_OPERATION: &str = "DryRunOperation";
const UNAUTHORIZED_OPERATION: &str = "UnauthorizedOperation";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    CreateVolume,
    CreateFlowLogs,
    CreateCapacityReservation,
    AuthorizeSecurityGroupIngress,
    CreateCustomerGateway,
    ModifyNetworkInterfaceAttribute,
    RunInstances,
}

/// A request that can be sent to the service as a dry run.
#[async_trait]
pub trait DryRunAction:
    DryRunSupported + Ec2Request + DeserializeOwned + Display + Send + Sync + 'static
{
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome>;
}

/// Maps the error code of a dry-run call to its outcome. `None` for codes
/// that are real failures.
pub fn classify(code: Option<&str>, message: Option<&str>) -> Option<DryRunOutcome> {
    match code {
        Some(DRY_RUN_OPERATION) => Some(DryRunOutcome::Permitted),
        Some(UNAUTHORIZED_OPERATION) => Some(DryRunOutcome::Denied(
            message.unwrap_or_default().to_string(),
        )),
        _ => None,
    }
}

fn outcome<O, E, R>(result: std::result::Result<O, SdkError<E, R>>) -> Result<DryRunOutcome>
where
    E: ProvideErrorMetadata,
    aws_sdk_ec2::Error: From<SdkError<E, R>>,
{
    match result {
        Ok(_) => {
            warn!("Request succeeded: the dry-run flag was not honored");
            Ok(DryRunOutcome::Executed)
        }
        Err(err) => match classify(err.code(), err.message()) {
            Some(outcome) => Ok(outcome),
            None => Err(aws_sdk_ec2::Error::from(err).into()),
        },
    }
}

#[async_trait]
impl DryRunAction for CreateVolumeRequest {
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .create_volume()
            .set_availability_zone(self.availability_zone)
            .set_encrypted(self.encrypted)
            .set_iops(self.iops)
            .set_kms_key_id(self.kms_key_id)
            .set_outpost_arn(self.outpost_arn)
            .set_size(self.size)
            .set_snapshot_id(self.snapshot_id)
            .set_volume_type(convert_enum(self.volume_type))
            .set_dry_run(self.dry_run)
            .set_tag_specifications(sdk_list(self.tag_specifications))
            .set_multi_attach_enabled(self.multi_attach_enabled)
            .send()
            .await;
        outcome(result)
    }
}

#[async_trait]
impl DryRunAction for CreateFlowLogsRequest {
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .create_flow_logs()
            .set_dry_run(self.dry_run)
            .set_client_token(self.client_token)
            .set_deliver_logs_permission_arn(self.deliver_logs_permission_arn)
            .set_log_group_name(self.log_group_name)
            .set_resource_ids(self.resource_ids)
            .set_resource_type(convert_enum(self.resource_type))
            .set_traffic_type(convert_enum(self.traffic_type))
            .set_log_destination_type(convert_enum(self.log_destination_type))
            .set_log_destination(self.log_destination)
            .set_log_format(self.log_format)
            .set_tag_specifications(sdk_list(self.tag_specifications))
            .set_max_aggregation_interval(self.max_aggregation_interval)
            .send()
            .await;
        outcome(result)
    }
}

#[async_trait]
impl DryRunAction for CreateCapacityReservationRequest {
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .create_capacity_reservation()
            .set_client_token(self.client_token)
            .set_instance_type(self.instance_type)
            .set_instance_platform(convert_enum(self.instance_platform))
            .set_availability_zone(self.availability_zone)
            .set_availability_zone_id(self.availability_zone_id)
            .set_tenancy(convert_enum(self.tenancy))
            .set_instance_count(self.instance_count)
            .set_ebs_optimized(self.ebs_optimized)
            .set_ephemeral_storage(self.ephemeral_storage)
            .set_end_date(sdk_timestamp(self.end_date))
            .set_end_date_type(convert_enum(self.end_date_type))
            .set_instance_match_criteria(convert_enum(self.instance_match_criteria))
            .set_tag_specifications(sdk_list(self.tag_specifications))
            .set_dry_run(self.dry_run)
            .send()
            .await;
        outcome(result)
    }
}

#[async_trait]
impl DryRunAction for AuthorizeSecurityGroupIngressRequest {
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .authorize_security_group_ingress()
            .set_cidr_ip(self.cidr_ip)
            .set_from_port(self.from_port)
            .set_group_id(self.group_id)
            .set_group_name(self.group_name)
            .set_ip_permissions(sdk_list(self.ip_permissions))
            .set_ip_protocol(self.ip_protocol)
            .set_source_security_group_name(self.source_security_group_name)
            .set_source_security_group_owner_id(self.source_security_group_owner_id)
            .set_to_port(self.to_port)
            .set_dry_run(self.dry_run)
            .set_tag_specifications(sdk_list(self.tag_specifications))
            .send()
            .await;
        outcome(result)
    }
}

#[async_trait]
impl DryRunAction for CreateCustomerGatewayRequest {
    #[allow(deprecated)]
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .create_customer_gateway()
            .set_bgp_asn(self.bgp_asn)
            .set_public_ip(self.public_ip)
            .set_certificate_arn(self.certificate_arn)
            .set_type(convert_enum(self.gateway_type))
            .set_tag_specifications(sdk_list(self.tag_specifications))
            .set_device_name(self.device_name)
            .set_dry_run(self.dry_run)
            .send()
            .await;
        outcome(result)
    }
}

#[async_trait]
impl DryRunAction for ModifyNetworkInterfaceAttributeRequest {
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .modify_network_interface_attribute()
            .set_attachment(sdk_nested(self.attachment))
            .set_description(sdk_nested(self.description))
            .set_dry_run(self.dry_run)
            .set_groups(self.groups)
            .set_network_interface_id(self.network_interface_id)
            .set_source_dest_check(sdk_nested(self.source_dest_check))
            .send()
            .await;
        outcome(result)
    }
}

#[async_trait]
impl DryRunAction for RunInstancesRequest {
    async fn send_dry_run(self, client: &Client) -> Result<DryRunOutcome> {
        let result = client
            .run_instances()
            .set_block_device_mappings(sdk_list(self.block_device_mappings))
            .set_image_id(self.image_id)
            .set_instance_type(convert_enum(self.instance_type))
            .set_ipv6_address_count(self.ipv6_address_count)
            .set_kernel_id(self.kernel_id)
            .set_key_name(self.key_name)
            .set_max_count(self.max_count)
            .set_min_count(self.min_count)
            .set_monitoring(sdk_nested(self.monitoring))
            .set_placement(sdk_nested(self.placement))
            .set_ramdisk_id(self.ramdisk_id)
            .set_security_group_ids(self.security_group_ids)
            .set_security_groups(self.security_groups)
            .set_subnet_id(self.subnet_id)
            .set_user_data(self.user_data)
            .set_additional_info(self.additional_info)
            .set_client_token(self.client_token)
            .set_disable_api_termination(self.disable_api_termination)
            .set_dry_run(self.dry_run)
            .set_ebs_optimized(self.ebs_optimized)
            .set_iam_instance_profile(sdk_nested(self.iam_instance_profile))
            .set_instance_initiated_shutdown_behavior(convert_enum(
                self.instance_initiated_shutdown_behavior,
            ))
            .set_private_ip_address(self.private_ip_address)
            .set_tag_specifications(sdk_list(self.tag_specifications))
            .set_cpu_options(sdk_nested(self.cpu_options))
            .set_hibernation_options(sdk_nested(self.hibernation_options))
            .send()
            .await;
        outcome(result)
    }
}

fn read_request<R: DeserializeOwned>(path: &Path) -> Result<R> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

async fn probe<R: DryRunAction>(client: &Client, path: &Path) -> Result<DryRunReport> {
    let request: R = read_request(path)?;
    if request.dry_run() == Some(false) {
        debug!("Overriding DryRun=false from {}", path.display());
    }
    let request = request.dry_run_request();
    info!("Probing {}", R::ACTION);
    debug!("{}: {}", R::ACTION, request);
    let outcome = request.send_dry_run(client).await?;
    Ok(DryRunReport {
        action: R::ACTION,
        outcome,
    })
}

/// Reads the request for `action` from `path` and sends it as a dry run.
pub async fn run(client: &Client, action: Action, path: &Path) -> Result<DryRunReport> {
    match action {
        Action::CreateVolume => probe::<CreateVolumeRequest>(client, path).await,
        Action::CreateFlowLogs => probe::<CreateFlowLogsRequest>(client, path).await,
        Action::CreateCapacityReservation => {
            probe::<CreateCapacityReservationRequest>(client, path).await
        }
        Action::AuthorizeSecurityGroupIngress => {
            probe::<AuthorizeSecurityGroupIngressRequest>(client, path).await
        }
        Action::CreateCustomerGateway => {
            probe::<CreateCustomerGatewayRequest>(client, path).await
        }
        Action::ModifyNetworkInterfaceAttribute => {
            probe::<ModifyNetworkInterfaceAttributeRequest>(client, path).await
        }
        Action::RunInstances => probe::<RunInstancesRequest>(client, path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::error::ErrorMetadata;
    use aws_sdk_ec2::operation::create_volume::CreateVolumeError;
    use ec2_types::volume::VolumeType;

    fn service_error(code: &str, message: &str) -> SdkError<CreateVolumeError, ()> {
        let meta = ErrorMetadata::builder().code(code).message(message).build();
        SdkError::service_error(CreateVolumeError::generic(meta), ())
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(Some("DryRunOperation"), Some("Request would have succeeded")),
            Some(DryRunOutcome::Permitted)
        );
        assert_eq!(
            classify(
                Some("UnauthorizedOperation"),
                Some("You are not authorized to perform this operation.")
            ),
            Some(DryRunOutcome::Denied(
                "You are not authorized to perform this operation.".to_string()
            ))
        );
        assert_eq!(
            classify(Some("UnauthorizedOperation"), None),
            Some(DryRunOutcome::Denied(String::new()))
        );
        assert_eq!(classify(Some("InvalidParameterValue"), Some("bad")), None);
        assert_eq!(classify(None, None), None);
    }

    #[test]
    fn test_outcome_from_service_error() {
        let permitted = outcome::<(), _, _>(Err(service_error(
            "DryRunOperation",
            "Request would have succeeded, but DryRun flag is set.",
        )));
        assert_eq!(permitted.unwrap(), DryRunOutcome::Permitted);

        let denied = outcome::<(), _, _>(Err(service_error(
            "UnauthorizedOperation",
            "You are not authorized to perform this operation.",
        )));
        assert_eq!(
            denied.unwrap(),
            DryRunOutcome::Denied("You are not authorized to perform this operation.".to_string())
        );

        let failed = outcome::<(), _, _>(Err(service_error(
            "InvalidParameterValue",
            "Invalid availability zone",
        )));
        assert!(matches!(failed, Err(Error::Ec2(_))));
    }

    #[test]
    fn test_outcome_when_executed() {
        let executed = outcome(Ok::<_, SdkError<CreateVolumeError, ()>>(()));
        assert_eq!(executed.unwrap(), DryRunOutcome::Executed);
    }

    #[test]
    fn test_read_request() {
        let path = std::env::temp_dir().join(format!("ec2-model-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"AvailabilityZone": "eu-west-1a", "Size": 8, "VolumeType": "gp3"}"#,
        )
        .unwrap();
        let request: CreateVolumeRequest = read_request(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(request.availability_zone.as_deref(), Some("eu-west-1a"));
        assert_eq!(request.size, Some(8));
        assert_eq!(request.volume_type, Some(VolumeType::Gp3));
        assert_eq!(request.dry_run, None);
        assert_eq!(request.dry_run_request().dry_run, Some(true));
    }

    #[test]
    fn test_read_request_missing_file() {
        let path = Path::new("/nonexistent/ec2-model/request.json");
        let err = read_request::<CreateVolumeRequest>(path).unwrap_err();
        assert!(matches!(&err, Error::Io { path: p, .. } if p == path));
        assert!(err.to_string().starts_with("failed to read /nonexistent"));
    }

    #[test]
    fn test_read_request_invalid_json() {
        let path = std::env::temp_dir().join(format!(
            "ec2-model-invalid-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{not json").unwrap();
        let result = read_request::<RunInstancesRequest>(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
