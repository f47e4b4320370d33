//! Instances, reservations and the `DescribeInstances` / `RunInstances` requests.

use crate::common::{Filter, GroupIdentifier, ProductCode, StateReason, Tag, TagSpecification};
use crate::image::BlockDeviceMapping;
use crate::network_interface::NetworkInterfaceStatus;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    InstanceStateName {
        Pending => "pending",
        Running => "running",
        ShuttingDown => "shutting-down",
        Terminated => "terminated",
        Stopping => "stopping",
        Stopped => "stopped",
    }
}

string_enum! {
    MonitoringState {
        Disabled => "disabled",
        Disabling => "disabling",
        Enabled => "enabled",
        Pending => "pending",
    }
}

string_enum! {
    Tenancy {
        Default => "default",
        Dedicated => "dedicated",
        Host => "host",
    }
}

string_enum! {
    ArchitectureValues {
        I386 => "i386",
        X8664 => "x86_64",
        Arm64 => "arm64",
        X8664Mac => "x86_64_mac",
        Arm64Mac => "arm64_mac",
    }
}

string_enum! {
    PlatformValues {
        Windows => "Windows",
    }
}

string_enum! {
    DeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

string_enum! {
    HypervisorType {
        Ovm => "ovm",
        Xen => "xen",
    }
}

string_enum! {
    VirtualizationType {
        Hvm => "hvm",
        Paravirtual => "paravirtual",
    }
}

string_enum! {
    InstanceLifecycleType {
        Spot => "spot",
        Scheduled => "scheduled",
        CapacityBlock => "capacity-block",
    }
}

string_enum! {
    AttachmentStatus {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
    }
}

string_enum! {
    /// What happens when an instance is shut down from inside the operating system.
    ShutdownBehavior {
        Stop => "stop",
        Terminate => "terminate",
    }
}

/// The current state of an instance.
///
/// The low byte of `code` carries the state: 0 pending, 16 running,
/// 32 shutting-down, 48 terminated, 64 stopping, 80 stopped. The high byte is
/// for internal use and should be ignored.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct InstanceState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<InstanceStateName>,
}

/// Describes the monitoring of an instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Monitoring {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MonitoringState>,
}

/// Describes the placement of an instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Placement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// The affinity setting for the instance on a Dedicated Host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    /// The name of the placement group the instance is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Valid only when the placement group strategy is `partition`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    /// `host` is not supported for the `ImportInstance` action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Tenancy>,
    /// Reserved for future use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_resource_group_arn: Option<String>,
}

/// Describes an IAM instance profile.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct IamInstanceProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Describes a parameter used to set up an EBS volume in a block device mapping.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct EbsInstanceBlockDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttachmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// Describes a block device mapping of a running instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct InstanceBlockDeviceMapping {
    /// The device name, e.g. `/dev/sdh` or `xvdh`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs: Option<EbsInstanceBlockDevice>,
}

/// Describes a network interface attached to an instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct InstanceNetworkInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupIdentifier>>,
    /// `interface`, `efa` or `trunk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NetworkInterfaceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

list_setters!(InstanceNetworkInterfaceBuilder {
    groups, set_groups: GroupIdentifier;
});

/// The CPU options of an instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CpuOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads_per_core: Option<i32>,
}

/// Whether the instance is enabled for hibernation.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct HibernationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

/// Describes an instance.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    /// The AMI launch index, used to find this instance within the launch group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ami_launch_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<Monitoring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// `Windows` for Windows instances, otherwise unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformValues>,
    /// Only available in the VPC the instance runs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<ProductCode>>,
    /// Empty until the instance reaches the `running` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<InstanceState>,
    /// The reason for the most recent state transition. May be an empty string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<ArchitectureValues>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<InstanceBlockDeviceMapping>>,
    /// The idempotency token supplied when the instance was launched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ena_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<HypervisorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfile>,
    /// Set for Spot and Scheduled Instances only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_lifecycle: Option<InstanceLifecycleType>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<InstanceNetworkInterface>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    /// The device name of the root device volume, e.g. `/dev/sda1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_device_type: Option<DeviceType>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<GroupIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_instance_request_id: Option<String>,
    /// `simple` when enhanced networking with the Intel 82599 VF is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sriov_net_support: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualization_type: Option<VirtualizationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<CpuOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hibernation_options: Option<HibernationOptions>,
}

list_setters!(InstanceBuilder {
    product_codes, set_product_codes: ProductCode;
    block_device_mappings, set_block_device_mappings: InstanceBlockDeviceMapping;
    network_interfaces, set_network_interfaces: InstanceNetworkInterface;
    security_groups, set_security_groups: GroupIdentifier;
    tags, set_tags: Tag;
});

/// Describes a launch request for one or more instances.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    /// Not supported for instances in a VPC.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupIdentifier>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Instance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// The requester that launched the instances on your behalf, e.g. Auto Scaling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
}

list_setters!(ReservationBuilder {
    groups, set_groups: GroupIdentifier;
    instances, set_instances: Instance;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesRequest {
    /// Filters such as `instance-state-name`, `tag:<key>` or `vpc-id`.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Defaults to all instances.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// 5 to 1000. Cannot be combined with `instance_ids`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeInstancesRequestBuilder {
    filters, set_filters: Filter;
    instance_ids, set_instance_ids: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeInstancesResponseBuilder {
    reservations, set_reservations: Reservation;
});

impl Reservation {
    /// The instances of this reservation, leaving the reservation itself behind.
    pub fn into_instances(self) -> Vec<Instance> {
        self.instances.unwrap_or_default()
    }
}

/// Enables detailed monitoring for the launched instances.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesMonitoringEnabled {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// An IAM instance profile, by ARN or by name.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct IamInstanceProfileSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CpuOptionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_count: Option<i32>,
    /// `1` disables multithreading. Defaults to `2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads_per_core: Option<i32>,
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct HibernationOptionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

/// Launches the specified number of instances using an AMI.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    /// Required unless a launch template supplies the AMI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Defaults to `m1.small`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// The maximum number of instances to launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i32>,
    /// The minimum number of instances to launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<RunInstancesMonitoringEnabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    /// Default VPC only; use `security_group_ids` elsewhere.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// Base64-encoded user data, at most 16 KB before encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Reserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Up to 64 ASCII characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfileSpecification>,
    /// Defaults to `stop`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_initiated_shutdown_behavior: Option<ShutdownBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<CpuOptionsRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hibernation_options: Option<HibernationOptionsRequest>,
}

list_setters!(RunInstancesRequestBuilder {
    block_device_mappings, set_block_device_mappings: BlockDeviceMapping;
    security_group_ids, set_security_group_ids: String;
    security_groups, set_security_groups: String;
    tag_specifications, set_tag_specifications: TagSpecification;
});

dry_run_request!(
    DescribeInstancesRequest => "DescribeInstances",
    RunInstancesRequest => "RunInstances",
);

paginated_request!(DescribeInstancesRequest);

paginated_response!(DescribeInstancesResponse => reservations: Reservation);

impl_display!(
    InstanceState,
    Monitoring,
    Placement,
    IamInstanceProfile,
    EbsInstanceBlockDevice,
    InstanceBlockDeviceMapping,
    InstanceNetworkInterface,
    CpuOptions,
    HibernationOptions,
    Instance,
    Reservation,
    DescribeInstancesRequest,
    DescribeInstancesResponse,
    RunInstancesMonitoringEnabled,
    IamInstanceProfileSpecification,
    CpuOptionsRequest,
    HibernationOptionsRequest,
    RunInstancesRequest,
);
