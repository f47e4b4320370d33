//! Conversions between the SDK's shapes and the `ec2_types` model.
//!
//! Neither side is defined here, so the orphan rule rules out `From`; the
//! conversions go through the local `FromSdk` / `IntoSdk` traits instead.
//! Enums cross over by wire string, which keeps values unknown to either side.

use aws_sdk_ec2::operation::{
    describe_capacity_reservations::DescribeCapacityReservationsOutput,
    describe_customer_gateways::DescribeCustomerGatewaysOutput,
    describe_images::DescribeImagesOutput, describe_instance_types::DescribeInstanceTypesOutput,
    describe_instances::DescribeInstancesOutput,
    describe_network_interfaces::DescribeNetworkInterfacesOutput,
    describe_reserved_instances::DescribeReservedInstancesOutput,
    describe_route_tables::DescribeRouteTablesOutput,
    describe_security_groups::DescribeSecurityGroupsOutput,
    describe_transit_gateway_vpc_attachments::DescribeTransitGatewayVpcAttachmentsOutput,
    describe_vpc_endpoint_connection_notifications::DescribeVpcEndpointConnectionNotificationsOutput,
};
use aws_sdk_ec2::primitives::DateTime as SdkDateTime;
use aws_sdk_ec2::types as sdk;
use chrono::{DateTime, Utc};
use ec2_types::{
    capacity_reservation, common, customer_gateway, image, instance, instance_type,
    network_interface, reserved_instances, route_table, security_group, transit_gateway,
    vpc_endpoint,
};
use log::warn;

/// Builds a model value from the SDK's shape.
pub trait FromSdk<T> {
    fn from_sdk(value: T) -> Self;
}

/// Turns a model value into the SDK's shape.
pub trait IntoSdk<T> {
    fn into_sdk(self) -> T;
}

pub(crate) fn nested<S, T: FromSdk<S>>(value: Option<S>) -> Option<T> {
    value.map(T::from_sdk)
}

pub(crate) fn list<S, T: FromSdk<S>>(values: Option<Vec<S>>) -> Option<Vec<T>> {
    values.map(|v| v.into_iter().map(T::from_sdk).collect())
}

pub(crate) fn sdk_nested<M: IntoSdk<S>, S>(value: Option<M>) -> Option<S> {
    value.map(IntoSdk::into_sdk)
}

pub(crate) fn sdk_list<M: IntoSdk<S>, S>(values: Option<Vec<M>>) -> Option<Vec<S>> {
    values.map(|v| v.into_iter().map(IntoSdk::into_sdk).collect())
}

/// Maps an enum to another through its wire string.
pub(crate) fn convert_enum<A, B>(value: Option<A>) -> Option<B>
where
    A: AsRef<str>,
    B: for<'a> From<&'a str>,
{
    value.map(|v| B::from(v.as_ref()))
}

pub(crate) fn convert_enums<A, B>(values: Option<Vec<A>>) -> Option<Vec<B>>
where
    A: AsRef<str>,
    B: for<'a> From<&'a str>,
{
    values.map(|v| v.iter().map(|e| B::from(e.as_ref())).collect())
}

pub(crate) fn enum_string<A: AsRef<str>>(value: Option<A>) -> Option<String> {
    value.map(|v| v.as_ref().to_string())
}

/// Out-of-range timestamps are logged and dropped.
pub(crate) fn timestamp(value: Option<SdkDateTime>) -> Option<DateTime<Utc>> {
    let t = value?;
    let converted = DateTime::from_timestamp(t.secs(), t.subsec_nanos());
    if converted.is_none() {
        warn!(
            "Dropping timestamp out of range: {}s {}ns",
            t.secs(),
            t.subsec_nanos()
        );
    }
    converted
}

pub(crate) fn sdk_timestamp(value: Option<DateTime<Utc>>) -> Option<SdkDateTime> {
    value.map(|t| SdkDateTime::from_secs_and_nanos(t.timestamp(), t.timestamp_subsec_nanos()))
}

// Shared shapes

impl FromSdk<sdk::Tag> for common::Tag {
    fn from_sdk(value: sdk::Tag) -> Self {
        common::Tag {
            key: value.key,
            value: value.value,
        }
    }
}

impl FromSdk<sdk::GroupIdentifier> for common::GroupIdentifier {
    fn from_sdk(value: sdk::GroupIdentifier) -> Self {
        common::GroupIdentifier {
            group_id: value.group_id,
            group_name: value.group_name,
        }
    }
}

impl FromSdk<sdk::StateReason> for common::StateReason {
    fn from_sdk(value: sdk::StateReason) -> Self {
        common::StateReason {
            code: value.code,
            message: value.message,
        }
    }
}

impl FromSdk<sdk::ProductCode> for common::ProductCode {
    fn from_sdk(value: sdk::ProductCode) -> Self {
        common::ProductCode {
            product_code_id: value.product_code_id,
            product_code_type: convert_enum(value.product_code_type),
        }
    }
}

impl IntoSdk<sdk::Tag> for common::Tag {
    fn into_sdk(self) -> sdk::Tag {
        sdk::Tag::builder()
            .set_key(self.key)
            .set_value(self.value)
            .build()
    }
}

impl IntoSdk<sdk::TagSpecification> for common::TagSpecification {
    fn into_sdk(self) -> sdk::TagSpecification {
        sdk::TagSpecification::builder()
            .set_resource_type(convert_enum(self.resource_type))
            .set_tags(sdk_list(self.tags))
            .build()
    }
}

impl IntoSdk<sdk::Filter> for common::Filter {
    fn into_sdk(self) -> sdk::Filter {
        sdk::Filter::builder()
            .set_name(self.name)
            .set_values(self.values)
            .build()
    }
}

impl IntoSdk<sdk::AttributeValue> for common::AttributeValue {
    fn into_sdk(self) -> sdk::AttributeValue {
        sdk::AttributeValue::builder().set_value(self.value).build()
    }
}

impl IntoSdk<sdk::AttributeBooleanValue> for common::AttributeBooleanValue {
    fn into_sdk(self) -> sdk::AttributeBooleanValue {
        sdk::AttributeBooleanValue::builder()
            .set_value(self.value)
            .build()
    }
}

// Instances

impl FromSdk<sdk::InstanceState> for instance::InstanceState {
    fn from_sdk(value: sdk::InstanceState) -> Self {
        instance::InstanceState {
            code: value.code,
            name: convert_enum(value.name),
        }
    }
}

impl FromSdk<sdk::Monitoring> for instance::Monitoring {
    fn from_sdk(value: sdk::Monitoring) -> Self {
        instance::Monitoring {
            state: convert_enum(value.state),
        }
    }
}

impl FromSdk<sdk::Placement> for instance::Placement {
    fn from_sdk(value: sdk::Placement) -> Self {
        instance::Placement {
            availability_zone: value.availability_zone,
            affinity: value.affinity,
            group_name: value.group_name,
            partition_number: value.partition_number,
            host_id: value.host_id,
            tenancy: convert_enum(value.tenancy),
            spread_domain: value.spread_domain,
            host_resource_group_arn: value.host_resource_group_arn,
        }
    }
}

impl IntoSdk<sdk::Placement> for instance::Placement {
    fn into_sdk(self) -> sdk::Placement {
        sdk::Placement::builder()
            .set_availability_zone(self.availability_zone)
            .set_affinity(self.affinity)
            .set_group_name(self.group_name)
            .set_partition_number(self.partition_number)
            .set_host_id(self.host_id)
            .set_tenancy(convert_enum(self.tenancy))
            .set_spread_domain(self.spread_domain)
            .set_host_resource_group_arn(self.host_resource_group_arn)
            .build()
    }
}

impl FromSdk<sdk::IamInstanceProfile> for instance::IamInstanceProfile {
    fn from_sdk(value: sdk::IamInstanceProfile) -> Self {
        instance::IamInstanceProfile {
            arn: value.arn,
            id: value.id,
        }
    }
}

impl FromSdk<sdk::EbsInstanceBlockDevice> for instance::EbsInstanceBlockDevice {
    fn from_sdk(value: sdk::EbsInstanceBlockDevice) -> Self {
        instance::EbsInstanceBlockDevice {
            attach_time: timestamp(value.attach_time),
            delete_on_termination: value.delete_on_termination,
            status: convert_enum(value.status),
            volume_id: value.volume_id,
        }
    }
}

impl FromSdk<sdk::InstanceBlockDeviceMapping> for instance::InstanceBlockDeviceMapping {
    fn from_sdk(value: sdk::InstanceBlockDeviceMapping) -> Self {
        instance::InstanceBlockDeviceMapping {
            device_name: value.device_name,
            ebs: nested(value.ebs),
        }
    }
}

impl FromSdk<sdk::InstanceNetworkInterface> for instance::InstanceNetworkInterface {
    fn from_sdk(value: sdk::InstanceNetworkInterface) -> Self {
        instance::InstanceNetworkInterface {
            description: value.description,
            groups: list(value.groups),
            interface_type: value.interface_type,
            mac_address: value.mac_address,
            network_interface_id: value.network_interface_id,
            owner_id: value.owner_id,
            private_dns_name: value.private_dns_name,
            private_ip_address: value.private_ip_address,
            source_dest_check: value.source_dest_check,
            status: convert_enum(value.status),
            subnet_id: value.subnet_id,
            vpc_id: value.vpc_id,
        }
    }
}

impl FromSdk<sdk::CpuOptions> for instance::CpuOptions {
    fn from_sdk(value: sdk::CpuOptions) -> Self {
        instance::CpuOptions {
            core_count: value.core_count,
            threads_per_core: value.threads_per_core,
        }
    }
}

impl FromSdk<sdk::HibernationOptions> for instance::HibernationOptions {
    fn from_sdk(value: sdk::HibernationOptions) -> Self {
        instance::HibernationOptions {
            configured: value.configured,
        }
    }
}

impl FromSdk<sdk::Instance> for instance::Instance {
    fn from_sdk(value: sdk::Instance) -> Self {
        instance::Instance {
            ami_launch_index: value.ami_launch_index,
            image_id: value.image_id,
            instance_id: value.instance_id,
            instance_type: enum_string(value.instance_type),
            kernel_id: value.kernel_id,
            key_name: value.key_name,
            launch_time: timestamp(value.launch_time),
            monitoring: nested(value.monitoring),
            placement: nested(value.placement),
            platform: convert_enum(value.platform),
            private_dns_name: value.private_dns_name,
            private_ip_address: value.private_ip_address,
            product_codes: list(value.product_codes),
            public_dns_name: value.public_dns_name,
            public_ip_address: value.public_ip_address,
            ramdisk_id: value.ramdisk_id,
            state: nested(value.state),
            state_transition_reason: value.state_transition_reason,
            subnet_id: value.subnet_id,
            vpc_id: value.vpc_id,
            architecture: convert_enum(value.architecture),
            block_device_mappings: list(value.block_device_mappings),
            client_token: value.client_token,
            ebs_optimized: value.ebs_optimized,
            ena_support: value.ena_support,
            hypervisor: convert_enum(value.hypervisor),
            iam_instance_profile: nested(value.iam_instance_profile),
            instance_lifecycle: convert_enum(value.instance_lifecycle),
            network_interfaces: list(value.network_interfaces),
            outpost_arn: value.outpost_arn,
            root_device_name: value.root_device_name,
            root_device_type: convert_enum(value.root_device_type),
            security_groups: list(value.security_groups),
            source_dest_check: value.source_dest_check,
            spot_instance_request_id: value.spot_instance_request_id,
            sriov_net_support: value.sriov_net_support,
            state_reason: nested(value.state_reason),
            tags: list(value.tags),
            virtualization_type: convert_enum(value.virtualization_type),
            cpu_options: nested(value.cpu_options),
            capacity_reservation_id: value.capacity_reservation_id,
            hibernation_options: nested(value.hibernation_options),
        }
    }
}

impl FromSdk<sdk::Reservation> for instance::Reservation {
    fn from_sdk(value: sdk::Reservation) -> Self {
        instance::Reservation {
            groups: list(value.groups),
            instances: list(value.instances),
            owner_id: value.owner_id,
            requester_id: value.requester_id,
            reservation_id: value.reservation_id,
        }
    }
}

impl FromSdk<DescribeInstancesOutput> for instance::DescribeInstancesResponse {
    fn from_sdk(value: DescribeInstancesOutput) -> Self {
        instance::DescribeInstancesResponse {
            reservations: list(value.reservations),
            next_token: value.next_token,
        }
    }
}

impl IntoSdk<sdk::RunInstancesMonitoringEnabled> for instance::RunInstancesMonitoringEnabled {
    fn into_sdk(self) -> sdk::RunInstancesMonitoringEnabled {
        sdk::RunInstancesMonitoringEnabled::builder()
            .set_enabled(self.enabled)
            .build()
    }
}

impl IntoSdk<sdk::IamInstanceProfileSpecification> for instance::IamInstanceProfileSpecification {
    fn into_sdk(self) -> sdk::IamInstanceProfileSpecification {
        sdk::IamInstanceProfileSpecification::builder()
            .set_arn(self.arn)
            .set_name(self.name)
            .build()
    }
}

impl IntoSdk<sdk::CpuOptionsRequest> for instance::CpuOptionsRequest {
    fn into_sdk(self) -> sdk::CpuOptionsRequest {
        sdk::CpuOptionsRequest::builder()
            .set_core_count(self.core_count)
            .set_threads_per_core(self.threads_per_core)
            .build()
    }
}

impl IntoSdk<sdk::HibernationOptionsRequest> for instance::HibernationOptionsRequest {
    fn into_sdk(self) -> sdk::HibernationOptionsRequest {
        sdk::HibernationOptionsRequest::builder()
            .set_configured(self.configured)
            .build()
    }
}

// Images

impl FromSdk<sdk::EbsBlockDevice> for image::EbsBlockDevice {
    fn from_sdk(value: sdk::EbsBlockDevice) -> Self {
        image::EbsBlockDevice {
            delete_on_termination: value.delete_on_termination,
            iops: value.iops,
            snapshot_id: value.snapshot_id,
            volume_size: value.volume_size,
            volume_type: convert_enum(value.volume_type),
            kms_key_id: value.kms_key_id,
            throughput: value.throughput,
            outpost_arn: value.outpost_arn,
            encrypted: value.encrypted,
        }
    }
}

impl IntoSdk<sdk::EbsBlockDevice> for image::EbsBlockDevice {
    fn into_sdk(self) -> sdk::EbsBlockDevice {
        sdk::EbsBlockDevice::builder()
            .set_delete_on_termination(self.delete_on_termination)
            .set_iops(self.iops)
            .set_snapshot_id(self.snapshot_id)
            .set_volume_size(self.volume_size)
            .set_volume_type(convert_enum(self.volume_type))
            .set_kms_key_id(self.kms_key_id)
            .set_throughput(self.throughput)
            .set_outpost_arn(self.outpost_arn)
            .set_encrypted(self.encrypted)
            .build()
    }
}

impl FromSdk<sdk::BlockDeviceMapping> for image::BlockDeviceMapping {
    fn from_sdk(value: sdk::BlockDeviceMapping) -> Self {
        image::BlockDeviceMapping {
            device_name: value.device_name,
            virtual_name: value.virtual_name,
            ebs: nested(value.ebs),
            no_device: value.no_device,
        }
    }
}

impl IntoSdk<sdk::BlockDeviceMapping> for image::BlockDeviceMapping {
    fn into_sdk(self) -> sdk::BlockDeviceMapping {
        sdk::BlockDeviceMapping::builder()
            .set_device_name(self.device_name)
            .set_virtual_name(self.virtual_name)
            .set_ebs(sdk_nested(self.ebs))
            .set_no_device(self.no_device)
            .build()
    }
}

impl FromSdk<sdk::Image> for image::Image {
    fn from_sdk(value: sdk::Image) -> Self {
        image::Image {
            architecture: convert_enum(value.architecture),
            creation_date: value.creation_date,
            image_id: value.image_id,
            image_location: value.image_location,
            image_type: convert_enum(value.image_type),
            public: value.public,
            kernel_id: value.kernel_id,
            owner_id: value.owner_id,
            platform: convert_enum(value.platform),
            platform_details: value.platform_details,
            usage_operation: value.usage_operation,
            product_codes: list(value.product_codes),
            ramdisk_id: value.ramdisk_id,
            state: convert_enum(value.state),
            block_device_mappings: list(value.block_device_mappings),
            description: value.description,
            ena_support: value.ena_support,
            hypervisor: convert_enum(value.hypervisor),
            image_owner_alias: value.image_owner_alias,
            name: value.name,
            root_device_name: value.root_device_name,
            root_device_type: convert_enum(value.root_device_type),
            sriov_net_support: value.sriov_net_support,
            state_reason: nested(value.state_reason),
            tags: list(value.tags),
            virtualization_type: convert_enum(value.virtualization_type),
        }
    }
}

impl FromSdk<DescribeImagesOutput> for image::DescribeImagesResponse {
    fn from_sdk(value: DescribeImagesOutput) -> Self {
        image::DescribeImagesResponse {
            images: list(value.images),
            next_token: value.next_token,
        }
    }
}

// Capacity reservations

impl FromSdk<sdk::CapacityReservation> for capacity_reservation::CapacityReservation {
    fn from_sdk(value: sdk::CapacityReservation) -> Self {
        capacity_reservation::CapacityReservation {
            capacity_reservation_id: value.capacity_reservation_id,
            owner_id: value.owner_id,
            capacity_reservation_arn: value.capacity_reservation_arn,
            availability_zone_id: value.availability_zone_id,
            instance_type: value.instance_type,
            instance_platform: convert_enum(value.instance_platform),
            availability_zone: value.availability_zone,
            tenancy: convert_enum(value.tenancy),
            total_instance_count: value.total_instance_count,
            available_instance_count: value.available_instance_count,
            ebs_optimized: value.ebs_optimized,
            ephemeral_storage: value.ephemeral_storage,
            state: convert_enum(value.state),
            end_date: timestamp(value.end_date),
            end_date_type: convert_enum(value.end_date_type),
            instance_match_criteria: convert_enum(value.instance_match_criteria),
            create_date: timestamp(value.create_date),
            tags: list(value.tags),
        }
    }
}

impl FromSdk<DescribeCapacityReservationsOutput>
    for capacity_reservation::DescribeCapacityReservationsResponse
{
    fn from_sdk(value: DescribeCapacityReservationsOutput) -> Self {
        capacity_reservation::DescribeCapacityReservationsResponse {
            next_token: value.next_token,
            capacity_reservations: list(value.capacity_reservations),
        }
    }
}

// Instance types

impl FromSdk<sdk::ProcessorInfo> for instance_type::ProcessorInfo {
    fn from_sdk(value: sdk::ProcessorInfo) -> Self {
        instance_type::ProcessorInfo {
            supported_architectures: convert_enums(value.supported_architectures),
            sustained_clock_speed_in_ghz: value.sustained_clock_speed_in_ghz,
        }
    }
}

impl FromSdk<sdk::VCpuInfo> for instance_type::VCpuInfo {
    fn from_sdk(value: sdk::VCpuInfo) -> Self {
        instance_type::VCpuInfo {
            default_v_cpus: value.default_v_cpus,
            default_cores: value.default_cores,
            default_threads_per_core: value.default_threads_per_core,
            valid_cores: value.valid_cores,
            valid_threads_per_core: value.valid_threads_per_core,
        }
    }
}

impl FromSdk<sdk::MemoryInfo> for instance_type::MemoryInfo {
    fn from_sdk(value: sdk::MemoryInfo) -> Self {
        instance_type::MemoryInfo {
            size_in_mib: value.size_in_mib,
        }
    }
}

impl FromSdk<sdk::InstanceTypeInfo> for instance_type::InstanceTypeInfo {
    fn from_sdk(value: sdk::InstanceTypeInfo) -> Self {
        instance_type::InstanceTypeInfo {
            instance_type: enum_string(value.instance_type),
            current_generation: value.current_generation,
            free_tier_eligible: value.free_tier_eligible,
            supported_usage_classes: convert_enums(value.supported_usage_classes),
            supported_root_device_types: convert_enums(value.supported_root_device_types),
            supported_virtualization_types: convert_enums(value.supported_virtualization_types),
            bare_metal: value.bare_metal,
            hypervisor: convert_enum(value.hypervisor),
            processor_info: nested(value.processor_info),
            v_cpu_info: nested(value.v_cpu_info),
            memory_info: nested(value.memory_info),
            instance_storage_supported: value.instance_storage_supported,
            hibernation_supported: value.hibernation_supported,
            burstable_performance_supported: value.burstable_performance_supported,
            dedicated_hosts_supported: value.dedicated_hosts_supported,
            auto_recovery_supported: value.auto_recovery_supported,
        }
    }
}

impl FromSdk<DescribeInstanceTypesOutput> for instance_type::DescribeInstanceTypesResponse {
    fn from_sdk(value: DescribeInstanceTypesOutput) -> Self {
        instance_type::DescribeInstanceTypesResponse {
            instance_types: list(value.instance_types),
            next_token: value.next_token,
        }
    }
}

// Reserved instances

impl FromSdk<sdk::RecurringCharge> for reserved_instances::RecurringCharge {
    fn from_sdk(value: sdk::RecurringCharge) -> Self {
        reserved_instances::RecurringCharge {
            amount: value.amount,
            frequency: convert_enum(value.frequency),
        }
    }
}

impl FromSdk<sdk::ReservedInstances> for reserved_instances::ReservedInstances {
    fn from_sdk(value: sdk::ReservedInstances) -> Self {
        reserved_instances::ReservedInstances {
            availability_zone: value.availability_zone,
            duration: value.duration,
            end: timestamp(value.end),
            fixed_price: value.fixed_price,
            instance_count: value.instance_count,
            instance_type: enum_string(value.instance_type),
            product_description: enum_string(value.product_description),
            reserved_instances_id: value.reserved_instances_id,
            start: timestamp(value.start),
            state: convert_enum(value.state),
            usage_price: value.usage_price,
            currency_code: convert_enum(value.currency_code),
            instance_tenancy: convert_enum(value.instance_tenancy),
            offering_class: convert_enum(value.offering_class),
            offering_type: convert_enum(value.offering_type),
            recurring_charges: list(value.recurring_charges),
            scope: convert_enum(value.scope),
            tags: list(value.tags),
        }
    }
}

impl FromSdk<DescribeReservedInstancesOutput>
    for reserved_instances::DescribeReservedInstancesResponse
{
    fn from_sdk(value: DescribeReservedInstancesOutput) -> Self {
        reserved_instances::DescribeReservedInstancesResponse {
            reserved_instances: list(value.reserved_instances),
        }
    }
}

// Security groups

impl FromSdk<sdk::IpRange> for security_group::IpRange {
    fn from_sdk(value: sdk::IpRange) -> Self {
        security_group::IpRange {
            cidr_ip: value.cidr_ip,
            description: value.description,
        }
    }
}

impl IntoSdk<sdk::IpRange> for security_group::IpRange {
    fn into_sdk(self) -> sdk::IpRange {
        sdk::IpRange::builder()
            .set_cidr_ip(self.cidr_ip)
            .set_description(self.description)
            .build()
    }
}

impl FromSdk<sdk::Ipv6Range> for security_group::Ipv6Range {
    fn from_sdk(value: sdk::Ipv6Range) -> Self {
        security_group::Ipv6Range {
            cidr_ipv6: value.cidr_ipv6,
            description: value.description,
        }
    }
}

impl IntoSdk<sdk::Ipv6Range> for security_group::Ipv6Range {
    fn into_sdk(self) -> sdk::Ipv6Range {
        sdk::Ipv6Range::builder()
            .set_cidr_ipv6(self.cidr_ipv6)
            .set_description(self.description)
            .build()
    }
}

impl FromSdk<sdk::PrefixListId> for security_group::PrefixListId {
    fn from_sdk(value: sdk::PrefixListId) -> Self {
        security_group::PrefixListId {
            description: value.description,
            prefix_list_id: value.prefix_list_id,
        }
    }
}

impl IntoSdk<sdk::PrefixListId> for security_group::PrefixListId {
    fn into_sdk(self) -> sdk::PrefixListId {
        sdk::PrefixListId::builder()
            .set_description(self.description)
            .set_prefix_list_id(self.prefix_list_id)
            .build()
    }
}

impl FromSdk<sdk::UserIdGroupPair> for security_group::UserIdGroupPair {
    fn from_sdk(value: sdk::UserIdGroupPair) -> Self {
        security_group::UserIdGroupPair {
            description: value.description,
            group_id: value.group_id,
            group_name: value.group_name,
            peering_status: value.peering_status,
            user_id: value.user_id,
            vpc_id: value.vpc_id,
            vpc_peering_connection_id: value.vpc_peering_connection_id,
        }
    }
}

impl IntoSdk<sdk::UserIdGroupPair> for security_group::UserIdGroupPair {
    fn into_sdk(self) -> sdk::UserIdGroupPair {
        sdk::UserIdGroupPair::builder()
            .set_description(self.description)
            .set_group_id(self.group_id)
            .set_group_name(self.group_name)
            .set_peering_status(self.peering_status)
            .set_user_id(self.user_id)
            .set_vpc_id(self.vpc_id)
            .set_vpc_peering_connection_id(self.vpc_peering_connection_id)
            .build()
    }
}

impl FromSdk<sdk::IpPermission> for security_group::IpPermission {
    fn from_sdk(value: sdk::IpPermission) -> Self {
        security_group::IpPermission {
            from_port: value.from_port,
            ip_protocol: value.ip_protocol,
            ip_ranges: list(value.ip_ranges),
            ipv6_ranges: list(value.ipv6_ranges),
            prefix_list_ids: list(value.prefix_list_ids),
            to_port: value.to_port,
            user_id_group_pairs: list(value.user_id_group_pairs),
        }
    }
}

impl IntoSdk<sdk::IpPermission> for security_group::IpPermission {
    fn into_sdk(self) -> sdk::IpPermission {
        sdk::IpPermission::builder()
            .set_from_port(self.from_port)
            .set_ip_protocol(self.ip_protocol)
            .set_ip_ranges(sdk_list(self.ip_ranges))
            .set_ipv6_ranges(sdk_list(self.ipv6_ranges))
            .set_prefix_list_ids(sdk_list(self.prefix_list_ids))
            .set_to_port(self.to_port)
            .set_user_id_group_pairs(sdk_list(self.user_id_group_pairs))
            .build()
    }
}

impl FromSdk<sdk::SecurityGroup> for security_group::SecurityGroup {
    fn from_sdk(value: sdk::SecurityGroup) -> Self {
        security_group::SecurityGroup {
            description: value.description,
            group_name: value.group_name,
            ip_permissions: list(value.ip_permissions),
            owner_id: value.owner_id,
            group_id: value.group_id,
            ip_permissions_egress: list(value.ip_permissions_egress),
            tags: list(value.tags),
            vpc_id: value.vpc_id,
        }
    }
}

impl FromSdk<DescribeSecurityGroupsOutput> for security_group::DescribeSecurityGroupsResponse {
    fn from_sdk(value: DescribeSecurityGroupsOutput) -> Self {
        security_group::DescribeSecurityGroupsResponse {
            security_groups: list(value.security_groups),
            next_token: value.next_token,
        }
    }
}

// Network interfaces

impl FromSdk<sdk::NetworkInterfaceAttachment> for network_interface::NetworkInterfaceAttachment {
    fn from_sdk(value: sdk::NetworkInterfaceAttachment) -> Self {
        network_interface::NetworkInterfaceAttachment {
            attach_time: timestamp(value.attach_time),
            attachment_id: value.attachment_id,
            delete_on_termination: value.delete_on_termination,
            device_index: value.device_index,
            network_card_index: value.network_card_index,
            instance_id: value.instance_id,
            instance_owner_id: value.instance_owner_id,
            status: convert_enum(value.status),
        }
    }
}

impl FromSdk<sdk::NetworkInterfacePrivateIpAddress>
    for network_interface::NetworkInterfacePrivateIpAddress
{
    fn from_sdk(value: sdk::NetworkInterfacePrivateIpAddress) -> Self {
        network_interface::NetworkInterfacePrivateIpAddress {
            primary: value.primary,
            private_dns_name: value.private_dns_name,
            private_ip_address: value.private_ip_address,
        }
    }
}

impl FromSdk<sdk::NetworkInterface> for network_interface::NetworkInterface {
    fn from_sdk(value: sdk::NetworkInterface) -> Self {
        network_interface::NetworkInterface {
            attachment: nested(value.attachment),
            availability_zone: value.availability_zone,
            description: value.description,
            groups: list(value.groups),
            interface_type: convert_enum(value.interface_type),
            mac_address: value.mac_address,
            network_interface_id: value.network_interface_id,
            outpost_arn: value.outpost_arn,
            owner_id: value.owner_id,
            private_dns_name: value.private_dns_name,
            private_ip_address: value.private_ip_address,
            private_ip_addresses: list(value.private_ip_addresses),
            requester_id: value.requester_id,
            requester_managed: value.requester_managed,
            source_dest_check: value.source_dest_check,
            status: convert_enum(value.status),
            subnet_id: value.subnet_id,
            tag_set: list(value.tag_set),
            vpc_id: value.vpc_id,
        }
    }
}

impl FromSdk<DescribeNetworkInterfacesOutput>
    for network_interface::DescribeNetworkInterfacesResponse
{
    fn from_sdk(value: DescribeNetworkInterfacesOutput) -> Self {
        network_interface::DescribeNetworkInterfacesResponse {
            network_interfaces: list(value.network_interfaces),
            next_token: value.next_token,
        }
    }
}

impl IntoSdk<sdk::NetworkInterfaceAttachmentChanges>
    for network_interface::NetworkInterfaceAttachmentChanges
{
    fn into_sdk(self) -> sdk::NetworkInterfaceAttachmentChanges {
        sdk::NetworkInterfaceAttachmentChanges::builder()
            .set_attachment_id(self.attachment_id)
            .set_delete_on_termination(self.delete_on_termination)
            .build()
    }
}

// Route tables

impl FromSdk<sdk::Route> for route_table::Route {
    fn from_sdk(value: sdk::Route) -> Self {
        route_table::Route {
            destination_cidr_block: value.destination_cidr_block,
            destination_ipv6_cidr_block: value.destination_ipv6_cidr_block,
            destination_prefix_list_id: value.destination_prefix_list_id,
            egress_only_internet_gateway_id: value.egress_only_internet_gateway_id,
            gateway_id: value.gateway_id,
            instance_id: value.instance_id,
            instance_owner_id: value.instance_owner_id,
            nat_gateway_id: value.nat_gateway_id,
            transit_gateway_id: value.transit_gateway_id,
            local_gateway_id: value.local_gateway_id,
            network_interface_id: value.network_interface_id,
            origin: convert_enum(value.origin),
            state: convert_enum(value.state),
            vpc_peering_connection_id: value.vpc_peering_connection_id,
        }
    }
}

impl FromSdk<sdk::RouteTableAssociation> for route_table::RouteTableAssociation {
    fn from_sdk(value: sdk::RouteTableAssociation) -> Self {
        route_table::RouteTableAssociation {
            main: value.main,
            route_table_association_id: value.route_table_association_id,
            route_table_id: value.route_table_id,
            subnet_id: value.subnet_id,
            gateway_id: value.gateway_id,
        }
    }
}

impl FromSdk<sdk::RouteTable> for route_table::RouteTable {
    fn from_sdk(value: sdk::RouteTable) -> Self {
        route_table::RouteTable {
            associations: list(value.associations),
            route_table_id: value.route_table_id,
            routes: list(value.routes),
            tags: list(value.tags),
            vpc_id: value.vpc_id,
            owner_id: value.owner_id,
        }
    }
}

impl FromSdk<DescribeRouteTablesOutput> for route_table::DescribeRouteTablesResponse {
    fn from_sdk(value: DescribeRouteTablesOutput) -> Self {
        route_table::DescribeRouteTablesResponse {
            route_tables: list(value.route_tables),
            next_token: value.next_token,
        }
    }
}

// Customer gateways

impl FromSdk<sdk::CustomerGateway> for customer_gateway::CustomerGateway {
    fn from_sdk(value: sdk::CustomerGateway) -> Self {
        customer_gateway::CustomerGateway {
            bgp_asn: value.bgp_asn,
            customer_gateway_id: value.customer_gateway_id,
            ip_address: value.ip_address,
            certificate_arn: value.certificate_arn,
            state: value.state,
            gateway_type: convert_enum(value.r#type),
            device_name: value.device_name,
            tags: list(value.tags),
        }
    }
}

impl FromSdk<DescribeCustomerGatewaysOutput> for customer_gateway::DescribeCustomerGatewaysResponse {
    fn from_sdk(value: DescribeCustomerGatewaysOutput) -> Self {
        customer_gateway::DescribeCustomerGatewaysResponse {
            customer_gateways: list(value.customer_gateways),
        }
    }
}

// VPC endpoint notifications

impl FromSdk<sdk::ConnectionNotification> for vpc_endpoint::ConnectionNotification {
    fn from_sdk(value: sdk::ConnectionNotification) -> Self {
        vpc_endpoint::ConnectionNotification {
            connection_notification_id: value.connection_notification_id,
            service_id: value.service_id,
            vpc_endpoint_id: value.vpc_endpoint_id,
            connection_notification_type: convert_enum(value.connection_notification_type),
            connection_notification_arn: value.connection_notification_arn,
            connection_events: value.connection_events,
            connection_notification_state: convert_enum(value.connection_notification_state),
        }
    }
}

impl FromSdk<DescribeVpcEndpointConnectionNotificationsOutput>
    for vpc_endpoint::DescribeVpcEndpointConnectionNotificationsResponse
{
    fn from_sdk(value: DescribeVpcEndpointConnectionNotificationsOutput) -> Self {
        vpc_endpoint::DescribeVpcEndpointConnectionNotificationsResponse {
            connection_notification_set: list(value.connection_notification_set),
            next_token: value.next_token,
        }
    }
}

// Transit gateway attachments

impl FromSdk<sdk::TransitGatewayVpcAttachmentOptions>
    for transit_gateway::TransitGatewayVpcAttachmentOptions
{
    fn from_sdk(value: sdk::TransitGatewayVpcAttachmentOptions) -> Self {
        transit_gateway::TransitGatewayVpcAttachmentOptions {
            dns_support: convert_enum(value.dns_support),
            ipv6_support: convert_enum(value.ipv6_support),
        }
    }
}

impl FromSdk<sdk::TransitGatewayVpcAttachment> for transit_gateway::TransitGatewayVpcAttachment {
    fn from_sdk(value: sdk::TransitGatewayVpcAttachment) -> Self {
        transit_gateway::TransitGatewayVpcAttachment {
            transit_gateway_attachment_id: value.transit_gateway_attachment_id,
            transit_gateway_id: value.transit_gateway_id,
            vpc_id: value.vpc_id,
            vpc_owner_id: value.vpc_owner_id,
            state: convert_enum(value.state),
            subnet_ids: value.subnet_ids,
            creation_time: timestamp(value.creation_time),
            options: nested(value.options),
            tags: list(value.tags),
        }
    }
}

impl FromSdk<DescribeTransitGatewayVpcAttachmentsOutput>
    for transit_gateway::DescribeTransitGatewayVpcAttachmentsResponse
{
    fn from_sdk(value: DescribeTransitGatewayVpcAttachmentsOutput) -> Self {
        transit_gateway::DescribeTransitGatewayVpcAttachmentsResponse {
            transit_gateway_vpc_attachments: list(value.transit_gateway_vpc_attachments),
            next_token: value.next_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::operation::create_capacity_reservation::CreateCapacityReservationInput;
    use ec2_types::capacity_reservation::{
        CapacityReservationInstancePlatform, CapacityReservationState,
        CreateCapacityReservationRequest, EndDateType,
    };
    use ec2_types::common::ResourceType;
    use ec2_types::instance::{AttachmentStatus, InstanceStateName, Tenancy};
    use ec2_types::network_interface::{NetworkInterfaceStatus, NetworkInterfaceType};
    use ec2_types::reserved_instances::{
        OfferingTypeValues, RecurringChargeFrequency, ReservedInstanceState,
    };
    use ec2_types::security_group::{IpPermissionBuilder, IpRange};
    use ec2_types::transit_gateway::{
        DnsSupportValue, Ipv6SupportValue, TransitGatewayAttachmentState,
    };
    use ec2_types::vpc_endpoint::{ConnectionNotificationState, ConnectionNotificationType};
    use ec2_types::PaginatedResponse;

    #[test]
    fn test_instance_from_sdk() {
        let sdk_instance = sdk::Instance::builder()
            .instance_id("i-1")
            .instance_type(sdk::InstanceType::T3Micro)
            .launch_time(SdkDateTime::from_secs(1_600_000_000))
            .state(
                sdk::InstanceState::builder()
                    .code(16)
                    .name(sdk::InstanceStateName::Running)
                    .build(),
            )
            .placement(
                sdk::Placement::builder()
                    .availability_zone("eu-west-1a")
                    .tenancy(sdk::Tenancy::Dedicated)
                    .build(),
            )
            .tags(sdk::Tag::builder().key("Name").value("web").build())
            .tags(sdk::Tag::builder().key("env").value("prod").build())
            .build();
        let instance = instance::Instance::from_sdk(sdk_instance);
        assert_eq!(instance.instance_id.as_deref(), Some("i-1"));
        assert_eq!(instance.instance_type.as_deref(), Some("t3.micro"));
        assert_eq!(
            instance.launch_time,
            DateTime::from_timestamp(1_600_000_000, 0)
        );
        assert_eq!(
            instance.state.as_ref().and_then(|s| s.name.clone()),
            Some(InstanceStateName::Running)
        );
        assert_eq!(
            instance.placement.as_ref().and_then(|p| p.tenancy.clone()),
            Some(Tenancy::Dedicated)
        );
        let keys: Vec<_> = instance
            .tags
            .unwrap()
            .into_iter()
            .filter_map(|t| t.key)
            .collect();
        assert_eq!(keys, vec!["Name", "env"]);
        assert_eq!(instance.security_groups, None);
    }

    #[test]
    fn test_unknown_enum_survives() {
        let state = instance::InstanceState::from_sdk(
            sdk::InstanceState::builder()
                .name(sdk::InstanceStateName::from("hibernating"))
                .build(),
        );
        assert_eq!(
            state.name,
            Some(InstanceStateName::Unknown("hibernating".to_string()))
        );

        let spec = common::TagSpecification {
            resource_type: Some(ResourceType::from("ipam-pool")),
            tags: None,
        }
        .into_sdk();
        assert_eq!(
            spec.resource_type.as_ref().map(|r| r.as_str()),
            Some("ipam-pool")
        );
        assert_eq!(spec.tags, None);
    }

    #[test]
    fn test_timestamp_keeps_nanos() {
        let original = DateTime::from_timestamp(1_700_000_000, 123_456_789);
        assert_eq!(timestamp(sdk_timestamp(original)), original);
        assert_eq!(timestamp(None), None);
    }

    #[test]
    fn test_out_of_range_timestamp_dropped() {
        assert_eq!(timestamp(Some(SdkDateTime::from_secs(i64::MAX))), None);
        assert_eq!(
            timestamp(Some(SdkDateTime::from_secs(0))),
            DateTime::from_timestamp(0, 0)
        );
    }

    #[test]
    fn test_filter_into_sdk() {
        let filter = common::Filter::new("vpc-id", ["vpc-1", "vpc-2"]).into_sdk();
        assert_eq!(filter.name.as_deref(), Some("vpc-id"));
        assert_eq!(
            filter.values,
            Some(vec!["vpc-1".to_string(), "vpc-2".to_string()])
        );

        let empty = common::Filter {
            name: Some("owner-id".to_string()),
            values: Some(vec![]),
        }
        .into_sdk();
        assert_eq!(empty.values, Some(vec![]));
    }

    #[test]
    fn test_ip_permission_into_sdk_keeps_order() {
        let permission = IpPermissionBuilder::default()
            .ip_protocol("tcp")
            .from_port(22)
            .to_port(22)
            .ip_ranges(["10.0.0.0/8", "192.168.0.0/16"].map(|cidr| IpRange {
                cidr_ip: Some(cidr.to_string()),
                description: None,
            }))
            .build()
            .unwrap();
        let sdk_permission: sdk::IpPermission = permission.clone().into_sdk();
        let cidrs: Vec<_> = sdk_permission
            .ip_ranges
            .clone()
            .unwrap()
            .into_iter()
            .filter_map(|r| r.cidr_ip)
            .collect();
        assert_eq!(cidrs, vec!["10.0.0.0/8", "192.168.0.0/16"]);
        assert_eq!(sdk_permission.ipv6_ranges, None);
        assert_eq!(
            security_group::IpPermission::from_sdk(sdk_permission),
            permission
        );
    }

    #[test]
    fn test_describe_instances_output() {
        let output = DescribeInstancesOutput::builder()
            .reservations(
                sdk::Reservation::builder()
                    .reservation_id("r-1")
                    .instances(sdk::Instance::builder().instance_id("i-1").build())
                    .instances(sdk::Instance::builder().instance_id("i-2").build())
                    .build(),
            )
            .next_token("more")
            .build();
        let response = instance::DescribeInstancesResponse::from_sdk(output);
        assert_eq!(response.next_token(), Some("more"));
        let ids: Vec<_> = response
            .into_items()
            .into_iter()
            .flat_map(instance::Reservation::into_instances)
            .filter_map(|i| i.instance_id)
            .collect();
        assert_eq!(ids, vec!["i-1", "i-2"]);
    }

    #[test]
    fn test_customer_gateway_type() {
        let gateway = customer_gateway::CustomerGateway::from_sdk(
            sdk::CustomerGateway::builder()
                .customer_gateway_id("cgw-1")
                .bgp_asn("65000")
                .r#type("ipsec.1")
                .build(),
        );
        assert_eq!(
            gateway.gateway_type,
            Some(customer_gateway::GatewayType::Ipsec1)
        );
        assert_eq!(gateway.bgp_asn.as_deref(), Some("65000"));
    }

    #[test]
    fn test_request_shapes_into_sdk() {
        let changes = network_interface::NetworkInterfaceAttachmentChanges {
            attachment_id: Some("eni-attach-1".to_string()),
            delete_on_termination: Some(false),
        }
        .into_sdk();
        assert_eq!(changes.attachment_id.as_deref(), Some("eni-attach-1"));
        assert_eq!(changes.delete_on_termination, Some(false));

        let monitoring = instance::RunInstancesMonitoringEnabled {
            enabled: Some(true),
        }
        .into_sdk();
        assert_eq!(monitoring.enabled, Some(true));

        let profile = instance::IamInstanceProfileSpecification {
            arn: None,
            name: Some("web-role".to_string()),
        }
        .into_sdk();
        assert_eq!(profile.arn, None);
        assert_eq!(profile.name.as_deref(), Some("web-role"));

        let cpu = instance::CpuOptionsRequest {
            core_count: Some(4),
            threads_per_core: Some(1),
        }
        .into_sdk();
        assert_eq!(cpu.core_count, Some(4));
        assert_eq!(cpu.threads_per_core, Some(1));

        let hibernation = instance::HibernationOptionsRequest {
            configured: Some(true),
        }
        .into_sdk();
        assert_eq!(hibernation.configured, Some(true));
    }

    #[test]
    fn test_placement_round_trip() {
        let placement = instance::Placement {
            availability_zone: Some("eu-west-1b".to_string()),
            group_name: Some("cluster-a".to_string()),
            partition_number: Some(2),
            tenancy: Some(Tenancy::Host),
            host_id: Some("h-0abc".to_string()),
            ..Default::default()
        };
        let sdk_placement: sdk::Placement = placement.clone().into_sdk();
        assert_eq!(
            sdk_placement.tenancy.as_ref().map(|t| t.as_str()),
            Some("host")
        );
        assert_eq!(sdk_placement.affinity, None);
        assert_eq!(instance::Placement::from_sdk(sdk_placement), placement);
    }

    #[test]
    fn test_capacity_reservation_end_date_into_sdk() {
        let end = DateTime::from_timestamp(1_900_000_000, 500_000_000);
        let request = CreateCapacityReservationRequest {
            instance_type: Some("m5.large".to_string()),
            end_date: end,
            end_date_type: Some(EndDateType::Limited),
            ..Default::default()
        };
        let input = CreateCapacityReservationInput::builder()
            .set_end_date(sdk_timestamp(request.end_date))
            .set_end_date_type(convert_enum(request.end_date_type))
            .build()
            .unwrap();
        let sent = input.end_date.unwrap();
        assert_eq!(sent.secs(), 1_900_000_000);
        assert_eq!(sent.subsec_nanos(), 500_000_000);
        assert_eq!(input.end_date_type, Some(sdk::EndDateType::Limited));
        assert_eq!(sdk_timestamp(None), None);
    }

    #[test]
    fn test_transit_gateway_attachment_from_sdk() {
        let attachment = transit_gateway::TransitGatewayVpcAttachment::from_sdk(
            sdk::TransitGatewayVpcAttachment::builder()
                .transit_gateway_attachment_id("tgw-attach-1")
                .transit_gateway_id("tgw-1")
                .vpc_id("vpc-1")
                .state(sdk::TransitGatewayAttachmentState::PendingAcceptance)
                .subnet_ids("subnet-1")
                .subnet_ids("subnet-2")
                .creation_time(SdkDateTime::from_secs(1_650_000_000))
                .options(
                    sdk::TransitGatewayVpcAttachmentOptions::builder()
                        .dns_support(sdk::DnsSupportValue::Enable)
                        .ipv6_support(sdk::Ipv6SupportValue::Disable)
                        .build(),
                )
                .tags(sdk::Tag::builder().key("team").value("net").build())
                .build(),
        );
        assert_eq!(
            attachment.state,
            Some(TransitGatewayAttachmentState::PendingAcceptance)
        );
        assert_eq!(
            attachment.subnet_ids,
            Some(vec!["subnet-1".to_string(), "subnet-2".to_string()])
        );
        assert_eq!(
            attachment.creation_time,
            DateTime::from_timestamp(1_650_000_000, 0)
        );
        assert_eq!(
            attachment.options,
            Some(transit_gateway::TransitGatewayVpcAttachmentOptions {
                dns_support: Some(DnsSupportValue::Enable),
                ipv6_support: Some(Ipv6SupportValue::Disable),
            })
        );
        assert_eq!(
            attachment.tags,
            Some(vec![common::Tag {
                key: Some("team".to_string()),
                value: Some("net".to_string()),
            }])
        );
        assert_eq!(attachment.vpc_owner_id, None);
    }

    #[test]
    fn test_connection_notification_from_sdk() {
        let notification = vpc_endpoint::ConnectionNotification::from_sdk(
            sdk::ConnectionNotification::builder()
                .connection_notification_id("vpce-nfn-1")
                .vpc_endpoint_id("vpce-1")
                .connection_notification_type(sdk::ConnectionNotificationType::Topic)
                .connection_notification_arn("arn:aws:sns:eu-west-1:123456789012:endpoints")
                .connection_events("Accept")
                .connection_events("Reject")
                .connection_notification_state(sdk::ConnectionNotificationState::Enabled)
                .build(),
        );
        assert_eq!(
            notification.connection_notification_type,
            Some(ConnectionNotificationType::Topic)
        );
        assert_eq!(
            notification.connection_notification_state,
            Some(ConnectionNotificationState::Enabled)
        );
        assert_eq!(
            notification.connection_events,
            Some(vec!["Accept".to_string(), "Reject".to_string()])
        );
        assert_eq!(notification.service_id, None);
    }

    #[test]
    fn test_reserved_instances_from_sdk() {
        let reserved = reserved_instances::ReservedInstances::from_sdk(
            sdk::ReservedInstances::builder()
                .reserved_instances_id("ri-1")
                .instance_type(sdk::InstanceType::M5Large)
                .product_description(sdk::RiProductDescription::LinuxUnix)
                .instance_count(3)
                .duration(31_536_000)
                .fixed_price(0.1)
                .usage_price(3.1)
                .state(sdk::ReservedInstanceState::Active)
                .offering_type(sdk::OfferingTypeValues::NoUpfront)
                .start(SdkDateTime::from_secs(1_600_000_000))
                .recurring_charges(
                    sdk::RecurringCharge::builder()
                        .amount(0.25)
                        .frequency(sdk::RecurringChargeFrequency::Hourly)
                        .build(),
                )
                .build(),
        );
        assert_eq!(reserved.instance_type.as_deref(), Some("m5.large"));
        assert_eq!(reserved.product_description.as_deref(), Some("Linux/UNIX"));
        assert_eq!(reserved.fixed_price, Some(0.1f32));
        assert_eq!(reserved.usage_price, Some(3.1f32));
        assert_eq!(reserved.state, Some(ReservedInstanceState::Active));
        assert_eq!(reserved.offering_type, Some(OfferingTypeValues::NoUpfront));
        assert_eq!(reserved.start, DateTime::from_timestamp(1_600_000_000, 0));
        assert_eq!(reserved.end, None);
        assert_eq!(
            reserved.recurring_charges,
            Some(vec![reserved_instances::RecurringCharge {
                amount: Some(0.25),
                frequency: Some(RecurringChargeFrequency::Hourly),
            }])
        );
    }

    #[test]
    fn test_network_interface_from_sdk() {
        let interface = network_interface::NetworkInterface::from_sdk(
            sdk::NetworkInterface::builder()
                .network_interface_id("eni-1")
                .interface_type(sdk::NetworkInterfaceType::Efa)
                .status(sdk::NetworkInterfaceStatus::InUse)
                .attachment(
                    sdk::NetworkInterfaceAttachment::builder()
                        .attachment_id("eni-attach-1")
                        .device_index(0)
                        .instance_id("i-1")
                        .status(sdk::AttachmentStatus::Attached)
                        .attach_time(SdkDateTime::from_secs(1_600_000_000))
                        .build(),
                )
                .private_ip_addresses(
                    sdk::NetworkInterfacePrivateIpAddress::builder()
                        .primary(true)
                        .private_ip_address("10.0.0.5")
                        .build(),
                )
                .tag_set(sdk::Tag::builder().key("Name").value("efa-0").build())
                .build(),
        );
        assert_eq!(interface.interface_type, Some(NetworkInterfaceType::Efa));
        assert_eq!(interface.status, Some(NetworkInterfaceStatus::InUse));
        let attachment = interface.attachment.unwrap();
        assert_eq!(attachment.device_index, Some(0));
        assert_eq!(attachment.status, Some(AttachmentStatus::Attached));
        assert_eq!(
            attachment.attach_time,
            DateTime::from_timestamp(1_600_000_000, 0)
        );
        let addresses = interface.private_ip_addresses.unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].primary, Some(true));
        assert_eq!(addresses[0].private_ip_address.as_deref(), Some("10.0.0.5"));
        assert_eq!(
            interface.tag_set,
            Some(vec![common::Tag {
                key: Some("Name".to_string()),
                value: Some("efa-0".to_string()),
            }])
        );
        assert_eq!(interface.groups, None);
    }

    #[test]
    fn test_capacity_reservation_from_sdk() {
        let reservation = capacity_reservation::CapacityReservation::from_sdk(
            sdk::CapacityReservation::builder()
                .capacity_reservation_id("cr-1")
                .instance_type("m5.large")
                .instance_platform(sdk::CapacityReservationInstancePlatform::LinuxUnix)
                .total_instance_count(4)
                .available_instance_count(1)
                .state(sdk::CapacityReservationState::Active)
                .end_date_type(sdk::EndDateType::Unlimited)
                .create_date(SdkDateTime::from_secs(1_700_000_000))
                .build(),
        );
        assert_eq!(reservation.instance_type.as_deref(), Some("m5.large"));
        assert_eq!(
            reservation.instance_platform,
            Some(CapacityReservationInstancePlatform::LinuxUnix)
        );
        assert_eq!(
            reservation
                .instance_platform
                .as_ref()
                .map(|p| p.as_str()),
            Some("Linux/UNIX")
        );
        assert_eq!(reservation.state, Some(CapacityReservationState::Active));
        assert_eq!(reservation.end_date_type, Some(EndDateType::Unlimited));
        assert_eq!(reservation.total_instance_count, Some(4));
        assert_eq!(reservation.available_instance_count, Some(1));
        assert_eq!(
            reservation.create_date,
            DateTime::from_timestamp(1_700_000_000, 0)
        );
        assert_eq!(reservation.end_date, None);
    }
}
