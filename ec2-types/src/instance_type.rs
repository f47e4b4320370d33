//! Instance type capabilities as reported by `DescribeInstanceTypes`.
//!
//! `ProcessorInfo` carries a clock speed in GHz, so it and the types that embed
//! it are `PartialEq` only.

use crate::common::Filter;
use crate::instance::VirtualizationType;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    UsageClassType {
        Spot => "spot",
        OnDemand => "on-demand",
        CapacityBlock => "capacity-block",
    }
}

string_enum! {
    RootDeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

string_enum! {
    ArchitectureType {
        I386 => "i386",
        X8664 => "x86_64",
        Arm64 => "arm64",
        X8664Mac => "x86_64_mac",
        Arm64Mac => "arm64_mac",
    }
}

string_enum! {
    InstanceTypeHypervisor {
        Nitro => "nitro",
        Xen => "xen",
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorInfo {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_architectures: Option<Vec<ArchitectureType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustained_clock_speed_in_ghz: Option<f64>,
}

list_setters!(ProcessorInfoBuilder {
    supported_architectures, set_supported_architectures: ArchitectureType;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct VCpuInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_v_cpus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cores: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_threads_per_core: Option<i32>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_cores: Option<Vec<i32>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_threads_per_core: Option<Vec<i32>>,
}

list_setters!(VCpuInfoBuilder {
    valid_cores, set_valid_cores: i32;
    valid_threads_per_core, set_valid_threads_per_core: i32;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct MemoryInfo {
    #[serde(rename = "SizeInMiB", skip_serializing_if = "Option::is_none")]
    pub size_in_mib: Option<i64>,
}

/// Describes an instance type.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_tier_eligible: Option<bool>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_usage_classes: Option<Vec<UsageClassType>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_root_device_types: Option<Vec<RootDeviceType>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_virtualization_types: Option<Vec<VirtualizationType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bare_metal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<InstanceTypeHypervisor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_info: Option<ProcessorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_cpu_info: Option<VCpuInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_info: Option<MemoryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_storage_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hibernation_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burstable_performance_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_hosts_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_recovery_supported: Option<bool>,
}

list_setters!(InstanceTypeInfoBuilder {
    supported_usage_classes, set_supported_usage_classes: UsageClassType;
    supported_root_device_types, set_supported_root_device_types: RootDeviceType;
    supported_virtualization_types, set_supported_virtualization_types: VirtualizationType;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Defaults to all instance types offered in the region.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<Vec<String>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeInstanceTypesRequestBuilder {
    instance_types, set_instance_types: String;
    filters, set_filters: Filter;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypesResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<Vec<InstanceTypeInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeInstanceTypesResponseBuilder {
    instance_types, set_instance_types: InstanceTypeInfo;
});

dry_run_request!(DescribeInstanceTypesRequest => "DescribeInstanceTypes");

paginated_request!(DescribeInstanceTypesRequest);

paginated_response!(DescribeInstanceTypesResponse => instance_types: InstanceTypeInfo);

impl_display!(
    ProcessorInfo,
    VCpuInfo,
    MemoryInfo,
    InstanceTypeInfo,
    DescribeInstanceTypesRequest,
    DescribeInstanceTypesResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn make_info() -> InstanceTypeInfo {
        InstanceTypeInfoBuilder::default()
            .instance_type("t4g.micro")
            .processor_info(
                ProcessorInfoBuilder::default()
                    .supported_architectures([ArchitectureType::Arm64])
                    .sustained_clock_speed_in_ghz(2.5)
                    .build()
                    .unwrap(),
            )
            .memory_info(MemoryInfoBuilder::default().size_in_mib(1024).build().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_display_with_float_and_nested() {
        assert_eq!(
            make_info().to_string(),
            "{InstanceType: t4g.micro, ProcessorInfo: {SupportedArchitectures: [arm64], \
             SustainedClockSpeedInGhz: 2.5}, MemoryInfo: {SizeInMiB: 1024}}"
        );
    }

    #[test]
    fn test_wire_member_names() {
        let info = InstanceTypeInfoBuilder::default()
            .v_cpu_info(
                VCpuInfoBuilder::default()
                    .default_v_cpus(2)
                    .valid_cores([1, 2])
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"VCpuInfo":{"DefaultVCpus":2,"ValidCores":[1,2]}}"#);
        let parsed: InstanceTypeInfo =
            serde_json::from_str(r#"{"MemoryInfo":{"SizeInMiB":512}}"#).unwrap();
        assert_eq!(parsed.memory_info.unwrap().size_in_mib, Some(512));
    }

    #[test]
    fn test_float_equality() {
        let a = make_info();
        let mut b = make_info();
        assert_eq!(a, b);
        b.processor_info.as_mut().unwrap().sustained_clock_speed_in_ghz = Some(3.0);
        assert_ne!(a, b);
    }
}
