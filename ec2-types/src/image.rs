//! Machine images and block device mappings.

use crate::common::{Filter, ProductCode, StateReason, Tag};
use crate::instance::{
    ArchitectureValues, DeviceType, HypervisorType, PlatformValues, VirtualizationType,
};
use crate::volume::VolumeType;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    ImageTypeValues {
        Machine => "machine",
        Kernel => "kernel",
        Ramdisk => "ramdisk",
    }
}

string_enum! {
    ImageState {
        Pending => "pending",
        Available => "available",
        Invalid => "invalid",
        Deregistered => "deregistered",
        Transient => "transient",
        Failed => "failed",
        Error => "error",
        Disabled => "disabled",
    }
}

/// Describes an EBS volume in a block device mapping.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct EbsBlockDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    /// Required for `io1` and `io2` volumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Size in GiB. Defaults to the snapshot size when a snapshot is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// MiB/s, `gp3` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

/// Describes a block device mapping, which defines the EBS volumes and instance
/// store volumes to attach at launch.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct BlockDeviceMapping {
    /// The device name, e.g. `/dev/sdh` or `xvdh`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// Instance store volumes are numbered from `ephemeral0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs: Option<EbsBlockDevice>,
    /// Suppresses the device mapping when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_device: Option<String>,
}

/// Describes an image.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<ArchitectureValues>,
    /// ISO 8601 string as returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageTypeValues>,
    /// Whether the image has public launch permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_operation: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<ProductCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    /// `available` once the image is ready to launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ImageState>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ena_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<HypervisorType>,
    /// `amazon`, `aws-marketplace` or an account alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_owner_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_device_type: Option<DeviceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sriov_net_support: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualization_type: Option<VirtualizationType>,
}

list_setters!(ImageBuilder {
    product_codes, set_product_codes: ProductCode;
    block_device_mappings, set_block_device_mappings: BlockDeviceMapping;
    tags, set_tags: Tag;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesRequest {
    /// Images with explicit launch permissions for these accounts; `self` and
    /// `all` are accepted.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_users: Option<Vec<String>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ids: Option<Vec<String>>,
    /// Account ids, `self`, `amazon` or `aws-marketplace`.
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeImagesRequestBuilder {
    executable_users, set_executable_users: String;
    filters, set_filters: Filter;
    image_ids, set_image_ids: String;
    owners, set_owners: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

list_setters!(DescribeImagesResponseBuilder {
    images, set_images: Image;
});

dry_run_request!(DescribeImagesRequest => "DescribeImages");

paginated_request!(DescribeImagesRequest);

paginated_response!(DescribeImagesResponse => images: Image);

impl_display!(
    EbsBlockDevice,
    BlockDeviceMapping,
    Image,
    DescribeImagesRequest,
    DescribeImagesResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PaginatedResponse;

    #[test]
    fn test_block_device_mapping_display() {
        let mapping = BlockDeviceMappingBuilder::default()
            .device_name("/dev/xvda")
            .ebs(
                EbsBlockDeviceBuilder::default()
                    .volume_size(8)
                    .volume_type(VolumeType::Gp3)
                    .delete_on_termination(true)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(
            mapping.to_string(),
            "{DeviceName: /dev/xvda, Ebs: {DeleteOnTermination: true, VolumeSize: 8, VolumeType: gp3}}"
        );
    }

    #[test]
    fn test_image_public_field_name() {
        let image = ImageBuilder::default()
            .image_id("ami-1")
            .public(false)
            .state(ImageState::Available)
            .build()
            .unwrap();
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, r#"{"ImageId":"ami-1","Public":false,"State":"available"}"#);
    }

    #[test]
    fn test_owners_append_in_order() {
        let mut builder = DescribeImagesRequestBuilder::default();
        builder.owners(["self"]).owners(["amazon", "self"]);
        let request = builder.build().unwrap();
        assert_eq!(
            request.owners,
            Some(vec![
                "self".to_string(),
                "amazon".to_string(),
                "self".to_string()
            ])
        );
        assert_eq!(request.image_ids, None);
    }

    #[test]
    fn test_response_without_images_is_empty() {
        let response = DescribeImagesResponse::default();
        assert_eq!(response.next_token(), None);
        assert!(response.into_items().is_empty());
    }
}
