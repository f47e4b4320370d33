use crate::common::TagSpecification;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    VolumeType {
        Standard => "standard",
        Io1 => "io1",
        Io2 => "io2",
        Gp2 => "gp2",
        Gp3 => "gp3",
        Sc1 => "sc1",
        St1 => "st1",
    }
}

/// Creates an EBS volume that can be attached to an instance in the same
/// Availability Zone.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CreateVolumeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Volumes created from an encrypted snapshot are always encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    /// Required for `io1` and `io2`, ignored for `gp2`, `st1`, `sc1` and `standard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    /// Key id, alias, or ARN. Only with `encrypted` set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    /// GiB. Required unless a snapshot is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Defaults to `gp2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    /// `io1` and `io2` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_attach_enabled: Option<bool>,
}

list_setters!(CreateVolumeRequestBuilder {
    tag_specifications, set_tag_specifications: TagSpecification;
});

dry_run_request!(CreateVolumeRequest => "CreateVolume");

impl_display!(CreateVolumeRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ResourceType, Tag};
    use crate::request::{DryRunSupported, Ec2Request};

    #[test]
    fn test_create_volume_from_json() {
        let json = r#"{
            "AvailabilityZone": "eu-west-1a",
            "Size": 20,
            "VolumeType": "gp3",
            "TagSpecifications": [
                {"ResourceType": "volume", "Tags": [{"Key": "team", "Value": "infra"}]}
            ]
        }"#;
        let request: CreateVolumeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.size, Some(20));
        assert_eq!(request.volume_type, Some(VolumeType::Gp3));
        let spec = &request.tag_specifications.as_ref().unwrap()[0];
        assert_eq!(spec.resource_type, Some(ResourceType::Volume));
        assert_eq!(
            spec.tags,
            Some(vec![Tag {
                key: Some("team".to_string()),
                value: Some("infra".to_string()),
            }])
        );
        assert_eq!(request.dry_run, None);
    }

    #[test]
    fn test_dry_run_copy() {
        let request = CreateVolumeRequestBuilder::default()
            .availability_zone("eu-west-1a")
            .size(1)
            .build()
            .unwrap();
        let mut dry = request.dry_run_request();
        assert_eq!(dry.dry_run(), Some(true));
        dry.set_dry_run(None);
        assert_eq!(dry, request);
        assert_eq!(CreateVolumeRequest::ACTION, "CreateVolume");
    }

    #[test]
    fn test_new_volume_type_survives() {
        let volume_type = VolumeType::from("gp4");
        assert_eq!(volume_type.to_string(), "gp4");
        assert_eq!(VolumeType::values().len(), 7);
    }
}
