//! On-Demand Capacity Reservations.

use crate::common::{Filter, Tag, TagSpecification};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    CapacityReservationInstancePlatform {
        LinuxUnix => "Linux/UNIX",
        RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
        SuseLinux => "SUSE Linux",
        Windows => "Windows",
        WindowsWithSqlServer => "Windows with SQL Server",
        WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb => "Windows with SQL Server Web",
        LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb => "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
    }
}

string_enum! {
    CapacityReservationTenancy {
        Default => "default",
        Dedicated => "dedicated",
    }
}

string_enum! {
    CapacityReservationState {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
        Pending => "pending",
        Failed => "failed",
    }
}

string_enum! {
    /// Whether a Capacity Reservation ends on its own.
    EndDateType {
        Unlimited => "unlimited",
        Limited => "limited",
    }
}

string_enum! {
    /// Which instances may run in a Capacity Reservation.
    ///
    /// `open` accepts any instance with matching attributes; `targeted` only
    /// instances launched into the reservation explicitly.
    InstanceMatchCriteria {
        Open => "open",
        Targeted => "targeted",
    }
}

/// Describes a Capacity Reservation.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CapacityReservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_platform: Option<CapacityReservationInstancePlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<CapacityReservationTenancy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_instance_count: Option<i32>,
    /// Instances still free to launch into the reservation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    /// Deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CapacityReservationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_type: Option<EndDateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_match_criteria: Option<InstanceMatchCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

list_setters!(CapacityReservationBuilder {
    tags, set_tags: Tag;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CreateCapacityReservationRequest {
    /// Up to 64 ASCII characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_platform: Option<CapacityReservationInstancePlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<CapacityReservationTenancy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    /// Deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<bool>,
    /// Required when `end_date_type` is `limited`, omitted when `unlimited`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_type: Option<EndDateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_match_criteria: Option<InstanceMatchCriteria>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

list_setters!(CreateCapacityReservationRequestBuilder {
    tag_specifications, set_tag_specifications: TagSpecification;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCapacityReservationsRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 1 to 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

list_setters!(DescribeCapacityReservationsRequestBuilder {
    capacity_reservation_ids, set_capacity_reservation_ids: String;
    filters, set_filters: Filter;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCapacityReservationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_reservations: Option<Vec<CapacityReservation>>,
}

list_setters!(DescribeCapacityReservationsResponseBuilder {
    capacity_reservations, set_capacity_reservations: CapacityReservation;
});

dry_run_request!(
    CreateCapacityReservationRequest => "CreateCapacityReservation",
    DescribeCapacityReservationsRequest => "DescribeCapacityReservations",
);

paginated_request!(DescribeCapacityReservationsRequest);

paginated_response!(DescribeCapacityReservationsResponse => capacity_reservations: CapacityReservation);

impl_display!(
    CapacityReservation,
    CreateCapacityReservationRequest,
    DescribeCapacityReservationsRequest,
    DescribeCapacityReservationsResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_platform_with_spaces_round_trips() {
        let request = CreateCapacityReservationRequestBuilder::default()
            .instance_type("m5.large")
            .instance_platform(CapacityReservationInstancePlatform::RedHatEnterpriseLinux)
            .instance_count(2)
            .end_date_type(EndDateType::Unlimited)
            .build()
            .unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"InstanceType":"m5.large","InstancePlatform":"Red Hat Enterprise Linux","InstanceCount":2,"EndDateType":"unlimited"}"#
        );
        assert_eq!(
            serde_json::from_str::<CreateCapacityReservationRequest>(&json).unwrap(),
            request
        );
    }

    #[test]
    fn test_end_date_as_rfc3339() {
        let request = CreateCapacityReservationRequestBuilder::default()
            .end_date(Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap())
            .end_date_type(EndDateType::Limited)
            .build()
            .unwrap();
        assert_eq!(
            request.to_string(),
            "{EndDate: 2030-06-01T00:00:00Z, EndDateType: limited}"
        );
    }

    #[test]
    fn test_reservation_equality_ignores_nothing() {
        let a = CapacityReservationBuilder::default()
            .capacity_reservation_id("cr-1")
            .available_instance_count(3)
            .build()
            .unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.available_instance_count = Some(2);
        assert_ne!(a, b);
    }
}
