//! Reserved Instances and their offerings.

use crate::common::{Filter, Tag};
use crate::instance::Tenancy;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

string_enum! {
    ReservedInstanceState {
        PaymentPending => "payment-pending",
        Active => "active",
        PaymentFailed => "payment-failed",
        Retired => "retired",
        Queued => "queued",
        QueuedDeleted => "queued-deleted",
    }
}

string_enum! {
    OfferingClassType {
        Standard => "standard",
        Convertible => "convertible",
    }
}

string_enum! {
    OfferingTypeValues {
        HeavyUtilization => "Heavy Utilization",
        MediumUtilization => "Medium Utilization",
        LightUtilization => "Light Utilization",
        NoUpfront => "No Upfront",
        PartialUpfront => "Partial Upfront",
        AllUpfront => "All Upfront",
    }
}

string_enum! {
    Scope {
        AvailabilityZone => "Availability Zone",
        Region => "Region",
    }
}

string_enum! {
    CurrencyCodeValues {
        Usd => "USD",
    }
}

string_enum! {
    RecurringChargeFrequency {
        Hourly => "Hourly",
    }
}

/// Describes a recurring charge.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct RecurringCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<RecurringChargeFrequency>,
}

/// Describes a Reserved Instance purchase.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstances {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Term length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ReservedInstanceState>,
    /// Hourly usage price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCodeValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Tenancy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_charges: Option<Vec<RecurringCharge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

list_setters!(ReservedInstancesBuilder {
    recurring_charges, set_recurring_charges: RecurringCharge;
    tags, set_tags: Tag;
});

/// `DescribeReservedInstances` answers in a single page.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
}

list_setters!(DescribeReservedInstancesRequestBuilder {
    filters, set_filters: Filter;
    reserved_instances_ids, set_reserved_instances_ids: String;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesResponse {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances: Option<Vec<ReservedInstances>>,
}

list_setters!(DescribeReservedInstancesResponseBuilder {
    reserved_instances, set_reserved_instances: ReservedInstances;
});

#[derive(Builder, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsRequest {
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_offering_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Append `(Amazon VPC)` to restrict to offerings for VPC instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[builder(setter(custom))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Tenancy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum of 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_marketplace: Option<bool>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<i64>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i64>,
    /// Marketplace offerings only. Defaults to 20.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

list_setters!(DescribeReservedInstancesOfferingsRequestBuilder {
    reserved_instances_offering_ids, set_reserved_instances_offering_ids: String;
    filters, set_filters: Filter;
});

dry_run_request!(
    DescribeReservedInstancesRequest => "DescribeReservedInstances",
    DescribeReservedInstancesOfferingsRequest => "DescribeReservedInstancesOfferings",
);

paginated_request!(DescribeReservedInstancesOfferingsRequest);

impl_display!(
    RecurringCharge,
    ReservedInstances,
    DescribeReservedInstancesRequest,
    DescribeReservedInstancesResponse,
    DescribeReservedInstancesOfferingsRequest,
);
