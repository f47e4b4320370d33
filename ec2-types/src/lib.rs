//! Plain-data request and response shapes for the EC2 API.
//!
//! Every member is optional. Types are built either as struct literals or via
//! the generated `*Builder`, compare and hash by value, and render their set
//! fields through `Display`.

#[macro_use]
mod macros;

mod display;

pub mod capacity_reservation;
pub mod common;
pub mod customer_gateway;
pub mod error;
pub mod flow_log;
pub mod image;
pub mod instance;
pub mod instance_type;
pub mod network_interface;
pub mod request;
pub mod reserved_instances;
pub mod route_table;
pub mod security_group;
pub mod spot;
pub mod transit_gateway;
pub mod volume;
pub mod vpc_endpoint;

pub use error::ParseFilterError;
pub use request::{DryRunSupported, Ec2Request, Paginated, PaginatedResponse};
