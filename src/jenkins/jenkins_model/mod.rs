pub mod artifact;
pub mod build_info;
pub mod build_result;
pub mod crumb;
pub mod queue_item;
pub mod user;
