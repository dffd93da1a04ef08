pub mod build_info;
pub mod build_job;
pub mod get_crumb;
pub mod queue_item_info;
pub mod who_am_i;
