pub mod boolish;
pub mod current_user;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod system_info;
pub mod ucsb_organization;
