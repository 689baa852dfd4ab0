//! Static sample records used by tests and UI previews.

pub mod current_user;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_organization;
