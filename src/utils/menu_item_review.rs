//! Menu-item reviews only participate in delete flows on this side.

use crate::backend::{Method, RequestDescriptor};
use crate::models::menu_item_review::MenuItemReview;

pub const COLLECTION_KEY: &str = "/api/menuitemreview/all";

pub fn delete_params(review: &MenuItemReview) -> RequestDescriptor {
    RequestDescriptor::new(Method::Delete, "/api/menuitemreview").param("id", review.id.to_string())
}
