pub mod recommendation_request_create_page;
pub mod recommendation_request_edit_page;
pub mod recommendation_request_index_page;
pub mod ucsb_organization_create_page;
pub mod ucsb_organization_edit_page;
pub mod ucsb_organization_index_page;
