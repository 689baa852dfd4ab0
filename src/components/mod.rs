pub mod recommendation_request_form;
pub mod recommendation_request_table;
pub mod ucsb_organization_form;
pub mod ucsb_organization_table;
