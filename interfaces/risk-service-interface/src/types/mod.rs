pub mod action_type;
pub mod validation_request;
pub mod validation_verdict;
