pub mod limits;
pub mod policy_validator;
