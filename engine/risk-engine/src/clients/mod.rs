pub mod http_risk_validator;
