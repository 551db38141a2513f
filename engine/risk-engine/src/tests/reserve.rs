use crate::error::Error;
use crate::types::reserve::Reserve;

const USDC: &str = r#"{
    "symbol": "USDC",
    "loanToValue": 0.8,
    "liquidationThreshold": 0.85,
    "variableBorrowRate": 0.05,
    "stableBorrowRate": 0.07
}"#;

#[test]
fn should_deserialize_valid_reserve() {
    let reserve: Reserve = serde_json::from_str(USDC).unwrap();

    assert_eq!(reserve, Reserve::new("USDC", 0.8, 0.85, 0.05, 0.07).unwrap());
}

#[test]
fn should_reject_invalid_reserve_on_deserialize() {
    let inverted = USDC.replace("0.85", "0.7");
    let err = serde_json::from_str::<Reserve>(&inverted).unwrap_err();
    assert!(err
        .to_string()
        .contains("invalid reserve USDC: liquidation threshold is below loan to value"));

    let negative_rate = USDC.replace("0.07", "-0.01");
    assert!(serde_json::from_str::<Reserve>(&negative_rate).is_err());

    assert_eq!(
        Reserve::new("USDC", 0.8, 0.7, 0.05, 0.07),
        Err(Error::InvalidReserve {
            symbol: "USDC".into(),
            reason: "liquidation threshold is below loan to value",
        })
    );
}
