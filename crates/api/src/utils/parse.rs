use namegate_domain::dns_name::encode;
use namegate_domain::{Address, Bytes, DomainError, EncodedName, U256};
use serde_json::Value;
use std::str::FromStr;

pub fn parse_address(field: &str, value: &str) -> Result<Address, DomainError> {
    Address::from_str(value.trim()).map_err(|e| {
        DomainError::InvalidRequest(format!("{} is not a valid address: {}", field, e))
    })
}

pub fn parse_hex_bytes(field: &str, value: &str) -> Result<Bytes, DomainError> {
    let value = value.trim();
    if !value.starts_with("0x") {
        return Err(DomainError::InvalidRequest(format!(
            "{} must be 0x-prefixed hex",
            field
        )));
    }
    Bytes::from_str(value)
        .map_err(|e| DomainError::InvalidRequest(format!("{} is not valid hex: {}", field, e)))
}

pub fn parse_name(value: &str) -> Result<EncodedName, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::InvalidRequest("name is required".to_string()));
    }
    encode(value)
}

/// Parse a token amount given as a JSON number, a decimal string or a
/// `0x` hex string. JSON numbers only cover `u64`; larger amounts (most
/// 18-decimal token values) must be sent as strings.
///
/// # Examples
/// ```
/// use namegate_api::utils::parse_amount;
/// use namegate_domain::U256;
/// use serde_json::json;
///
/// assert_eq!(parse_amount("amount", &json!(1000)).unwrap(), U256::from(1000u64));
/// assert_eq!(parse_amount("amount", &json!("1000")).unwrap(), U256::from(1000u64));
/// assert_eq!(parse_amount("amount", &json!("0x3e8")).unwrap(), U256::from(1000u64));
/// assert_eq!(
///     parse_amount("amount", &json!("100000000000000000000")).unwrap(),
///     U256::from(10u64).pow(U256::from(20u64))
/// );
/// assert!(parse_amount("amount", &json!(1e20)).is_err());
/// assert!(parse_amount("amount", &json!(-1)).is_err());
/// assert!(parse_amount("amount", &json!("ten")).is_err());
/// ```
pub fn parse_amount(field: &str, value: &Value) -> Result<U256, DomainError> {
    match value {
        Value::Number(n) => n.as_u64().map(U256::from).ok_or_else(|| {
            DomainError::InvalidRequest(format!(
                "{} must be a non-negative integer no larger than {} when sent as a JSON number; \
                 send larger amounts as a decimal or 0x string",
                field,
                u64::MAX
            ))
        }),
        Value::String(s) => U256::from_str(s.trim()).map_err(|e| {
            DomainError::InvalidRequest(format!("{} is not a valid amount: {}", field, e))
        }),
        _ => Err(DomainError::InvalidRequest(format!(
            "{} must be a number or a numeric string",
            field
        ))),
    }
}
