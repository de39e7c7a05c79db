//! Per-operation parameter validation.
//!
//! Validation is pure and runs before any network I/O, so a rejected call
//! never produces a partial request.

use validator::{ValidateLength, ValidateRange};

use crate::domain::{AddressParams, BalanceParams, CoinType, SendParams, ValidationError};

/// Maximum label length, counted in characters.
pub const LABEL_MAX_LENGTH: usize = 128;

/// Local validation of operation parameters.
pub trait ValidateParams {
    fn validate_params(&self) -> Result<(), ValidationError>;
}

/// The coin must be present in the registry.
pub fn validate_coin(coin: CoinType) -> Result<(), ValidationError> {
    if coin.currency_code().is_empty() {
        return Err(ValidationError::InvalidCoinType(coin.id()));
    }
    Ok(())
}

/// An absent label is accepted; a present one must fit in [`LABEL_MAX_LENGTH`] characters.
pub fn validate_label(label: Option<&String>) -> Result<(), ValidationError> {
    let Some(label) = label else {
        return Ok(());
    };

    if !label.validate_length(None, Some(LABEL_MAX_LENGTH as u64), None) {
        return Err(ValidationError::LabelTooLong {
            max: LABEL_MAX_LENGTH,
            actual: label.chars().count(),
        });
    }
    Ok(())
}

impl ValidateParams for AddressParams {
    fn validate_params(&self) -> Result<(), ValidationError> {
        validate_coin(self.coin)?;
        validate_label(self.label.as_ref())
    }
}

impl ValidateParams for BalanceParams {
    fn validate_params(&self) -> Result<(), ValidationError> {
        validate_coin(self.coin)
    }
}

impl ValidateParams for SendParams {
    fn validate_params(&self) -> Result<(), ValidationError> {
        validate_coin(self.coin)?;

        if self.address.trim().is_empty() {
            return Err(ValidationError::InvalidAddress);
        }

        // Strictly positive and finite; NaN and infinity have no JSON form.
        if !self.amount.is_finite() || !self.amount.validate_range(None, None, Some(0.0), None) {
            return Err(ValidationError::InvalidAmount(self.amount));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        let exact = "a".repeat(128);
        let params = AddressParams::new(CoinType::BITCOIN).with_label(exact);
        assert!(params.validate_params().is_ok());

        let over = "a".repeat(129);
        let params = AddressParams::new(CoinType::BITCOIN).with_label(over);
        assert_eq!(
            params.validate_params(),
            Err(ValidationError::LabelTooLong {
                max: 128,
                actual: 129
            })
        );

        let params = AddressParams::new(CoinType::BITCOIN);
        assert!(params.validate_params().is_ok());

        let params = AddressParams::new(CoinType::BITCOIN).with_label("");
        assert!(params.validate_params().is_ok());
    }

    #[test]
    fn test_label_counts_characters_not_bytes() {
        // 128 characters, 256 bytes
        let label = "é".repeat(128);
        assert_eq!(label.len(), 256);
        let params = AddressParams::new(CoinType::LITECOIN).with_label(label);
        assert!(params.validate_params().is_ok());
    }

    #[test]
    fn test_unknown_coin_rejected_for_every_operation() {
        let unknown = CoinType::from_id(42);

        assert_eq!(
            AddressParams::new(unknown).validate_params(),
            Err(ValidationError::InvalidCoinType(42))
        );
        assert_eq!(
            BalanceParams::new(unknown).validate_params(),
            Err(ValidationError::InvalidCoinType(42))
        );
        assert_eq!(
            SendParams::new(unknown, "addr", 1.0).validate_params(),
            Err(ValidationError::InvalidCoinType(42))
        );
    }

    #[test]
    fn test_coin_checked_before_label() {
        let params = AddressParams::new(CoinType::from_id(7)).with_label("x".repeat(200));
        assert!(matches!(
            params.validate_params(),
            Err(ValidationError::InvalidCoinType(7))
        ));
    }

    #[test]
    fn test_send_amount_rules() {
        for amount in [0.0, -1.0, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = SendParams::new(CoinType::BITCOIN, "1A2b3C", amount).validate_params();
            assert!(
                matches!(result, Err(ValidationError::InvalidAmount(_))),
                "amount {} should be rejected",
                amount
            );
        }

        let params = SendParams::new(CoinType::BITCOIN, "1A2b3C", 0.00000001);
        assert!(params.validate_params().is_ok());

        let params = SendParams::new(CoinType::BITCOIN, "1A2b3C", f64::MIN_POSITIVE);
        assert!(params.validate_params().is_ok());
    }

    #[test]
    fn test_send_address_rules() {
        for address in ["", "   ", "\t\n"] {
            let result = SendParams::new(CoinType::ETHEREUM, address, 1.0).validate_params();
            assert_eq!(result, Err(ValidationError::InvalidAddress));
        }

        let params = SendParams::new(CoinType::ETHEREUM, "  0xabc  ", 1.0);
        assert!(params.validate_params().is_ok());
    }

    #[test]
    fn test_send_checks_address_before_amount() {
        let result = SendParams::new(CoinType::BITCOIN, " ", 0.0).validate_params();
        assert_eq!(result, Err(ValidationError::InvalidAddress));
    }
}
