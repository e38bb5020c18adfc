use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidObligationAmount;

/// A strictly positive, finite amount as written in an obligations file.
#[derive(Debug)]
pub(crate) struct ObligationAmountModel(pub f64);

impl FromStr for ObligationAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let amount = raw
            .parse::<f64>()
            .map_err(|_| InvalidObligationAmount::new(raw))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InvalidObligationAmount::new(raw));
        }
        Ok(ObligationAmountModel(amount))
    }
}

impl From<ObligationAmountModel> for f64 {
    fn from(model: ObligationAmountModel) -> f64 {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_amounts() {
        assert_eq!(ObligationAmountModel::from_str(" 10.5 ").unwrap().0, 10.5);
        assert_eq!(ObligationAmountModel::from_str("7").unwrap().0, 7.0);
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        for raw in ["0", "-3", "two", "", "inf", "NaN"] {
            assert!(ObligationAmountModel::from_str(raw).is_err(), "{raw}");
        }
    }
}
