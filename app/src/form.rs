//! The create-delegation form.

use august_types::Address;
use thiserror::Error;

/// Raw form fields as entered in the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelegationForm {
    pub delegatee: String,
    pub amount: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("please enter a valid-looking address")]
    ImplausibleDelegatee,

    #[error("amount must be a non-negative number")]
    BadAmount,
}

impl DelegationForm {
    /// Validate the fields and parse them into a submission.
    ///
    /// The delegatee check is superficial (length only) because the demo
    /// never resolves addresses on chain; the amount must parse to a
    /// finite non-negative number.
    pub fn parse(&self) -> Result<(Address, f64), FormError> {
        let delegatee = Address::new(self.delegatee.trim());
        if !delegatee.is_plausible() {
            return Err(FormError::ImplausibleDelegatee);
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| FormError::BadAmount)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(FormError::BadAmount);
        }

        Ok((delegatee, amount))
    }

    /// Reset both fields, as the UI does after a successful submission.
    pub fn clear(&mut self) {
        self.delegatee.clear();
        self.amount.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(delegatee: &str, amount: &str) -> DelegationForm {
        DelegationForm {
            delegatee: delegatee.to_string(),
            amount: amount.to_string(),
        }
    }

    const GOOD_ADDR: &str = "EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP";

    #[test]
    fn valid_form_parses() {
        let (addr, amount) = form(GOOD_ADDR, "250").parse().unwrap();
        assert_eq!(addr.as_str(), GOOD_ADDR);
        assert_eq!(amount, 250.0);
    }

    #[test]
    fn fractional_amount_accepted() {
        let (_, amount) = form(GOOD_ADDR, "0.000001").parse().unwrap();
        assert_eq!(amount, 0.000001);
    }

    #[test]
    fn short_delegatee_rejected() {
        assert_eq!(
            form("shortid", "10").parse(),
            Err(FormError::ImplausibleDelegatee)
        );
        assert_eq!(form("", "10").parse(), Err(FormError::ImplausibleDelegatee));
    }

    #[test]
    fn bad_amounts_rejected() {
        assert_eq!(form(GOOD_ADDR, "-5").parse(), Err(FormError::BadAmount));
        assert_eq!(form(GOOD_ADDR, "abc").parse(), Err(FormError::BadAmount));
        assert_eq!(form(GOOD_ADDR, "").parse(), Err(FormError::BadAmount));
        assert_eq!(form(GOOD_ADDR, "inf").parse(), Err(FormError::BadAmount));
    }

    #[test]
    fn whitespace_trimmed() {
        let (addr, amount) = form(&format!("  {GOOD_ADDR} "), " 10 ").parse().unwrap();
        assert_eq!(addr.as_str(), GOOD_ADDR);
        assert_eq!(amount, 10.0);
    }

    #[test]
    fn clear_resets_fields() {
        let mut f = form(GOOD_ADDR, "10");
        f.clear();
        assert_eq!(f, DelegationForm::default());
    }
}
