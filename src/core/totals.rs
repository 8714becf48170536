//! Running totals for matched transactions
//!
//! The net position uses the statement tool's display convention: a net
//! debit balance is shown with a leading minus and a net credit balance with
//! a leading plus. Existing consumers of the output rely on this exact form.

use crate::io::statement_format::format_amount;
use crate::types::{AmountField, RecordError, Transaction};
use rust_decimal::Decimal;

/// Debit/credit totals over all transactions that passed the filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningTotals {
    /// Number of transactions accumulated
    pub match_count: usize,
    /// Sum of debit amounts
    pub total_debit: Decimal,
    /// Sum of credit amounts
    pub total_credit: Decimal,
}

impl RunningTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one matched transaction into the totals
    ///
    /// The totals are left untouched when the transaction is rejected.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::AmountOverflow` if either total, or the net
    /// between them, would leave the decimal range.
    pub fn accumulate(&mut self, transaction: &Transaction) -> Result<(), RecordError> {
        let debit = transaction.debit();
        let credit = transaction.credit();

        let total_debit = self
            .total_debit
            .checked_add(debit)
            .ok_or_else(|| RecordError::amount_overflow(AmountField::Debit, debit))?;
        let total_credit = self
            .total_credit
            .checked_add(credit)
            .ok_or_else(|| RecordError::amount_overflow(AmountField::Credit, credit))?;

        // Negative amounts can drive the totals apart; net() must not overflow.
        if total_debit.checked_sub(total_credit).is_none() {
            let (field, value) = if debit.is_zero() {
                (AmountField::Credit, credit)
            } else {
                (AmountField::Debit, debit)
            };
            return Err(RecordError::amount_overflow(field, value));
        }

        self.match_count += 1;
        self.total_debit = total_debit;
        self.total_credit = total_credit;
        Ok(())
    }

    /// Total debit minus total credit
    pub fn net(&self) -> Decimal {
        self.total_debit - self.total_credit
    }

    /// Absolute value of the net position
    pub fn net_magnitude(&self) -> Decimal {
        self.net().abs()
    }

    /// Net position with the sign-flip convention
    ///
    /// # Examples
    ///
    /// ```
    /// use hdfc_statement::core::totals::RunningTotals;
    /// use rust_decimal::Decimal;
    ///
    /// let totals = RunningTotals {
    ///     match_count: 2,
    ///     total_debit: Decimal::new(10000, 2),
    ///     total_credit: Decimal::new(3000, 2),
    /// };
    /// assert_eq!(totals.net_display(), "-70.00");
    /// ```
    pub fn net_display(&self) -> String {
        let net = self.net();
        if net < Decimal::ZERO {
            format!("+{}", format_amount(net.abs()))
        } else {
            format!("-{}", format_amount(net))
        }
    }
}
