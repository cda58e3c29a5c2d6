//! Record aggregation: sum the amounts a user recorded in one period.

use rust_decimal::Decimal;

use crate::models::{Expense, Income, Period};

/// An amount-bearing record that belongs to a user and a period.
///
/// Income and expense records share this shape, which lets the same
/// aggregation run over either collection.
pub trait AmountRecord {
    fn user_id(&self) -> i64;
    fn period(&self) -> Period;
    fn amount(&self) -> Decimal;
}

impl AmountRecord for Income {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn period(&self) -> Period {
        self.period
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl AmountRecord for Expense {
    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn period(&self) -> Period {
        self.period
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Sums the amounts of the records belonging to `user_id` in `period`.
/// Zero when nothing matches.
pub fn aggregate<R: AmountRecord>(records: &[R], user_id: i64, period: Period) -> Decimal {
    records
        .iter()
        .filter(|r| r.user_id() == user_id && r.period() == period)
        .map(AmountRecord::amount)
        .sum()
}
