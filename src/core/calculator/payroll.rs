use crate::models::Employee;
use rust_decimal::{Decimal, RoundingStrategy};

/// Monthly pay policy.
///
/// `allowed_lwp` days of leave without pay are tolerated each month; every
/// further LWP day costs one day of salary, where a day is
/// `salary / total_days` and `total_days` counts the saved dates of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPolicy {
    pub allowed_lwp: Decimal,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            allowed_lwp: Decimal::new(26, 1),
        }
    }
}

impl PayPolicy {
    pub fn new(allowed_lwp: Decimal) -> Self {
        Self {
            allowed_lwp: allowed_lwp.max(Decimal::ZERO),
        }
    }

    /// LWP days beyond the allowance, never negative.
    pub fn unpaid_lwp(&self, leave_count: Decimal) -> Decimal {
        (leave_count - self.allowed_lwp).max(Decimal::ZERO)
    }

    /// Net pay rounded to the whole currency unit (ties away from zero).
    pub fn net_pay(&self, employee: &Employee, leave_count: Decimal, total_days: u32) -> Decimal {
        let unpaid = self.unpaid_lwp(leave_count);

        let mut net = employee.salary;
        if unpaid > Decimal::ZERO && total_days > 0 {
            let per_day = employee.salary / Decimal::from(total_days);
            // more unpaid days than saved days cannot push pay below zero
            net = (employee.salary - per_day * unpaid).max(Decimal::ZERO);
        }

        net.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Net pay under the default policy (2.6 tolerated LWP days).
pub fn compute_net_pay(employee: &Employee, leave_count: Decimal, total_days: u32) -> Decimal {
    PayPolicy::default().net_pay(employee, leave_count, total_days)
}
