//! Role checks shared by the services.

use chrono::NaiveDate;

use crate::contract::model::{Contract, User};
use crate::domain::error::DomainError;

pub fn require_admin(requester: &User) -> Result<(), DomainError> {
    if requester.is_admin {
        Ok(())
    } else {
        Err(DomainError::permission_denied("admin privileges required"))
    }
}

pub fn require_admin_or_employee(requester: &User) -> Result<(), DomainError> {
    if requester.is_admin_or_employee() {
        Ok(())
    } else {
        Err(DomainError::permission_denied(
            "admin or employee privileges required",
        ))
    }
}

pub fn require_admin_or_self(requester: &User, user_id: i32) -> Result<(), DomainError> {
    if requester.is_admin || requester.id == user_id {
        Ok(())
    } else {
        Err(DomainError::permission_denied(
            "only admins may act on other users",
        ))
    }
}

/// A contract grants access while it is active and `today` lies within its dates.
/// Checked in order: active flag, start date, end date.
pub fn ensure_contract_usable(contract: &Contract, today: NaiveDate) -> Result<(), DomainError> {
    if !contract.active {
        return Err(DomainError::ContractInactive { id: contract.id });
    }
    if contract.start_date > today {
        return Err(DomainError::ContractNotStarted { id: contract.id });
    }
    match contract.end_date {
        Some(end) if end < today => Err(DomainError::ContractExpired { id: contract.id }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, is_admin: bool, is_employee: bool) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@seacast.io"),
            hashed_password: String::new(),
            is_admin,
            is_employee,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(active: bool, start: NaiveDate, end: Option<NaiveDate>) -> Contract {
        Contract {
            id: 7,
            name: "Harbour pilots".into(),
            forecast_system_id: 1,
            start_date: start,
            end_date: end,
            active,
        }
    }

    #[test]
    fn role_checks() {
        let admin = user(1, true, false);
        let employee = user(2, false, true);
        let regular = user(3, false, false);

        assert!(require_admin(&admin).is_ok());
        assert!(matches!(
            require_admin(&employee),
            Err(DomainError::PermissionDenied { .. })
        ));

        assert!(require_admin_or_employee(&employee).is_ok());
        assert!(require_admin_or_employee(&regular).is_err());

        assert!(require_admin_or_self(&regular, 3).is_ok());
        assert!(require_admin_or_self(&regular, 2).is_err());
        assert!(require_admin_or_self(&admin, 3).is_ok());
    }

    #[test]
    fn contract_window_checks_in_order() {
        let today = date(2025, 6, 15);

        let inactive_and_expired = contract(false, date(2026, 1, 1), Some(date(2024, 1, 1)));
        assert!(matches!(
            ensure_contract_usable(&inactive_and_expired, today),
            Err(DomainError::ContractInactive { id: 7 })
        ));

        let future = contract(true, date(2025, 6, 16), None);
        assert!(matches!(
            ensure_contract_usable(&future, today),
            Err(DomainError::ContractNotStarted { .. })
        ));

        let expired = contract(true, date(2025, 1, 1), Some(date(2025, 6, 14)));
        assert!(matches!(
            ensure_contract_usable(&expired, today),
            Err(DomainError::ContractExpired { .. })
        ));
    }

    #[test]
    fn contract_window_bounds_are_inclusive() {
        let today = date(2025, 6, 15);
        assert!(ensure_contract_usable(&contract(true, today, Some(today)), today).is_ok());
        assert!(ensure_contract_usable(&contract(true, date(2020, 1, 1), None), today).is_ok());
    }
}
