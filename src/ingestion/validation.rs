//! Boundary validation of employee records.
//!
//! The analyzer trusts its input. Records are checked here before they reach
//! it: wages must be non-negative and bounded, the total must match base plus variable,
//! FTE must lie in (0, 1] and IDs must be unique within a set.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::ValidationSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Checks a single employee record.
///
/// # Examples
///
/// ```
/// use pay_gap_engine::config::ValidationSettings;
/// use pay_gap_engine::error::EngineError;
/// use pay_gap_engine::ingestion::validate_employee;
/// use pay_gap_engine::models::{Employee, Gender};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee {
///     id: "E001".to_string(),
///     full_name: None,
///     gender: Gender::Male,
///     age: 29,
///     job_category: "Sales".to_string(),
///     base_hourly_wage: Decimal::from(20),
///     variable_hourly_component: Decimal::ZERO,
///     total_hourly_wage: Decimal::from(20),
///     fte: Decimal::ONE,
///     annual_hours: Decimal::from(1976),
///     gross_annual_wage: Decimal::from(39520),
/// };
/// let settings = ValidationSettings::default();
/// assert!(validate_employee(&employee, &settings).is_ok());
///
/// employee.total_hourly_wage = Decimal::from(25);
/// assert!(matches!(
///     validate_employee(&employee, &settings),
///     Err(EngineError::InvalidEmployee { .. })
/// ));
/// ```
pub fn validate_employee(employee: &Employee, settings: &ValidationSettings) -> EngineResult<()> {
    let invalid = |field: &str, message: String| EngineError::InvalidEmployee {
        employee_id: employee.id.clone(),
        field: field.to_string(),
        message,
    };

    if employee.id.trim().is_empty() {
        return Err(invalid("id", "must not be empty".to_string()));
    }

    let non_negative = [
        ("baseHourlyWage", employee.base_hourly_wage),
        ("variableHourlyComponent", employee.variable_hourly_component),
        ("totalHourlyWage", employee.total_hourly_wage),
        ("annualHours", employee.annual_hours),
        ("grossAnnualWage", employee.gross_annual_wage),
    ];
    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(invalid(field, format!("must not be negative, got {}", value)));
        }
    }

    let upper_bounds = [
        ("baseHourlyWage", employee.base_hourly_wage, settings.max_hourly_wage),
        (
            "variableHourlyComponent",
            employee.variable_hourly_component,
            settings.max_hourly_wage,
        ),
        ("totalHourlyWage", employee.total_hourly_wage, settings.max_hourly_wage),
        ("annualHours", employee.annual_hours, settings.max_annual_hours),
        (
            "grossAnnualWage",
            employee.gross_annual_wage,
            settings.max_gross_annual_wage,
        ),
    ];
    for (field, value, max) in upper_bounds {
        if value > max {
            return Err(invalid(field, format!("must not exceed {}, got {}", max, value)));
        }
    }

    let expected_total = employee.base_hourly_wage + employee.variable_hourly_component;
    if (employee.total_hourly_wage - expected_total).abs() > settings.total_wage_tolerance {
        return Err(invalid(
            "totalHourlyWage",
            format!(
                "{} does not equal base {} plus variable {}",
                employee.total_hourly_wage,
                employee.base_hourly_wage,
                employee.variable_hourly_component
            ),
        ));
    }

    if employee.fte <= Decimal::ZERO || employee.fte > Decimal::ONE {
        return Err(invalid(
            "fte",
            format!("must be greater than 0 and at most 1, got {}", employee.fte),
        ));
    }

    Ok(())
}

/// Checks every record and rejects duplicate IDs, stopping at the first problem.
pub fn validate_employees(employees: &[Employee], settings: &ValidationSettings) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for employee in employees {
        validate_employee(employee, settings)?;
        if !seen.insert(employee.id.as_str()) {
            return Err(EngineError::DuplicateEmployee {
                employee_id: employee.id.clone(),
            });
        }
    }
    Ok(())
}

/// Keeps valid records and collects the reasons others were dropped.
///
/// The first record with a given ID is kept; later duplicates are dropped.
pub fn sanitize_employees(
    employees: Vec<Employee>,
    settings: &ValidationSettings,
) -> (Vec<Employee>, Vec<EngineError>) {
    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(employees.len());
    let mut rejected = Vec::new();

    for employee in employees {
        let outcome = validate_employee(&employee, settings).and_then(|()| {
            if seen.contains(&employee.id) {
                Err(EngineError::DuplicateEmployee {
                    employee_id: employee.id.clone(),
                })
            } else {
                Ok(())
            }
        });

        match outcome {
            Ok(()) => {
                seen.insert(employee.id.clone());
                accepted.push(employee);
            }
            Err(err) => {
                warn!(error = %err, "Dropping employee record");
                rejected.push(err);
            }
        }
    }

    (accepted, rejected)
}
