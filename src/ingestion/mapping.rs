//! Mapping of raw payroll records into analyzer input.
//!
//! Joins each employee master record with its current salary and
//! organization records, resolves the job category through the job title
//! catalogue and derives hourly, annual and gross figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::analysis::{MONEY_DECIMAL_PLACES, round_to};
use crate::config::IngestionSettings;
use crate::models::{Employee, Gender};

use super::dates::{age_on, parse_optional_date};
use super::latest_record::latest_by_employee;
use super::payroll::{JobTitle, OrganizationRecord, PayrollExtract, RawEmployee, SalaryRecord};

/// Weeks per year used to annualize weekly hours.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Normalizes a raw upstream gender code.
///
/// `M` maps to male, `V` (Dutch *vrouw*) and `F` map to female; anything
/// else, including a missing value, is [`Gender::Unknown`].
///
/// # Examples
///
/// ```
/// use pay_gap_engine::ingestion::normalize_gender;
/// use pay_gap_engine::models::Gender;
///
/// assert_eq!(normalize_gender(Some("M")), Gender::Male);
/// assert_eq!(normalize_gender(Some(" v ")), Gender::Female);
/// assert_eq!(normalize_gender(Some("X")), Gender::Unknown);
/// assert_eq!(normalize_gender(None), Gender::Unknown);
/// ```
pub fn normalize_gender(raw: Option<&str>) -> Gender {
    match raw.map(|g| g.trim().to_ascii_uppercase()).as_deref() {
        Some("M") => Gender::Male,
        Some("V") | Some("F") => Gender::Female,
        _ => Gender::Unknown,
    }
}

/// Maps every employee of an extract into an analyzer [`Employee`].
///
/// Employees without salary records get a zero wage; employees without an
/// organization record get the configured fallback category. Ages are
/// computed on `as_of`.
pub fn map_payroll_extract(
    extract: &PayrollExtract,
    settings: &IngestionSettings,
    as_of: NaiveDate,
) -> Vec<Employee> {
    let salaries = latest_by_employee(&extract.salaries);
    let organizations = latest_by_employee(&extract.organizations);

    let employees: Vec<Employee> = extract
        .employees
        .iter()
        .map(|raw| {
            let salary = salaries.get(raw.id.as_str()).copied();
            if salary.is_none() {
                warn!(employee_id = %raw.id, "No salary record, hourly wage defaults to zero");
            }
            let organization = organizations.get(raw.id.as_str()).copied();
            map_employee(
                raw,
                salary,
                organization,
                &extract.job_titles,
                settings,
                as_of,
            )
        })
        .collect();

    debug!(
        employees = employees.len(),
        salaries = extract.salaries.len(),
        organizations = extract.organizations.len(),
        job_titles = extract.job_titles.len(),
        "Mapped payroll extract"
    );

    employees
}

/// Maps one employee given its already-selected current records.
pub fn map_employee(
    raw: &RawEmployee,
    salary: Option<&SalaryRecord>,
    organization: Option<&OrganizationRecord>,
    job_titles: &[JobTitle],
    settings: &IngestionSettings,
    as_of: NaiveDate,
) -> Employee {
    let base_hourly_wage = round_to(hourly_wage(salary, settings), MONEY_DECIMAL_PLACES);
    let variable_hourly_component = round_to(
        salary
            .and_then(|s| s.variable_hourly_component)
            .unwrap_or(Decimal::ZERO),
        MONEY_DECIMAL_PLACES,
    );
    // Out-of-range figures saturate here and are rejected by validation.
    let total_hourly_wage = base_hourly_wage.saturating_add(variable_hourly_component);

    let fte = round_to(
        salary
            .and_then(|s| non_zero(s.parttime_factor))
            .unwrap_or(settings.default_fte),
        MONEY_DECIMAL_PLACES,
    );
    let weekly_hours = salary
        .and_then(|s| non_zero(s.average_hours_per_week))
        .unwrap_or(settings.default_weekly_hours);
    let annual_hours = round_to(
        weekly_hours.saturating_mul(Decimal::from(WEEKS_PER_YEAR)),
        0,
    );

    let age = parse_optional_date(raw.birth_date.as_deref())
        .map(|birth| age_on(birth.date(), as_of))
        .filter(|age| *age > 0)
        .unwrap_or(settings.default_age);

    Employee {
        id: non_empty(&raw.code).unwrap_or(&raw.id).to_string(),
        full_name: Some(display_name(raw, settings)),
        gender: normalize_gender(raw.gender.as_deref()),
        age,
        job_category: resolve_job_category(organization, job_titles, settings),
        base_hourly_wage,
        variable_hourly_component,
        total_hourly_wage,
        fte,
        annual_hours,
        gross_annual_wage: round_to(
            total_hourly_wage.saturating_mul(annual_hours),
            MONEY_DECIMAL_PLACES,
        ),
    }
}

/// Resolves the reporting category for an organization record.
///
/// The job title is looked up by code when the record carries one, or by ID
/// otherwise. Its job group description wins, then the record's own job
/// title description, then the configured fallback.
pub fn resolve_job_category(
    organization: Option<&OrganizationRecord>,
    job_titles: &[JobTitle],
    settings: &IngestionSettings,
) -> String {
    let Some(organization) = organization else {
        return settings.fallback_category.clone();
    };

    let code = non_empty(&organization.job_title_code);
    let job_title = job_titles.iter().find(|title| {
        code.is_some_and(|code| title.code.as_deref() == Some(code))
            || organization.job_title.as_deref() == Some(title.id.as_str())
    });

    job_title
        .and_then(|title| non_empty(&title.job_group_description))
        .or_else(|| non_empty(&organization.job_title_description))
        .unwrap_or(&settings.fallback_category)
        .to_string()
}

/// Hourly wage from a salary record, falling back to a monthly amount.
fn hourly_wage(salary: Option<&SalaryRecord>, settings: &IngestionSettings) -> Decimal {
    let Some(salary) = salary else {
        return Decimal::ZERO;
    };
    if let Some(hourly) = non_zero(salary.hourly_wage) {
        return hourly;
    }

    let monthly = non_zero(salary.parttime_amount)
        .or_else(|| non_zero(salary.fulltime_amount))
        .unwrap_or(Decimal::ZERO);
    if monthly > Decimal::ZERO && !settings.monthly_hours_divisor.is_zero() {
        monthly
            .checked_div(settings.monthly_hours_divisor)
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}

fn display_name(raw: &RawEmployee, settings: &IngestionSettings) -> String {
    if let Some(full_name) = non_empty(&raw.full_name) {
        return full_name.to_string();
    }
    match (non_empty(&raw.first_name), non_empty(&raw.last_name)) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        _ => non_empty(&raw.code)
            .unwrap_or(&settings.fallback_name)
            .to_string(),
    }
}

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn raw_employee(id: &str, gender: &str) -> RawEmployee {
        RawEmployee {
            id: id.to_string(),
            code: Some(format!("C-{}", id)),
            first_name: Some("Sam".to_string()),
            last_name: Some("Bakker".to_string()),
            full_name: None,
            birth_date: Some("1990-01-15".to_string()),
            gender: Some(gender.to_string()),
        }
    }

    fn salary(employee: &str, hourly: &str) -> SalaryRecord {
        SalaryRecord {
            employee: employee.to_string(),
            hourly_wage: Some(dec(hourly)),
            average_hours_per_week: Some(dec("40")),
            parttime_factor: Some(dec("1")),
            start_date: Some("2020-01-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(normalize_gender(Some("m")), Gender::Male);
        assert_eq!(normalize_gender(Some("F")), Gender::Female);
        assert_eq!(normalize_gender(Some("V")), Gender::Female);
        assert_eq!(normalize_gender(Some("")), Gender::Unknown);
        assert_eq!(normalize_gender(Some("O")), Gender::Unknown);
    }

    #[test]
    fn test_map_employee_with_hourly_wage() {
        let settings = IngestionSettings::default();
        let raw = raw_employee("g1", "M");
        let mut salary = salary("g1", "22.456");
        salary.variable_hourly_component = Some(dec("1.50"));

        let employee = map_employee(&raw, Some(&salary), None, &[], &settings, as_of());

        assert_eq!(employee.id, "C-g1");
        assert_eq!(employee.full_name.as_deref(), Some("Sam Bakker"));
        assert_eq!(employee.gender, Gender::Male);
        assert_eq!(employee.age, 34);
        assert_eq!(employee.base_hourly_wage, dec("22.46"));
        assert_eq!(employee.variable_hourly_component, dec("1.50"));
        assert_eq!(employee.total_hourly_wage, dec("23.96"));
        assert_eq!(employee.annual_hours, dec("2080"));
        assert_eq!(employee.gross_annual_wage, dec("49836.80"));
        assert_eq!(employee.job_category, "Other");
    }

    #[test]
    fn test_monthly_amount_fallback() {
        let settings = IngestionSettings::default();
        let raw = raw_employee("g1", "V");
        let salary = SalaryRecord {
            employee: "g1".to_string(),
            hourly_wage: Some(Decimal::ZERO),
            fulltime_amount: Some(dec("3466.60")),
            ..Default::default()
        };

        let employee = map_employee(&raw, Some(&salary), None, &[], &settings, as_of());

        // 3466.60 / 173.33 = 20.00
        assert_eq!(employee.base_hourly_wage, dec("20.00"));
        assert_eq!(employee.variable_hourly_component, Decimal::ZERO);
        // Defaults: 38 h/week, FTE 1.
        assert_eq!(employee.annual_hours, dec("1976"));
        assert_eq!(employee.fte, Decimal::ONE);
    }

    #[test]
    fn test_parttime_amount_preferred_over_fulltime() {
        let settings = IngestionSettings::default();
        let salary = SalaryRecord {
            employee: "g1".to_string(),
            parttime_amount: Some(dec("1733.30")),
            fulltime_amount: Some(dec("3466.60")),
            ..Default::default()
        };

        assert_eq!(hourly_wage(Some(&salary), &settings), dec("10"));
    }

    #[test]
    fn test_missing_salary_yields_zero_wage() {
        let settings = IngestionSettings::default();
        let raw = raw_employee("g1", "M");

        let employee = map_employee(&raw, None, None, &[], &settings, as_of());

        assert_eq!(employee.base_hourly_wage, Decimal::ZERO);
        assert_eq!(employee.total_hourly_wage, Decimal::ZERO);
        assert_eq!(employee.gross_annual_wage, Decimal::ZERO);
    }

    #[test]
    fn test_missing_birth_date_uses_default_age() {
        let settings = IngestionSettings::default();
        let mut raw = raw_employee("g1", "M");
        raw.birth_date = None;

        let employee = map_employee(&raw, None, None, &[], &settings, as_of());

        assert_eq!(employee.age, 30);
    }

    #[test]
    fn test_display_name_precedence() {
        let settings = IngestionSettings::default();
        let mut raw = raw_employee("g1", "M");
        raw.full_name = Some("Samuel Bakker".to_string());
        assert_eq!(display_name(&raw, &settings), "Samuel Bakker");

        raw.full_name = None;
        raw.last_name = None;
        assert_eq!(display_name(&raw, &settings), "C-g1");

        raw.code = None;
        assert_eq!(display_name(&raw, &settings), "Employee");
    }

    #[test]
    fn test_id_falls_back_to_upstream_id() {
        let settings = IngestionSettings::default();
        let mut raw = raw_employee("g1", "M");
        raw.code = Some("  ".to_string());

        let employee = map_employee(&raw, None, None, &[], &settings, as_of());

        assert_eq!(employee.id, "g1");
    }

    #[test]
    fn test_job_category_by_code_then_group() {
        let settings = IngestionSettings::default();
        let titles = vec![JobTitle {
            id: "jt-1".to_string(),
            code: Some("FIN01".to_string()),
            description: Some("Accountant".to_string()),
            job_group: Some("jg-1".to_string()),
            job_group_description: Some("Finance".to_string()),
        }];
        let organization = OrganizationRecord {
            employee: "g1".to_string(),
            job_title: Some("unrelated".to_string()),
            job_title_code: Some("FIN01".to_string()),
            job_title_description: Some("Senior Accountant".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_job_category(Some(&organization), &titles, &settings),
            "Finance"
        );
    }

    #[test]
    fn test_job_category_by_id_when_no_code() {
        let settings = IngestionSettings::default();
        let titles = vec![JobTitle {
            id: "jt-2".to_string(),
            job_group_description: Some("Logistics".to_string()),
            ..Default::default()
        }];
        let organization = OrganizationRecord {
            employee: "g1".to_string(),
            job_title: Some("jt-2".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_job_category(Some(&organization), &titles, &settings),
            "Logistics"
        );
    }

    #[test]
    fn test_job_category_falls_back_to_description_then_default() {
        let settings = IngestionSettings::default();
        let mut organization = OrganizationRecord {
            employee: "g1".to_string(),
            job_title_code: Some("NONE".to_string()),
            job_title_description: Some("Receptionist".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_job_category(Some(&organization), &[], &settings),
            "Receptionist"
        );

        organization.job_title_description = None;
        assert_eq!(
            resolve_job_category(Some(&organization), &[], &settings),
            "Other"
        );
        assert_eq!(resolve_job_category(None, &[], &settings), "Other");
    }

    #[test]
    fn test_map_extract_uses_latest_records() {
        let settings = IngestionSettings::default();
        let mut old_salary = salary("g1", "15");
        old_salary.end_date = Some("2021-12-31".to_string());
        let new_salary = salary("g1", "18");
        let extract = PayrollExtract {
            employees: vec![raw_employee("g1", "V"), raw_employee("g2", "M")],
            salaries: vec![new_salary, old_salary, salary("g2", "21")],
            ..Default::default()
        };

        let employees = map_payroll_extract(&extract, &settings, as_of());

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, "C-g1");
        assert_eq!(employees[0].base_hourly_wage, dec("18"));
        assert_eq!(employees[1].base_hourly_wage, dec("21"));
    }

    #[test]
    fn test_missing_variable_component_is_zero_not_synthesized() {
        let settings = IngestionSettings::default();
        let extract = PayrollExtract {
            employees: vec![
                raw_employee("g1", "M"),
                raw_employee("g2", "V"),
                raw_employee("g3", "M"),
            ],
            salaries: vec![
                salary("g1", "19.50"),
                salary("g2", "23.10"),
                SalaryRecord {
                    employee: "g3".to_string(),
                    fulltime_amount: Some(dec("3466.60")),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        for _ in 0..3 {
            let employees = map_payroll_extract(&extract, &settings, as_of());
            assert_eq!(employees.len(), 3);
            for employee in &employees {
                assert_eq!(employee.variable_hourly_component, Decimal::ZERO);
                assert!(!employee.receives_variable_pay());
                assert_eq!(employee.total_hourly_wage, employee.base_hourly_wage);
            }
        }
    }

    #[test]
    fn test_out_of_range_salary_saturates_instead_of_panicking() {
        let settings = IngestionSettings::default();
        let mut salary = salary("g1", "50000000000000000000000000000");
        salary.variable_hourly_component = Some(dec("50000000000000000000000000000"));
        salary.average_hours_per_week = Some(dec("50000000000000000000000000000"));

        let employee = map_employee(
            &raw_employee("g1", "M"),
            Some(&salary),
            None,
            &[],
            &settings,
            as_of(),
        );

        assert_eq!(employee.total_hourly_wage, Decimal::MAX);
        assert_eq!(employee.annual_hours, Decimal::MAX);
        assert_eq!(employee.gross_annual_wage, Decimal::MAX);
    }

    #[test]
    fn test_mapped_records_keep_total_invariant() {
        let settings = IngestionSettings::default();
        let mut salary = salary("g1", "19.999");
        salary.variable_hourly_component = Some(dec("3.333"));

        let employee = map_employee(
            &raw_employee("g1", "V"),
            Some(&salary),
            None,
            &[],
            &settings,
            as_of(),
        );

        assert_eq!(
            employee.total_hourly_wage,
            employee.base_hourly_wage + employee.variable_hourly_component
        );
    }
}
