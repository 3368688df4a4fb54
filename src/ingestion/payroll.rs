//! Raw payroll and HR records as delivered by the upstream accounting API.
//!
//! Records keep the upstream PascalCase field names so an extract can be
//! forwarded without reshaping. Dates stay raw strings and are parsed on
//! demand by [`parse_record_date`](super::parse_record_date).

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dates::parse_optional_date;
use super::latest_record::DatedRecord;

/// A payroll employee master record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEmployee {
    /// Upstream identifier (a GUID).
    #[serde(rename = "ID")]
    pub id: String,
    /// Human-facing employee code.
    #[serde(default)]
    pub code: Option<String>,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Full display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Birth date, raw.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Raw gender code (`M`, `V`, `F`, ...).
    #[serde(default)]
    pub gender: Option<String>,
}

/// An employment salary record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalaryRecord {
    /// Upstream ID of the employee.
    pub employee: String,
    /// Monthly amount for a full-time position.
    #[serde(default)]
    pub fulltime_amount: Option<Decimal>,
    /// Monthly amount for the contracted part-time position.
    #[serde(default)]
    pub parttime_amount: Option<Decimal>,
    /// Contracted average weekly hours.
    #[serde(default)]
    pub average_hours_per_week: Option<Decimal>,
    /// Hourly wage, when recorded directly.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// Part-time factor (FTE).
    #[serde(default)]
    pub parttime_factor: Option<Decimal>,
    /// Variable pay expressed per hour (bonuses, allowances).
    #[serde(default)]
    pub variable_hourly_component: Option<Decimal>,
    /// Start date, raw.
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date, raw; absent while the record is active.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DatedRecord for SalaryRecord {
    fn employee_id(&self) -> &str {
        &self.employee
    }

    fn start_date(&self) -> Option<NaiveDateTime> {
        parse_optional_date(self.start_date.as_deref())
    }

    fn end_date(&self) -> Option<NaiveDateTime> {
        parse_optional_date(self.end_date.as_deref())
    }

    fn has_end_date(&self) -> bool {
        has_text(self.end_date.as_deref())
    }
}

/// An employment organization record linking an employee to a job title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationRecord {
    /// Upstream ID of the employee.
    pub employee: String,
    /// Upstream ID of the job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Code of the job title.
    #[serde(default)]
    pub job_title_code: Option<String>,
    /// Description of the job title.
    #[serde(default)]
    pub job_title_description: Option<String>,
    /// Start date, raw.
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date, raw; absent while the record is active.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DatedRecord for OrganizationRecord {
    fn employee_id(&self) -> &str {
        &self.employee
    }

    fn start_date(&self) -> Option<NaiveDateTime> {
        parse_optional_date(self.start_date.as_deref())
    }

    fn end_date(&self) -> Option<NaiveDateTime> {
        parse_optional_date(self.end_date.as_deref())
    }

    fn has_end_date(&self) -> bool {
        has_text(self.end_date.as_deref())
    }
}

fn has_text(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.trim().is_empty())
}

/// A job title and the job group it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobTitle {
    /// Upstream identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Job title code.
    #[serde(default)]
    pub code: Option<String>,
    /// Job title description.
    #[serde(default)]
    pub description: Option<String>,
    /// Upstream ID of the job group.
    #[serde(default)]
    pub job_group: Option<String>,
    /// Description of the job group, used as the reporting category.
    #[serde(default)]
    pub job_group_description: Option<String>,
}

/// Everything fetched from the payroll API for one division.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollExtract {
    /// Employee master records.
    #[serde(default)]
    pub employees: Vec<RawEmployee>,
    /// Salary history.
    #[serde(default)]
    pub salaries: Vec<SalaryRecord>,
    /// Organization (job title) history.
    #[serde(default)]
    pub organizations: Vec<OrganizationRecord>,
    /// Job title catalogue.
    #[serde(default)]
    pub job_titles: Vec<JobTitle>,
    /// Reference date for ages; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_upstream_records() {
        let json = r#"{
            "employees": [
                {"ID": "guid-1", "Code": "1001", "FirstName": "Anna", "LastName": "de Vries",
                 "BirthDate": "/Date(631152000000)/", "Gender": "V"}
            ],
            "salaries": [
                {"Employee": "guid-1", "HourlyWage": 24.15, "AverageHoursPerWeek": 32,
                 "ParttimeFactor": 0.84, "StartDate": "/Date(1577836800000)/", "EndDate": null}
            ],
            "organizations": [
                {"Employee": "guid-1", "JobTitle": "jt-1", "JobTitleCode": "FIN01",
                 "JobTitleDescription": "Accountant"}
            ],
            "jobTitles": [
                {"ID": "jt-1", "Code": "FIN01", "Description": "Accountant",
                 "JobGroupDescription": "Finance"}
            ],
            "asOf": "2024-06-30"
        }"#;

        let extract: PayrollExtract = serde_json::from_str(json).unwrap();

        assert_eq!(extract.employees[0].code.as_deref(), Some("1001"));
        assert_eq!(extract.employees[0].gender.as_deref(), Some("V"));
        assert_eq!(
            extract.salaries[0].hourly_wage,
            Some(Decimal::from_str("24.15").unwrap())
        );
        assert_eq!(extract.salaries[0].end_date, None);
        assert_eq!(
            extract.job_titles[0].job_group_description.as_deref(),
            Some("Finance")
        );
        assert_eq!(extract.as_of, NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let extract: PayrollExtract = serde_json::from_str("{}").unwrap();
        assert!(extract.employees.is_empty());
        assert!(extract.salaries.is_empty());
        assert!(extract.as_of.is_none());
    }

    #[test]
    fn test_salary_record_dates_are_parsed() {
        let salary = SalaryRecord {
            employee: "guid-1".to_string(),
            start_date: Some("/Date(1577836800000)/".to_string()),
            end_date: Some("".to_string()),
            ..Default::default()
        };

        assert_eq!(
            salary.start_date().unwrap().date(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(DatedRecord::end_date(&salary), None);
        assert!(!salary.has_end_date());
    }

    #[test]
    fn test_unparseable_end_date_counts_as_present() {
        let organization = OrganizationRecord {
            employee: "guid-1".to_string(),
            end_date: Some("31-12-2023".to_string()),
            ..Default::default()
        };

        assert_eq!(DatedRecord::end_date(&organization), None);
        assert!(organization.has_end_date());
    }
}
