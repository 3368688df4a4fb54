//! Property tests for the analyzer.

use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use pay_gap_engine::analysis::{analyze, gap, mean, median};
use pay_gap_engine::models::{Employee, Gender};

fn cents() -> impl Strategy<Value = Decimal> {
    (0_i64..1_000_000).prop_map(|c| Decimal::new(c, 2))
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Unknown)]
}

fn binary_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn employee_with(gender: impl Strategy<Value = Gender>) -> impl Strategy<Value = Employee> {
    (
        gender,
        cents(),
        prop_oneof![Just(Decimal::ZERO), cents()],
        prop::sample::select(vec!["A", "B", "C"]),
    )
        .prop_map(|(gender, base, variable, category)| {
            let annual_hours = Decimal::from(1976);
            Employee {
                id: String::new(),
                full_name: None,
                gender,
                age: 30,
                job_category: category.to_string(),
                base_hourly_wage: base,
                variable_hourly_component: variable,
                total_hourly_wage: base + variable,
                fte: Decimal::ONE,
                annual_hours,
                gross_annual_wage: (base + variable) * annual_hours,
            }
        })
}

fn workforce(
    gender: impl Strategy<Value = Gender>,
    max: usize,
) -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(employee_with(gender), 0..max).prop_map(|mut employees| {
        for (i, employee) in employees.iter_mut().enumerate() {
            employee.id = format!("E{:03}", i);
        }
        employees
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn mean_lies_between_min_and_max(values in prop::collection::vec(cents(), 1..50)) {
        let m = mean(&values);
        let min = values.iter().copied().min().unwrap();
        let max = values.iter().copied().max().unwrap();
        prop_assert!(min <= m && m <= max, "{} not in [{}, {}]", m, min, max);
    }

    #[test]
    fn median_lies_between_min_and_max(values in prop::collection::vec(cents(), 1..50)) {
        let m = median(&values);
        let min = values.iter().copied().min().unwrap();
        let max = values.iter().copied().max().unwrap();
        prop_assert!(min <= m && m <= max);
    }

    #[test]
    fn gap_is_zero_when_men_earn_nothing(women in cents()) {
        prop_assert_eq!(gap(Decimal::ZERO, women), Decimal::ZERO);
    }

    #[test]
    fn quartile_counts_cover_every_employee(employees in workforce(binary_gender(), 60)) {
        let report = analyze(&employees);
        let counted: usize = report
            .quartiles
            .iter()
            .map(|q| q.male_count + q.female_count)
            .sum();
        prop_assert_eq!(report.quartiles.len(), 4);
        prop_assert_eq!(counted, employees.len());
    }

    #[test]
    fn gender_counts_never_exceed_total(employees in workforce(gender(), 60)) {
        let report = analyze(&employees);
        prop_assert_eq!(report.total_employees, employees.len());
        prop_assert!(report.male_count + report.female_count <= report.total_employees);
    }

    #[test]
    fn analysis_is_idempotent(employees in workforce(gender(), 40)) {
        prop_assert_eq!(analyze(&employees), analyze(&employees));
    }

    #[test]
    fn participation_is_a_percentage(employees in workforce(gender(), 40)) {
        let report = analyze(&employees);
        let hundred = Decimal::from(100);
        for share in [
            report.percent_receiving_variable_male,
            report.percent_receiving_variable_female,
        ] {
            prop_assert!(share >= Decimal::ZERO && share <= hundred);
        }
    }

    #[test]
    fn comparable_categories_have_every_gap(employees in workforce(gender(), 40)) {
        let report = analyze(&employees);
        let mut names: Vec<&str> = report.category_gaps.iter().map(|c| c.category.as_str()).collect();
        let sorted = {
            let mut sorted = names.clone();
            sorted.sort();
            sorted
        };
        prop_assert_eq!(&names, &sorted);
        names.dedup();
        prop_assert_eq!(names.len(), report.category_gaps.len());

        for category in &report.category_gaps {
            let all = category.mean_gap_base.is_some()
                && category.mean_gap_total.is_some()
                && category.mean_gap_variable.is_some();
            let none = category.mean_gap_base.is_none()
                && category.mean_gap_total.is_none()
                && category.mean_gap_variable.is_none();
            prop_assert!(all || none);
        }
    }
}
