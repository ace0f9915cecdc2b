//! Dataset planning
//!
//! Draws every random value up front so the write step is a plain sequence
//! of inserts and a seeded RNG yields a reproducible dataset.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::SliceRandom;
use shared::models::{
    AttendanceCreate, AttendanceStatus, DepartmentCreate, EmployeeCreate, PaymentMethod,
    PerformanceCreate, SalaryCreate,
};
use std::collections::HashSet;

/// Departments (re)created on every run
pub const DEPARTMENT_NAMES: [&str; 5] = ["Engineering", "Marketing", "Sales", "Finance", "HR"];
pub const EMPLOYEE_COUNT: usize = 5;
/// Consecutive days of attendance ending today
pub const ATTENDANCE_DAYS: i64 = 5;

const MIN_AGE_YEARS: u32 = 25;
const MAX_AGE_YEARS: u32 = 50;
const TENURE_YEARS: u32 = 5;
const REVIEW_WINDOW_DAYS: i64 = 365;
const EMAIL_ATTEMPTS: usize = 8;

#[derive(Debug, Clone)]
pub struct PlannedAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub remarks: String,
}

impl PlannedAttendance {
    pub fn to_create(&self, employee_id: i64) -> AttendanceCreate {
        AttendanceCreate {
            employee_id,
            date: self.date,
            status: self.status,
            check_in_time: Some(self.check_in_time),
            check_out_time: Some(self.check_out_time),
            remarks: Some(self.remarks.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannedReview {
    pub review_date: NaiveDate,
    pub reviewer: String,
    pub rating: i64,
    pub comments: String,
}

impl PlannedReview {
    pub fn to_create(&self, employee_id: i64) -> PerformanceCreate {
        PerformanceCreate {
            employee_id,
            review_date: self.review_date,
            reviewer: Some(self.reviewer.clone()),
            rating: self.rating,
            comments: Some(self.comments.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannedSalary {
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl PlannedSalary {
    pub fn to_create(&self, employee_id: i64) -> SalaryCreate {
        SalaryCreate {
            employee_id,
            base_salary: self.base_salary,
            bonus: self.bonus,
            deductions: self.deductions,
            payment_date: self.payment_date,
            payment_method: self.payment_method,
        }
    }
}

/// One employee plus everything that hangs off them
#[derive(Debug, Clone)]
pub struct PlannedEmployee {
    /// Index into [`DatasetPlan::departments`]
    pub department_index: usize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub date_joined: NaiveDate,
    pub attendance: Vec<PlannedAttendance>,
    pub review: PlannedReview,
    pub salary: PlannedSalary,
}

impl PlannedEmployee {
    pub fn to_create(&self, department_id: i64) -> EmployeeCreate {
        EmployeeCreate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
            date_of_birth: Some(self.date_of_birth),
            date_joined: Some(self.date_joined),
            department_id: Some(department_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetPlan {
    pub departments: Vec<DepartmentCreate>,
    pub employees: Vec<PlannedEmployee>,
}

/// Uniform date in `[from, to]`
fn date_between<R: Rng + ?Sized>(rng: &mut R, from: NaiveDate, to: NaiveDate) -> NaiveDate {
    let span = (to - from).num_days().max(0);
    from + Duration::days(rng.gen_range(0..=span))
}

fn time_between<R: Rng + ?Sized>(rng: &mut R, from_hour: u32, to_hour: u32) -> NaiveTime {
    let secs = rng.gen_range(from_hour * 3600..to_hour * 3600);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
}

fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

fn unique_email<R: Rng + ?Sized>(rng: &mut R, taken: &mut HashSet<String>, index: usize) -> String {
    for _ in 0..EMAIL_ATTEMPTS {
        let email: String = SafeEmail().fake_with_rng(rng);
        if taken.insert(email.clone()) {
            return email;
        }
    }
    let email = format!("employee{index}.{}", SafeEmail().fake_with_rng::<String, _>(rng));
    taken.insert(email.clone());
    email
}

impl DatasetPlan {
    /// Draw a full dataset relative to `today`
    pub fn build<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        let departments = DEPARTMENT_NAMES
            .iter()
            .map(|name| DepartmentCreate {
                name: (*name).to_string(),
                location: Some(CityName().fake_with_rng(rng)),
                manager: Some(Name().fake_with_rng(rng)),
            })
            .collect::<Vec<_>>();

        let month_start = today.with_day(1).unwrap_or(today);
        let mut taken = HashSet::new();

        let employees = (0..EMPLOYEE_COUNT)
            .map(|i| {
                let attendance = (0..ATTENDANCE_DAYS)
                    .map(|offset| PlannedAttendance {
                        date: today - Duration::days(offset),
                        status: *AttendanceStatus::ALL
                            .choose(rng)
                            .unwrap_or(&AttendanceStatus::Present),
                        check_in_time: time_between(rng, 7, 11),
                        check_out_time: time_between(rng, 15, 20),
                        remarks: Sentence(6..7).fake_with_rng(rng),
                    })
                    .collect();

                PlannedEmployee {
                    department_index: rng.gen_range(0..departments.len()),
                    first_name: FirstName().fake_with_rng(rng),
                    last_name: LastName().fake_with_rng(rng),
                    email: unique_email(rng, &mut taken, i),
                    phone: PhoneNumber().fake_with_rng(rng),
                    date_of_birth: date_between(
                        rng,
                        years_before(today, MAX_AGE_YEARS),
                        years_before(today, MIN_AGE_YEARS),
                    ),
                    date_joined: date_between(rng, years_before(today, TENURE_YEARS), today),
                    attendance,
                    review: PlannedReview {
                        review_date: date_between(
                            rng,
                            today - Duration::days(REVIEW_WINDOW_DAYS),
                            today,
                        ),
                        reviewer: Name().fake_with_rng(rng),
                        rating: rng.gen_range(1..=5),
                        comments: Sentence(10..11).fake_with_rng(rng),
                    },
                    salary: PlannedSalary {
                        base_salary: rng.gen_range(50_000.0..120_000.0),
                        bonus: rng.gen_range(5_000.0..15_000.0),
                        deductions: rng.gen_range(1_000.0..5_000.0),
                        payment_date: date_between(rng, month_start, today),
                        payment_method: *PaymentMethod::ALL
                            .choose(rng)
                            .unwrap_or(&PaymentMethod::BankTransfer),
                    },
                }
            })
            .collect();

        Self {
            departments,
            employees,
        }
    }

    pub fn attendance_count(&self) -> usize {
        self.employees.iter().map(|e| e.attendance.len()).sum()
    }
}
