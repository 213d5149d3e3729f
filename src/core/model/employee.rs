use super::{document::DocumentCategory, timesheet::Timesheet};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, NoneAsEmptyString};
use std::sync::LazyLock;
use validify::{schema_err, schema_validation, Validate, ValidationErrors};

/// Minimum age of an employee at the time the record is saved.
pub const MIN_AGE: i32 = 18;
/// Minimum yearly salary.
pub const MIN_SALARY: f64 = 30_000.;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("valid phone regex"));

/// Main model for the `employees` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Primary key.
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub job_title: String,
    pub department: String,
    pub salary: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    /// Public path of the employee photo.
    pub photo_path: Option<String>,

    /// Public path of the employee CV.
    pub cv_path: Option<String>,

    /// Public path of the employee ID document.
    pub id_document_path: Option<String>,
}

impl Employee {
    /// The stored path for the given document category, if any.
    pub fn document(&self, category: DocumentCategory) -> Option<&str> {
        match category {
            DocumentCategory::Photo => self.photo_path.as_deref(),
            DocumentCategory::Cv => self.cv_path.as_deref(),
            DocumentCategory::IdDoc => self.id_document_path.as_deref(),
        }
    }
}

/// Minimal employee info used to populate selection lists.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOption {
    pub id: i32,
    pub full_name: String,
}

/// An employee along with their most recent timesheets.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub timesheets: Vec<Timesheet>,
}

/// The fixed set of departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Department {
    Engineering,
    Product,
    Design,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Product => "Product",
            Self::Design => "Design",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Hr => "HR",
            Self::Finance => "Finance",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employee fields as submitted through the create and update forms.
/// Form values arrive as strings, hence the `serde_as` conversions.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[validate(Self::validate_schema)]
pub struct EmployeeInsert {
    #[validate(length(min = 1))]
    pub full_name: String,

    pub email: String,

    pub phone: String,

    #[serde_as(as = "DisplayFromStr")]
    pub date_of_birth: NaiveDate,

    #[validate(length(min = 1))]
    pub job_title: String,

    pub department: Department,

    #[serde_as(as = "DisplayFromStr")]
    pub salary: f64,

    #[serde_as(as = "DisplayFromStr")]
    pub start_date: NaiveDate,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EmployeeInsert {
    #[schema_validation]
    fn validate_schema(&self) -> Result<(), ValidationErrors> {
        if !EMAIL.is_match(&self.email) {
            schema_err!("email", "Invalid email address");
        }
        if !PHONE.is_match(&self.phone) {
            schema_err!("phone", "Invalid phone number format");
        }
        if age_on(self.date_of_birth, Local::now().date_naive()) < MIN_AGE {
            schema_err!("date_of_birth", "Employee must be at least 18 years old");
        }
        if !self.salary.is_finite() || self.salary < MIN_SALARY {
            schema_err!("salary", "Salary must be at least $30,000");
        }
        if self.end_date.is_some_and(|end| end < self.start_date) {
            schema_err!("end_date", "End date cannot be before the start date");
        }
    }
}

/// Full calendar years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::{age_on, Department, EmployeeInsert};
    use chrono::NaiveDate;
    use validify::Validate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid() -> EmployeeInsert {
        EmployeeInsert {
            full_name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date_of_birth: date(1990, 1, 15),
            job_title: "Senior Developer".to_string(),
            department: Department::Engineering,
            salary: 95_000.,
            start_date: date(2020, 3, 1),
            end_date: None,
        }
    }

    #[test]
    fn age_counts_full_years() {
        assert_eq!(18, age_on(date(2000, 6, 15), date(2018, 6, 15)));
        assert_eq!(17, age_on(date(2000, 6, 15), date(2018, 6, 14)));
        assert_eq!(17, age_on(date(2000, 6, 15), date(2018, 5, 30)));
        assert_eq!(18, age_on(date(2000, 6, 15), date(2018, 7, 1)));
    }

    #[test]
    fn valid_employee_passes() {
        valid().validate().unwrap();
    }

    #[test]
    fn underage_employee_is_rejected() {
        let mut employee = valid();
        employee.date_of_birth = chrono::Local::now().date_naive();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn low_salary_is_rejected() {
        let mut employee = valid();
        employee.salary = 29_999.99;
        assert!(employee.validate().is_err());

        employee.salary = 30_000.;
        employee.validate().unwrap();
    }

    #[test]
    fn non_finite_salary_is_rejected() {
        for salary in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut employee = valid();
            employee.salary = salary;
            assert!(employee.validate().is_err());
        }
    }

    #[test]
    fn malformed_contact_info_is_rejected() {
        let mut employee = valid();
        employee.email = "john.doe@company".to_string();
        assert!(employee.validate().is_err());

        let mut employee = valid();
        employee.phone = "call me maybe".to_string();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut employee = valid();
        employee.full_name = String::new();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let mut employee = valid();
        employee.end_date = Some(date(2019, 1, 1));
        assert!(employee.validate().is_err());
    }

    #[test]
    fn decodes_from_string_form_fields() {
        let fields = serde_json::json!({
            "full_name": "Jane Smith",
            "email": "jane.smith@company.com",
            "phone": "+1 (555) 234-5678",
            "date_of_birth": "1988-07-22",
            "job_title": "Product Manager",
            "department": "HR",
            "salary": "105000.00",
            "start_date": "2019-06-15",
            "end_date": ""
        });

        let employee: EmployeeInsert = serde_json::from_value(fields).unwrap();

        assert_eq!(Department::Hr, employee.department);
        assert_eq!(105_000., employee.salary);
        assert_eq!(date(1988, 7, 22), employee.date_of_birth);
        assert!(employee.end_date.is_none());
    }

    #[test]
    fn unknown_department_fails_to_decode() {
        let fields = serde_json::json!({
            "full_name": "Jane Smith",
            "email": "jane.smith@company.com",
            "phone": "555",
            "date_of_birth": "1988-07-22",
            "job_title": "Product Manager",
            "department": "Legal",
            "salary": "105000",
            "start_date": "2019-06-15"
        });

        assert!(serde_json::from_value::<EmployeeInsert>(fields).is_err());
    }
}
