use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Employee record - ids are assigned by the store
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub payroll: f64,
}

// Request body for create and full-replace update
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub payroll: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
}

// Employee with the projects linked through the association table.
// The employee fields are flattened so the response reads as one record.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmployeeWithProjects {
    #[serde(flatten)]
    pub employee: Employee,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProjectWithEmployees {
    #[serde(flatten)]
    pub project: Project,
    pub employees: Vec<Employee>,
}
