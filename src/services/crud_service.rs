use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::DatabaseConnection;
use crate::models::{
    Employee, EmployeeWithProjects, NewEmployee, NewProject, Project, ProjectWithEmployees,
};

/// CRUD operations trait for the entity tables
#[async_trait]
pub trait CrudService<T, New> {
    /// Insert a new row; the store assigns the id
    async fn create(&self, item: &New) -> Result<T>;

    /// Read a row by its id
    async fn read_by_id(&self, id: i64) -> Result<Option<T>>;

    /// Read a page of rows, ordered by id
    async fn read_many(&self, skip: i64, limit: i64) -> Result<Vec<T>>;

    /// Replace every mutable field of a row by its id
    async fn update(&self, id: i64, item: &New) -> Result<Option<T>>;

    /// Delete a row by its id
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Result of linking an employee and a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    EmployeeMissing(i64),
    ProjectMissing(i64),
}

/// SQLite CRUD implementation for the employees table
pub struct EmployeeCrudService {
    db: DatabaseConnection,
}

impl EmployeeCrudService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Link an employee to a project after verifying both rows exist
    pub async fn link_project(&self, employee_id: i64, project_id: i64) -> Result<LinkOutcome> {
        link(self.db.pool(), employee_id, project_id).await
    }

    /// Fetch an employee together with its linked projects
    pub async fn with_projects(&self, id: i64) -> Result<Option<EmployeeWithProjects>> {
        let Some(employee) = self.read_by_id(id).await? else {
            return Ok(None);
        };

        let projects = sqlx::query_as::<_, Project>(
            "SELECT p.id, p.title, p.description
             FROM projects p
             JOIN employee_projects ep ON ep.project_id = p.id
             WHERE ep.employee_id = ?
             ORDER BY p.id",
        )
        .bind(id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(Some(EmployeeWithProjects { employee, projects }))
    }
}

#[async_trait]
impl CrudService<Employee, NewEmployee> for EmployeeCrudService {
    async fn create(&self, item: &NewEmployee) -> Result<Employee> {
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, email, designation, payroll)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, email, designation, payroll",
        )
        .bind(&item.name)
        .bind(&item.email)
        .bind(&item.designation)
        .bind(item.payroll)
        .fetch_one(self.db.pool())
        .await?;

        Ok(employee)
    }

    async fn read_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, designation, payroll FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(employee)
    }

    async fn read_many(&self, skip: i64, limit: i64) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, designation, payroll
             FROM employees ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.db.pool())
        .await?;

        Ok(employees)
    }

    async fn update(&self, id: i64, item: &NewEmployee) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "UPDATE employees SET name = ?, email = ?, designation = ?, payroll = ?
             WHERE id = ?
             RETURNING id, name, email, designation, payroll",
        )
        .bind(&item.name)
        .bind(&item.email)
        .bind(&item.designation)
        .bind(item.payroll)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(employee)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// SQLite CRUD implementation for the projects table
pub struct ProjectCrudService {
    db: DatabaseConnection,
}

impl ProjectCrudService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Link an employee to a project; same operation as
    /// `EmployeeCrudService::link_project`, entered from the project side
    pub async fn assign_employee(&self, project_id: i64, employee_id: i64) -> Result<LinkOutcome> {
        link(self.db.pool(), employee_id, project_id).await
    }

    /// Fetch a project together with its linked employees
    pub async fn with_employees(&self, id: i64) -> Result<Option<ProjectWithEmployees>> {
        let Some(project) = self.read_by_id(id).await? else {
            return Ok(None);
        };

        let employees = sqlx::query_as::<_, Employee>(
            "SELECT e.id, e.name, e.email, e.designation, e.payroll
             FROM employees e
             JOIN employee_projects ep ON ep.employee_id = e.id
             WHERE ep.project_id = ?
             ORDER BY e.id",
        )
        .bind(id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(Some(ProjectWithEmployees { project, employees }))
    }
}

#[async_trait]
impl CrudService<Project, NewProject> for ProjectCrudService {
    async fn create(&self, item: &NewProject) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (title, description)
             VALUES (?, ?)
             RETURNING id, title, description",
        )
        .bind(&item.title)
        .bind(&item.description)
        .fetch_one(self.db.pool())
        .await?;

        Ok(project)
    }

    async fn read_by_id(&self, id: i64) -> Result<Option<Project>> {
        let project =
            sqlx::query_as::<_, Project>("SELECT id, title, description FROM projects WHERE id = ?")
                .bind(id)
                .fetch_optional(self.db.pool())
                .await?;

        Ok(project)
    }

    async fn read_many(&self, skip: i64, limit: i64) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, title, description FROM projects ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.db.pool())
        .await?;

        Ok(projects)
    }

    async fn update(&self, id: i64, item: &NewProject) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "UPDATE projects SET title = ?, description = ?
             WHERE id = ?
             RETURNING id, title, description",
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(project)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Both directional link endpoints land here. Existence is checked on both
// sides before inserting; re-linking an existing pair is a no-op because
// of the composite primary key.
async fn link(pool: &SqlitePool, employee_id: i64, project_id: i64) -> Result<LinkOutcome> {
    if !row_exists(pool, "SELECT 1 FROM employees WHERE id = ?", employee_id).await? {
        return Ok(LinkOutcome::EmployeeMissing(employee_id));
    }
    if !row_exists(pool, "SELECT 1 FROM projects WHERE id = ?", project_id).await? {
        return Ok(LinkOutcome::ProjectMissing(project_id));
    }

    sqlx::query("INSERT OR IGNORE INTO employee_projects (employee_id, project_id) VALUES (?, ?)")
        .bind(employee_id)
        .bind(project_id)
        .execute(pool)
        .await?;

    Ok(LinkOutcome::Linked)
}

async fn row_exists(pool: &SqlitePool, query: &str, id: i64) -> Result<bool> {
    let row = sqlx::query(query).bind(id).fetch_optional(pool).await?;

    Ok(row.is_some())
}
