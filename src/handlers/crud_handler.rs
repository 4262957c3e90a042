use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{
    Employee, EmployeeWithProjects, NewEmployee, NewProject, Project, ProjectWithEmployees,
};
use crate::services::crud_service::CrudService; // Import the CrudService trait
use crate::services::{EmployeeCrudService, LinkOutcome, ProjectCrudService};

/// Offset/limit pagination parameters for the list endpoints
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

// Employee CRUD handlers
pub async fn create_employee(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Json(request): Json<NewEmployee>,
) -> Result<Json<Employee>, ApiError> {
    let employee = employee_service.create(&request).await?;

    Ok(Json(employee))
}

pub async fn get_employees(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = employee_service.read_many(page.skip, page.limit).await?;

    Ok(Json(employees))
}

pub async fn get_employee(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Path(employee_id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
    let employee = employee_service
        .read_by_id(employee_id)
        .await?
        .ok_or(ApiError::not_found("Employee", employee_id))?;

    Ok(Json(employee))
}

pub async fn update_employee(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Path(employee_id): Path<i64>,
    Json(request): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = employee_service
        .update(employee_id, &request)
        .await?
        .ok_or(ApiError::not_found("Employee", employee_id))?;

    Ok((StatusCode::ACCEPTED, Json(employee)))
}

pub async fn delete_employee(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Path(employee_id): Path<i64>,
) -> Result<Json<&'static str>, ApiError> {
    if !employee_service.delete(employee_id).await? {
        return Err(ApiError::not_found("Employee", employee_id));
    }

    Ok(Json("Deleted successfully"))
}

// Project CRUD handlers
pub async fn create_project(
    State(project_service): State<Arc<ProjectCrudService>>,
    Json(request): Json<NewProject>,
) -> Result<Json<Project>, ApiError> {
    let project = project_service.create(&request).await?;

    Ok(Json(project))
}

pub async fn get_projects(
    State(project_service): State<Arc<ProjectCrudService>>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = project_service.read_many(page.skip, page.limit).await?;

    Ok(Json(projects))
}

pub async fn get_project(
    State(project_service): State<Arc<ProjectCrudService>>,
    Path(project_id): Path<i64>,
) -> Result<Json<Project>, ApiError> {
    let project = project_service
        .read_by_id(project_id)
        .await?
        .ok_or(ApiError::not_found("Project", project_id))?;

    Ok(Json(project))
}

pub async fn update_project(
    State(project_service): State<Arc<ProjectCrudService>>,
    Path(project_id): Path<i64>,
    Json(request): Json<NewProject>,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    project_service
        .update(project_id, &request)
        .await?
        .ok_or(ApiError::not_found("Project", project_id))?;

    Ok((StatusCode::ACCEPTED, Json("updated")))
}

pub async fn delete_project(
    State(project_service): State<Arc<ProjectCrudService>>,
    Path(project_id): Path<i64>,
) -> Result<Json<&'static str>, ApiError> {
    if !project_service.delete(project_id).await? {
        return Err(ApiError::not_found("Project", project_id));
    }

    Ok(Json("Deleted Successfully"))
}

// Assignment handlers - the two POST routes perform the same link
// operation, entered from either side of the relation
pub async fn assign_employee_to_project(
    State(project_service): State<Arc<ProjectCrudService>>,
    Path((project_id, employee_id)): Path<(i64, i64)>,
) -> Result<Json<&'static str>, ApiError> {
    match project_service
        .assign_employee(project_id, employee_id)
        .await?
    {
        LinkOutcome::Linked => Ok(Json("Employee assigned to project")),
        LinkOutcome::EmployeeMissing(id) => Err(ApiError::not_found("Employee", id)),
        LinkOutcome::ProjectMissing(id) => Err(ApiError::not_found("Project", id)),
    }
}

pub async fn assign_project_to_employee(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Path((employee_id, project_id)): Path<(i64, i64)>,
) -> Result<Json<&'static str>, ApiError> {
    match employee_service
        .link_project(employee_id, project_id)
        .await?
    {
        LinkOutcome::Linked => Ok(Json("Project assigned to employee")),
        LinkOutcome::EmployeeMissing(id) => Err(ApiError::not_found("Employee", id)),
        LinkOutcome::ProjectMissing(id) => Err(ApiError::not_found("Project", id)),
    }
}

pub async fn get_employee_projects(
    State(employee_service): State<Arc<EmployeeCrudService>>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeWithProjects>, ApiError> {
    let employee = employee_service
        .with_projects(employee_id)
        .await?
        .ok_or(ApiError::not_found("Employee", employee_id))?;

    Ok(Json(employee))
}

pub async fn get_project_employees(
    State(project_service): State<Arc<ProjectCrudService>>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectWithEmployees>, ApiError> {
    let project = project_service
        .with_employees(project_id)
        .await?
        .ok_or(ApiError::not_found("Project", project_id))?;

    Ok(Json(project))
}

// Create API router. Paths mirror the original service, including the
// plural segment on the employee PUT route and the trailing slash on the
// project collection routes.
pub fn api_router(
    employee_service: Arc<EmployeeCrudService>,
    project_service: Arc<ProjectCrudService>,
) -> Router {
    // Create separate routers for each service with their own state
    let employee_router = Router::new()
        .route("/Employee", post(create_employee))
        .route("/Employee", get(get_employees))
        .route("/Employee/:employee_id", get(get_employee))
        .route("/Employee/:employee_id", delete(delete_employee))
        .route("/Employees/:employee_id", put(update_employee))
        .route(
            "/Employees/:employee_id/Projects/:project_id",
            post(assign_project_to_employee),
        )
        .route(
            "/Employees/:employee_id/Projects",
            get(get_employee_projects),
        )
        .with_state(employee_service);

    let project_router = Router::new()
        .route("/Projects/", post(create_project))
        .route("/Projects/", get(get_projects))
        .route("/Projects/:project_id", get(get_project))
        .route("/Projects/:project_id", put(update_project))
        .route("/Projects/:project_id", delete(delete_project))
        .route(
            "/Projects/:project_id/Employees/:employee_id",
            post(assign_employee_to_project),
        )
        .route("/Projects/:project_id/Employees", get(get_project_employees))
        .with_state(project_service);

    // Merge all the routers
    Router::new().merge(employee_router).merge(project_router)
}
