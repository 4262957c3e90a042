use workforce_api::db::DatabaseConnection;
use workforce_api::models::{NewEmployee, NewProject};
use workforce_api::services::{CrudService, EmployeeCrudService, LinkOutcome, ProjectCrudService};

async fn services() -> (EmployeeCrudService, ProjectCrudService) {
    let db = DatabaseConnection::connect_in_memory().await.unwrap();
    (
        EmployeeCrudService::new(db.clone()),
        ProjectCrudService::new(db),
    )
}

fn employee(name: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        designation: "Engineer".to_string(),
        payroll: 1000.0,
    }
}

fn project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: format!("{} description", title),
    }
}

#[tokio::test]
async fn link_is_visible_from_both_sides() {
    let (employees, projects) = services().await;

    let emp = employees.create(&employee("Alice")).await.unwrap();
    let proj = projects.create(&project("Apollo")).await.unwrap();

    let outcome = employees.link_project(emp.id, proj.id).await.unwrap();
    assert_eq!(outcome, LinkOutcome::Linked);

    let with_projects = employees.with_projects(emp.id).await.unwrap().unwrap();
    assert_eq!(with_projects.employee, emp);
    assert_eq!(with_projects.projects, vec![proj.clone()]);

    let with_employees = projects.with_employees(proj.id).await.unwrap().unwrap();
    assert_eq!(with_employees.project, proj);
    assert_eq!(with_employees.employees, vec![emp]);
}

#[tokio::test]
async fn assign_from_project_side_matches_employee_side() {
    let (employees, projects) = services().await;

    let emp = employees.create(&employee("Bob")).await.unwrap();
    let proj = projects.create(&project("Apollo")).await.unwrap();

    let outcome = projects.assign_employee(proj.id, emp.id).await.unwrap();
    assert_eq!(outcome, LinkOutcome::Linked);

    let with_projects = employees.with_projects(emp.id).await.unwrap().unwrap();
    assert_eq!(with_projects.projects.len(), 1);
}

#[tokio::test]
async fn link_missing_project_fails_and_writes_nothing() {
    let (employees, _projects) = services().await;

    let emp = employees.create(&employee("Alice")).await.unwrap();

    let outcome = employees.link_project(emp.id, 99).await.unwrap();
    assert_eq!(outcome, LinkOutcome::ProjectMissing(99));

    let with_projects = employees.with_projects(emp.id).await.unwrap().unwrap();
    assert!(with_projects.projects.is_empty());
}

#[tokio::test]
async fn link_missing_employee_fails() {
    let (employees, projects) = services().await;

    let proj = projects.create(&project("Apollo")).await.unwrap();

    let outcome = employees.link_project(99, proj.id).await.unwrap();
    assert_eq!(outcome, LinkOutcome::EmployeeMissing(99));

    let with_employees = projects.with_employees(proj.id).await.unwrap().unwrap();
    assert!(with_employees.employees.is_empty());
}

#[tokio::test]
async fn relinking_same_pair_keeps_a_single_row() {
    let (employees, projects) = services().await;

    let emp = employees.create(&employee("Alice")).await.unwrap();
    let proj = projects.create(&project("Apollo")).await.unwrap();

    assert_eq!(
        employees.link_project(emp.id, proj.id).await.unwrap(),
        LinkOutcome::Linked
    );
    assert_eq!(
        projects.assign_employee(proj.id, emp.id).await.unwrap(),
        LinkOutcome::Linked
    );

    let with_projects = employees.with_projects(emp.id).await.unwrap().unwrap();
    assert_eq!(with_projects.projects.len(), 1);
}

#[tokio::test]
async fn with_projects_missing_employee_returns_none() {
    let (employees, _projects) = services().await;

    assert!(employees.with_projects(5).await.unwrap().is_none());
}

#[tokio::test]
async fn employee_on_two_projects_lists_both() {
    let (employees, projects) = services().await;

    let emp = employees.create(&employee("Alice")).await.unwrap();
    let first = projects.create(&project("Apollo")).await.unwrap();
    let second = projects.create(&project("Artemis")).await.unwrap();

    employees.link_project(emp.id, first.id).await.unwrap();
    employees.link_project(emp.id, second.id).await.unwrap();

    let with_projects = employees.with_projects(emp.id).await.unwrap().unwrap();
    assert_eq!(with_projects.projects, vec![first, second]);
}
