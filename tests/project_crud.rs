use workforce_api::db::DatabaseConnection;
use workforce_api::models::NewProject;
use workforce_api::services::{CrudService, ProjectCrudService};

async fn service() -> ProjectCrudService {
    let db = DatabaseConnection::connect_in_memory().await.unwrap();
    ProjectCrudService::new(db)
}

fn sample(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: format!("{} description", title),
    }
}

#[tokio::test]
async fn create_and_fetch_roundtrip() {
    let svc = service().await;

    let created = svc.create(&sample("Apollo")).await.unwrap();
    assert_eq!(created.id, 1);

    let loaded = svc.read_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.title, "Apollo");
    assert_eq!(loaded.description, "Apollo description");
}

#[tokio::test]
async fn update_replaces_every_field() {
    let svc = service().await;

    let created = svc.create(&sample("Apollo")).await.unwrap();

    let replacement = NewProject {
        title: "Artemis".to_string(),
        description: "Follow-up program".to_string(),
    };
    let updated = svc.update(created.id, &replacement).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Artemis");
    assert_eq!(updated.description, "Follow-up program");
}

#[tokio::test]
async fn update_missing_returns_none() {
    let svc = service().await;

    assert!(svc.update(7, &sample("Ghost")).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_then_fetch_returns_none() {
    let svc = service().await;

    let created = svc.create(&sample("Apollo")).await.unwrap();
    assert!(svc.delete(created.id).await.unwrap());
    assert!(svc.read_by_id(created.id).await.unwrap().is_none());
    assert!(!svc.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn read_many_pages_by_id() {
    let svc = service().await;

    for i in 0..4 {
        svc.create(&sample(&format!("P{}", i))).await.unwrap();
    }

    let page = svc.read_many(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, 2);
    assert_eq!(page[1].id, 3);
}
