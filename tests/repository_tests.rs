use port_operations::config::DatabaseConfig;
use port_operations::database::DatabaseConnection;
use port_operations::models::VehicleFields;
use port_operations::repositories::vehicle_repository::VehicleRepository;
use port_operations::utils::AppError;

async fn in_memory_repository() -> VehicleRepository {
    let db = DatabaseConnection::in_memory().await.unwrap();
    VehicleRepository::new(db.pool().clone())
}

fn sample_fields() -> VehicleFields {
    VehicleFields {
        amp_number: "A100".to_string(),
        driver_name: "J. Doe".to_string(),
        status: "loading".to_string(),
        position: "dock-3".to_string(),
        cargo: "containers".to_string(),
        alert: String::new(),
    }
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let repo = in_memory_repository().await;
    let fields = sample_fields();

    let created = repo.create(fields.clone()).await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(VehicleFields::from(fetched), fields);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let repo = in_memory_repository().await;
    let created = repo.create(sample_fields()).await.unwrap();

    let replacement = VehicleFields::new("Z999", "M. Roe");
    let updated = repo.update(created.id, replacement.clone()).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated.clone()));
    assert_eq!(VehicleFields::from(updated), replacement);
}

#[tokio::test]
async fn test_not_found_leaves_storage_unchanged() {
    let repo = in_memory_repository().await;
    let created = repo.create(sample_fields()).await.unwrap();
    repo.delete(created.id).await.unwrap();
    let before = repo.list_all().await.unwrap();

    let update = repo.update(created.id, VehicleFields::new("X", "Y")).await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let delete = repo.delete(created.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    assert_eq!(repo.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_live_ids_are_distinct() {
    let repo = in_memory_repository().await;
    let mut seen = Vec::new();

    for round in 0..5 {
        let vehicle = repo
            .create(VehicleFields::new(format!("A{}", round), "driver"))
            .await
            .unwrap();
        assert!(!seen.contains(&vehicle.id));
        seen.push(vehicle.id);

        if round % 2 == 0 {
            repo.delete(vehicle.id).await.unwrap();
        }
    }

    let mut live: Vec<i64> = repo.list_all().await.unwrap().iter().map(|v| v.id).collect();
    let total = live.len();
    live.dedup();
    assert_eq!(live.len(), total);
    assert_eq!(total, 2);
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("vehicles.db").display());
    let config = DatabaseConfig::new(url);

    let created = {
        let db = DatabaseConnection::connect(&config).await.unwrap();
        let repo = VehicleRepository::new(db.pool().clone());
        let created = repo.create(sample_fields()).await.unwrap();
        db.close().await;
        created
    };

    let db = DatabaseConnection::connect(&config).await.unwrap();
    let repo = VehicleRepository::new(db.pool().clone());
    assert_eq!(repo.list_all().await.unwrap(), vec![created.clone()]);

    // Después de reabrir tampoco se reutiliza el id borrado
    repo.delete(created.id).await.unwrap();
    let next = repo.create(sample_fields()).await.unwrap();
    assert!(next.id > created.id);
    db.close().await;
}
