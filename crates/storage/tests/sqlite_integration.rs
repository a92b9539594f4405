use chrono::Duration;
use milestone_core::model::{AgeBand, Category, ResponseRecord};
use milestone_core::time::fixed_now;
use storage::repository::{ResponseRepository, Storage};
use storage::sqlite::SqliteRepository;

fn record(band: u8, category: Category, question: &str, answer: bool) -> ResponseRecord {
    ResponseRecord::new(
        AgeBand::new(band).unwrap(),
        category,
        question,
        answer,
        fixed_now(),
    )
    .unwrap()
}

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_upserts_by_band_category_question() {
    let repo = connect("memdb_upsert").await;

    repo.save_response(&record(1, Category::Motor, "Lifts head?", true))
        .await
        .unwrap();

    let later = ResponseRecord::new(
        AgeBand::new(1).unwrap(),
        Category::Motor,
        "Lifts head?",
        false,
        fixed_now() + Duration::hours(2),
    )
    .unwrap();
    repo.save_response(&later).await.unwrap();

    let all = repo.all_responses().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].answer());
    assert_eq!(all[0].answered_at(), fixed_now() + Duration::hours(2));
}

#[tokio::test]
async fn sqlite_orders_results_in_walk_order() {
    let repo = connect("memdb_order").await;

    for r in [
        record(2, Category::Sensory, "s2", true),
        record(1, Category::Feeding, "f1", false),
        record(1, Category::Motor, "m1", true),
        record(1, Category::Communication, "c1", true),
    ] {
        repo.save_response(&r).await.unwrap();
    }

    let all = repo.all_responses().await.unwrap();
    let questions: Vec<&str> = all.iter().map(ResponseRecord::question).collect();
    assert_eq!(questions, vec!["m1", "c1", "f1", "s2"]);

    let band1 = repo
        .responses_for_band(AgeBand::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(band1.len(), 3);

    let feeding = repo
        .responses_for_band_category(AgeBand::new(1).unwrap(), Category::Feeding)
        .await
        .unwrap();
    assert_eq!(feeding.len(), 1);
    assert_eq!(feeding[0].question(), "f1");
}

#[tokio::test]
async fn sqlite_clear_all_empties_cache_and_notifies() {
    let repo = connect("memdb_clear").await;
    let mut rx = repo.subscribe();

    repo.save_response(&record(3, Category::Feeding, "q", true))
        .await
        .unwrap();
    assert!(rx.has_changed().unwrap());
    rx.borrow_and_update();

    repo.clear_all().await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert!(repo.all_responses().await.unwrap().is_empty());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.schema_version().await.unwrap(), 1);
    repo.save_response(&record(10, Category::Motor, "Runs?", true))
        .await
        .unwrap();
    assert_eq!(repo.all_responses().await.unwrap().len(), 1);
}

#[tokio::test]
async fn storage_sqlite_wires_response_repository() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .responses
        .save_response(&record(5, Category::Sensory, "Peek-a-boo?", true))
        .await
        .unwrap();
    let all = storage.responses.all_responses().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category(), Category::Sensory);
}
