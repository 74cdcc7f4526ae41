use pathfinder_core::model::SessionId;
use storage::repository::SessionStore;
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn session_id_survives_reconnect() {
    let repo = connect("memdb_session_reconnect").await;
    repo.save_session_id(&SessionId::new("665f00aa"))
        .await
        .expect("save");

    // A second pool on the same shared in-memory database sees the value.
    let reopened = connect("memdb_session_reconnect").await;
    assert_eq!(
        reopened.load_session_id().await.expect("load"),
        Some(SessionId::new("665f00aa"))
    );
    drop(repo);
}

#[tokio::test]
async fn save_overwrites_and_clear_removes() {
    let repo = connect("memdb_session_overwrite").await;
    assert_eq!(repo.load_session_id().await.unwrap(), None);

    repo.save_session_id(&SessionId::new("first")).await.unwrap();
    repo.save_session_id(&SessionId::new("second")).await.unwrap();
    assert_eq!(
        repo.load_session_id().await.unwrap(),
        Some(SessionId::new("second"))
    );

    repo.clear_session_id().await.unwrap();
    assert_eq!(repo.load_session_id().await.unwrap(), None);
    repo.clear_session_id().await.expect("clearing twice is fine");
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = connect("memdb_session_migrate").await;
    repo.migrate().await.expect("second migrate");
    repo.save_session_id(&SessionId::new("x")).await.unwrap();
    repo.migrate().await.expect("third migrate");
    assert_eq!(
        repo.load_session_id().await.unwrap(),
        Some(SessionId::new("x"))
    );
}
