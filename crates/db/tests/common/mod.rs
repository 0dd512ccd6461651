use artist_site_db::DbPool;

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = artist_site_db::create_pool("sqlite::memory:")
        .await
        .expect("in-memory pool should open");
    artist_site_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}
