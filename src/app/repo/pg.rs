use sqlx::PgPool;
use tracing::info;

pub mod employee;
pub mod timesheet;

pub async fn init(url: &str) -> PgPool {
    let pool = create_pool(url).await;
    migrate(&pool).await;
    info!("Connected to postgres");
    pool
}

async fn create_pool(url: &str) -> PgPool {
    sqlx::postgres::PgPool::connect(url)
        .await
        .expect("error while connecting to db")
}

async fn migrate(pool: &PgPool) {
    sqlx::migrate!()
        .run(pool)
        .await
        .expect("error in migrations")
}
