use super::document::store::FsDocumentStore;
use crate::core::service::{
    document::DocumentService, employee::EmployeeService, timesheet::TimesheetService,
};
use sqlx::PgPool;
use std::{path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Name of the directory under the public path holding uploaded documents.
pub const UPLOADS_DIR: &str = "uploads";

#[derive(Clone)]
pub struct AppState {
    /// Business services.
    pub services: ServiceState,

    /// Directory containing the stored documents, served under `/uploads`.
    pub upload_path: PathBuf,
}

impl AppState {
    /// Load the application state using the provided configuration.
    pub async fn new(args: &crate::config::StartArgs) -> Self {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from(args.log()))
            .init();

        let postgres = crate::app::repo::pg::init(&args.db_url()).await;

        let store = FsDocumentStore::new(PathBuf::from(args.public_path()).join(UPLOADS_DIR))
            .await
            .expect("unable to create upload directory");

        info!("Storing uploads in {}", store.base().display());

        let upload_path = store.base().to_path_buf();

        Self {
            services: ServiceState::new(postgres, Arc::new(store)),
            upload_path,
        }
    }
}

#[derive(Clone)]
pub struct ServiceState {
    pub employee: EmployeeService<PgPool>,
    pub timesheet: TimesheetService<PgPool>,
    pub document: DocumentService<PgPool>,
}

impl ServiceState {
    pub fn new(postgres: PgPool, store: Arc<FsDocumentStore>) -> Self {
        Self {
            employee: EmployeeService::new(postgres.clone()),
            timesheet: TimesheetService::new(postgres.clone()),
            document: DocumentService::new(postgres, store),
        }
    }
}
