use clap::Parser;
use staffdesk::{
    app::{server::router::router, state::AppState},
    config::StartArgs,
};
use tracing::info;

#[tokio::main]
async fn main() {
    let args = StartArgs::parse();
    let app = AppState::new(&args).await;

    let addr = args.address();
    let origins = args.allowed_origins();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("error while starting TCP listener");

    let router = router(app, origins);

    info!("Listening on {addr}");

    axum::serve(listener, router)
        .await
        .expect("error while starting server");
}
