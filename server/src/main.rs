use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::{MemoryStore, TodoService, TodoStore};
use todo_sqlite::SqliteTodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // TODO_DB=<path> selects the sqlite backend; unset means in-memory.
    let store: Arc<dyn TodoStore> = match std::env::var("TODO_DB") {
        Ok(path) => {
            tracing::info!(%path, "using sqlite store");
            Arc::new(SqliteTodoStore::open(Path::new(&path))?)
        }
        Err(_) => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };
    let service = TodoService::new(store);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    todo_server::run(listener, service).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
