use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_server::{shared, FileStore};

#[derive(Parser)]
#[command(name = "todo-server", about = "File-backed todo list server", version)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Path of the persisted todo document.
    #[arg(long, env = "TODO_DATA_FILE", default_value = "data/todos.json")]
    data_file: PathBuf,

    /// Directory holding the static client assets.
    #[arg(long, env = "TODO_STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("todo app listening on http://{addr}");
    info!("persisting todos to {}", args.data_file.display());

    let store = shared(FileStore::new(args.data_file));
    todo_server::run(listener, store, args.static_dir).await
}
