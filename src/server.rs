//! Process lifecycle: store setup, both listeners, and fatal-error supervision.
//!
//! The store is opened before any socket is bound. Each listener then runs as
//! its own task; the first one to finish, for whatever reason, ends the
//! process. There is no restart and no degraded mode.

use crate::api::routes::public_router;
use crate::config::{AdminEndpoint, Config};
use crate::infrastructure::overlay;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::state::AppState;
use crate::web::routes::admin_router;

use anyhow::{Context, Result, anyhow};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Independent listener tasks supervised as one unit.
///
/// A task's completion value is its one-time failure report; [`Self::first_failure`]
/// waits for whichever task reports first and aborts the rest.
#[derive(Default)]
pub struct ListenerSet {
    tasks: JoinSet<anyhow::Error>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a listener's serve loop.
    ///
    /// A serve loop is expected to run forever, so returning `Ok` is reported
    /// as a failure too.
    pub fn spawn<F>(&mut self, name: &'static str, serve: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        self.tasks.spawn(async move {
            match serve.await {
                Ok(()) => anyhow!("{name} listener stopped unexpectedly"),
                Err(e) => e.context(format!("{name} listener failed")),
            }
        });
    }

    /// Waits for the first listener to stop, aborts the others, and returns why
    /// it stopped.
    pub async fn first_failure(&mut self) -> anyhow::Error {
        let err = match self.tasks.join_next().await {
            Some(Ok(err)) => err,
            Some(Err(join_err)) => anyhow::Error::new(join_err).context("listener task panicked"),
            None => anyhow!("no listeners were started"),
        };

        self.tasks.abort_all();
        err
    }
}

/// Runs the service until a listener fails or a shutdown signal arrives.
///
/// Initializes:
/// - SQLite store (file + schema)
/// - Public redirect listener
/// - Admin listener on the tailnet
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened or its schema cannot be created (before any bind)
/// - Either listener fails to bind or its serve loop ends
pub async fn run(config: Config) -> Result<()> {
    let store = SqliteMappingRepository::open(&config.database_path, config.db_max_connections)
        .await
        .with_context(|| {
            format!(
                "failed to open store at {}",
                config.database_path.display()
            )
        })?;
    tracing::info!("Store ready at {}", config.database_path.display());

    let state = AppState::new(Arc::new(store), config.root_url.as_str());

    let mut listeners = ListenerSet::new();
    listeners.spawn("pubsrv", serve_public(config.public_listen, state.clone()));
    listeners.spawn("ts-srv", serve_admin(config.admin, state));

    supervise(listeners, tokio::signal::ctrl_c()).await
}

/// Waits until a listener fails or `shutdown` resolves.
///
/// If `shutdown` itself fails (the signal handler could not be installed),
/// the error is logged and only a listener failure can end supervision.
pub async fn supervise<S>(mut listeners: ListenerSet, shutdown: S) -> Result<()>
where
    S: Future<Output = std::io::Result<()>>,
{
    let shutdown = async {
        if let Err(e) = shutdown.await {
            tracing::warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        err = listeners.first_failure() => Err(err),
        () = shutdown => {
            tracing::info!("Shutdown signal received");
            Ok(())
        }
    }
}

/// Serves public redirects on `listen_addr`.
pub async fn serve_public(listen_addr: String, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    tracing::info!("Public listener on http://{}", listener.local_addr()?);

    axum::serve(listener, public_router(state)).await?;

    Ok(())
}

/// Serves the admin page over TLS on the node's tailnet address.
pub async fn serve_admin(endpoint: AdminEndpoint, state: AppState) -> Result<()> {
    let addr = overlay::resolve_bind_addr(&endpoint).await?;
    let tls = overlay::load_tls_config(&endpoint.tls_cert, &endpoint.tls_key).await?;
    tracing::info!("Admin listener on https://{}:{} ({addr})", endpoint.hostname, endpoint.port);

    axum_server::bind_rustls(addr, tls)
        .serve(admin_router(state).into_make_service())
        .await
        .with_context(|| format!("admin listener on {addr} failed"))?;

    Ok(())
}
