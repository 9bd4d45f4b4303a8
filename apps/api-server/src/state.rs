//! Application state - shared across all handlers.

use std::sync::Arc;

use agora_core::domain::PostPolicy;
use agora_core::ports::{PostRepository, ProfileRepository, SystemClock};
use agora_core::services::PostService;
use agora_infra::{InMemoryPostRepository, InMemoryProfileRepository, PostInputRules};

#[cfg(feature = "postgres")]
use agora_infra::{DatabaseConnections, PostgresPostRepository, PostgresProfileRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub profiles: Arc<dyn ProfileRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

type Stores = (Arc<dyn PostRepository>, Arc<dyn ProfileRepository>);

fn in_memory_stores() -> Stores {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryProfileRepository::new()),
    )
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (db, (post_repo, profile_repo)) = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let stores: Stores = (
                            Arc::new(PostgresPostRepository::new(conn.main.clone())),
                            Arc::new(PostgresProfileRepository::new(conn.main.clone())),
                        );
                        (Some(conn), stores)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, in_memory_stores())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, in_memory_stores())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (post_repo, profile_repo) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_stores()
        };

        let state = Self::from_stores(post_repo, profile_repo, config.policy);
        tracing::info!(policy = ?config.policy, "Application state initialized");

        #[cfg(feature = "postgres")]
        let state = Self { db, ..state };

        state
    }

    /// Wire the post service over the given stores.
    pub fn from_stores(
        post_repo: Arc<dyn PostRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        policy: PostPolicy,
    ) -> Self {
        let posts = PostService::new(
            post_repo,
            profile_repo.clone(),
            Arc::new(PostInputRules::new()),
            Arc::new(SystemClock),
            policy,
        );

        Self {
            posts: Arc::new(posts),
            profiles: profile_repo,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Name of the backing post store, reported by the health check.
    pub fn storage(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if self.db.is_some() {
            return "postgres";
        }
        "memory"
    }

    /// State backed by in-memory stores.
    #[cfg(test)]
    pub fn in_memory(policy: PostPolicy) -> Self {
        let (post_repo, profile_repo) = in_memory_stores();
        Self::from_stores(post_repo, profile_repo, policy)
    }
}
