//! Service wiring: stores + token issuer, chosen once at startup.

use std::sync::Arc;

use chaintrack_auth::TokenIssuer;
use chaintrack_infra::{
    ActivityStore, InMemoryActivityStore, InMemoryStore, InMemoryUserStore, RecordStore, UserStore,
};
use chaintrack_inventory::InventoryItem;
use chaintrack_orders::Order;
use chaintrack_suppliers::Supplier;

/// Everything the routes need, injected via `Extension`.
#[derive(Clone)]
pub struct AppServices {
    pub tokens: Arc<TokenIssuer>,
    pub users: Arc<dyn UserStore>,
    pub inventory: Arc<dyn RecordStore<InventoryItem>>,
    pub orders: Arc<dyn RecordStore<Order>>,
    pub suppliers: Arc<dyn RecordStore<Supplier>>,
    pub activity: Arc<dyn ActivityStore>,
}

/// Choose the backing stores from the environment.
///
/// `USE_PERSISTENT_STORES=true` selects Postgres (requires the `postgres`
/// feature and `DATABASE_URL`); anything else runs in-memory.
pub async fn build_services(jwt_secret: String) -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_postgres_services(jwt_secret).await;
        }
        #[cfg(not(feature = "postgres"))]
        tracing::warn!(
            "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
        );
    }

    build_in_memory_services(jwt_secret)
}

/// In-memory wiring (dev/test default).
pub fn build_in_memory_services(jwt_secret: String) -> AppServices {
    AppServices {
        tokens: Arc::new(TokenIssuer::new(jwt_secret.as_bytes())),
        users: Arc::new(InMemoryUserStore::new()),
        inventory: Arc::new(InMemoryStore::<InventoryItem>::new()),
        orders: Arc::new(InMemoryStore::<Order>::new()),
        suppliers: Arc::new(InMemoryStore::<Supplier>::new()),
        activity: Arc::new(InMemoryActivityStore::new()),
    }
}

#[cfg(feature = "postgres")]
async fn build_postgres_services(jwt_secret: String) -> AppServices {
    use chaintrack_infra::{
        PostgresActivityStore, PostgresInventoryStore, PostgresOrderStore, PostgresSupplierStore,
        PostgresUserStore, ensure_schema,
    };

    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    ensure_schema(&pool)
        .await
        .expect("failed to prepare database schema");

    AppServices {
        tokens: Arc::new(TokenIssuer::new(jwt_secret.as_bytes())),
        users: Arc::new(PostgresUserStore::new(pool.clone())),
        inventory: Arc::new(PostgresInventoryStore::new(pool.clone())),
        orders: Arc::new(PostgresOrderStore::new(pool.clone())),
        suppliers: Arc::new(PostgresSupplierStore::new(pool.clone())),
        activity: Arc::new(PostgresActivityStore::new(pool)),
    }
}
