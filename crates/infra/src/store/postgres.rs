//! Postgres-backed stores (cargo feature `postgres`).
//!
//! One store per table, all sharing a sqlx connection pool. Uniqueness
//! violations map to [`StoreError::Duplicate`]; everything else the
//! database reports is [`StoreError::Unavailable`] — fatal for the request,
//! never retried.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use chaintrack_activity::ActivityLogEntry;
use chaintrack_auth::User;
use chaintrack_core::{ItemId, LogEntryId, OrderId, SupplierId, UserId};
use chaintrack_inventory::InventoryItem;
use chaintrack_orders::{Order, OrderLine, OrderStatus};
use chaintrack_suppliers::Supplier;

use super::contract::{ActivityStore, Page, RecordStore, StoreError, StoreResult, UserStore};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        hashed_password TEXT NOT NULL,
        is_active BOOLEAN NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS inventory_items (
        id UUID PRIMARY KEY,
        product_name TEXT NOT NULL,
        description TEXT,
        quantity BIGINT NOT NULL,
        unit_price DOUBLE PRECISION NOT NULL,
        category TEXT,
        location TEXT,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id UUID PRIMARY KEY,
        supplier_id UUID NOT NULL,
        status TEXT NOT NULL,
        order_date TIMESTAMPTZ NOT NULL,
        total_amount DOUBLE PRECISION NOT NULL,
        payment_terms TEXT,
        shipping_address TEXT,
        notes TEXT,
        lines JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS suppliers (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        contact_person TEXT,
        email TEXT,
        phone TEXT,
        address TEXT,
        certification TEXT,
        performance_score DOUBLE PRECISION,
        last_delivery_date TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS activity_log (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        action TEXT NOT NULL,
        recorded_at TIMESTAMPTZ NOT NULL
    )",
];

/// Create any missing tables.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
    }
    tracing::info!("database schema ready");
    Ok(())
}

fn map_sqlx_error(op: &'static str, e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        // 23505: unique constraint violation.
        if db.code().as_deref() == Some("23505") {
            let constraint = db.constraint().unwrap_or("unique constraint");
            return StoreError::Duplicate(constraint.to_string());
        }
    }
    StoreError::Unavailable(format!("{op}: {e}"))
}

fn corrupt(e: impl core::fmt::Display) -> StoreError {
    StoreError::Unavailable(format!("corrupt row: {e}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> StoreResult<User> {
    Ok(User {
        id: UserId::from_uuid(row.try_get::<Uuid, _>("id").map_err(corrupt)?),
        email: row.try_get("email").map_err(corrupt)?,
        hashed_password: row.try_get("hashed_password").map_err(corrupt)?,
        is_active: row.try_get("is_active").map_err(corrupt)?,
        created_at: row.try_get("created_at").map_err(corrupt)?,
    })
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, hashed_password, is_active, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("users.find_by_email", e))?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn insert(&self, user: User) -> StoreResult<User> {
        sqlx::query(
            "INSERT INTO users (id, email, hashed_password, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(*user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(user.is_active)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("users.insert", e))?;

        Ok(user)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inventory
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PostgresInventoryStore {
    pool: PgPool,
}

impl PostgresInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn item_from_row(row: &PgRow) -> StoreResult<InventoryItem> {
    Ok(InventoryItem {
        id: ItemId::from_uuid(row.try_get::<Uuid, _>("id").map_err(corrupt)?),
        product_name: row.try_get("product_name").map_err(corrupt)?,
        description: row.try_get("description").map_err(corrupt)?,
        quantity: row.try_get("quantity").map_err(corrupt)?,
        unit_price: row.try_get("unit_price").map_err(corrupt)?,
        category: row.try_get("category").map_err(corrupt)?,
        location: row.try_get("location").map_err(corrupt)?,
        created_at: row.try_get("created_at").map_err(corrupt)?,
        updated_at: row.try_get("updated_at").map_err(corrupt)?,
    })
}

#[async_trait]
impl RecordStore<InventoryItem> for PostgresInventoryStore {
    async fn list(&self, page: Page) -> StoreResult<Vec<InventoryItem>> {
        let rows = sqlx::query(
            "SELECT id, product_name, description, quantity, unit_price, category, location,
                    created_at, updated_at
             FROM inventory_items
             ORDER BY created_at ASC, id ASC
             OFFSET $1 LIMIT $2",
        )
        .bind(page.offset as i64)
        .bind(page.limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("inventory.list", e))?;

        rows.iter().map(item_from_row).collect()
    }

    async fn get(&self, id: ItemId) -> StoreResult<Option<InventoryItem>> {
        let row = sqlx::query(
            "SELECT id, product_name, description, quantity, unit_price, category, location,
                    created_at, updated_at
             FROM inventory_items WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("inventory.get", e))?;

        row.as_ref().map(item_from_row).transpose()
    }

    async fn insert(&self, record: InventoryItem) -> StoreResult<InventoryItem> {
        sqlx::query(
            "INSERT INTO inventory_items
                 (id, product_name, description, quantity, unit_price, category, location,
                  created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(*record.id.as_uuid())
        .bind(&record.product_name)
        .bind(&record.description)
        .bind(record.quantity)
        .bind(record.unit_price)
        .bind(&record.category)
        .bind(&record.location)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("inventory.insert", e))?;

        Ok(record)
    }

    async fn replace(&self, record: InventoryItem) -> StoreResult<Option<InventoryItem>> {
        let result = sqlx::query(
            "UPDATE inventory_items
             SET product_name = $2, description = $3, quantity = $4, unit_price = $5,
                 category = $6, location = $7, updated_at = $8
             WHERE id = $1",
        )
        .bind(*record.id.as_uuid())
        .bind(&record.product_name)
        .bind(&record.description)
        .bind(record.quantity)
        .bind(record.unit_price)
        .bind(&record.category)
        .bind(&record.location)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("inventory.replace", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(record))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Orders
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_from_row(row: &PgRow) -> StoreResult<Order> {
    let status: String = row.try_get("status").map_err(corrupt)?;
    let lines: Vec<OrderLine> =
        serde_json::from_value(row.try_get::<serde_json::Value, _>("lines").map_err(corrupt)?)
            .map_err(corrupt)?;

    Ok(Order {
        id: OrderId::from_uuid(row.try_get::<Uuid, _>("id").map_err(corrupt)?),
        supplier_id: SupplierId::from_uuid(row.try_get::<Uuid, _>("supplier_id").map_err(corrupt)?),
        status: status.parse::<OrderStatus>().map_err(corrupt)?,
        order_date: row.try_get("order_date").map_err(corrupt)?,
        total_amount: row.try_get("total_amount").map_err(corrupt)?,
        payment_terms: row.try_get("payment_terms").map_err(corrupt)?,
        shipping_address: row.try_get("shipping_address").map_err(corrupt)?,
        notes: row.try_get("notes").map_err(corrupt)?,
        lines,
        created_at: row.try_get("created_at").map_err(corrupt)?,
        updated_at: row.try_get("updated_at").map_err(corrupt)?,
    })
}

fn lines_to_json(lines: &[OrderLine]) -> StoreResult<serde_json::Value> {
    serde_json::to_value(lines)
        .map_err(|e| StoreError::Unavailable(format!("orders: line serialization failed: {e}")))
}

#[async_trait]
impl RecordStore<Order> for PostgresOrderStore {
    async fn list(&self, page: Page) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT id, supplier_id, status, order_date, total_amount, payment_terms,
                    shipping_address, notes, lines, created_at, updated_at
             FROM orders
             ORDER BY created_at ASC, id ASC
             OFFSET $1 LIMIT $2",
        )
        .bind(page.offset as i64)
        .bind(page.limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("orders.list", e))?;

        rows.iter().map(order_from_row).collect()
    }

    async fn get(&self, id: OrderId) -> StoreResult<Option<Order>> {
        let row = sqlx::query(
            "SELECT id, supplier_id, status, order_date, total_amount, payment_terms,
                    shipping_address, notes, lines, created_at, updated_at
             FROM orders WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("orders.get", e))?;

        row.as_ref().map(order_from_row).transpose()
    }

    async fn insert(&self, record: Order) -> StoreResult<Order> {
        sqlx::query(
            "INSERT INTO orders
                 (id, supplier_id, status, order_date, total_amount, payment_terms,
                  shipping_address, notes, lines, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(*record.id.as_uuid())
        .bind(*record.supplier_id.as_uuid())
        .bind(record.status.as_str())
        .bind(record.order_date)
        .bind(record.total_amount)
        .bind(&record.payment_terms)
        .bind(&record.shipping_address)
        .bind(&record.notes)
        .bind(lines_to_json(&record.lines)?)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("orders.insert", e))?;

        Ok(record)
    }

    async fn replace(&self, record: Order) -> StoreResult<Option<Order>> {
        let result = sqlx::query(
            "UPDATE orders
             SET supplier_id = $2, status = $3, order_date = $4, total_amount = $5,
                 payment_terms = $6, shipping_address = $7, notes = $8, lines = $9,
                 updated_at = $10
             WHERE id = $1",
        )
        .bind(*record.id.as_uuid())
        .bind(*record.supplier_id.as_uuid())
        .bind(record.status.as_str())
        .bind(record.order_date)
        .bind(record.total_amount)
        .bind(&record.payment_terms)
        .bind(&record.shipping_address)
        .bind(&record.notes)
        .bind(lines_to_json(&record.lines)?)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("orders.replace", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(record))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Suppliers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PostgresSupplierStore {
    pool: PgPool,
}

impl PostgresSupplierStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn supplier_from_row(row: &PgRow) -> StoreResult<Supplier> {
    Ok(Supplier {
        id: SupplierId::from_uuid(row.try_get::<Uuid, _>("id").map_err(corrupt)?),
        name: row.try_get("name").map_err(corrupt)?,
        contact_person: row.try_get("contact_person").map_err(corrupt)?,
        email: row.try_get("email").map_err(corrupt)?,
        phone: row.try_get("phone").map_err(corrupt)?,
        address: row.try_get("address").map_err(corrupt)?,
        certification: row.try_get("certification").map_err(corrupt)?,
        performance_score: row.try_get("performance_score").map_err(corrupt)?,
        last_delivery_date: row.try_get("last_delivery_date").map_err(corrupt)?,
        created_at: row.try_get("created_at").map_err(corrupt)?,
        updated_at: row.try_get("updated_at").map_err(corrupt)?,
    })
}

#[async_trait]
impl RecordStore<Supplier> for PostgresSupplierStore {
    async fn list(&self, page: Page) -> StoreResult<Vec<Supplier>> {
        let rows = sqlx::query(
            "SELECT id, name, contact_person, email, phone, address, certification,
                    performance_score, last_delivery_date, created_at, updated_at
             FROM suppliers
             ORDER BY created_at ASC, id ASC
             OFFSET $1 LIMIT $2",
        )
        .bind(page.offset as i64)
        .bind(page.limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("suppliers.list", e))?;

        rows.iter().map(supplier_from_row).collect()
    }

    async fn get(&self, id: SupplierId) -> StoreResult<Option<Supplier>> {
        let row = sqlx::query(
            "SELECT id, name, contact_person, email, phone, address, certification,
                    performance_score, last_delivery_date, created_at, updated_at
             FROM suppliers WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("suppliers.get", e))?;

        row.as_ref().map(supplier_from_row).transpose()
    }

    async fn insert(&self, record: Supplier) -> StoreResult<Supplier> {
        sqlx::query(
            "INSERT INTO suppliers
                 (id, name, contact_person, email, phone, address, certification,
                  performance_score, last_delivery_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(*record.id.as_uuid())
        .bind(&record.name)
        .bind(&record.contact_person)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.address)
        .bind(&record.certification)
        .bind(record.performance_score)
        .bind(record.last_delivery_date)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("suppliers.insert", e))?;

        Ok(record)
    }

    async fn replace(&self, record: Supplier) -> StoreResult<Option<Supplier>> {
        let result = sqlx::query(
            "UPDATE suppliers
             SET name = $2, contact_person = $3, email = $4, phone = $5, address = $6,
                 certification = $7, performance_score = $8, last_delivery_date = $9,
                 updated_at = $10
             WHERE id = $1",
        )
        .bind(*record.id.as_uuid())
        .bind(&record.name)
        .bind(&record.contact_person)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.address)
        .bind(&record.certification)
        .bind(record.performance_score)
        .bind(record.last_delivery_date)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("suppliers.replace", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(record))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Activity log
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PostgresActivityStore {
    pool: PgPool,
}

impl PostgresActivityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn entry_from_row(row: &PgRow) -> StoreResult<ActivityLogEntry> {
    Ok(ActivityLogEntry {
        id: LogEntryId::from_uuid(row.try_get::<Uuid, _>("id").map_err(corrupt)?),
        user_id: UserId::from_uuid(row.try_get::<Uuid, _>("user_id").map_err(corrupt)?),
        action: row.try_get("action").map_err(corrupt)?,
        recorded_at: row.try_get("recorded_at").map_err(corrupt)?,
    })
}

#[async_trait]
impl ActivityStore for PostgresActivityStore {
    async fn append(&self, entry: ActivityLogEntry) -> StoreResult<ActivityLogEntry> {
        sqlx::query(
            "INSERT INTO activity_log (id, user_id, action, recorded_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(*entry.id.as_uuid())
        .bind(*entry.user_id.as_uuid())
        .bind(&entry.action)
        .bind(entry.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("activity.append", e))?;

        Ok(entry)
    }

    async fn list(&self, page: Page) -> StoreResult<Vec<ActivityLogEntry>> {
        let rows = sqlx::query(
            "SELECT id, user_id, action, recorded_at
             FROM activity_log
             ORDER BY recorded_at ASC, id ASC
             OFFSET $1 LIMIT $2",
        )
        .bind(page.offset as i64)
        .bind(page.limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("activity.list", e))?;

        rows.iter().map(entry_from_row).collect()
    }
}
