//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Maximum connections held by the database pool
pub const DB_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Cache (Redis)
// =============================================================================

/// Default Redis host (for development)
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";

/// Default Redis port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

// =============================================================================
// Worker Pool
// =============================================================================

/// Default number of worker tasks in the pool
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Upper bound on worker tasks (pool is deliberately small)
pub const MAX_WORKER_THREADS: usize = 4;

/// Per-worker queue depth before submissions apply backpressure
pub const WORKER_QUEUE_DEPTH: usize = 32;

// =============================================================================
// File Intake
// =============================================================================

/// Directory where uploaded files are persisted
pub const UPLOAD_DIR: &str = "./uploads";

/// Multipart field name carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Realtime Events
// =============================================================================

/// Event broadcast to all live connections after a user is deleted
pub const EVENT_TEST: &str = "testEvent";

/// Payload message carried by the deletion broadcast
pub const EVENT_TEST_MESSAGE: &str = "Hello WebSocket";

/// The only inbound event name the server consumes
pub const EVENT_INBOUND_MESSAGE: &str = "message";

// =============================================================================
// Demo Endpoints
// =============================================================================

/// Key written by the cache demo endpoint
pub const DEMO_CACHE_KEY: &str = "hello";

/// Value written by the cache demo endpoint
pub const DEMO_CACHE_VALUE: &str = "world";

/// TTL applied by the cache demo endpoint, in seconds
pub const DEMO_CACHE_TTL_SECONDS: u64 = 60;

/// Upper bound fed to the worker demo's placeholder sum
pub const DEMO_SUM_UPPER: u64 = 100;
