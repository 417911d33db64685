//! Liveness and readiness probes.

/// `GET /healthz` — liveness. Responds as long as the process can serve.
pub async fn healthz() -> &'static str {
    "ok"
}

/// `GET /readyz` — readiness. The service takes no traffic before config and
/// the database connection are established in `main`, so reaching this
/// handler already implies readiness.
pub async fn readyz() -> &'static str {
    "ok"
}
