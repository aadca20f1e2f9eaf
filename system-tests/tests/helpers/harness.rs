// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Client Harness
// Description: Client construction for stub-backed and live suites.
// Purpose: Keep suite setup to one call per test.
// Dependencies: reqres-checks
// ============================================================================

use std::net::SocketAddr;
use std::net::TcpListener;
use std::sync::Arc;

use reqres_checks::ExchangeLogSink;
use reqres_checks::NoopExchangeLog;
use reqres_checks::ReqresClient;
use reqres_checks::SuiteConfig;

use super::reqres_stub::ReqresStubHandle;

/// Returns a free loopback address with nothing listening on it.
pub fn allocate_bind_addr() -> Result<SocketAddr, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("failed to bind loopback: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("failed to read listener address: {err}"))?;
    drop(listener);
    Ok(addr)
}

/// Suite configuration pointed at a stub.
pub fn stub_config(stub: &ReqresStubHandle) -> SuiteConfig {
    SuiteConfig::default().with_base_url(stub.base_url())
}

/// Client for a stub with logging disabled.
pub fn stub_client(stub: &ReqresStubHandle) -> Result<ReqresClient, String> {
    client_for(&stub_config(stub))
}

/// Client for an arbitrary configuration with logging disabled.
pub fn client_for(config: &SuiteConfig) -> Result<ReqresClient, String> {
    let sink: Arc<dyn ExchangeLogSink> = Arc::new(NoopExchangeLog);
    ReqresClient::new(config)
        .map(|client| client.with_log_sink(sink))
        .map_err(|err| err.to_string())
}
