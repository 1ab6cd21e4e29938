//! Yahoo Finance chart endpoint.

use async_trait::async_trait;
use quotes_core::error::DataError;
use quotes_core::traits::{QuoteRequest, QuoteSource};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::chart::ChartResponse;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Client settings.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub base_url: String,
    /// Whole-request timeout; the call fails instead of hanging.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("quotes/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Chart source backed by the Yahoo Finance v8 API.
///
/// Each `fetch` is exactly one HTTP request. Error envelopes are handed back
/// as `Ok` so the normalizer can surface them as `DataError::Provider`.
pub struct YahooFinance {
    config: YahooConfig,
    client: Client,
}

impl YahooFinance {
    /// Create a new client.
    pub fn new(config: YahooConfig) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DataError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build the request URL, validating the request on the way.
    pub fn chart_url(&self, request: &QuoteRequest) -> Result<Url, DataError> {
        let symbol = request.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DataError::InvalidRequest("symbol is empty".into()));
        }
        if request.interval.is_intraday() {
            return Err(DataError::InvalidRequest(format!(
                "intraday interval {} is not supported",
                request.interval
            )));
        }

        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| DataError::InvalidRequest(format!("bad base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DataError::InvalidRequest("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol.as_str()]);
        url.query_pairs_mut()
            .append_pair("interval", request.interval.as_str())
            .append_pair("range", &request.period.to_string());

        Ok(url)
    }
}

#[async_trait]
impl QuoteSource for YahooFinance {
    type Response = ChartResponse;

    async fn fetch(&self, request: &QuoteRequest) -> Result<ChartResponse, DataError> {
        let url = self.chart_url(request)?;
        info!(symbol = %request.symbol, interval = %request.interval, period = %request.period, "Fetching chart");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Chart response received");

        if !status.is_success() {
            return match ChartResponse::from_json(&body) {
                Ok(envelope) if envelope.is_error() => Ok(envelope),
                _ => Err(DataError::Http {
                    status: status.as_u16(),
                    body,
                }),
            };
        }

        ChartResponse::from_json(&body)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_chart;
    use quotes_core::types::{Interval, Period};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut read = 0;
            while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf[read..]).await.unwrap();
                if n == 0 {
                    break;
                }
                read += n;
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    /// Accept connections and never answer; returns the accepted count.
    async fn serve_silent() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accepted = Arc::new(AtomicUsize::new(0));
        let counter = accepted.clone();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                held.push(socket);
            }
        });

        (format!("http://{}", addr), accepted)
    }

    fn client(base_url: String) -> YahooFinance {
        YahooFinance::new(YahooConfig {
            base_url,
            ..YahooConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_chart_url() {
        let yahoo = client(DEFAULT_BASE_URL.to_string());
        let url = yahoo
            .chart_url(&QuoteRequest::daily("meta", Period::Days(30)))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://query2.finance.yahoo.com/v8/finance/chart/META?interval=1d&range=30d"
        );
    }

    #[test]
    fn test_chart_url_rejects_bad_requests() {
        let yahoo = client(DEFAULT_BASE_URL.to_string());

        let intraday = QuoteRequest::daily("META", Period::Days(5)).with_interval(Interval::Minute5);
        assert!(matches!(yahoo.chart_url(&intraday), Err(DataError::InvalidRequest(_))));

        let blank = QuoteRequest::daily("  ", Period::Max);
        assert!(matches!(yahoo.chart_url(&blank), Err(DataError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = serve_once(
            "200 OK",
            r#"{"chart":{"result":[{"meta":{"symbol":"META"},"timestamp":[1704205800],"indicators":{"quote":[{"open":[1.0],"high":[2.0],"low":[0.5],"close":[1.5],"volume":[100]}]}}],"error":null}}"#,
        )
        .await;

        let response = client(base)
            .fetch(&QuoteRequest::daily("META", Period::Days(1)))
            .await
            .unwrap();
        let series = normalize_chart(&response).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.get(0).unwrap().close, 1.5);
    }

    #[tokio::test]
    async fn test_fetch_error_envelope_reaches_normalizer() {
        let base = serve_once(
            "404 Not Found",
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        )
        .await;

        let response = client(base)
            .fetch(&QuoteRequest::daily("NOPE", Period::Days(1)))
            .await
            .unwrap();

        assert!(matches!(
            normalize_chart(&response),
            Err(DataError::Provider { code, .. }) if code == "Not Found"
        ));
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let base = serve_once("503 Service Unavailable", "try later").await;

        let result = client(base)
            .fetch(&QuoteRequest::daily("META", Period::Days(1)))
            .await;

        assert!(matches!(result, Err(DataError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_fetch_times_out_once() {
        let (base, accepted) = serve_silent().await;
        let yahoo = YahooFinance::new(YahooConfig {
            base_url: base,
            timeout: Duration::from_millis(200),
            ..YahooConfig::default()
        })
        .unwrap();

        let started = Instant::now();
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            yahoo.fetch(&QuoteRequest::daily("META", Period::Days(1))),
        )
        .await
        .expect("fetch hung past its timeout");

        assert!(matches!(result, Err(DataError::Connection(_))));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
    }
}
