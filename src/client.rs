use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{DATE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::bands::Band;
use crate::catalog::{Product, Sensor, Tool};
use crate::dates::date_key;
use crate::error::Error;
use crate::response::{self, NO_HTTP_STATUS, error_detail, error_value, is_error};

/// Public instance of the Subsets web service.
pub const DEFAULT_BASE_URL: &str = "https://modis.ornl.gov";

pub(crate) const DEFAULT_API_VERSION: u32 = 1;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The service rejects more than this many concurrent requests per host.
pub(crate) const MAX_CONCURRENT_CAP: usize = 10;

/// Blocking client for the MODIS/VIIRS Land Products Subsets web service.
///
/// Every operation returns a normalized `serde_json::Value`: the decoded
/// upstream payload on success, or an error record `{status, title, url,
/// detail}` (see [`crate::is_error`]). Upstream and transport failures never
/// surface as `Err`; only usage errors do (see [`Error`]).
///
/// The client remembers the HTTP `Date` header and final URL of the last
/// obtained response, scoped to this instance. The bookkeeping is
/// last-writer-wins and is not meaningful while a concurrent batch is in
/// flight or when one instance is shared across threads.
#[derive(Debug)]
pub struct ModisClient {
    base_url: String,
    version: u32,
    api_root: String,
    timeout: Duration,
    max_concurrent: usize,
    last: Mutex<LastRequest>,
    http: HttpClient,
}

#[derive(Debug, Default)]
struct LastRequest {
    time: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DatesListing {
    #[serde(default)]
    dates: Vec<DateEntry>,
}

#[derive(Debug, Deserialize)]
struct DateEntry {
    modis_date: String,
}

/// Composite dates of a well-formed dates listing, in listing order.
pub(crate) fn modis_dates(listing: &Value) -> Vec<String> {
    serde_json::from_value::<DatesListing>(listing.clone())
        .map(|l| l.dates.into_iter().map(|d| d.modis_date).collect())
        .unwrap_or_default()
}

/// Parameters of a subset query shared by the single-request and batch paths.
#[derive(Debug, Clone)]
pub(crate) struct SubsetQuery {
    pub(crate) product: Product,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) band: String,
    pub(crate) km_above_below: u32,
    pub(crate) km_left_right: u32,
}

impl SubsetQuery {
    pub(crate) fn new(
        product: Product,
        latitude: f64,
        longitude: f64,
        band: &str,
        km_above_below: u32,
        km_left_right: u32,
    ) -> Self {
        Self {
            product,
            latitude,
            longitude,
            band: band.to_string(),
            km_above_below,
            km_left_right,
        }
    }
}

impl ModisClient {
    /// Creates a client for `base_url` speaking API version 1.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Self::build(base_url.into(), DEFAULT_API_VERSION, DEFAULT_TIMEOUT)
    }

    /// Creates a client from the `MODISREST_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, Error> {
        let base_url =
            std::env::var("MODISREST_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Switches to another REST API version.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self.api_root = api_root(&self.base_url, version);
        self
    }

    /// Rebuilds the client with a different per-request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, Error> {
        Self::build(self.base_url, self.version, timeout)
    }

    fn build(base_url: String, version: u32, timeout: Duration) -> Result<Self, Error> {
        if timeout.is_zero() {
            return Err(Error::Timeout(timeout));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        let api_root = api_root(&base_url, version);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("modisrest-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("modisrest-rs")),
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url,
            version,
            api_root,
            timeout,
            max_concurrent: MAX_CONCURRENT_CAP,
            last: Mutex::new(LastRequest::default()),
            http,
        })
    }

    /// Fully qualified API root, `<base>/rst/api/v<version>`.
    pub fn base_url(&self) -> &str {
        &self.api_root
    }

    /// REST API version this client speaks.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Maximum number of requests a concurrent batch keeps in flight.
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Sets the concurrent-batch limit.
    ///
    /// Fails with [`Error::Configuration`] above 10: the service cannot
    /// process more than 10 concurrent requests from the same host, so the
    /// cap is an external constraint, not a performance knob.
    pub fn set_max_concurrent(&mut self, limit: usize) -> Result<(), Error> {
        if limit > MAX_CONCURRENT_CAP {
            return Err(Error::Configuration(limit));
        }
        self.max_concurrent = limit;
        Ok(())
    }

    /// HTTP `Date` header of the last obtained response.
    pub fn last_request_time(&self) -> Result<String, Error> {
        self.lock_last()
            .time
            .clone()
            .ok_or(Error::NotFound("the HTTP header time is not found"))
    }

    /// Final URL of the last obtained response.
    pub fn last_request_url(&self) -> Result<String, Error> {
        self.lock_last()
            .url
            .clone()
            .ok_or(Error::NotFound("the URL is not found"))
    }

    fn lock_last(&self) -> std::sync::MutexGuard<'_, LastRequest> {
        self.last.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn record_response(&self, time: Option<String>, url: String) {
        let mut last = self.lock_last();
        last.time = time;
        last.url = Some(url);
    }

    /// One blocking GET, normalized. Last-request state is cleared up front
    /// and repopulated only when an HTTP response was obtained.
    pub(crate) fn request(&self, url: &str) -> Value {
        *self.lock_last() = LastRequest::default();
        debug!(%url, "GET");
        match self.http.get(url).send() {
            Ok(resp) => {
                let time = resp
                    .headers()
                    .get(DATE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                self.record_response(time, resp.url().to_string());
                response::normalize(resp)
            }
            Err(err) => response::transport_error(&err, url),
        }
    }

    /// Lists the products available, optionally filtered by sensor and tool.
    pub fn products(&self, sensor: Sensor, tool: Tool) -> Value {
        let url = format!("{}/products?sensor={sensor}&tool={tool}", self.api_root);
        self.request(&url)
    }

    /// Lists the bands available for a product.
    pub fn bands(&self, product: Product) -> Value {
        let url = format!("{}/{product}/bands", self.api_root);
        self.request(&url)
    }

    /// Lists the composite dates available for the product at a location.
    pub fn dates(&self, product: Product, latitude: f64, longitude: f64) -> Value {
        let url = format!(
            "{}/{product}/dates?latitude={latitude}&longitude={longitude}",
            self.api_root
        );
        self.request(&url)
    }

    /// Extracts a spatial subset of one band (or `all`) around a location for
    /// a composite-date period. The service caps a single call at 10
    /// composite dates; the batch entry points lift that limit.
    ///
    /// `km_above_below` / `km_left_right` are the half-sizes of the subset in
    /// kilometers, each within `[0, 100]`; zero for both returns the single
    /// pixel value.
    #[allow(clippy::too_many_arguments)]
    pub fn subset(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        band: impl Band,
        start_date: &str,
        end_date: &str,
        km_above_below: u32,
        km_left_right: u32,
    ) -> Value {
        let query = SubsetQuery::new(
            product,
            latitude,
            longitude,
            band.token(),
            km_above_below,
            km_left_right,
        );
        self.request(&self.subset_url(&query, start_date, end_date))
    }

    pub(crate) fn subset_url(&self, query: &SubsetQuery, start_date: &str, end_date: &str) -> String {
        format!(
            "{}/{}/subset?latitude={}&longitude={}&band={}&startDate={}&endDate={}&kmAboveBelow={}&kmLeftRight={}",
            self.api_root,
            query.product,
            query.latitude,
            query.longitude,
            query.band,
            start_date,
            end_date,
            query.km_above_below,
            query.km_left_right,
        )
    }

    pub(crate) fn subset_for_date(&self, query: &SubsetQuery, date: &str) -> Value {
        self.request(&self.subset_url(query, date, date))
    }

    /// Subset of the most recent acquisition for the product, location and
    /// band combination. A failed dates listing is returned unchanged; a
    /// listing with no dates yields a `NO DATA AVAILABLE` error record.
    pub fn last_acquisition(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        band: impl Band,
        km_above_below: u32,
        km_left_right: u32,
    ) -> Value {
        let listing = self.dates(product, latitude, longitude);
        if is_error(&listing) {
            return listing;
        }
        match modis_dates(&listing).into_iter().max_by_key(|d| date_key(d)) {
            Some(last) => self.subset(
                product,
                latitude,
                longitude,
                band.token(),
                &last,
                &last,
                km_above_below,
                km_left_right,
            ),
            None => error_value(
                NO_HTTP_STATUS,
                "NO DATA AVAILABLE",
                &self.last_request_url().unwrap_or_default(),
                json!(format!(
                    "no acquisition dates for {product} at {latitude} {longitude}"
                )),
            ),
        }
    }

    /// Whether the product has an acquisition exactly at `reference_date` for
    /// the location. Unlike the listing operations this re-raises a failed
    /// dates call, carrying the upstream detail as the error message.
    pub fn is_present(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        reference_date: &str,
    ) -> Result<bool, Error> {
        let listing = self.dates(product, latitude, longitude);
        if let Some(detail) = error_detail(&listing) {
            return Err(Error::Upstream(detail));
        }
        Ok(modis_dates(&listing).iter().any(|d| d == reference_date))
    }

    /// Partitions the catalog into products that do and do not have an
    /// acquisition at `reference_date` for the location.
    ///
    /// Returns `{date, available: [...], not_available: [...]}`. A product
    /// missing the date keeps its listing record merged with a synthetic 777
    /// `NO DATA AVAILABLE` error; a product whose dates call failed keeps its
    /// record merged with that error. A failed products call is returned
    /// unchanged.
    pub fn availability_report(&self, latitude: f64, longitude: f64, reference_date: &str) -> Value {
        let products = self.products(Sensor::All, Tool::All);
        if is_error(&products) {
            return products;
        }

        let records = products
            .get("products")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut available: Vec<Value> = Vec::new();
        let mut not_available: Vec<Value> = Vec::new();

        for mut record in records {
            let Some(code) = record.get("product").and_then(Value::as_str) else {
                continue;
            };
            // Skip codes outside the known vocabulary.
            let Ok(product) = Product::from_str(code) else {
                continue;
            };

            let listing = self.dates(product, latitude, longitude);
            if is_error(&listing) {
                merge(&mut record, &listing);
                not_available.push(record);
            } else if modis_dates(&listing).iter().any(|d| d == reference_date) {
                available.push(record);
            } else {
                let absent = error_value(
                    NO_HTTP_STATUS,
                    "NO DATA AVAILABLE",
                    &self.last_request_url().unwrap_or_default(),
                    json!(format!(
                        "No data available for day {reference_date} for {product} {latitude} {longitude} combination."
                    )),
                );
                merge(&mut record, &absent);
                not_available.push(record);
            }
        }

        json!({
            "date": reference_date,
            "available": available,
            "not_available": not_available,
        })
    }
}

fn api_root(base_url: &str, version: u32) -> String {
    format!("{base_url}/rst/api/v{version}")
}

fn merge(record: &mut Value, extra: &Value) {
    if let (Value::Object(record), Value::Object(extra)) = (record, extra) {
        for (key, value) in extra {
            record.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::Mod13Q1Band;

    const DATES_BODY: &str = r#"{"dates": [
        {"modis_date": "A2020330", "calendar_date": "2020-11-25"},
        {"modis_date": "A2020346", "calendar_date": "2020-12-11"},
        {"modis_date": "A2020337", "calendar_date": "2020-12-02"}
    ]}"#;

    fn client_for(server: &mockito::Server) -> ModisClient {
        ModisClient::new(server.url()).expect("client")
    }

    #[test]
    fn api_root_includes_version_prefix() {
        let client = ModisClient::new("https://modis.ornl.gov/").expect("client");
        assert_eq!(client.base_url(), "https://modis.ornl.gov/rst/api/v1");
        assert_eq!(client.version(), 1);

        let client = client.with_version(2);
        assert_eq!(client.base_url(), "https://modis.ornl.gov/rst/api/v2");
        assert_eq!(client.version(), 2);
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ModisClient::new("https://modis.ornl.gov")
            .and_then(|c| c.with_timeout(Duration::ZERO))
            .expect_err("zero timeout");
        assert!(matches!(err, Error::Timeout(_)));
    }

    #[test]
    fn products_is_idempotent_and_renders_tokens() {
        let mut server = mockito::Server::new();
        let body = r#"{"products": [{"product": "MOD13Q1", "description": "Vegetation Indices"}]}"#;
        let mock = server
            .mock(
                "GET",
                "/rst/api/v1/products?sensor=MODIS-Terra&tool=GlobalSubset",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(2)
            .create();

        let client = client_for(&server);
        let first = client.products(Sensor::ModisTerra, Tool::GlobalSubset);
        let second = client.products(Sensor::ModisTerra, Tool::GlobalSubset);

        mock.assert();
        assert!(!is_error(&first));
        assert_eq!(first, second);
        assert_eq!(first["products"][0]["product"], "MOD13Q1");
    }

    #[test]
    fn subset_url_carries_every_parameter() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/subset?latitude=44.05&longitude=10.35\
                 &band=250m_16_days_NDVI&startDate=A2020337&endDate=A2020337\
                 &kmAboveBelow=1&kmLeftRight=2",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"subset": [{"modis_date": "A2020337"}]}"#)
            .create();

        let client = client_for(&server);
        let reply = client.subset(
            Product::Mod13Q1,
            44.05,
            10.35,
            Mod13Q1Band::Ndvi,
            "A2020337",
            "A2020337",
            1,
            2,
        );

        mock.assert();
        assert!(!is_error(&reply));
        assert_eq!(reply["subset"][0]["modis_date"], "A2020337");
    }

    #[test]
    fn last_request_state_tracks_the_latest_response() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rst/api/v1/MOD13Q1/bands")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("date", "Mon, 21 Mar 2022 10:06:49 GMT")
            .with_body(r#"{"bands": []}"#)
            .create();

        let client = client_for(&server);
        assert!(matches!(
            client.last_request_time(),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(client.last_request_url(), Err(Error::NotFound(_))));

        client.bands(Product::Mod13Q1);
        assert_eq!(
            client.last_request_time().expect("time"),
            "Mon, 21 Mar 2022 10:06:49 GMT"
        );
        assert!(
            client
                .last_request_url()
                .expect("url")
                .ends_with("/rst/api/v1/MOD13Q1/bands")
        );
    }

    #[test]
    fn last_acquisition_targets_the_numerically_greatest_date() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(DATES_BODY)
            .create();
        let subset = server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/subset?latitude=44.05&longitude=10.35\
                 &band=250m_16_days_NDVI&startDate=A2020346&endDate=A2020346\
                 &kmAboveBelow=0&kmLeftRight=0",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"subset": [{"modis_date": "A2020346"}]}"#)
            .create();

        let client = client_for(&server);
        let reply = client.last_acquisition(
            Product::Mod13Q1,
            44.05,
            10.35,
            Mod13Q1Band::Ndvi,
            0,
            0,
        );

        subset.assert();
        assert_eq!(reply["subset"][0]["modis_date"], "A2020346");
    }

    #[test]
    fn last_acquisition_flags_an_empty_listing() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"dates": []}"#)
            .create();

        let client = client_for(&server);
        let reply = client.last_acquisition(
            Product::Mod13Q1,
            44.05,
            10.35,
            Mod13Q1Band::Ndvi,
            0,
            0,
        );

        assert!(is_error(&reply));
        assert_eq!(reply["status"], 777);
        assert_eq!(reply["title"], "NO DATA AVAILABLE");
    }

    #[test]
    fn is_present_matches_exact_composite_dates() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(DATES_BODY)
            .expect(2)
            .create();

        let client = client_for(&server);
        assert!(
            client
                .is_present(Product::Mod13Q1, 44.05, 10.35, "A2020337")
                .expect("present")
        );
        assert!(
            !client
                .is_present(Product::Mod13Q1, 44.05, 10.35, "A2020001")
                .expect("absent")
        );
    }

    #[test]
    fn is_present_reraises_a_failed_listing() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "backend worker crashed"}"#)
            .create();

        let client = client_for(&server);
        let err = client
            .is_present(Product::Mod13Q1, 44.05, 10.35, "A2020337")
            .expect_err("upstream failure");
        assert!(matches!(err, Error::Upstream(ref d) if d == "backend worker crashed"));
    }

    #[test]
    fn availability_report_partitions_the_whole_catalog() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rst/api/v1/products?sensor=&tool=")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"products": [
                    {"product": "MOD13Q1", "description": "Vegetation Indices"},
                    {"product": "MYD13Q1", "description": "Vegetation Indices"},
                    {"product": "MOD11A2", "description": "Land Surface Temperature"}
                ]}"#,
            )
            .create();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(DATES_BODY)
            .create();
        server
            .mock(
                "GET",
                "/rst/api/v1/MYD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"dates": [{"modis_date": "A2020345"}]}"#)
            .create();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD11A2/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "backend worker crashed"}"#)
            .create();

        let client = client_for(&server);
        let report = client.availability_report(44.05, 10.35, "A2020337");

        assert_eq!(report["date"], "A2020337");
        let available = report["available"].as_array().expect("available");
        assert_eq!(available.len(), 1);
        assert_eq!(available[0]["product"], "MOD13Q1");
        assert_eq!(available[0]["description"], "Vegetation Indices");

        let not_available = report["not_available"].as_array().expect("not_available");
        assert_eq!(not_available.len(), 2);
        let absent = not_available
            .iter()
            .find(|r| r["product"] == "MYD13Q1")
            .expect("absent record");
        assert_eq!(absent["status"], 777);
        assert_eq!(absent["title"], "NO DATA AVAILABLE");
        assert_eq!(absent["description"], "Vegetation Indices");
        let failed = not_available
            .iter()
            .find(|r| r["product"] == "MOD11A2")
            .expect("failed record");
        assert_eq!(failed["status"], 500);
        assert_eq!(failed["detail"], "backend worker crashed");
    }

    #[test]
    fn availability_report_propagates_a_failed_products_call() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rst/api/v1/products?sensor=&tool=")
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "maintenance window"}"#)
            .create();

        let client = client_for(&server);
        let report = client.availability_report(44.05, 10.35, "A2020337");
        assert!(is_error(&report));
        assert_eq!(report["status"], 503);
    }

    #[test]
    fn concurrency_limit_is_capped_at_ten() {
        let mut client = ModisClient::new("https://modis.ornl.gov").expect("client");
        assert_eq!(client.max_concurrent(), 10);

        let err = client.set_max_concurrent(11).expect_err("over the cap");
        assert!(matches!(err, Error::Configuration(11)));
        assert_eq!(client.max_concurrent(), 10);

        client.set_max_concurrent(4).expect("within the cap");
        assert_eq!(client.max_concurrent(), 4);
    }
}
