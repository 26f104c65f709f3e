use futures::StreamExt;
use futures::stream;
use reqwest::header::{DATE, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::bands::Band;
use crate::catalog::Product;
use crate::client::{ModisClient, SubsetQuery, modis_dates};
use crate::dates::{date_key, interval};
use crate::error::Error;
use crate::response::{is_error, normalize_async, transport_error};

impl ModisClient {
    /// Concurrent counterpart of [`ModisClient::execute_range`].
    ///
    /// The snapped date range is split into chunks of at most
    /// [`ModisClient::max_concurrent`] dates. A chunk fans out over one
    /// connection pool created for this invocation and fully drains before
    /// the next chunk starts. Chunk order is preserved in the output; within
    /// a chunk, results land in completion order. A failed request becomes
    /// its slot's error record and never aborts the siblings.
    #[allow(clippy::too_many_arguments)]
    pub fn execute_range_concurrent(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        band: impl Band,
        start_date: &str,
        end_date: &str,
        km_above_below: u32,
        km_left_right: u32,
    ) -> Result<Vec<Value>, Error> {
        let query = SubsetQuery::new(
            product,
            latitude,
            longitude,
            band.token(),
            km_above_below,
            km_left_right,
        );
        let listing = self.dates(product, latitude, longitude);
        if is_error(&listing) {
            return Ok(vec![listing]);
        }
        let mut dates = modis_dates(&listing);
        dates.sort_by_key(|d| date_key(d));
        let range = interval(&dates, start_date, end_date)?;
        self.run_chunked(&query, range)
    }

    /// Concurrent counterpart of [`ModisClient::execute_all`], covering every
    /// composite date the product has at the location.
    pub fn execute_all_concurrent(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        band: impl Band,
        km_above_below: u32,
        km_left_right: u32,
    ) -> Result<Vec<Value>, Error> {
        let query = SubsetQuery::new(
            product,
            latitude,
            longitude,
            band.token(),
            km_above_below,
            km_left_right,
        );
        let listing = self.dates(product, latitude, longitude);
        if is_error(&listing) {
            return Ok(vec![listing]);
        }
        self.run_chunked(&query, modis_dates(&listing))
    }

    fn run_chunked(&self, query: &SubsetQuery, dates: Vec<String>) -> Result<Vec<Value>, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let chunk_size = self.max_concurrent().max(1);

        runtime.block_on(async {
            // One pool per invocation, dropped when the batch completes.
            let http = self.async_http()?;
            let mut results = Vec::with_capacity(dates.len());
            for chunk in dates.chunks(chunk_size) {
                let batch: Vec<Value> = stream::iter(chunk)
                    .map(|date| self.fetch_subset(&http, query, date))
                    .buffer_unordered(chunk.len())
                    .collect()
                    .await;
                results.extend(batch);
            }
            Ok(results)
        })
    }

    fn async_http(&self) -> Result<reqwest::Client, Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("modisrest-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("modisrest-rs")),
        );
        Ok(reqwest::Client::builder()
            .default_headers(default_headers)
            .timeout(self.timeout())
            .build()?)
    }

    async fn fetch_subset(&self, http: &reqwest::Client, query: &SubsetQuery, date: &str) -> Value {
        let url = self.subset_url(query, date, date);
        debug!(%url, "GET (concurrent)");
        match http.get(&url).send().await {
            Ok(resp) => {
                let time = resp
                    .headers()
                    .get(DATE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                // Last-writer-wins while the chunk is in flight.
                self.record_response(time, resp.url().to_string());
                normalize_async(resp).await
            }
            Err(err) => transport_error(&err, &url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::Mod13Q1Band;

    const DATES: [&str; 5] = ["A2020305", "A2020321", "A2020330", "A2020337", "A2020346"];

    fn dates_body() -> String {
        let entries: Vec<String> = DATES
            .iter()
            .map(|d| format!(r#"{{"modis_date": "{d}"}}"#))
            .collect();
        format!(r#"{{"dates": [{}]}}"#, entries.join(", "))
    }

    fn subset_mock(server: &mut mockito::Server, date: &str, status: usize) -> mockito::Mock {
        let body = if status == 200 {
            format!(r#"{{"subset": [{{"modis_date": "{date}"}}]}}"#)
        } else {
            r#"{"detail": "backend worker crashed"}"#.to_string()
        };
        server
            .mock(
                "GET",
                format!(
                    "/rst/api/v1/MOD13Q1/subset?latitude=44.05&longitude=10.35\
                     &band=250m_16_days_NDVI&startDate={date}&endDate={date}\
                     &kmAboveBelow=0&kmLeftRight=0"
                )
                .as_str(),
            )
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    fn dates_mock(server: &mut mockito::Server) -> mockito::Mock {
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(dates_body())
            .create()
    }

    fn yielded_dates(results: &[Value]) -> Vec<String> {
        results
            .iter()
            .map(|r| {
                r["subset"][0]["modis_date"]
                    .as_str()
                    .expect("date")
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn chunks_preserve_order_across_boundaries() {
        let mut server = mockito::Server::new();
        dates_mock(&mut server);
        let mocks = DATES.map(|date| subset_mock(&mut server, date, 200));

        let mut client = ModisClient::new(server.url()).expect("client");
        client.set_max_concurrent(2).expect("limit");

        let results = client
            .execute_all_concurrent(Product::Mod13Q1, 44.05, 10.35, Mod13Q1Band::Ndvi, 0, 0)
            .expect("batch");

        for mock in &mocks {
            mock.assert();
        }
        assert_eq!(results.len(), DATES.len());

        // Within a chunk the order is whatever completed first; chunk
        // boundaries are hard.
        let yielded = yielded_dates(&results);
        let mut first: Vec<&str> = yielded[..2].iter().map(String::as_str).collect();
        let mut second: Vec<&str> = yielded[2..4].iter().map(String::as_str).collect();
        first.sort_unstable();
        second.sort_unstable();
        assert_eq!(first, ["A2020305", "A2020321"]);
        assert_eq!(second, ["A2020330", "A2020337"]);
        assert_eq!(yielded[4], "A2020346");
    }

    #[test]
    fn a_failed_request_only_claims_its_own_slot() {
        let mut server = mockito::Server::new();
        dates_mock(&mut server);
        for date in DATES {
            let status = if date == "A2020330" { 500 } else { 200 };
            subset_mock(&mut server, date, status);
        }

        let client = ModisClient::new(server.url()).expect("client");
        let results = client
            .execute_all_concurrent(Product::Mod13Q1, 44.05, 10.35, Mod13Q1Band::Ndvi, 0, 0)
            .expect("batch");

        assert_eq!(results.len(), DATES.len());
        let failures: Vec<&Value> = results.iter().filter(|r| is_error(r)).collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0]["status"], 500);
        assert_eq!(failures[0]["detail"], "backend worker crashed");
        assert_eq!(results.iter().filter(|r| !is_error(r)).count(), 4);
    }

    #[test]
    fn range_variant_snaps_and_resolves_before_fanning_out() {
        let mut server = mockito::Server::new();
        dates_mock(&mut server);
        let mocks =
            ["A2020321", "A2020330", "A2020337"].map(|date| subset_mock(&mut server, date, 200));

        let client = ModisClient::new(server.url()).expect("client");
        let results = client
            .execute_range_concurrent(
                Product::Mod13Q1,
                44.05,
                10.35,
                Mod13Q1Band::Ndvi,
                "A2020320",
                "A2020340",
                0,
                0,
            )
            .expect("batch");

        for mock in &mocks {
            mock.assert();
        }
        let mut yielded = yielded_dates(&results);
        yielded.sort_unstable();
        assert_eq!(yielded, ["A2020321", "A2020330", "A2020337"]);
    }

    #[test]
    fn inverted_range_fails_before_any_subset_request() {
        let mut server = mockito::Server::new();
        dates_mock(&mut server);

        let client = ModisClient::new(server.url()).expect("client");
        let err = client
            .execute_range_concurrent(
                Product::Mod13Q1,
                44.05,
                10.35,
                Mod13Q1Band::Ndvi,
                "A2020346",
                "A2020305",
                0,
                0,
            )
            .expect_err("inverted range");
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn failed_listing_short_circuits_the_batch() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/rst/api/v1/MOD13Q1/dates?latitude=44.05&longitude=10.35",
            )
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "maintenance window"}"#)
            .create();

        let client = ModisClient::new(server.url()).expect("client");
        let results = client
            .execute_all_concurrent(Product::Mod13Q1, 44.05, 10.35, Mod13Q1Band::Ndvi, 0, 0)
            .expect("batch");

        assert_eq!(results.len(), 1);
        assert!(is_error(&results[0]));
        assert_eq!(results[0]["status"], 503);
    }
}
