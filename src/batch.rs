use serde_json::Value;

use crate::bands::Band;
use crate::catalog::Product;
use crate::client::{ModisClient, SubsetQuery, modis_dates};
use crate::dates::{date_key, interval};
use crate::error::Error;
use crate::response::is_error;

/// Lazy sequence of single-date subsets.
///
/// Each `next()` performs exactly one blocking HTTP call; the consumer sets
/// the pace and the yield order follows the resolved date order. The series
/// is finite and cannot be restarted. When the dates listing behind it
/// failed, the series yields that error record once and ends.
#[derive(Debug)]
pub struct SubsetSeries<'a> {
    client: &'a ModisClient,
    query: SubsetQuery,
    dates: std::vec::IntoIter<String>,
    pending_error: Option<Value>,
}

impl<'a> SubsetSeries<'a> {
    fn new(client: &'a ModisClient, query: SubsetQuery, dates: Vec<String>) -> Self {
        Self {
            client,
            query,
            dates: dates.into_iter(),
            pending_error: None,
        }
    }

    fn failed(client: &'a ModisClient, query: SubsetQuery, error: Value) -> Self {
        Self {
            client,
            query,
            dates: Vec::new().into_iter(),
            pending_error: Some(error),
        }
    }

    /// Number of requests the series has left to issue.
    pub fn remaining(&self) -> usize {
        self.dates.len() + usize::from(self.pending_error.is_some())
    }
}

impl Iterator for SubsetSeries<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if let Some(error) = self.pending_error.take() {
            return Some(error);
        }
        let date = self.dates.next()?;
        Some(self.client.subset_for_date(&self.query, &date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ModisClient {
    /// Prepares one subset request per composite date between `start_date`
    /// and `end_date`, endpoints snapped to the nearest available dates.
    ///
    /// The available dates are fetched once and sorted ascending before the
    /// range is resolved. An inverted raw range fails immediately with
    /// [`Error::InvalidRange`]; a failed dates call produces a series that
    /// yields the error record.
    #[allow(clippy::too_many_arguments)]
    pub fn execute_range(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        band: impl Band,
        start_date: &str,
        end_date: &str,
        km_above_below: u32,
        km_left_right: u32,
    ) -> Result<SubsetSeries<'_>, Error> {
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
            return Ok(SubsetSeries::failed(self, query, listing));
        }
        let mut dates = modis_dates(&listing);
        dates.sort_by_key(|d| date_key(d));
        let range = interval(&dates, start_date, end_date)?;
        Ok(SubsetSeries::new(self, query, range))
    }

    /// Prepares one subset request per composite date the product has at the
    /// location, in listing order.
    pub fn execute_all(
        &self,
        product: Product,
        latitude: f64,
        longitude: f64,
        band: impl Band,
        km_above_below: u32,
        km_left_right: u32,
    ) -> SubsetSeries<'_> {
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
            return SubsetSeries::failed(self, query, listing);
        }
        SubsetSeries::new(self, query, modis_dates(&listing))
    }
}
