//! Zmanim request factory: turns a civil date into a computed time table.

use chrono::NaiveDate;
use luach_domain::config::Config;
use luach_domain::zmanim::{ZmanimRequest, ZmanimTable};

use crate::ports::ZmanimProvider;

/// Builds time tables for an entry's location, offsets, and language.
///
/// Nothing is cached: every call goes to the provider, which owns the cost of
/// the astronomical computation.
pub struct ZmanimRequestFactory<'a, Z> {
    config: &'a Config,
    provider: &'a Z,
}

impl<Z> Clone for ZmanimRequestFactory<'_, Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Z> Copy for ZmanimRequestFactory<'_, Z> {}

impl<'a, Z: ZmanimProvider> ZmanimRequestFactory<'a, Z> {
    pub fn new(config: &'a Config, provider: &'a Z) -> Self {
        Self { config, provider }
    }

    /// The request that [`build`](Self::build) would send for `date`.
    #[must_use]
    pub fn request(&self, date: NaiveDate) -> ZmanimRequest {
        ZmanimRequest::for_date(date, self.config)
    }

    /// Compute the time table for `date`.
    #[must_use]
    pub fn build(&self, date: NaiveDate) -> ZmanimTable {
        tracing::trace!(%date, location = %self.config.location.name, "computing zmanim");
        self.provider.zmanim(&self.request(date))
    }
}
