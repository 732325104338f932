//! Zmanim port: the external halachic time-computation library.

use luach_domain::zmanim::{ZmanimRequest, ZmanimTable};

/// Computes the halachic times for one civil date and location.
pub trait ZmanimProvider {
    fn zmanim(&self, request: &ZmanimRequest) -> ZmanimTable;
}
