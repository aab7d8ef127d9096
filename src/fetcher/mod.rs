pub mod endpoints;
pub mod http_fetcher;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

pub use endpoints::Endpoints;

/// Raw transport: GET a URL and hand back the response body.
///
/// Decoding belongs to [`Normalizer`](crate::normalizer::Normalizer), so test
/// doubles only need to serve bytes.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}
