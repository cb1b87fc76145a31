use async_trait::async_trait;

/// An ordered collection that is counted and sliced on demand instead of
/// being loaded in full.
///
/// Both calls are made at most once per connection resolution.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    type Node;
    type Error;

    async fn count(&self) -> Result<usize, Self::Error>;

    /// Up to `limit` items starting at the zero based `offset`.
    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Self::Node>, Self::Error>;
}
