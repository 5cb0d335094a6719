//! Cache-invalidation capability and per-request handles.
//!
//! The response cache itself lives in the host environment (the rendering or
//! routing collaborator); this layer only addresses it. Every query operation
//! binds its canonical request URL into an [`InvalidationHandle`], and
//! invoking the handle asks the injected [`Invalidator`] to treat that URL as
//! stale so a displayed view re-runs its fetch.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use url::Url;

/// Host-supplied capability that marks a cached request URL stale.
#[async_trait]
pub trait Invalidator: Send + Sync {
    /// Marks `url` stale in the host cache, triggering a refetch of any view
    /// currently displaying it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cache rejects the request. Repeated
    /// invalidation of the same URL must be harmless.
    async fn invalidate(&self, url: &Url) -> anyhow::Result<()>;
}

/// Invalidator for hosts without a cache; accepts and ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInvalidator;

#[async_trait]
impl Invalidator for NoopInvalidator {
    async fn invalidate(&self, url: &Url) -> anyhow::Result<()> {
        tracing::trace!(%url, "no host cache attached, invalidation ignored");
        Ok(())
    }
}

/// One invalidation target: a capability bound to a canonical URL.
#[derive(Clone)]
struct Target {
    invalidator: Arc<dyn Invalidator>,
    url: Url,
}

impl Target {
    async fn fire(&self) -> anyhow::Result<()> {
        self.invalidator.invalidate(&self.url).await
    }
}

/// A capability to force a refetch of one or more previously-issued requests.
///
/// Handles are cheap to clone and safe to invoke repeatedly. A combined
/// handle (see [`InvalidationHandle::combine`]) invokes every constituent
/// concurrently and never fails itself.
#[derive(Clone)]
pub struct InvalidationHandle {
    targets: Vec<Target>,
    combined: bool,
}

impl InvalidationHandle {
    /// Binds `url` to the given invalidator capability.
    #[must_use]
    pub fn new(invalidator: Arc<dyn Invalidator>, url: Url) -> Self {
        Self {
            targets: vec![Target { invalidator, url }],
            combined: false,
        }
    }

    /// Combines handles into one that keeps several requests fresh together.
    ///
    /// Constituents of already-combined handles are flattened in. Invoking
    /// the result runs every constituent concurrently with settle-all
    /// semantics: each constituent runs to completion regardless of the
    /// others, failures are logged and swallowed, and the combined
    /// invocation itself always succeeds.
    #[must_use]
    pub fn combine(handles: Vec<Self>) -> Self {
        let targets = handles.into_iter().flat_map(|h| h.targets).collect();
        Self {
            targets,
            combined: true,
        }
    }

    /// Canonical URLs this handle addresses.
    #[must_use]
    pub fn urls(&self) -> Vec<&Url> {
        self.targets.iter().map(|t| &t.url).collect()
    }

    /// Asks the host cache to treat the bound request(s) as stale.
    ///
    /// # Errors
    ///
    /// A single-request handle surfaces the host cache's error unchanged. A
    /// combined handle never fails: a failed constituent leaves its prior
    /// cached value in place and is reported at `warn` level only.
    pub async fn invoke(&self) -> anyhow::Result<()> {
        if self.combined {
            let results = join_all(self.targets.iter().map(Target::fire)).await;
            for (target, result) in self.targets.iter().zip(results) {
                if let Err(error) = result {
                    tracing::warn!(url = %target.url, %error, "invalidation failed, cached value retained");
                }
            }
            return Ok(());
        }

        for target in &self.targets {
            target.fire().await?;
        }
        Ok(())
    }
}

impl fmt::Debug for InvalidationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidationHandle")
            .field("urls", &self.urls())
            .field("combined", &self.combined)
            .finish()
    }
}
