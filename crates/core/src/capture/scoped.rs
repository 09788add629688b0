//! Scoped acquisition: release a resource on every exit path.

use std::ops::{Deref, DerefMut};

/// Owns a resource and runs `release` on it when dropped, including while
/// unwinding from a panic.
pub struct Scoped<R, F>
where
    F: FnOnce(&mut R),
{
    resource: R,
    release: Option<F>,
}

impl<R, F> Scoped<R, F>
where
    F: FnOnce(&mut R),
{
    pub fn new(resource: R, release: F) -> Self {
        Self {
            resource,
            release: Some(release),
        }
    }

    /// Skip the release step; the resource is still dropped normally
    pub fn cancel(&mut self) {
        self.release = None;
    }
}

impl<R, F> Deref for Scoped<R, F>
where
    F: FnOnce(&mut R),
{
    type Target = R;

    fn deref(&self) -> &R {
        &self.resource
    }
}

impl<R, F> DerefMut for Scoped<R, F>
where
    F: FnOnce(&mut R),
{
    fn deref_mut(&mut self) -> &mut R {
        &mut self.resource
    }
}

impl<R, F> Drop for Scoped<R, F>
where
    F: FnOnce(&mut R),
{
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&mut self.resource);
        }
    }
}

/// Acquire `resource`, run `body` with it and release it afterwards, whether
/// `body` returns or unwinds.
pub fn scoped<R, T, F, B>(resource: R, release: F, body: B) -> T
where
    F: FnOnce(&mut R),
    B: FnOnce(&mut R) -> T,
{
    let mut guard = Scoped::new(resource, release);
    body(&mut guard)
}
