//! Page locking for secret buffers.
//!
//! `mlock` works on whole pages and does not nest: unlocking a page releases
//! it for every secret stored there. Pages are therefore reference counted
//! and unlocked only when the last secret on them is dropped.
//!
//! Locking is best effort. When the OS refuses (typically `RLIMIT_MEMLOCK`)
//! the page is still tracked, the secret is still zeroed on drop, and the
//! failure is logged at debug level.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct LockedPage {
    secrets: usize,
    _guard: Option<region::LockGuard>,
}

static LOCKED_PAGES: Mutex<BTreeMap<usize, LockedPage>> = Mutex::new(BTreeMap::new());

fn table() -> MutexGuard<'static, BTreeMap<usize, LockedPage>> {
    LOCKED_PAGES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start addresses of the pages spanned by `bytes`.
fn pages(bytes: &[u8]) -> impl Iterator<Item = usize> {
    let page_size = region::page::size();
    let start = bytes.as_ptr() as usize;
    let first = start - start % page_size;
    let last = start + bytes.len().saturating_sub(1);
    (first..=last).step_by(page_size)
}

fn lock_page(page: usize) -> Option<region::LockGuard> {
    match region::lock(page as *const u8, region::page::size()) {
        Ok(guard) => Some(guard),
        Err(error) => {
            tracing::debug!(?error, "could not lock secret page in memory");
            None
        }
    }
}

/// Registers `bytes` as secret, locking any page not already locked.
pub(crate) fn lock(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let mut table = table();
    for page in pages(bytes) {
        table
            .entry(page)
            .or_insert_with(|| LockedPage {
                secrets: 0,
                _guard: lock_page(page),
            })
            .secrets += 1;
    }
}

/// Releases `bytes`; pages with no remaining secrets are unlocked.
///
/// The caller must have wiped `bytes` already.
pub(crate) fn unlock(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let mut table = table();
    for page in pages(bytes) {
        let Some(entry) = table.get_mut(&page) else {
            continue;
        };
        entry.secrets -= 1;
        if entry.secrets == 0 {
            table.remove(&page);
        }
    }
}

/// True if every page spanned by `bytes` is registered.
#[cfg(test)]
pub(crate) fn is_tracked(bytes: &[u8]) -> bool {
    let table = table();
    pages(bytes).all(|page| table.contains_key(&page))
}
