//! Global content registry with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic content replacement, so
//! any number of concurrent readers can access the registry without
//! coordination while an edited `content.toml` can still be swapped in.
//!
//! # Usage
//!
//! ```ignore
//! use crate::content::handle::content;
//!
//! let c = content();
//! render_nav(&c.navbar);  // Arc auto-derefs to &SiteContent
//! ```

use super::SiteContent;
use arc_swap::ArcSwap;
use std::sync::{
    Arc, LazyLock,
    atomic::{AtomicU64, Ordering},
};

// =============================================================================
// Global State
// =============================================================================

/// Global content storage with atomic replacement support.
///
/// Initialized with the built-in content, then replaced with the loaded
/// content in main. Can be atomically replaced when content.toml changes.
pub static CONTENT: LazyLock<ArcSwap<SiteContent>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteContent::default()));

/// Fingerprint of the content file bytes at last load.
static CONTENT_HASH: AtomicU64 = AtomicU64::new(0);

// =============================================================================
// Public API
// =============================================================================

/// Get current content as `Arc<SiteContent>`.
///
/// Returns an `Arc` that keeps the snapshot alive. Thread-safe and
/// wait-free; the Arc auto-derefs to `&SiteContent`.
#[inline]
pub fn content() -> Arc<SiteContent> {
    CONTENT.load_full()
}

/// Initialize global content (called once at startup).
///
/// This replaces the built-in content with the loaded one.
pub fn init_content(content: SiteContent) {
    use std::fs;

    if content.content_path.exists()
        && let Ok(bytes) = fs::read(&content.content_path)
    {
        CONTENT_HASH.store(fingerprint(&bytes), Ordering::Relaxed);
    }

    CONTENT.store(Arc::new(content));
}

/// Replace content atomically (called when content.toml changes).
///
/// The old snapshot remains valid for any readers that loaded it before this
/// call; new readers see the updated content.
///
/// Returns `true` if the registry was actually updated, `false` if the file
/// bytes match the last load.
///
/// # Errors
///
/// Returns error if the file cannot be read, fails to parse, or fails
/// validation. The registry keeps the previous snapshot in that case.
#[allow(unused)]
pub fn reload_content() -> anyhow::Result<bool> {
    use std::fs;

    let current = content();
    let raw = fs::read_to_string(&current.content_path)?;

    let new_hash = fingerprint(raw.as_bytes());
    if new_hash == CONTENT_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let mut new_content = SiteContent::from_str(&raw)?;
    new_content.content_path = current.content_path.clone();
    new_content.validate()?;

    CONTENT.store(Arc::new(new_content));
    CONTENT_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

/// First 8 bytes of the blake3 hash, as the freshness fingerprint.
fn fingerprint(bytes: &[u8]) -> u64 {
    let hash = blake3::hash(bytes);
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(buf)
}
