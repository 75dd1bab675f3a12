use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;
use gg_core::error::CodecError;

use crate::signature::GlyphSignature;

/// DEL and NBSP render nothing useful; the original character ranges skip
/// them.
const EXCLUDED_CODES: [u32; 2] = [127, 160];

/// The full signature table for one character range.
///
/// Signatures are bucketed by average brightness (256 buckets, insertion
/// order preserved inside a bucket) for proximity search, with the single
/// darkest and brightest signatures kept as fallback sentinels.
pub struct GlyphLibrary {
    buckets: Vec<Vec<GlyphSignature>>,
    by_char: HashMap<char, GlyphSignature>,
    darkest: GlyphSignature,
    brightest: GlyphSignature,
    extended: bool,
}

impl GlyphLibrary {
    /// Build the table for the 7-bit (codes 32..127) or extended 8-bit
    /// (codes 32..255) range, minus DEL and NBSP.
    ///
    /// Deterministic: measuring is pure, and characters are inserted in
    /// ascending code order.
    ///
    /// # Errors
    /// Returns [`CodecError::EmptyLibrary`] if no signature was produced.
    pub fn build(use_extended: bool) -> Result<Self, CodecError> {
        let max_code = if use_extended { 255 } else { 127 };
        let signatures: Vec<GlyphSignature> = (32..max_code)
            .filter(|code| !EXCLUDED_CODES.contains(code))
            .map(GlyphSignature::measure)
            .collect();

        let mut library = Self::from_signatures(signatures)?;
        library.extended = use_extended;
        log::info!(
            "glyph library built: {} signatures, darkest {:?} ({}), brightest {:?} ({})",
            library.by_char.len(),
            library.darkest.ch,
            library.darkest.average,
            library.brightest.ch,
            library.brightest.average,
        );
        Ok(library)
    }

    /// Build a table from explicit signatures, in the given order.
    ///
    /// # Errors
    /// Returns [`CodecError::EmptyLibrary`] for an empty signature list.
    pub fn from_signatures(signatures: Vec<GlyphSignature>) -> Result<Self, CodecError> {
        let first = *signatures.first().ok_or(CodecError::EmptyLibrary)?;

        let mut buckets: Vec<Vec<GlyphSignature>> = vec![Vec::new(); 256];
        let mut by_char = HashMap::with_capacity(signatures.len());
        let mut darkest = first;
        let mut brightest = first;

        for sig in signatures {
            debug_assert!(
                sig.quadrants.iter().map(|&q| u32::from(q)).sum::<u32>() <= 9 * 255,
                "invalid brightness for {:?}",
                sig.ch
            );
            if sig.average < darkest.average {
                darkest = sig;
            }
            if sig.average > brightest.average {
                brightest = sig;
            }
            buckets[sig.average as usize].push(sig);
            by_char.insert(sig.ch, sig);
        }

        Ok(Self {
            buckets,
            by_char,
            darkest,
            brightest,
            extended: false,
        })
    }

    /// Signatures whose average brightness equals `average`, in insertion
    /// order. `None` for an empty bucket or an out-of-range brightness.
    #[must_use]
    pub fn bucket(&self, average: i32) -> Option<&[GlyphSignature]> {
        if !(0..=255).contains(&average) {
            return None;
        }
        let bucket = &self.buckets[average as usize];
        if bucket.is_empty() {
            None
        } else {
            Some(bucket)
        }
    }

    /// Signature of a specific character.
    ///
    /// # Errors
    /// Returns [`CodecError::GlyphNotFound`] if the character is not part
    /// of the range this table was built for.
    pub fn lookup(&self, ch: char) -> Result<&GlyphSignature, CodecError> {
        self.by_char.get(&ch).ok_or(CodecError::GlyphNotFound {
            ch,
            code: u32::from(ch),
        })
    }

    /// Fallback for brightness searches that exhaust the dark end.
    #[must_use]
    pub fn darkest(&self) -> &GlyphSignature {
        &self.darkest
    }

    /// Fallback for brightness searches that exhaust the bright end.
    #[must_use]
    pub fn brightest(&self) -> &GlyphSignature {
        &self.brightest
    }

    /// Whether this table covers the extended 8-bit range.
    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Number of signatures in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_char.len()
    }

    /// Always false for a successfully built table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }
}

/// Shared, lazily-built handle to the active [`GlyphLibrary`].
///
/// The first `get` builds the table; concurrent first-use performs the
/// build at most once (double-checked behind a mutex). Changing the
/// character range invalidates the table; the next `get` rebuilds it and
/// swaps it in atomically, so readers only ever observe a complete table.
///
/// # Example
/// ```
/// use gg_codec::library::LibraryHandle;
/// let handle = LibraryHandle::new(false);
/// let lib = handle.get().unwrap();
/// assert!(!lib.is_extended());
/// ```
pub struct LibraryHandle {
    table: ArcSwapOption<GlyphLibrary>,
    /// Configured range flag; also serializes builds.
    range: Mutex<bool>,
}

impl LibraryHandle {
    /// Create a handle; the table itself is built on first `get`.
    #[must_use]
    pub fn new(use_extended: bool) -> Self {
        Self {
            table: ArcSwapOption::empty(),
            range: Mutex::new(use_extended),
        }
    }

    /// The active table, building it first if needed.
    ///
    /// # Errors
    /// Propagates [`CodecError::EmptyLibrary`] from the build.
    pub fn get(&self) -> Result<Arc<GlyphLibrary>, CodecError> {
        if let Some(lib) = self.table.load_full() {
            return Ok(lib);
        }
        let use_extended = self.range.lock().unwrap_or_else(PoisonError::into_inner);
        // double-check: another caller may have built while we waited
        if let Some(lib) = self.table.load_full() {
            return Ok(lib);
        }
        let lib = Arc::new(GlyphLibrary::build(*use_extended)?);
        self.table.store(Some(Arc::clone(&lib)));
        Ok(lib)
    }

    /// Switch the character range. A change drops the current table; the
    /// next `get` rebuilds. A no-op if the range is unchanged.
    pub fn set_extended(&self, use_extended: bool) {
        let mut range = self.range.lock().unwrap_or_else(PoisonError::into_inner);
        if *range != use_extended {
            *range = use_extended;
            self.table.store(None);
            log::debug!("glyph library invalidated (extended = {use_extended})");
        }
    }
}
