//! C FFI: lets speech servers written in other languages call the normalizer.
//!
//! Functions are `#[no_mangle] extern "C"` and link from `libchislo.a`.
//!
//! ## Memory contract
//!
//! | Function                   | Caller frees with           |
//! |----------------------------|-----------------------------|
//! | [`chislo_normalizer_new`]  | [`chislo_normalizer_free`]  |
//! | [`chislo_preprocess`]      | [`chislo_free_string`]      |

use std::ffi::{c_char, CStr, CString};
use std::path::Path;

use tracing::warn;

use crate::config::load_normalizer;
use crate::processor::TextNormalizer;

// ─────────────────────────────────────────────────────────────────────────────

/// Opaque handle to a ready normalizer.
pub struct ChisloHandle {
    normalizer: TextNormalizer,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Convert a non-null `*const c_char` to an owned `String`.
/// Returns `None` if `ptr` is null; invalid UTF-8 is replaced lossily.
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Heap-allocate an owned C string.  Returns null on interior nul bytes.
fn to_c_str(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Create a normalizer for every supported language.
///
/// @param config_path  UTF-8 path to a JSON config, or `NULL` for the
///                     built-in dictionaries and default stages.
/// @return             Opaque handle, or `NULL` on failure (logged).
///                     Free with [`chislo_normalizer_free`].
#[no_mangle]
pub unsafe extern "C" fn chislo_normalizer_new(config_path: *const c_char) -> *mut ChisloHandle {
    let loaded = match unsafe { cstr_to_string(config_path) } {
        Some(path) => load_normalizer(Path::new(&path)),
        None => TextNormalizer::new().map_err(anyhow::Error::from),
    };
    match loaded {
        Ok(normalizer) => Box::into_raw(Box::new(ChisloHandle { normalizer })),
        Err(e) => {
            warn!("chislo_normalizer_new: {e:#}");
            std::ptr::null_mut()
        }
    }
}

/// Normalize `text` for speech in `language` (`"ru"` or `"uk"`).
///
/// @param handle    Handle from [`chislo_normalizer_new`].
/// @param text      UTF-8 input text.
/// @param language  Language code.
/// @return          Heap-allocated UTF-8 result, or `NULL` on a null argument
///                  or unsupported language.  Free with [`chislo_free_string`].
#[no_mangle]
pub unsafe extern "C" fn chislo_preprocess(
    handle: *const ChisloHandle,
    text: *const c_char,
    language: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return std::ptr::null_mut();
    }
    let (Some(text), Some(language)) = (
        unsafe { cstr_to_string(text) },
        unsafe { cstr_to_string(language) },
    ) else {
        warn!("chislo_preprocess: null argument");
        return std::ptr::null_mut();
    };

    let h = unsafe { &*handle };
    match h.normalizer.preprocess(&text, &language) {
        Ok(normalized) => to_c_str(&normalized),
        Err(e) => {
            warn!("chislo_preprocess: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string returned by [`chislo_preprocess`].
#[no_mangle]
pub unsafe extern "C" fn chislo_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Destroy a normalizer handle.
#[no_mangle]
pub unsafe extern "C" fn chislo_normalizer_free(handle: *mut ChisloHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
