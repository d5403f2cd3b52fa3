//! Foreign Function Interface for GibberFix Core
//!
//! This module provides a C-compatible API so a native presentation shell
//! (a Cocoa or Win32 window, for instance) can convert text without knowing
//! about Rust types. Strings cross the boundary as NUL-terminated UTF-8.

use crate::{LayoutRemapper, SubstitutionTable};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle to a remapper instance
pub struct RemapperHandle {
    remapper: LayoutRemapper,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum GibberFixResult {
    Success = 0,
    ErrorInvalidParameter = -2,
    ErrorUtf8Conversion = -4,
    ErrorTableLoad = -5,
}

fn transform_c_str(remapper: &LayoutRemapper, input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }

    let input = match unsafe { CStr::from_ptr(input) }.to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    match CString::new(remapper.transform(input)) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Converts text with the built-in Hebrew to QWERTY table.
///
/// Returns NULL when `input` is NULL or not valid UTF-8. The returned string
/// must be freed with `gibberfix_free_string`.
#[no_mangle]
pub extern "C" fn gibberfix_transform(input: *const c_char) -> *mut c_char {
    transform_c_str(&LayoutRemapper::hebrew_qwerty(), input)
}

/// Creates a remapper over the built-in table
#[no_mangle]
pub extern "C" fn gibberfix_remapper_new() -> *mut RemapperHandle {
    let handle = Box::new(RemapperHandle {
        remapper: LayoutRemapper::hebrew_qwerty(),
    });
    Box::into_raw(handle)
}

/// Creates a remapper from a table definition file.
///
/// On success `*out_handle` receives a handle to free with
/// `gibberfix_remapper_free`.
#[no_mangle]
pub extern "C" fn gibberfix_remapper_load(
    table_path: *const c_char,
    out_handle: *mut *mut RemapperHandle,
) -> GibberFixResult {
    if table_path.is_null() || out_handle.is_null() {
        return GibberFixResult::ErrorInvalidParameter;
    }

    let path_str = match unsafe { CStr::from_ptr(table_path) }.to_str() {
        Ok(s) => s,
        Err(_) => return GibberFixResult::ErrorUtf8Conversion,
    };

    let table = match SubstitutionTable::load(path_str) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Failed to load table {}: {}", path_str, e);
            return GibberFixResult::ErrorTableLoad;
        }
    };

    let handle = Box::new(RemapperHandle {
        remapper: LayoutRemapper::new(table),
    });
    unsafe {
        *out_handle = Box::into_raw(handle);
    }
    GibberFixResult::Success
}

/// Frees a remapper instance
#[no_mangle]
pub extern "C" fn gibberfix_remapper_free(handle: *mut RemapperHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Converts text with the handle's table.
///
/// Returns NULL when a parameter is NULL or `input` is not valid UTF-8.
#[no_mangle]
pub extern "C" fn gibberfix_remapper_transform(
    handle: *const RemapperHandle,
    input: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }

    let handle = unsafe { &*handle };
    transform_c_str(&handle.remapper, input)
}

/// Frees a string allocated by the library
#[no_mangle]
pub extern "C" fn gibberfix_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Get library version
#[no_mangle]
pub extern "C" fn gibberfix_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
