//! Thin helpers over objc2 for the raw `msg_send!` style used by the
//! window and run-loop code.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, Bool};
pub use objc2::{msg_send, ClassType};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (BOOL, not Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C `NO` (BOOL, not Rust bool).
pub const NO: Bool = Bool::NO;

// Geometry (NSGeometry + objc2-core-foundation features)
pub use objc2_foundation::{NSPoint, NSRect, NSSize};

pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::NSString;

pub use block2::RcBlock;

pub use objc2::rc::Retained;

// ============================================================================
// Helper functions
// ============================================================================

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw, retained id pointer.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Get a class by name, panicking if not found.
///
/// Only used with AppKit/Foundation classes that always exist.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
