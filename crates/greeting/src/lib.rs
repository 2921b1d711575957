//! Core greeting text for the `hello-jni` library.
//!
//! The constant lives here, away from any FFI code, so its observable
//! properties can be checked on any host without a JVM. The bridge crate
//! only ever sees an immutable `'static` slice.

/// The exact byte sequence handed back across the JNI boundary.
pub const GREETING: &str = "Hello from C++";

/// Returns the greeting.
///
/// Always the same `'static` slice; callers never observe a mutable view
/// and repeated calls have no cumulative effect.
pub fn greeting() -> &'static str {
    GREETING
}
