//! JNI bridge for the `hello-jni` library.
//!
//! Loaded by the Android runtime through `System.loadLibrary("hello-jni")`.
//! Besides the `JNI_OnLoad` lifecycle hook, the only export is the native
//! half of `stringFromJNI` on `com.learn.hellojni.HelloJniActivity`: it
//! builds a Java string from the constant greeting and hands ownership of
//! it back to the runtime.

pub mod symbol;

use std::ffi::c_void;
use std::sync::Once;

use jni::objects::JObject;
use jni::sys::{JNI_VERSION_1_6, jint, jstring};
use jni::{JNIEnv, JavaVM};
use tracing::info;

use greeting::greeting;

/// Managed-side class declaring `private external fun stringFromJNI(): String?`.
pub const CALLER_CLASS: &str = "com.learn.hellojni.HelloJniActivity";

/// Managed-side method name.
pub const CALLER_METHOD: &str = "stringFromJNI";

static INIT: Once = Once::new();

/// Native implementation of `HelloJniActivity.stringFromJNI`.
///
/// Allocates a fresh Java string containing the greeting on every call and
/// transfers ownership to the caller. If the runtime cannot allocate the
/// string, the allocation primitive leaves an `OutOfMemoryError` pending on
/// `env`; we return null and let the caller observe that condition
/// unchanged.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_learn_hellojni_HelloJniActivity_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    match env.new_string(greeting()) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Invoked by the runtime when the library is loaded.
///
/// Installs the tracing subscriber once; repeated loads are a no-op.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    INIT.call_once(|| {
        // The embedding process may already own the global subscriber.
        let _ = tracing_subscriber::fmt::try_init();
        info!(library = "hello-jni", "native library loaded");
    });
    JNI_VERSION_1_6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_matches_managed_declaration() {
        assert_eq!(
            symbol::export_name(CALLER_CLASS, CALLER_METHOD),
            "Java_com_learn_hellojni_HelloJniActivity_stringFromJNI",
        );
    }
}
