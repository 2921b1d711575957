//! Derivation of JNI export symbol names.
//!
//! The runtime resolves a native method through a mangled name built from
//! the declaring class and the method name. If the exported literal drifts
//! from the managed declaration, the app fails at load time with an
//! `UnsatisfiedLinkError`; the test in `lib.rs` pins the two together.

/// Mangled export name for `method` declared on the fully qualified `class`.
///
/// Follows the JNI short-name convention: `Java_`, the mangled class, `_`,
/// the mangled method. Within each component `.` becomes `_` and a literal
/// `_` is escaped as `_1`. Sufficient for non-overloaded methods whose
/// names contain no characters needing `_0xxxx` unicode escapes.
pub fn export_name(class: &str, method: &str) -> String {
    let mut name = String::with_capacity(6 + class.len() + method.len());
    name.push_str("Java_");
    mangle_component(&mut name, class);
    name.push('_');
    mangle_component(&mut name, method);
    name
}

fn mangle_component(out: &mut String, component: &str) {
    for ch in component.chars() {
        match ch {
            '.' => out.push('_'),
            '_' => out.push_str("_1"),
            ch => out.push(ch),
        }
    }
}
