macro_rules! use_prelude {() => (
    #[allow(unused_imports)]
    use crate::utils::prelude::*;
)}

/// `Label(thread.name())`, but usable where the `Thread` is a temporary.
macro_rules! with_current_label {(
    |$label:ident| $body:expr $(,)?
) => ({
    let current = ::std::thread::current();
    let $label = $crate::utils::Label(current.name());
    $body
})}
