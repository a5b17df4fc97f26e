//! # kiste
//!
//! Runtime for views generated by `kiste-compiler`.
//!
//! Generated code relies on three items only:
//!
//!     View        binds a view type to a data reference and a serializer reference
//!     Terminal    the `DerivedT` of a view that nothing derives from
//!     Serializer  the sink receiving literal text, escaped values and raw values
//!
//! Everything else in this crate is a convenience for callers: [Writer] is a serializer over any
//! `fmt::Write` sink, parameterized by an escaping [Policy].
//!
//!     ```rust,ignore
//!     let writer = kiste::Writer::html(String::new());
//!     views::Hello("<World>", &writer).render();
//!     assert_eq!(writer.into_inner()?, "Hello &lt;World&gt;!\n");
//!     ```

pub mod policy;
pub mod writer;

use std::any::Any;
use std::fmt;

use log::error;

pub use policy::{Chain, HtmlPolicy, NoEscape, Policy, RustStringPolicy};
pub use writer::{Html, Plain, Writer};

/// A view bound to borrowed data and a borrowed serializer.
///
/// Views hold nothing but the two references (plus their parent views), so binding one is free
/// and generated code rebinds views whenever it needs them instead of storing links.
pub trait View<'a, DataT: ?Sized, SerializerT>: Sized {
    fn bind(data: &'a DataT, serialize: &'a SerializerT) -> Self;
}

/// The most derived view marker: `child()` on a view bound through its entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminal;

impl<'a, DataT: ?Sized, SerializerT> View<'a, DataT, SerializerT> for Terminal {
    fn bind(_data: &'a DataT, _serialize: &'a SerializerT) -> Self {
        Terminal
    }
}

/// Output sink of a render.
///
/// Methods take `&self`: a render shares one serializer among all views of the composition, so
/// implementations keep their state behind interior mutability.
pub trait Serializer {
    /// Append template text unchanged.
    fn text(&self, text: &str);

    /// Append a value, escaped for the output format.
    fn escape<T: ?Sized + fmt::Display>(&self, value: &T);

    /// Append a value without escaping.
    fn raw<T: ?Sized + fmt::Display>(&self, value: &T);

    /// Called by code compiled with exception reporting when an embedded expression panics.
    /// `line` is the template line and `expression` the verbatim expression text. Rendering
    /// continues with the next segment once this returns.
    fn report_exception(&self, line: usize, expression: &str, error: Box<dyn Any + Send>) {
        error!(
            "template line {}: `{}` panicked: {}",
            line,
            expression.trim(),
            panic_message(error.as_ref())
        );
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "Box<dyn Any>"
    }
}
