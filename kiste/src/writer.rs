//! A [Serializer] over any `fmt::Write` sink

use std::cell::{Cell, RefCell};
use std::fmt::{self, Write};

use crate::policy::{HtmlPolicy, NoEscape, Policy};
use crate::Serializer;

/// Writes rendered text into `W`, escaping values with `P`.
///
/// Write failures do not interrupt a render. The first failure is remembered and
/// [Writer::into_inner] reports it.
#[derive(Debug)]
pub struct Writer<W, P> {
    out: RefCell<W>,
    policy: P,
    failed: Cell<bool>,
}

pub type Html<W> = Writer<W, HtmlPolicy>;
pub type Plain<W> = Writer<W, NoEscape>;

impl<W: Write, P: Policy> Writer<W, P> {
    pub fn new(out: W, policy: P) -> Self {
        Self {
            out: RefCell::new(out),
            policy,
            failed: Cell::new(false),
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed.get()
    }

    pub fn into_inner(self) -> Result<W, fmt::Error> {
        if self.failed.get() {
            return Err(fmt::Error);
        }
        Ok(self.out.into_inner())
    }

    fn record(&self, result: fmt::Result) {
        if result.is_err() {
            self.failed.set(true);
        }
    }
}

impl<W: Write> Writer<W, HtmlPolicy> {
    pub fn html(out: W) -> Self {
        Self::new(out, HtmlPolicy)
    }
}

impl<W: Write> Writer<W, NoEscape> {
    pub fn plain(out: W) -> Self {
        Self::new(out, NoEscape)
    }
}

impl<W: Write, P: Policy> Serializer for Writer<W, P> {
    fn text(&self, text: &str) {
        let result = self.out.borrow_mut().write_str(text);
        self.record(result);
    }

    fn escape<T: ?Sized + fmt::Display>(&self, value: &T) {
        // Display impls may render other views through this writer, so format before borrowing.
        let rendered = value.to_string();
        let result = self.policy.escape_str(&rendered, &mut *self.out.borrow_mut());
        self.record(result);
    }

    fn raw<T: ?Sized + fmt::Display>(&self, value: &T) {
        let rendered = value.to_string();
        let result = self.out.borrow_mut().write_str(&rendered);
        self.record(result);
    }
}
