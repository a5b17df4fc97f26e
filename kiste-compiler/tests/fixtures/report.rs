// Generated by kiste from "report.kiste". Do not edit.
#[allow(unused_imports)]
use ::kiste::{Serializer as _, View as _};
pub fn explode() -> &'static str {
    panic!("boom")
}

pub fn throws_something() {
    panic!("kaboom")
}

#[allow(dead_code)]
pub struct Report<'a, DerivedT, DataT: ?Sized, SerializerT> {
    pub data: &'a DataT,
    pub _serialize: &'a SerializerT,
    _derived: ::core::marker::PhantomData<fn() -> DerivedT>,
}

impl<'a, DerivedT, DataT: ?Sized, SerializerT> ::kiste::View<'a, DataT, SerializerT>
    for Report<'a, DerivedT, DataT, SerializerT>
{
    fn bind(data: &'a DataT, serialize: &'a SerializerT) -> Self {
        Self {
            data,
            _serialize: serialize,
            _derived: ::core::marker::PhantomData,
        }
    }
}

#[allow(dead_code)]
impl<'a, DerivedT, DataT: ?Sized, SerializerT> Report<'a, DerivedT, DataT, SerializerT>
where
    DerivedT: ::kiste::View<'a, DataT, SerializerT>,
    SerializerT: ::kiste::Serializer,
{
    pub fn child(&self) -> DerivedT {
        ::kiste::View::bind(self.data, self._serialize)
    }
    // ----------------------------------------------------------------------
    pub fn render(&self) {
        self._serialize.text(concat!("before ")); if let Err(error) = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| { self._serialize.escape(&(explode())); })) { self._serialize.report_exception(11, "explode()", error); } self._serialize.text(concat!(" after\n"));
        if let Err(error) = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| { let () = { throws_something(); }; })) { self._serialize.report_exception(12, " throws_something(); ", error); } self._serialize.text(concat!("\n",
        "done\n"));
    }
    // ----------------------------------------------------------------------
}

#[allow(non_snake_case, dead_code)]
pub fn Report<'a, DataT: ?Sized, SerializerT>(
    data: &'a DataT,
    serialize: &'a SerializerT,
) -> Report<'a, ::kiste::Terminal, DataT, SerializerT> {
    ::kiste::View::bind(data, serialize)
}
