// Generated by kiste from "hello.kiste". Do not edit.
#[allow(unused_imports)]
use ::kiste::{Serializer as _, View as _};
//@line 1 "hello.kiste"
#[allow(dead_code)]
pub struct Hello<'a, DerivedT, DataT: ?Sized, SerializerT> {
    pub data: &'a DataT,
    pub _serialize: &'a SerializerT,
    _derived: ::core::marker::PhantomData<fn() -> DerivedT>,
}

impl<'a, DerivedT, DataT: ?Sized, SerializerT> ::kiste::View<'a, DataT, SerializerT>
    for Hello<'a, DerivedT, DataT, SerializerT>
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
impl<'a, DerivedT, DataT: ?Sized, SerializerT> Hello<'a, DerivedT, DataT, SerializerT>
where
    DerivedT: ::kiste::View<'a, DataT, SerializerT>,
    SerializerT: ::kiste::Serializer,
{
    pub fn child(&self) -> DerivedT {
        ::kiste::View::bind(self.data, self._serialize)
    }
    // ----------------------------------------------------------------------
//@line 2 "hello.kiste"
    pub fn render(&self)
    where
        DataT: ::core::fmt::Display,
    {
        self._serialize.text(concat!("Hello ")); self._serialize.escape(&(self.data)); self._serialize.text(concat!("!\n",
        "Nice to meet you.\n",
        "$5 costs 100% of "));
        self._serialize.raw(&("<b>")); self._serialize.text(concat!("you\n"));
    }
    // ----------------------------------------------------------------------
}

#[allow(non_snake_case, dead_code)]
pub fn Hello<'a, DataT: ?Sized, SerializerT>(
    data: &'a DataT,
    serialize: &'a SerializerT,
) -> Hello<'a, ::kiste::Terminal, DataT, SerializerT> {
    ::kiste::View::bind(data, serialize)
}
//@line 12 "hello.kiste"
