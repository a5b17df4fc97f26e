// Generated by kiste from "layout.kiste". Do not edit.
#[allow(unused_imports)]
use ::kiste::{Serializer as _, View as _};
use std::fmt::Display;

pub trait Body {
    fn body(&self);
}

#[allow(dead_code)]
pub struct Nav<'a, DerivedT, DataT: ?Sized, SerializerT> {
    pub data: &'a DataT,
    pub _serialize: &'a SerializerT,
    _derived: ::core::marker::PhantomData<fn() -> DerivedT>,
}

impl<'a, DerivedT, DataT: ?Sized, SerializerT> ::kiste::View<'a, DataT, SerializerT>
    for Nav<'a, DerivedT, DataT, SerializerT>
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
impl<'a, DerivedT, DataT: ?Sized, SerializerT> Nav<'a, DerivedT, DataT, SerializerT>
where
    DerivedT: ::kiste::View<'a, DataT, SerializerT>,
    SerializerT: ::kiste::Serializer,
{
    pub fn child(&self) -> DerivedT {
        ::kiste::View::bind(self.data, self._serialize)
    }
    // ----------------------------------------------------------------------
    pub fn render(&self) {
        self._serialize.text(concat!("<nav>home</nav>\n"));
    }
    // ----------------------------------------------------------------------
}

#[allow(non_snake_case, dead_code)]
pub fn Nav<'a, DataT: ?Sized, SerializerT>(
    data: &'a DataT,
    serialize: &'a SerializerT,
) -> Nav<'a, ::kiste::Terminal, DataT, SerializerT> {
    ::kiste::View::bind(data, serialize)
}

#[allow(dead_code)]
pub struct Base<'a, DerivedT, DataT: ?Sized, SerializerT> {
    pub data: &'a DataT,
    pub _serialize: &'a SerializerT,
    _derived: ::core::marker::PhantomData<fn() -> DerivedT>,
}

impl<'a, DerivedT, DataT: ?Sized, SerializerT> ::kiste::View<'a, DataT, SerializerT>
    for Base<'a, DerivedT, DataT, SerializerT>
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
impl<'a, DerivedT, DataT: ?Sized, SerializerT> Base<'a, DerivedT, DataT, SerializerT>
where
    DerivedT: ::kiste::View<'a, DataT, SerializerT>,
    SerializerT: ::kiste::Serializer,
{
    pub fn child(&self) -> DerivedT {
        ::kiste::View::bind(self.data, self._serialize)
    }
    // ----------------------------------------------------------------------
    pub fn render(&self)
    where
        DerivedT: Body,
    {
        self._serialize.text(concat!("<html>\n"));
        let () = {self.child().body()};
        self._serialize.text(concat!("</html>\n"));
    }
    // ----------------------------------------------------------------------
}

#[allow(non_snake_case, dead_code)]
pub fn Base<'a, DataT: ?Sized, SerializerT>(
    data: &'a DataT,
    serialize: &'a SerializerT,
) -> Base<'a, ::kiste::Terminal, DataT, SerializerT> {
    ::kiste::View::bind(data, serialize)
}

#[allow(dead_code)]
pub struct Page<'a, DerivedT, DataT: ?Sized, SerializerT> {
    pub parent: Base<'a, Page<'a, DerivedT, DataT, SerializerT>, DataT, SerializerT>,
    pub data: &'a DataT,
    pub _serialize: &'a SerializerT,
    _derived: ::core::marker::PhantomData<fn() -> DerivedT>,
}

impl<'a, DerivedT, DataT: ?Sized, SerializerT> ::kiste::View<'a, DataT, SerializerT>
    for Page<'a, DerivedT, DataT, SerializerT>
{
    fn bind(data: &'a DataT, serialize: &'a SerializerT) -> Self {
        Self {
            parent: ::kiste::View::bind(data, serialize),
            data,
            _serialize: serialize,
            _derived: ::core::marker::PhantomData,
        }
    }
}

impl<'a, DerivedT, DataT: ?Sized, SerializerT> ::core::ops::Deref
    for Page<'a, DerivedT, DataT, SerializerT>
{
    type Target = Base<'a, Page<'a, DerivedT, DataT, SerializerT>, DataT, SerializerT>;

    fn deref(&self) -> &Self::Target {
        &self.parent
    }
}

#[allow(dead_code)]
impl<'a, DerivedT, DataT: ?Sized, SerializerT> Page<'a, DerivedT, DataT, SerializerT>
where
    DerivedT: ::kiste::View<'a, DataT, SerializerT>,
    SerializerT: ::kiste::Serializer,
{
    pub fn child(&self) -> DerivedT {
        ::kiste::View::bind(self.data, self._serialize)
    }
    // ----------------------------------------------------------------------
    pub fn nav(&self) -> Nav<'a, Self, DataT, SerializerT> { ::kiste::View::bind(self.data, self._serialize) }
    pub fn content(&self)
    where
        DataT: Display,
    {
        let () = {self.nav().render()};
        self._serialize.text(concat!("<p>")); self._serialize.escape(&(self.data)); self._serialize.text(concat!("</p>\n"));
    }
    // ----------------------------------------------------------------------
}

#[allow(non_snake_case, dead_code)]
pub fn Page<'a, DataT: ?Sized, SerializerT>(
    data: &'a DataT,
    serialize: &'a SerializerT,
) -> Page<'a, ::kiste::Terminal, DataT, SerializerT> {
    ::kiste::View::bind(data, serialize)
}

impl<'a, DerivedT, DataT, SerializerT> Body for Page<'a, DerivedT, DataT, SerializerT>
where
    DerivedT: ::kiste::View<'a, DataT, SerializerT>,
    DataT: Display + ?Sized,
    SerializerT: ::kiste::Serializer,
{
    fn body(&self) {
        self.content()
    }
}
