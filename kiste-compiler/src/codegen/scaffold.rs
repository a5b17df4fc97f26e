//! Class scaffolding
//!
//!     A `$class Name : Parent` block becomes a view struct with three generic parameters:
//!
//!         DerivedT      the most derived view in the chain (`Terminal` at the entry point)
//!         DataT         the data handed to the view
//!         SerializerT   the sink receiving the rendered text
//!
//!     The parent view is a field instantiated with the child as its `DerivedT`, and the child
//!     dereferences to it. `child()` climbs back down the chain by binding a fresh `DerivedT`
//!     over the same data and serializer.
//!
//!     The functions below return the scaffold lines without indentation; the emitter indents
//!     them to the class's scope depth.

use crate::parsing::{ClassDescriptor, MemberDescriptor};

pub const SEPARATOR: &str =
    "    // ----------------------------------------------------------------------";

/// `Name<'a, DerivedT, DataT, SerializerT>`
fn instance(name: &str) -> String {
    format!("{}<'a, DerivedT, DataT, SerializerT>", name)
}

/// Everything a `$class` line expands to, up to the opening of the inherent impl block.
pub fn class_opening(class: &ClassDescriptor, runtime: &str) -> Vec<String> {
    let name = &class.name;
    let this = instance(name);
    let generics = "impl<'a, DerivedT, DataT: ?Sized, SerializerT>";
    let mut out = Vec::new();

    out.push("#[allow(dead_code)]".to_string());
    out.push(format!(
        "pub struct {}<'a, DerivedT, DataT: ?Sized, SerializerT> {{",
        name
    ));
    if let Some(parent) = &class.parent {
        out.push(format!(
            "    pub parent: {}<'a, {}, DataT, SerializerT>,",
            parent, this
        ));
    }
    out.push("    pub data: &'a DataT,".to_string());
    out.push("    pub _serialize: &'a SerializerT,".to_string());
    out.push("    _derived: ::core::marker::PhantomData<fn() -> DerivedT>,".to_string());
    out.push("}".to_string());
    out.push(String::new());

    out.push(format!(
        "{} {}::View<'a, DataT, SerializerT>",
        generics, runtime
    ));
    out.push(format!("    for {}", this));
    out.push("{".to_string());
    out.push("    fn bind(data: &'a DataT, serialize: &'a SerializerT) -> Self {".to_string());
    out.push("        Self {".to_string());
    if class.parent.is_some() {
        out.push(format!(
            "            parent: {}::View::bind(data, serialize),",
            runtime
        ));
    }
    out.push("            data,".to_string());
    out.push("            _serialize: serialize,".to_string());
    out.push("            _derived: ::core::marker::PhantomData,".to_string());
    out.push("        }".to_string());
    out.push("    }".to_string());
    out.push("}".to_string());
    out.push(String::new());

    if let Some(parent) = &class.parent {
        out.push(format!("{} ::core::ops::Deref", generics));
        out.push(format!("    for {}", this));
        out.push("{".to_string());
        out.push(format!(
            "    type Target = {}<'a, {}, DataT, SerializerT>;",
            parent, this
        ));
        out.push(String::new());
        out.push("    fn deref(&self) -> &Self::Target {".to_string());
        out.push("        &self.parent".to_string());
        out.push("    }".to_string());
        out.push("}".to_string());
        out.push(String::new());
    }

    out.push("#[allow(dead_code)]".to_string());
    out.push(format!("{} {}", generics, this));
    out.push("where".to_string());
    out.push(format!(
        "    DerivedT: {}::View<'a, DataT, SerializerT>,",
        runtime
    ));
    out.push(format!("    SerializerT: {}::Serializer,", runtime));
    out.push("{".to_string());
    out.push("    pub fn child(&self) -> DerivedT {".to_string());
    out.push(format!(
        "        {}::View::bind(self.data, self._serialize)",
        runtime
    ));
    out.push("    }".to_string());
    out.push(SEPARATOR.to_string());
    out
}

/// The accessor a `$member Type name` line expands to.
pub fn member_accessor(member: &MemberDescriptor, runtime: &str) -> String {
    format!(
        "pub fn {}(&self) -> {}<'a, Self, DataT, SerializerT> {{ {}::View::bind(self.data, self._serialize) }}",
        member.name, member.class_name, runtime
    )
}

/// Closing of the impl block plus the entry point function named after the class.
pub fn class_closing(class: &ClassDescriptor, runtime: &str) -> Vec<String> {
    let name = &class.name;
    vec![
        SEPARATOR.to_string(),
        "}".to_string(),
        String::new(),
        "#[allow(non_snake_case, dead_code)]".to_string(),
        format!("pub fn {}<'a, DataT: ?Sized, SerializerT>(", name),
        "    data: &'a DataT,".to_string(),
        "    serialize: &'a SerializerT,".to_string(),
        format!(
            ") -> {}<'a, {}::Terminal, DataT, SerializerT> {{",
            name, runtime
        ),
        format!("    {}::View::bind(data, serialize)", runtime),
        "}".to_string(),
    ]
}
