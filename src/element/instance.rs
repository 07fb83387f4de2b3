use crate::{
    ClassRef, Element, ElementList, FieldRef, FuncRef, InstanceKind, Result, Sentinel,
};

element! {
    /// A reference to an [`Instance`].
    ///
    /// Most fields are only sent for some instance kinds. Reading a field
    /// that was not sent for this kind fails with
    /// [`ProtocolViolation::MissingField`](crate::ProtocolViolation::MissingField);
    /// use [`has`](crate::Element::has) to probe first.
    InstanceRef = "@Instance" | "Instance"
}
impl<'a> InstanceRef<'a> {
    /// The class of this instance. Always present.
    pub fn class_ref(&self) -> Result<ClassRef<'a>> {
        self.0.element("class")
    }
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn kind(&self) -> Result<InstanceKind> {
        self.0.kind("kind")
    }
    /// The number of elements or associations. Sent for list-like kinds.
    pub fn length(&self) -> Result<i64> {
        self.0.int("length")
    }
    /// The name of a `Type` instance.
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    /// The class a `TypeParameter` is declared on.
    pub fn parameterized_class(&self) -> Result<ClassRef<'a>> {
        self.0.element("parameterizedClass")
    }
    /// The source pattern of a `RegExp` instance.
    pub fn pattern(&self) -> Result<&'a str> {
        self.0.str("pattern")
    }
    /// The class of a canonical `Type` instance.
    pub fn type_class(&self) -> Result<ClassRef<'a>> {
        self.0.element("typeClass")
    }
    /// The value rendered as a string, sent for primitive kinds, `String`
    /// and `StackTrace`. May be truncated for `String`.
    pub fn value_as_string(&self) -> Result<&'a str> {
        self.0.str("valueAsString")
    }
    pub fn value_as_string_is_truncated(&self) -> Result<bool> {
        self.0.flag("valueAsStringIsTruncated")
    }
}

element! {
    /// A fully resolved instance.
    Instance = "Instance"
}
impl<'a> Instance<'a> {
    /// This instance viewed as a reference.
    pub fn as_instance_ref(&self) -> InstanceRef<'a> {
        InstanceRef::from_object(self.0)
    }

    pub fn class_ref(&self) -> Result<ClassRef<'a>> {
        self.0.element("class")
    }
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn kind(&self) -> Result<InstanceKind> {
        self.0.kind("kind")
    }
    pub fn length(&self) -> Result<i64> {
        self.0.int("length")
    }
    /// The index of the first element sent, when the request asked for a
    /// sub-range of a list-like instance.
    pub fn offset(&self) -> Result<i64> {
        self.0.int("offset")
    }
    /// The number of elements sent, when the request asked for a sub-range.
    pub fn count(&self) -> Result<i64> {
        self.0.int("count")
    }
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    pub fn value_as_string(&self) -> Result<&'a str> {
        self.0.str("valueAsString")
    }
    pub fn value_as_string_is_truncated(&self) -> Result<bool> {
        self.0.flag("valueAsStringIsTruncated")
    }
    pub fn type_class(&self) -> Result<ClassRef<'a>> {
        self.0.element("typeClass")
    }
    pub fn parameterized_class(&self) -> Result<ClassRef<'a>> {
        self.0.element("parameterizedClass")
    }
    /// The fields of a `PlainInstance`.
    pub fn fields(&self) -> Result<ElementList<'a, BoundField<'a>>> {
        self.0.list("fields")
    }
    /// The elements of a `List` or `Set`.
    pub fn elements(&self) -> Result<ElementList<'a, InstanceOrSentinel<'a>>> {
        self.0.list("elements")
    }
    /// The entries of a `Map`.
    pub fn associations(&self) -> Result<ElementList<'a, MapAssociation<'a>>> {
        self.0.list("associations")
    }
    /// The contents of a typed data list, base64 encoded.
    pub fn bytes(&self) -> Result<&'a str> {
        self.0.str("bytes")
    }
    pub fn closure_function(&self) -> Result<FuncRef<'a>> {
        self.0.element("closureFunction")
    }
    pub fn is_case_sensitive(&self) -> Result<bool> {
        self.0.bool("isCaseSensitive")
    }
    pub fn is_multi_line(&self) -> Result<bool> {
        self.0.bool("isMultiLine")
    }
}

family! {
    /// A value slot that holds either an instance or a [`Sentinel`], such as
    /// a field that has not been initialized yet.
    pub enum InstanceOrSentinel {
        Instance(InstanceRef) = "@Instance" | "Instance",
        Sentinel(Sentinel) = "Sentinel",
    }
}

element!(BoundField);
impl<'a> BoundField<'a> {
    pub fn decl(&self) -> Result<FieldRef<'a>> {
        self.0.element("decl")
    }
    pub fn value(&self) -> Result<InstanceOrSentinel<'a>> {
        self.0.element("value")
    }
}

element!(MapAssociation);
impl<'a> MapAssociation<'a> {
    pub fn key(&self) -> Result<InstanceOrSentinel<'a>> {
        self.0.element("key")
    }
    pub fn value(&self) -> Result<InstanceOrSentinel<'a>> {
        self.0.element("value")
    }
}
