use crate::{InstanceRef, LibraryRef, Result};

element! {
    /// A reference to an [`Obj`].
    ObjRef = "@Object" | "Object"
}
impl<'a> ObjRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    /// Whether `id` stays valid for the lifetime of the object.
    pub fn fixed_id(&self) -> Result<bool> {
        self.0.flag("fixedId")
    }
}

element! {
    /// A heap object in the VM that has no more specific element type.
    Obj = "Object"
}
impl<'a> Obj<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn fixed_id(&self) -> Result<bool> {
        self.0.flag("fixedId")
    }
    /// The class of this object.
    pub fn class_ref(&self) -> Result<ClassRef<'a>> {
        self.0.element("class")
    }
    /// The size of this object in the heap, in bytes.
    pub fn size(&self) -> Result<i64> {
        self.0.int("size")
    }
}

element!(ClassRef = "@Class" | "Class");
impl<'a> ClassRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
}

element! {
    /// A reference to a function.
    FuncRef = "@Function" | "Function"
}
impl<'a> FuncRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    /// The library, class or function this function is declared in.
    pub fn owner(&self) -> Result<FuncOwner<'a>> {
        self.0.element("owner")
    }
    pub fn is_static(&self) -> Result<bool> {
        self.0.bool("static")
    }
    pub fn is_const(&self) -> Result<bool> {
        self.0.bool("const")
    }
}

family! {
    /// The declaration that owns a function or field.
    pub enum FuncOwner {
        Library(LibraryRef) = "@Library" | "Library",
        Class(ClassRef) = "@Class" | "Class",
        Func(FuncRef) = "@Function" | "Function",
    }
}

element! {
    /// A reference to a field.
    FieldRef = "@Field" | "Field"
}
impl<'a> FieldRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    pub fn owner(&self) -> Result<FuncOwner<'a>> {
        self.0.element("owner")
    }
    /// The declared type of this field. Fields without an annotation report
    /// `dynamic`.
    pub fn declared_type(&self) -> Result<InstanceRef<'a>> {
        self.0.element("declaredType")
    }
    pub fn is_const(&self) -> Result<bool> {
        self.0.bool("const")
    }
    pub fn is_final(&self) -> Result<bool> {
        self.0.bool("final")
    }
    pub fn is_static(&self) -> Result<bool> {
        self.0.bool("static")
    }
}

element!(ScriptRef = "@Script" | "Script");
impl<'a> ScriptRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn uri(&self) -> Result<&'a str> {
        self.0.str("uri")
    }
}
