use crate::{ClassRef, ElementList, FieldRef, FuncRef, Result, ScriptRef};

element! {
    /// A reference to a [`Library`].
    LibraryRef = "@Library" | "Library"
}
impl<'a> LibraryRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    /// The name of this library. Empty for unnamed libraries.
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    pub fn uri(&self) -> Result<&'a str> {
        self.0.str("uri")
    }
}

element! {
    /// A library loaded in an isolate, with its declarations.
    Library = "Library"
}
impl<'a> Library<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    pub fn uri(&self) -> Result<&'a str> {
        self.0.str("uri")
    }
    /// Whether breakpoints can be set in this library.
    pub fn debuggable(&self) -> Result<bool> {
        self.0.bool("debuggable")
    }
    pub fn dependencies(&self) -> Result<ElementList<'a, LibraryDependency<'a>>> {
        self.0.list("dependencies")
    }
    pub fn scripts(&self) -> Result<ElementList<'a, ScriptRef<'a>>> {
        self.0.list("scripts")
    }
    /// The top-level variables declared in this library.
    pub fn variables(&self) -> Result<ElementList<'a, FieldRef<'a>>> {
        self.0.list("variables")
    }
    /// The top-level functions declared in this library.
    pub fn functions(&self) -> Result<ElementList<'a, FuncRef<'a>>> {
        self.0.list("functions")
    }
    pub fn classes(&self) -> Result<ElementList<'a, ClassRef<'a>>> {
        self.0.list("classes")
    }
}

element! {
    /// An import or export of one library by another.
    LibraryDependency
}
impl<'a> LibraryDependency<'a> {
    /// `true` for an import, `false` for an export.
    pub fn is_import(&self) -> Result<bool> {
        self.0.bool("isImport")
    }
    pub fn is_deferred(&self) -> Result<bool> {
        self.0.bool("isDeferred")
    }
    /// The prefix of a prefixed import.
    pub fn prefix(&self) -> Result<&'a str> {
        self.0.str("prefix")
    }
    pub fn target(&self) -> Result<LibraryRef<'a>> {
        self.0.element("target")
    }
}
