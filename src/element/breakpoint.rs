use crate::{Result, ScriptRef};

element!(Breakpoint = "Breakpoint");
impl<'a> Breakpoint<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    /// The number shown to users. Unique within the isolate.
    pub fn breakpoint_number(&self) -> Result<i64> {
        self.0.int("breakpointNumber")
    }
    /// Whether the breakpoint has been bound to a code location.
    pub fn resolved(&self) -> Result<bool> {
        self.0.bool("resolved")
    }
    pub fn location(&self) -> Result<BreakpointLocation<'a>> {
        self.0.element("location")
    }
}

family! {
    /// Where a breakpoint is. Unresolved breakpoints only know the position
    /// that was requested.
    pub enum BreakpointLocation {
        Resolved(SourceLocation) = "SourceLocation",
        Unresolved(UnresolvedSourceLocation) = "UnresolvedSourceLocation",
    }
}

element!(SourceLocation = "SourceLocation");
impl<'a> SourceLocation<'a> {
    pub fn script(&self) -> Result<ScriptRef<'a>> {
        self.0.element("script")
    }
    pub fn token_pos(&self) -> Result<i64> {
        self.0.int("tokenPos")
    }
    pub fn end_token_pos(&self) -> Result<i64> {
        self.0.int("endTokenPos")
    }
}

element!(UnresolvedSourceLocation = "UnresolvedSourceLocation");
impl<'a> UnresolvedSourceLocation<'a> {
    /// The script, when the breakpoint was requested by script id.
    pub fn script(&self) -> Result<ScriptRef<'a>> {
        self.0.element("script")
    }
    /// The script uri, when the breakpoint was requested by uri.
    pub fn script_uri(&self) -> Result<&'a str> {
        self.0.str("scriptUri")
    }
    pub fn token_pos(&self) -> Result<i64> {
        self.0.int("tokenPos")
    }
    pub fn line(&self) -> Result<i64> {
        self.0.int("line")
    }
    pub fn column(&self) -> Result<i64> {
        self.0.int("column")
    }
}
