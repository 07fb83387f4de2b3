use crate::{Result, SentinelKind};

element! {
    /// Returned in place of an object that is not available.
    ///
    /// A sentinel is a normal result, not an error.
    Sentinel = "Sentinel"
}
impl<'a> Sentinel<'a> {
    pub fn kind(&self) -> Result<SentinelKind> {
        self.0.kind("kind")
    }
    /// A placeholder suitable for showing to users, such as `<collected>`.
    pub fn value_as_string(&self) -> Result<&'a str> {
        self.0.str("valueAsString")
    }
}

element! {
    /// The result of a call that has nothing to return.
    Success = "Success"
}
