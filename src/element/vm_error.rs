use crate::{ErrorKind, InstanceRef, Result};

element! {
    /// A reference to an [`ErrorObj`].
    ErrorRef = "@Error" | "Error"
}
impl<'a> ErrorRef<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn kind(&self) -> Result<ErrorKind> {
        self.0.kind("kind")
    }
    pub fn message(&self) -> Result<&'a str> {
        self.0.str("message")
    }
}

element! {
    /// An error object in the VM, such as an unhandled exception or a
    /// compilation error.
    ///
    /// This is a value the VM returns, not a failed call. Failed calls are
    /// reported as [`RpcError`](crate::RpcError).
    ErrorObj = "Error"
}
impl<'a> ErrorObj<'a> {
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn kind(&self) -> Result<ErrorKind> {
        self.0.kind("kind")
    }
    pub fn message(&self) -> Result<&'a str> {
        self.0.str("message")
    }
    /// The exception that was thrown, for `UnhandledException`.
    pub fn exception(&self) -> Result<InstanceRef<'a>> {
        self.0.element("exception")
    }
    pub fn stacktrace(&self) -> Result<InstanceRef<'a>> {
        self.0.element("stacktrace")
    }
}
