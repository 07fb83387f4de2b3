use std::{fmt, marker::PhantomData, slice};

use derive_ex::derive_ex;
use serde_json::{Map, Value};
use tracing::warn;

use super::{Error, Object, ProtocolViolation, Result};


/// A value that can be read out of a received JSON tree without copying it.
pub trait Decode<'a>: Sized {
    fn decode(value: &'a Value) -> Result<Self>;
}

/// A typed view over one protocol object.
///
/// Elements wrap the object they were decoded from and read each field when
/// its accessor is called. A missing or mistyped field only fails the
/// accessors that read it.
pub trait Element<'a>: Copy {
    const TYPE_NAME: &'static str;

    fn from_object(object: Object<'a>) -> Self;
    fn object(&self) -> Object<'a>;

    fn json(&self) -> &'a Map<String, Value> {
        self.object().json()
    }
    fn has(&self, field: &str) -> bool {
        self.object().has(field)
    }
    /// The `type` field of this object.
    fn response_type(&self) -> Result<&'a str> {
        self.object().str("type")
    }
}
impl<'a, T: Element<'a>> Decode<'a> for T {
    fn decode(value: &'a Value) -> Result<Self> {
        Object::new(T::TYPE_NAME, value).map(T::from_object)
    }
}

/// A type whose concrete shape is selected by the discriminator of the
/// received object.
///
/// Discriminator values are matched by full literal equality. A value that
/// no shape claims is a protocol violation.
pub trait Discriminated<'a>: Sized {
    const NAME: &'static str;

    fn select(discriminator: &str, object: Object<'a>) -> Option<Self>;

    fn discriminate(value: &'a Value) -> Result<Self> {
        let object = Object::new(Self::NAME, value)?;
        let discriminator = object.discriminator()?;
        if let Some(this) = Self::select(discriminator, object) {
            return Ok(this);
        }
        warn!(shape = Self::NAME, discriminator, "unknown discriminator");
        Err(ProtocolViolation::UnknownDiscriminator {
            ty: Self::NAME,
            field: if object.has("type") { "type" } else { "kind" },
            value: discriminator.to_string(),
        }
        .into())
    }
}

macro_rules! element {
    ($(#[$meta:meta])* $name:ident $(= $($wire:literal)|+)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq)]
        pub struct $name<'a>($crate::Object<'a>);

        impl<'a> $crate::Element<'a> for $name<'a> {
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_object(object: $crate::Object<'a>) -> Self {
                Self(object.with_type(stringify!($name)))
            }
            fn object(&self) -> $crate::Object<'a> {
                self.0
            }
        }

        impl ::std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, f)
            }
        }

        $(
            impl<'a> $crate::Discriminated<'a> for $name<'a> {
                const NAME: &'static str = stringify!($name);

                fn select(discriminator: &str, object: $crate::Object<'a>) -> Option<Self> {
                    match discriminator {
                        $($wire)|+ => Some(<Self as $crate::Element<'a>>::from_object(object)),
                        _ => None,
                    }
                }
            }
        )?
    };
}

macro_rules! family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ident) = $($wire:literal)|+,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum $name<'a> {
            $(
                $(#[$vmeta])*
                $variant($ty<'a>),
            )*
        }

        impl<'a> $name<'a> {
            pub fn object(&self) -> $crate::Object<'a> {
                match self {
                    $(Self::$variant(e) => <$ty<'a> as $crate::Element<'a>>::object(e),)*
                }
            }
        }

        impl<'a> $crate::Discriminated<'a> for $name<'a> {
            const NAME: &'static str = stringify!($name);

            fn select(discriminator: &str, object: $crate::Object<'a>) -> Option<Self> {
                match discriminator {
                    $(
                        $($wire)|+ => Some(Self::$variant(
                            <$ty<'a> as $crate::Element<'a>>::from_object(object),
                        )),
                    )*
                    _ => None,
                }
            }
        }

        impl<'a> $crate::Decode<'a> for $name<'a> {
            fn decode(value: &'a ::serde_json::Value) -> $crate::Result<Self> {
                <Self as $crate::Discriminated<'a>>::discriminate(value)
            }
        }
    };
}
pub(crate) use family;

/// A read-only view over a JSON array whose items are decoded on access.
///
/// Each call to [`get`](Self::get) or [`iter`](Self::iter) decodes again, so
/// the view can be read any number of times.
#[derive_ex(Clone, Copy)]
pub struct ElementList<'a, T> {
    items: &'a [Value],
    _phantom: PhantomData<fn() -> T>,
}

impl<'a, T> ElementList<'a, T> {
    pub(crate) fn new(items: &'a [Value]) -> Self {
        Self {
            items,
            _phantom: PhantomData,
        }
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn json(&self) -> &'a [Value] {
        self.items
    }
}
impl<'a, T: Decode<'a>> ElementList<'a, T> {
    pub fn get(&self, index: usize) -> Result<T> {
        match self.items.get(index) {
            Some(value) => T::decode(value),
            None => Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            }),
        }
    }
    pub fn iter(&self) -> ElementIter<'a, T> {
        ElementIter {
            items: self.items.iter(),
            _phantom: PhantomData,
        }
    }
    /// Decodes every item, failing on the first one that is not valid.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.iter().collect()
    }
}
impl<'a, T: Decode<'a>> IntoIterator for ElementList<'a, T> {
    type Item = Result<T>;
    type IntoIter = ElementIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T> fmt::Debug for ElementList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}

#[derive_ex(Clone)]
pub struct ElementIter<'a, T> {
    items: slice::Iter<'a, Value>,
    _phantom: PhantomData<fn() -> T>,
}
impl<'a, T: Decode<'a>> Iterator for ElementIter<'a, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(T::decode)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}
impl<'a, T: Decode<'a>> DoubleEndedIterator for ElementIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(T::decode)
    }
}
impl<'a, T: Decode<'a>> ExactSizeIterator for ElementIter<'a, T> {}

mod breakpoint;
mod event;
mod instance;
mod isolate;
mod library;
mod obj;
mod sentinel;
mod vm_error;

pub use breakpoint::*;
pub use event::*;
pub use instance::*;
pub use isolate::*;
pub use library::*;
pub use obj::*;
pub use sentinel::*;
pub use vm_error::*;
