use std::fmt;

/// The native kind of a parameter or return value.
///
/// Handles and record pointers are all `Pointer`; the native library decides
/// what they point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Void,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    Usize,
    Isize,
    F32,
    F64,
    Pointer,
    /// A callback passed to the native library.
    Function,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Void => "void",
            Kind::U8 => "u8",
            Kind::I8 => "i8",
            Kind::U16 => "u16",
            Kind::I16 => "i16",
            Kind::U32 => "u32",
            Kind::I32 => "i32",
            Kind::U64 => "u64",
            Kind::I64 => "i64",
            Kind::Usize => "usize",
            Kind::Isize => "isize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Pointer => "pointer",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Rust type that may appear in an export signature.
///
/// Descriptors are built from the Rust types of the forwarding functions, so
/// a type without this impl cannot be used in the export table.
pub trait NativeType {
    const KIND: Kind;
}

macro_rules! native_types {
    ($($ty:ty => $kind:ident,)*) => {
        $(
            impl NativeType for $ty {
                const KIND: Kind = Kind::$kind;
            }
        )*
    };
}

native_types! {
    () => Void,
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    usize => Usize,
    isize => Isize,
    f32 => F32,
    f64 => F64,
}

impl<T: ?Sized> NativeType for *const T {
    const KIND: Kind = Kind::Pointer;
}

impl<T: ?Sized> NativeType for *mut T {
    const KIND: Kind = Kind::Pointer;
}

macro_rules! native_callbacks {
    ($(($($arg:ident),*))*) => {
        $(
            impl<R, $($arg),*> NativeType for Option<unsafe extern "system" fn($($arg),*) -> R> {
                const KIND: Kind = Kind::Function;
            }
        )*
    };
}

native_callbacks! {
    ()
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
}

/// The static signature of one export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// The exported symbol name, exactly as the library spells it.
    pub name: &'static str,
    pub params: &'static [Kind],
    pub ret: Kind,
}

impl Descriptor {
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}
