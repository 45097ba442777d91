/// Declares a model along with its identity type.
///
/// The identity is a newtype around the given inner type (`u32` for employee
/// numbers, `String` for project codes) that orders, hashes and displays like
/// its inner value. The model itself gets public getters for every field and
/// an owned-pattern builder, so fields the builder shouldn't touch are marked
/// `#[builder(setter(skip))]` and start out at their default.
#[macro_export]
macro_rules! planning_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $idfield:ident: <<$id:ident($idty:ty)>>,
            $($fields:tt)*
        }
        $builder:ident
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[cfg_attr(feature = "with_serde", serde(transparent))]
        pub struct $id($idty);

        impl $id {
            pub fn new<T: Into<$idty>>(id: T) -> Self {
                Self(id.into())
            }

            /// Unwrap the identity into its inner value
            pub fn into_inner(self) -> $idty {
                self.0
            }
        }

        impl std::convert::From<$idty> for $id {
            fn from(id: $idty) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        #[derive(Clone, Debug, PartialEq, getset::Getters, derive_builder::Builder)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize))]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub")]
        $(#[$struct_meta])*
        pub struct $name {
            $idfield: $id,
            $($fields)*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    }
}
