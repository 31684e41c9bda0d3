/// Declare a wire enum: the Rust enum plus `EnumValue`, `Display`,
/// `FromStr` and `FieldCodec` impls.
///
/// ```ignore
/// graph_enum! {
///     pub enum RunAsAccountType {
///         System => "system",
///         User => "user",
///     }
/// }
/// ```
#[macro_export]
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $crate::codec::EnumValue for $name {
            const PATH: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codec::EnumValue::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::UnknownToken;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::codec::EnumValue>::parse(s).ok_or_else(|| {
                    $crate::codec::UnknownToken::new(
                        <Self as $crate::codec::EnumValue>::PATH,
                        s,
                    )
                })
            }
        }

        impl $crate::codec::FieldCodec for $name {
            fn kind() -> $crate::model::FieldKind {
                $crate::model::FieldKind::Enum(<Self as $crate::codec::EnumValue>::PATH)
            }

            fn decode(
                node: &dyn $crate::serialize::ParseNode,
                cx: &mut $crate::serialize::CodecContext<'_>,
            ) -> ::std::result::Result<::std::option::Option<Self>, $crate::error::DecodeError> {
                $crate::codec::decode_enum(node, cx)
            }

            fn encode(
                &self,
                key: ::std::option::Option<&str>,
                writer: &mut dyn $crate::serialize::SerializationWriter,
                _: &mut $crate::serialize::CodecContext<'_>,
            ) -> ::std::result::Result<(), $crate::error::EncodeError> {
                $crate::codec::encode_enum(*self, key, writer)
            }
        }
    };
}

/// Declare a polymorphic family: a closed enum over a base model and its
/// subtypes, resolved from the `@odata.type` discriminator.
///
/// ```ignore
/// model_family! {
///     pub enum EnrollmentProfileKind: Base(EnrollmentProfile) {
///         Dep(DepEnrollmentProfile),
///         DepIos(DepIosEnrollmentProfile),
///     }
/// }
/// ```
#[macro_export]
macro_rules! model_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $base_variant:ident($base:ty) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $base_variant($base),
            $(
                $(#[$vmeta])*
                $variant($ty)
            ),+
        }

        impl $name {
            pub const FAMILY: &'static str = stringify!($name);

            /// Tag table for this family, built on first use.
            pub fn discriminator() -> &'static $crate::discriminator::Discriminator<$name> {
                static TABLE: ::std::sync::LazyLock<$crate::discriminator::Discriminator<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::discriminator::Discriminator::builder(
                            stringify!($name),
                            <$base as $crate::traits::Model>::ODATA_TYPE,
                            || $name::$base_variant(<$base as $crate::traits::Model>::new()),
                        )
                        $(
                            .variant(
                                <$ty as $crate::traits::Model>::ODATA_TYPE,
                                || $name::$variant(<$ty as $crate::traits::Model>::new()),
                            )
                        )+
                        .build()
                    });

                &TABLE
            }

            #[must_use]
            pub fn entity(&self) -> &$crate::entity::Entity {
                match self {
                    Self::$base_variant(m) => $crate::traits::Model::entity(m),
                    $(Self::$variant(m) => $crate::traits::Model::entity(m)),+
                }
            }

            pub fn entity_mut(&mut self) -> &mut $crate::entity::Entity {
                match self {
                    Self::$base_variant(m) => $crate::traits::Model::entity_mut(m),
                    $(Self::$variant(m) => $crate::traits::Model::entity_mut(m)),+
                }
            }

            /// Concrete model type name of the held variant.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    Self::$base_variant(_) => <$base as $crate::traits::Model>::TYPE_NAME,
                    $(Self::$variant(_) => <$ty as $crate::traits::Model>::TYPE_NAME),+
                }
            }

            #[must_use]
            pub fn odata_type(&self) -> ::std::option::Option<&str> {
                self.entity().odata_type()
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::$base_variant(<$base as $crate::traits::Model>::new())
            }
        }

        impl ::std::convert::From<$base> for $name {
            fn from(model: $base) -> Self {
                Self::$base_variant(model)
            }
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(model: $ty) -> Self {
                    Self::$variant(model)
                }
            }
        )+

        impl $crate::codec::FieldCodec for $name {
            fn kind() -> $crate::model::FieldKind {
                $crate::model::FieldKind::Object(stringify!($name))
            }

            fn decode(
                node: &dyn $crate::serialize::ParseNode,
                cx: &mut $crate::serialize::CodecContext<'_>,
            ) -> ::std::result::Result<::std::option::Option<Self>, $crate::error::DecodeError> {
                if node.is_null() {
                    return Ok(None);
                }

                let mut instance = Self::discriminator().resolve(node, cx)?;
                cx.nested(|cx| match &mut instance {
                    Self::$base_variant(m) => $crate::model::walk::deserialize_fields(m, node, cx),
                    $(Self::$variant(m) => $crate::model::walk::deserialize_fields(m, node, cx)),+
                })?;

                Ok(Some(instance))
            }

            fn encode(
                &self,
                key: ::std::option::Option<&str>,
                writer: &mut dyn $crate::serialize::SerializationWriter,
                cx: &mut $crate::serialize::CodecContext<'_>,
            ) -> ::std::result::Result<(), $crate::error::EncodeError> {
                match self {
                    Self::$base_variant(m) => $crate::model::walk::encode_model(m, key, writer, cx),
                    $(Self::$variant(m) => $crate::model::walk::encode_model(m, key, writer, cx)),+
                }
            }
        }
    };
}
