use crate::util::{is_copy_scalar, is_path_ident, single_generic};
use convert_case::{Case, Casing};
use darling::{Error as DarlingError, FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Generics, Ident, Type};

///
/// ModelInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(model), supports(struct_named))]
struct ModelInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, ModelField>,
    odata_type: String,
    #[darling(default)]
    polymorphic: bool,
}

///
/// ModelField
///

#[derive(FromField)]
#[darling(attributes(model))]
struct ModelField {
    ident: Option<Ident>,
    ty: Type,
    #[darling(default)]
    base: bool,
    #[darling(default)]
    rename: Option<String>,
    #[darling(default)]
    copy: bool,
}

///
/// FieldShape
///

enum FieldShape<'a> {
    Value(&'a Type),
    Collection(&'a Type),
}

///
/// MappedField
/// A non-base field after validation, with its resolved wire name.
///

struct MappedField<'a> {
    ident: &'a Ident,
    wire: String,
    shape: FieldShape<'a>,
    copy: bool,
}

// derive_model
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    ModelInput::from_derive_input(&input)
        .and_then(|model| expand(&model))
        .unwrap_or_else(DarlingError::write_errors)
}

fn expand(model: &ModelInput) -> Result<TokenStream, DarlingError> {
    if !model.generics.params.is_empty() {
        return Err(DarlingError::custom("Model cannot be derived for generic structs")
            .with_span(&model.generics));
    }

    let Data::Struct(fields) = &model.data else {
        return Err(DarlingError::unsupported_shape("enum").with_span(&model.ident));
    };

    let mut errors = DarlingError::accumulator();
    let mut base = None;
    let mut mapped = Vec::new();

    for field in fields.iter() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        if field.base {
            if base.is_some() {
                errors.push(DarlingError::custom("only one field may be #[model(base)]").with_span(ident));
            }
            base = Some((ident, &field.ty));
            continue;
        }

        match map_field(ident, field) {
            Ok(m) => mapped.push(m),
            Err(err) => errors.push(err),
        }
    }

    let Some((base_ident, base_ty)) = base else {
        errors.push(
            DarlingError::custom("a Model needs exactly one #[model(base)] field")
                .with_span(&model.ident),
        );
        return Err(errors.finish().err().unwrap_or_else(|| DarlingError::custom("invalid model")));
    };
    errors.finish()?;

    let ident = &model.ident;
    let type_name = ident.to_string();
    let odata_type = &model.odata_type;
    let polymorphic = model.polymorphic;

    let accessors = mapped.iter().map(accessors);
    let descriptors = mapped.iter().map(|m| descriptor(ident, m));

    Ok(quote! {
        impl #ident {
            #(#accessors)*
        }

        impl ::std::ops::Deref for #ident {
            type Target = #base_ty;

            fn deref(&self) -> &Self::Target {
                &self.#base_ident
            }
        }

        impl ::std::ops::DerefMut for #ident {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#base_ident
            }
        }

        impl ::graphbind_core::traits::Model for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const ODATA_TYPE: &'static str = #odata_type;
            const POLYMORPHIC: bool = #polymorphic;

            fn field_table() -> &'static ::graphbind_core::model::FieldTable<Self> {
                static TABLE: ::std::sync::LazyLock<::graphbind_core::model::FieldTable<#ident>> =
                    ::std::sync::LazyLock::new(|| {
                        ::graphbind_core::model::FieldTable::builder(#type_name)
                            .inherit(
                                <#base_ty as ::graphbind_core::traits::Model>::field_table(),
                                |m: &#ident| &m.#base_ident,
                                |m: &mut #ident| &mut m.#base_ident,
                            )
                            #(.field(#descriptors))*
                            .build()
                    });

                &TABLE
            }

            fn entity(&self) -> &::graphbind_core::entity::Entity {
                ::graphbind_core::traits::Model::entity(&self.#base_ident)
            }

            fn entity_mut(&mut self) -> &mut ::graphbind_core::entity::Entity {
                ::graphbind_core::traits::Model::entity_mut(&mut self.#base_ident)
            }
        }

        impl ::graphbind_core::codec::FieldCodec for #ident {
            fn kind() -> ::graphbind_core::model::FieldKind {
                ::graphbind_core::model::FieldKind::Object(#type_name)
            }

            fn decode(
                node: &dyn ::graphbind_core::serialize::ParseNode,
                cx: &mut ::graphbind_core::serialize::CodecContext<'_>,
            ) -> ::std::result::Result<::std::option::Option<Self>, ::graphbind_core::error::DecodeError> {
                ::graphbind_core::model::walk::decode_model(node, cx)
            }

            fn encode(
                &self,
                key: ::std::option::Option<&str>,
                writer: &mut dyn ::graphbind_core::serialize::SerializationWriter,
                cx: &mut ::graphbind_core::serialize::CodecContext<'_>,
            ) -> ::std::result::Result<(), ::graphbind_core::error::EncodeError> {
                ::graphbind_core::model::walk::encode_model(self, key, writer, cx)
            }
        }
    })
}

fn map_field<'a>(ident: &'a Ident, field: &'a ModelField) -> Result<MappedField<'a>, DarlingError> {
    let inner = single_generic(&field.ty, "Option").ok_or_else(|| {
        DarlingError::custom("Model fields must be Option<T> or Option<Vec<T>>").with_span(&field.ty)
    })?;

    let shape = match single_generic(inner, "Vec") {
        Some(elem) => FieldShape::Collection(elem),
        None => FieldShape::Value(inner),
    };

    let wire = field
        .rename
        .clone()
        .unwrap_or_else(|| ident.to_string().to_case(Case::Camel));

    Ok(MappedField {
        ident,
        wire,
        shape,
        copy: field.copy,
    })
}

fn accessors(field: &MappedField<'_>) -> TokenStream {
    let ident = field.ident;
    let setter = format_ident!("set_{}", ident);
    let builder = format_ident!("with_{}", ident);

    match field.shape {
        FieldShape::Value(ty) => {
            let getter = if is_path_ident(ty, "String") {
                quote! {
                    #[must_use]
                    pub fn #ident(&self) -> ::std::option::Option<&str> {
                        self.#ident.as_deref()
                    }
                }
            } else if field.copy || is_copy_scalar(ty) {
                quote! {
                    #[must_use]
                    pub const fn #ident(&self) -> ::std::option::Option<#ty> {
                        self.#ident
                    }
                }
            } else {
                quote! {
                    #[must_use]
                    pub const fn #ident(&self) -> ::std::option::Option<&#ty> {
                        self.#ident.as_ref()
                    }
                }
            };

            quote! {
                #getter

                pub fn #setter(&mut self, value: ::std::option::Option<#ty>) {
                    self.#ident = value;
                }

                #[must_use]
                pub fn #builder(mut self, value: impl ::std::convert::Into<#ty>) -> Self {
                    self.#ident = ::std::option::Option::Some(value.into());
                    self
                }
            }
        }

        FieldShape::Collection(elem) => quote! {
            #[must_use]
            pub fn #ident(&self) -> ::std::option::Option<&[#elem]> {
                self.#ident.as_deref()
            }

            pub fn #setter(&mut self, value: ::std::option::Option<::std::vec::Vec<#elem>>) {
                self.#ident = value;
            }

            #[must_use]
            pub fn #builder(mut self, value: impl ::std::convert::Into<::std::vec::Vec<#elem>>) -> Self {
                self.#ident = ::std::option::Option::Some(value.into());
                self
            }
        },
    }
}

fn descriptor(model: &Ident, field: &MappedField<'_>) -> TokenStream {
    let ident = field.ident;
    let wire = &field.wire;

    match field.shape {
        FieldShape::Value(ty) => quote! {
            ::graphbind_core::model::FieldDescriptor::value::<#ty>(
                #wire,
                |m: &#model| m.#ident.as_ref(),
                |m: &mut #model, v| m.#ident = ::std::option::Option::Some(v),
            )
        },
        FieldShape::Collection(elem) => quote! {
            ::graphbind_core::model::FieldDescriptor::collection::<#elem>(
                #wire,
                |m: &#model| m.#ident.as_deref(),
                |m: &mut #model, v| m.#ident = ::std::option::Option::Some(v),
            )
        },
    }
}
