use proc_macro::TokenStream;

mod model;
mod util;

/// Derive `Model` and `FieldCodec` for a graph entity struct.
///
/// Struct attributes: `#[model(odata_type = "...")]`, plus `polymorphic` when
/// `new()` should stamp the discriminator. Exactly one field carries
/// `#[model(base)]`; every other field is an `Option<T>` or
/// `Option<Vec<T>>`. Field attributes: `rename = "wireName"` overrides the
/// camelCase default, `copy` makes the getter return the value by copy.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input.into()).into()
}
