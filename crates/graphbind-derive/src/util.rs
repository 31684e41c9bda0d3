use syn::{GenericArgument, PathArguments, Type};

// Scalars whose getters hand out the value rather than a reference.
const COPY_SCALARS: &[&str] = &[
    "bool",
    "i32",
    "i64",
    "f64",
    "Date",
    "IsoDuration",
    "TimeOfDay",
    "Timestamp",
    "Uuid",
];

pub fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.qself.is_none()
        && path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == ident)
}

/// The `T` of `Wrapper<T>` when the last path segment is `wrapper`.
pub fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if !is_path_ident(ty, wrapper) {
        return None;
    }
    let Type::Path(path) = ty else {
        return None;
    };
    let PathArguments::AngleBracketed(args) = &path.path.segments.last()?.arguments else {
        return None;
    };

    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

pub fn is_copy_scalar(ty: &Type) -> bool {
    COPY_SCALARS.iter().any(|name| is_path_ident(ty, name))
}
