use crate::{
    config::DiscriminatorPolicy,
    entity::ODATA_TYPE_KEY,
    error::DecodeError,
    obs::sink::{self, CodecEvent},
    serialize::{CodecContext, ParseNode},
    value::ValueTag,
};
use std::collections::HashMap;

///
/// Discriminator
///
/// Tag-to-factory table for one polymorphic family. Resolution reads the
/// `@odata.type` member of an object node and returns an empty instance of
/// the matching variant; fields are populated afterwards.
///

pub struct Discriminator<F> {
    family: &'static str,
    base_tag: &'static str,
    base: fn() -> F,
    variants: HashMap<&'static str, fn() -> F>,
}

impl<F> Discriminator<F> {
    #[must_use]
    pub fn builder(
        family: &'static str,
        base_tag: &'static str,
        base: fn() -> F,
    ) -> DiscriminatorBuilder<F> {
        DiscriminatorBuilder {
            inner: Self {
                family,
                base_tag,
                base,
                variants: HashMap::new(),
            },
        }
    }

    #[must_use]
    pub const fn family(&self) -> &'static str {
        self.family
    }

    #[must_use]
    pub const fn base_tag(&self) -> &'static str {
        self.base_tag
    }

    /// Whether `tag` selects a registered subtype (the base tag excluded).
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.variants.contains_key(tag)
    }

    /// Registered subtype tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.keys().copied()
    }

    /// Construct the variant named by the node's discriminator.
    ///
    /// | tag | lenient | strict | require_tag |
    /// |---|---|---|---|
    /// | absent or null | base | base | error |
    /// | base or known | that type | that type | that type |
    /// | unknown | base (reported) | error | error |
    ///
    /// Nodes other than objects are a type mismatch under every policy.
    pub fn resolve(&self, node: &dyn ParseNode, cx: &CodecContext<'_>) -> Result<F, DecodeError> {
        if node.tag() != ValueTag::Object {
            return Err(DecodeError::type_mismatch("Object", node.tag()));
        }
        let policy = cx.config().discriminator;

        let tag = match node.child_node(ODATA_TYPE_KEY) {
            Some(tag_node) if !tag_node.is_null() => Some(tag_node.as_str().ok_or_else(|| {
                DecodeError::type_mismatch("Text", tag_node.tag()).at(ODATA_TYPE_KEY)
            })?),
            _ => None,
        };

        let Some(tag) = tag else {
            return match policy {
                DiscriminatorPolicy::RequireTag => Err(DecodeError::MissingDiscriminator {
                    family: self.family,
                }),
                DiscriminatorPolicy::Lenient | DiscriminatorPolicy::Strict => Ok((self.base)()),
            };
        };

        if tag == self.base_tag {
            return Ok((self.base)());
        }
        if let Some(factory) = self.variants.get(tag) {
            return Ok(factory());
        }

        match policy {
            DiscriminatorPolicy::Lenient => {
                sink::record(CodecEvent::DiscriminatorFallback {
                    family: self.family,
                    tag,
                });
                Ok((self.base)())
            }
            DiscriminatorPolicy::Strict | DiscriminatorPolicy::RequireTag => {
                Err(DecodeError::UnresolvedDiscriminator {
                    family: self.family,
                    tag: tag.to_string(),
                })
            }
        }
    }
}

impl<F> std::fmt::Debug for Discriminator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.tags().collect();
        tags.sort_unstable();

        f.debug_struct("Discriminator")
            .field("family", &self.family)
            .field("base_tag", &self.base_tag)
            .field("tags", &tags)
            .finish()
    }
}

///
/// DiscriminatorBuilder
///

pub struct DiscriminatorBuilder<F> {
    inner: Discriminator<F>,
}

impl<F> DiscriminatorBuilder<F> {
    /// Register a subtype.
    ///
    /// Panics on a repeated tag; family tables are static declarations.
    #[must_use]
    pub fn variant(mut self, tag: &'static str, factory: fn() -> F) -> Self {
        assert!(
            tag != self.inner.base_tag && self.inner.variants.insert(tag, factory).is_none(),
            "duplicate discriminator tag {tag:?} in family {}",
            self.inner.family
        );

        self
    }

    #[must_use]
    pub fn build(self) -> Discriminator<F> {
        self.inner
    }
}
