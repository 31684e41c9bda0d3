use crate::{config::CodecConfig, error::DepthLimited};

///
/// CodecContext
///
/// Per-call state threaded through every codec: the active configuration
/// and the current object nesting depth.
///

#[derive(Debug)]
pub struct CodecContext<'a> {
    config: &'a CodecConfig,
    depth: usize,
}

impl<'a> CodecContext<'a> {
    #[must_use]
    pub const fn new(config: &'a CodecConfig) -> Self {
        Self { config, depth: 0 }
    }

    #[must_use]
    pub const fn config(&self) -> &'a CodecConfig {
        self.config
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Run `f` one object level deeper, failing once `max_depth` is exceeded.
    pub fn nested<R, E: DepthLimited>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E> {
        let limit = self.config.max_depth;
        if self.depth >= limit {
            return Err(E::depth_limit_exceeded(limit));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }

    /// Fail if `levels` more containers below the current depth would
    /// pass `max_depth`.
    pub fn admit<E: DepthLimited>(&self, levels: usize) -> Result<(), E> {
        let limit = self.config.max_depth;
        if self.depth.saturating_add(levels) > limit {
            return Err(E::depth_limit_exceeded(limit));
        }

        Ok(())
    }
}
