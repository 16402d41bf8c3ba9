use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    Error,
    extractor::{DelegateWalkExtractor, DelegatingExtractor, NativeExtractor, PassThroughExtractor},
};

/// Names one of the extractors shipped with this crate. Allows applications to choose the
/// extractor matching their connection pool in a configuration file, or an environment variable.
///
/// ```
/// use native_handles::ExtractorKind;
///
/// let kind: ExtractorKind = "delegate-walk".parse()?;
/// assert_eq!(ExtractorKind::DelegateWalk, kind);
/// assert_eq!("delegate-walk", kind.to_string());
/// # Ok::<(), native_handles::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractorKind {
    /// [`DelegatingExtractor`]
    Delegating,
    /// [`DelegateWalkExtractor`], with default settings.
    DelegateWalk,
    /// [`PassThroughExtractor`]
    #[default]
    PassThrough,
}

impl ExtractorKind {
    /// Instantiates the extractor. Call this once and share the result.
    pub fn extractor(self) -> Arc<dyn NativeExtractor> {
        match self {
            ExtractorKind::Delegating => Arc::new(DelegatingExtractor::new()),
            ExtractorKind::DelegateWalk => Arc::new(DelegateWalkExtractor::new()),
            ExtractorKind::PassThrough => Arc::new(PassThroughExtractor),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ExtractorKind::Delegating => "delegating",
            ExtractorKind::DelegateWalk => "delegate-walk",
            ExtractorKind::PassThrough => "pass-through",
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delegating" => Ok(ExtractorKind::Delegating),
            "delegate-walk" => Ok(ExtractorKind::DelegateWalk),
            "pass-through" | "none" => Ok(ExtractorKind::PassThrough),
            _ => Err(Error::UnknownExtractor {
                name: s.to_owned(),
            }),
        }
    }
}
