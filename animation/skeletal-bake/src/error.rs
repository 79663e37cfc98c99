use thiserror::Error;

/// Error types for skeleton building and animation baking
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BakeError {
    /// The root node's bind transform cannot be inverted
    #[error(
        "Animation '{animation}': root bind transform is singular (determinant {determinant}), cannot bake"
    )]
    SingularRootTransform { animation: String, determinant: f32 },

    /// A baked matrix contained NaN or infinite components
    #[error("Animation '{animation}': non-finite matrix at frame {frame}, bone {bone}")]
    NonFiniteMatrix {
        animation: String,
        frame: usize,
        bone: usize,
    },

    /// The frame table of a clip cannot be allocated
    #[error(
        "Animation '{animation}': frame table of {frames} frames x {bones} bones is too large"
    )]
    FrameTableTooLarge {
        animation: String,
        frames: usize,
        bones: usize,
    },

    /// A frame output buffer does not hold one matrix per bone
    #[error("Frame buffer holds {actual} matrices, expected {expected}")]
    FrameBufferSize { expected: usize, actual: usize },

    /// Bake options are out of range
    #[error("Invalid bake options: {0}")]
    InvalidOptions(String),

    /// The worker pool for parallel baking could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl BakeError {
    /// Whether this error means the clip itself could not be baked.
    ///
    /// Callers loading a whole asset use this to decide between aborting
    /// the load and skipping the offending animation.
    pub fn is_fatal_bake(&self) -> bool {
        matches!(
            self,
            Self::SingularRootTransform { .. }
                | Self::NonFiniteMatrix { .. }
                | Self::FrameTableTooLarge { .. }
        )
    }

    /// Name of the animation the error belongs to, if any
    pub fn animation(&self) -> Option<&str> {
        match self {
            Self::SingularRootTransform { animation, .. }
            | Self::NonFiniteMatrix { animation, .. }
            | Self::FrameTableTooLarge { animation, .. } => Some(animation),
            Self::FrameBufferSize { .. } | Self::InvalidOptions(_) | Self::ThreadPool(_) => None,
        }
    }
}

/// Result type using BakeError
pub type Result<T> = std::result::Result<T, BakeError>;
