//! Error types for scene manipulation.

use thiserror::Error;

use crate::scene::{GroupId, LayerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The referenced layer does not exist
    #[error("Layer {0} not found")]
    LayerNotFound(LayerId),

    /// The referenced group does not exist
    #[error("Group {0} not found")]
    GroupNotFound(GroupId),
}

pub type SceneResult<T> = Result<T, SceneError>;
