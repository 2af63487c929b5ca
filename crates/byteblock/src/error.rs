use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = BlockError> = core::result::Result<T, E>;

/// Everything that can go wrong while editing a [`ByteBlock`].
///
/// A call that returns an error leaves the block exactly as it was.
///
/// [`ByteBlock`]: crate::ByteBlock
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// A size or range parameter makes no sense on its own, independent of
    /// the block it is applied to.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An edit addressed bytes outside the block, or tried to edit an empty
    /// block.
    #[error("{what}: position {position} is out of range for a block of {len} bytes")]
    OutOfRange {
        /// The operation that was rejected.
        what: &'static str,
        /// The offending position or end offset.
        position: usize,
        /// The block length at the time of the call.
        len: usize,
    },
    /// The allocator could not provide a buffer of the requested size.
    #[error("failed to allocate {requested} bytes")]
    AllocationFailure {
        /// Size of the buffer that was requested.
        requested: usize,
    },
}

impl BlockError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        log::debug!("rejecting call: {reason}");
        Self::InvalidArgument(reason)
    }

    pub(crate) fn out_of_range(what: &'static str, position: usize, len: usize) -> Self {
        log::debug!("rejecting {what}: position {position}, length {len}");
        Self::OutOfRange {
            what,
            position,
            len,
        }
    }

    pub(crate) fn allocation(requested: usize) -> Self {
        log::debug!("allocation of {requested} bytes failed");
        Self::AllocationFailure { requested }
    }
}
