use thiserror::Error as DError;

#[derive(Debug, Clone, DError, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Filtering left an empty matrix ({users} users, {items} items retained)")]
    EmptyMatrix { users: usize, items: usize },

    #[error("Latent feature dimension must be at least 1")]
    ZeroFeatureDimension,
}
