// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, DError)]
pub enum ErrorKind {
    #[error("Couldn't load file {0}: {1}")]
    FileLoad(String, String),

    #[error("Malformed record in {0} at line {1}: {2}")]
    MalformedRecord(String, u64, String),
}
