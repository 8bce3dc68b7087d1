//! Wire contracts shared between the article studio frontend and its REST backend.

pub mod domain;
pub mod shared;
pub mod usecases;
