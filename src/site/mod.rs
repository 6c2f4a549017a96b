//! Logic behind the static BBTM display page: the token price table and
//! the comment/rating store it keeps in local storage.

pub mod comments;
pub mod pricing;
