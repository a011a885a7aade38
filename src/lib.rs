//! Load a delimited text file into memory and reduce it to one record per
//! unique key, keeping the record with the greatest sort-key value.
//!
//! Fields are split on a literal delimiter; there is no quote or escape
//! handling, so a field containing the delimiter will be mis-split.

pub mod dedup;
pub mod load;
pub mod table;
pub mod write;
