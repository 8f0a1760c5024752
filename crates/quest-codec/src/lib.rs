//! # quest-codec
//!
//! Line-oriented text persistence for goal records.
//!
//! The format is one score line followed by one record per line:
//!
//! ```text
//! 170
//! SimpleGoal:Run a marathon,Finish a full marathon,1000,false
//! EternalGoal:Read Scripture,Daily reading,100
//! ChecklistGoal:Attend the temple,Monthly attendance,50,10,500,3
//! ```
//!
//! [`encode`] and [`decode`] are inverses for any record whose name and
//! description avoid the `:` and `,` delimiters. The format has no
//! escaping, so fields containing delimiters do not survive a round trip.

pub mod codec;
pub mod error;

pub use codec::{decode, encode};
pub use error::FormatError;
