//! Size estimation for the compact section header (cshdr) encoding.
//!
//! cshdr is a variable-length, default-eliding alternative encoding of the
//! ELF section header table. This crate never materializes encoded bytes;
//! it only answers "how many bytes would record X occupy", so the numbers
//! can be compared against general-purpose compressors applied to the raw
//! table region.
//!
//! Everything here is pure and stateless: estimation of one record never
//! reads or writes anything outside that record, so callers may fan out
//! over records and files freely and fold the results afterwards.

mod estimate;
mod record;
mod varint;

pub use estimate::{DEFAULT_SH_TYPE, record_size, table_size};
pub use record::SectionHeader;
pub use varint::{MAX_VARINT_BYTES, varint_size};
