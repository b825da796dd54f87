//! The scalar data type API for the [`ndbuf`](https://docs.rs/ndbuf/latest/ndbuf/index.html) crate.
//!
//! Data types tag the scalar element kind of numeric buffers. The set is
//! closed and fixed at build time; collaborating layers (storage, casting,
//! serialization) treat the variants as opaque tags and rely on this crate
//! for the bidirectional mapping between each data type and its textual
//! representations.
//!
//! ## Licence
//! `ndbuf_data_type` is licensed under either of
//!  - the Apache License, Version 2.0 [LICENSE-APACHE](https://docs.rs/crate/ndbuf_data_type/latest/source/LICENCE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license [LICENSE-MIT](https://docs.rs/crate/ndbuf_data_type/latest/source/LICENCE-MIT) or <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

mod data_type;

pub use data_type::{DataType, DataTypeError};
