//! The tagged-JSON wire codec.
//!
//! Every document kind travels as `{"t": Kind, "c": content}` with the keys
//! in that order, the whole document as `[{"unMeta": meta}, blocks]`. The
//! two submodules are exact inverses over well-formed wires: decoding a
//! value this module encoded reproduces the tree, and re-encoding a decoded
//! wire reproduces the wire.

mod decode;
mod encode;

pub use decode::{decode_block, decode_doc, decode_inline, decode_meta};
pub use encode::{encode_block, encode_doc, encode_inline, encode_meta};
