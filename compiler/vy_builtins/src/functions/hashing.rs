//! `sha256` and `keccak256` over a literal preimage.

use sha2::{Digest, Sha256 as Sha256Hasher};
use sha3::Keccak256 as Keccak256Hasher;
use vy_ir::literal::encode_hex;
use vy_ir::{ConstValue, FoldResult, Literal, NodeId, SyntaxTree};

use crate::args::{byte_string, literal_args};
use crate::definition::{BuiltinFunction, Foldable};

/// `sha256(data) -> bytes32`
pub struct Sha256;

impl BuiltinFunction for Sha256 {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Sha256 {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 1)?;
        let preimage = byte_string(args[0])?;
        let digest = Sha256Hasher::digest(&preimage);
        Ok(ConstValue::Literal(Literal::Hex(encode_hex(&digest))))
    }
}

/// `keccak256(data) -> bytes32`
pub struct Keccak256;

impl BuiltinFunction for Keccak256 {
    fn name(&self) -> &'static str {
        "keccak256"
    }

    fn as_foldable(&self) -> Option<&dyn Foldable> {
        Some(self)
    }
}

impl Foldable for Keccak256 {
    fn evaluate(&self, tree: &SyntaxTree, call: NodeId) -> FoldResult<ConstValue> {
        let args = literal_args(tree, call, 1)?;
        let preimage = byte_string(args[0])?;
        let digest = Keccak256Hasher::digest(&preimage);
        Ok(ConstValue::Literal(Literal::Hex(encode_hex(&digest))))
    }
}
