//! Single-item RLP byte strings, the canonical binary form of every value type.

use ::rlp::Rlp;

use crate::TypesError;

/// RLP-encode `bytes` as one byte string.
pub(crate) fn encode_item(bytes: &[u8]) -> Vec<u8> {
    ::rlp::encode(&bytes.to_vec()).to_vec()
}

/// Decode one RLP byte string that must span the whole buffer.
pub(crate) fn decode_item(kind: &str, encoded: &[u8]) -> Result<Vec<u8>, TypesError> {
    let invalid = |reason: String| TypesError::InvalidRlp {
        kind: kind.to_string(),
        reason,
    };

    let rlp = Rlp::new(encoded);
    if rlp.is_list() {
        return Err(invalid("expected a byte string but found a list".into()));
    }
    let info = rlp.payload_info().map_err(|e| invalid(e.to_string()))?;
    if info.header_len + info.value_len != encoded.len() {
        return Err(invalid(format!(
            "declared length {} does not match the {} remaining bytes",
            info.value_len,
            encoded.len().saturating_sub(info.header_len)
        )));
    }
    rlp.data()
        .map(|data| data.to_vec())
        .map_err(|e| invalid(e.to_string()))
}
