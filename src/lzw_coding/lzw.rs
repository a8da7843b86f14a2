use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::error::CodecError;

/// Codes 0-255 stand for the single bytes. New strings are numbered from here.
pub const FIRST_FREE_CODE: u32 = 256;

/// Encode `data` into LZW codes. The dictionary grows by one string per emitted code (except the
/// last) and is never capped.
pub fn lzw_encode(data: &[u8]) -> Vec<u32> {
    let mut dict: FxHashMap<Vec<u8>, u32> = FxHashMap::default();
    (0..FIRST_FREE_CODE).for_each(|code| {
        dict.insert(vec![code as u8], code);
    });
    let mut next_code = FIRST_FREE_CODE;

    let mut codes = Vec::with_capacity(data.len() / 2);
    let mut current: Vec<u8> = Vec::new();
    for &byte in data {
        current.push(byte);
        if dict.contains_key(&current) {
            continue;
        }
        // `current` now holds the new candidate; everything before its last byte is known.
        let known = &current[..current.len() - 1];
        codes.push(dict[known]);
        trace!("Adding code {} for a {} byte string", next_code, current.len());
        dict.insert(std::mem::replace(&mut current, vec![byte]), next_code);
        next_code += 1;
    }
    if !current.is_empty() {
        codes.push(dict[&current]);
    }

    debug!(
        "LZW encoded {} bytes into {} codes, dictionary holds {} entries.",
        data.len(),
        codes.len(),
        dict.len()
    );
    codes
}

/// Decode LZW codes back into bytes, rebuilding the encoder's dictionary as it goes.
pub fn lzw_decode(codes: &[u32]) -> Result<Vec<u8>, CodecError> {
    // Code -> string. The vec index is the code, so its length is always the next free code.
    let mut dict: Vec<Vec<u8>> = (0..FIRST_FREE_CODE).map(|code| vec![code as u8]).collect();

    let mut output = Vec::with_capacity(codes.len() * 2);
    let mut iter = codes.iter();
    let mut previous: Vec<u8> = match iter.next() {
        None => return Ok(output),
        Some(&code) => dict
            .get(code as usize)
            .cloned()
            .ok_or(CodecError::UnknownCode {
                code,
                next: FIRST_FREE_CODE,
            })?,
    };
    output.extend_from_slice(&previous);

    for &code in iter {
        let next_code = dict.len() as u32;
        let current = if code == next_code {
            // The encoder used the string it had only just added: previous + its own first byte
            trace!("Code {} refers to the entry being defined", code);
            let mut s = previous.clone();
            s.push(previous[0]);
            s
        } else {
            dict.get(code as usize)
                .cloned()
                .ok_or(CodecError::UnknownCode {
                    code,
                    next: next_code,
                })?
        };

        let mut entry = previous;
        entry.push(current[0]);
        dict.push(entry);

        output.extend_from_slice(&current);
        previous = current;
    }

    debug!(
        "LZW decoded {} codes into {} bytes, dictionary holds {} entries.",
        codes.len(),
        output.len(),
        dict.len()
    );
    Ok(output)
}
