/// XORs `data` with a repeating `key`. Applying it twice with the same key
/// yields the input again.
pub fn xor(data: &[u8], key: &[u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        out.push(data[i] ^ key[i % key.len()]);
    }
    out
}

/// Reveals an obfuscated UTF-8 string, or `None` if the bytes don't decode.
pub fn reveal(obfuscated: &[u8], key: &[u8; 32]) -> Option<String> {
    String::from_utf8(xor(obfuscated, key)).ok()
}
