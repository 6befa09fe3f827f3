//! Referral Codes
//!
//! Purely cosmetic 4-character codes drawn from `A-Z0-9`, regenerated on
//! every dashboard mount. No uniqueness guarantee, no server registration.

/// The 36-symbol code alphabet.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters per code.
pub const CODE_LEN: usize = 4;

/// Map uniform draws in `[0, 1)` to code characters. Out-of-range draws are
/// clamped so a pathological random source still yields a valid code.
pub fn code_from_draws(draws: &[f64; CODE_LEN]) -> String {
    draws
        .iter()
        .map(|d| {
            let idx = (d.clamp(0.0, 1.0) * CODE_ALPHABET.len() as f64) as usize;
            CODE_ALPHABET[idx.min(CODE_ALPHABET.len() - 1)] as char
        })
        .collect()
}

/// Generate a fresh code from `Math.random`, non-cryptographic by design.
pub fn generate_code() -> String {
    let draws = [
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
        js_sys::Math::random(),
    ];
    code_from_draws(&draws)
}

/// Display / clipboard form of a code.
pub fn share_code(code: &str) -> String {
    format!("AVIA-{code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_and_alphabet() {
        let code = code_from_draws(&[0.1, 0.4, 0.7, 0.99]);
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_draw_boundaries() {
        assert_eq!(code_from_draws(&[0.0, 0.0, 0.0, 0.0]), "AAAA");
        // Just under 1.0 lands on the last symbol
        assert_eq!(code_from_draws(&[0.9999, 0.9999, 0.9999, 0.9999]), "9999");
    }

    #[test]
    fn test_out_of_range_draws_are_clamped() {
        let code = code_from_draws(&[-0.5, 1.5, 0.5, 2.0]);
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_share_form() {
        assert_eq!(share_code("K7Q2"), "AVIA-K7Q2");
    }
}
