// src/pick.rs
//
// Random index selection for the card rotation.
//
// Production selection draws entropy bytes from `getrandom` (backed by
// crypto.getRandomValues in the browser) and maps them onto [0, len) with
// rejection sampling, so every remaining card has the same probability of
// coming up. The trait seam exists so tests can script the draw order.

pub trait IndexPicker {
    /// Returns an index in `[0, len)`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

pub struct EntropyPicker;

impl IndexPicker for EntropyPicker {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        if len <= 1 {
            return 0;
        }
        let len = len as u32; // datasets are far below u32::MAX entries
        // Largest multiple of len that fits in a u32 draw; values past it
        // would bias the low indices and are redrawn.
        let zone = (u32::MAX / len) * len;
        const MAX_ATTEMPTS: usize = 16;
        for _ in 0..MAX_ATTEMPTS {
            let mut buf = [0u8; 4];
            if getrandom::getrandom(&mut buf).is_err() {
                break;
            }
            let draw = u32::from_le_bytes(buf);
            if draw < zone {
                return (draw % len) as usize;
            }
        }
        // Entropy source failed or kept landing in the rejection zone
        // (probability below 2^-16); degrade to the first candidate.
        0
    }
}
