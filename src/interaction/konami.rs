use std::collections::VecDeque;

pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Sliding window over the most recent key codes.
#[derive(Debug, Clone)]
pub struct KeySequence {
    target: Vec<u32>,
    buffer: VecDeque<u32>,
}

impl Default for KeySequence {
    fn default() -> Self {
        Self::new(&KONAMI_SEQUENCE)
    }
}

impl KeySequence {
    pub fn new(target: &[u32]) -> Self {
        Self {
            target: target.to_vec(),
            buffer: VecDeque::with_capacity(target.len() + 1),
        }
    }

    /// Records a key code; true when the window now equals the target exactly.
    pub fn push(&mut self, code: u32) -> bool {
        self.buffer.push_back(code);
        if self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }
        self.buffer.iter().eq(self.target.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(seq: &mut KeySequence, codes: &[u32]) -> bool {
        codes.iter().fold(false, |_, c| seq.push(*c))
    }

    #[test]
    fn test_exact_sequence_matches() {
        let mut seq = KeySequence::default();
        assert!(feed(&mut seq, &KONAMI_SEQUENCE));
    }

    #[test]
    fn test_any_single_deviation_fails() {
        for i in 0..KONAMI_SEQUENCE.len() {
            let mut codes = KONAMI_SEQUENCE;
            codes[i] = 13;
            let mut seq = KeySequence::default();
            assert!(!feed(&mut seq, &codes), "deviation at {i} matched");
        }
    }

    #[test]
    fn test_leading_noise_is_dropped() {
        let mut seq = KeySequence::default();
        feed(&mut seq, &[65, 66, 38]);
        assert!(feed(&mut seq, &KONAMI_SEQUENCE));
    }

    #[test]
    fn test_partial_prefix_does_not_match() {
        let mut seq = KeySequence::default();
        assert!(!feed(&mut seq, &KONAMI_SEQUENCE[..9]));
    }
}
