use crate::domain::model::ObfuscationSettings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cosmetic masking of comma separated values in selected output lines.
///
/// The first `header_lines` lines are left alone. After that every
/// `every_nth` line is split on commas, each trimmed token gets one randomly
/// chosen character replaced by the placeholder, and the tokens are joined
/// back with `", "`. Line and token counts never change.
pub struct Obfuscator<R: Rng> {
    settings: ObfuscationSettings,
    rng: R,
}

impl Obfuscator<StdRng> {
    /// Seeded when `settings.seed` is set, otherwise drawn from OS entropy.
    pub fn from_settings(settings: ObfuscationSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> Obfuscator<R> {
    pub fn with_rng(settings: ObfuscationSettings, rng: R) -> Self {
        Self { settings, rng }
    }

    pub fn is_candidate(&self, line_index: usize) -> bool {
        let every_nth = self.settings.every_nth.max(1);
        line_index >= self.settings.header_lines
            && (line_index - self.settings.header_lines) % every_nth == 0
    }

    /// Returns the transformed text and how many lines were masked.
    pub fn obfuscate_text(&mut self, text: &str) -> (String, usize) {
        let mut out = String::with_capacity(text.len());
        let mut masked = 0;

        for (index, segment) in text.split_inclusive('\n').enumerate() {
            if !self.is_candidate(index) {
                out.push_str(segment);
                continue;
            }

            let (content, terminator) = split_terminator(segment);
            out.push_str(&self.obfuscate_line(content));
            out.push_str(terminator);
            masked += 1;
        }

        tracing::debug!("Masked {} lines", masked);
        (out, masked)
    }

    pub fn obfuscate_line(&mut self, line: &str) -> String {
        line.split(',')
            .map(|token| self.obfuscate_token(token.trim()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn obfuscate_token(&mut self, token: &str) -> String {
        let len = token.chars().count();
        if len == 0 {
            return String::new();
        }

        let target = self.rng.gen_range(0..len);
        token
            .chars()
            .enumerate()
            .map(|(i, c)| if i == target { self.settings.placeholder } else { c })
            .collect()
    }
}

fn split_terminator(segment: &str) -> (&str, &str) {
    if let Some(content) = segment.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = segment.strip_suffix('\n') {
        (content, "\n")
    } else {
        (segment, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Obfuscator<StdRng> {
        Obfuscator::from_settings(ObfuscationSettings {
            seed: Some(seed),
            ..ObfuscationSettings::default()
        })
    }

    #[test]
    fn test_candidate_selection_skips_header() {
        let obfuscator = seeded(1);
        let candidates: Vec<usize> = (0..20).filter(|i| obfuscator.is_candidate(*i)).collect();
        assert_eq!(candidates, vec![3, 8, 13, 18]);
    }

    #[test]
    fn test_single_char_tokens_are_always_replaced() {
        let mut obfuscator = seeded(7);
        let (out, masked) = obfuscator.obfuscate_text("line0\nline1\nline2\nA,B,C\nline4\n");
        assert_eq!(out, "line0\nline1\nline2\n*, *, *\nline4\n");
        assert_eq!(masked, 1);
    }

    #[test]
    fn test_token_shape_is_preserved() {
        let mut obfuscator = seeded(42);
        let line = "day1 514579,  Elapsed: 3 millis ,x,, ümlaut";
        let masked = obfuscator.obfuscate_line(line);

        let before: Vec<&str> = line.split(',').map(str::trim).collect();
        let after: Vec<&str> = masked.split(", ").collect();
        assert_eq!(before.len(), after.len());

        for (original, changed) in before.iter().zip(after.iter()) {
            assert_eq!(original.chars().count(), changed.chars().count());
            let differing = original
                .chars()
                .zip(changed.chars())
                .filter(|(a, b)| a != b)
                .count();
            if original.is_empty() {
                assert!(changed.is_empty());
            } else {
                assert_eq!(differing, 1, "{:?} -> {:?}", original, changed);
                assert!(changed.contains('*'));
            }
        }
    }

    #[test]
    fn test_non_candidate_lines_pass_through() {
        let mut obfuscator = seeded(3);
        let text = "a,b\nc,d\ne,f\ng,h\n1,2\n3,4\n5,6\n7,8\n9,0\n";
        let (out, masked) = obfuscator.obfuscate_text(text);

        let original: Vec<&str> = text.lines().collect();
        let changed: Vec<&str> = out.lines().collect();
        assert_eq!(original.len(), changed.len());
        assert_eq!(masked, 2);
        for (i, (a, b)) in original.iter().zip(changed.iter()).enumerate() {
            if i == 3 || i == 8 {
                assert_eq!(*b, "*, *");
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let mut obfuscator = Obfuscator::from_settings(ObfuscationSettings {
            header_lines: 0,
            every_nth: 2,
            placeholder: '#',
            seed: Some(9),
        });
        let (out, masked) = obfuscator.obfuscate_text("x\r\nkeep\r\ny,z");
        assert_eq!(out, "#\r\nkeep\r\n#, #");
        assert_eq!(masked, 2);
    }

    #[test]
    fn test_same_seed_same_output() {
        let text = "h\nh\nh\nalpha,beta,gamma\nrest\n";
        let (first, _) = seeded(11).obfuscate_text(text);
        let (second, _) = seeded(11).obfuscate_text(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text() {
        let mut obfuscator = seeded(0);
        assert_eq!(obfuscator.obfuscate_text(""), (String::new(), 0));
    }
}
