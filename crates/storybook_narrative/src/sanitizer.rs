//! Cleanup of raw text-model output.
//!
//! Small models tend to echo the instruction lines of the prompt
//! (`Scene 2:`, `Write Scene 2 of ...`) or return next to nothing. The
//! sanitizer strips echoed lines when the output opens with one, and replaces
//! anything too short with a fixed sentence for the genre.

/// Minimum length, in characters, of a usable scene text.
pub const MIN_SCENE_CHARS: usize = 20;

const ECHO_MARKERS: [&str; 2] = ["Scene", "Write"];

/// The sentence used when the model produced too little text.
///
/// # Examples
///
/// ```
/// use storybook_narrative::fallback_text;
///
/// assert_eq!(
///     fallback_text("fantasy"),
///     "In this scene of our fantasy story, the adventure continues with new developments and characters facing challenges."
/// );
/// ```
pub fn fallback_text(genre: &str) -> String {
    format!(
        "In this scene of our {} story, the adventure continues with new developments and characters facing challenges.",
        genre
    )
}

/// Clean raw model output into scene text of at least [`MIN_SCENE_CHARS`] characters.
///
/// Echo stripping only applies when the trimmed output starts with `"Scene"`.
/// In that case every line that starts with `"Scene"` or `"Write"` is dropped
/// and the rest are joined with single spaces. If every line was dropped, the
/// trimmed output is kept as is.
///
/// # Examples
///
/// ```
/// use storybook_narrative::sanitize;
///
/// let raw = "Scene 1: Write about a dragon.\nThe dragon flew over the mountains and breathed fire.";
/// assert_eq!(sanitize(raw, "fantasy"), "The dragon flew over the mountains and breathed fire.");
/// ```
pub fn sanitize(raw: &str, genre: &str) -> String {
    let trimmed = raw.trim();

    let candidate = if trimmed.starts_with(ECHO_MARKERS[0]) {
        let kept: Vec<&str> = trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !is_echo_line(line))
            .collect();

        if kept.is_empty() {
            trimmed.to_string()
        } else {
            kept.join(" ")
        }
    } else {
        trimmed.to_string()
    };

    if candidate.chars().count() < MIN_SCENE_CHARS {
        tracing::debug!(
            length = candidate.chars().count(),
            "Scene text too short, using fallback"
        );
        return fallback_text(genre);
    }

    candidate
}

fn is_echo_line(line: &str) -> bool {
    ECHO_MARKERS.iter().any(|marker| line.starts_with(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_echoed_prompt_lines() {
        let raw = "Scene 1: Write about a dragon.\nThe dragon flew over the mountains and breathed fire.";
        let text = sanitize(raw, "fantasy");

        assert_eq!(text, "The dragon flew over the mountains and breathed fire.");
        assert!(!text.contains("Scene"));
    }

    #[test]
    fn test_whitespace_only_uses_fallback() {
        let text = sanitize("  ", "mystery");
        assert_eq!(text, fallback_text("mystery"));
        assert!(text.chars().count() >= MIN_SCENE_CHARS);
    }

    #[test]
    fn test_empty_string_uses_fallback() {
        assert_eq!(sanitize("", "comedy"), fallback_text("comedy"));
    }

    #[test]
    fn test_fallback_is_stable() {
        for genre in ["fantasy", "sci-fi", "mystery", "comedy", ""] {
            let fallback = fallback_text(genre);
            assert_eq!(sanitize(&fallback, genre), fallback);
        }
    }

    #[test]
    fn test_joins_surviving_lines_with_spaces() {
        let raw = "Scene 3:\n  The ship drifted.  \n\nWrite more here\n  Stars wheeled overhead slowly. ";
        assert_eq!(
            sanitize(raw, "sci-fi"),
            "The ship drifted. Stars wheeled overhead slowly."
        );
    }

    #[test]
    fn test_only_echo_lines_keeps_original() {
        let raw = "Scene 2: the long road north\nWrite Scene 2 of a story";
        assert_eq!(sanitize(raw, "fantasy"), raw);
    }

    #[test]
    fn test_echo_lines_kept_when_output_does_not_open_with_scene() {
        let raw = "The castle was quiet.\nScene 2: the gates opened.";
        assert_eq!(sanitize(raw, "fantasy"), raw);
    }

    #[test]
    fn test_short_output_after_stripping_uses_fallback() {
        let raw = "Scene 1:\nHe ran.";
        assert_eq!(sanitize(raw, "comedy"), fallback_text("comedy"));
    }

    #[test]
    fn test_threshold_counts_characters() {
        // 19 characters, more than 20 bytes
        let raw = "ééééééééééééééééééé";
        assert_eq!(sanitize(raw, "fantasy"), fallback_text("fantasy"));

        let raw = "éééééééééééééééééééé";
        assert_eq!(sanitize(raw, "fantasy"), raw);
    }
}
